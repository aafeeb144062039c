//! go.mod reader for Go projects
//!
//! Handles:
//! - require statements (single and block)
//! - // indirect markers
//! - replace directives (skipped)
//! - other directive blocks such as exclude and retract (skipped)

use super::{ManifestReader, MANIFEST_FILENAME};
use crate::domain::Dependency;
use crate::error::ManifestError;
use crate::update::canonical_order;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Reader for `<dir>/go.mod`
#[derive(Debug, Default, Clone, Copy)]
pub struct GoModReader;

impl GoModReader {
    pub fn new() -> Self {
        Self
    }
}

impl ManifestReader for GoModReader {
    fn read(&self, dir: &Path) -> Result<Vec<Dependency>, ManifestError> {
        let path = dir.join(MANIFEST_FILENAME);
        let content = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ManifestError::not_found(&path)
            } else {
                ManifestError::read_error(&path, e)
            }
        })?;
        parse_go_mod(&content, &path)
    }
}

// Regex for the module directive: module example.com/project
static MODULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^module\s+("[^"]+"|\S+)$"#).unwrap());

// Regex for a module version: v1.2.3, v0.0.0-20210101000000-abcdef, v2.0.0+incompatible
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v\d+\.\d+\.\d+(-[0-9A-Za-z.-]+)?(\+[0-9A-Za-z.-]+)?$").unwrap());

// Regex for the indirect marker inside a line comment
static INDIRECT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^indirect\b").unwrap());

/// Block the parser is currently inside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Require,
    Skipped,
}

/// Parse go.mod content into dependency records in canonical order
///
/// `path` is only used for error reporting.
pub fn parse_go_mod(content: &str, path: &Path) -> Result<Vec<Dependency>, ManifestError> {
    let mut dependencies = Vec::new();
    let mut has_module = false;
    let mut block: Option<(Block, usize)> = None;

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        let (code, comment) = split_comment(line);

        if code.is_empty() {
            continue;
        }

        if let Some((kind, _)) = block {
            if code == ")" {
                block = None;
                continue;
            }
            if kind == Block::Require {
                let dep = parse_require_entry(code, comment)
                    .map_err(|message| ManifestError::parse_error(path, line_no, message))?;
                dependencies.push(dep);
            }
            continue;
        }

        let (directive, rest) = match code.split_once(char::is_whitespace) {
            Some((directive, rest)) => (directive, rest.trim()),
            None => match code.split_once('(') {
                Some((directive, rest)) => (directive, format_open(rest)),
                None => (code, ""),
            },
        };

        if rest == "(" {
            let kind = if directive == "require" {
                Block::Require
            } else {
                Block::Skipped
            };
            block = Some((kind, line_no));
            continue;
        }

        match directive {
            "module" => {
                if !MODULE_RE.is_match(code) {
                    return Err(ManifestError::parse_error(
                        path,
                        line_no,
                        "malformed module directive",
                    ));
                }
                has_module = true;
            }
            "require" => {
                let dep = parse_require_entry(rest, comment)
                    .map_err(|message| ManifestError::parse_error(path, line_no, message))?;
                dependencies.push(dep);
            }
            // replace, exclude, retract, go, toolchain and friends carry no requirements
            _ => {}
        }
    }

    if let Some((_, start)) = block {
        return Err(ManifestError::parse_error(
            path,
            start,
            "unterminated block",
        ));
    }

    if !has_module {
        return Err(ManifestError::parse_error(path, 1, "missing module directive"));
    }

    Ok(canonical_order(dependencies))
}

/// `require(` with no space leaves the paren glued to the directive
fn format_open(rest: &str) -> &str {
    if rest.trim().is_empty() {
        "("
    } else {
        rest
    }
}

/// Split a line into trimmed code and the trimmed text of its `//` comment
fn split_comment(line: &str) -> (&str, &str) {
    match line.find("//") {
        Some(pos) => (line[..pos].trim(), line[pos + 2..].trim()),
        None => (line.trim(), ""),
    }
}

/// Parse `path version` from a require statement or block entry
fn parse_require_entry(code: &str, comment: &str) -> Result<Dependency, String> {
    let mut tokens = code.split_whitespace();
    let module = tokens
        .next()
        .map(|t| t.trim_matches('"'))
        .filter(|t| !t.is_empty())
        .ok_or_else(|| "require entry is missing a module path".to_string())?;
    let version = tokens
        .next()
        .ok_or_else(|| format!("missing version for {}", module))?;
    if tokens.next().is_some() {
        return Err(format!("unexpected tokens after {} {}", module, version));
    }
    if !VERSION_RE.is_match(version) {
        return Err(format!("malformed version '{}' for {}", version, module));
    }

    let indirect = INDIRECT_RE.is_match(comment);
    Ok(Dependency::new(module, version, indirect))
}
