//! Dependency table rendering

use crate::domain::{Dependency, VersionChangeType};
use colored::Colorize;
use std::io::Write;

const MIN_PATH_WIDTH: usize = 20;
const MAX_PATH_WIDTH: usize = 50;
const VERSION_WIDTH: usize = 15;
const CHANGE_WIDTH: usize = 6;
const TYPE_WIDTH: usize = 8;

/// Render a numbered dependency table
///
/// Rows are numbered `i/n` in list order, matching the positions accepted
/// by the selection parser.
pub fn render_dependency_table(
    deps: &[Dependency],
    color: bool,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    if deps.is_empty() {
        return Ok(());
    }

    let index_width = format!("{}/{}", deps.len(), deps.len()).len();
    let path_width = deps
        .iter()
        .map(|d| d.path.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(MIN_PATH_WIDTH, MAX_PATH_WIDTH);
    let widths = [
        index_width,
        path_width,
        VERSION_WIDTH,
        VERSION_WIDTH,
        CHANGE_WIDTH,
        TYPE_WIDTH,
    ];

    let header = [
        pad("#", index_width),
        pad("Package", path_width),
        pad("Current", VERSION_WIDTH),
        pad("New", VERSION_WIDTH),
        pad("Change", CHANGE_WIDTH),
        pad("Type", TYPE_WIDTH),
    ];
    let separator = border(&widths, "┼");
    let bottom = border(&widths, "┴");

    if color {
        let header: Vec<String> = header.iter().map(|h| h.cyan().bold().to_string()).collect();
        writeln!(writer, " {}", header.join(&format!(" {} ", "│".dimmed())))?;
        writeln!(writer, "{}", separator.dimmed())?;
    } else {
        writeln!(writer, " {}", header.join(" │ "))?;
        writeln!(writer, "{}", separator)?;
    }

    for (i, dep) in deps.iter().enumerate() {
        let index = pad(&format!("{}/{}", i + 1, deps.len()), index_width);
        let path = pad(&truncate(&dep.path, path_width), path_width);
        let current = pad(&truncate(&dep.version, VERSION_WIDTH), VERSION_WIDTH);
        let new_version = dep.new_version.as_deref().unwrap_or("");
        let change = match dep.new_version.as_deref() {
            Some(new) if dep.has_update() => VersionChangeType::from_versions(&dep.version, new),
            _ => VersionChangeType::Unknown,
        };
        let new = pad(&truncate(new_version, VERSION_WIDTH), VERSION_WIDTH);
        let change_col = pad(change.label(), CHANGE_WIDTH);
        let kind = pad(dep.kind_label(), TYPE_WIDTH);

        if color {
            let path = if dep.indirect {
                path.yellow()
            } else {
                path.green()
            };
            let change_col = match change {
                VersionChangeType::Major => change_col.red().bold(),
                VersionChangeType::Minor => change_col.yellow(),
                VersionChangeType::Patch => change_col.green(),
                VersionChangeType::Unknown => change_col.dimmed(),
            };
            let kind = if dep.indirect {
                kind.dimmed()
            } else {
                kind.cyan()
            };
            let sep = "│".dimmed();
            writeln!(
                writer,
                " {} {} {} {} {} {} {} {} {} {} {}",
                index.dimmed(),
                sep,
                path,
                sep,
                current.cyan(),
                sep,
                new.green().bold(),
                sep,
                change_col,
                sep,
                kind
            )?;
        } else {
            writeln!(
                writer,
                " {} │ {} │ {} │ {} │ {} │ {}",
                index, path, current, new, change_col, kind
            )?;
        }
    }

    if color {
        writeln!(writer, "{}", bottom.dimmed())?;
    } else {
        writeln!(writer, "{}", bottom)?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Truncate a string to `max_width` characters, ending with `…` when cut
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        return s.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut out: String = s.chars().take(max_width - 1).collect();
    out.push('…');
    out
}

fn pad(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

fn border(widths: &[usize], joint: &str) -> String {
    widths
        .iter()
        .map(|w| "─".repeat(w + 2))
        .collect::<Vec<_>>()
        .join(joint)
}
