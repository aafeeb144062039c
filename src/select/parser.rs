//! Selection expression parser
//!
//! Grammar (comma-separated clauses, case-insensitive):
//! - `all`: every dependency
//! - `3`: the dependency at 1-based position 3
//! - `2-5`: positions 2 through 5 inclusive
//! - `github.com/gin*`: paths matching a pattern (substring, `*` wildcards)
//!
//! Positions refer to the canonically ordered list shown to the user.

use crate::domain::Dependency;
use crate::error::SelectionError;

/// A single parsed clause of a selection expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// 1-based position
    Index(i64),
    /// Inclusive 1-based range
    Range { start: i64, end: i64 },
    /// Lower-cased name pattern
    Pattern(String),
}

impl Clause {
    /// Parse one trimmed, lower-cased clause
    pub fn parse(clause: &str) -> Result<Self, SelectionError> {
        if clause.contains('-') {
            let parts: Vec<&str> = clause.split('-').collect();
            if parts.len() != 2 {
                return Err(SelectionError::InvalidRange {
                    clause: clause.to_string(),
                });
            }
            let start = parse_bound(parts[0], clause)?;
            let end = parse_bound(parts[1], clause)?;
            return Ok(Clause::Range { start, end });
        }

        if let Ok(index) = clause.parse::<i64>() {
            return Ok(Clause::Index(index));
        }

        Ok(Clause::Pattern(clause.to_string()))
    }

    /// Resolve the clause against the displayed list
    pub fn resolve<'a>(&self, deps: &'a [Dependency]) -> Result<Vec<&'a Dependency>, SelectionError> {
        let len = deps.len();
        match self {
            Clause::Index(index) => {
                if *index < 1 || *index as u64 > len as u64 {
                    return Err(SelectionError::IndexOutOfRange { index: *index, len });
                }
                Ok(vec![&deps[(*index - 1) as usize]])
            }
            Clause::Range { start, end } => {
                if *start < 1 || *end as u64 > len as u64 || start > end {
                    return Err(SelectionError::RangeOutOfBounds {
                        start: *start,
                        end: *end,
                        len,
                    });
                }
                Ok(deps[(*start - 1) as usize..*end as usize].iter().collect())
            }
            Clause::Pattern(pattern) => {
                let matched: Vec<&Dependency> = deps
                    .iter()
                    .filter(|d| matches_pattern(&d.path.to_lowercase(), pattern))
                    .collect();
                if matched.is_empty() {
                    return Err(SelectionError::NoPatternMatch {
                        pattern: pattern.clone(),
                    });
                }
                Ok(matched)
            }
        }
    }
}

fn parse_bound(token: &str, clause: &str) -> Result<i64, SelectionError> {
    token
        .trim()
        .parse::<i64>()
        .map_err(|_| SelectionError::InvalidRange {
            clause: clause.to_string(),
        })
}

/// Parse a selection expression into the referenced dependencies
///
/// The result keeps first-occurrence order and contains no duplicate paths.
/// Parsing stops at the first invalid clause. An empty clause is a pattern
/// that matches every path.
pub fn parse_selection<'a>(
    input: &str,
    deps: &'a [Dependency],
) -> Result<Vec<&'a Dependency>, SelectionError> {
    let input = input.trim().to_lowercase();

    if input == "all" {
        return Ok(deps.iter().collect());
    }

    let mut selected: Vec<&Dependency> = Vec::new();
    for raw in input.split(',') {
        let clause = Clause::parse(raw.trim())?;
        for dep in clause.resolve(deps)? {
            if !selected.iter().any(|s| s.path == dep.path) {
                selected.push(dep);
            }
        }
    }

    Ok(selected)
}

/// Check whether a lower-cased path matches a pattern with `*` wildcards
///
/// Without a wildcard the pattern matches as a substring. With wildcards
/// every non-empty segment must occur in the path in order.
pub fn matches_pattern(path: &str, pattern: &str) -> bool {
    if !pattern.contains('*') {
        return path.contains(pattern);
    }

    let mut rest = path;
    for segment in pattern.split('*').filter(|s| !s.is_empty()) {
        match rest.find(segment) {
            Some(pos) => rest = &rest[pos + segment.len()..],
            None => return false,
        }
    }
    true
}
