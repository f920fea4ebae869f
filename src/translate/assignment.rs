//! Make assignment parsing
//!
//! Only simply-expanded assignments of upper-case variables are recognized:
//! `NAME := value`. Recursive (`=`), conditional (`?=`) and appending (`+=`)
//! assignments are not assignments as far as this module is concerned.

use once_cell::sync::Lazy;
use regex::Regex;

use super::expand::rewrite_expansions;

/// Matches simply-expanded assignments: "NAME := value"
static ASSIGNMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z_]+)\s*:=\s*(.*)$").unwrap());

/// One `NAME := value` line from a Make configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Variable name, `[A-Z_]+`
    pub name: String,
    /// Everything after the operator, still in Make syntax
    pub raw_value: String,
}

impl Assignment {
    /// Create an assignment from its parts
    pub fn new(name: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_value: raw_value.into(),
        }
    }

    /// Value with Make expansions rewritten to shell syntax
    pub fn shell_value(&self) -> String {
        rewrite_expansions(&self.raw_value)
    }

    /// Render as a shell assignment: `NAME=value`
    ///
    /// No quoting or escaping is applied.
    pub fn to_shell(&self) -> String {
        format!("{}={}", self.name, self.shell_value())
    }
}

/// Returns true for lines that carry no content: blank or `#` comments
pub fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Parse a single line of a Make configuration
///
/// Surrounding whitespace is stripped before matching. Returns `None` for
/// blank lines, comments, and anything not shaped like `NAME := value`.
pub fn parse_assignment(line: &str) -> Option<Assignment> {
    if is_skippable(line) {
        return None;
    }

    let caps = ASSIGNMENT_RE.captures(line.trim())?;
    Some(Assignment::new(&caps[1], &caps[2]))
}
