//! Whole-document translation
//!
//! A translation is built completely in memory before anything is written,
//! so a failed read never leaves partial output behind.

use std::fmt;
use std::io::Write;
use std::path::Path;

use super::assignment::{is_skippable, parse_assignment, Assignment};
use crate::config::HeaderConfig;
use crate::error::{ConvertError, ConvertResult};

/// The generated-file banner placed above the assignments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Name of the Make file the output is derived from
    pub source: String,
    /// Make target that regenerates the output
    pub target: String,
}

impl Default for Header {
    fn default() -> Self {
        let config = HeaderConfig::default();
        Self {
            source: config.source,
            target: config.target,
        }
    }
}

impl Header {
    /// The two comment lines, without trailing newlines
    pub fn lines(&self) -> [String; 2] {
        [
            format!("# Generated from {} - DO NOT EDIT DIRECTLY", self.source),
            format!(
                "# Edit {} instead and run 'make {}'",
                self.source, self.target
            ),
        ]
    }

    /// Build the header from configuration; `None` when it is disabled
    pub fn from_config(config: &HeaderConfig) -> Option<Self> {
        config.enabled.then(|| Self {
            source: config.source.clone(),
            target: config.target.clone(),
        })
    }
}

/// Result of translating one Make configuration document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Banner to emit, if any
    pub header: Option<Header>,
    /// Matched assignments in input order
    pub assignments: Vec<Assignment>,
}

impl Translation {
    /// Replace the header
    pub fn with_header(mut self, header: Option<Header>) -> Self {
        self.header = header;
        self
    }

    /// Number of assignments translated
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// True if no assignment matched
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Write the rendered document, one line per `\n`
    pub fn write_to<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        write!(out, "{}", self)?;
        out.flush()
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref header) = self.header {
            for line in header.lines() {
                writeln!(f, "{}", line)?;
            }
            writeln!(f)?;
        }
        for assignment in &self.assignments {
            writeln!(f, "{}", assignment.to_shell())?;
        }
        Ok(())
    }
}

/// Translate Make configuration text
///
/// Lines are split on `\n`. Blank lines, comments and anything that is not a
/// `NAME := value` assignment are dropped; the rest keep their order. The
/// result carries the default header.
///
/// # Examples
///
/// ```
/// use mk2env::translate::translate_str;
///
/// let out = translate_str("FOO := bar\nBAZ := $(FOO)/baz\n").with_header(None);
/// assert_eq!(out.to_string(), "FOO=bar\nBAZ=${FOO}/baz\n");
/// ```
pub fn translate_str(content: &str) -> Translation {
    let mut assignments = Vec::new();

    for (i, line) in content.split('\n').enumerate() {
        if is_skippable(line) {
            continue;
        }
        match parse_assignment(line) {
            Some(assignment) => assignments.push(assignment),
            None => tracing::trace!("Skipping line {}: {}", i + 1, line.trim()),
        }
    }

    Translation {
        header: Some(Header::default()),
        assignments,
    }
}

/// Read and translate a Make configuration file
///
/// Any failure to open or read the file is reported as
/// [`ConvertError::FileAccess`]. Invalid UTF-8 is replaced rather than
/// rejected.
pub fn translate_file(path: &Path) -> ConvertResult<Translation> {
    let bytes = std::fs::read(path).map_err(|source| ConvertError::FileAccess {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());

    let content = String::from_utf8_lossy(&bytes);
    let translation = translate_str(&content);
    tracing::debug!(
        "Translated {} assignment(s) from {}",
        translation.len(),
        path.display()
    );

    Ok(translation)
}
