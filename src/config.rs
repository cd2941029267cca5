//! Invocation options of a generation.

use std::path::PathBuf;
use std::str::FromStr;

use crate::context::Data;
use crate::error::Error;

/// Longest indentation accepted for formatted JSON output
const MAX_JSON_INDENT: usize = 10;

/// Indentation used when rendered `.json` files are re-formatted.
///
/// Parses from a number of spaces (capped at 10), `tab` / `\t`, or a literal
/// string (truncated to 10 characters). An empty indent produces compact JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonIndent(String);

impl JsonIndent {
    pub fn spaces(count: usize) -> Self {
        Self(" ".repeat(count.min(MAX_JSON_INDENT)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for JsonIndent {
    fn default() -> Self {
        Self("\t".to_string())
    }
}

impl From<usize> for JsonIndent {
    fn from(count: usize) -> Self {
        Self::spaces(count)
    }
}

impl From<&str> for JsonIndent {
    fn from(indent: &str) -> Self {
        Self(indent.chars().take(MAX_JSON_INDENT).collect())
    }
}

impl FromStr for JsonIndent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(count) = s.parse::<i64>() {
            // Negative counts yield compact output.
            return Ok(Self::spaces(usize::try_from(count).unwrap_or(0)));
        }
        match s {
            "tab" | "\\t" => Ok(Self::default()),
            _ => Ok(Self::from(s)),
        }
    }
}

/// Options of a single generation run.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Root of the template tree
    pub template: PathBuf,
    /// Destination root; the current working directory when absent
    pub destination: Option<PathBuf>,
    /// Initial template data
    pub data: Data,
    pub json_indent: JsonIndent,
}

impl Options {
    pub fn new<P: Into<PathBuf>>(template: P) -> Self {
        Self { template: template.into(), ..Self::default() }
    }

    pub fn destination<P: Into<PathBuf>>(mut self, destination: P) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn data(mut self, data: Data) -> Self {
        self.data = data;
        self
    }

    pub fn json_indent<I: Into<JsonIndent>>(mut self, json_indent: I) -> Self {
        self.json_indent = json_indent.into();
        self
    }
}
