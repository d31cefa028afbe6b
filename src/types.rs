use serde::{Deserialize, Serialize};

use crate::parsers::parser;

/// Errors raised while interpreting a grading configuration. Both variants
/// indicate a configuration-authoring bug and abort the whole grading run.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GraderError {
    /// A location string did not match `<file>:<line>` or
    /// `<file>:<start>-<end>`. Column-qualified locations (a second `:`) are
    /// not supported.
    #[error("Unsupported location format: `{location}`")]
    UnsupportedLocationFormat {
        /// The offending location string, verbatim from the configuration.
        location: String,
    },
    /// A graded unit's breakpoints were not in strictly ascending order of
    /// `minimumMutantsDetected`.
    #[error("Breakpoints for unit `{unit}` are not in strictly ascending order")]
    InvalidBreakpointOrdering {
        /// Name of the graded unit with the malformed breakpoint table.
        unit: String,
    },
}

/// A file-and-line-interval descriptor used to assign report mutants to
/// graded units. Lines are 1-based and the interval is inclusive on both
/// ends.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationRange {
    /// Substring to match against report file paths.
    pub file_name:  String,
    /// First line of the interval.
    pub start_line: u32,
    /// Last line of the interval, equal to `start_line` for single-line
    /// ranges.
    pub end_line:   u32,
}

impl LocationRange {
    /// Parses a compact location-range string from a grading configuration.
    ///
    /// * `location`: `"<file>:<line>"` or `"<file>:<start>-<end>"`; exactly
    ///   one `:` is permitted.
    pub fn parse(location: &str) -> Result<Self, GraderError> {
        if location.matches(':').count() != 1 {
            return Err(GraderError::UnsupportedLocationFormat {
                location: location.to_string(),
            });
        }

        let (file_name, start_line, end_line) =
            parser::location_range(location).map_err(|_| {
                GraderError::UnsupportedLocationFormat {
                    location: location.to_string(),
                }
            })?;

        Ok(Self {
            file_name,
            start_line,
            end_line,
        })
    }

    /// Whether a report file path counts toward this range. Substring
    /// containment, not exact equality: configurations are authored with
    /// short relative names while report paths may carry workspace prefixes.
    pub fn matches_path(&self, path: &str) -> bool {
        path.contains(&self.file_name)
    }

    /// Whether a 1-based line number falls inside this range.
    pub fn contains_line(&self, line: u32) -> bool {
        self.start_line <= line && line <= self.end_line
    }
}

impl std::fmt::Display for LocationRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.start_line == self.end_line {
            write!(f, "{}:{}", self.file_name, self.start_line)
        } else {
            write!(f, "{}:{}-{}", self.file_name, self.start_line, self.end_line)
        }
    }
}
