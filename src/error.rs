use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::digits::DigitError;

/// Error types for parsing, validating and checking input records.
#[derive(Debug)]
pub enum PolydivError {
    /// The first line did not hold a non-negative integer
    InvalidCount { text: String },
    /// Fewer data lines than the count declared
    MissingLine { expected: usize, found: usize },
    /// A data line was not a digit string
    Digits { line: usize, source: DigitError },
    /// A non-blank line followed the last declared data line
    TrailingInput { line: usize },
    /// The declared count disagrees with the number of lines handed over
    CountMismatch { declared: usize, actual: usize },
    /// The input breaks the strict problem format
    Format { line: usize, reason: String },
    /// A validator pattern could not be built
    Pattern(regex::Error),
    /// I/O error
    Io { path: Option<PathBuf>, source: io::Error },
}

impl PolydivError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PolydivError::Io {
            path: Some(path.into()),
            source,
        }
    }
}

impl fmt::Display for PolydivError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolydivError::InvalidCount { text } => {
                write!(f, "line 1: expected a line count, got {:?}", text)
            }
            PolydivError::MissingLine { expected, found } => {
                write!(f, "expected {} data lines, found {}", expected, found)
            }
            PolydivError::Digits { line, source } => write!(f, "line {}: {}", line, source),
            PolydivError::TrailingInput { line } => {
                write!(f, "line {}: unexpected input after the last data line", line)
            }
            PolydivError::CountMismatch { declared, actual } => {
                write!(f, "count declares {} lines but {} were given", declared, actual)
            }
            PolydivError::Format { line, reason } => write!(f, "line {}: {}", line, reason),
            PolydivError::Pattern(err) => write!(f, "invalid validator pattern: {}", err),
            PolydivError::Io {
                path: Some(path),
                source,
            } => write!(f, "{}: {}", path.display(), source),
            PolydivError::Io { path: None, source } => write!(f, "{}", source),
        }
    }
}

impl std::error::Error for PolydivError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PolydivError::Digits { source, .. } => Some(source),
            PolydivError::Pattern(err) => Some(err),
            PolydivError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for PolydivError {
    fn from(source: io::Error) -> Self {
        PolydivError::Io { path: None, source }
    }
}

impl From<regex::Error> for PolydivError {
    fn from(err: regex::Error) -> Self {
        PolydivError::Pattern(err)
    }
}
