//! Error types for grading runs
//!
//! Only conditions that abort a run live here. An unrecognized line is not
//! an error: it is reported as a [`Finding`](crate::report::Finding) and
//! processing continues. A token that should be numeric but is not, or a
//! structural line missing a promised field, stops the run at the
//! offending line, matching the reference behavior of the log format.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for grading operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Fatal errors that abort a grading run
#[derive(Error, Debug)]
pub enum ReportError {
    /// Input file could not be opened
    #[error("cannot open {path:?}: {source}")]
    Open {
        /// Path passed on the command line
        path: PathBuf,
        /// Underlying I/O failure
        source: io::Error,
    },

    /// Read failure partway through the file
    #[error("read failed at line {line}: {source}")]
    Read {
        /// 1-based number of the line being read
        line: usize,
        /// Underlying I/O failure
        source: io::Error,
    },

    /// A token that should be numeric did not parse
    #[error("expected a number at line {line}, found {token:?}")]
    MalformedNumber {
        /// 1-based number of the offending line
        line: usize,
        /// The token that failed to parse
        token: String,
    },

    /// A structural line was shorter than the fields it promises
    #[error("line {line} is missing its {field}")]
    MissingField {
        /// 1-based number of the offending line
        line: usize,
        /// Which field was expected
        field: &'static str,
    },
}

impl ReportError {
    /// 1-based line number to report in the `Invalid Input` diagnostic.
    ///
    /// Open failures happen before any line is read and are reported as
    /// line 1.
    pub fn line(&self) -> usize {
        match self {
            Self::Open { .. } => 1,
            Self::Read { line, .. }
            | Self::MalformedNumber { line, .. }
            | Self::MissingField { line, .. } => *line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_failure_reports_line_one() {
        let err = ReportError::Open {
            path: PathBuf::from("logs.txt"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(err.line(), 1);
    }

    #[test]
    fn parse_failures_carry_their_line() {
        let err = ReportError::MalformedNumber {
            line: 7,
            token: "warm".into(),
        };
        assert_eq!(err.line(), 7);
        assert_eq!(
            format!("{}", err),
            "expected a number at line 7, found \"warm\""
        );
    }
}
