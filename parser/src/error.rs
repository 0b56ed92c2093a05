use std::path::PathBuf;
use thiserror::Error;

/// A fatal problem with one input record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An `F`, `T`, or `A` record appeared before any `P` record, so
    /// there is nothing to attach it to.
    #[error("{}:{line}: ERROR: Orphan '{tag}' record: a person must be started first.", .file.display())]
    OrphanRecord {
        file: PathBuf,
        line: usize,
        tag: char,
    },
}

/// Every error found in one pass over the input. The parser keeps
/// going after each bad record so a single run reports all of them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n"))]
pub struct ParseErrors(pub Vec<ParseError>);

/// A non-fatal diagnostic. The offending line was skipped and parsing
/// continued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub file: PathBuf,
    pub line: usize,
    pub message: String,
}
