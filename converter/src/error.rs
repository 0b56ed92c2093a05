use folkxml_parser::ParseErrors;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can fail during one conversion. Unknown record tags
/// are deliberately absent: those are warnings and never abort a run.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Conversion was triggered with no input file chosen; nothing was
    /// attempted.
    #[error("No input file selected.")]
    NoInputSelected,

    /// The input path could not be opened or decoded as UTF-8 text.
    #[error("Can't read input file {}: {source}", .path.display())]
    UnreadableInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Parse(#[from] ParseErrors),

    /// The output document could not be written.
    #[error("Can't write output file {}: {source}", .path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type ConvertResult<T> = Result<T, ConvertError>;
