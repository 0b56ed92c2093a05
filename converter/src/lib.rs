use folkxml_markup::{people_to_element, write_document};
use folkxml_parser::{Parser, Warning};
use std::path::{Path, PathBuf};

mod error;
pub use error::{ConvertError, ConvertResult};

#[cfg(test)]
mod tests;

/// Output file name, created in the current working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "output.xml";

/// Outcome of a successful conversion.
#[derive(Debug)]
pub struct Conversion {
    /// Where the document was written, absolute when the path can be
    /// canonicalized.
    pub output_path: PathBuf,
    /// Number of people records converted.
    pub people: usize,
    /// Non-fatal diagnostics collected while parsing, for the shell to
    /// show the user.
    pub warnings: Vec<Warning>,
}

/// Runs one full conversion: read the input, parse it, build the
/// element tree, and overwrite `output` with the serialized document.
///
/// All-or-nothing: any failure leaves the output file untouched, and
/// `input` of `None` (nothing chosen yet) fails before any I/O.
pub fn convert(input: Option<&Path>, output: &Path) -> ConvertResult<Conversion> {
    let input = input.ok_or(ConvertError::NoInputSelected)?;

    let text =
        std::fs::read_to_string(input).map_err(|source| ConvertError::UnreadableInput {
            path: input.to_path_buf(),
            source,
        })?;

    let mut parser = Parser::with_file(input);
    let (people, warnings) = parser.parse(&text)?;

    let document = write_document(&people_to_element(&people));

    std::fs::write(output, &document).map_err(|source| ConvertError::OutputWriteFailure {
        path: output.to_path_buf(),
        source,
    })?;

    let output_path = output
        .canonicalize()
        .unwrap_or_else(|_| output.to_path_buf());

    Ok(Conversion {
        output_path,
        people: people.len(),
        warnings,
    })
}
