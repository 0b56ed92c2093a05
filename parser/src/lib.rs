use folkxml_common::Person;

mod error;
pub use error::{ParseError, ParseErrors, Warning};

mod line_parser;

mod parser;
pub use parser::Parser;


/// Parses a full input text into people records, plus any non-fatal
/// warnings collected along the way.
pub fn parse(input: &str) -> Result<(Vec<Person>, Vec<Warning>), ParseErrors> {
    let mut parser = Parser::new();
    parser.parse(input)
}
