/// Delimiter between the tag and the data fields of a record.
pub const DELIMITER: char = '|';

/// Number of data fields after the tag. Shorter records are padded
/// with empty strings; anything beyond this count is ignored.
pub const FIELD_COUNT: usize = 3;

/// A raw input line split into its leading tag and padded data fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub tag: String,
    pub fields: [String; FIELD_COUNT],
}

/// Splits a single non-empty, trimmed line into a [`Record`]. This is
/// purely lexical: tag meaning and state transitions live in the
/// parser proper.
pub fn parse(line: &str) -> Record {
    let mut parts = line.split(DELIMITER);
    let tag = parts.next().unwrap_or_default().to_string();

    let mut fields: [String; FIELD_COUNT] = Default::default();
    for (field, part) in fields.iter_mut().zip(parts) {
        *field = part.to_string();
    }

    Record { tag, fields }
}
