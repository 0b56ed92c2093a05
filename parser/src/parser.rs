use crate::error::{ParseError, ParseErrors, Warning};
use crate::line_parser;
use folkxml_common::{Address, Family, Person, Phone};
use std::path::PathBuf;

/// File component shown in diagnostics when the parser was fed a bare
/// string with no path attached.
const UNNAMED_INPUT: &str = "<input>";

/// Line parser for the pipe-delimited people format.
///
/// One record per line: a leading tag (`P`, `F`, `T`, `A`) followed by
/// up to three data fields. Blank lines are skipped, unknown tags are
/// reported as warnings, and orphan records (anything before the first
/// `P`) are collected as errors without aborting the pass.
#[derive(Debug, Default)]
pub struct Parser {
    file_path: Option<PathBuf>,
}

/// Mutable state threaded through one parse pass: the people sealed so
/// far, the person still being read, and whether that person's latest
/// family is the current attachment target.
///
/// `family_open` is cleared every time a new person begins, so phone
/// and address records can never leak across person boundaries.
#[derive(Debug, Default)]
struct ParserState {
    people: Vec<Person>,
    current_person: Option<Person>,
    family_open: bool,
}

impl ParserState {
    /// Seals any open person and makes `person` the open one.
    fn open_person(&mut self, person: Person) {
        self.seal_person();
        self.current_person = Some(person);
    }

    /// Appends the open person, if any, to the output sequence.
    fn seal_person(&mut self) {
        if let Some(person) = self.current_person.take() {
            self.people.push(person);
        }
        self.family_open = false;
    }

    /// Appends a family to the open person and makes it the attachment
    /// target. Returns `false` if no person is open.
    fn open_family(&mut self, family: Family) -> bool {
        match self.current_person.as_mut() {
            Some(person) => {
                person.families.push(family);
                self.family_open = true;
                true
            }
            None => false,
        }
    }

    /// Attaches a phone to the innermost open container. Returns
    /// `false` if no person is open.
    fn attach_phone(&mut self, phone: Phone) -> bool {
        let person = match self.current_person.as_mut() {
            Some(person) => person,
            None => return false,
        };
        if self.family_open {
            if let Some(family) = person.families.last_mut() {
                family.phones.push(phone);
                return true;
            }
        }
        person.phones.push(phone);
        true
    }

    /// Attaches an address using the same precedence rule as phones.
    fn attach_address(&mut self, address: Address) -> bool {
        let person = match self.current_person.as_mut() {
            Some(person) => person,
            None => return false,
        };
        if self.family_open {
            if let Some(family) = person.families.last_mut() {
                family.addresses.push(address);
                return true;
            }
        }
        person.addresses.push(address);
        true
    }
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser that reports diagnostics against `path`.
    pub fn with_file<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            file_path: Some(path.into()),
        }
    }

    /// Parses the full input text into people records.
    ///
    /// Returns the ordered people plus any warnings, or every error
    /// found in the pass if at least one record was fatally bad.
    pub fn parse<A>(&mut self, input: A) -> Result<(Vec<Person>, Vec<Warning>), ParseErrors>
    where
        A: AsRef<str>,
    {
        let mut state = ParserState::default();
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        for (index, raw_line) in input.as_ref().lines().enumerate() {
            let line_number = index + 1;
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            let record = line_parser::parse(line);
            let [first, second, third] = record.fields;

            match record.tag.as_str() {
                "P" => state.open_person(Person::new(first, second)),
                "F" => {
                    if !state.open_family(Family::new(first, second)) {
                        errors.push(self.orphan_record(line_number, 'F'));
                    }
                }
                "T" => {
                    if !state.attach_phone(Phone::new(first, second)) {
                        errors.push(self.orphan_record(line_number, 'T'));
                    }
                }
                "A" => {
                    if !state.attach_address(Address::new(first, second, third)) {
                        errors.push(self.orphan_record(line_number, 'A'));
                    }
                }
                _ => warnings.push(self.unknown_tag(line_number, line)),
            }
        }

        state.seal_person();

        if errors.is_empty() {
            Ok((state.people, warnings))
        } else {
            Err(ParseErrors(errors))
        }
    }

    fn diagnostic_file(&self) -> PathBuf {
        self.file_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(UNNAMED_INPUT))
    }

    fn orphan_record(&self, line: usize, tag: char) -> ParseError {
        ParseError::OrphanRecord {
            file: self.diagnostic_file(),
            line,
            tag,
        }
    }

    fn unknown_tag(&self, line: usize, text: &str) -> Warning {
        Warning {
            file: self.diagnostic_file(),
            line,
            message: format!("Unknown record tag ignored: {}", text),
        }
    }
}
