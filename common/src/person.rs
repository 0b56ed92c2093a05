use crate::{Address, Family, Phone};

/// A person record together with everything attached to it in the
/// source file, in file order.
///
/// A person is "open" while the parser is still reading records for
/// it; it is sealed when the next person begins or the input ends.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Person {
    pub firstname: String,
    pub lastname: String,
    pub phones: Vec<Phone>,
    pub addresses: Vec<Address>,
    pub families: Vec<Family>,
}

impl Person {
    pub fn new<A, B>(firstname: A, lastname: B) -> Self
    where
        A: Into<String>,
        B: Into<String>,
    {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_person_starts_empty() {
        let person = Person::new("Ann", "Smith");
        assert_eq!(person.firstname, "Ann");
        assert_eq!(person.lastname, "Smith");
        assert!(person.phones.is_empty());
        assert!(person.addresses.is_empty());
        assert!(person.families.is_empty());
    }
}
