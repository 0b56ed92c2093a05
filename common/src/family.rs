use crate::{Address, Phone};

/// A family entry scoped to exactly one person. While a family is the
/// current attachment target, phone and address records land here
/// instead of on the person.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Family {
    pub name: String,
    pub born: String,
    pub phones: Vec<Phone>,
    pub addresses: Vec<Address>,
}

impl Family {
    pub fn new<A, B>(name: A, born: B) -> Self
    where
        A: Into<String>,
        B: Into<String>,
    {
        Self {
            name: name.into(),
            born: born.into(),
            ..Self::default()
        }
    }
}
