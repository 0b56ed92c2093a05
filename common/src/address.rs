/// An address record attached to a person or to one of its families.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub zipcode: String,
}

impl Address {
    pub fn new<A, B, C>(street: A, city: B, zipcode: C) -> Self
    where
        A: Into<String>,
        B: Into<String>,
        C: Into<String>,
    {
        Self {
            street: street.into(),
            city: city.into(),
            zipcode: zipcode.into(),
        }
    }
}
