/// A phone record. Either number may be empty; missing trailing
/// fields in the source line are kept as empty strings, never dropped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Phone {
    pub mobile: String,
    pub landline: String,
}

impl Phone {
    pub fn new<A, B>(mobile: A, landline: B) -> Self
    where
        A: Into<String>,
        B: Into<String>,
    {
        Self {
            mobile: mobile.into(),
            landline: landline.into(),
        }
    }
}
