mod person;
pub use person::*;

mod family;
pub use family::*;

mod phone;
pub use phone::*;

mod address;
pub use address::*;
