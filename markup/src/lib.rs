mod element;
pub use element::Element;

mod builder;
pub use builder::people_to_element;

mod writer;
pub use writer::write_document;
