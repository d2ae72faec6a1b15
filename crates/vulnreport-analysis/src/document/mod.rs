//! Owned element tree built from the raw document.

pub mod element;
pub mod parser;

pub use element::XmlElement;
pub use parser::XmlDocument;
