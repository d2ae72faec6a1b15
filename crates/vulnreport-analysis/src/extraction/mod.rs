//! Record extraction: document tree → typed record collections.
//!
//! Missing optional structure never fails extraction; it yields empty
//! collections and structural-absence diagnostics instead.

mod assets;
pub(crate) mod coerce;
pub mod extractor;
pub mod fields;
mod findings;
mod metadata;
mod policy;

pub use extractor::{extract_str, Extractor};
pub use fields::{FieldLocation, FieldSpec, FieldTable};
