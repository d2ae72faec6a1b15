//! Post-extraction structural checks.

pub mod validator;

pub use validator::Validator;
