//! Conversion of lizard's textual report into the typed model.

pub mod parser;

pub use parser::parse;
