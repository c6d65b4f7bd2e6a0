//! Conversion tests
//!
//! One module per target format.

mod csv;
mod json;
mod xml;
