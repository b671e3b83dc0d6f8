#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Reading values back from text through typerep descriptors.
//!
//! [`Parser`] owns primitive leaves and the wrappers around them. Composite
//! shapes are delegated to a [`StructuralDecoder`]; [`JsonDecoder`] is the
//! stock one.
//!
//! # Example
//!
//! ```
//! use typerep_core::Ty;
//!
//! assert_eq!(typerep_parse::parse(&Ty::int(), "42"), Ok(42));
//! assert_eq!(typerep_parse::parse(&Ty::list(Ty::bool()), "[true, false]"), Ok(vec![true, false]));
//! ```

pub mod decoder;
pub mod json;
pub mod prim;

#[cfg(test)]
mod json_tests;

use std::any::Any;

use typerep_core::{ParseError, Ty};

pub use decoder::{StructuralDecoder, UnsupportedDecoder};
pub use json::JsonDecoder;
pub use prim::{Parser, parse_prim};

/// Parse `text` as a value of `ty`, decoding composite shapes as JSON.
pub fn parse<A: Any>(ty: &Ty<A>, text: &str) -> Result<A, ParseError> {
    Parser::new(JsonDecoder).parse(ty, text)
}
