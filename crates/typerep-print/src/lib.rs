#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Printers derived from typerep descriptors.
//!
//! - [`value`]: debug rendering of a value (`{ x: 3; y: -4 }`)
//! - [`syntax`]: canonical type syntax of a descriptor (`(< x : int > as point)`)

pub mod config;
pub mod escape;
pub mod syntax;
pub mod value;


pub use config::Config;
pub use syntax::{SyntaxPrinter, describe};
pub use value::{Dump, ValuePrinter, dump, print};
