//! typerep: type-directed reflection over runtime type descriptors.
//!
//! Build a descriptor once with the typed constructors, then print values,
//! render the type syntax, or read values back, all without per-type code.
//!
//! # Example
//!
//! ```
//! use typerep::{RecordBuilder, Ty};
//!
//! #[derive(Debug, PartialEq)]
//! struct Point {
//!     x: isize,
//!     y: isize,
//! }
//!
//! let point: Ty<Point> = RecordBuilder::new("point")
//!     .field("x", Ty::int(), |p: &Point| &p.x)
//!     .field("y", Ty::int(), |p: &Point| &p.y)
//!     .seal_with(|f| Point { x: f.take(), y: f.take() });
//!
//! assert_eq!(typerep::print(&point, &Point { x: 3, y: -4 }), "{ x: 3; y: -4 }");
//! assert_eq!(typerep::describe(&point), "(< x : int; y : int > as point)");
//! assert_eq!(typerep::parse(&point, r#"{"x": 1, "y": 2}"#), Ok(Point { x: 1, y: 2 }));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg(test)]
mod lib_tests;

pub use typerep_core::{
    Case, Case0, Case1, Colors, Custom, Field, FieldValues, Fix, Kind, Len, Map, Node, NoopTracer,
    Opt, ParseError, Pass, Prim, PrimRef, PrintTracer, Product, Projected, Record, RecordBuilder,
    Seq, Tag, Tracer, Tuple, Ty, Variant, VariantBuilder, Verbosity, invariants, utils,
};
pub use typerep_parse::{JsonDecoder, Parser, StructuralDecoder, UnsupportedDecoder, parse_prim};
pub use typerep_print::syntax::{FreshVars, letters};
pub use typerep_print::value::format_float;
pub use typerep_print::{Config, Dump, SyntaxPrinter, ValuePrinter, escape};

pub use typerep_parse::parse;
pub use typerep_print::{describe, dump, print};
