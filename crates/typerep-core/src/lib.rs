#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Descriptor model for typerep.
//!
//! A descriptor (`Ty<A>`) is a closed, composable description of the shape of
//! values of type `A`. Printers and parsers traverse descriptors generically,
//! without per-type code.
//!
//! Two layers:
//! - **Typed layer**: `Ty<A>` and the record/variant builders. Constructing a
//!   descriptor this way guarantees it agrees with the values it is paired with.
//! - **Erased layer**: `Node`, the shared tree that traversals dispatch on.
//!   Values cross it as `&dyn Any` and are recovered by the closures captured
//!   at construction.
//!
//! # Example
//!
//! ```
//! use typerep_core::{Kind, RecordBuilder, Ty};
//!
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
//! assert_eq!(point.kind(), Kind::Record);
//! ```

pub mod colors;
pub mod error;
pub mod invariants;
pub mod trace;
pub mod ty;
pub mod utils;

#[cfg(test)]
mod error_tests;
#[cfg(test)]
mod trace_tests;

pub use colors::Colors;
pub use error::ParseError;
pub use trace::{NoopTracer, Pass, PrintTracer, Tracer, Verbosity};
pub use ty::{
    Case, Case0, Case1, Custom, Field, FieldValues, Fix, Kind, Len, Map, Node, Opt, Prim,
    PrimRef, Product, Projected, Record, RecordBuilder, Seq, Tag, Tuple, Ty, Variant,
    VariantBuilder,
};
