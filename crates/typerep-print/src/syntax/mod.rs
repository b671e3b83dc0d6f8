//! Canonical type syntax for descriptors.
//!
//! ```text
//! (< x : int; y : int > as point)
//! ([ `Circle of float | `Square ] as shape)
//! (Map ('a list) as 'a)
//! ```

mod naming;
mod printer;


pub use naming::{FreshVars, letters};
pub use printer::{SyntaxPrinter, describe};
