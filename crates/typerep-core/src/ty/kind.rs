//! Fieldless mirror of descriptor node shapes.

use std::fmt;

/// Shape of a descriptor node, without its payload.
///
/// Used for tracing and diagnostics where the node itself is not needed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Kind {
    /// Recursive type, displayed as `self`.
    Fix,
    /// Externally defined print/parse behaviour.
    Custom,
    /// Isomorphism or projection onto another descriptor.
    Map,
    /// Leaf primitive.
    Prim,
    List,
    Array,
    Option,
    /// Pair or triple.
    Tuple,
    Record,
    Variant,
    /// Type-syntax placeholder.
    Var,
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Fix => "self",
            Self::Custom => "custom",
            Self::Map => "map",
            Self::Prim => "prim",
            Self::List => "list",
            Self::Array => "array",
            Self::Option => "option",
            Self::Tuple => "tuple",
            Self::Record => "record",
            Self::Variant => "variant",
            Self::Var => "var",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
