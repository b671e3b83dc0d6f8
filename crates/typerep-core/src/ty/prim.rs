//! Primitive leaves and length hints.

use std::any::Any;

use crate::invariants::ensure_ref;

/// Encoding-length hint for strings, bytes and sequences.
///
/// Only affects type-syntax rendering; printing and parsing ignore it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Len {
    #[default]
    Unbounded,
    /// 8-bit length prefix.
    U8,
    U16,
    U32,
    U64,
    /// Literal length, no prefix.
    Fixed(usize),
}

impl Len {
    /// Type-syntax suffix: `""`, `":8"` … `":64"`, or `":<N>"`.
    pub fn suffix(self) -> String {
        match self {
            Len::Unbounded => String::new(),
            Len::U8 => ":8".to_owned(),
            Len::U16 => ":16".to_owned(),
            Len::U32 => ":32".to_owned(),
            Len::U64 => ":64".to_owned(),
            Len::Fixed(n) => format!(":<{n}>"),
        }
    }
}

/// Primitive descriptor leaf.
///
/// Carriers: `Unit` is `()`, `Int` is `isize`, `String` is `String`,
/// `Bytes` is `Vec<u8>`; the rest map to the Rust type of the same name.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Prim {
    Unit,
    Bool,
    Char,
    Int,
    Int32,
    Int64,
    Float,
    String(Len),
    Bytes(Len),
}

impl Prim {
    pub fn name(self) -> &'static str {
        match self {
            Prim::Unit => "unit",
            Prim::Bool => "bool",
            Prim::Char => "char",
            Prim::Int => "int",
            Prim::Int32 => "int32",
            Prim::Int64 => "int64",
            Prim::Float => "float",
            Prim::String(_) => "string",
            Prim::Bytes(_) => "bytes",
        }
    }

    /// Length hint for `String` and `Bytes`, `None` for fixed-size primitives.
    pub fn length_hint(self) -> Option<Len> {
        match self {
            Prim::String(len) | Prim::Bytes(len) => Some(len),
            _ => None,
        }
    }

    /// Borrow an erased carrier as a typed primitive view.
    ///
    /// Panics if `value` is not this primitive's carrier type.
    pub fn view<'v>(self, value: &'v dyn Any) -> PrimRef<'v> {
        match self {
            Prim::Unit => {
                ensure_ref::<()>(value);
                PrimRef::Unit
            }
            Prim::Bool => PrimRef::Bool(*ensure_ref(value)),
            Prim::Char => PrimRef::Char(*ensure_ref(value)),
            Prim::Int => PrimRef::Int(*ensure_ref(value)),
            Prim::Int32 => PrimRef::Int32(*ensure_ref(value)),
            Prim::Int64 => PrimRef::Int64(*ensure_ref(value)),
            Prim::Float => PrimRef::Float(*ensure_ref(value)),
            Prim::String(_) => PrimRef::String(ensure_ref::<String>(value)),
            Prim::Bytes(_) => PrimRef::Bytes(ensure_ref::<Vec<u8>>(value)),
        }
    }
}

/// A primitive value borrowed out of its erased carrier.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum PrimRef<'v> {
    Unit,
    Bool(bool),
    Char(char),
    Int(isize),
    Int32(i32),
    Int64(i64),
    Float(f64),
    String(&'v str),
    Bytes(&'v [u8]),
}
