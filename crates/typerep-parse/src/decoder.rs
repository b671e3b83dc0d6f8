//! Seam for decoding composite shapes.

use std::any::Any;
use std::sync::Arc;

use typerep_core::{Node, ParseError};

/// Decodes shapes the primitive parser does not own: lists, arrays,
/// options, tuples, records, variants (and stray type variables).
///
/// The returned value must be the carrier of `node`.
pub trait StructuralDecoder {
    fn decode(&self, node: &Arc<Node>, text: &str) -> Result<Box<dyn Any>, ParseError>;
}

impl<D: StructuralDecoder + ?Sized> StructuralDecoder for &D {
    fn decode(&self, node: &Arc<Node>, text: &str) -> Result<Box<dyn Any>, ParseError> {
        (**self).decode(node, text)
    }
}

/// Decoder that rejects every composite shape.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnsupportedDecoder;

impl StructuralDecoder for UnsupportedDecoder {
    fn decode(&self, node: &Arc<Node>, _text: &str) -> Result<Box<dyn Any>, ParseError> {
        Err(ParseError::Unsupported {
            shape: node.kind().to_string(),
        })
    }
}
