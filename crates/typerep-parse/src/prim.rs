//! Primitive string parser.
//!
//! Owns leaves and the wrappers around them (`Fix`, `Custom`, `Map`).
//! Every other shape is handed, text untouched, to a [`StructuralDecoder`].

use std::any::Any;
use std::str::FromStr;
use std::sync::Arc;

use typerep_core::invariants::ensure_owned;
use typerep_core::{Kind, NoopTracer, Node, ParseError, Pass, Prim, Tracer, Ty};

use crate::decoder::StructuralDecoder;
use crate::json::JsonDecoder;

/// Parser, generic over the structural decoder and a tracer.
pub struct Parser<D: StructuralDecoder = JsonDecoder, T: Tracer = NoopTracer> {
    decoder: D,
    tracer: T,
    depth: usize,
}

impl<D: StructuralDecoder> Parser<D> {
    pub fn new(decoder: D) -> Self {
        Self::with_tracer(decoder, NoopTracer)
    }
}

impl<D: StructuralDecoder, T: Tracer> Parser<D, T> {
    pub fn with_tracer(decoder: D, tracer: T) -> Self {
        Self {
            decoder,
            tracer,
            depth: 0,
        }
    }

    pub fn parse<A: Any>(&mut self, ty: &Ty<A>, text: &str) -> Result<A, ParseError> {
        let value = self.parse_node(ty.node(), text)?;
        Ok(ensure_owned(value))
    }

    pub fn parse_node(&mut self, node: &Arc<Node>, text: &str) -> Result<Box<dyn Any>, ParseError> {
        let kind = node.kind();
        self.tracer.trace_enter(Pass::Parse, kind, self.depth);
        self.depth += 1;

        let result = match &**node {
            Node::Fix(fix) => {
                self.tracer.trace_unroll(Pass::Parse, self.depth);
                let body = fix.unroll(Arc::clone(node));
                self.parse_node(&body, text)
            }
            Node::Map(map) => self
                .parse_node(map.repr(), text)
                .map(|value| map.forward(value)),
            Node::Custom(custom) => {
                let result = custom.parse(text);
                self.originate(kind, result)
            }
            Node::Prim(prim) => {
                let result = parse_prim(*prim, text);
                self.originate(kind, result)
            }
            _ => {
                let result = self.decoder.decode(node, text);
                self.originate(kind, result)
            }
        };

        self.depth -= 1;
        result
    }

    /// Report a failure where it is produced; wrappers only propagate.
    fn originate(
        &mut self,
        kind: Kind,
        result: Result<Box<dyn Any>, ParseError>,
    ) -> Result<Box<dyn Any>, ParseError> {
        if let Err(err) = &result {
            self.tracer.trace_parse_failure(kind, self.depth, err);
        }
        result
    }
}

/// Parse a primitive leaf from text.
///
/// - `Unit` always succeeds
/// - `Char` takes the character at index 1
/// - `Float` accepts `neg_infinity` besides the standard forms
/// - `String` and `Bytes` keep the text as is
pub fn parse_prim(prim: Prim, text: &str) -> Result<Box<dyn Any>, ParseError> {
    let value: Box<dyn Any> = match prim {
        Prim::Unit => Box::new(()),
        Prim::Bool => Box::new(literal::<bool>("bool", text)?),
        Prim::Char => match text.chars().nth(1) {
            Some(ch) => Box::new(ch),
            None => return Err(ParseError::invalid_literal("char", text)),
        },
        Prim::Int => Box::new(literal::<isize>("int", text)?),
        Prim::Int32 => Box::new(literal::<i32>("int32", text)?),
        Prim::Int64 => Box::new(literal::<i64>("int64", text)?),
        Prim::Float => match text {
            "neg_infinity" => Box::new(f64::NEG_INFINITY),
            _ => Box::new(literal::<f64>("float", text)?),
        },
        Prim::String(_) => Box::new(text.to_owned()),
        Prim::Bytes(_) => Box::new(text.as_bytes().to_vec()),
    };
    Ok(value)
}

fn literal<N: FromStr>(kind: &'static str, text: &str) -> Result<N, ParseError> {
    text.parse()
        .map_err(|_| ParseError::invalid_literal(kind, text))
}
