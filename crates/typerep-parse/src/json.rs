//! JSON structural decoder.
//!
//! Mapping:
//! - List, Array: array
//! - Option: `null` or the value itself
//! - Tuple: array of exactly 2 or 3 items
//! - Record: object keyed by field name; absent `Option` fields are `None`
//! - Variant: `"Case"` for nullary cases, `{"Case": payload}` for unary ones
//! - Char: one-character string; Float: number, or `"infinity"`, `"neg_infinity"`, `"nan"`
//! - Custom: string contents, or the raw JSON text of any other value

use std::any::Any;
use std::sync::Arc;

use serde_json::{Number, Value};
use typerep_core::invariants;
use typerep_core::{Case, Node, ParseError, Prim, Record, Variant};

use crate::decoder::StructuralDecoder;

/// Decodes composite shapes from JSON text.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonDecoder;

impl StructuralDecoder for JsonDecoder {
    fn decode(&self, node: &Arc<Node>, text: &str) -> Result<Box<dyn Any>, ParseError> {
        let value: Value = serde_json::from_str(text).map_err(|e| ParseError::Syntax {
            message: e.to_string(),
        })?;
        self.decode_value(node, &value)
    }
}

impl JsonDecoder {
    /// Decode an already parsed JSON value.
    pub fn decode_value(&self, node: &Arc<Node>, value: &Value) -> Result<Box<dyn Any>, ParseError> {
        match &**node {
            Node::Fix(fix) => self.decode_value(&fix.unroll(Arc::clone(node)), value),
            Node::Custom(custom) => match value {
                Value::String(s) => custom.parse(s),
                other => custom.parse(&other.to_string()),
            },
            Node::Map(map) => self
                .decode_value(map.repr(), value)
                .map(|decoded| map.forward(decoded)),
            Node::Prim(prim) => decode_prim(*prim, value),
            Node::List(seq) | Node::Array(seq) => {
                let items = expect_array(value)?
                    .iter()
                    .map(|item| self.decode_value(seq.elem(), item))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(seq.collect(items))
            }
            Node::Option(opt) => match value {
                Value::Null => Ok(opt.wrap(None)),
                other => {
                    let inner = self.decode_value(opt.inner(), other)?;
                    Ok(opt.wrap(Some(inner)))
                }
            },
            Node::Tuple(tuple) => {
                let items = expect_array(value)?;
                if items.len() != tuple.arity() {
                    return Err(ParseError::mismatch(
                        format!("array of {} items", tuple.arity()),
                        format!("array of {} items", items.len()),
                    ));
                }
                let parts = tuple
                    .elems()
                    .iter()
                    .zip(items)
                    .map(|(elem, item)| self.decode_value(elem, item))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(tuple.join(parts))
            }
            Node::Record(record) => self.decode_record(record, value),
            Node::Variant(variant) => self.decode_variant(variant, value),
            Node::Var(name) => invariants::unbound_type_variable(name),
        }
    }

    fn decode_record(&self, record: &Record, value: &Value) -> Result<Box<dyn Any>, ParseError> {
        let Value::Object(object) = value else {
            return Err(ParseError::mismatch("object", json_kind(value)));
        };

        if let Some(unknown) = object.keys().find(|key| record.field(key).is_none()) {
            return Err(ParseError::UnknownField {
                record: record.name().to_owned(),
                field: unknown.clone(),
            });
        }

        if !record.is_constructible() {
            return Err(unsupported_record(record));
        }

        let mut values = Vec::with_capacity(record.len());
        for field in record.fields() {
            let decoded = match object.get(field.name()) {
                Some(item) => self.decode_value(field.ty(), item)?,
                None => absent(field.ty()).ok_or_else(|| ParseError::MissingField {
                    record: record.name().to_owned(),
                    field: field.name().to_owned(),
                })?,
            };
            values.push(decoded);
        }

        record
            .make(values)
            .ok_or_else(|| unsupported_record(record))
    }

    fn decode_variant(&self, variant: &Variant, value: &Value) -> Result<Box<dyn Any>, ParseError> {
        match value {
            Value::String(name) => {
                let case = find_case(variant, name)?;
                if case.payload().is_some() {
                    return Err(ParseError::mismatch(
                        format!("`{}` with a payload", case.display_name()),
                        "bare case name",
                    ));
                }
                Ok(case.inject(None))
            }
            Value::Object(object) if object.len() == 1 => {
                let mut entries = object.iter();
                let Some((name, payload)) = entries.next() else {
                    return Err(ParseError::mismatch("single-key object", "empty object"));
                };
                let case = find_case(variant, name)?;
                let Some(node) = case.payload() else {
                    return Err(ParseError::mismatch(
                        format!("bare `{}`", case.display_name()),
                        "case with a payload",
                    ));
                };
                let decoded = self.decode_value(node, payload)?;
                Ok(case.inject(Some(decoded)))
            }
            other => Err(ParseError::mismatch(
                "case name or single-key object",
                json_kind(other),
            )),
        }
    }
}

fn find_case<'v>(variant: &'v Variant, name: &str) -> Result<&'v Case, ParseError> {
    variant.case(name).ok_or_else(|| ParseError::UnknownCase {
        variant: variant.name().to_owned(),
        case: name.to_owned(),
    })
}

/// Value for a field missing from the object, if its descriptor allows one.
fn absent(node: &Arc<Node>) -> Option<Box<dyn Any>> {
    match &**node {
        Node::Option(opt) => Some(opt.wrap(None)),
        Node::Map(map) => absent(map.repr()).map(|value| map.forward(value)),
        Node::Fix(fix) => absent(&fix.unroll(Arc::clone(node))),
        _ => None,
    }
}

fn unsupported_record(record: &Record) -> ParseError {
    ParseError::Unsupported {
        shape: format!("record `{}` (no constructor)", record.name()),
    }
}

fn expect_array(value: &Value) -> Result<&Vec<Value>, ParseError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(ParseError::mismatch("array", json_kind(other))),
    }
}

fn decode_prim(prim: Prim, value: &Value) -> Result<Box<dyn Any>, ParseError> {
    let decoded: Box<dyn Any> = match (prim, value) {
        (Prim::Unit, Value::Null) => Box::new(()),
        (Prim::Bool, Value::Bool(b)) => Box::new(*b),
        (Prim::Char, Value::String(s)) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Box::new(ch),
                _ => return Err(ParseError::invalid_literal("char", s)),
            }
        }
        (Prim::Int, Value::Number(n)) => Box::new(integer::<isize>("int", n)?),
        (Prim::Int32, Value::Number(n)) => Box::new(integer::<i32>("int32", n)?),
        (Prim::Int64, Value::Number(n)) => Box::new(integer::<i64>("int64", n)?),
        (Prim::Float, Value::Number(n)) => match n.as_f64() {
            Some(x) => Box::new(x),
            None => return Err(ParseError::invalid_literal("float", &n.to_string())),
        },
        (Prim::Float, Value::String(s)) => match s.as_str() {
            "infinity" => Box::new(f64::INFINITY),
            "neg_infinity" => Box::new(f64::NEG_INFINITY),
            "nan" => Box::new(f64::NAN),
            _ => return Err(ParseError::invalid_literal("float", s)),
        },
        (Prim::String(_), Value::String(s)) => Box::new(s.clone()),
        (Prim::Bytes(_), Value::String(s)) => Box::new(s.as_bytes().to_vec()),
        (prim, other) => return Err(ParseError::mismatch(prim.name(), json_kind(other))),
    };
    Ok(decoded)
}

fn integer<N: TryFrom<i64>>(kind: &'static str, n: &Number) -> Result<N, ParseError> {
    let text = n.to_string();
    match n.as_i64() {
        Some(i) => N::try_from(i).map_err(|_| ParseError::out_of_range(kind, &text)),
        None if n.is_u64() => Err(ParseError::out_of_range(kind, &text)),
        None => Err(ParseError::invalid_literal(kind, &text)),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
