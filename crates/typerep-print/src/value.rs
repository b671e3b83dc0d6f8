//! Debug rendering of values, driven by their descriptor.
//!
//! Layout:
//! - Lists `[1; 2]`, arrays `[|1; 2|]`, records `{ x: 3; y: -4 }`
//! - Options `None` / `Some (v)`, tuples `(a, b)`
//! - Variant cases capitalized, unary payloads parenthesized: `Circle (2.5)`
//!
//! Color scheme:
//! - Field and case names: Blue
//! - Strings, bytes, chars: Green
//! - Punctuation, `None`, `()`: Dim

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use typerep_core::invariants;
use typerep_core::{
    NoopTracer, Node, Opt, Pass, PrimRef, Record, Seq, Tracer, Tuple, Ty, Variant,
};

use crate::Config;
use crate::escape::{escape_bytes, escape_char, escape_str};

/// Render `value` using `ty`, compact and uncolored.
pub fn print<A: Any>(ty: &Ty<A>, value: &A) -> String {
    ValuePrinter::new(Config::new()).print(ty, value)
}

/// `Display` adapter for a value; `{:#}` selects the pretty layout.
pub fn dump<'a, A: Any>(ty: &'a Ty<A>, value: &'a A) -> Dump<'a, A> {
    Dump { ty, value }
}

pub struct Dump<'a, A> {
    ty: &'a Ty<A>,
    value: &'a A,
}

impl<A: Any> fmt::Display for Dump<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = Config::new().pretty(f.alternate());
        f.write_str(&ValuePrinter::new(config).print(self.ty, self.value))
    }
}

/// One item of a bracketed block: an optional label and the value under it.
struct Entry<'a> {
    label: Option<&'a str>,
    node: &'a Arc<Node>,
    value: &'a dyn Any,
}

/// Value printer, generic over a tracer.
pub struct ValuePrinter<T: Tracer = NoopTracer> {
    config: Config,
    tracer: T,
    out: String,
    indent: usize,
    depth: usize,
}

impl ValuePrinter {
    pub fn new(config: Config) -> Self {
        Self::with_tracer(config, NoopTracer)
    }
}

impl<T: Tracer> ValuePrinter<T> {
    pub fn with_tracer(config: Config, tracer: T) -> Self {
        Self {
            config,
            tracer,
            out: String::new(),
            indent: 0,
            depth: 0,
        }
    }

    pub fn print<A: Any>(&mut self, ty: &Ty<A>, value: &A) -> String {
        self.print_node(ty.node(), value);
        std::mem::take(&mut self.out)
    }

    /// Render an erased value. `value` must be the carrier of `node`.
    pub fn print_node(&mut self, node: &Arc<Node>, value: &dyn Any) {
        self.tracer.trace_enter(Pass::Print, node.kind(), self.depth);
        self.depth += 1;

        match &**node {
            Node::Fix(fix) => {
                self.tracer.trace_unroll(Pass::Print, self.depth);
                let body = fix.unroll(Arc::clone(node));
                self.print_node(&body, value);
            }
            Node::Custom(custom) => custom.print(&mut self.out, value),
            Node::Map(map) => {
                let projected = map.backward(value);
                self.print_node(map.repr(), projected.as_any());
            }
            Node::Prim(prim) => self.print_prim(prim.view(value)),
            Node::List(seq) => self.print_seq("[", "]", seq, value),
            Node::Array(seq) => self.print_seq("[|", "|]", seq, value),
            Node::Option(opt) => self.print_option(opt, value),
            Node::Tuple(tuple) => self.print_tuple(tuple, value),
            Node::Record(record) => self.print_record(record, value),
            Node::Variant(variant) => self.print_variant(variant, value),
            Node::Var(name) => invariants::unbound_type_variable(name),
        }

        self.depth -= 1;
    }

    fn print_prim(&mut self, prim: PrimRef<'_>) {
        let c = self.config.colors;
        match prim {
            PrimRef::Unit => self.punct("()"),
            PrimRef::Bool(b) => self.out.push_str(if b { "true" } else { "false" }),
            PrimRef::Char(ch) => {
                let mut lit = String::from('\'');
                escape_char(ch, '\'', &mut lit);
                lit.push('\'');
                c.paint(&mut self.out, c.green, &lit);
            }
            PrimRef::Int(n) => self.out.push_str(&n.to_string()),
            PrimRef::Int32(n) => self.out.push_str(&n.to_string()),
            PrimRef::Int64(n) => self.out.push_str(&n.to_string()),
            PrimRef::Float(x) => self.out.push_str(&format_float(x)),
            PrimRef::String(s) => {
                c.paint(&mut self.out, c.green, &format!("\"{}\"", escape_str(s)));
            }
            PrimRef::Bytes(b) => {
                c.paint(&mut self.out, c.green, &format!("\"{}\"", escape_bytes(b)));
            }
        }
    }

    fn print_seq(&mut self, open: &str, close: &str, seq: &Seq, value: &dyn Any) {
        let entries: Vec<_> = seq
            .items(value)
            .into_iter()
            .map(|item| Entry {
                label: None,
                node: seq.elem(),
                value: item,
            })
            .collect();
        self.print_block(open, close, false, &entries);
    }

    fn print_record(&mut self, record: &Record, value: &dyn Any) {
        let entries: Vec<_> = record
            .fields()
            .map(|field| Entry {
                label: Some(field.name()),
                node: field.ty(),
                value: field.get(value),
            })
            .collect();
        self.print_block("{", "}", true, &entries);
    }

    fn print_option(&mut self, opt: &Opt, value: &dyn Any) {
        let c = self.config.colors;
        match opt.get(value) {
            None => self.punct("None"),
            Some(inner) => {
                c.paint(&mut self.out, c.blue, "Some");
                self.print_payload(opt.inner(), inner);
            }
        }
    }

    fn print_tuple(&mut self, tuple: &Tuple, value: &dyn Any) {
        self.punct("(");
        for (i, (node, part)) in tuple.elems().iter().zip(tuple.split(value)).enumerate() {
            if i > 0 {
                self.punct(",");
                self.out.push(' ');
            }
            self.print_node(node, part);
        }
        self.punct(")");
    }

    fn print_variant(&mut self, variant: &Variant, value: &dyn Any) {
        let c = self.config.colors;
        let (case, payload) = variant.active(value);
        c.paint(&mut self.out, c.blue, &case.display_name());
        if let (Some(node), Some(payload)) = (case.payload(), payload) {
            self.print_payload(node, payload);
        }
    }

    /// ` (payload)`, shared by `Some` and unary variant cases.
    fn print_payload(&mut self, node: &Arc<Node>, value: &dyn Any) {
        self.out.push(' ');
        self.punct("(");
        self.print_node(node, value);
        self.punct(")");
    }

    /// Bracketed, `;`-separated items. `padded` adds inner spaces in compact mode.
    fn print_block(&mut self, open: &str, close: &str, padded: bool, entries: &[Entry<'_>]) {
        let c = self.config.colors;
        self.punct(open);

        if entries.is_empty() {
            self.punct(close);
            return;
        }

        let pretty = self.config.pretty;
        let outer = self.indent;
        if pretty {
            self.indent += 2;
        } else if padded {
            self.out.push(' ');
        }

        for (i, entry) in entries.iter().enumerate() {
            if i > 0 {
                self.punct(";");
                if !pretty {
                    self.out.push(' ');
                }
            }

            if pretty {
                self.newline();
            }

            if let Some(label) = entry.label {
                c.paint(&mut self.out, c.blue, label);
                self.punct(":");
                self.out.push(' ');
            }

            self.print_node(entry.node, entry.value);
        }

        if pretty {
            self.indent = outer;
            self.newline();
        } else if padded {
            self.out.push(' ');
        }

        self.punct(close);
    }

    fn newline(&mut self) {
        self.out.push('\n');
        self.out.push_str(&" ".repeat(self.indent));
    }

    fn punct(&mut self, text: &str) {
        let c = self.config.colors;
        c.paint(&mut self.out, c.dim, text);
    }
}

/// Shortest round-tripping decimal; infinities are spelled out.
pub fn format_float(x: f64) -> String {
    if x == f64::INFINITY {
        "infinity".to_owned()
    } else if x == f64::NEG_INFINITY {
        "neg_infinity".to_owned()
    } else if x.is_nan() {
        "nan".to_owned()
    } else {
        format!("{x:?}")
    }
}
