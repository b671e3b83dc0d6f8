//! Type-syntax rendering.

use std::any::Any;
use std::sync::Arc;

use typerep_core::{NoopTracer, Node, Pass, Prim, Record, Tracer, Ty, Variant};

use super::naming::FreshVars;
use crate::Config;

/// Render the type syntax of `ty`, uncolored.
pub fn describe<A: Any>(ty: &Ty<A>) -> String {
    SyntaxPrinter::new(Config::new()).describe(ty)
}

/// Type-syntax printer, generic over a tracer.
///
/// Only the color settings of [`Config`] apply; type syntax is always one line.
pub struct SyntaxPrinter<T: Tracer = NoopTracer> {
    config: Config,
    tracer: T,
    vars: FreshVars,
    out: String,
    depth: usize,
}

impl SyntaxPrinter {
    pub fn new(config: Config) -> Self {
        Self::with_tracer(config, NoopTracer)
    }
}

impl<T: Tracer> SyntaxPrinter<T> {
    pub fn with_tracer(config: Config, tracer: T) -> Self {
        Self {
            config,
            tracer,
            vars: FreshVars::new(),
            out: String::new(),
            depth: 0,
        }
    }

    /// Render `ty`. Fresh variables restart at `'a` on every call.
    pub fn describe<A: Any>(&mut self, ty: &Ty<A>) -> String {
        self.describe_node(ty.node())
    }

    pub fn describe_node(&mut self, node: &Arc<Node>) -> String {
        self.vars = FreshVars::new();
        self.render(node);
        std::mem::take(&mut self.out)
    }

    fn render(&mut self, node: &Arc<Node>) {
        self.tracer.trace_enter(Pass::Describe, node.kind(), self.depth);
        self.depth += 1;

        match &**node {
            Node::Fix(fix) => {
                self.tracer.trace_unroll(Pass::Describe, self.depth);
                // Probe the shape; the result is discarded.
                let probe = fix.unroll(Node::var("_"));
                let named = match &*probe {
                    Node::Record(record) => Some(record.name().to_owned()),
                    Node::Variant(variant) => Some(variant.name().to_owned()),
                    _ => None,
                };
                match named {
                    Some(name) => self.render(&fix.unroll(Node::var(name))),
                    None => {
                        let var = self.vars.fresh();
                        let body = fix.unroll(Node::var(var.clone()));
                        self.punct("(");
                        self.render(&body);
                        self.punct(" as ");
                        self.var(&var);
                        self.punct(")");
                    }
                }
            }
            Node::Custom(custom) => match custom.ty() {
                Some(ty) => self.render(ty),
                None => self.punct("-"),
            },
            Node::Map(map) => {
                self.punct("Map");
                self.out.push(' ');
                self.punct("(");
                self.render(map.repr());
                self.punct(")");
            }
            Node::Prim(prim) => self.prim(*prim),
            Node::List(seq) => {
                self.render(seq.elem());
                self.out.push(' ');
                self.type_name(&format!("list{}", seq.length_hint().suffix()));
            }
            Node::Array(seq) => {
                self.render(seq.elem());
                self.out.push(' ');
                self.type_name(&format!("array{}", seq.length_hint().suffix()));
            }
            Node::Option(opt) => {
                self.render(opt.inner());
                self.out.push(' ');
                self.type_name("option");
            }
            Node::Tuple(tuple) => {
                self.punct("(");
                for (i, elem) in tuple.elems().iter().enumerate() {
                    if i > 0 {
                        self.punct(" * ");
                    }
                    self.render(elem);
                }
                self.punct(")");
            }
            Node::Record(record) => self.record(record),
            Node::Variant(variant) => self.variant(variant),
            Node::Var(name) => self.var(name),
        }

        self.depth -= 1;
    }

    fn prim(&mut self, prim: Prim) {
        let suffix = prim.length_hint().map(|len| len.suffix()).unwrap_or_default();
        self.type_name(&format!("{}{}", prim.name(), suffix));
    }

    /// `(< x : int; y : int > as point)`
    fn record(&mut self, record: &Record) {
        self.punct("(<");
        for (i, field) in record.fields().enumerate() {
            self.punct(if i == 0 { " " } else { "; " });
            self.type_name(field.name());
            self.punct(" : ");
            self.render(field.ty());
        }
        self.punct(" >");
        self.alias(record.name());
    }

    /// ``([ `Circle of float | `Square ] as shape)``
    fn variant(&mut self, variant: &Variant) {
        self.punct("([");
        for (i, case) in variant.cases().enumerate() {
            self.punct(if i == 0 { " `" } else { " | `" });
            self.type_name(&case.display_name());
            if let Some(payload) = case.payload() {
                self.punct(" of ");
                self.render(payload);
            }
        }
        if !variant.is_empty() {
            self.out.push(' ');
        }
        self.punct("]");
        self.alias(variant.name());
    }

    fn alias(&mut self, name: &str) {
        self.punct(" as ");
        self.type_name(name);
        self.punct(")");
    }

    /// Type, field and case names.
    fn type_name(&mut self, text: &str) {
        let c = self.config.colors;
        c.paint(&mut self.out, c.blue, text);
    }

    fn var(&mut self, name: &str) {
        let c = self.config.colors;
        c.paint(&mut self.out, c.green, name);
    }

    /// Punctuation and keywords.
    fn punct(&mut self, text: &str) {
        let c = self.config.colors;
        c.paint(&mut self.out, c.dim, text);
    }
}
