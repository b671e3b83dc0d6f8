//! Tracing for descriptor traversals.
//!
//! Printers and parsers are generic over a [`Tracer`]. With [`NoopTracer`]
//! every hook is an empty `#[inline(always)]` function and the calls vanish.
//! [`PrintTracer`] collects human-readable lines for debugging a traversal
//! over a recursive or deeply wrapped descriptor.

use crate::Colors;
use crate::error::ParseError;
use crate::ty::Kind;

/// Which traversal emitted a trace event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pass {
    /// Value printing.
    Print,
    /// Type-syntax rendering.
    Describe,
    /// Reading a value from text.
    Parse,
}

impl Pass {
    pub fn as_str(self) -> &'static str {
        match self {
            Pass::Print => "print",
            Pass::Describe => "describe",
            Pass::Parse => "parse",
        }
    }
}

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Fixpoint unrolls and parse failures only.
    #[default]
    Default,
    /// Every descriptor node entered.
    Verbose,
}

/// Instrumentation hooks called by traversals.
///
/// - `trace_enter` - before handling a descriptor node
/// - `trace_unroll` - when a fixpoint is expanded one level
/// - `trace_parse_failure` - where a parse error originates
pub trait Tracer {
    fn trace_enter(&mut self, pass: Pass, kind: Kind, depth: usize);

    fn trace_unroll(&mut self, pass: Pass, depth: usize);

    /// Called once per error, at the node that produced it. Wrappers that
    /// merely propagate the error are not reported again.
    fn trace_parse_failure(&mut self, kind: Kind, depth: usize, error: &ParseError);
}

impl<T: Tracer + ?Sized> Tracer for &mut T {
    #[inline(always)]
    fn trace_enter(&mut self, pass: Pass, kind: Kind, depth: usize) {
        (**self).trace_enter(pass, kind, depth);
    }

    #[inline(always)]
    fn trace_unroll(&mut self, pass: Pass, depth: usize) {
        (**self).trace_unroll(pass, depth);
    }

    #[inline(always)]
    fn trace_parse_failure(&mut self, kind: Kind, depth: usize, error: &ParseError) {
        (**self).trace_parse_failure(kind, depth, error);
    }
}

/// No-op tracer that gets optimized away completely.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_enter(&mut self, _pass: Pass, _kind: Kind, _depth: usize) {}

    #[inline(always)]
    fn trace_unroll(&mut self, _pass: Pass, _depth: usize) {}

    #[inline(always)]
    fn trace_parse_failure(&mut self, _kind: Kind, _depth: usize, _error: &ParseError) {}
}

/// Tracer that collects a traversal log.
#[derive(Debug, Default)]
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            colors,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All collected lines joined with newlines.
    pub fn dump(&self) -> String {
        self.lines.join("\n")
    }

    fn push(&mut self, pass: Pass, depth: usize, body: &str) {
        let c = &self.colors;
        let line = format!(
            "{}{:<9}{}{}{}",
            c.dim,
            pass.as_str(),
            c.reset,
            "  ".repeat(depth),
            body
        );
        self.lines.push(line);
    }
}

impl Tracer for PrintTracer {
    fn trace_enter(&mut self, pass: Pass, kind: Kind, depth: usize) {
        if self.verbosity != Verbosity::Verbose {
            return;
        }
        let c = self.colors;
        self.push(pass, depth, &format!("{}{}{}", c.blue, kind, c.reset));
    }

    fn trace_unroll(&mut self, pass: Pass, depth: usize) {
        let c = self.colors;
        self.push(pass, depth, &format!("{}↻{} unroll self", c.dim, c.reset));
    }

    fn trace_parse_failure(&mut self, kind: Kind, depth: usize, error: &ParseError) {
        let c = self.colors;
        let body = format!("{}{}{} failed: {}{}{}", c.blue, kind, c.reset, c.green, error, c.reset);
        self.push(Pass::Parse, depth, &body);
    }
}
