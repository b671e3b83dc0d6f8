//! Type-erased descriptor tree.
//!
//! Every node is immutable and `Send + Sync`. Values cross node boundaries as
//! `&dyn Any` (borrowed, for printing) or `Box<dyn Any>` (owned, for parsing).
//! The closures stored here were captured by the typed constructors in
//! [`super::Ty`], so the downcasts they perform cannot fail for values paired
//! with the descriptor they were built with.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::ParseError;
use crate::invariants;

use super::kind::Kind;
use super::prim::{Len, Prim};
use super::record::Record;
use super::variant::Variant;

pub(crate) type Erased = Box<dyn Any>;

/// One node of a descriptor.
pub enum Node {
    Fix(Fix),
    Custom(Custom),
    Map(Map),
    Prim(Prim),
    List(Seq),
    Array(Seq),
    Option(Opt),
    Tuple(Tuple),
    Record(Record),
    Variant(Variant),
    /// Display-only placeholder, see [`Kind::Var`].
    Var(String),
}

impl Node {
    pub fn kind(&self) -> Kind {
        match self {
            Node::Fix(_) => Kind::Fix,
            Node::Custom(_) => Kind::Custom,
            Node::Map(_) => Kind::Map,
            Node::Prim(_) => Kind::Prim,
            Node::List(_) => Kind::List,
            Node::Array(_) => Kind::Array,
            Node::Option(_) => Kind::Option,
            Node::Tuple(_) => Kind::Tuple,
            Node::Record(_) => Kind::Record,
            Node::Variant(_) => Kind::Variant,
            Node::Var(_) => Kind::Var,
        }
    }

    /// A fresh `Var` node, used as a fixpoint placeholder.
    pub fn var(name: impl Into<String>) -> Arc<Node> {
        Arc::new(Node::Var(name.into()))
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Prim(p) => write!(f, "Prim({p:?})"),
            Node::List(s) | Node::Array(s) => f
                .debug_struct(self.kind().name())
                .field("elem", &s.elem)
                .field("len", &s.len)
                .finish(),
            Node::Option(o) => f.debug_tuple("Option").field(&o.inner).finish(),
            Node::Tuple(t) => f.debug_tuple("Tuple").field(&t.elems()).finish(),
            Node::Record(r) => f
                .debug_struct("Record")
                .field("name", &r.name())
                .field("fields", &r.fields().map(|field| field.name()).collect::<Vec<_>>())
                .finish(),
            Node::Variant(v) => f
                .debug_struct("Variant")
                .field("name", &v.name())
                .field("cases", &v.cases().map(|c| c.name()).collect::<Vec<_>>())
                .finish(),
            Node::Map(m) => f.debug_tuple("Map").field(&m.repr).finish(),
            Node::Custom(c) => f.debug_struct("Custom").field("ty", &c.ty).finish(),
            // Unrolling could recurse forever.
            Node::Fix(_) => f.write_str("Fix(..)"),
            Node::Var(name) => write!(f, "Var({name:?})"),
        }
    }
}

/// Recursive type: a body produced on demand from a placeholder.
///
/// The self-reference is never stored, so no `Arc` cycle exists.
pub struct Fix {
    unroll: Box<dyn Fn(Arc<Node>) -> Arc<Node> + Send + Sync>,
}

impl Fix {
    pub(crate) fn new(unroll: impl Fn(Arc<Node>) -> Arc<Node> + Send + Sync + 'static) -> Self {
        Self {
            unroll: Box::new(unroll),
        }
    }

    /// Substitute `placeholder` for the self-reference and return the body.
    pub fn unroll(&self, placeholder: Arc<Node>) -> Arc<Node> {
        (self.unroll)(placeholder)
    }
}

type PrintFn = dyn Fn(&mut String, &dyn Any) + Send + Sync;
type ParseFn = dyn Fn(&str) -> Result<Erased, ParseError> + Send + Sync;

/// Escape hatch: print and parse are supplied by the caller.
pub struct Custom {
    print: Box<PrintFn>,
    parse: Box<ParseFn>,
    ty: Option<Arc<Node>>,
}

impl Custom {
    pub(crate) fn new(print: Box<PrintFn>, parse: Box<ParseFn>, ty: Option<Arc<Node>>) -> Self {
        Self { print, parse, ty }
    }

    pub fn print(&self, out: &mut String, value: &dyn Any) {
        (self.print)(out, value)
    }

    pub fn parse(&self, text: &str) -> Result<Erased, ParseError> {
        (self.parse)(text)
    }

    /// Statically known underlying descriptor, if one was supplied.
    pub fn ty(&self) -> Option<&Arc<Node>> {
        self.ty.as_ref()
    }
}

/// Result of projecting a value onto a `Map`'s representee.
pub enum Projected<'v> {
    Borrowed(&'v dyn Any),
    Owned(Erased),
}

impl Projected<'_> {
    pub fn as_any(&self) -> &dyn Any {
        match self {
            Projected::Borrowed(value) => *value,
            Projected::Owned(value) => &**value,
        }
    }
}

type ForwardFn = dyn Fn(Erased) -> Erased + Send + Sync;
type BackwardFn = dyn for<'v> Fn(&'v dyn Any) -> Projected<'v> + Send + Sync;

/// Isomorphism (or projection) between `A` and a representee descriptor.
pub struct Map {
    repr: Arc<Node>,
    forward: Box<ForwardFn>,
    backward: Box<BackwardFn>,
}

impl Map {
    pub(crate) fn new(repr: Arc<Node>, forward: Box<ForwardFn>, backward: Box<BackwardFn>) -> Self {
        Self {
            repr,
            forward,
            backward,
        }
    }

    pub fn repr(&self) -> &Arc<Node> {
        &self.repr
    }

    /// Representee value to `A`.
    pub fn forward(&self, value: Erased) -> Erased {
        (self.forward)(value)
    }

    /// `A` to representee value.
    pub fn backward<'v>(&self, value: &'v dyn Any) -> Projected<'v> {
        (self.backward)(value)
    }
}

/// Borrow one part of a value, e.g. a record field.
pub(crate) type ViewFn = dyn (for<'v> Fn(&'v dyn Any) -> &'v dyn Any) + Send + Sync;
type ItemsFn = dyn for<'v> Fn(&'v dyn Any) -> Vec<&'v dyn Any> + Send + Sync;
type CollectFn = dyn Fn(Vec<Erased>) -> Erased + Send + Sync;

/// Homogeneous sequence, shared by `List` and `Array`.
pub struct Seq {
    elem: Arc<Node>,
    len: Len,
    items: Box<ItemsFn>,
    collect: Box<CollectFn>,
}

impl Seq {
    pub(crate) fn new(elem: Arc<Node>, len: Len, items: Box<ItemsFn>, collect: Box<CollectFn>) -> Self {
        Self {
            elem,
            len,
            items,
            collect,
        }
    }

    pub fn elem(&self) -> &Arc<Node> {
        &self.elem
    }

    pub fn length_hint(&self) -> Len {
        self.len
    }

    /// Borrow each element of a sequence value.
    pub fn items<'v>(&self, value: &'v dyn Any) -> Vec<&'v dyn Any> {
        (self.items)(value)
    }

    /// Build a sequence value from owned elements.
    pub fn collect(&self, items: Vec<Erased>) -> Erased {
        (self.collect)(items)
    }
}

type GetFn = dyn for<'v> Fn(&'v dyn Any) -> Option<&'v dyn Any> + Send + Sync;
type WrapFn = dyn Fn(Option<Erased>) -> Erased + Send + Sync;

pub struct Opt {
    inner: Arc<Node>,
    get: Box<GetFn>,
    wrap: Box<WrapFn>,
}

impl Opt {
    pub(crate) fn new(inner: Arc<Node>, get: Box<GetFn>, wrap: Box<WrapFn>) -> Self {
        Self { inner, get, wrap }
    }

    pub fn inner(&self) -> &Arc<Node> {
        &self.inner
    }

    pub fn get<'v>(&self, value: &'v dyn Any) -> Option<&'v dyn Any> {
        (self.get)(value)
    }

    pub fn wrap(&self, value: Option<Erased>) -> Erased {
        (self.wrap)(value)
    }
}

type SplitFn<const N: usize> = dyn for<'v> Fn(&'v dyn Any) -> [&'v dyn Any; N] + Send + Sync;
type JoinFn<const N: usize> = dyn Fn([Erased; N]) -> Erased + Send + Sync;

/// Fixed-arity product of `N` components.
pub struct Product<const N: usize> {
    elems: [Arc<Node>; N],
    split: Box<SplitFn<N>>,
    join: Box<JoinFn<N>>,
}

impl<const N: usize> Product<N> {
    pub(crate) fn new(elems: [Arc<Node>; N], split: Box<SplitFn<N>>, join: Box<JoinFn<N>>) -> Self {
        Self { elems, split, join }
    }

    pub fn elems(&self) -> &[Arc<Node>; N] {
        &self.elems
    }

    pub fn split<'v>(&self, value: &'v dyn Any) -> [&'v dyn Any; N] {
        (self.split)(value)
    }

    pub fn join(&self, parts: [Erased; N]) -> Erased {
        (self.join)(parts)
    }
}

/// Pairs and triples. Wider tuples are not representable.
pub enum Tuple {
    Pair(Product<2>),
    Triple(Product<3>),
}

impl Tuple {
    pub fn arity(&self) -> usize {
        match self {
            Tuple::Pair(_) => 2,
            Tuple::Triple(_) => 3,
        }
    }

    pub fn elems(&self) -> &[Arc<Node>] {
        match self {
            Tuple::Pair(p) => p.elems(),
            Tuple::Triple(p) => p.elems(),
        }
    }

    pub fn split<'v>(&self, value: &'v dyn Any) -> Vec<&'v dyn Any> {
        match self {
            Tuple::Pair(p) => p.split(value).to_vec(),
            Tuple::Triple(p) => p.split(value).to_vec(),
        }
    }

    /// Join components; panics unless exactly `arity()` parts are given.
    pub fn join(&self, parts: Vec<Erased>) -> Erased {
        let found = parts.len();
        match self {
            Tuple::Pair(p) => match <[Erased; 2]>::try_from(parts) {
                Ok(parts) => p.join(parts),
                Err(_) => invariants::arity_mismatch(2, found),
            },
            Tuple::Triple(p) => match <[Erased; 3]>::try_from(parts) {
                Ok(parts) => p.join(parts),
                Err(_) => invariants::arity_mismatch(3, found),
            },
        }
    }
}

// Identity helpers that pin a closure to a higher-ranked signature, so the
// returned reference lifetimes are tied to the argument.

pub(crate) fn items_fn<F>(f: F) -> Box<ItemsFn>
where
    F: for<'v> Fn(&'v dyn Any) -> Vec<&'v dyn Any> + Send + Sync + 'static,
{
    Box::new(f)
}

pub(crate) fn get_fn<F>(f: F) -> Box<GetFn>
where
    F: for<'v> Fn(&'v dyn Any) -> Option<&'v dyn Any> + Send + Sync + 'static,
{
    Box::new(f)
}

pub(crate) fn split_fn<const N: usize, F>(f: F) -> Box<SplitFn<N>>
where
    F: for<'v> Fn(&'v dyn Any) -> [&'v dyn Any; N] + Send + Sync + 'static,
{
    Box::new(f)
}

pub(crate) fn backward_fn<F>(f: F) -> Box<BackwardFn>
where
    F: for<'v> Fn(&'v dyn Any) -> Projected<'v> + Send + Sync + 'static,
{
    Box::new(f)
}

pub(crate) fn view_fn<F>(f: F) -> Box<ViewFn>
where
    F: (for<'v> Fn(&'v dyn Any) -> &'v dyn Any) + Send + Sync + 'static,
{
    Box::new(f)
}
