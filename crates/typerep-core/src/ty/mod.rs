//! Typed descriptors over the erased node tree.

mod kind;
mod node;
mod prim;
mod record;
mod variant;


use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::ParseError;
use crate::invariants::{ensure_owned, ensure_ref};

pub use kind::Kind;
pub use node::{Custom, Fix, Map, Node, Opt, Product, Projected, Seq, Tuple};
pub use prim::{Len, Prim, PrimRef};
pub use record::{Field, FieldValues, Record, RecordBuilder};
pub use variant::{Case, Case0, Case1, Tag, Variant, VariantBuilder};

use node::{Erased, backward_fn, get_fn, items_fn, split_fn};

/// Descriptor for values of type `A`.
///
/// A cheap handle (one `Arc`) around a shared [`Node`]. Built only through the
/// typed constructors below, so a `Ty<A>` always agrees with every `A`.
pub struct Ty<A> {
    node: Arc<Node>,
    _marker: PhantomData<fn(A) -> A>,
}

impl<A> Clone for Ty<A> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
            _marker: PhantomData,
        }
    }
}

impl<A> fmt::Debug for Ty<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.node, f)
    }
}

impl<A> Ty<A> {
    pub(crate) fn from_node(node: Arc<Node>) -> Self {
        Self {
            node,
            _marker: PhantomData,
        }
    }

    pub fn node(&self) -> &Arc<Node> {
        &self.node
    }

    pub fn into_node(self) -> Arc<Node> {
        self.node
    }

    pub fn kind(&self) -> Kind {
        self.node.kind()
    }

    fn prim(prim: Prim) -> Self {
        Self::from_node(Arc::new(Node::Prim(prim)))
    }
}

impl Ty<()> {
    pub fn unit() -> Self {
        Self::prim(Prim::Unit)
    }
}

impl Ty<bool> {
    pub fn bool() -> Self {
        Self::prim(Prim::Bool)
    }
}

impl Ty<char> {
    pub fn char() -> Self {
        Self::prim(Prim::Char)
    }
}

impl Ty<isize> {
    /// Native-width integer.
    pub fn int() -> Self {
        Self::prim(Prim::Int)
    }
}

impl Ty<i32> {
    pub fn int32() -> Self {
        Self::prim(Prim::Int32)
    }
}

impl Ty<i64> {
    pub fn int64() -> Self {
        Self::prim(Prim::Int64)
    }
}

impl Ty<f64> {
    pub fn float() -> Self {
        Self::prim(Prim::Float)
    }
}

impl Ty<String> {
    pub fn string() -> Self {
        Self::string_with(Len::Unbounded)
    }

    pub fn string_with(len: Len) -> Self {
        Self::prim(Prim::String(len))
    }
}

impl Ty<Vec<u8>> {
    pub fn bytes() -> Self {
        Self::bytes_with(Len::Unbounded)
    }

    pub fn bytes_with(len: Len) -> Self {
        Self::prim(Prim::Bytes(len))
    }
}

impl<T: Any> Ty<Vec<T>> {
    pub fn list(elem: Ty<T>) -> Self {
        Self::list_with(elem, Len::Unbounded)
    }

    pub fn list_with(elem: Ty<T>, len: Len) -> Self {
        Self::from_node(Arc::new(Node::List(seq::<Vec<T>, T>(elem, len))))
    }
}

impl<T: Any> Ty<Box<[T]>> {
    pub fn array(elem: Ty<T>) -> Self {
        Self::array_with(elem, Len::Unbounded)
    }

    pub fn array_with(elem: Ty<T>, len: Len) -> Self {
        Self::from_node(Arc::new(Node::Array(seq::<Box<[T]>, T>(elem, len))))
    }
}

fn seq<S, T>(elem: Ty<T>, len: Len) -> Seq
where
    S: AsRef<[T]> + FromIterator<T> + Any,
    T: Any,
{
    let items = items_fn(|value| {
        ensure_ref::<S>(value)
            .as_ref()
            .iter()
            .map(|item| item as &dyn Any)
            .collect()
    });
    let collect = |items: Vec<Erased>| {
        let seq: S = items.into_iter().map(ensure_owned::<T>).collect();
        Box::new(seq) as Erased
    };
    Seq::new(elem.into_node(), len, items, Box::new(collect))
}

impl<T: Any> Ty<Option<T>> {
    pub fn option(inner: Ty<T>) -> Self {
        let get = get_fn(|value| {
            ensure_ref::<Option<T>>(value)
                .as_ref()
                .map(|inner| inner as &dyn Any)
        });
        let wrap = |value: Option<Erased>| Box::new(value.map(ensure_owned::<T>)) as Erased;
        Self::from_node(Arc::new(Node::Option(Opt::new(
            inner.into_node(),
            get,
            Box::new(wrap),
        ))))
    }
}

impl<A: Any, B: Any> Ty<(A, B)> {
    pub fn pair(a: Ty<A>, b: Ty<B>) -> Self {
        let split = split_fn(|value| {
            let (a, b) = ensure_ref::<(A, B)>(value);
            [a as &dyn Any, b as &dyn Any]
        });
        let join = |[a, b]: [Erased; 2]| {
            Box::new((ensure_owned::<A>(a), ensure_owned::<B>(b))) as Erased
        };
        let product = Product::new([a.into_node(), b.into_node()], split, Box::new(join));
        Self::from_node(Arc::new(Node::Tuple(Tuple::Pair(product))))
    }
}

impl<A: Any, B: Any, C: Any> Ty<(A, B, C)> {
    pub fn triple(a: Ty<A>, b: Ty<B>, c: Ty<C>) -> Self {
        let split = split_fn(|value| {
            let (a, b, c) = ensure_ref::<(A, B, C)>(value);
            [a as &dyn Any, b as &dyn Any, c as &dyn Any]
        });
        let join = |[a, b, c]: [Erased; 3]| {
            Box::new((
                ensure_owned::<A>(a),
                ensure_owned::<B>(b),
                ensure_owned::<C>(c),
            )) as Erased
        };
        let product = Product::new(
            [a.into_node(), b.into_node(), c.into_node()],
            split,
            Box::new(join),
        );
        Self::from_node(Arc::new(Node::Tuple(Tuple::Triple(product))))
    }
}

impl<T: Any> Ty<Box<T>> {
    /// Heap indirection, transparent in every rendering.
    pub fn boxed(inner: Ty<T>) -> Self {
        Self::map_ref(inner, Box::new, |b| &**b)
    }
}

impl<A: Any> Ty<A> {
    /// `A` represented as an `R`, converting both ways by value.
    pub fn map<R, F, B>(repr: Ty<R>, forward: F, backward: B) -> Self
    where
        R: Any,
        F: Fn(R) -> A + Send + Sync + 'static,
        B: Fn(&A) -> R + Send + Sync + 'static,
    {
        let forward = move |value: Erased| Box::new(forward(ensure_owned::<R>(value))) as Erased;
        let backward = backward_fn(move |value| {
            Projected::Owned(Box::new(backward(ensure_ref::<A>(value))))
        });
        Self::from_node(Arc::new(Node::Map(Map::new(
            repr.into_node(),
            Box::new(forward),
            backward,
        ))))
    }

    /// `A` represented as an `R` it contains, borrowed when printing.
    pub fn map_ref<R, F, B>(repr: Ty<R>, forward: F, backward: B) -> Self
    where
        R: Any,
        F: Fn(R) -> A + Send + Sync + 'static,
        B: for<'v> Fn(&'v A) -> &'v R + Send + Sync + 'static,
    {
        let forward = move |value: Erased| Box::new(forward(ensure_owned::<R>(value))) as Erased;
        let backward = backward_fn(move |value| {
            Projected::Borrowed(backward(ensure_ref::<A>(value)) as &dyn Any)
        });
        Self::from_node(Arc::new(Node::Map(Map::new(
            repr.into_node(),
            Box::new(forward),
            backward,
        ))))
    }

    /// Recursive descriptor: `body` receives the descriptor being defined.
    ///
    /// `body` runs on every unroll, so it must be pure.
    ///
    /// ```
    /// use typerep_core::{Kind, Ty};
    ///
    /// struct Nat(Option<Box<Nat>>);
    ///
    /// let nat: Ty<Nat> = Ty::fix(|nat| {
    ///     Ty::map_ref(Ty::option(Ty::boxed(nat)), Nat, |n: &Nat| &n.0)
    /// });
    /// assert_eq!(nat.kind(), Kind::Fix);
    /// ```
    pub fn fix<F>(body: F) -> Self
    where
        F: Fn(Ty<A>) -> Ty<A> + Send + Sync + 'static,
    {
        let fix = Fix::new(move |placeholder| body(Ty::from_node(placeholder)).into_node());
        Self::from_node(Arc::new(Node::Fix(fix)))
    }

    /// Opaque descriptor with caller-supplied printing and parsing.
    pub fn custom<P, Q>(print: P, parse: Q) -> Self
    where
        P: Fn(&mut String, &A) + Send + Sync + 'static,
        Q: Fn(&str) -> Result<A, ParseError> + Send + Sync + 'static,
    {
        Self::custom_node(print, parse, None)
    }

    /// Like [`Ty::custom`], with a descriptor to show in type syntax.
    pub fn custom_of<P, Q>(print: P, parse: Q, ty: Ty<A>) -> Self
    where
        P: Fn(&mut String, &A) + Send + Sync + 'static,
        Q: Fn(&str) -> Result<A, ParseError> + Send + Sync + 'static,
    {
        Self::custom_node(print, parse, Some(ty.into_node()))
    }

    fn custom_node<P, Q>(print: P, parse: Q, ty: Option<Arc<Node>>) -> Self
    where
        P: Fn(&mut String, &A) + Send + Sync + 'static,
        Q: Fn(&str) -> Result<A, ParseError> + Send + Sync + 'static,
    {
        let print = move |out: &mut String, value: &dyn Any| print(out, ensure_ref::<A>(value));
        let parse = move |text: &str| parse(text).map(|value| Box::new(value) as Erased);
        Self::from_node(Arc::new(Node::Custom(Custom::new(
            Box::new(print),
            Box::new(parse),
            ty,
        ))))
    }

    /// Type-syntax placeholder named `name`.
    ///
    /// Only meaningful for rendering; printing or decoding a value through it
    /// panics.
    pub fn var(name: impl Into<String>) -> Self {
        Self::from_node(Node::var(name))
    }
}
