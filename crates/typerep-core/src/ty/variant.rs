//! Named sums.

use std::any::Any;
use std::marker::PhantomData;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::invariants::{self, ensure_owned, ensure_ref};
use crate::utils::{capitalize, matches_case_name};

use super::Ty;
use super::node::{Erased, Node};

type InjectFn = dyn Fn(Option<Erased>) -> Erased + Send + Sync;
type TagFn = dyn for<'v> Fn(&'v dyn Any) -> Tag<'v> + Send + Sync;

/// Discriminant result: which case a value is in, and its payload if any.
///
/// Only produced by [`Case0::tag`] and [`Case1::tag`].
#[derive(Clone, Copy)]
pub struct Tag<'v> {
    index: usize,
    payload: Option<&'v dyn Any>,
}

pub struct Case {
    name: String,
    payload: Option<Arc<Node>>,
    inject: Box<InjectFn>,
}

impl Case {
    /// Name as declared.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name with its first character uppercased, as printed.
    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }

    /// Payload descriptor; `None` for nullary cases.
    pub fn payload(&self) -> Option<&Arc<Node>> {
        self.payload.as_ref()
    }

    /// Build a variant value in this case.
    ///
    /// Panics if `payload` presence disagrees with the case's arity.
    pub fn inject(&self, payload: Option<Erased>) -> Erased {
        (self.inject)(payload)
    }
}

pub struct Variant {
    name: String,
    cases: IndexMap<String, Case>,
    tag: Box<TagFn>,
}

impl Variant {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cases(&self) -> impl ExactSizeIterator<Item = &Case> {
        self.cases.values()
    }

    /// Look up a case by its declared or capitalized name.
    pub fn case(&self, name: &str) -> Option<&Case> {
        self.cases
            .get(name)
            .or_else(|| self.cases().find(|case| matches_case_name(&case.name, name)))
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// The case `value` is in, with its payload.
    pub fn active<'v>(&self, value: &'v dyn Any) -> (&Case, Option<&'v dyn Any>) {
        let tag = (self.tag)(value);
        let Some((_, case)) = self.cases.get_index(tag.index) else {
            invariants::case_out_of_range(&self.name, tag.index, self.cases.len());
        };
        if case.payload.is_some() != tag.payload.is_some() {
            invariants::payload_mismatch(&case.name, case.payload.is_some());
        }
        (case, tag.payload)
    }
}

/// Handle to a nullary case, used inside the discriminant.
pub struct Case0<A> {
    index: usize,
    _marker: PhantomData<fn(A) -> A>,
}

impl<A> Clone for Case0<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for Case0<A> {}

impl<A> Case0<A> {
    pub fn tag(self) -> Tag<'static> {
        Tag {
            index: self.index,
            payload: None,
        }
    }
}

/// Handle to a unary case carrying a `T`.
pub struct Case1<A, T> {
    index: usize,
    _marker: PhantomData<fn(A, T) -> (A, T)>,
}

impl<A, T> Clone for Case1<A, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, T> Copy for Case1<A, T> {}

impl<A, T: Any> Case1<A, T> {
    pub fn tag(self, payload: &T) -> Tag<'_> {
        Tag {
            index: self.index,
            payload: Some(payload),
        }
    }
}

/// Builder for variant descriptors over `A`.
///
/// ```
/// use typerep_core::{Ty, VariantBuilder};
///
/// #[derive(Clone)]
/// enum Shape {
///     Square,
///     Circle(f64),
/// }
///
/// let mut b = VariantBuilder::new("shape");
/// let square = b.case0("square", Shape::Square);
/// let circle = b.case1("circle", Ty::float(), Shape::Circle);
/// let shape: Ty<Shape> = b.seal(move |s| match s {
///     Shape::Square => square.tag(),
///     Shape::Circle(r) => circle.tag(r),
/// });
/// ```
pub struct VariantBuilder<A> {
    name: String,
    cases: IndexMap<String, Case>,
    _marker: PhantomData<fn(A) -> A>,
}

impl<A: Any> VariantBuilder<A> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cases: IndexMap::new(),
            _marker: PhantomData,
        }
    }

    /// Declare a nullary case whose value is `value`.
    pub fn case0(&mut self, name: impl Into<String>, value: A) -> Case0<A>
    where
        A: Clone + Send + Sync,
    {
        let name = name.into();
        let case_name = name.clone();
        let inject = move |payload: Option<Erased>| {
            if payload.is_some() {
                invariants::payload_mismatch(&case_name, false);
            }
            Box::new(value.clone()) as Erased
        };
        let index = self.push(name, None, Box::new(inject));
        Case0 {
            index,
            _marker: PhantomData,
        }
    }

    /// Declare a unary case built by `inject`.
    pub fn case1<T, F>(&mut self, name: impl Into<String>, ty: Ty<T>, inject: F) -> Case1<A, T>
    where
        T: Any,
        F: Fn(T) -> A + Send + Sync + 'static,
    {
        let name = name.into();
        let case_name = name.clone();
        let inject = move |payload: Option<Erased>| match payload {
            Some(payload) => Box::new(inject(ensure_owned::<T>(payload))) as Erased,
            None => invariants::payload_mismatch(&case_name, true),
        };
        let index = self.push(name, Some(ty.into_node()), Box::new(inject));
        Case1 {
            index,
            _marker: PhantomData,
        }
    }

    /// Finish with the discriminant. Must return a tag from this builder's handles.
    pub fn seal<F>(self, tag: F) -> Ty<A>
    where
        F: for<'v> Fn(&'v A) -> Tag<'v> + Send + Sync + 'static,
    {
        let tag = tag_fn(move |value| tag(ensure_ref::<A>(value)));
        Ty::from_node(Arc::new(Node::Variant(Variant {
            name: self.name,
            cases: self.cases,
            tag,
        })))
    }

    fn push(&mut self, name: String, payload: Option<Arc<Node>>, inject: Box<InjectFn>) -> usize {
        if self.cases.contains_key(&name) {
            invariants::duplicate_member("variant", &self.name, &name);
        }
        let case = Case {
            name: name.clone(),
            payload,
            inject,
        };
        self.cases.insert_full(name, case).0
    }
}

fn tag_fn<F>(f: F) -> Box<TagFn>
where
    F: for<'v> Fn(&'v dyn Any) -> Tag<'v> + Send + Sync + 'static,
{
    Box::new(f)
}
