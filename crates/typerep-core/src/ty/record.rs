//! Named products.

use std::any::Any;
use std::marker::PhantomData;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::invariants::{self, ensure_owned, ensure_ref};

use super::Ty;
use super::node::{Erased, Node, ViewFn, view_fn};

type MakeFn = dyn Fn(Vec<Erased>) -> Erased + Send + Sync;

/// A record field: name, descriptor, and accessor.
pub struct Field {
    name: String,
    ty: Arc<Node>,
    get: Box<ViewFn>,
}

impl Field {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &Arc<Node> {
        &self.ty
    }

    /// Borrow this field out of a record value.
    pub fn get<'v>(&self, record: &'v dyn Any) -> &'v dyn Any {
        (self.get)(record)
    }
}

/// Record descriptor. Field order is declaration order.
pub struct Record {
    name: String,
    fields: IndexMap<String, Field>,
    make: Option<Box<MakeFn>>,
}

impl Record {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> impl ExactSizeIterator<Item = &Field> {
        self.fields.values()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether values can be built from field values (see [`RecordBuilder::seal_with`]).
    pub fn is_constructible(&self) -> bool {
        self.make.is_some()
    }

    /// Build a record value from field values in declaration order.
    ///
    /// Returns `None` for records sealed without a constructor.
    pub fn make(&self, values: Vec<Erased>) -> Option<Erased> {
        self.make.as_ref().map(|make| make(values))
    }
}

/// Field values handed to a record constructor, in declaration order.
pub struct FieldValues<'r> {
    record: &'r str,
    values: std::vec::IntoIter<Erased>,
}

impl FieldValues<'_> {
    /// Take the next field value.
    ///
    /// Panics if called more times than there are fields, or with a type
    /// other than the field's carrier.
    pub fn take<T: Any>(&mut self) -> T {
        match self.values.next() {
            Some(value) => ensure_owned(value),
            None => invariants::fields_exhausted(self.record),
        }
    }
}

/// Builder for record descriptors over `A`.
///
/// ```
/// use typerep_core::{RecordBuilder, Ty};
///
/// struct User {
///     name: String,
///     age: i32,
/// }
///
/// let user: Ty<User> = RecordBuilder::new("user")
///     .field("name", Ty::string(), |u: &User| &u.name)
///     .field("age", Ty::int32(), |u: &User| &u.age)
///     .seal_with(|f| User {
///         name: f.take(),
///         age: f.take(),
///     });
/// ```
pub struct RecordBuilder<A> {
    name: String,
    fields: IndexMap<String, Field>,
    _marker: PhantomData<fn(A) -> A>,
}

impl<A: Any> RecordBuilder<A> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
            _marker: PhantomData,
        }
    }

    /// Append a field. Panics if a field of the same name was already added.
    pub fn field<T, F>(mut self, name: impl Into<String>, ty: Ty<T>, get: F) -> Self
    where
        T: Any,
        F: for<'v> Fn(&'v A) -> &'v T + Send + Sync + 'static,
    {
        let name = name.into();
        if self.fields.contains_key(&name) {
            invariants::duplicate_member("record", &self.name, &name);
        }
        let field = Field {
            name: name.clone(),
            ty: ty.into_node(),
            get: view_fn(move |value| get(ensure_ref::<A>(value)) as &dyn Any),
        };
        self.fields.insert(name, field);
        self
    }

    /// Finish without a constructor: values can be printed but not decoded.
    pub fn seal(self) -> Ty<A> {
        self.finish(None)
    }

    /// Finish with a constructor that takes field values in declaration order.
    pub fn seal_with<F>(self, make: F) -> Ty<A>
    where
        F: Fn(&mut FieldValues<'_>) -> A + Send + Sync + 'static,
    {
        let record = self.name.clone();
        let make = move |values: Vec<Erased>| {
            let mut fields = FieldValues {
                record: &record,
                values: values.into_iter(),
            };
            Box::new(make(&mut fields)) as Erased
        };
        self.finish(Some(Box::new(make)))
    }

    fn finish(self, make: Option<Box<MakeFn>>) -> Ty<A> {
        Ty::from_node(Arc::new(Node::Record(Record {
            name: self.name,
            fields: self.fields,
            make,
        })))
    }
}
