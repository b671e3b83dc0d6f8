//! Invariant checks excluded from coverage reports.
//!
//! Every function here either returns a value the descriptor guarantees or
//! panics: reaching a panic means a descriptor was built inconsistently with
//! its values, which is a bug upstream of the traversal, not bad input.

#![cfg_attr(coverage_nightly, coverage(off))]

use std::any::{Any, type_name};

/// Recover a typed reference from an erased value.
pub fn ensure_ref<T: Any>(value: &dyn Any) -> &T {
    value.downcast_ref::<T>().unwrap_or_else(|| {
        panic!(
            "descriptor/value mismatch: expected a `{}` \
             (descriptor was not built from its typed constructors)",
            type_name::<T>()
        )
    })
}

/// Recover a typed value from an erased box.
pub fn ensure_owned<T: Any>(value: Box<dyn Any>) -> T {
    match value.downcast::<T>() {
        Ok(value) => *value,
        Err(_) => panic!(
            "descriptor/value mismatch: expected a `{}` \
             (descriptor was not built from its typed constructors)",
            type_name::<T>()
        ),
    }
}

/// A `Var` placeholder was reached while handling a real value.
///
/// `Var` only exists transiently inside type-syntax rendering.
pub fn unbound_type_variable(name: &str) -> ! {
    panic!(
        "unbound type variable `{name}`: type variables are placeholders for \
         type-syntax rendering and cannot carry values"
    )
}

pub(crate) fn case_out_of_range(variant: &str, index: usize, len: usize) -> ! {
    panic!(
        "variant `{variant}`: discriminant returned case #{index} \
         but only {len} cases are registered"
    )
}

pub(crate) fn payload_mismatch(case: &str, expected: bool) -> ! {
    if expected {
        panic!("case `{case}` carries a payload but none was supplied")
    }
    panic!("case `{case}` is nullary but a payload was supplied")
}

pub(crate) fn fields_exhausted(record: &str) -> ! {
    panic!("record `{record}`: constructor took more fields than were declared")
}

pub(crate) fn arity_mismatch(expected: usize, found: usize) -> ! {
    panic!("tuple of arity {expected} joined from {found} components")
}

pub(crate) fn duplicate_member(parent_kind: &str, parent: &str, member: &str) -> ! {
    panic!("{parent_kind} `{parent}` declares `{member}` twice")
}
