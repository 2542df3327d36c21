//! Admission-time error type for the core data model.
//!
//! Plain enum + `core::fmt::Display`, no `thiserror` — this crate is
//! `no_std` + `alloc` by default, and `thiserror`'s derive assumes
//! `std::error::Error`, exactly why `vm_core::errors::CoreError` in the
//! teacher repo hand-writes its `Display` impl instead of deriving one.

use core::fmt;

/// Errors raised while admitting attributes, attribute sets, functional
/// dependencies, or a relation schema. These are programming errors in the
/// caller: the core asserts these invariants rather than attempting
/// recovery (spec §7, InvalidInput).
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SchemaError {
    EmptyAttributeName,
    EmptyAttributeSet,
    EmptyLhs,
    EmptyRhs,
    TrivialDependency,
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::EmptyAttributeName => write!(f, "attribute name must be non-empty"),
            SchemaError::EmptyAttributeSet => write!(f, "attribute set must be non-empty"),
            SchemaError::EmptyLhs => write!(f, "functional dependency left-hand side must be non-empty"),
            SchemaError::EmptyRhs => write!(f, "functional dependency right-hand side must be non-empty"),
            SchemaError::TrivialDependency => {
                write!(f, "functional dependency is trivial after admission (rhs is a subset of lhs)")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SchemaError {}

pub type SchemaResult<T> = Result<T, SchemaError>;
