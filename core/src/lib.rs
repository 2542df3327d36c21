//! schema_core — core types for the relational-schema normalization engine.
//!
//! This crate is **I/O-free**. It defines the stable data model used across
//! the engine (`schema_algo`, and any out-of-tree presentation layer):
//!
//! - `Attribute` / `AttributeSet`: the opaque symbols and canonical sets
//!   that every algorithm operates on.
//! - `FunctionalDependency`: admitted, non-trivial FDs.
//! - `RelationSchema`: the pair (A, F) the rest of the engine analyzes.
//! - `SchemaError`: admission-time failures.
//! - `AnalysisConfig`: the two bounds the exponential-complexity paths need.
//!
//! Serialization derives are gated behind the `serde` feature.
//!
//! `no_std` + `alloc` by default (mirrors `vm_core`'s `#![cfg_attr(not(feature
//! = "std"), no_std)]`); enable the `std` feature for a plain `std` build.

#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod attribute;
pub mod attribute_set;
pub mod config;
pub mod errors;
pub mod fd;
pub mod schema;

pub use attribute::Attribute;
pub use attribute_set::{cmp_by_size_then_canonical, AttributeSet};
pub use config::AnalysisConfig;
pub use errors::{SchemaError, SchemaResult};
pub use fd::FunctionalDependency;
pub use schema::RelationSchema;

/// Convenience re-exports for downstream crates (mirrors `vm_algo`'s root
/// re-exports of the `vm_core` types it consumes most).
pub mod prelude {
    pub use crate::{
        AnalysisConfig, Attribute, AttributeSet, FunctionalDependency, RelationSchema,
        SchemaError, SchemaResult,
    };
}
