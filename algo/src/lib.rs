//! schema_algo — the algorithm layer of the relational-schema normalization
//! engine. Depends only on `schema_core`; every function here is total and
//! side-effect-free beyond the `tracing::warn!` calls `Diagnostic::log`
//! emits at genuine fallback points.
//!
//! `analyze` (see [`report`]) is the single entry point most callers want;
//! the individual components are exported for callers who need one piece
//! in isolation (closure alone, candidate keys alone, etc).

#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod bcnf;
pub mod classify;
pub mod closure;
pub mod cover;
pub mod decompose2nf;
pub mod diagnostics;
pub mod keys;
pub mod report;
pub mod subsets;
pub mod synthesis3nf;

// ----------------------------- Closure & subsets -----------------------------

pub use closure::closure;
pub use subsets::{non_empty_subsets, TooManyAttributes, MAX_ENUMERABLE_ATTRIBUTES};

// ----------------------------- Keys & classification -------------------------

pub use classify::{classify, prime_attributes, NormalFormReport, Violations};
pub use keys::candidate_keys;

// ----------------------------- Minimal cover ---------------------------------

pub use cover::{consolidate_by_lhs, minimal_cover};

// ----------------------------- Decomposition ---------------------------------

#[cfg(feature = "synthesis")]
pub use decompose2nf::decompose_2nf;
#[cfg(feature = "synthesis")]
pub use synthesis3nf::decompose_3nf;

#[cfg(feature = "bcnf")]
pub use bcnf::decompose_bcnf;

// ----------------------------- Diagnostics & orchestrator --------------------

pub use diagnostics::Diagnostic;
pub use report::{analyze, Report};

/// Convenience re-exports for downstream crates.
pub mod prelude {
    pub use crate::{analyze, candidate_keys, classify, closure, minimal_cover, Diagnostic, NormalFormReport, Report};
    #[cfg(feature = "bcnf")]
    pub use crate::decompose_bcnf;
    #[cfg(feature = "synthesis")]
    pub use crate::{decompose_2nf, decompose_3nf};
}
