//! `FunctionalDependency` — an ordered pair (LHS, RHS) of non-empty
//! attribute sets, admitted under the invariants in spec §3.

use crate::attribute_set::AttributeSet;
use crate::errors::SchemaError;
use alloc::string::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FunctionalDependency {
    lhs: AttributeSet,
    rhs: AttributeSet,
}

impl FunctionalDependency {
    /// Admit a functional dependency.
    ///
    /// - LHS must be non-empty (`SchemaError::EmptyLhs`).
    /// - RHS must be non-empty *before* overlap stripping (`SchemaError::EmptyRhs`).
    /// - Any RHS attribute already present in LHS is stripped (spec §3: "RHS
    ///   ∩ LHS = ∅ (admission strips any overlap)").
    /// - If stripping leaves RHS empty, the FD was fully trivial and is
    ///   rejected (`SchemaError::TrivialDependency`), matching spec.md S5:
    ///   `{A,B}→{A}` is rejected outright, while `{A,B}→{A,C}` survives as
    ///   `{A,B}→{C}`.
    pub fn new(lhs: AttributeSet, rhs: AttributeSet) -> Result<Self, SchemaError> {
        if lhs.is_empty() {
            return Err(SchemaError::EmptyLhs);
        }
        if rhs.is_empty() {
            return Err(SchemaError::EmptyRhs);
        }
        let stripped_rhs = rhs.difference(&lhs);
        if stripped_rhs.is_empty() {
            return Err(SchemaError::TrivialDependency);
        }
        Ok(Self {
            lhs,
            rhs: stripped_rhs,
        })
    }

    pub fn lhs(&self) -> &AttributeSet {
        &self.lhs
    }

    pub fn rhs(&self) -> &AttributeSet {
        &self.rhs
    }

    /// Is this FD trivial with respect to some ambient set `y` (`rhs ⊆ y`)?
    /// Used by components that evaluate FDs against a closure in progress.
    pub fn rhs_subset_of(&self, y: &AttributeSet) -> bool {
        self.rhs.is_subset_of(y)
    }

    /// All attributes mentioned by this FD (lhs ∪ rhs); used to fold FD
    /// attributes into a schema's universe (spec §3).
    pub fn attributes(&self) -> AttributeSet {
        self.lhs.union(&self.rhs)
    }

    /// Deterministic tie-break key for sorting a collection of FDs
    /// (spec §9 open question): `(canonical(lhs), canonical(rhs))`.
    pub fn sort_key(&self) -> (String, String) {
        (self.lhs.canonical(), self.rhs.canonical())
    }
}
