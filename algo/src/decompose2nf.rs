//! 2NF decomposer (SPEC_FULL §4.8 — promoted from the open question in
//! spec.md §9 to a first-class component; `Report::decomposition2NF` is
//! named in spec.md §6's external interface but never assigned an
//! algorithm number of its own).
//!
//! For each non-trivial FD `(L, R)` where `L` is a proper subset of some
//! candidate key and `R` contains non-prime attributes, emit
//! `L ∪ (R ∩ non-prime)`. Then emit one fragment covering whatever
//! attributes remain, together with a full candidate key. Finally remove
//! any fragment that is a subset of another.

use crate::classify::prime_attributes;
use crate::synthesis3nf::dedup_and_order;
use alloc::vec::Vec;
use schema_core::{AttributeSet, FunctionalDependency};

pub fn decompose_2nf(
    universe: &AttributeSet,
    dependencies: &[FunctionalDependency],
    keys: &[AttributeSet],
) -> Vec<AttributeSet> {
    if universe.is_empty() || keys.is_empty() {
        return Vec::new();
    }

    let prime = prime_attributes(keys);
    let non_prime = universe.difference(&prime);

    let mut fragments: Vec<AttributeSet> = Vec::new();
    for fd in dependencies {
        let non_trivial_rhs = fd.rhs().difference(fd.lhs());
        if non_trivial_rhs.is_empty() {
            continue;
        }
        let is_partial_lhs = keys.iter().any(|k| fd.lhs().is_subset_of(k) && fd.lhs() != k);
        if !is_partial_lhs {
            continue;
        }
        let non_prime_rhs = non_trivial_rhs.intersection(&non_prime);
        if !non_prime_rhs.is_empty() {
            fragments.push(fd.lhs().union(&non_prime_rhs));
        }
    }

    let mut covered = AttributeSet::new();
    for f in &fragments {
        covered = covered.union(f);
    }
    let remaining = universe.difference(&covered);
    let key_fragment = remaining.union(&keys[0]);
    fragments.push(key_fragment);

    dedup_and_order(fragments)
}
