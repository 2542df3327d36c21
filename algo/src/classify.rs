//! Normal-form classifier (spec §4.4).

use crate::closure::closure;
use crate::diagnostics::Diagnostic;
use alloc::{vec, vec::Vec};
use schema_core::{AttributeSet, FunctionalDependency};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Violations {
    pub bcnf: Vec<FunctionalDependency>,
    pub third_nf: Vec<FunctionalDependency>,
    pub second_nf: Vec<FunctionalDependency>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NormalFormReport {
    pub is_bcnf: bool,
    pub is_3nf: bool,
    pub is_2nf: bool,
    pub violations: Violations,
}

/// The prime attributes of R: the union of all candidate keys (spec §4.4).
pub fn prime_attributes(keys: &[AttributeSet]) -> AttributeSet {
    let mut prime = AttributeSet::new();
    for k in keys {
        prime = prime.union(k);
    }
    prime
}

/// Classify `R(universe, dependencies)` given its candidate keys.
pub fn classify(
    universe: &AttributeSet,
    dependencies: &[FunctionalDependency],
    keys: &[AttributeSet],
) -> (NormalFormReport, Vec<Diagnostic>) {
    // Degenerate: empty universe or empty F is trivially BCNF (spec §4.4).
    if universe.is_empty() || dependencies.is_empty() {
        return (
            NormalFormReport {
                is_bcnf: true,
                is_3nf: true,
                is_2nf: true,
                violations: Violations::default(),
            },
            Vec::new(),
        );
    }

    if keys.is_empty() {
        let diag = Diagnostic::ClassificationUndefinedNoKeys;
        diag.log();
        return (
            NormalFormReport {
                is_bcnf: false,
                is_3nf: false,
                is_2nf: false,
                violations: Violations::default(),
            },
            vec![diag],
        );
    }

    let prime = prime_attributes(keys);
    let mut violations = Violations::default();

    for fd in dependencies {
        // Non-trivial projection: (L, R \ L). Trivial FDs (R ⊆ L) are
        // skipped for all checks.
        let non_trivial_rhs = fd.rhs().difference(fd.lhs());
        if non_trivial_rhs.is_empty() {
            continue;
        }

        let lhs_is_superkey = &closure(fd.lhs(), dependencies) == universe;
        if lhs_is_superkey {
            continue;
        }
        violations.bcnf.push(fd.clone());

        let three_nf_safe = non_trivial_rhs.iter().all(|a| prime.contains(a));
        if three_nf_safe {
            continue;
        }
        violations.third_nf.push(fd.clone());

        let is_partial = keys
            .iter()
            .any(|k| fd.lhs().is_subset_of(k) && fd.lhs() != k && non_trivial_rhs.iter().any(|a| !prime.contains(a)));
        if is_partial {
            violations.second_nf.push(fd.clone());
        }
    }

    let report = NormalFormReport {
        is_bcnf: violations.bcnf.is_empty(),
        is_3nf: violations.third_nf.is_empty(),
        is_2nf: violations.second_nf.is_empty(),
        violations,
    };
    (report, Vec::new())
}
