//! Candidate-key finder (spec §4.3).

use crate::closure::closure;
use crate::diagnostics::Diagnostic;
use crate::subsets::non_empty_subsets;
use alloc::{vec, vec::Vec};
use schema_core::{cmp_by_size_then_canonical, AnalysisConfig, AttributeSet, FunctionalDependency};

/// Find every candidate key of `R(universe, dependencies)`.
///
/// Returns the keys sorted by `(size ascending, canonical ascending)`
/// (spec §4.3) plus any diagnostics raised along the way (spec §7).
pub fn candidate_keys(
    universe: &AttributeSet,
    dependencies: &[FunctionalDependency],
    config: &AnalysisConfig,
) -> (Vec<AttributeSet>, Vec<Diagnostic>) {
    if universe.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let mut diagnostics = Vec::new();

    if universe.len() > config.key_search_attribute_cap {
        let diag = Diagnostic::KeySearchCapExceeded {
            universe_size: universe.len(),
            cap: config.key_search_attribute_cap,
        };
        diag.log();
        diagnostics.push(diag);
        // Degenerate fallback: the universe itself is always a superkey
        // (X ⊆ X⁺ always holds), so return it rather than nothing.
        return (vec![universe.clone()], diagnostics);
    }

    let subsets = non_empty_subsets(universe)
        .expect("universe.len() was checked against key_search_attribute_cap <= MAX_ENUMERABLE_ATTRIBUTES");

    let superkeys: Vec<AttributeSet> = subsets
        .into_iter()
        .filter(|subset| &closure(subset, dependencies) == universe)
        .collect();

    let mut minimal: Vec<AttributeSet> = superkeys
        .iter()
        .filter(|candidate| {
            !superkeys
                .iter()
                .any(|other| candidate.is_proper_superset_of(other))
        })
        .cloned()
        .collect();

    // Deduplicate by canonical serialization (defensive; the source
    // already yields each subset once, but dedup keeps this function
    // robust to future changes in the enumerator).
    minimal.sort_by(cmp_by_size_then_canonical);
    minimal.dedup_by(|a, b| a.canonical() == b.canonical());

    if minimal.is_empty() {
        // Impossible under the closure definition (A⁺ = A always holds),
        // but guarded per spec §4.3's degenerate case.
        let diag = Diagnostic::NoCandidateKeysFound;
        diag.log();
        diagnostics.push(diag);
        return (vec![universe.clone()], diagnostics);
    }

    (minimal, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema_core::FunctionalDependency;

    fn set(attrs: &[&str]) -> AttributeSet {
        attrs.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn fd(l: &[&str], r: &[&str]) -> FunctionalDependency {
        FunctionalDependency::new(set(l), set(r)).unwrap()
    }

    #[test]
    fn s1_single_candidate_key() {
        let universe = set(&["A", "B", "C", "D", "E"]);
        let fds = vec![fd(&["A"], &["B", "C"]), fd(&["B"], &["D"]), fd(&["A", "E"], &["C"])];
        let (keys, diags) = candidate_keys(&universe, &fds, &AnalysisConfig::default());
        assert_eq!(keys, vec![set(&["A", "E"])]);
        assert!(diags.is_empty());
    }

    #[test]
    fn s3_two_candidate_keys() {
        let universe = set(&["S", "J", "T"]);
        let fds = vec![fd(&["S", "J"], &["T"]), fd(&["T"], &["J"])];
        let (keys, _) = candidate_keys(&universe, &fds, &AnalysisConfig::default());
        assert_eq!(keys, vec![set(&["S", "J"]), set(&["S", "T"])]);
    }

    #[test]
    fn s6_degenerate_single_attribute() {
        let universe = set(&["A"]);
        let (keys, _) = candidate_keys(&universe, &[], &AnalysisConfig::default());
        assert_eq!(keys, vec![set(&["A"])]);
    }

    #[test]
    fn empty_universe_has_no_keys() {
        let (keys, diags) = candidate_keys(&AttributeSet::new(), &[], &AnalysisConfig::default());
        assert!(keys.is_empty());
        assert!(diags.is_empty());
    }

    #[test]
    fn every_key_is_minimal_and_sufficient() {
        let universe = set(&["A", "B", "C", "D", "E"]);
        let fds = vec![fd(&["A"], &["B", "C"]), fd(&["B"], &["D"]), fd(&["A", "E"], &["C"])];
        let (keys, _) = candidate_keys(&universe, &fds, &AnalysisConfig::default());
        for k in &keys {
            assert_eq!(&closure(k, &fds), &universe);
            for a in k.iter() {
                let mut reduced = k.clone();
                reduced.remove(a);
                assert_ne!(&closure(&reduced, &fds), &universe);
            }
        }
    }
}
