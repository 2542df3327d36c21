//! 3NF synthesizer (spec §4.6).

use crate::cover::{consolidate_by_lhs, minimal_cover};
use crate::diagnostics::Diagnostic;
use alloc::{vec, vec::Vec};
use schema_core::{AttributeSet, FunctionalDependency};

/// Synthesize a lossless-join, dependency-preserving 3NF decomposition.
pub fn decompose_3nf(
    universe: &AttributeSet,
    dependencies: &[FunctionalDependency],
    keys: &[AttributeSet],
) -> (Vec<AttributeSet>, Vec<Diagnostic>) {
    if dependencies.is_empty() {
        if universe.is_empty() {
            return (Vec::new(), Vec::new());
        }
        return (vec![universe.clone()], Vec::new());
    }

    let merged = consolidate_by_lhs(&minimal_cover(dependencies));

    let mut fragments: Vec<AttributeSet> = merged.iter().map(|fd| fd.lhs().union(fd.rhs())).collect();

    let mut diagnostics = Vec::new();
    let has_key_fragment = fragments
        .iter()
        .any(|frag| keys.iter().any(|k| frag.is_superset_of(k)));
    if !has_key_fragment {
        if let Some(first_key) = keys.first() {
            fragments.push(first_key.clone());
            let diag = Diagnostic::DecompositionRepairedMissingKey;
            diag.log();
            diagnostics.push(diag);
        }
    }

    (dedup_and_order(fragments), diagnostics)
}

/// Remove any fragment that is a subset of another, deduplicate by
/// canonical serialization, and order by `(size descending, canonical
/// ascending)` (spec §4.6; any deterministic order is acceptable per the
/// spec, this is the one tests are written against).
pub fn dedup_and_order(fragments: Vec<AttributeSet>) -> Vec<AttributeSet> {
    let mut deduped: Vec<AttributeSet> = Vec::new();
    for frag in fragments {
        if !deduped.iter().any(|d| d.canonical() == frag.canonical()) {
            deduped.push(frag);
        }
    }

    let survivors: Vec<AttributeSet> = deduped
        .iter()
        .filter(|frag| {
            !deduped
                .iter()
                .any(|other| other.canonical() != frag.canonical() && frag.is_subset_of(other))
        })
        .cloned()
        .collect();

    let mut out = survivors;
    out.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.canonical().cmp(&b.canonical())));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::candidate_keys;
    use schema_core::AnalysisConfig;

    fn set(attrs: &[&str]) -> AttributeSet {
        attrs.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn fd(l: &[&str], r: &[&str]) -> FunctionalDependency {
        FunctionalDependency::new(set(l), set(r)).unwrap()
    }

    #[test]
    fn s1_decomposition_contains_key_fragment() {
        let universe = set(&["A", "B", "C", "D", "E"]);
        let fds = vec![fd(&["A"], &["B", "C"]), fd(&["B"], &["D"]), fd(&["A", "E"], &["C"])];
        let (keys, _) = candidate_keys(&universe, &fds, &AnalysisConfig::default());
        let (fragments, _) = decompose_3nf(&universe, &fds, &keys);

        assert!(fragments.iter().any(|f| f == &set(&["A", "E"])));
        // Lossless: union of fragments covers the universe.
        let mut union = AttributeSet::new();
        for f in &fragments {
            union = union.union(f);
        }
        assert_eq!(union, universe);
        // No fragment is a subset of another.
        for (i, a) in fragments.iter().enumerate() {
            for (j, b) in fragments.iter().enumerate() {
                if i != j {
                    assert!(!a.is_subset_of(b));
                }
            }
        }
    }

    #[test]
    fn s6_degenerate_empty_fds_returns_universe() {
        let universe = set(&["A"]);
        let (fragments, _) = decompose_3nf(&universe, &[], &[set(&["A"])]);
        assert_eq!(fragments, vec![set(&["A"])]);
    }

    #[test]
    fn empty_universe_and_fds_returns_nothing() {
        let (fragments, _) = decompose_3nf(&AttributeSet::new(), &[], &[]);
        assert!(fragments.is_empty());
    }
}
