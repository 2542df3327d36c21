//! Orchestrator (spec §4's "Orchestrator", spec §6's `analyze` entry
//! point). Sequences every component and returns a structured `Report`.

use crate::classify::{classify, NormalFormReport};
use crate::closure::closure;
use crate::cover::consolidate_by_lhs;
use crate::diagnostics::Diagnostic;
use crate::keys::candidate_keys;
use crate::subsets::non_empty_subsets;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use schema_core::{AnalysisConfig, AttributeSet, FunctionalDependency, RelationSchema};

#[cfg(feature = "synthesis")]
use crate::decompose2nf::decompose_2nf;
#[cfg(feature = "synthesis")]
use crate::synthesis3nf::decompose_3nf;

#[cfg(feature = "bcnf")]
use crate::bcnf::decompose_bcnf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The structured result of analyzing a schema (spec §6).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Report {
    pub universe: AttributeSet,
    pub closure_of_all: AttributeSet,
    /// Present iff `|A| <= config.subset_closure_display_cap` (spec §6, §5).
    pub subset_closures: Option<BTreeMap<String, AttributeSet>>,
    /// Sorted per spec §4.3.
    pub candidate_keys: Vec<AttributeSet>,
    /// Consolidated by LHS (spec §6).
    pub minimal_cover: Vec<FunctionalDependency>,
    pub normal_forms: NormalFormReport,
    /// Present iff `!is_2nf`.
    pub decomposition_2nf: Option<Vec<AttributeSet>>,
    /// Present iff `!is_bcnf`.
    pub decomposition_3nf: Option<Vec<AttributeSet>>,
    /// Present iff `!is_bcnf`.
    pub decomposition_bcnf: Option<Vec<AttributeSet>>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Analyze a relation schema: compute closures, candidate keys, a minimal
/// cover, normal-form classification with violation witnesses, and the
/// lossless decompositions its classification calls for (spec §6).
pub fn analyze(universe: &AttributeSet, dependencies: &[FunctionalDependency], config: &AnalysisConfig) -> Report {
    let config = config.clone().clamped();
    let schema = RelationSchema::new(universe.clone(), dependencies.to_vec());
    let universe = schema.universe().clone();
    let dependencies = schema.dependencies();

    let mut diagnostics = Vec::new();

    let closure_of_all = closure(&universe, dependencies);

    let subset_closures = if universe.len() <= config.subset_closure_display_cap {
        Some(build_subset_closures(&universe, dependencies))
    } else {
        None
    };

    let (keys, key_diags) = candidate_keys(&universe, dependencies, &config);
    diagnostics.extend(key_diags);

    let (normal_forms, classify_diags) = classify(&universe, dependencies, &keys);
    diagnostics.extend(classify_diags);

    let minimal_cover = consolidate_by_lhs(&crate::cover::minimal_cover(dependencies));

    #[cfg(feature = "synthesis")]
    let decomposition_2nf = if normal_forms.is_2nf {
        None
    } else {
        Some(decompose_2nf(&universe, dependencies, &keys))
    };
    #[cfg(not(feature = "synthesis"))]
    let decomposition_2nf = None;

    #[cfg(feature = "synthesis")]
    let decomposition_3nf = if normal_forms.is_bcnf {
        None
    } else {
        let (fragments, diags) = decompose_3nf(&universe, dependencies, &keys);
        diagnostics.extend(diags);
        Some(fragments)
    };
    #[cfg(not(feature = "synthesis"))]
    let decomposition_3nf = None;

    #[cfg(feature = "bcnf")]
    let decomposition_bcnf = if normal_forms.is_bcnf {
        None
    } else {
        Some(decompose_bcnf(&universe, dependencies))
    };
    #[cfg(not(feature = "bcnf"))]
    let decomposition_bcnf = None;

    Report {
        universe,
        closure_of_all,
        subset_closures,
        candidate_keys: keys,
        minimal_cover,
        normal_forms,
        decomposition_2nf,
        decomposition_3nf,
        decomposition_bcnf,
        diagnostics,
    }
}

fn build_subset_closures(
    universe: &AttributeSet,
    dependencies: &[FunctionalDependency],
) -> BTreeMap<String, AttributeSet> {
    let mut map = BTreeMap::new();
    map.insert(AttributeSet::new().canonical(), closure(&AttributeSet::new(), dependencies));
    if let Ok(subsets) = non_empty_subsets(universe) {
        for s in subsets {
            let c = closure(&s, dependencies);
            map.insert(s.canonical(), c);
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(attrs: &[&str]) -> AttributeSet {
        attrs.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn fd(l: &[&str], r: &[&str]) -> FunctionalDependency {
        FunctionalDependency::new(set(l), set(r)).unwrap()
    }

    #[test]
    fn s2_already_bcnf_has_no_decompositions() {
        let report = analyze(&set(&["A", "B"]), &[fd(&["A"], &["B"])], &AnalysisConfig::default());
        assert!(report.normal_forms.is_bcnf);
        assert!(report.decomposition_2nf.is_none());
        assert!(report.decomposition_3nf.is_none());
        assert!(report.decomposition_bcnf.is_none());
        assert_eq!(report.candidate_keys, vec![set(&["A"])]);
    }

    #[test]
    fn s6_degenerate_schema() {
        let report = analyze(&set(&["A"]), &[], &AnalysisConfig::default());
        assert_eq!(report.candidate_keys, vec![set(&["A"])]);
        assert!(report.normal_forms.is_bcnf);
        assert!(report.decomposition_bcnf.is_none());
    }

    #[test]
    fn subset_closures_present_only_under_cap() {
        let small = analyze(&set(&["A"]), &[], &AnalysisConfig::default());
        assert!(small.subset_closures.is_some());

        let mut big = AttributeSet::new();
        for i in 0..9 {
            big.insert(format!("X{i}").parse().unwrap());
        }
        let report = analyze(&big, &[], &AnalysisConfig::default());
        assert!(report.subset_closures.is_none());
    }

    #[test]
    fn s1_full_pipeline() {
        let universe = set(&["A", "B", "C", "D", "E"]);
        let fds = vec![fd(&["A"], &["B", "C"]), fd(&["B"], &["D"]), fd(&["A", "E"], &["C"])];
        let report = analyze(&universe, &fds, &AnalysisConfig::default());

        assert_eq!(report.candidate_keys, vec![set(&["A", "E"])]);
        assert!(!report.normal_forms.is_bcnf);
        assert!(!report.normal_forms.is_3nf);
        assert!(!report.normal_forms.is_2nf);

        let cover_lhs: Vec<&AttributeSet> = report.minimal_cover.iter().map(|fd| fd.lhs()).collect();
        assert!(cover_lhs.contains(&&set(&["A"])));
        assert!(cover_lhs.contains(&&set(&["B"])));
        assert!(!cover_lhs.contains(&&set(&["A", "E"])));

        let decomposition_3nf = report.decomposition_3nf.expect("bcnf fails, 3nf decomposition present");
        assert!(decomposition_3nf.iter().any(|f| f == &set(&["A", "E"])));

        let decomposition_bcnf = report.decomposition_bcnf.expect("bcnf fails, bcnf decomposition present");
        let mut union = AttributeSet::new();
        for f in &decomposition_bcnf {
            union = union.union(f);
        }
        assert_eq!(union, universe);
    }
}
