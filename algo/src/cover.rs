//! Minimal-cover builder (spec §4.5).
//!
//! Three ordered phases: decompose RHS into singletons, reduce each LHS of
//! any extraneous attribute, then drop any FD made redundant by the
//! others. Order matters (spec §4.5); cross-run determinism is achieved by
//! sorting FDs by `(canonical(lhs), canonical(rhs))` before phases 2 and 3
//! (spec §9 open question — recorded in DESIGN.md).

use crate::closure::closure;
use alloc::vec::Vec;
use schema_core::{Attribute, AttributeSet, FunctionalDependency};

/// Build a minimal (canonical) cover of `dependencies`.
///
/// The result has a singleton RHS per FD, no extraneous LHS attributes,
/// and no redundant FDs (spec §4.5). Total function; never fails.
pub fn minimal_cover(dependencies: &[FunctionalDependency]) -> Vec<FunctionalDependency> {
    let mut g = decompose_rhs(dependencies);
    g.sort_by_key(FunctionalDependency::sort_key);

    reduce_lhs(&mut g);
    remove_redundant(&mut g)
}

/// Phase 1: replace each `(L, {a1..ak})` with `k` singleton-RHS FDs.
fn decompose_rhs(dependencies: &[FunctionalDependency]) -> Vec<FunctionalDependency> {
    let mut out = Vec::new();
    for fd in dependencies {
        for a in fd.rhs().iter() {
            let mut singleton = AttributeSet::new();
            singleton.insert(a.clone());
            out.push(FunctionalDependency::new(fd.lhs().clone(), singleton).expect(
                "rhs attribute of an admitted FD cannot overlap with its own lhs \
                 (admission already guarantees rhs ∩ lhs = ∅)",
            ));
        }
    }
    out
}

/// Phase 2: for each FD `(L, {a})`, try to drop each `x ∈ L` in turn. `x`
/// is removable iff `a ∈ (L \ {x})⁺` computed against the *current*
/// working set `g`, which includes the FD under reduction itself (spec
/// §4.5's correctness-critical note).
fn reduce_lhs(g: &mut Vec<FunctionalDependency>) {
    for i in 0..g.len() {
        let attrs: Vec<Attribute> = g[i].lhs().iter().cloned().collect();
        for x in attrs {
            let current_lhs = g[i].lhs().clone();
            if current_lhs.len() <= 1 {
                // Never reduce L to empty.
                break;
            }
            let mut reduced_lhs = current_lhs.clone();
            reduced_lhs.remove(&x);

            let a = g[i]
                .rhs()
                .iter()
                .next()
                .cloned()
                .expect("phase 1 leaves every fd with a singleton rhs");

            let reduced_closure = closure(&reduced_lhs, &g[..]);
            if reduced_closure.contains(&a) {
                let mut singleton = AttributeSet::new();
                singleton.insert(a);
                g[i] = FunctionalDependency::new(reduced_lhs, singleton)
                    .expect("reduced lhs is non-empty by the len <= 1 guard above");
            }
        }
    }
}

/// Phase 3: for each FD `(L, {a})`, drop it if `a ∈ L⁺` computed against
/// `g` *excluding* that FD (spec §4.5's correctness-critical note). FDs
/// already dropped earlier in this phase stay dropped for subsequent
/// checks.
fn remove_redundant(g: &mut [FunctionalDependency]) -> Vec<FunctionalDependency> {
    let mut kept: Vec<FunctionalDependency> = g.to_vec();
    let mut i = 0;
    while i < kept.len() {
        let candidate = kept[i].clone();
        let rest: Vec<FunctionalDependency> = kept
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, fd)| fd.clone())
            .collect();
        let a = candidate
            .rhs()
            .iter()
            .next()
            .cloned()
            .expect("phase 1 leaves every fd with a singleton rhs");
        if closure(candidate.lhs(), &rest).contains(&a) {
            kept.remove(i);
            // Do not advance i: the next element has shifted into this slot.
        } else {
            i += 1;
        }
    }
    kept
}

/// Consolidate a singleton-RHS cover by merging FDs that share an LHS into
/// one FD with the union of RHSs (spec §4.5: "presentation step").
pub fn consolidate_by_lhs(cover: &[FunctionalDependency]) -> Vec<FunctionalDependency> {
    let mut merged: Vec<(AttributeSet, AttributeSet)> = Vec::new();
    for fd in cover {
        if let Some(entry) = merged.iter_mut().find(|(lhs, _)| lhs == fd.lhs()) {
            entry.1 = entry.1.union(fd.rhs());
        } else {
            merged.push((fd.lhs().clone(), fd.rhs().clone()));
        }
    }
    merged
        .into_iter()
        .map(|(lhs, rhs)| FunctionalDependency::new(lhs, rhs).expect("merged rhs cannot overlap lhs: no fd in a minimal cover has an lhs attribute in its own rhs"))
        .collect()
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

    fn equivalent(f1: &[FunctionalDependency], f2: &[FunctionalDependency], universe: &AttributeSet) -> bool {
        crate::subsets::non_empty_subsets(universe)
            .unwrap()
            .iter()
            .all(|x| closure(x, f1) == closure(x, f2))
    }

    #[test]
    fn s4_minimal_cover_reduction() {
        // A = {A,B,C,D}, F = {AB->C, A->B, B->C, A->D}
        let universe = set(&["A", "B", "C", "D"]);
        let f = vec![
            fd(&["A", "B"], &["C"]),
            fd(&["A"], &["B"]),
            fd(&["B"], &["C"]),
            fd(&["A"], &["D"]),
        ];
        let cover = minimal_cover(&f);

        // Every FD has a singleton RHS.
        for c in &cover {
            assert_eq!(c.rhs().len(), 1);
        }
        // Equivalent to the original F.
        assert!(equivalent(&cover, &f, &universe));
        // No FD can be dropped.
        for i in 0..cover.len() {
            let rest: Vec<_> = cover.iter().enumerate().filter(|(j, _)| *j != i).map(|(_, c)| c.clone()).collect();
            assert!(!equivalent(&rest, &f, &universe));
        }
    }

    #[test]
    fn s1_redundant_fd_is_dropped() {
        let universe = set(&["A", "B", "C", "D", "E"]);
        let f = vec![fd(&["A"], &["B", "C"]), fd(&["B"], &["D"]), fd(&["A", "E"], &["C"])];
        let cover = minimal_cover(&f);
        assert!(equivalent(&cover, &f, &universe));
        // {A,E}->{C} is redundant: C is already derivable from A alone.
        assert!(!cover.iter().any(|c| c.lhs() == &set(&["A", "E"])));
    }

    #[test]
    fn no_extraneous_lhs_attribute_remains() {
        let universe = set(&["A", "B", "C", "D"]);
        let f = vec![fd(&["A", "B"], &["C"]), fd(&["A"], &["B"]), fd(&["B"], &["C"]), fd(&["A"], &["D"])];
        let cover = minimal_cover(&f);
        for c in &cover {
            for x in c.lhs().iter() {
                let mut reduced = c.lhs().clone();
                reduced.remove(x);
                if reduced.is_empty() {
                    continue;
                }
                let rest: Vec<_> = cover.iter().filter(|other| *other != c).cloned().collect();
                let mut g = rest;
                g.push(FunctionalDependency::new(reduced.clone(), c.rhs().clone()).unwrap());
                assert!(!equivalent(&g, &f, &universe), "attribute {x} was extraneous in {c:?}");
            }
        }
    }
}
