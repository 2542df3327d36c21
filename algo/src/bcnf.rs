//! BCNF analyzer (spec §4.7).
//!
//! Recursively splits R on BCNF-violating FDs, work-list style, until
//! every surviving fragment is in BCNF. Dependency preservation is not
//! guaranteed (a known BCNF limitation, spec §4.7).

use crate::closure::closure;
use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::{vec, vec::Vec};
use schema_core::{AttributeSet, FunctionalDependency};

/// Produce a lossless-join BCNF decomposition of `R(universe, dependencies)`.
pub fn decompose_bcnf(universe: &AttributeSet, dependencies: &[FunctionalDependency]) -> Vec<AttributeSet> {
    if universe.is_empty() {
        return Vec::new();
    }
    if dependencies.is_empty() {
        return vec![universe.clone()];
    }

    let mut work_list: Vec<AttributeSet> = vec![universe.clone()];
    let mut visited: BTreeSet<String> = BTreeSet::new();
    let mut output: Vec<AttributeSet> = Vec::new();

    while let Some(s) = work_list.pop() {
        let key = s.canonical();
        if visited.contains(&key) {
            continue;
        }
        visited.insert(key);

        let mut violation: Option<(AttributeSet, AttributeSet)> = None;
        for fd in dependencies {
            if !fd.lhs().is_subset_of(&s) || !fd.rhs().is_subset_of(&s) {
                continue;
            }
            let non_trivial_within_s = !fd.rhs().is_subset_of(fd.lhs());
            if !non_trivial_within_s {
                continue;
            }

            let projected_closure = closure(fd.lhs(), dependencies).intersection(&s);
            if projected_closure == s {
                // L is a superkey of S; no violation from this FD.
                continue;
            }

            violation = Some((fd.lhs().clone(), fd.rhs().clone()));
            break;
        }

        match violation {
            None => output.push(s),
            Some((l, r)) => {
                let s1 = l.union(&r).intersection(&s);
                let s2 = l.union(&s.difference(&r));

                if !s1.is_empty() {
                    work_list.push(s1.clone());
                }
                if !s2.is_empty() && s2 != s1 {
                    work_list.push(s2);
                } else if !s2.is_empty() && s2 == s1 {
                    // s1 and s2 coincide; avoid enqueuing the same
                    // fragment twice (visited-set would also catch this,
                    // but skip the redundant push for clarity).
                }
            }
        }
    }

    dedup_by_canonical(output)
}

fn dedup_by_canonical(fragments: Vec<AttributeSet>) -> Vec<AttributeSet> {
    let mut seen = BTreeSet::new();
    let mut out = Vec::new();
    for f in fragments {
        if seen.insert(f.canonical()) {
            out.push(f);
        }
    }
    out
}
