//! Closure engine (spec §4.1).
//!
//! `closure(X, F)` returns the smallest `Y ⊇ X` such that every FD
//! `(L, R) ∈ F` with `L ⊆ Y` has `R ⊆ Y`. Computed by fixed-point
//! iteration: repeat a full pass over `F`, unioning in any RHS whose LHS
//! is already covered, until a pass adds nothing.

use schema_core::{AttributeSet, FunctionalDependency};

/// Compute the closure of `x` under `dependencies`.
///
/// Total function: if `x` is empty, no FD fires and the closure is empty;
/// if `dependencies` is empty, the closure equals `x` (spec §4.1 edge
/// cases). Termination is guaranteed because `y` grows monotonically and
/// is bounded by the attributes mentioned in `dependencies` plus `x`
/// itself.
pub fn closure(x: &AttributeSet, dependencies: &[FunctionalDependency]) -> AttributeSet {
    let mut y = x.clone();
    loop {
        let mut grew = false;
        for fd in dependencies {
            if fd.lhs().is_subset_of(&y) && !fd.rhs().is_subset_of(&y) {
                y = y.union(fd.rhs());
                grew = true;
            }
        }
        if !grew {
            return y;
        }
    }
}
