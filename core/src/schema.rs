//! `RelationSchema` — a pair (A, F): the attribute universe and the set of
//! admitted functional dependencies (spec §3).

use crate::attribute_set::AttributeSet;
use crate::fd::FunctionalDependency;
use alloc::vec::Vec;

/// A relation schema R(A, F). Invariant: every attribute appearing in any
/// FD is a member of A (A is the union of the caller-supplied universe and
/// the attributes mentioned by F, per spec §3).
#[derive(Clone, Debug)]
pub struct RelationSchema {
    universe: AttributeSet,
    dependencies: Vec<FunctionalDependency>,
}

impl RelationSchema {
    /// Build a schema from a caller-supplied universe and a list of
    /// already-admitted FDs (admission of each individual FD is the
    /// responsibility of `FunctionalDependency::new`, per spec §6: "the
    /// caller supplies FDs already cleaned").
    ///
    /// This constructor performs the two schema-level invariants:
    /// - extends the universe with every attribute mentioned by F;
    /// - deduplicates F by (lhs, rhs) set-equality (spec §9).
    pub fn new(universe: AttributeSet, dependencies: Vec<FunctionalDependency>) -> Self {
        let mut full_universe = universe;
        for fd in &dependencies {
            full_universe = full_universe.union(&fd.attributes());
        }

        let mut deduped: Vec<FunctionalDependency> = Vec::with_capacity(dependencies.len());
        for fd in dependencies {
            if !deduped.contains(&fd) {
                deduped.push(fd);
            }
        }

        Self {
            universe: full_universe,
            dependencies: deduped,
        }
    }

    pub fn universe(&self) -> &AttributeSet {
        &self.universe
    }

    pub fn dependencies(&self) -> &[FunctionalDependency] {
        &self.dependencies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fd::FunctionalDependency;

    fn set(attrs: &[&str]) -> AttributeSet {
        attrs.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn universe_absorbs_fd_attributes() {
        let schema = RelationSchema::new(
            set(&["A"]),
            vec![FunctionalDependency::new(set(&["A"]), set(&["B"])).unwrap()],
        );
        assert_eq!(schema.universe(), &set(&["A", "B"]));
    }

    #[test]
    fn dependencies_are_deduplicated() {
        let fd1 = FunctionalDependency::new(set(&["A"]), set(&["B"])).unwrap();
        let fd2 = FunctionalDependency::new(set(&["A"]), set(&["B"])).unwrap();
        let schema = RelationSchema::new(AttributeSet::new(), vec![fd1, fd2]);
        assert_eq!(schema.dependencies().len(), 1);
    }
}
