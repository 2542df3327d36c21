//! `AttributeSet` — an unordered collection of distinct attributes with a
//! canonical serialization (spec §3, §6, §9).

use crate::attribute::Attribute;
use alloc::collections::BTreeSet;
use alloc::string::String;
use core::fmt;
use core::iter::FromIterator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Separator used by the canonical serialization (spec §6): attributes
/// sorted byte-wise lexicographically, joined by `", "`.
pub const CANONICAL_SEPARATOR: &str = ", ";

#[derive(Clone, Eq, PartialEq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AttributeSet(BTreeSet<Attribute>);

impl AttributeSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, attr: &Attribute) -> bool {
        self.0.contains(attr)
    }

    pub fn insert(&mut self, attr: Attribute) -> bool {
        self.0.insert(attr)
    }

    pub fn remove(&mut self, attr: &Attribute) -> bool {
        self.0.remove(attr)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.0.iter()
    }

    /// `self ⊆ other`.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.0.is_subset(&other.0)
    }

    /// `self ⊇ other`.
    pub fn is_superset_of(&self, other: &Self) -> bool {
        self.0.is_superset(&other.0)
    }

    /// `other ⊊ self` (a proper superset check, used by the candidate-key
    /// finder's minimality test, spec §4.3).
    pub fn is_proper_superset_of(&self, other: &Self) -> bool {
        self.is_superset_of(other) && self != other
    }

    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.union(&other.0).cloned().collect())
    }

    pub fn intersection(&self, other: &Self) -> Self {
        Self(self.0.intersection(&other.0).cloned().collect())
    }

    pub fn difference(&self, other: &Self) -> Self {
        Self(self.0.difference(&other.0).cloned().collect())
    }

    /// Canonical serialization (spec §6): attributes sorted byte-wise
    /// lexicographically, joined by `", "`. `BTreeSet` iteration is already
    /// sorted by `Attribute`'s derived `Ord`, which is byte-wise on the
    /// underlying `String`.
    pub fn canonical(&self) -> String {
        let mut out = String::new();
        for (i, a) in self.0.iter().enumerate() {
            if i > 0 {
                out.push_str(CANONICAL_SEPARATOR);
            }
            out.push_str(a.as_str());
        }
        out
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl FromIterator<Attribute> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for AttributeSet {
    type Item = Attribute;
    type IntoIter = alloc::collections::btree_set::IntoIter<Attribute>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = &'a Attribute;
    type IntoIter = alloc::collections::btree_set::Iter<'a, Attribute>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Ordering used wherever a deterministic tie-breaker across sets is
/// needed (candidate keys, decomposition fragments): size ascending, then
/// canonical serialization ascending (spec §4.3, §4.6).
pub fn cmp_by_size_then_canonical(a: &AttributeSet, b: &AttributeSet) -> core::cmp::Ordering {
    a.len().cmp(&b.len()).then_with(|| a.canonical().cmp(&b.canonical()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(attrs: &[&str]) -> AttributeSet {
        attrs.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn canonical_sorts_and_joins() {
        let s = set(&["C", "A", "B"]);
        assert_eq!(s.canonical(), "A, B, C");
    }

    #[test]
    fn subset_superset_predicates() {
        let a = set(&["A"]);
        let ab = set(&["A", "B"]);
        assert!(a.is_subset_of(&ab));
        assert!(ab.is_superset_of(&a));
        assert!(ab.is_proper_superset_of(&a));
        assert!(!ab.is_proper_superset_of(&ab));
    }

    #[test]
    fn union_intersection_difference() {
        let a = set(&["A", "B"]);
        let b = set(&["B", "C"]);
        assert_eq!(a.union(&b), set(&["A", "B", "C"]));
        assert_eq!(a.intersection(&b), set(&["B"]));
        assert_eq!(a.difference(&b), set(&["A"]));
    }

    #[test]
    fn size_then_canonical_ordering() {
        let a = set(&["A", "E"]);
        let ab = set(&["A", "B", "C"]);
        let b = set(&["B"]);
        let mut v = vec![a.clone(), ab.clone(), b.clone()];
        v.sort_by(cmp_by_size_then_canonical);
        assert_eq!(v, vec![b, a, ab]);
    }
}
