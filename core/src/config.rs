//! `AnalysisConfig` — the bounds spec §5 and §9 leave to the implementation.
//!
//! Scaled down from `vm_core::variables::Params`: this kernel has exactly
//! two knobs worth exposing, both gating exponential-complexity paths.

/// Hard ceiling on `key_search_attribute_cap`: the subset enumerator
/// (spec §4.2) is bitmask-based and bounded to `|S| ≤ 63`.
pub const MAX_KEY_SEARCH_ATTRIBUTE_CAP: usize = 63;

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct AnalysisConfig {
    /// `Report::subset_closures` (spec §6) is populated only when
    /// `|A| <= subset_closure_display_cap`. Default 8, per spec §5.
    pub subset_closure_display_cap: usize,
    /// Candidate-key search (spec §4.3) is `Θ(2^|A|)`; this caps the
    /// attribute-universe size it will run against before reporting a
    /// diagnostic instead of enumerating. Default 32, hard ceiling 63.
    pub key_search_attribute_cap: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            subset_closure_display_cap: 8,
            key_search_attribute_cap: 32,
        }
    }
}

impl AnalysisConfig {
    /// Clamp `key_search_attribute_cap` to the bitmask hard ceiling.
    pub fn clamped(mut self) -> Self {
        if self.key_search_attribute_cap > MAX_KEY_SEARCH_ATTRIBUTE_CAP {
            self.key_search_attribute_cap = MAX_KEY_SEARCH_ATTRIBUTE_CAP;
        }
        self
    }
}
