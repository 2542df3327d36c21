//! Non-fatal diagnostics (spec §7). These never abort an operation; they
//! accompany an otherwise well-formed result and are also logged via
//! `tracing::warn!` at the point they're produced.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Diagnostic {
    /// Candidate-key search yielded no keys for a non-empty universe. This
    /// is impossible under the closure definition (`X ⊆ X⁺` always holds,
    /// so `A` itself is always a superkey) but is guarded anyway; analysis
    /// proceeds with an empty key list.
    NoCandidateKeysFound,
    /// The attribute universe exceeded the configured search cap; key
    /// discovery was skipped rather than run exhaustively.
    KeySearchCapExceeded { universe_size: usize, cap: usize },
    /// A normal-form decomposition step would have dropped every candidate
    /// key; the synthesizer appended one back in.
    DecompositionRepairedMissingKey,
    /// Classification was attempted with a non-empty universe but no
    /// candidate keys; all flags are reported false.
    ClassificationUndefinedNoKeys,
}

impl Diagnostic {
    /// Emit this diagnostic as a `tracing::warn!` event.
    pub fn log(&self) {
        match self {
            Diagnostic::NoCandidateKeysFound => {
                tracing::warn!("candidate-key search found no keys for a non-empty universe");
            }
            Diagnostic::KeySearchCapExceeded { universe_size, cap } => {
                tracing::warn!(
                    universe_size,
                    cap,
                    "attribute universe exceeds key-search cap; skipping exhaustive search"
                );
            }
            Diagnostic::DecompositionRepairedMissingKey => {
                tracing::warn!("decomposition step dropped every candidate key; repaired by appending one");
            }
            Diagnostic::ClassificationUndefinedNoKeys => {
                tracing::warn!("normal-form classification undefined: non-empty universe with no candidate keys");
            }
        }
    }
}
