//! Three-point splittings α → β + γ inside a root system.

use serde::{Deserialize, Serialize};

use crate::category::ForceCategory;
use crate::vector::Root;
use crate::TOLERANCE;

/// Squared length of an E₈ root.
const ROOT_NORM_SQ: f64 = 2.0;

/// Find β among `candidates` with α = β + γ, γ another norm-2 root.
///
/// Candidates are scanned in order and the first β with ⟨α, β⟩ = 1 whose
/// remainder γ = α − β has |γ|² = 2 wins. γ is tagged Fermion when it has a
/// half-integer coordinate, Strong otherwise. `None` means there is no decay
/// channel in this candidate set, which is an ordinary outcome.
pub fn find_decay_pair<'a>(alpha: &Root, candidates: &'a [Root]) -> Option<(&'a Root, Root)> {
    candidates.iter().find_map(|beta| {
        if (alpha.dot(beta) - 1.0).abs() >= TOLERANCE {
            return None;
        }
        let mut gamma = *alpha - *beta;
        if (gamma.norm_sq() - ROOT_NORM_SQ).abs() >= TOLERANCE {
            return None;
        }
        gamma.category = if gamma.has_half_coordinate() {
            ForceCategory::Fermion
        } else {
            ForceCategory::Strong
        };
        Some((beta, gamma))
    })
}

/// An owned record of one resolved splitting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayInteraction {
    pub parent: Root,
    pub children: [Root; 2],
}

impl DecayInteraction {
    pub fn resolve(parent: &Root, candidates: &[Root]) -> Option<Self> {
        find_decay_pair(parent, candidates).map(|(beta, gamma)| DecayInteraction {
            parent: *parent,
            children: [*beta, gamma],
        })
    }

    /// Component-wise β + γ − α, which is zero up to rounding.
    pub fn residual(&self) -> Root {
        (self.children[0] + self.children[1]) - self.parent
    }
}
