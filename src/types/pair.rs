//! Coreness pairs and their component-wise partial order.

use serde::Serialize;

use super::Layer;

/// Identifies a candidate (alpha, beta)-core.
///
/// The derived `Ord` is lexicographic on `(alpha, beta)` and only fixes map
/// iteration order. Dominance uses [`CorenessPair::covers`] and
/// [`CorenessPair::dominates`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CorenessPair {
    /// Minimum degree of upper-layer vertices.
    pub alpha: u32,
    /// Minimum degree of lower-layer vertices.
    pub beta: u32,
}

impl CorenessPair {
    /// Create a new pair.
    pub fn new(alpha: u32, beta: u32) -> Self {
        Self { alpha, beta }
    }

    /// The degree threshold that applies to a vertex on `layer`.
    pub fn threshold(&self, layer: Layer) -> u32 {
        match layer {
            Layer::Upper => self.alpha,
            Layer::Lower => self.beta,
        }
    }

    /// Both components are at least those of `other`.
    pub fn covers(&self, other: &CorenessPair) -> bool {
        self.alpha >= other.alpha && self.beta >= other.beta
    }

    /// `self` covers `other` and is strictly larger in at least one component.
    pub fn dominates(&self, other: &CorenessPair) -> bool {
        self.covers(other) && self != other
    }

    /// L1 distance between two pairs. Widened so extreme thresholds cannot overflow.
    pub fn manhattan(&self, other: &CorenessPair) -> u64 {
        u64::from(self.alpha.abs_diff(other.alpha)) + u64::from(self.beta.abs_diff(other.beta))
    }

    /// Every pair of the grid `[1, max_alpha] x [1, max_beta]`, row-major.
    pub fn grid(max_alpha: u32, max_beta: u32) -> impl Iterator<Item = CorenessPair> {
        (1..=max_alpha).flat_map(move |alpha| (1..=max_beta).map(move |beta| Self { alpha, beta }))
    }
}

impl std::fmt::Display for CorenessPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.alpha, self.beta)
    }
}
