//! Cosmic temperature eras and the tensor-network (MERA) display state.
//!
//! Temperature is a normalised slider: 0 is today's 2.7 K universe, 1 is the
//! Planck-scale hot start. Hotter eras restore more of the unified symmetry.

use serde::{Deserialize, Serialize};

/// Cosmological era, coldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Era {
    Current,
    QuarkPlasma,
    Electroweak,
    Gut,
    Planck,
}

impl Era {
    pub fn label(&self) -> &'static str {
        match self {
            Era::Current => "Current Era",
            Era::QuarkPlasma => "Q-Plasma",
            Era::Electroweak => "Electroweak",
            Era::Gut => "GUT Era",
            Era::Planck => "Planck Epoch",
        }
    }

    /// Fraction of the unified symmetry restored in this era.
    pub fn unification(&self) -> f64 {
        match self {
            Era::Current => 0.0,
            Era::QuarkPlasma => 0.2,
            Era::Electroweak => 0.5,
            Era::Gut => 0.8,
            Era::Planck => 1.0,
        }
    }
}

/// Era and unification level at a given temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CosmicState {
    pub temperature: f64,
    pub era: Era,
    pub unification: f64,
}

impl CosmicState {
    /// Thresholds are strict: exactly 0.9 is still the GUT era.
    pub fn from_temperature(temperature: f64) -> Self {
        let era = if temperature > 0.9 {
            Era::Planck
        } else if temperature > 0.7 {
            Era::Gut
        } else if temperature > 0.4 {
            Era::Electroweak
        } else if temperature > 0.2 {
            Era::QuarkPlasma
        } else {
            Era::Current
        };
        Self {
            temperature,
            era,
            unification: era.unification(),
        }
    }
}

/// Number of samples in the entanglement entropy curve.
pub const ENTROPY_SAMPLES: usize = 21;

/// Renormalization controls of the MERA view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeraState {
    pub is_active: bool,
    /// Depth of the tree, 0..=1.
    pub renormalization_scale: f64,
    /// Curvature of the emergent bulk geometry.
    pub bulk_curvature: f64,
}

impl Default for MeraState {
    fn default() -> Self {
        Self {
            is_active: false,
            renormalization_scale: 0.4,
            bulk_curvature: 0.8,
        }
    }
}

impl MeraState {
    /// Area-law style curve S(x) = ln(1 + 10x)·κ·20 sampled at x = i/20.
    pub fn entropy_curve(&self) -> Vec<f64> {
        (0..ENTROPY_SAMPLES)
            .map(|i| {
                let x = i as f64 / (ENTROPY_SAMPLES - 1) as f64;
                (1.0 + x * 10.0).ln() * self.bulk_curvature * 20.0
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn era_thresholds() {
        assert_eq!(CosmicState::from_temperature(0.0).era, Era::Current);
        assert_eq!(CosmicState::from_temperature(0.2).era, Era::Current);
        assert_eq!(CosmicState::from_temperature(0.21).era, Era::QuarkPlasma);
        assert_eq!(CosmicState::from_temperature(0.5).era, Era::Electroweak);
        assert_eq!(CosmicState::from_temperature(0.9).era, Era::Gut);
        assert_eq!(CosmicState::from_temperature(0.95).era, Era::Planck);
    }

    #[test]
    fn unification_grows_with_temperature() {
        let mut last = -1.0;
        for t in [0.0, 0.3, 0.5, 0.8, 1.0] {
            let u = CosmicState::from_temperature(t).unification;
            assert!(u > last);
            last = u;
        }
        assert_eq!(CosmicState::from_temperature(1.0).era.label(), "Planck Epoch");
    }

    #[test]
    fn entropy_curve_shape() {
        let mera = MeraState::default();
        let curve = mera.entropy_curve();
        assert_eq!(curve.len(), ENTROPY_SAMPLES);
        assert_eq!(curve[0], 0.0);
        assert!((curve[20] - 11.0_f64.ln() * 0.8 * 20.0).abs() < 1e-9);
        assert!(curve.windows(2).all(|w| w[1] > w[0]));
    }
}
