//! Projection bases ℝ⁸ → ℝ².
//!
//! A basis is two rows of eight coefficients. Nothing forces the rows to be
//! orthogonal or normalised: skewed and degenerate slices are legitimate
//! views the user can dial in.

use std::f64::consts::PI;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{LatticeError, LatticeResult};
use crate::DIM;

/// Row selector for coefficient edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// The 2×8 projection matrix. Compared by value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Basis {
    pub x: [f64; DIM],
    pub y: [f64; DIM],
}

impl Default for Basis {
    fn default() -> Self {
        Self::reference()
    }
}

impl Basis {
    pub fn new(x: [f64; DIM], y: [f64; DIM]) -> Self {
        Self { x, y }
    }

    /// Reads the first two coordinates straight onto the screen axes.
    pub fn reference() -> Self {
        let mut x = [0.0; DIM];
        let mut y = [0.0; DIM];
        x[0] = 1.0;
        y[1] = 1.0;
        Self { x, y }
    }

    /// Blend from [`Basis::reference`] (`progress = 0`) to `self` (`progress = 1`).
    pub fn interpolate(&self, progress: f64) -> Basis {
        let reference = Basis::reference();
        let mut out = Basis::new([0.0; DIM], [0.0; DIM]);
        for k in 0..DIM {
            out.x[k] = (1.0 - progress) * reference.x[k] + progress * self.x[k];
            out.y[k] = (1.0 - progress) * reference.y[k] + progress * self.y[k];
        }
        out
    }

    pub fn row(&self, axis: Axis) -> &[f64; DIM] {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    pub fn coefficient(&self, axis: Axis, index: usize) -> LatticeResult<f64> {
        self.row(axis)
            .get(index)
            .copied()
            .ok_or(LatticeError::CoefficientOutOfRange { index })
    }

    pub fn set_coefficient(&mut self, axis: Axis, index: usize, value: f64) -> LatticeResult<()> {
        let row = match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        };
        let slot = row
            .get_mut(index)
            .ok_or(LatticeError::CoefficientOutOfRange { index })?;
        *slot = value;
        Ok(())
    }

    /// Every coefficient uniform in [-1, 1), rounded to two decimals.
    pub fn random<R: Rng>(rng: &mut R) -> Basis {
        let mut sample = || (rng.gen_range(-1.0..1.0_f64) * 100.0).round() / 100.0;
        let mut out = Basis::new([0.0; DIM], [0.0; DIM]);
        for k in 0..DIM {
            out.x[k] = sample();
        }
        for k in 0..DIM {
            out.y[k] = sample();
        }
        out
    }
}

/// Circular default basis for a group of the given rank.
///
/// Column i sits at angle 2πi/rank. The loop always runs over all eight
/// columns, so ranks below 8 wrap around the circle more than once.
pub fn petrie_basis(rank: usize) -> Basis {
    let mut basis = Basis::new([0.0; DIM], [0.0; DIM]);
    for i in 0..DIM {
        let angle = 2.0 * PI * i as f64 / rank as f64;
        basis.x[i] = angle.cos();
        basis.y[i] = angle.sin();
    }
    basis
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EPS: f64 = 1e-12;

    #[test]
    fn petrie_rows_always_have_eight_entries() {
        for rank in [2, 4, 6, 7, 8] {
            let b = petrie_basis(rank);
            assert_eq!(b.x.len(), 8);
            assert_eq!(b.y.len(), 8);
        }
    }

    #[test]
    fn petrie_rank_eight_scenario() {
        let b = petrie_basis(8);
        assert!((b.x[0] - 1.0).abs() < EPS);
        assert!(b.y[0].abs() < EPS);
        assert!((b.x[4] + 1.0).abs() < EPS);
        assert!((b.x[2]).abs() < EPS);
        assert!((b.y[2] - 1.0).abs() < EPS);
    }

    #[test]
    fn petrie_low_rank_wraps() {
        // rank 2: columns alternate between angle 0 and π
        let b = petrie_basis(2);
        for i in 0..8 {
            let expected = if i % 2 == 0 { 1.0 } else { -1.0 };
            assert!((b.x[i] - expected).abs() < EPS, "column {}", i);
            assert!(b.y[i].abs() < EPS, "column {}", i);
        }
        // rank 4: column 4 is a full turn, same as column 0
        let b = petrie_basis(4);
        assert!((b.x[4] - b.x[0]).abs() < EPS);
        assert!((b.y[5] - b.y[1]).abs() < EPS);
    }

    #[test]
    fn interpolate_endpoints() {
        let target = petrie_basis(8);
        assert_eq!(target.interpolate(1.0), target);
        assert_eq!(target.interpolate(0.0), Basis::reference());

        let half = target.interpolate(0.5);
        assert!((half.x[0] - 1.0).abs() < EPS);
        assert!((half.x[4] + 0.5).abs() < EPS);
    }

    #[test]
    fn coefficient_edits() {
        let mut b = Basis::reference();
        b.set_coefficient(Axis::Y, 7, -0.25).unwrap();
        assert_eq!(b.coefficient(Axis::Y, 7).unwrap(), -0.25);
        assert_eq!(
            b.set_coefficient(Axis::X, 8, 1.0),
            Err(LatticeError::CoefficientOutOfRange { index: 8 })
        );
        assert!(b.coefficient(Axis::X, 12).is_err());
    }

    #[test]
    fn random_basis_is_rounded_and_bounded() {
        let mut rng = StdRng::seed_from_u64(7);
        let b = Basis::random(&mut rng);
        for v in b.x.iter().chain(b.y.iter()) {
            assert!(*v >= -1.0 && *v <= 1.0);
            assert!(((v * 100.0).round() - v * 100.0).abs() < 1e-9);
        }
        let mut rng2 = StdRng::seed_from_u64(7);
        assert_eq!(b, Basis::random(&mut rng2));
    }
}
