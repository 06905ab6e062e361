//! Points of ℝ⁸ carrying a force category.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::category::ForceCategory;
use crate::{DIM, TOLERANCE};

/// Coordinates of a point in the 8-dimensional ambient space.
pub type Coords = [f64; DIM];

/// A root vector (or any 8D point) with its category tag.
///
/// Generated roots are never mutated after creation; projections borrow them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Root {
    pub coords: Coords,
    #[serde(default)]
    pub category: ForceCategory,
}

impl Root {
    /// An untagged point.
    pub fn new(coords: Coords) -> Self {
        Self {
            coords,
            category: ForceCategory::None,
        }
    }

    pub fn tagged(coords: Coords, category: ForceCategory) -> Self {
        Self { coords, category }
    }

    /// The origin of ℝ⁸.
    pub fn zero() -> Self {
        Self::new([0.0; DIM])
    }

    pub fn dot(&self, other: &Root) -> f64 {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    pub fn norm_sq(&self) -> f64 {
        self.dot(self)
    }

    /// True when some coordinate has magnitude exactly 1/2.
    ///
    /// Half-integer coordinates only arise from the spinor family, so this is
    /// the fermion test used throughout.
    pub fn has_half_coordinate(&self) -> bool {
        self.coords.iter().any(|c| c.abs() == 0.5)
    }

    /// Coordinate-wise equality within [`TOLERANCE`].
    pub fn approx_eq(&self, other: &Root) -> bool {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .all(|(a, b)| (a - b).abs() < TOLERANCE)
    }
}

impl Sub for Root {
    type Output = Root;

    /// Component-wise difference, untagged.
    fn sub(self, other: Root) -> Root {
        let mut coords = self.coords;
        for (c, o) in coords.iter_mut().zip(other.coords.iter()) {
            *c -= o;
        }
        Root::new(coords)
    }
}

impl Add for Root {
    type Output = Root;

    /// Component-wise sum, untagged.
    fn add(self, other: Root) -> Root {
        let mut coords = self.coords;
        for (c, o) in coords.iter_mut().zip(other.coords.iter()) {
            *c += o;
        }
        Root::new(coords)
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (k, c) in self.coords.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")[{}]", self.category)
    }
}
