//! The 8D → 2D projection pipeline.
//!
//! Per root, in order:
//!
//! 1. blend the target basis with the reference basis by `progress`
//! 2. Wick drift: every coordinate c becomes c + c·sin(t + idx)·wick·0.4
//! 3. linear projection onto the two basis rows
//! 4. planar rotation by `angle`
//!
//! The drift is an animation effect, not an analytic continuation to
//! imaginary time. Display-only distortions (thermal jitter, defect
//! repulsion, holographic clamping) belong to the renderer and are not
//! applied here.

use num_complex::Complex;
use serde::{Deserialize, Serialize};

use crate::basis::Basis;
use crate::category::ForceCategory;
use crate::vector::{Coords, Root};
use crate::DIM;

/// Strength factor of the Wick drift.
const WICK_GAIN: f64 = 0.4;

/// Every scalar that feeds a projection besides the basis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionParams {
    /// Planar rotation (radians).
    pub angle: f64,
    /// 0 = reference basis, 1 = target basis.
    pub progress: f64,
    /// Drift strength; 0 disables the time distortion.
    pub wick_rotation: f64,
    /// Phase of the drift.
    pub universe_time: f64,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            angle: 0.0,
            progress: 1.0,
            wick_rotation: 0.0,
            universe_time: 0.0,
        }
    }
}

/// A point on the screen plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

/// One projected root, borrowing the root it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint<'a> {
    /// Index into the projected root slice.
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub original: &'a Root,
}

/// Owned form of [`ProjectedPoint`] for crossing threads or serialising.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node2D {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub coords: Coords,
    pub category: ForceCategory,
}

impl ProjectedPoint<'_> {
    pub fn position(&self) -> Point2 {
        Point2 { x: self.x, y: self.y }
    }

    pub fn to_owned_node(&self) -> Node2D {
        Node2D {
            id: self.id,
            x: self.x,
            y: self.y,
            coords: self.original.coords,
            category: self.original.category,
        }
    }
}

/// Project every root. Output index i corresponds to `roots[i]`.
pub fn project<'a>(roots: &'a [Root], basis: &Basis, params: &ProjectionParams) -> Vec<ProjectedPoint<'a>> {
    let effective = basis.interpolate(params.progress);
    let phasor = Complex::from_polar(1.0, params.angle);
    roots
        .iter()
        .enumerate()
        .map(|(idx, root)| projected(idx, root, &effective, phasor, params))
        .collect()
}

/// Same as [`project`], spread over the rayon thread pool.
#[cfg(feature = "parallel")]
pub fn project_par<'a>(roots: &'a [Root], basis: &Basis, params: &ProjectionParams) -> Vec<ProjectedPoint<'a>> {
    use rayon::prelude::*;

    let effective = basis.interpolate(params.progress);
    let phasor = Complex::from_polar(1.0, params.angle);
    roots
        .par_iter()
        .enumerate()
        .map(|(idx, root)| projected(idx, root, &effective, phasor, params))
        .collect()
}

/// Project a single vector. The drift uses index 0.
pub fn project_one(root: &Root, basis: &Basis, params: &ProjectionParams) -> Point2 {
    let effective = basis.interpolate(params.progress);
    let phasor = Complex::from_polar(1.0, params.angle);
    let z = rotate(linear(&evolve(&root.coords, 0, params), &effective), phasor);
    Point2 { x: z.re, y: z.im }
}

fn projected<'a>(
    idx: usize,
    root: &'a Root,
    effective: &Basis,
    phasor: Complex<f64>,
    params: &ProjectionParams,
) -> ProjectedPoint<'a> {
    let z = rotate(linear(&evolve(&root.coords, idx, params), effective), phasor);
    ProjectedPoint {
        id: idx,
        x: z.re,
        y: z.im,
        original: root,
    }
}

/// Wick drift of a root's coordinates at index `idx`.
fn evolve(coords: &Coords, idx: usize, params: &ProjectionParams) -> Coords {
    let factor = (params.universe_time + idx as f64).sin() * params.wick_rotation * WICK_GAIN;
    let mut out = [0.0; DIM];
    for (o, &c) in out.iter_mut().zip(coords.iter()) {
        *o = c + c * factor;
    }
    out
}

fn linear(coords: &Coords, basis: &Basis) -> Complex<f64> {
    let mut x = 0.0;
    let mut y = 0.0;
    for k in 0..DIM {
        x += coords[k] * basis.x[k];
        y += coords[k] * basis.y[k];
    }
    Complex::new(x, y)
}

/// (x + iy)·e^{iθ} = (x cos θ − y sin θ) + i(x sin θ + y cos θ)
fn rotate(z: Complex<f64>, phasor: Complex<f64>) -> Complex<f64> {
    z * phasor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basis::petrie_basis;
    use crate::groups::LieGroupType;
    use crate::roots::generate_roots;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    #[test]
    fn reference_basis_reads_first_two_coordinates() {
        for g in LieGroupType::ALL {
            let roots = generate_roots(g);
            let points = project(&roots, &Basis::reference(), &ProjectionParams::default());
            for (p, r) in points.iter().zip(roots.iter()) {
                assert_eq!(p.x, r.coords[0]);
                assert_eq!(p.y, r.coords[1]);
            }
        }
    }

    #[test]
    fn one_to_one_and_order_preserving() {
        let roots = generate_roots(LieGroupType::E8);
        let params = ProjectionParams {
            angle: 1.1,
            progress: 0.7,
            wick_rotation: 0.5,
            universe_time: 2.0,
        };
        let points = project(&roots, &petrie_basis(8), &params);
        assert_eq!(points.len(), roots.len());
        for (i, p) in points.iter().enumerate() {
            assert_eq!(p.id, i);
            assert!(std::ptr::eq(p.original, &roots[i]));
        }
    }

    #[test]
    fn rotation_is_two_pi_periodic() {
        let roots = generate_roots(LieGroupType::E8);
        let basis = petrie_basis(8);
        for theta in [0.0, 0.4, 2.5, -1.3] {
            let a = project(&roots, &basis, &ProjectionParams { angle: theta, ..Default::default() });
            let b = project(&roots, &basis, &ProjectionParams { angle: theta + 2.0 * PI, ..Default::default() });
            for (p, q) in a.iter().zip(b.iter()) {
                assert!((p.x - q.x).abs() < EPS && (p.y - q.y).abs() < EPS);
            }
        }
    }

    #[test]
    fn quarter_turn_swaps_axes() {
        let r = Root::new([1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let p = project_one(&r, &Basis::reference(), &ProjectionParams { angle: PI / 2.0, ..Default::default() });
        assert!(p.x.abs() < EPS);
        assert!((p.y - 1.0).abs() < EPS);
    }

    #[test]
    fn progress_zero_ignores_target_basis() {
        let roots = generate_roots(LieGroupType::F4);
        let params = ProjectionParams { progress: 0.0, ..Default::default() };
        let points = project(&roots, &petrie_basis(4), &params);
        for (p, r) in points.iter().zip(roots.iter()) {
            assert!((p.x - r.coords[0]).abs() < EPS);
            assert!((p.y - r.coords[1]).abs() < EPS);
        }
    }

    #[test]
    fn wick_drift_scales_each_root_by_its_own_phase() {
        let roots = generate_roots(LieGroupType::G2);
        let params = ProjectionParams {
            wick_rotation: 1.0,
            universe_time: 0.3,
            ..Default::default()
        };
        let points = project(&roots, &Basis::reference(), &params);
        for (idx, p) in points.iter().enumerate() {
            let scale = 1.0 + (0.3 + idx as f64).sin() * 0.4;
            assert!((p.x - roots[idx].coords[0] * scale).abs() < EPS, "root {}", idx);
            assert!((p.y - roots[idx].coords[1] * scale).abs() < EPS, "root {}", idx);
        }
    }

    #[test]
    fn project_one_matches_first_projected_point() {
        let roots = generate_roots(LieGroupType::E8);
        let basis = petrie_basis(8);
        let params = ProjectionParams {
            angle: 0.9,
            progress: 0.4,
            wick_rotation: 0.8,
            universe_time: 1.7,
        };
        let all = project(&roots, &basis, &params);
        let one = project_one(&roots[0], &basis, &params);
        assert!((all[0].x - one.x).abs() < EPS);
        assert!((all[0].y - one.y).abs() < EPS);

        // Index 5 drifts with sin(t + 5) in bulk but sin(t) alone.
        let one5 = project_one(&roots[5], &basis, &params);
        let bulk5 = all[5].position();
        assert!((one5.x - bulk5.x).abs() > 1e-6 || (one5.y - bulk5.y).abs() > 1e-6);
    }

    #[test]
    fn zero_vector_projects_to_origin() {
        let p = project_one(&Root::zero(), &petrie_basis(8), &ProjectionParams { wick_rotation: 3.0, ..Default::default() });
        assert_eq!(p, Point2 { x: 0.0, y: 0.0 });
    }

    #[test]
    fn owned_nodes_copy_root_data() {
        let roots = generate_roots(LieGroupType::E8);
        let points = project(&roots, &petrie_basis(8), &ProjectionParams::default());
        let node = points[200].to_owned_node();
        assert_eq!(node.id, 200);
        assert_eq!(node.coords, roots[200].coords);
        assert_eq!(node.category, roots[200].category);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_projection_matches_serial() {
        let roots = generate_roots(LieGroupType::E8);
        let params = ProjectionParams {
            angle: 0.2,
            progress: 0.9,
            wick_rotation: 0.3,
            universe_time: 4.0,
        };
        let basis = petrie_basis(8);
        assert_eq!(project(&roots, &basis, &params), project_par(&roots, &basis, &params));
    }
}
