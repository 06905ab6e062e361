//! Root system generation.
//!
//! E₈ is built from its two classical families in ℝ⁸:
//!
//! - **integral**: (±1, ±1, 0⁶) over every pair of slots, 112 roots
//! - **spinor**: (±½)⁸ with an even number of minus signs, 128 roots
//!
//! E₆ and E₇ are cut out of that set by linear constraints, F₄ and G₂ are
//! written down directly in the leading slots. Every generator returns roots
//! in a fixed enumeration order; callers (decay search in particular) rely on
//! that order.

use log::{debug, warn};

use crate::category::ForceCategory;
use crate::groups::LieGroupType;
use crate::vector::{Coords, Root};
use crate::{DIM, TOLERANCE};

const SIGNS: [f64; 2] = [1.0, -1.0];

/// Roots of `group`, each tagged with its force category.
pub fn generate_roots(group: LieGroupType) -> Vec<Root> {
    let roots = match group {
        LieGroupType::G2 => g2_roots(),
        LieGroupType::F4 => f4_roots(),
        LieGroupType::E6 => e8_roots_raw()
            .into_iter()
            .filter(|c| near_zero(c[0] + c[1]) && near_zero(c[1] + c[2]))
            .map(tag_sublattice)
            .collect(),
        LieGroupType::E7 => e8_roots_raw()
            .into_iter()
            .filter(|c| near_zero(c[0] + c[1]))
            .map(tag_sublattice)
            .collect(),
        LieGroupType::E8 => e8_roots_raw()
            .into_iter()
            .map(|c| Root::tagged(c, e8_category(&c)))
            .collect::<Vec<_>>(),
    };
    debug!("generated {} roots for {}", roots.len(), group);
    roots
}

/// Name-based entry point. Unknown names give an empty root set.
///
/// Use [`LieGroupType::from_str`](std::str::FromStr) instead to reject
/// unknown names with an error.
pub fn generate_roots_named(name: &str) -> Vec<Root> {
    match name.parse::<LieGroupType>() {
        Ok(group) => generate_roots(group),
        Err(err) => {
            warn!("{}; returning an empty root set", err);
            Vec::new()
        }
    }
}

/// All 240 E₈ roots, untagged: integral family first, then spinors.
fn e8_roots_raw() -> Vec<Coords> {
    let mut roots = Vec::with_capacity(240);

    for i in 0..DIM {
        for j in (i + 1)..DIM {
            for s1 in SIGNS {
                for s2 in SIGNS {
                    let mut c = [0.0; DIM];
                    c[i] = s1;
                    c[j] = s2;
                    roots.push(c);
                }
            }
        }
    }

    // Bit j of the mask set means a minus sign in slot j.
    for mask in 0u32..256 {
        if mask.count_ones() % 2 != 0 {
            continue;
        }
        let mut c = [0.0; DIM];
        for (j, v) in c.iter_mut().enumerate() {
            *v = if (mask >> j) & 1 == 1 { -0.5 } else { 0.5 };
        }
        roots.push(c);
    }

    roots
}

/// First matching rule wins.
fn e8_category(c: &Coords) -> ForceCategory {
    if c.iter().any(|v| v.abs() == 0.5) {
        ForceCategory::Fermion
    } else if c[0] != 0.0 && c[1] != 0.0 {
        ForceCategory::Weak
    } else if c[2] != 0.0 || c[3] != 0.0 {
        ForceCategory::Strong
    } else if c[4] != 0.0 || c[5] != 0.0 {
        ForceCategory::Electromagnetic
    } else {
        ForceCategory::Gravitational
    }
}

/// E₆/E₇ tagging: spinors are matter, everything else is strong.
fn tag_sublattice(c: Coords) -> Root {
    let category = if c.iter().any(|&v| v == 0.5 || v == -0.5) {
        ForceCategory::Fermion
    } else {
        ForceCategory::Strong
    };
    Root::tagged(c, category)
}

fn near_zero(v: f64) -> bool {
    v.abs() < TOLERANCE
}

/// 24 long (±1,±1,0,0), 8 short (±1,0,0,0), 16 spinor (±½)⁴.
fn f4_roots() -> Vec<Root> {
    let mut roots = Vec::with_capacity(48);

    for i in 0..4 {
        for j in (i + 1)..4 {
            for s1 in SIGNS {
                for s2 in SIGNS {
                    let mut c = [0.0; DIM];
                    c[i] = s1;
                    c[j] = s2;
                    roots.push(Root::tagged(c, ForceCategory::Strong));
                }
            }
        }
    }

    for i in 0..4 {
        for s in SIGNS {
            let mut c = [0.0; DIM];
            c[i] = s;
            roots.push(Root::tagged(c, ForceCategory::Weak));
        }
    }

    for mask in 0u32..16 {
        let mut c = [0.0; DIM];
        for (j, v) in c.iter_mut().take(4).enumerate() {
            *v = if (mask >> j) & 1 == 1 { -0.5 } else { 0.5 };
        }
        roots.push(Root::tagged(c, ForceCategory::Fermion));
    }

    roots
}

/// The G₂ diagram in the plane x₀ + x₁ + x₂ = 0.
fn g2_roots() -> Vec<Root> {
    const SHORT: [[f64; 3]; 6] = [
        [1.0, -1.0, 0.0],
        [-1.0, 1.0, 0.0],
        [1.0, 0.0, -1.0],
        [-1.0, 0.0, 1.0],
        [0.0, 1.0, -1.0],
        [0.0, -1.0, 1.0],
    ];
    const LONG: [[f64; 3]; 6] = [
        [2.0, -1.0, -1.0],
        [-2.0, 1.0, 1.0],
        [1.0, -2.0, 1.0],
        [-1.0, 2.0, -1.0],
        [1.0, 1.0, -2.0],
        [-1.0, -1.0, 2.0],
    ];

    let lift = |v: &[f64; 3], category| {
        let mut c = [0.0; DIM];
        c[..3].copy_from_slice(v);
        Root::tagged(c, category)
    };

    SHORT
        .iter()
        .map(|v| lift(v, ForceCategory::Strong))
        .chain(LONG.iter().map(|v| lift(v, ForceCategory::Weak)))
        .collect()
}
