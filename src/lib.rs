//! # exceptional-lattice
//!
//! Root systems of the exceptional Lie groups (G₂, F₄, E₆, E₇, E₈) embedded in
//! ℝ⁸, and the machinery to look at them on a 2D screen.
//!
//! ```text
//! RootSystemGenerator (roots)
//!   ↓ 8D root vectors, tagged by force category
//! BasisProvider (basis)  →  ProjectionEngine (projection)
//!   ↓ 2D points, one per root, same order
//! DecayResolver (decay)
//!   ↓ α = β + γ splittings, projected for animation
//! ```
//!
//! The geometric core (`roots`, `basis`, `projection`, `decay`) is pure and
//! stateless: every call is a function of its arguments and can be invoked
//! from any thread. `session` and `worker` are the thin stateful layers an
//! interactive front end drives once per animation frame.
//!
//! ## Usage
//!
//! ```
//! use exceptional_lattice::prelude::*;
//!
//! let roots = generate_roots(LieGroupType::E8);
//! let basis = petrie_basis(LieGroupType::E8.petrie_rank());
//! let params = ProjectionParams { angle: 0.3, ..Default::default() };
//! let points = project(&roots, &basis, &params);
//! assert_eq!(points.len(), 240);
//!
//! if let Some((beta, gamma)) = find_decay_pair(&roots[0], &roots) {
//!     println!("{} -> {} + {}", roots[0], beta, gamma);
//! }
//! ```
//!
//! ## Caveat
//!
//! Only E₈ (and the classical G₂ diagram) are built from the textbook
//! construction. F₄ is the standard 48-root set, while E₆ and E₇ are cut out
//! of E₈ by linear filters. The counts happen to agree with the canonical
//! ones, but the generation is a reproducible visual algorithm, not a
//! verified root-system construction.

pub mod error;
pub mod category;
pub mod vector;
pub mod groups;
pub mod roots;
pub mod basis;
pub mod projection;
pub mod decay;
pub mod edges;
pub mod cosmic;
pub mod sweep;
pub mod config;
pub mod session;
pub mod worker;

/// Absolute tolerance used by every floating point comparison in the core.
pub const TOLERANCE: f64 = 1e-3;

/// Dimension of the ambient space every root lives in.
pub const DIM: usize = 8;

pub mod prelude {
    pub use crate::error::*;
    pub use crate::category::*;
    pub use crate::vector::*;
    pub use crate::groups::*;
    pub use crate::roots::*;
    pub use crate::basis::*;
    pub use crate::projection::*;
    pub use crate::decay::*;
    pub use crate::edges::*;
    pub use crate::cosmic::*;
    pub use crate::sweep::*;
    pub use crate::config::*;
    pub use crate::session::*;
    pub use crate::worker::*;
    pub use crate::{DIM, TOLERANCE};
}
