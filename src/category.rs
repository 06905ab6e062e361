//! Force categories attached to roots, and the subgroup filters built on them.
//!
//! The category is a display/interaction label derived from the coordinate
//! pattern at generation time. It drives colouring, propagator style and
//! subgroup highlighting in the front end.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::vector::Root;

/// Closed set of labels a root can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ForceCategory {
    Strong,
    Weak,
    Electromagnetic,
    Fermion,
    Gravitational,
    Massive,
    Broken,
    Entangled,
    TensorNode,
    #[default]
    None,
}

/// How a particle line is drawn in a Feynman diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropagatorStyle {
    /// Matter lines.
    Straight,
    /// Gauge boson lines.
    Wavy,
}

impl ForceCategory {
    /// Every category, in declaration order.
    pub const ALL: [ForceCategory; 10] = [
        ForceCategory::Strong,
        ForceCategory::Weak,
        ForceCategory::Electromagnetic,
        ForceCategory::Fermion,
        ForceCategory::Gravitational,
        ForceCategory::Massive,
        ForceCategory::Broken,
        ForceCategory::Entangled,
        ForceCategory::TensorNode,
        ForceCategory::None,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ForceCategory::Strong => "Strong",
            ForceCategory::Weak => "Weak",
            ForceCategory::Electromagnetic => "Electromagnetic",
            ForceCategory::Fermion => "Fermion",
            ForceCategory::Gravitational => "Gravitational",
            ForceCategory::Massive => "Massive",
            ForceCategory::Broken => "Broken",
            ForceCategory::Entangled => "Entangled",
            ForceCategory::TensorNode => "TensorNode",
            ForceCategory::None => "None",
        }
    }

    pub fn is_fermionic(&self) -> bool {
        matches!(self, ForceCategory::Fermion)
    }

    pub fn propagator_style(&self) -> PropagatorStyle {
        if self.is_fermionic() {
            PropagatorStyle::Straight
        } else {
            PropagatorStyle::Wavy
        }
    }
}

impl fmt::Display for ForceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named group of categories the explorer can highlight together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subgroup {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub categories: &'static [ForceCategory],
}

/// Subgroups offered by the explorer, in menu order.
pub const SUBGROUPS: [Subgroup; 4] = [
    Subgroup {
        id: "sm",
        name: "Standard Model",
        description: "The SU(3)xSU(2)xU(1) gauge groups describing strong, weak, and electromagnetic forces.",
        categories: &[
            ForceCategory::Strong,
            ForceCategory::Weak,
            ForceCategory::Electromagnetic,
        ],
    },
    Subgroup {
        id: "su3",
        name: "Strong (SU(3))",
        description: "The 8 gluons mediating the strong nuclear force between quarks.",
        categories: &[ForceCategory::Strong],
    },
    Subgroup {
        id: "su2",
        name: "Weak (SU(2))",
        description: "The W and Z bosons mediating the weak interaction.",
        categories: &[ForceCategory::Weak],
    },
    Subgroup {
        id: "fermions",
        name: "Fermions",
        description: "Quarks and leptons (matter particles) embedded in the E8 lattice.",
        categories: &[ForceCategory::Fermion],
    },
];

impl Subgroup {
    pub fn by_id(id: &str) -> Option<&'static Subgroup> {
        SUBGROUPS.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, category: ForceCategory) -> bool {
        self.categories.contains(&category)
    }

    /// Roots whose category belongs to this subgroup, in input order.
    pub fn filter_roots<'a>(&self, roots: &'a [Root]) -> Vec<&'a Root> {
        roots.iter().filter(|r| self.contains(r.category)).collect()
    }
}
