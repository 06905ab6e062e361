//! Static metadata for the five exceptional groups.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LatticeError;

/// The exceptional simple Lie groups.
///
/// Serialised as its short name ("E8"); deserialisation goes through
/// [`FromStr`], so names are trimmed and case-insensitive everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LieGroupType {
    G2,
    F4,
    E6,
    E7,
    #[default]
    E8,
}

/// Fixed description of a group: rank, dimension and root count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupDescriptor {
    pub id: LieGroupType,
    pub name: &'static str,
    pub rank: usize,
    pub dimension: usize,
    pub root_count: usize,
    pub description: &'static str,
}

/// Descriptor table, smallest group first.
pub const LIE_GROUPS: [GroupDescriptor; 5] = [
    GroupDescriptor {
        id: LieGroupType::G2,
        name: "G₂",
        rank: 2,
        dimension: 14,
        root_count: 12,
        description: "The smallest exceptional group, describing symmetries of octonions.",
    },
    GroupDescriptor {
        id: LieGroupType::F4,
        name: "F₄",
        rank: 4,
        dimension: 52,
        root_count: 48,
        description: "The symmetry group of the 24-cell, a self-dual regular polychoron.",
    },
    GroupDescriptor {
        id: LieGroupType::E6,
        name: "E₆",
        rank: 6,
        dimension: 78,
        root_count: 72,
        description: "Often used in Grand Unified Theories (GUTs) as a precursor to E8.",
    },
    GroupDescriptor {
        id: LieGroupType::E7,
        name: "E₇",
        rank: 7,
        dimension: 133,
        root_count: 126,
        description: "A large subgroup of E8 with complex quaternary structures.",
    },
    GroupDescriptor {
        id: LieGroupType::E8,
        name: "E₈",
        rank: 8,
        dimension: 248,
        root_count: 240,
        description: "The ultimate exceptional group, centerpiece of the Theory of Everything.",
    },
];

impl LieGroupType {
    pub const ALL: [LieGroupType; 5] = [
        LieGroupType::G2,
        LieGroupType::F4,
        LieGroupType::E6,
        LieGroupType::E7,
        LieGroupType::E8,
    ];

    pub fn descriptor(&self) -> &'static GroupDescriptor {
        match self {
            LieGroupType::G2 => &LIE_GROUPS[0],
            LieGroupType::F4 => &LIE_GROUPS[1],
            LieGroupType::E6 => &LIE_GROUPS[2],
            LieGroupType::E7 => &LIE_GROUPS[3],
            LieGroupType::E8 => &LIE_GROUPS[4],
        }
    }

    pub fn rank(&self) -> usize {
        self.descriptor().rank
    }

    /// Rank fed to the Petrie basis when the projection is reset.
    ///
    /// E₆ and E₇ live inside E₈ here, so they share its 8-fold circle.
    pub fn petrie_rank(&self) -> usize {
        match self {
            LieGroupType::G2 => 2,
            LieGroupType::F4 => 4,
            LieGroupType::E6 | LieGroupType::E7 | LieGroupType::E8 => 8,
        }
    }

    /// Cartan matrix rows as shown by the formalism overlay.
    ///
    /// E₇ has no table of its own and falls back to E₈'s.
    pub fn cartan_matrix(&self) -> Vec<Vec<i32>> {
        let rows: &[&[i32]] = match self {
            LieGroupType::G2 => &[&[2, -1], &[-3, 2]],
            LieGroupType::F4 => &[
                &[2, -1, 0, 0],
                &[-1, 2, -2, 0],
                &[0, -1, 2, -1],
                &[0, 0, -1, 2],
            ],
            LieGroupType::E6 => &[
                &[2, 0, -1, 0, 0, 0],
                &[0, 2, 0, -1, 0, 0],
                &[-1, 0, 2, -1, 0, 0],
                &[0, -1, -1, 2, -1, 0],
                &[0, 0, 0, -1, 2, -1],
                &[0, 0, 0, 0, -1, 2],
            ],
            LieGroupType::E7 | LieGroupType::E8 => &[
                &[2, -1, 0, 0, 0, 0, 0, 0],
                &[-1, 2, -1, 0, 0, 0, 0, 0],
                &[0, -1, 2, -1, 0, 0, 0, -1],
                &[0, 0, -1, 2, -1, 0, 0, 0],
                &[0, 0, 0, -1, 2, -1, 0, 0],
                &[0, 0, 0, 0, -1, 2, -1, 0],
                &[0, 0, 0, 0, 0, -1, 2, 0],
                &[0, 0, -1, 0, 0, 0, 0, 2],
            ],
        };
        rows.iter().map(|r| r.to_vec()).collect()
    }
}

impl fmt::Display for LieGroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LieGroupType::G2 => "G2",
            LieGroupType::F4 => "F4",
            LieGroupType::E6 => "E6",
            LieGroupType::E7 => "E7",
            LieGroupType::E8 => "E8",
        };
        f.write_str(s)
    }
}

impl FromStr for LieGroupType {
    type Err = LatticeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "G2" => Ok(LieGroupType::G2),
            "F4" => Ok(LieGroupType::F4),
            "E6" => Ok(LieGroupType::E6),
            "E7" => Ok(LieGroupType::E7),
            "E8" => Ok(LieGroupType::E8),
            _ => Err(LatticeError::UnknownGroup { name: s.to_string() }),
        }
    }
}

impl TryFrom<String> for LieGroupType {
    type Error = LatticeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<LieGroupType> for String {
    fn from(group: LieGroupType) -> String {
        group.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_table_matches_enum() {
        for g in LieGroupType::ALL {
            assert_eq!(g.descriptor().id, g);
        }
        assert_eq!(LieGroupType::E8.descriptor().root_count, 240);
        assert_eq!(LieGroupType::E7.descriptor().dimension, 133);
    }

    #[test]
    fn dimension_is_rank_plus_roots() {
        for d in LIE_GROUPS.iter() {
            assert_eq!(d.dimension, d.rank + d.root_count, "{}", d.name);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("e8".parse::<LieGroupType>().unwrap(), LieGroupType::E8);
        assert_eq!(" G2 ".parse::<LieGroupType>().unwrap(), LieGroupType::G2);
        assert_eq!(
            "A2".parse::<LieGroupType>(),
            Err(LatticeError::UnknownGroup { name: "A2".into() })
        );
    }

    #[test]
    fn display_roundtrips_through_parse() {
        for g in LieGroupType::ALL {
            assert_eq!(g.to_string().parse::<LieGroupType>().unwrap(), g);
        }
    }

    #[test]
    fn petrie_rank_rule() {
        assert_eq!(LieGroupType::G2.petrie_rank(), 2);
        assert_eq!(LieGroupType::F4.petrie_rank(), 4);
        assert_eq!(LieGroupType::E6.petrie_rank(), 8);
        assert_eq!(LieGroupType::E7.petrie_rank(), 8);
    }

    #[test]
    fn cartan_matrices_are_square_with_twos_on_diagonal() {
        for g in LieGroupType::ALL {
            let m = g.cartan_matrix();
            for (i, row) in m.iter().enumerate() {
                assert_eq!(row.len(), m.len());
                assert_eq!(row[i], 2);
            }
        }
        assert_eq!(LieGroupType::E6.cartan_matrix().len(), 6);
        assert_eq!(LieGroupType::E7.cartan_matrix().len(), 8);
    }

    #[test]
    fn serde_uses_case_insensitive_names() {
        let g: LieGroupType = serde_json::from_str("\"e7\"").unwrap();
        assert_eq!(g, LieGroupType::E7);
        assert_eq!(serde_json::to_string(&LieGroupType::F4).unwrap(), "\"F4\"");
        assert!(serde_json::from_str::<LieGroupType>("\"A5\"").is_err());
    }
}
