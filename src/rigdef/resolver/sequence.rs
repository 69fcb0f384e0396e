//! Canonical section sequence
//!
//! The node table is always built in this order, no matter where the
//! sections appear in the document:
//!
//! | step | keyword         | nodes per entry  |
//! |------|-----------------|------------------|
//! | 0    | nodes           | 1                |
//! | 1    | nodes2          | 1                |
//! | 2    | cinecam         | 1                |
//! | 3    | wheels          | num_rays * 2     |
//! | 4    | wheels2         | num_rays * 4     |
//! | 5    | meshwheels      | num_rays * 2     |
//! | 6    | meshwheels2     | num_rays * 2     |
//! | 7    | flexbodywheels  | num_rays * 4     |
//!
//! Sections sharing a keyword are visited in declared order, and so are the
//! nodes within them. `nodes` and `nodes2` may both hold numbered and named
//! nodes; together they form the node group that starts at slot 0.

use crate::rigdef::ast::Keyword;
use serde::Serialize;
use std::fmt;

/// Build order of node-producing keywords
pub const CANONICAL_SEQUENCE: [Keyword; 8] = [
    Keyword::Nodes,
    Keyword::Nodes2,
    Keyword::Cinecam,
    Keyword::Wheels,
    Keyword::Wheels2,
    Keyword::MeshWheels,
    Keyword::MeshWheels2,
    Keyword::FlexBodyWheels,
];

/// Origin of a node table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    NumberedNodes,
    NamedNodes,
    Cinecam,
    Wheels,
    Wheels2,
    MeshWheels,
    MeshWheels2,
    FlexBodyWheels,
}

impl SectionKind {
    pub const COUNT: usize = 8;

    pub const ALL: [SectionKind; Self::COUNT] = [
        SectionKind::NumberedNodes,
        SectionKind::NamedNodes,
        SectionKind::Cinecam,
        SectionKind::Wheels,
        SectionKind::Wheels2,
        SectionKind::MeshWheels,
        SectionKind::MeshWheels2,
        SectionKind::FlexBodyWheels,
    ];

    /// Dense index, for per-kind counters
    pub fn index(self) -> usize {
        self as usize
    }

    /// Position of this kind's group in the table. Numbered and named nodes
    /// share the node group.
    pub fn rank(self) -> usize {
        match self {
            SectionKind::NumberedNodes | SectionKind::NamedNodes => 0,
            SectionKind::Cinecam => 1,
            SectionKind::Wheels => 2,
            SectionKind::Wheels2 => 3,
            SectionKind::MeshWheels => 4,
            SectionKind::MeshWheels2 => 5,
            SectionKind::FlexBodyWheels => 6,
        }
    }

    /// Nodes generated per wheel ray; `None` for non-wheel kinds
    pub fn nodes_per_ray(self) -> Option<u32> {
        match self {
            SectionKind::Wheels | SectionKind::MeshWheels | SectionKind::MeshWheels2 => Some(2),
            SectionKind::Wheels2 | SectionKind::FlexBodyWheels => Some(4),
            _ => None,
        }
    }

    /// Whether this kind shares its canonical group with `other`
    pub fn same_group(self, other: SectionKind) -> bool {
        self.rank() == other.rank()
    }

    pub fn keyword(self) -> Keyword {
        match self {
            SectionKind::NumberedNodes | SectionKind::NamedNodes => Keyword::Nodes,
            SectionKind::Cinecam => Keyword::Cinecam,
            SectionKind::Wheels => Keyword::Wheels,
            SectionKind::Wheels2 => Keyword::Wheels2,
            SectionKind::MeshWheels => Keyword::MeshWheels,
            SectionKind::MeshWheels2 => Keyword::MeshWheels2,
            SectionKind::FlexBodyWheels => Keyword::FlexBodyWheels,
        }
    }

    /// Kind of the nodes generated by a keyword. `nodes`/`nodes2` map to no
    /// single kind, since that depends on each node's id.
    pub fn generated_by(keyword: Keyword) -> Option<SectionKind> {
        match keyword {
            Keyword::Cinecam => Some(SectionKind::Cinecam),
            Keyword::Wheels => Some(SectionKind::Wheels),
            Keyword::Wheels2 => Some(SectionKind::Wheels2),
            Keyword::MeshWheels => Some(SectionKind::MeshWheels),
            Keyword::MeshWheels2 => Some(SectionKind::MeshWheels2),
            Keyword::FlexBodyWheels => Some(SectionKind::FlexBodyWheels),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::NumberedNodes => "nodes",
            SectionKind::NamedNodes => "nodes-named",
            SectionKind::Cinecam => "cinecam",
            SectionKind::Wheels => "wheels",
            SectionKind::Wheels2 => "wheels2",
            SectionKind::MeshWheels => "meshwheels",
            SectionKind::MeshWheels2 => "meshwheels2",
            SectionKind::FlexBodyWheels => "flexbodywheels",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of a generated wheel node within its wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubRole {
    TyreA,
    TyreB,
    RimA,
    RimB,
}

impl SubRole {
    pub fn as_str(self) -> &'static str {
        match self {
            SubRole::TyreA => "tyre-a",
            SubRole::TyreB => "tyre-b",
            SubRole::RimA => "rim-a",
            SubRole::RimB => "rim-b",
        }
    }
}

impl fmt::Display for SubRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
