//! Section keywords
//!
//! Each section of a rig definition opens with a keyword line (`nodes`,
//! `beams`, `wheels2`, ...). Keywords are used to tag sections in the
//! document tree and to tag diagnostics with the section they came from.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Keyword {
    // Node producers
    Nodes,
    Nodes2,
    Cinecam,
    Wheels,
    Wheels2,
    MeshWheels,
    MeshWheels2,
    FlexBodyWheels,

    // Node consumers
    Beams,
    Shocks,
    Hydros,
    Commands,
    Ropes,
    Ties,
    Fixes,
    Hooks,
    SlideNodes,
    RailGroups,
    Flexbodies,
    Submesh,
    Axles,
    Cameras,
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Nodes => "nodes",
            Keyword::Nodes2 => "nodes2",
            Keyword::Cinecam => "cinecam",
            Keyword::Wheels => "wheels",
            Keyword::Wheels2 => "wheels2",
            Keyword::MeshWheels => "meshwheels",
            Keyword::MeshWheels2 => "meshwheels2",
            Keyword::FlexBodyWheels => "flexbodywheels",
            Keyword::Beams => "beams",
            Keyword::Shocks => "shocks",
            Keyword::Hydros => "hydros",
            Keyword::Commands => "commands",
            Keyword::Ropes => "ropes",
            Keyword::Ties => "ties",
            Keyword::Fixes => "fixes",
            Keyword::Hooks => "hooks",
            Keyword::SlideNodes => "slidenodes",
            Keyword::RailGroups => "railgroups",
            Keyword::Flexbodies => "flexbodies",
            Keyword::Submesh => "submesh",
            Keyword::Axles => "axles",
            Keyword::Cameras => "cameras",
        }
    }

    /// Whether sections with this keyword add nodes to the node table
    pub fn produces_nodes(self) -> bool {
        matches!(
            self,
            Keyword::Nodes
                | Keyword::Nodes2
                | Keyword::Cinecam
                | Keyword::Wheels
                | Keyword::Wheels2
                | Keyword::MeshWheels
                | Keyword::MeshWheels2
                | Keyword::FlexBodyWheels
        )
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
