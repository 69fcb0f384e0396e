//! Section element
//!
//! A section is one keyword block with its entries. Modules keep their
//! sections in the order they were written; the same keyword may appear
//! several times.

use super::super::keyword::Keyword;
use super::super::traits::{NodeRefVisitor, References};
use super::axle::Axle;
use super::beam::{Beam, Command, Hydro, Shock};
use super::camera::Camera;
use super::cinecam::Cinecam;
use super::flexbody::Flexbody;
use super::node::Node;
use super::rail::{RailGroup, SlideNode};
use super::rope::{Hook, Rope, Tie};
use super::submesh::Submesh;
use super::wheel::{FlexBodyWheel, MeshWheel, Wheel, Wheel2};
use super::super::node_ref::NodeRef;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "keyword", content = "entries", rename_all = "lowercase")]
pub enum Section {
    Nodes(Vec<Node>),
    Nodes2(Vec<Node>),
    Cinecam(Vec<Cinecam>),
    Wheels(Vec<Wheel>),
    Wheels2(Vec<Wheel2>),
    MeshWheels(Vec<MeshWheel>),
    MeshWheels2(Vec<MeshWheel>),
    FlexBodyWheels(Vec<FlexBodyWheel>),
    Beams(Vec<Beam>),
    Shocks(Vec<Shock>),
    Hydros(Vec<Hydro>),
    Commands(Vec<Command>),
    Ropes(Vec<Rope>),
    Ties(Vec<Tie>),
    Fixes(Vec<NodeRef>),
    Hooks(Vec<Hook>),
    SlideNodes(Vec<SlideNode>),
    RailGroups(Vec<RailGroup>),
    Flexbodies(Vec<Flexbody>),
    Submesh(Vec<Submesh>),
    Axles(Vec<Axle>),
    Cameras(Vec<Camera>),
}

impl Section {
    pub fn keyword(&self) -> Keyword {
        match self {
            Section::Nodes(_) => Keyword::Nodes,
            Section::Nodes2(_) => Keyword::Nodes2,
            Section::Cinecam(_) => Keyword::Cinecam,
            Section::Wheels(_) => Keyword::Wheels,
            Section::Wheels2(_) => Keyword::Wheels2,
            Section::MeshWheels(_) => Keyword::MeshWheels,
            Section::MeshWheels2(_) => Keyword::MeshWheels2,
            Section::FlexBodyWheels(_) => Keyword::FlexBodyWheels,
            Section::Beams(_) => Keyword::Beams,
            Section::Shocks(_) => Keyword::Shocks,
            Section::Hydros(_) => Keyword::Hydros,
            Section::Commands(_) => Keyword::Commands,
            Section::Ropes(_) => Keyword::Ropes,
            Section::Ties(_) => Keyword::Ties,
            Section::Fixes(_) => Keyword::Fixes,
            Section::Hooks(_) => Keyword::Hooks,
            Section::SlideNodes(_) => Keyword::SlideNodes,
            Section::RailGroups(_) => Keyword::RailGroups,
            Section::Flexbodies(_) => Keyword::Flexbodies,
            Section::Submesh(_) => Keyword::Submesh,
            Section::Axles(_) => Keyword::Axles,
            Section::Cameras(_) => Keyword::Cameras,
        }
    }

    /// Number of entries (lines) in the section
    pub fn len(&self) -> usize {
        match self {
            Section::Nodes(v) | Section::Nodes2(v) => v.len(),
            Section::Cinecam(v) => v.len(),
            Section::Wheels(v) => v.len(),
            Section::Wheels2(v) => v.len(),
            Section::MeshWheels(v) | Section::MeshWheels2(v) => v.len(),
            Section::FlexBodyWheels(v) => v.len(),
            Section::Beams(v) => v.len(),
            Section::Shocks(v) => v.len(),
            Section::Hydros(v) => v.len(),
            Section::Commands(v) => v.len(),
            Section::Ropes(v) => v.len(),
            Section::Ties(v) => v.len(),
            Section::Fixes(v) => v.len(),
            Section::Hooks(v) => v.len(),
            Section::SlideNodes(v) => v.len(),
            Section::RailGroups(v) => v.len(),
            Section::Flexbodies(v) => v.len(),
            Section::Submesh(v) => v.len(),
            Section::Axles(v) => v.len(),
            Section::Cameras(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_nodes(&self) -> Option<&[Node]> {
        match self {
            Section::Nodes(nodes) | Section::Nodes2(nodes) => Some(nodes),
            _ => None,
        }
    }
}

impl References for Section {
    /// Visits every reference in the section. Node ids of `nodes`/`nodes2`
    /// are definitions and are skipped.
    fn walk_refs(&mut self, visitor: &mut dyn NodeRefVisitor) {
        match self {
            Section::Nodes(_) | Section::Nodes2(_) => {}
            Section::Cinecam(v) => v.walk_refs(visitor),
            Section::Wheels(v) => v.walk_refs(visitor),
            Section::Wheels2(v) => v.walk_refs(visitor),
            Section::MeshWheels(v) | Section::MeshWheels2(v) => v.walk_refs(visitor),
            Section::FlexBodyWheels(v) => v.walk_refs(visitor),
            Section::Beams(v) => v.walk_refs(visitor),
            Section::Shocks(v) => v.walk_refs(visitor),
            Section::Hydros(v) => v.walk_refs(visitor),
            Section::Commands(v) => v.walk_refs(visitor),
            Section::Ropes(v) => v.walk_refs(visitor),
            Section::Ties(v) => v.walk_refs(visitor),
            Section::Fixes(v) => v.walk_refs(visitor),
            Section::Hooks(v) => v.walk_refs(visitor),
            Section::SlideNodes(v) => v.walk_refs(visitor),
            Section::RailGroups(v) => v.walk_refs(visitor),
            Section::Flexbodies(v) => v.walk_refs(visitor),
            Section::Submesh(v) => v.walk_refs(visitor),
            Section::Axles(v) => v.walk_refs(visitor),
            Section::Cameras(v) => v.walk_refs(visitor),
        }
    }
}
