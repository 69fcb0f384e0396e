//! Submesh element (cab triangles)

use super::super::node_ref::NodeRef;
use super::super::traits::{NodeRefVisitor, References};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CabTriangle {
    pub nodes: [NodeRef; 3],
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub options: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Submesh {
    #[serde(default)]
    pub backmesh: bool,
    #[serde(default)]
    pub cab_triangles: Vec<CabTriangle>,
}

impl References for CabTriangle {
    fn walk_refs(&mut self, visitor: &mut dyn NodeRefVisitor) {
        self.nodes.walk_refs(visitor);
    }
}

impl References for Submesh {
    fn walk_refs(&mut self, visitor: &mut dyn NodeRefVisitor) {
        self.cab_triangles.walk_refs(visitor);
    }
}
