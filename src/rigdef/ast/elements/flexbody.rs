//! Flexbody element
//!
//! A flexbody deforms a mesh using the nodes of its `forset` list, placed
//! relative to three reference nodes.

use super::super::node_ref::{NodeRange, NodeRef};
use super::super::traits::{NodeRefVisitor, References};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flexbody {
    pub reference_node: NodeRef,
    pub x_axis_node: NodeRef,
    pub y_axis_node: NodeRef,
    #[serde(default)]
    pub offset: [f32; 3],
    pub mesh_name: String,
    /// The `forset` node list
    #[serde(default)]
    pub node_list: Vec<NodeRange>,
}

impl References for Flexbody {
    fn walk_refs(&mut self, visitor: &mut dyn NodeRefVisitor) {
        self.reference_node.walk_refs(visitor);
        self.x_axis_node.walk_refs(visitor);
        self.y_axis_node.walk_refs(visitor);
        self.node_list.walk_refs(visitor);
    }
}
