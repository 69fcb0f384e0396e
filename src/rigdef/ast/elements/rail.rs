//! Rail elements: `railgroups` and `slidenodes`
//!
//! Rails are node lists, written as ranges (`1-10, 14, 20-22`).

use super::super::node_ref::{NodeRange, NodeRef};
use super::super::traits::{NodeRefVisitor, References};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RailGroup {
    pub id: u32,
    pub node_list: Vec<NodeRange>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideNode {
    pub slide_node: NodeRef,
    #[serde(default)]
    pub rail_nodes: Vec<NodeRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub railgroup_id: Option<u32>,
}

impl References for RailGroup {
    fn walk_refs(&mut self, visitor: &mut dyn NodeRefVisitor) {
        self.node_list.walk_refs(visitor);
    }
}

impl References for SlideNode {
    fn walk_refs(&mut self, visitor: &mut dyn NodeRefVisitor) {
        self.slide_node.walk_refs(visitor);
        self.rail_nodes.walk_refs(visitor);
    }
}
