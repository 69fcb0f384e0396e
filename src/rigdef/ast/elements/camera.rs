//! Camera element (`cameras`)

use super::super::node_ref::NodeRef;
use super::super::traits::{NodeRefVisitor, References};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub center_node: NodeRef,
    pub back_node: NodeRef,
    pub left_node: NodeRef,
}

impl References for Camera {
    fn walk_refs(&mut self, visitor: &mut dyn NodeRefVisitor) {
        self.center_node.walk_refs(visitor);
        self.back_node.walk_refs(visitor);
        self.left_node.walk_refs(visitor);
    }
}
