//! Attachment elements: `ropes`, `ties`, `hooks`

use super::super::node_ref::NodeRef;
use super::super::traits::{NodeRefVisitor, References};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rope {
    pub root_node: NodeRef,
    pub end_node: NodeRef,
    #[serde(default)]
    pub invisible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tie {
    pub root_node: NodeRef,
    pub max_reach_length: f32,
    #[serde(default)]
    pub auto_shorten_rate: f32,
    #[serde(default)]
    pub group: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hook {
    pub node: NodeRef,
    #[serde(default = "default_hook_range")]
    pub range: f32,
    #[serde(default)]
    pub group: Option<i32>,
}

fn default_hook_range() -> f32 {
    0.4
}

impl References for Rope {
    fn walk_refs(&mut self, visitor: &mut dyn NodeRefVisitor) {
        self.root_node.walk_refs(visitor);
        self.end_node.walk_refs(visitor);
    }
}

impl References for Tie {
    fn walk_refs(&mut self, visitor: &mut dyn NodeRefVisitor) {
        self.root_node.walk_refs(visitor);
    }
}

impl References for Hook {
    fn walk_refs(&mut self, visitor: &mut dyn NodeRefVisitor) {
        self.node.walk_refs(visitor);
    }
}
