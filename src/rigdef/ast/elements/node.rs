//! Node definitions (`nodes`, `nodes2`)
//!
//! A node is declared with an id and a position. In `nodes` the id is
//! normally a number; `nodes2` introduced symbolic names. Either section may
//! carry either form, the id alone decides how the node is indexed.

use super::super::node_ref::NodeRef;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeRef,
    #[serde(default)]
    pub position: [f32; 3],
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub options: String,
}

impl Node {
    pub fn new(id: impl Into<NodeRef>, position: [f32; 3]) -> Self {
        Self {
            id: id.into(),
            position,
            options: String::new(),
        }
    }

    pub fn numbered(number: u32) -> Self {
        Self::new(NodeRef::Number(number), [0.0; 3])
    }

    pub fn named(name: &str) -> Self {
        Self::new(NodeRef::name(name), [0.0; 3])
    }

    pub fn with_options(mut self, options: &str) -> Self {
        self.options = options.to_string();
        self
    }
}
