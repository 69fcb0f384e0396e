//! Cinecam element
//!
//! A cinecam generates one node (the camera point) and binds it to eight
//! existing nodes with springs.

use super::super::node_ref::NodeRef;
use super::super::traits::{NodeRefVisitor, References};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cinecam {
    #[serde(default)]
    pub position: [f32; 3],
    pub nodes: [NodeRef; 8],
    #[serde(default = "default_spring")]
    pub spring: f32,
    #[serde(default = "default_damping")]
    pub damping: f32,
}

fn default_spring() -> f32 {
    8000.0
}

fn default_damping() -> f32 {
    800.0
}

impl Cinecam {
    pub fn new(position: [f32; 3], nodes: [NodeRef; 8]) -> Self {
        Self {
            position,
            nodes,
            spring: default_spring(),
            damping: default_damping(),
        }
    }
}

impl References for Cinecam {
    fn walk_refs(&mut self, visitor: &mut dyn NodeRefVisitor) {
        self.nodes.walk_refs(visitor);
    }
}
