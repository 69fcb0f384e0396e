//! Two-node elements: `beams`, `shocks`, `hydros`, `commands`

use super::super::node_ref::NodeRef;
use super::super::traits::{NodeRefVisitor, References};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    pub nodes: [NodeRef; 2],
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub options: String,
}

impl Beam {
    pub fn new(a: impl Into<NodeRef>, b: impl Into<NodeRef>) -> Self {
        Self {
            nodes: [a.into(), b.into()],
            options: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shock {
    pub nodes: [NodeRef; 2],
    pub spring: f32,
    pub damping: f32,
    pub short_bound: f32,
    pub long_bound: f32,
    #[serde(default = "default_precompression")]
    pub precompression: f32,
}

fn default_precompression() -> f32 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hydro {
    pub nodes: [NodeRef; 2],
    pub lengthening_factor: f32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub options: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub nodes: [NodeRef; 2],
    pub shorten_rate: f32,
    pub lengthen_rate: f32,
    pub max_contraction: f32,
    pub max_extension: f32,
    pub contract_key: u32,
    pub extend_key: u32,
}

impl References for Beam {
    fn walk_refs(&mut self, visitor: &mut dyn NodeRefVisitor) {
        self.nodes.walk_refs(visitor);
    }
}

impl References for Shock {
    fn walk_refs(&mut self, visitor: &mut dyn NodeRefVisitor) {
        self.nodes.walk_refs(visitor);
    }
}

impl References for Hydro {
    fn walk_refs(&mut self, visitor: &mut dyn NodeRefVisitor) {
        self.nodes.walk_refs(visitor);
    }
}

impl References for Command {
    fn walk_refs(&mut self, visitor: &mut dyn NodeRefVisitor) {
        self.nodes.walk_refs(visitor);
    }
}
