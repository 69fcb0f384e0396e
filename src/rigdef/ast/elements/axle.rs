//! Axle element
//!
//! Axles couple two wheels, each identified by its pair of axis nodes.
//! Axles never supported named nodes in the legacy format.

use super::super::node_ref::NodeRef;
use super::super::traits::{NodeRefVisitor, References};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axle {
    pub wheels: [[NodeRef; 2]; 2],
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub options: String,
}

impl References for Axle {
    fn walk_refs(&mut self, visitor: &mut dyn NodeRefVisitor) {
        self.wheels.walk_refs(visitor);
    }
}
