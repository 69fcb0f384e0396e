//! Wheel elements (`wheels`, `wheels2`, `meshwheels`, `meshwheels2`, `flexbodywheels`)
//!
//! Every wheel generates a ring of nodes around the axis given by its two
//! axis nodes. How many nodes per ray depends on the keyword and is decided
//! by the resolver; the entries here only carry what the author wrote.

use super::super::node_ref::NodeRef;
use super::super::traits::{NodeRefVisitor, References};
use serde::{Deserialize, Serialize};

/// Common interface of all wheel-like entries
pub trait WheelDef {
    fn num_rays(&self) -> u32;
    fn axis_nodes(&self) -> &[NodeRef; 2];
    fn rigidity_node(&self) -> Option<&NodeRef>;

    fn has_rigidity_node(&self) -> bool {
        self.rigidity_node().is_some()
    }
}

/// `wheels` entry: simple wheel, tyre nodes only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wheel {
    pub radius: f32,
    pub width: f32,
    pub num_rays: u32,
    pub nodes: [NodeRef; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rigidity_node: Option<NodeRef>,
    pub reference_arm_node: NodeRef,
    #[serde(default)]
    pub mass: f32,
}

/// `wheels2` entry: separate rim and tyre rings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wheel2 {
    pub rim_radius: f32,
    pub tyre_radius: f32,
    pub width: f32,
    pub num_rays: u32,
    pub nodes: [NodeRef; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rigidity_node: Option<NodeRef>,
    pub reference_arm_node: NodeRef,
    #[serde(default)]
    pub mass: f32,
}

/// `meshwheels` and `meshwheels2` entry: tyre ring skinned with a mesh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshWheel {
    pub tyre_radius: f32,
    pub rim_radius: f32,
    pub width: f32,
    pub num_rays: u32,
    pub nodes: [NodeRef; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rigidity_node: Option<NodeRef>,
    pub reference_arm_node: NodeRef,
    #[serde(default)]
    pub mass: f32,
    #[serde(default)]
    pub mesh_name: String,
    #[serde(default)]
    pub material_name: String,
}

/// `flexbodywheels` entry: rim and tyre rings, both driven by flexbodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlexBodyWheel {
    pub rim_radius: f32,
    pub tyre_radius: f32,
    pub width: f32,
    pub num_rays: u32,
    pub nodes: [NodeRef; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rigidity_node: Option<NodeRef>,
    pub reference_arm_node: NodeRef,
    #[serde(default)]
    pub mass: f32,
    #[serde(default)]
    pub rim_mesh_name: String,
    #[serde(default)]
    pub tyre_mesh_name: String,
}

macro_rules! impl_wheel_def {
    ($($ty:ty),*) => {$(
        impl WheelDef for $ty {
            fn num_rays(&self) -> u32 {
                self.num_rays
            }

            fn axis_nodes(&self) -> &[NodeRef; 2] {
                &self.nodes
            }

            fn rigidity_node(&self) -> Option<&NodeRef> {
                self.rigidity_node.as_ref()
            }
        }

        impl References for $ty {
            fn walk_refs(&mut self, visitor: &mut dyn NodeRefVisitor) {
                self.nodes.walk_refs(visitor);
                self.rigidity_node.walk_refs(visitor);
                self.reference_arm_node.walk_refs(visitor);
            }
        }
    )*};
}

impl_wheel_def!(Wheel, Wheel2, MeshWheel, FlexBodyWheel);

impl Wheel {
    pub fn new(num_rays: u32, nodes: [NodeRef; 2], reference_arm_node: NodeRef) -> Self {
        Self {
            radius: 0.5,
            width: 0.3,
            num_rays,
            nodes,
            rigidity_node: None,
            reference_arm_node,
            mass: 100.0,
        }
    }

    pub fn with_rigidity_node(mut self, node: impl Into<NodeRef>) -> Self {
        self.rigidity_node = Some(node.into());
        self
    }
}

impl Wheel2 {
    pub fn new(num_rays: u32, nodes: [NodeRef; 2], reference_arm_node: NodeRef) -> Self {
        Self {
            rim_radius: 0.3,
            tyre_radius: 0.5,
            width: 0.3,
            num_rays,
            nodes,
            rigidity_node: None,
            reference_arm_node,
            mass: 100.0,
        }
    }
}

impl MeshWheel {
    pub fn new(num_rays: u32, nodes: [NodeRef; 2], reference_arm_node: NodeRef) -> Self {
        Self {
            tyre_radius: 0.5,
            rim_radius: 0.3,
            width: 0.3,
            num_rays,
            nodes,
            rigidity_node: None,
            reference_arm_node,
            mass: 100.0,
            mesh_name: String::new(),
            material_name: String::new(),
        }
    }
}

impl FlexBodyWheel {
    pub fn new(num_rays: u32, nodes: [NodeRef; 2], reference_arm_node: NodeRef) -> Self {
        Self {
            rim_radius: 0.3,
            tyre_radius: 0.5,
            width: 0.3,
            num_rays,
            nodes,
            rigidity_node: None,
            reference_arm_node,
            mass: 100.0,
            rim_mesh_name: String::new(),
            tyre_mesh_name: String::new(),
        }
    }
}
