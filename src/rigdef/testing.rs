//! Testing utilities
//!
//! Builders for rig definition documents, shared by unit and integration
//! tests. [`sample_truck`] is a small but complete document whose sections
//! are deliberately written out of canonical order.

use crate::rigdef::ast::{
    Axle, Beam, Camera, Cinecam, Document, Flexbody, Hook, Module, Node, NodeRange, NodeRef,
    RefCollector, References, Section, SlideNode, Wheel,
};

/// `nodes` section with numeric ids `numbers`
pub fn numbered_nodes(numbers: impl IntoIterator<Item = u32>) -> Section {
    Section::Nodes(numbers.into_iter().map(Node::numbered).collect())
}

/// `nodes2` section with the given names
pub fn named_nodes(names: &[&str]) -> Section {
    Section::Nodes2(names.iter().map(|name| Node::named(name)).collect())
}

/// `beams` section, one beam per pair
pub fn beams<A, B>(pairs: impl IntoIterator<Item = (A, B)>) -> Section
where
    A: Into<NodeRef>,
    B: Into<NodeRef>,
{
    Section::Beams(pairs.into_iter().map(|(a, b)| Beam::new(a, b)).collect())
}

pub fn cinecam(anchors: [u32; 8]) -> Cinecam {
    Cinecam::new([0.0, 1.5, 0.0], anchors.map(NodeRef::Number))
}

pub fn wheel(num_rays: u32, axis: (u32, u32), arm: u32) -> Wheel {
    Wheel::new(
        num_rays,
        [NodeRef::Number(axis.0), NodeRef::Number(axis.1)],
        NodeRef::Number(arm),
    )
}

/// Every reference in the document, in walk order
pub fn collect_refs(document: &Document) -> Vec<NodeRef> {
    let mut copy = document.clone();
    let mut collector = RefCollector::default();
    copy.walk_refs(&mut collector);
    collector.refs
}

/// Node ids of every `nodes`/`nodes2` entry, in declared order
pub fn node_ids(module: &Module) -> Vec<NodeRef> {
    module
        .sections
        .iter()
        .filter_map(Section::as_nodes)
        .flatten()
        .map(|node| node.id.clone())
        .collect()
}

/// A small truck: 10 numbered nodes, two named nodes, a cinecam and two
/// wheels. Wheels and cinecam are written before the nodes they generate
/// after, and named nodes come last.
pub fn sample_truck() -> Document {
    let root = Module::root()
        .with_section(Section::Wheels(vec![
            wheel(4, (0, 1), 2),
            wheel(4, (3, 4), 5).with_rigidity_node(6),
        ]))
        .with_section(numbered_nodes(0..10))
        .with_section(beams([(0u32, 1u32), (1, 2), (2, 3), (8, 9)]))
        .with_section(beams([(NodeRef::name("hitch"), NodeRef::number(9))]))
        .with_section(Section::Cinecam(vec![cinecam([0, 1, 2, 3, 4, 5, 6, 7])]))
        .with_section(Section::Hooks(vec![Hook {
            node: NodeRef::name("hitch"),
            range: 0.4,
            group: None,
        }]))
        .with_section(Section::Axles(vec![Axle {
            wheels: [
                [NodeRef::number(0), NodeRef::number(1)],
                [NodeRef::number(3), NodeRef::number(4)],
            ],
            options: String::new(),
        }]))
        .with_section(Section::Cameras(vec![Camera {
            center_node: NodeRef::number(0),
            back_node: NodeRef::number(1),
            left_node: NodeRef::number(2),
        }]))
        .with_section(Section::Flexbodies(vec![Flexbody {
            reference_node: NodeRef::number(0),
            x_axis_node: NodeRef::number(1),
            y_axis_node: NodeRef::number(2),
            offset: [0.0; 3],
            mesh_name: "body.mesh".to_string(),
            node_list: vec![NodeRange::new(0, 9), NodeRange::single("spare")],
        }]))
        .with_section(Section::SlideNodes(vec![SlideNode {
            slide_node: NodeRef::name("spare"),
            rail_nodes: vec![NodeRange::new(4, 7)],
            railgroup_id: None,
        }]))
        .with_section(named_nodes(&["hitch", "spare"]));

    Document::with_root("sample-truck", root.sections)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_truck_shape() {
        let doc = sample_truck();
        let root = doc.root_module().unwrap();
        assert_eq!(node_ids(root).len(), 12);
        assert!(!collect_refs(&doc).is_empty());
        assert!(collect_refs(&doc).iter().all(|r| !r.is_canonical()));
    }
}
