//! AST traits - uniform access to node references
//!
//! Every section entry that points at nodes implements [`References`], which
//! hands each embedded [`NodeRef`] and [`NodeRange`] to a [`NodeRefVisitor`].
//! Passes that need to read or rewrite references implement the visitor and
//! never have to know the layout of individual entries.
//!
//! Node definitions (the ids in `nodes`/`nodes2`) are not references and are
//! not visited.

use super::node_ref::{NodeRange, NodeRef};

/// Visitor over node references, with mutable access for in-place rewriting
///
/// The default `visit_node_range` visits both endpoints as plain references.
/// Override it to treat ranges as a unit.
pub trait NodeRefVisitor {
    fn visit_node_ref(&mut self, node: &mut NodeRef);

    fn visit_node_range(&mut self, range: &mut NodeRange) {
        self.visit_node_ref(&mut range.start);
        self.visit_node_ref(&mut range.end);
    }
}

/// Implemented by anything that embeds node references
pub trait References {
    fn walk_refs(&mut self, visitor: &mut dyn NodeRefVisitor);
}

impl References for NodeRef {
    fn walk_refs(&mut self, visitor: &mut dyn NodeRefVisitor) {
        visitor.visit_node_ref(self);
    }
}

impl References for NodeRange {
    fn walk_refs(&mut self, visitor: &mut dyn NodeRefVisitor) {
        visitor.visit_node_range(self);
    }
}

impl<T: References> References for Option<T> {
    fn walk_refs(&mut self, visitor: &mut dyn NodeRefVisitor) {
        if let Some(inner) = self {
            inner.walk_refs(visitor);
        }
    }
}

impl<T: References, const N: usize> References for [T; N] {
    fn walk_refs(&mut self, visitor: &mut dyn NodeRefVisitor) {
        walk_all(visitor, self);
    }
}

impl<T: References> References for Vec<T> {
    fn walk_refs(&mut self, visitor: &mut dyn NodeRefVisitor) {
        walk_all(visitor, self);
    }
}

/// Helper function to visit every item in a slice
pub fn walk_all<T: References>(visitor: &mut dyn NodeRefVisitor, items: &mut [T]) {
    for item in items {
        item.walk_refs(visitor);
    }
}

/// Collects clones of every reference it visits, ranges flattened to endpoints
#[derive(Debug, Default)]
pub struct RefCollector {
    pub refs: Vec<NodeRef>,
}

impl NodeRefVisitor for RefCollector {
    fn visit_node_ref(&mut self, node: &mut NodeRef) {
        self.refs.push(node.clone());
    }
}
