//! Node references
//!
//! A node can be addressed in three ways across the life of a document:
//! - `Number` and `Name` are the legacy forms, as written by the author.
//! - `Slot` is the canonical form, a position in the resolved node table.
//! - `Unresolved` is what a reference becomes when it could not be resolved.
//!
//! A slot is never a user-chosen number, even when the two values coincide.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position in the canonical node table (0-based, dense).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slot(pub u32);

impl Slot {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A reference to a node, in legacy or canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRef {
    Number(u32),
    Name(String),
    Slot(Slot),
    Unresolved,
}

impl NodeRef {
    pub fn number(number: u32) -> Self {
        NodeRef::Number(number)
    }

    pub fn name(name: impl Into<String>) -> Self {
        NodeRef::Name(name.into())
    }

    pub fn slot(index: u32) -> Self {
        NodeRef::Slot(Slot(index))
    }

    pub fn is_canonical(&self) -> bool {
        matches!(self, NodeRef::Slot(_))
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, NodeRef::Unresolved)
    }

    pub fn as_slot(&self) -> Option<Slot> {
        match self {
            NodeRef::Slot(slot) => Some(*slot),
            _ => None,
        }
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRef::Number(number) => write!(f, "{number}"),
            NodeRef::Name(name) => write!(f, "\"{name}\""),
            NodeRef::Slot(slot) => write!(f, "{slot}"),
            NodeRef::Unresolved => write!(f, "<unresolved>"),
        }
    }
}

impl From<u32> for NodeRef {
    fn from(number: u32) -> Self {
        NodeRef::Number(number)
    }
}

impl From<&str> for NodeRef {
    fn from(name: &str) -> Self {
        NodeRef::Name(name.to_string())
    }
}

/// Inclusive span of nodes, written as `start-end` in legacy documents.
///
/// A range does not own the slots between its endpoints. After canonical
/// reordering the slots between `start` and `end` may belong to nodes that
/// were not in the legacy span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRange {
    pub start: NodeRef,
    pub end: NodeRef,
}

impl NodeRange {
    pub fn new(start: impl Into<NodeRef>, end: impl Into<NodeRef>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn single(node: impl Into<NodeRef>) -> Self {
        let node = node.into();
        Self {
            start: node.clone(),
            end: node,
        }
    }

    pub fn is_canonical(&self) -> bool {
        self.start.is_canonical() && self.end.is_canonical()
    }
}

impl fmt::Display for NodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_forms() {
        assert_eq!(NodeRef::number(12).to_string(), "12");
        assert_eq!(NodeRef::name("hook").to_string(), "\"hook\"");
        assert_eq!(NodeRef::slot(3).to_string(), "#3");
        assert_eq!(NodeRef::Unresolved.to_string(), "<unresolved>");
        assert_eq!(NodeRange::new(1, 4).to_string(), "1-4");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&NodeRef::number(5)).unwrap();
        assert_eq!(json, r#"{"number":5}"#);
        let json = serde_json::to_string(&NodeRef::slot(2)).unwrap();
        assert_eq!(json, r#"{"slot":2}"#);
        let json = serde_json::to_string(&NodeRef::Unresolved).unwrap();
        assert_eq!(json, r#""unresolved""#);

        let back: NodeRef = serde_json::from_str(r#"{"name":"a"}"#).unwrap();
        assert_eq!(back, NodeRef::name("a"));
    }

    #[test]
    fn test_canonical_checks() {
        assert!(NodeRef::slot(0).is_canonical());
        assert!(!NodeRef::number(0).is_canonical());
        assert!(NodeRange::new(NodeRef::slot(0), NodeRef::slot(2)).is_canonical());
        assert!(!NodeRange::new(NodeRef::slot(0), 2).is_canonical());
    }
}
