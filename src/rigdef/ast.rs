//! Rig definition document tree
//!
//! The tree is produced by an external parser and handed to the resolver,
//! which rewrites node references in place. Everything here is plain data
//! plus the [`References`] walking machinery.

pub mod elements;
pub mod keyword;
pub mod node_ref;
pub mod traits;

pub use elements::*;
pub use keyword::Keyword;
pub use node_ref::{NodeRange, NodeRef, Slot};
pub use traits::{walk_all, NodeRefVisitor, RefCollector, References};
