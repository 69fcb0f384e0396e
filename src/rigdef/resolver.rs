//! Node reference resolver
//!
//! Builds one canonical node table per module and rewrites every node
//! reference in the document to a slot in that table.
//!
//! # Passes
//!
//! For each module, in declared module order:
//!
//! 1. Build: visit node-producing sections in [`CANONICAL_SEQUENCE`] order
//!    and register their nodes. The resulting table does not depend on the
//!    order sections were written in.
//! 2. Rewrite: visit every section in declared order and replace each
//!    reference and range endpoint with its slot.
//!
//! # Example
//!
//! ```rust,ignore
//! use rigref::rigdef::resolver::{ResolverOptions, SequentialResolver};
//!
//! let mut resolver = SequentialResolver::new(ResolverOptions::enabled());
//! resolver.process(&mut document);
//! if resolver.error_count() > 0 {
//!     eprintln!("{}", resolver.format_messages());
//! }
//! ```

mod node_map;
pub mod node_table;
mod rewrite;
pub mod sequence;
mod sequential;

pub use node_table::{NodeTable, SlotSpan, TableEntry};
pub use sequence::{SectionKind, SubRole, CANONICAL_SEQUENCE};
pub use sequential::{
    ModuleTable, ResolutionStats, ResolverOptions, SequentialResolver, WheelNodes,
};
