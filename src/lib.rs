//! # rigref
//!
//! Canonical node-reference resolution for rig definition documents.
//!
//! Legacy rig definitions address nodes by user-chosen number, by name, or
//! implicitly by the position of nodes that cinecam and wheel sections
//! generate. [`rigdef::resolver::SequentialResolver`] builds one
//! order-independent node table per module and rewrites every reference in
//! the document to a slot in that table, collecting diagnostics instead of
//! failing.
//!
//! The document tree itself ([`rigdef::ast`]) comes from an external parser,
//! usually as JSON or YAML ([`rigdef::loader`]).

pub mod rigdef;
