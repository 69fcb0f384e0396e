//! Reference rewriting
//!
//! `process` runs two passes per module: the build pass (see `node_map.rs`)
//! and the rewrite pass here, which visits every section in declared order
//! and replaces each node reference and node range with canonical slots.
//!
//! Resolution never fails. A reference that cannot be resolved becomes
//! [`NodeRef::Unresolved`] and an error is recorded; consumers must check
//! for it.

use super::node_map::ModuleLayout;
use super::node_table::SlotSpan;
use super::sequence::SectionKind;
use super::sequential::SequentialResolver;
use crate::rigdef::ast::{
    Document, Module, NodeRange, NodeRef, NodeRefVisitor, References, Section, Slot,
};
use crate::rigdef::diagnostics::Severity;

impl SequentialResolver {
    /// Resolve every node reference in the document, module by module
    pub fn process(&mut self, document: &mut Document) {
        if !self.is_enabled() {
            tracing::debug!(document = %document.name, "resolver disabled, references left as-is");
            return;
        }
        for module in &mut document.modules {
            self.process_module(module);
        }
        tracing::debug!(
            document = %document.name,
            modules = document.modules.len(),
            resolved = self.stats.total_resolved,
            resolved_to_self = self.stats.resolved_to_self,
            errors = self.error_count(),
            warnings = self.warning_count(),
            "document processed"
        );
    }

    fn process_module(&mut self, module: &mut Module) {
        self.begin_module(&module.name);

        let layout = self.build_node_map(module);
        self.log_node_statistics();
        self.iterate_and_log_all_nodes();

        let self_refs_before = self.stats.resolved_to_self;
        self.rewrite_module(module, &layout);

        let self_refs = self.stats.resolved_to_self - self_refs_before;
        if self_refs > 0 {
            self.add_message(
                Severity::Info,
                format!("{self_refs} reference(s) resolved to nodes generated by the referencing entry"),
            );
        }
        self.finish_module();
    }

    fn rewrite_module(&mut self, module: &mut Module, layout: &ModuleLayout) {
        for (section, spans) in module.sections.iter_mut().zip(&layout.entry_spans) {
            self.current_keyword = Some(section.keyword());
            match section {
                Section::Nodes(nodes) | Section::Nodes2(nodes) => {
                    for (node, span) in nodes.iter_mut().zip(spans) {
                        node.id = match span {
                            Some(span) => NodeRef::Slot(span.start),
                            None => NodeRef::Unresolved,
                        };
                    }
                }
                Section::Cinecam(entries) => self.rewrite_generating(entries, spans),
                Section::Wheels(entries) => self.rewrite_generating(entries, spans),
                Section::Wheels2(entries) => self.rewrite_generating(entries, spans),
                Section::MeshWheels(entries) | Section::MeshWheels2(entries) => {
                    self.rewrite_generating(entries, spans)
                }
                Section::FlexBodyWheels(entries) => self.rewrite_generating(entries, spans),
                other => other.walk_refs(&mut Rewriter { resolver: self }),
            }
        }
        self.current_keyword = None;
    }

    /// Rewrite entries that generate nodes, tracking which slots each one
    /// generated so references back into them are counted as self-references
    fn rewrite_generating<T: References>(
        &mut self,
        entries: &mut [T],
        spans: &[Option<SlotSpan>],
    ) {
        for (entry, span) in entries.iter_mut().zip(spans) {
            self.defining = *span;
            entry.walk_refs(&mut Rewriter { resolver: self });
        }
        self.defining = None;
    }

    /// Resolve one reference to canonical form.
    ///
    /// Slots are returned unchanged, with a warning if they lie outside the
    /// table. Names are looked up in the name index, numbers in the number
    /// index (then, optionally, by legacy position).
    pub fn resolve_reference(&mut self, node: &NodeRef) -> NodeRef {
        if !self.is_enabled() {
            return node.clone();
        }
        let slot = match node {
            NodeRef::Slot(slot) => {
                if slot.index() >= self.table.len() {
                    let len = self.table.len();
                    self.add_message(
                        Severity::Warning,
                        format!("slot {slot} is outside the node table ({len} nodes)"),
                    );
                }
                return node.clone();
            }
            NodeRef::Unresolved => {
                self.add_message(
                    Severity::Warning,
                    "attempt to resolve an invalid node reference",
                );
                return NodeRef::Unresolved;
            }
            NodeRef::Name(name) => match self.table.slot_for_name(name) {
                Some(slot) => slot,
                None => {
                    self.add_message(
                        Severity::Error,
                        format!("named node not found: \"{name}\""),
                    );
                    return NodeRef::Unresolved;
                }
            },
            NodeRef::Number(number) => match self.table.slot_for_number(*number) {
                Some(slot) => slot,
                None => match self.resolve_legacy_position(*number) {
                    Some(slot) => slot,
                    None => {
                        self.add_message(
                            Severity::Error,
                            format!("node number {number} is not defined"),
                        );
                        return NodeRef::Unresolved;
                    }
                },
            },
        };

        self.stats.total_resolved += 1;
        if self.defining.is_some_and(|span| span.contains(slot)) {
            self.stats.resolved_to_self += 1;
            self.add_message(
                Severity::Info,
                format!("reference {node} resolves to {slot}, a node generated by this entry"),
            );
        }
        NodeRef::Slot(slot)
    }

    /// Legacy documents could address generated nodes by their array position
    fn resolve_legacy_position(&mut self, number: u32) -> Option<Slot> {
        if !self.options.legacy_positional_numbers {
            return None;
        }
        let slot = self.table.legacy_slot(number)?;
        let entry = self.table.get(slot)?;
        if entry.user_id.is_some() {
            return None;
        }
        let origin = entry.origin;
        self.stats.resolved_by_legacy_position += 1;
        self.add_message(
            Severity::Warning,
            format!("node number {number} addresses a '{origin}' node by legacy position, resolved to {slot}"),
        );
        Some(slot)
    }

    /// Slot of the `index`-th node of `kind`, counted in canonical order
    pub fn resolve_by_position(&mut self, kind: SectionKind, index: u32) -> NodeRef {
        if !self.is_enabled() {
            return NodeRef::Unresolved;
        }
        let count = self.table.group_count(kind);
        if index >= count {
            self.add_message_for(
                kind,
                Severity::Error,
                format!("'{kind}' has no node at position {index} ({count} registered)"),
            );
            return NodeRef::Unresolved;
        }
        NodeRef::Slot(Slot(self.section_base_offset(kind) + index))
    }

    /// First slot of `kind` in the current module's table
    pub fn section_base_offset(&self, kind: SectionKind) -> u32 {
        self.table.base_offset(kind)
    }

    /// Resolve both endpoints of a range independently.
    ///
    /// The resolved range is not repaired: after canonical reordering the
    /// slots between the endpoints may not be the nodes the legacy range
    /// covered. Suspicious spans are reported as warnings.
    pub fn resolve_range(&mut self, range: &NodeRange) -> NodeRange {
        if !self.is_enabled() {
            return range.clone();
        }
        let was_canonical = range.is_canonical();
        let resolved = NodeRange {
            start: self.resolve_reference(&range.start),
            end: self.resolve_reference(&range.end),
        };

        match (resolved.start.as_slot(), resolved.end.as_slot()) {
            (Some(start), Some(end)) => {
                if !was_canonical {
                    self.check_range_span(range, start, end);
                }
            }
            _ => self.add_message(
                Severity::Error,
                format!("node range {range} could not be fully resolved"),
            ),
        }
        resolved
    }

    fn check_range_span(&mut self, range: &NodeRange, start: Slot, end: Slot) {
        if start > end {
            self.add_message(
                Severity::Warning,
                format!("node range {range} resolved to {start}-{end}, which is reversed"),
            );
            return;
        }
        // Only slots inside the table have an origin
        let last = end.index().min(self.table.len().saturating_sub(1));
        let entries = self
            .table
            .entries()
            .get(start.index()..=last)
            .unwrap_or_default();
        if let Some(first) = entries.first() {
            if entries.iter().any(|entry| !entry.origin.same_group(first.origin)) {
                self.add_message(
                    Severity::Warning,
                    format!("node range {range} resolved to {start}-{end}, which spans nodes of several sections"),
                );
            }
        }
    }
}

/// Visitor adapter that rewrites references through the resolver
struct Rewriter<'a> {
    resolver: &'a mut SequentialResolver,
}

impl NodeRefVisitor for Rewriter<'_> {
    fn visit_node_ref(&mut self, node: &mut NodeRef) {
        *node = self.resolver.resolve_reference(node);
    }

    fn visit_node_range(&mut self, range: &mut NodeRange) {
        *range = self.resolver.resolve_range(range);
    }
}
