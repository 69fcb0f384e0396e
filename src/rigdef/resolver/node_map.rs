//! Node map builder
//!
//! Registration operations that append to the node table, and the build pass
//! that calls them for one module in canonical sequence order.
//!
//! Wheel node layout, per wheel:
//! - 2 nodes per ray (`wheels`, `meshwheels`, `meshwheels2`): for each ray,
//!   tyre-a then tyre-b.
//! - 4 nodes per ray (`wheels2`, `flexbodywheels`): the rim ring first (for
//!   each ray, rim-a then rim-b), then the tyre ring (for each ray, tyre-a
//!   then tyre-b).
//!
//! `sub_index` is the ray index in both layouts.

use super::node_table::{SlotSpan, TableEntry};
use super::sequence::{SectionKind, SubRole, CANONICAL_SEQUENCE};
use super::sequential::{SequentialResolver, WheelNodes};
use crate::rigdef::ast::{Keyword, Module, NodeRef, Section, Slot, WheelDef};
use crate::rigdef::diagnostics::Severity;

/// Slots produced by each entry of each section of a module
///
/// Indexed like `module.sections`; consumer sections get an empty list.
/// `None` marks a node definition that was rejected.
#[derive(Debug, Clone, Default)]
pub(super) struct ModuleLayout {
    pub entry_spans: Vec<Vec<Option<SlotSpan>>>,
}

impl SequentialResolver {
    /// Append a node with a numeric id. Fails on a duplicate number; the first
    /// registration stands.
    pub fn register_numbered_node(&mut self, number: u32) -> bool {
        self.is_enabled() && self.add_numbered_node(number).is_some()
    }

    /// Append a node with a symbolic id. Fails on a duplicate name; the first
    /// registration stands.
    pub fn register_named_node(&mut self, name: &str) -> bool {
        self.is_enabled() && self.add_named_node(name).is_some()
    }

    /// Append one node generated by a section, without a user id
    pub fn register_generated_node(
        &mut self,
        kind: SectionKind,
        role: Option<SubRole>,
    ) -> Option<Slot> {
        if !self.is_enabled() {
            return None;
        }
        self.check_sequence(kind);
        Some(self.table.push_generated(kind, role, 0))
    }

    /// Append the generated nodes of one wheel: `num_rays` times the nodes per
    /// ray of `kind`
    pub fn register_wheel_nodes(
        &mut self,
        kind: SectionKind,
        num_rays: u32,
        has_rigidity_node: bool,
    ) -> Option<WheelNodes> {
        if !self.is_enabled() {
            return None;
        }
        let Some(per_ray) = kind.nodes_per_ray() else {
            self.add_message_for(
                kind,
                Severity::Error,
                format!("'{kind}' does not generate wheel nodes"),
            );
            return None;
        };
        self.check_sequence(kind);

        let start = Slot(self.table.len() as u32);
        if per_ray == 4 {
            for ray in 0..num_rays {
                self.table.push_generated(kind, Some(SubRole::RimA), ray);
                self.table.push_generated(kind, Some(SubRole::RimB), ray);
            }
        }
        for ray in 0..num_rays {
            self.table.push_generated(kind, Some(SubRole::TyreA), ray);
            self.table.push_generated(kind, Some(SubRole::TyreB), ray);
        }
        if has_rigidity_node {
            self.stats.wheels_with_rigidity_node += 1;
        }

        Some(WheelNodes {
            span: SlotSpan::new(start, num_rays * per_ray),
            has_rigidity_node,
        })
    }

    fn add_numbered_node(&mut self, number: u32) -> Option<Slot> {
        self.check_sequence(SectionKind::NumberedNodes);
        match self.table.push_numbered(number) {
            Ok(slot) => Some(slot),
            Err(existing) => {
                self.add_message_for(
                    SectionKind::NumberedNodes,
                    Severity::Error,
                    format!("duplicate node number {number} (first defined as {existing}), ignoring the duplicate"),
                );
                None
            }
        }
    }

    fn add_named_node(&mut self, name: &str) -> Option<Slot> {
        self.check_sequence(SectionKind::NamedNodes);
        match self.table.push_named(name) {
            Ok(slot) => Some(slot),
            Err(existing) => {
                self.add_message_for(
                    SectionKind::NamedNodes,
                    Severity::Error,
                    format!("duplicate node name \"{name}\" (first defined as {existing}), ignoring the duplicate"),
                );
                None
            }
        }
    }

    /// Warn when `kind` is appended after a canonically later kind, which
    /// breaks closed-form base offsets
    fn check_sequence(&mut self, kind: SectionKind) {
        if let Some(highest) = self.table.highest_rank() {
            if kind.rank() < highest {
                self.add_message_for(
                    kind,
                    Severity::Warning,
                    format!("'{kind}' node registered out of canonical sequence"),
                );
            }
        }
    }

    /// Build pass: fill the node table from the module's node-producing
    /// sections, visited in canonical sequence order
    pub(super) fn build_node_map(&mut self, module: &Module) -> ModuleLayout {
        let mut entry_spans: Vec<Vec<Option<SlotSpan>>> = vec![Vec::new(); module.sections.len()];

        for keyword in CANONICAL_SEQUENCE {
            for (index, section) in module
                .sections
                .iter()
                .enumerate()
                .filter(|(_, section)| section.keyword() == keyword)
            {
                self.current_keyword = Some(keyword);
                match section {
                    Section::Nodes(nodes) | Section::Nodes2(nodes) => {
                        entry_spans[index] = nodes
                            .iter()
                            .map(|node| {
                                self.add_node_definition(&node.id)
                                    .map(|slot| SlotSpan::new(slot, 1))
                            })
                            .collect();
                    }
                    Section::Cinecam(cinecams) => {
                        for _ in cinecams {
                            self.register_generated_node(SectionKind::Cinecam, None);
                        }
                    }
                    Section::Wheels(wheels) => self.build_wheels(SectionKind::Wheels, wheels),
                    Section::Wheels2(wheels) => self.build_wheels(SectionKind::Wheels2, wheels),
                    Section::MeshWheels(wheels) => {
                        self.build_wheels(SectionKind::MeshWheels, wheels)
                    }
                    Section::MeshWheels2(wheels) => {
                        self.build_wheels(SectionKind::MeshWheels2, wheels)
                    }
                    Section::FlexBodyWheels(wheels) => {
                        self.build_wheels(SectionKind::FlexBodyWheels, wheels)
                    }
                    _ => {}
                }
            }
        }
        self.current_keyword = None;

        let layout = ModuleLayout {
            entry_spans: self.layout_generated(module, entry_spans),
        };
        self.table.set_legacy_order(module_legacy_order(&layout));
        layout
    }

    fn build_wheels<W: WheelDef>(&mut self, kind: SectionKind, wheels: &[W]) {
        for wheel in wheels {
            self.register_wheel_nodes(kind, wheel.num_rays(), wheel.has_rigidity_node());
        }
    }

    fn add_node_definition(&mut self, id: &NodeRef) -> Option<Slot> {
        match id {
            NodeRef::Number(number) => self.add_numbered_node(*number),
            NodeRef::Name(name) => self.add_named_node(name),
            NodeRef::Slot(slot) => {
                // Already-canonical document: keep the node, check it landed in
                // place. The id no longer tells a number from a name, so the
                // origin follows the section: `nodes2` held the named nodes.
                let origin = match self.current_keyword {
                    Some(Keyword::Nodes2) => SectionKind::NamedNodes,
                    _ => SectionKind::NumberedNodes,
                };
                let assigned = self.table.push(TableEntry {
                    origin,
                    role: None,
                    user_id: Some(id.clone()),
                    sub_index: 0,
                });
                if assigned != *slot {
                    self.add_message(
                        Severity::Warning,
                        format!("canonical node id {slot} was assigned slot {assigned}"),
                    );
                }
                Some(assigned)
            }
            NodeRef::Unresolved => {
                self.add_message(Severity::Error, "node definition without a valid id");
                None
            }
        }
    }

    /// Fill in the slots of generated nodes, located in closed form from
    /// each kind's base offset. Node definition spans are kept as built.
    fn layout_generated(
        &self,
        module: &Module,
        mut entry_spans: Vec<Vec<Option<SlotSpan>>>,
    ) -> Vec<Vec<Option<SlotSpan>>> {
        let table = &self.table;
        let mut cursors = [0u32; SectionKind::COUNT];
        let mut next_span = |kind: SectionKind, len: u32| {
            let cursor = &mut cursors[kind.index()];
            let span = SlotSpan::new(Slot(table.base_offset(kind) + *cursor), len);
            *cursor += len;
            Some(span)
        };

        for (section, spans) in module.sections.iter().zip(entry_spans.iter_mut()) {
            match section {
                Section::Cinecam(cinecams) => {
                    *spans = cinecams
                        .iter()
                        .map(|_| next_span(SectionKind::Cinecam, 1))
                        .collect()
                }
                Section::Wheels(wheels) => {
                    *spans = wheel_spans(SectionKind::Wheels, wheels, &mut next_span)
                }
                Section::Wheels2(wheels) => {
                    *spans = wheel_spans(SectionKind::Wheels2, wheels, &mut next_span)
                }
                Section::MeshWheels(wheels) => {
                    *spans = wheel_spans(SectionKind::MeshWheels, wheels, &mut next_span)
                }
                Section::MeshWheels2(wheels) => {
                    *spans = wheel_spans(SectionKind::MeshWheels2, wheels, &mut next_span)
                }
                Section::FlexBodyWheels(wheels) => {
                    *spans = wheel_spans(SectionKind::FlexBodyWheels, wheels, &mut next_span)
                }
                _ => {}
            }
        }
        entry_spans
    }
}

fn wheel_spans<W: WheelDef>(
    kind: SectionKind,
    wheels: &[W],
    next_span: &mut impl FnMut(SectionKind, u32) -> Option<SlotSpan>,
) -> Vec<Option<SlotSpan>> {
    let per_ray = kind.nodes_per_ray().unwrap_or(0);
    wheels
        .iter()
        .map(|wheel| next_span(kind, wheel.num_rays() * per_ray))
        .collect()
}

/// Slots in the order the legacy importer would have allocated them:
/// sections in declared order, entries in declared order
fn module_legacy_order(layout: &ModuleLayout) -> Vec<Slot> {
    layout
        .entry_spans
        .iter()
        .flatten()
        .flatten()
        .flat_map(|span| span.slots())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rigdef::ast::{Cinecam, Module};
    use crate::rigdef::resolver::ResolverOptions;
    use crate::rigdef::testing::{named_nodes, numbered_nodes, sample_truck, wheel};

    #[test]
    fn test_register_numbered_rejects_duplicate() {
        let mut resolver = SequentialResolver::default();
        assert!(resolver.register_numbered_node(7));
        assert!(!resolver.register_numbered_node(7));

        assert_eq!(resolver.error_count(), 1);
        assert_eq!(resolver.table().len(), 1);
        assert_eq!(resolver.table().slot_for_number(7), Some(Slot(0)));
    }

    #[test]
    fn test_register_named_rejects_duplicate() {
        let mut resolver = SequentialResolver::default();
        assert!(resolver.register_named_node("front"));
        assert!(resolver.register_named_node("rear"));
        assert!(!resolver.register_named_node("front"));

        assert_eq!(resolver.error_count(), 1);
        assert_eq!(resolver.table().slot_for_name("front"), Some(Slot(0)));
    }

    #[test]
    fn test_register_generated_node() {
        let mut resolver = SequentialResolver::default();
        resolver.register_numbered_node(0);
        let slot = resolver.register_generated_node(SectionKind::Cinecam, None);

        assert_eq!(slot, Some(Slot(1)));
        let entry = resolver.table().get(Slot(1)).unwrap();
        assert_eq!(entry.origin, SectionKind::Cinecam);
        assert_eq!(entry.user_id, None);
    }

    #[test]
    fn test_wheels_two_nodes_per_ray() {
        let mut resolver = SequentialResolver::default();
        let nodes = resolver
            .register_wheel_nodes(SectionKind::Wheels, 4, false)
            .unwrap();

        assert_eq!(nodes.span, SlotSpan::new(Slot(0), 8));
        let entries = resolver.table().entries();
        assert_eq!(entries.len(), 8);
        for (i, entry) in entries.iter().enumerate() {
            assert_eq!(entry.sub_index, (i / 2) as u32);
            let expected = if i % 2 == 0 { SubRole::TyreA } else { SubRole::TyreB };
            assert_eq!(entry.role, Some(expected));
        }
    }

    #[test]
    fn test_wheels2_rim_ring_then_tyre_ring() {
        let mut resolver = SequentialResolver::default();
        resolver.register_wheel_nodes(SectionKind::Wheels2, 3, true);

        let roles: Vec<_> = resolver
            .table()
            .entries()
            .iter()
            .map(|e| (e.role.unwrap(), e.sub_index))
            .collect();
        assert_eq!(
            roles,
            vec![
                (SubRole::RimA, 0),
                (SubRole::RimB, 0),
                (SubRole::RimA, 1),
                (SubRole::RimB, 1),
                (SubRole::RimA, 2),
                (SubRole::RimB, 2),
                (SubRole::TyreA, 0),
                (SubRole::TyreB, 0),
                (SubRole::TyreA, 1),
                (SubRole::TyreB, 1),
                (SubRole::TyreA, 2),
                (SubRole::TyreB, 2),
            ]
        );
        assert_eq!(resolver.stats().wheels_with_rigidity_node, 1);
    }

    #[test]
    fn test_wheel_nodes_for_non_wheel_kind() {
        let mut resolver = SequentialResolver::default();
        assert!(resolver
            .register_wheel_nodes(SectionKind::Cinecam, 4, false)
            .is_none());
        assert_eq!(resolver.error_count(), 1);
        assert!(resolver.table().is_empty());
    }

    #[test]
    fn test_out_of_sequence_registration_warns() {
        let mut resolver = SequentialResolver::default();
        resolver.register_generated_node(SectionKind::Cinecam, None);
        resolver.register_numbered_node(1);

        assert_eq!(resolver.warning_count(), 1);
        assert_eq!(resolver.error_count(), 0);
    }

    #[test]
    fn test_disabled_builder_is_noop() {
        let mut resolver = SequentialResolver::new(ResolverOptions::disabled());
        assert!(!resolver.register_numbered_node(1));
        assert!(!resolver.register_named_node("a"));
        assert!(resolver
            .register_generated_node(SectionKind::Cinecam, None)
            .is_none());
        assert!(resolver
            .register_wheel_nodes(SectionKind::Wheels, 2, false)
            .is_none());
        assert!(resolver.table().is_empty());
        assert!(resolver.diagnostics().is_empty());
    }

    #[test]
    fn test_build_visits_nodes_before_nodes2() {
        let module = Module::root()
            .with_section(named_nodes(&["a", "b"]))
            .with_section(Section::Wheels(vec![wheel(2, (0, 1), 2)]))
            .with_section(numbered_nodes(0..3));
        let mut resolver = SequentialResolver::default();
        let layout = resolver.build_node_map(&module);

        assert_eq!(resolver.table().slot_for_number(0), Some(Slot(0)));
        assert_eq!(resolver.table().slot_for_name("a"), Some(Slot(3)));
        assert_eq!(
            layout.entry_spans[0],
            vec![Some(SlotSpan::new(Slot(3), 1)), Some(SlotSpan::new(Slot(4), 1))]
        );
        assert_eq!(layout.entry_spans[1], vec![Some(SlotSpan::new(Slot(5), 4))]);
        assert_eq!(layout.entry_spans[2][2], Some(SlotSpan::new(Slot(2), 1)));
        assert_eq!(resolver.warning_count(), 0);
    }

    #[test]
    fn test_legacy_order_follows_document() {
        let module = Module::root()
            .with_section(Section::Wheels(vec![wheel(1, (0, 1), 0)]))
            .with_section(numbered_nodes(0..2))
            .with_section(Section::Cinecam(vec![Cinecam::new(
                [0.0; 3],
                std::array::from_fn(|_| NodeRef::number(0)),
            )]));
        let mut resolver = SequentialResolver::default();
        resolver.build_node_map(&module);

        // Canonical: nodes 0-1, cinecam 2, wheel 3-4
        assert_eq!(
            resolver.table().legacy_order(),
            &[Slot(3), Slot(4), Slot(0), Slot(1), Slot(2)]
        );
        assert_eq!(resolver.table().legacy_slot(0), Some(Slot(3)));
    }

    #[test]
    fn test_canonical_ids_keep_their_origin() {
        let mut doc = sample_truck();
        let mut first = SequentialResolver::default();
        first.process(&mut doc);
        let origins = |resolver: &SequentialResolver| -> Vec<SectionKind> {
            resolver.table().entries().iter().map(|entry| entry.origin).collect()
        };

        let mut second = SequentialResolver::default();
        second.process(&mut doc);

        assert_eq!(origins(&second), origins(&first));
        assert_eq!(second.table().entries()[10].origin, SectionKind::NamedNodes);
        assert_eq!(
            second.table().count(SectionKind::NamedNodes),
            first.table().count(SectionKind::NamedNodes)
        );
        assert_eq!(second.warning_count(), 0);
    }
}
