//! Canonical node table
//!
//! An append-only array of [`TableEntry`], indexed by [`Slot`], with two
//! secondary indexes: numeric ids and names. Slots are never reused or
//! reordered once handed out.
//!
//! The table also keeps per-kind counts so that the first slot of any kind
//! ([`NodeTable::base_offset`]) is a closed-form sum rather than a scan. That
//! only holds while entries are appended in canonical sequence order.

use super::sequence::{SectionKind, SubRole};
use crate::rigdef::ast::{NodeRef, Slot};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableEntry {
    pub origin: SectionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<SubRole>,
    /// The id as written by the author; `None` for generated nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<NodeRef>,
    /// Ray index for wheel nodes, 0 otherwise
    pub sub_index: u32,
}

/// Contiguous run of slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotSpan {
    pub start: Slot,
    pub len: u32,
}

impl SlotSpan {
    pub fn new(start: Slot, len: u32) -> Self {
        Self { start, len }
    }

    pub fn contains(&self, slot: Slot) -> bool {
        slot.0 >= self.start.0 && slot.0 - self.start.0 < self.len
    }

    pub fn slots(&self) -> impl Iterator<Item = Slot> {
        (self.start.0..self.start.0 + self.len).map(Slot)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeTable {
    entries: Vec<TableEntry>,
    numbers: HashMap<u32, Slot>,
    names: HashMap<String, Slot>,
    counts: [u32; SectionKind::COUNT],
    legacy_order: Vec<Slot>,
}

impl NodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, slot: Slot) -> Option<&TableEntry> {
        self.entries.get(slot.index())
    }

    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (Slot, &TableEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (Slot(index as u32), entry))
    }

    /// Append a node with a numeric id.
    ///
    /// Returns the slot already holding `number` if it was registered before;
    /// the table is left unchanged in that case.
    pub fn push_numbered(&mut self, number: u32) -> Result<Slot, Slot> {
        if let Some(existing) = self.numbers.get(&number) {
            return Err(*existing);
        }
        let slot = self.push(TableEntry {
            origin: SectionKind::NumberedNodes,
            role: None,
            user_id: Some(NodeRef::Number(number)),
            sub_index: 0,
        });
        self.numbers.insert(number, slot);
        Ok(slot)
    }

    /// Append a node with a symbolic id. Same contract as [`Self::push_numbered`].
    pub fn push_named(&mut self, name: &str) -> Result<Slot, Slot> {
        if let Some(existing) = self.names.get(name) {
            return Err(*existing);
        }
        let slot = self.push(TableEntry {
            origin: SectionKind::NamedNodes,
            role: None,
            user_id: Some(NodeRef::name(name)),
            sub_index: 0,
        });
        self.names.insert(name.to_string(), slot);
        Ok(slot)
    }

    /// Append a node that has no user id
    pub fn push_generated(
        &mut self,
        origin: SectionKind,
        role: Option<SubRole>,
        sub_index: u32,
    ) -> Slot {
        self.push(TableEntry {
            origin,
            role,
            user_id: None,
            sub_index,
        })
    }

    /// Append an entry as-is, without touching the id indexes
    pub fn push(&mut self, entry: TableEntry) -> Slot {
        let slot = Slot(self.entries.len() as u32);
        self.counts[entry.origin.index()] += 1;
        self.entries.push(entry);
        slot
    }

    pub fn slot_for_number(&self, number: u32) -> Option<Slot> {
        self.numbers.get(&number).copied()
    }

    pub fn slot_for_name(&self, name: &str) -> Option<Slot> {
        self.names.get(name).copied()
    }

    /// Number of entries of exactly this kind
    pub fn count(&self, kind: SectionKind) -> u32 {
        self.counts[kind.index()]
    }

    /// Number of entries in the canonical group of `kind` (numbered and named
    /// nodes share a group)
    pub fn group_count(&self, kind: SectionKind) -> u32 {
        SectionKind::ALL
            .iter()
            .filter(|other| other.same_group(kind))
            .map(|other| self.count(*other))
            .sum()
    }

    /// First slot of `kind`: the entry count of every canonically earlier group
    pub fn base_offset(&self, kind: SectionKind) -> u32 {
        SectionKind::ALL
            .iter()
            .filter(|other| other.rank() < kind.rank())
            .map(|other| self.count(*other))
            .sum()
    }

    /// Highest canonical group that has entries
    pub fn highest_rank(&self) -> Option<usize> {
        SectionKind::ALL
            .iter()
            .filter(|kind| self.count(**kind) > 0)
            .map(|kind| kind.rank())
            .max()
    }

    /// Slots arranged in legacy (declared) order, if recorded
    pub fn legacy_order(&self) -> &[Slot] {
        &self.legacy_order
    }

    pub fn set_legacy_order(&mut self, order: Vec<Slot>) {
        self.legacy_order = order;
    }

    /// Slot that held legacy array position `position`
    pub fn legacy_slot(&self, position: u32) -> Option<Slot> {
        self.legacy_order.get(position as usize).copied()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_are_dense_and_stable() {
        let mut table = NodeTable::new();
        assert_eq!(table.push_numbered(10), Ok(Slot(0)));
        assert_eq!(table.push_named("a"), Ok(Slot(1)));
        assert_eq!(
            table.push_generated(SectionKind::Cinecam, None, 0),
            Slot(2)
        );
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(Slot(1)).unwrap().user_id, Some(NodeRef::name("a")));
        assert!(table.get(Slot(3)).is_none());
    }

    #[test]
    fn test_duplicates_are_rejected() {
        let mut table = NodeTable::new();
        table.push_numbered(1).unwrap();
        table.push_named("x").unwrap();

        assert_eq!(table.push_numbered(1), Err(Slot(0)));
        assert_eq!(table.push_named("x"), Err(Slot(1)));
        assert_eq!(table.len(), 2);
        assert_eq!(table.slot_for_number(1), Some(Slot(0)));
        assert_eq!(table.slot_for_name("x"), Some(Slot(1)));
    }

    #[test]
    fn test_base_offsets() {
        let mut table = NodeTable::new();
        table.push_numbered(0).unwrap();
        table.push_numbered(1).unwrap();
        table.push_named("n").unwrap();
        table.push_generated(SectionKind::Cinecam, None, 0);
        table.push_generated(SectionKind::Wheels, Some(SubRole::TyreA), 0);

        assert_eq!(table.base_offset(SectionKind::NumberedNodes), 0);
        assert_eq!(table.base_offset(SectionKind::NamedNodes), 0);
        assert_eq!(table.base_offset(SectionKind::Cinecam), 3);
        assert_eq!(table.base_offset(SectionKind::Wheels), 4);
        assert_eq!(table.base_offset(SectionKind::FlexBodyWheels), 5);
        assert_eq!(table.group_count(SectionKind::NamedNodes), 3);
        assert_eq!(table.highest_rank(), Some(2));
    }

    #[test]
    fn test_span_contains() {
        let span = SlotSpan::new(Slot(4), 3);
        assert!(!span.contains(Slot(3)));
        assert!(span.contains(Slot(4)));
        assert!(span.contains(Slot(6)));
        assert!(!span.contains(Slot(7)));
        assert_eq!(span.slots().collect::<Vec<_>>(), vec![Slot(4), Slot(5), Slot(6)]);
        assert!(!SlotSpan::new(Slot(0), 0).contains(Slot(0)));
    }
}
