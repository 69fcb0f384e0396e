//! Sequential resolver state and lifecycle
//!
//! [`SequentialResolver`] owns everything scoped to one import run: the node
//! table of the module being processed, the finished tables of earlier
//! modules, the diagnostics and the statistics. The building and rewriting
//! operations live in `node_map.rs` and `rewrite.rs`.
//!
//! The enabled flag is part of [`ResolverOptions`] and belongs to the
//! instance, so resolvers for different documents never share state.

use super::node_table::{NodeTable, SlotSpan};
use super::sequence::SectionKind;
use crate::rigdef::ast::{Keyword, ROOT_MODULE_NAME};
use crate::rigdef::diagnostics::{Diagnostics, Message, Severity};
use serde::Serialize;

/// Mode the resolver runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverOptions {
    /// When false, every operation is a no-op and references pass through
    pub enabled: bool,
    /// Resolve numbers that match no node id by their legacy array position,
    /// if that position held a generated node. Off unless asked for: an
    /// undefined number is otherwise an error.
    pub legacy_positional_numbers: bool,
}

impl ResolverOptions {
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            legacy_positional_numbers: false,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::enabled()
        }
    }

    pub fn with_legacy_positional_numbers(mut self, allow: bool) -> Self {
        self.legacy_positional_numbers = allow;
        self
    }
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self::enabled()
    }
}

/// Running counters of a resolution run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionStats {
    pub total_resolved: usize,
    pub resolved_to_self: usize,
    pub resolved_by_legacy_position: usize,
    pub wheels_with_rigidity_node: usize,
}

/// The node table of one processed module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleTable {
    pub module_name: String,
    pub table: NodeTable,
}

/// Generated nodes of one wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelNodes {
    pub span: SlotSpan,
    /// Not a slot of its own; the rigidity node is a separately declared node
    pub has_rigidity_node: bool,
}

#[derive(Debug)]
pub struct SequentialResolver {
    pub(super) options: ResolverOptions,
    pub(super) table: NodeTable,
    pub(super) finished: Vec<ModuleTable>,
    pub(super) diagnostics: Diagnostics,
    pub(super) stats: ResolutionStats,
    pub(super) current_module: String,
    pub(super) current_keyword: Option<Keyword>,
    /// Slots generated by the entry whose references are being rewritten
    pub(super) defining: Option<SlotSpan>,
}

impl SequentialResolver {
    pub fn new(options: ResolverOptions) -> Self {
        Self {
            options,
            table: NodeTable::new(),
            finished: Vec::new(),
            diagnostics: Diagnostics::new(),
            stats: ResolutionStats::default(),
            current_module: ROOT_MODULE_NAME.to_string(),
            current_keyword: None,
            defining: None,
        }
    }

    /// Reset all run state and set the enabled flag
    pub fn init(&mut self, enabled: bool) {
        let options = ResolverOptions {
            enabled,
            ..self.options
        };
        *self = Self::new(options);
    }

    /// Switch to pass-through mode and drop the node tables
    pub fn disable(&mut self) {
        self.options.enabled = false;
        self.table.clear();
        self.finished.clear();
        self.defining = None;
    }

    pub fn is_enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    /// Start a fresh node scope. `process` calls this for every module; direct
    /// users of the builder operations may call it to tag diagnostics.
    pub fn begin_module(&mut self, name: &str) {
        self.table.clear();
        self.current_module = name.to_string();
        self.current_keyword = None;
        self.defining = None;
    }

    pub(super) fn finish_module(&mut self) {
        self.finished.push(ModuleTable {
            module_name: self.current_module.clone(),
            table: self.table.clone(),
        });
        self.current_keyword = None;
        self.defining = None;
    }

    /// Table of the module being (or last) processed
    pub fn table(&self) -> &NodeTable {
        &self.table
    }

    /// Tables of every module processed so far, in processing order
    pub fn tables(&self) -> &[ModuleTable] {
        &self.finished
    }

    pub fn stats(&self) -> ResolutionStats {
        self.stats
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn messages(&self) -> &[Message] {
        self.diagnostics.messages()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.error_count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.warning_count()
    }

    pub fn other_count(&self) -> usize {
        self.diagnostics.other_count()
    }

    pub fn format_messages(&self) -> String {
        self.diagnostics.format_report()
    }

    pub(super) fn add_message(&mut self, severity: Severity, text: impl Into<String>) {
        self.diagnostics
            .emit(severity, self.current_keyword, &self.current_module, text);
    }

    /// Like `add_message`, but falls back to the keyword of `kind` when no
    /// section is being processed (direct builder calls)
    pub(super) fn add_message_for(
        &mut self,
        kind: SectionKind,
        severity: Severity,
        text: impl Into<String>,
    ) {
        let keyword = self.current_keyword.or(Some(kind.keyword()));
        self.diagnostics
            .emit(severity, keyword, &self.current_module, text);
    }

    /// Per-kind slot counts of the current table, at debug level
    pub fn log_node_statistics(&self) {
        let t = &self.table;
        tracing::debug!(
            module = %self.current_module,
            total = t.len(),
            numbered = t.count(SectionKind::NumberedNodes),
            named = t.count(SectionKind::NamedNodes),
            cinecam = t.count(SectionKind::Cinecam),
            wheels = t.count(SectionKind::Wheels),
            wheels2 = t.count(SectionKind::Wheels2),
            meshwheels = t.count(SectionKind::MeshWheels),
            meshwheels2 = t.count(SectionKind::MeshWheels2),
            flexbodywheels = t.count(SectionKind::FlexBodyWheels),
            "node table built"
        );
    }

    /// Every entry of the current table, at trace level
    pub fn iterate_and_log_all_nodes(&self) {
        for (slot, entry) in self.table.iter() {
            tracing::trace!(
                module = %self.current_module,
                slot = slot.0,
                origin = %entry.origin,
                role = entry.role.map(|r| r.as_str()).unwrap_or("-"),
                user_id = ?entry.user_id,
                sub_index = entry.sub_index,
                "node"
            );
        }
    }
}

impl Default for SequentialResolver {
    fn default() -> Self {
        Self::new(ResolverOptions::default())
    }
}
