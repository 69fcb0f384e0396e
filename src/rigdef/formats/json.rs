//! JSON table dump

use super::registry::{FormatError, TableFormatter};
use crate::rigdef::resolver::{ModuleTable, TableEntry};
use serde::Serialize;

pub struct JsonFormatter;

#[derive(Serialize)]
struct ModuleView<'a> {
    module: &'a str,
    nodes: &'a [TableEntry],
}

impl TableFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn render(&self, tables: &[ModuleTable]) -> Result<String, FormatError> {
        let view: Vec<ModuleView> = tables
            .iter()
            .map(|module| ModuleView {
                module: &module.module_name,
                nodes: module.table.entries(),
            })
            .collect();
        serde_json::to_string_pretty(&view)
            .map_err(|e| FormatError::Json(e.to_string()))
    }

    fn description(&self) -> &str {
        "Module tables as a JSON array, entries indexed by slot"
    }
}
