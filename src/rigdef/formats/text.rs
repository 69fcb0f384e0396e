//! Plain text table dump, one line per slot
//!
//! ```text
//! module _Root_ (5 nodes)
//!   #0    nodes           1
//!   #1    nodes-named     "hook"
//!   #2    cinecam
//!   #3    wheels          tyre-a  ray 0
//! ```

use super::registry::{FormatError, TableFormatter};
use crate::rigdef::resolver::ModuleTable;
use std::fmt::Write as _;

pub struct TextFormatter;

impl TableFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn render(&self, tables: &[ModuleTable]) -> Result<String, FormatError> {
        let mut out = String::new();
        for module in tables {
            writeln!(out, "module {} ({} nodes)", module.module_name, module.table.len())?;
            for (slot, entry) in module.table.iter() {
                let id = entry
                    .user_id
                    .as_ref()
                    .map(|id| format!(" {id}"))
                    .unwrap_or_default();
                let role = entry
                    .role
                    .map(|role| format!(" {:<7} ray {}", role.as_str(), entry.sub_index))
                    .unwrap_or_default();
                let line = format!("  {:<5} {:<15}{id}{role}", slot.to_string(), entry.origin.as_str());
                writeln!(out, "{}", line.trim_end())?;
            }
        }
        Ok(out)
    }

    fn description(&self) -> &str {
        "One line per slot: slot, origin, user id, sub-role and ray"
    }
}
