//! Lookup of table formatters by name
//!
//! The CLI picks a dump format with `--format <name>`; every built-in
//! formatter is reachable here under the name it reports.

use crate::rigdef::resolver::ModuleTable;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("unknown table format '{0}'")]
    UnknownFormat(String),
    #[error("could not write table: {0}")]
    Write(#[from] fmt::Error),
    #[error("could not encode table as JSON: {0}")]
    Json(String),
}

/// Renders the finished module tables of one resolver run
pub trait TableFormatter: Send + Sync {
    fn name(&self) -> &str;

    fn render(&self, tables: &[ModuleTable]) -> Result<String, FormatError>;

    /// One-line summary shown by `list-formats`
    fn description(&self) -> &str {
        ""
    }
}

/// Formatters keyed by name, iterated in name order
pub struct FormatRegistry {
    formatters: BTreeMap<String, Box<dyn TableFormatter>>,
}

impl FormatRegistry {
    fn empty() -> Self {
        FormatRegistry {
            formatters: BTreeMap::new(),
        }
    }

    /// The `text` and `json` dumps
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.insert(super::TextFormatter);
        registry.insert(super::JsonFormatter);
        registry
    }

    /// Adds `formatter`, replacing any formatter of the same name
    pub fn insert<F: TableFormatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn TableFormatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn render(&self, tables: &[ModuleTable], name: &str) -> Result<String, FormatError> {
        self.get(name)
            .ok_or_else(|| FormatError::UnknownFormat(name.to_string()))?
            .render(tables)
    }

    /// `(name, description)` of every formatter
    pub fn formats(&self) -> impl Iterator<Item = (&str, &str)> {
        self.formatters
            .iter()
            .map(|(name, formatter)| (name.as_str(), formatter.description()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountFormatter;
    impl TableFormatter for CountFormatter {
        fn name(&self) -> &str {
            "count"
        }
        fn render(&self, tables: &[ModuleTable]) -> Result<String, FormatError> {
            Ok(format!("{} tables", tables.len()))
        }
    }

    #[test]
    fn test_insert_and_render() {
        let mut registry = FormatRegistry::empty();
        registry.insert(CountFormatter);

        assert_eq!(registry.render(&[], "count").unwrap(), "0 tables");
        assert_eq!(
            registry.render(&[], "nope"),
            Err(FormatError::UnknownFormat("nope".to_string()))
        );
        assert_eq!(registry.formats().collect::<Vec<_>>(), [("count", "")]);
    }

    #[test]
    fn test_builtin_formats_are_sorted() {
        let registry = FormatRegistry::builtin();
        let names: Vec<&str> = registry.formats().map(|(name, _)| name).collect();
        assert_eq!(names, ["json", "text"]);
        assert!(registry.formats().all(|(_, description)| !description.is_empty()));
    }
}
