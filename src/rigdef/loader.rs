//! Document loading utilities
//!
//! The resolver does not parse rig definition files itself. Parsers hand the
//! document tree over as JSON or YAML, which this module reads and writes.
//!
//! # Example
//!
//! ```rust,ignore
//! use rigref::rigdef::loader::DocumentLoader;
//!
//! let mut doc = DocumentLoader::from_path("truck.json")?.load()?;
//! ```

use crate::rigdef::ast::Document;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Error that can occur when loading or writing documents
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Unknown document format '{0}' (expected json or yaml)")]
    UnknownFormat(String),
}

/// Serialization used for document trees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    pub fn from_name(name: &str) -> Result<Self, LoadError> {
        match name {
            "json" => Ok(DocumentFormat::Json),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            other => Err(LoadError::UnknownFormat(other.to_string())),
        }
    }

    /// Guess the format from a file extension; defaults to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }
}

/// Source text of a document tree together with its format
pub struct DocumentLoader {
    source: String,
    format: DocumentFormat,
}

impl DocumentLoader {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        Ok(Self {
            source,
            format: DocumentFormat::from_path(path),
        })
    }

    pub fn from_string(source: impl Into<String>, format: DocumentFormat) -> Self {
        Self {
            source: source.into(),
            format,
        }
    }

    pub fn load(&self) -> Result<Document, LoadError> {
        match self.format {
            DocumentFormat::Json => Ok(serde_json::from_str(&self.source)?),
            DocumentFormat::Yaml => Ok(serde_yaml::from_str(&self.source)?),
        }
    }
}

/// Serialize a document tree
pub fn write_document(document: &Document, format: DocumentFormat) -> Result<String, LoadError> {
    match format {
        DocumentFormat::Json => Ok(serde_json::to_string_pretty(document)?),
        DocumentFormat::Yaml => Ok(serde_yaml::to_string(document)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rigdef::ast::{NodeRef, Section};

    const YAML: &str = r#"
name: pickup
modules:
  - name: _Root_
    sections:
      - keyword: nodes
        entries:
          - id: !number 0
            position: [0.0, 0.0, 0.0]
          - id: !name hitch
      - keyword: beams
        entries:
          - nodes: [!number 0, !name hitch]
"#;

    #[test]
    fn test_load_yaml() {
        let doc = DocumentLoader::from_string(YAML, DocumentFormat::Yaml)
            .load()
            .unwrap();
        assert_eq!(doc.name, "pickup");
        let root = doc.root_module().unwrap();
        assert_eq!(root.sections.len(), 2);
        match &root.sections[1] {
            Section::Beams(beams) => {
                assert_eq!(beams[0].nodes, [NodeRef::number(0), NodeRef::name("hitch")])
            }
            other => panic!("expected beams, got {:?}", other.keyword()),
        }
    }

    #[test]
    fn test_json_round_trip_keeps_sections() {
        let doc = DocumentLoader::from_string(YAML, DocumentFormat::Yaml)
            .load()
            .unwrap();
        let json = write_document(&doc, DocumentFormat::Json).unwrap();
        let back = DocumentLoader::from_string(json, DocumentFormat::Json)
            .load()
            .unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_format_names() {
        assert_eq!(DocumentFormat::from_name("yml").unwrap(), DocumentFormat::Yaml);
        assert!(matches!(
            DocumentFormat::from_name("xml"),
            Err(LoadError::UnknownFormat(_))
        ));
        assert_eq!(
            DocumentFormat::from_path(Path::new("a/b.yaml")),
            DocumentFormat::Yaml
        );
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            DocumentLoader::from_path("/nonexistent/doc.json"),
            Err(LoadError::Io(_))
        ));
    }
}
