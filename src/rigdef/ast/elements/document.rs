//! Document element
//!
//! A document is a list of modules. The first module is the root module
//! (`_Root_`); the others are optional parts of the rig that can be switched
//! on or off. Every module is its own node scope.

use super::super::keyword::Keyword;
use super::super::traits::{NodeRefVisitor, References};
use super::section::Section;
use serde::{Deserialize, Serialize};

pub const ROOT_MODULE_NAME: &str = "_Root_";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub name: String,
    pub modules: Vec<Module>,
}

impl Document {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            modules: Vec::new(),
        }
    }

    /// A document with only a root module
    pub fn with_root(name: &str, sections: Vec<Section>) -> Self {
        Self {
            name: name.to_string(),
            modules: vec![Module::root().with_sections(sections)],
        }
    }

    pub fn with_module(mut self, module: Module) -> Self {
        self.modules.push(module);
        self
    }

    pub fn root_module(&self) -> Option<&Module> {
        self.modules.iter().find(|m| m.name == ROOT_MODULE_NAME)
    }

    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.name == name)
    }
}

impl References for Document {
    fn walk_refs(&mut self, visitor: &mut dyn NodeRefVisitor) {
        self.modules.walk_refs(visitor);
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Module {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            sections: Vec::new(),
        }
    }

    pub fn root() -> Self {
        Self::new(ROOT_MODULE_NAME)
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections.extend(sections);
        self
    }

    /// Sections with the given keyword, in declared order
    pub fn sections_of(&self, keyword: Keyword) -> impl Iterator<Item = &Section> {
        self.sections
            .iter()
            .filter(move |section| section.keyword() == keyword)
    }
}

impl References for Module {
    fn walk_refs(&mut self, visitor: &mut dyn NodeRefVisitor) {
        self.sections.walk_refs(visitor);
    }
}
