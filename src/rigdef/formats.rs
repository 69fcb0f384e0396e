//! Serialization formats for canonical node tables

pub mod json;
pub mod registry;
pub mod text;

pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, TableFormatter};
pub use text::TextFormatter;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rigdef::resolver::{SectionKind, SequentialResolver};

    fn sample_tables() -> Vec<crate::rigdef::resolver::ModuleTable> {
        let mut resolver = SequentialResolver::default();
        resolver.register_numbered_node(1);
        resolver.register_named_node("hook");
        resolver.register_generated_node(SectionKind::Cinecam, None);
        resolver.register_wheel_nodes(SectionKind::Wheels, 1, false);
        vec![crate::rigdef::resolver::ModuleTable {
            module_name: "_Root_".to_string(),
            table: resolver.table().clone(),
        }]
    }

    #[test]
    fn test_text_dump() {
        let out = TextFormatter.render(&sample_tables()).unwrap();
        insta::assert_snapshot!(out, @r#"
        module _Root_ (5 nodes)
          #0    nodes           1
          #1    nodes-named     "hook"
          #2    cinecam
          #3    wheels          tyre-a  ray 0
          #4    wheels          tyre-b  ray 0
        "#);
    }

    #[test]
    fn test_json_dump() {
        let out = JsonFormatter.render(&sample_tables()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value[0]["module"], "_Root_");
        assert_eq!(value[0]["nodes"][0]["origin"], "numberednodes");
        assert_eq!(value[0]["nodes"][0]["user_id"]["number"], 1);
        assert_eq!(value[0]["nodes"][3]["role"], "tyre-a");
        assert!(value[0]["nodes"][2].get("user_id").is_none());
    }
}
