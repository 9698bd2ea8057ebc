//! YAML configuration format

use serde_json::Value;

use crate::error::Result;
use crate::format::ConfigFormat;

/// Sidebars written as YAML.
///
/// Documents are decoded into the same raw value model as JSON, so mapping
/// keys must be strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFormat;

impl ConfigFormat for YamlFormat {
    fn decode(&self, source: &str) -> Result<Value> {
        Ok(serde_yaml::from_str(source)?)
    }

    fn encode_value(&self, value: &Value) -> Result<String> {
        Ok(serde_yaml::to_string(value)?)
    }

    fn name(&self) -> &str {
        "YAML"
    }

    fn file_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_nested() {
        let source = r#"
- index
- label: Guides
  items:
    - setup
    - usage
"#;
        let value = YamlFormat.decode(source).unwrap();
        assert_eq!(
            value,
            json!(["index", {"label": "Guides", "items": ["setup", "usage"]}])
        );
    }

    #[test]
    fn test_decode_syntax_error() {
        assert!(YamlFormat.decode("- [unclosed").is_err());
    }
}
