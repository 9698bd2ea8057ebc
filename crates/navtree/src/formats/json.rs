//! JSON configuration format

use serde_json::Value;

use crate::error::Result;
use crate::format::ConfigFormat;

/// Sidebars written as JSON.
///
/// Encoding is pretty-printed with a trailing newline, keeping mapping keys in
/// their original order.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl ConfigFormat for JsonFormat {
    fn decode(&self, source: &str) -> Result<Value> {
        Ok(serde_json::from_str(source)?)
    }

    fn encode_value(&self, value: &Value) -> Result<String> {
        let mut out = serde_json::to_string_pretty(value)?;
        out.push('\n');
        Ok(out)
    }

    fn name(&self) -> &str {
        "JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }
}
