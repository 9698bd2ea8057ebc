//! Configuration formats
//!
//! A `ConfigFormat` turns configuration text into the raw value the validator
//! consumes, and turns validated trees back into text:
//!
//! ```text
//! Source Text → [Format::decode] → raw Value → [validate] → NavigationTree
//! NavigationTree → [Format::encode] → Source Text
//! ```
//!
//! Formats never validate; decoding only checks syntax.

use std::path::Path;

use serde_json::Value;

use crate::error::{LoadError, Result};
use crate::formats::{JSON, YAML};
use crate::tree::{NavigationTree, Sidebars};
use crate::validate::validate;

/// A text format navigation configuration can be written in.
pub trait ConfigFormat: Send + Sync {
    /// Parse source text into a raw value.
    ///
    /// # Errors
    ///
    /// Returns a syntax error from the underlying parser.
    fn decode(&self, source: &str) -> Result<Value>;

    /// Render a raw value as source text.
    fn encode_value(&self, value: &Value) -> Result<String>;

    /// Return the name of this format.
    ///
    /// Examples: "JSON", "YAML"
    fn name(&self) -> &str;

    /// File extensions (without the dot) this format is detected from.
    fn file_extensions(&self) -> &[&str];

    /// Render a validated tree as source text.
    fn encode(&self, tree: &NavigationTree) -> Result<String> {
        self.encode_value(&serde_json::to_value(tree)?)
    }

    /// Render a sidebar set as source text.
    fn encode_sidebars(&self, sidebars: &Sidebars) -> Result<String> {
        self.encode_value(&serde_json::to_value(sidebars)?)
    }
}

/// All supported formats.
pub fn formats() -> [&'static dyn ConfigFormat; 2] {
    [&JSON as &dyn ConfigFormat, &YAML]
}

/// Look a format up by name or extension, case-insensitively.
pub fn format_by_name(name: &str) -> Option<&'static dyn ConfigFormat> {
    formats().into_iter().find(|format| {
        format.name().eq_ignore_ascii_case(name)
            || format
                .file_extensions()
                .iter()
                .any(|ext| ext.eq_ignore_ascii_case(name))
    })
}

/// Detect the format of a file from its extension.
///
/// # Errors
///
/// Returns `UnknownFormat` when the extension is missing or unsupported.
pub fn format_for_path(path: &Path) -> Result<&'static dyn ConfigFormat> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(format_by_name)
        .ok_or_else(|| LoadError::UnknownFormat(path.to_path_buf()))
}

/// Decode and validate a single tree from source text.
pub fn parse_tree(source: &str, format: &dyn ConfigFormat) -> Result<NavigationTree> {
    let raw = format.decode(source)?;
    Ok(validate(&raw)?)
}

/// Read a file and decode it into a raw value.
///
/// The format is detected from the extension unless one is given.
pub fn read_raw(path: &Path, format: Option<&dyn ConfigFormat>) -> Result<Value> {
    let format = match format {
        Some(format) => format,
        None => format_for_path(path)?,
    };
    tracing::debug!(path = %path.display(), format = format.name(), "reading navigation config");

    let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    format.decode(&source)
}

/// Pick one named sidebar out of a raw sidebar set.
///
/// # Errors
///
/// Returns `UnknownSidebar` when `raw` is not a mapping or has no such key.
pub fn select_sidebar<'a>(raw: &'a Value, name: &str) -> Result<&'a Value> {
    match raw {
        Value::Object(map) => map.get(name).ok_or_else(|| LoadError::UnknownSidebar {
            name: name.to_string(),
            available: map.keys().cloned().collect(),
        }),
        _ => Err(LoadError::UnknownSidebar {
            name: name.to_string(),
            available: Vec::new(),
        }),
    }
}

/// Read, decode and validate a sidebar set from a file.
pub fn load_file(path: &Path) -> Result<Sidebars> {
    let raw = read_raw(path, None)?;
    let sidebars = crate::validate::validate_sidebars(&raw)?;
    tracing::debug!(
        path = %path.display(),
        sidebars = sidebars.len(),
        "loaded navigation config"
    );
    Ok(sidebars)
}
