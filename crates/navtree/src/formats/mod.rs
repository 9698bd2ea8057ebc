//! Built-in configuration formats
//!
//! This module contains implementations of the `ConfigFormat` trait
//! for the text formats sidebars are commonly written in.

pub mod json;
pub mod yaml;

pub use json::JsonFormat;
pub use yaml::YamlFormat;

/// The JSON format.
pub static JSON: JsonFormat = JsonFormat;

/// The YAML format.
pub static YAML: YamlFormat = YamlFormat;
