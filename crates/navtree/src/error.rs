//! Error types for navigation tree loading and validation

use std::path::PathBuf;

use thiserror::Error;

use crate::path::NodePath;

/// A navigation tree failed validation.
///
/// Structural variants (`MalformedNode`, `EmptyLabel`, `InvalidItems`,
/// `EmptyDocumentId`) are returned for the first offending node in
/// depth-first, left-to-right order. `DuplicateDocumentId` is only produced
/// once the whole tree is structurally valid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A value that is neither a document id nor a category
    #[error("malformed node at {path}: {reason}")]
    MalformedNode {
        /// Location of the offending value
        path: NodePath,
        /// What was wrong with it
        reason: String,
    },

    /// A category whose label is missing or empty
    #[error("category at {path} has an empty label")]
    EmptyLabel {
        /// Location of the category
        path: NodePath,
    },

    /// A category whose `items` is missing or not a sequence
    #[error("category at {path} has invalid items: expected a list of nodes")]
    InvalidItems {
        /// Location of the category
        path: NodePath,
    },

    /// A document reference that is the empty string
    #[error("empty document id at {path}")]
    EmptyDocumentId {
        /// Location of the document reference
        path: NodePath,
    },

    /// The same document id listed more than once
    #[error("document id {document_id:?} is listed {} times: {}", .paths.len(), join_paths(.paths))]
    DuplicateDocumentId {
        /// The repeated id
        document_id: String,
        /// Every location it occurs at, in traversal order
        paths: Vec<NodePath>,
    },

    /// Several errors reported together
    ///
    /// Only produced by the duplicate check, when more than one id repeats.
    #[error("{}", join_errors(.0))]
    Multiple(Vec<ValidationError>),
}

impl ValidationError {
    /// Create a malformed-node error.
    pub fn malformed(path: NodePath, reason: impl Into<String>) -> Self {
        ValidationError::MalformedNode {
            path,
            reason: reason.into(),
        }
    }

    /// Iterate over the individual errors, flattening `Multiple`.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &ValidationError> + '_> {
        match self {
            ValidationError::Multiple(errors) => Box::new(errors.iter().flat_map(|e| e.iter())),
            other => Box::new(std::iter::once(other)),
        }
    }

    /// Location of the offending node.
    ///
    /// For duplicates this is the first occurrence; `Multiple` returns the
    /// path of its first error.
    pub fn path(&self) -> Option<&NodePath> {
        match self {
            ValidationError::MalformedNode { path, .. }
            | ValidationError::EmptyLabel { path }
            | ValidationError::InvalidItems { path }
            | ValidationError::EmptyDocumentId { path } => Some(path),
            ValidationError::DuplicateDocumentId { paths, .. } => paths.first(),
            ValidationError::Multiple(errors) => errors.first().and_then(|e| e.path()),
        }
    }

    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::MalformedNode { .. } => "malformed-node",
            ValidationError::EmptyLabel { .. } => "empty-label",
            ValidationError::InvalidItems { .. } => "invalid-items",
            ValidationError::EmptyDocumentId { .. } => "empty-document-id",
            ValidationError::DuplicateDocumentId { .. } => "duplicate-document-id",
            ValidationError::Multiple(_) => "multiple",
        }
    }
}

fn join_paths(paths: &[NodePath]) -> String {
    paths
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Errors from reading, decoding, or validating a configuration file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file extension does not name a supported format
    #[error("cannot detect configuration format of {}: expected .json, .yaml or .yml", .0.display())]
    UnknownFormat(PathBuf),

    /// Invalid JSON syntax
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid YAML syntax
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A named sidebar was requested but not declared
    #[error("no sidebar named {name:?}; available: {}", .available.join(", "))]
    UnknownSidebar {
        /// The requested name
        name: String,
        /// Names declared in the file
        available: Vec<String>,
    },

    /// Well-formed input that is not a valid navigation tree
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Result type alias for loading operations
pub type Result<T> = std::result::Result<T, LoadError>;

/// Human-readable name of a raw value's shape, for error reasons.
pub fn type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "list",
        serde_json::Value::Object(_) => "mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_name() {
        assert_eq!(type_name(&json!(null)), "null");
        assert_eq!(type_name(&json!(true)), "boolean");
        assert_eq!(type_name(&json!(1.5)), "number");
        assert_eq!(type_name(&json!("x")), "string");
        assert_eq!(type_name(&json!([])), "list");
        assert_eq!(type_name(&json!({})), "mapping");
    }

    #[test]
    fn test_duplicate_display_lists_paths() {
        let err = ValidationError::DuplicateDocumentId {
            document_id: "a".to_string(),
            paths: vec![NodePath::root().index(0), NodePath::root().index(1)],
        };
        assert_eq!(
            err.to_string(),
            "document id \"a\" is listed 2 times: root[0], root[1]"
        );
    }

    #[test]
    fn test_iter_flattens_multiple() {
        let a = ValidationError::EmptyLabel {
            path: NodePath::root().index(0),
        };
        let b = ValidationError::EmptyDocumentId {
            path: NodePath::root().index(1),
        };
        let err = ValidationError::Multiple(vec![a.clone(), b.clone()]);
        let flat: Vec<_> = err.iter().cloned().collect();
        assert_eq!(flat, vec![a, b]);
        assert_eq!(err.path().unwrap(), "root[0]");
    }

    #[test]
    fn test_kind_names() {
        let err = ValidationError::malformed(NodePath::root(), "expected a list");
        assert_eq!(err.kind(), "malformed-node");
        assert_eq!(err.to_string(), "malformed node at root: expected a list");
    }
}
