//! Raw configuration to typed tree
//!
//! A raw value is classified node by node:
//!
//! - a string is a leaf referencing that document id
//! - a mapping whose `type` is `"category"`, or which has no `type` but does
//!   have `label` or `items`, is a category
//! - anything else is malformed
//!
//! Structural errors stop the walk at the first offending node in depth-first,
//! left-to-right order. Duplicate document ids are checked once the whole tree
//! has been built, and every duplicate is reported together.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::context::ValidateOptions;
use crate::error::{type_name, ValidationError};
use crate::path::NodePath;
use crate::tree::{Category, NavigationNode, NavigationTree, Sidebars};

/// Value of the `type` key that marks a category mapping.
pub const CATEGORY_TYPE: &str = "category";

const KNOWN_FIELDS: [&str; 3] = ["type", "label", "items"];

/// A non-fatal finding in an otherwise valid tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Warning {
    /// A category with no items
    EmptyCategory {
        /// Location of the category
        path: NodePath,
        /// Its label
        label: String,
    },

    /// The first node nested beyond the configured display depth
    DepthExceeded {
        /// Location of the node
        path: NodePath,
        /// Its depth
        depth: usize,
        /// The configured limit
        limit: usize,
    },

    /// A category key that carries no meaning
    UnknownField {
        /// Location of the category
        path: NodePath,
        /// The ignored key
        field: String,
    },
}

impl Warning {
    /// Location the warning refers to.
    pub fn path(&self) -> &NodePath {
        match self {
            Warning::EmptyCategory { path, .. }
            | Warning::DepthExceeded { path, .. }
            | Warning::UnknownField { path, .. } => path,
        }
    }

    /// Short machine-readable name of the warning kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Warning::EmptyCategory { .. } => "empty-category",
            Warning::DepthExceeded { .. } => "depth-exceeded",
            Warning::UnknownField { .. } => "unknown-field",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::EmptyCategory { path, label } => {
                write!(f, "category {:?} at {} has no items", label, path)
            }
            Warning::DepthExceeded { path, depth, limit } => write!(
                f,
                "node at {} is nested {} levels deep (limit {})",
                path, depth, limit
            ),
            Warning::UnknownField { path, field } => {
                write!(f, "category at {} has unknown field {:?}", path, field)
            }
        }
    }
}

/// A validated tree and the warnings found while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// The validated tree
    pub tree: NavigationTree,

    /// Warnings in traversal order
    pub warnings: Vec<Warning>,
}

impl Report {
    /// Whether any warning was reported.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Validates raw navigation configuration.
///
/// # Example
///
/// ```
/// use navtree::{ValidateOptions, Validator};
/// use serde_json::json;
///
/// let validator = Validator::new(ValidateOptions::default());
/// let report = validator
///     .validate(&json!(["index", {"label": "Empty", "items": []}]))
///     .unwrap();
///
/// assert_eq!(report.tree.len(), 2);
/// assert_eq!(report.warnings.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    options: ValidateOptions,
}

impl Validator {
    /// Create a validator with the given options.
    pub fn new(options: ValidateOptions) -> Self {
        Self { options }
    }

    /// The options this validator was created with.
    pub fn options(&self) -> &ValidateOptions {
        &self.options
    }

    /// Validate a single tree rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns the first structural error, or the duplicate-id error(s) if the
    /// tree is structurally valid.
    pub fn validate(&self, raw: &Value) -> Result<Report, ValidationError> {
        self.validate_at(raw, NodePath::root())
    }

    /// Validate a single tree, naming its root in paths.
    pub fn validate_at(&self, raw: &Value, root: NodePath) -> Result<Report, ValidationError> {
        let mut walker = Walker::new(&self.options);
        let tree = walker.tree(raw, &root)?;
        check_duplicates(&tree, root)?;
        Ok(Report {
            tree,
            warnings: walker.warnings,
        })
    }

    /// Validate a sidebar set.
    ///
    /// A list is a single sidebar named `root`; a mapping names each sidebar.
    /// Sidebars are validated in declaration order and the first failure is
    /// returned. Duplicate ids are checked per sidebar.
    pub fn validate_sidebars(
        &self,
        raw: &Value,
    ) -> Result<IndexMap<String, Report>, ValidationError> {
        let mut reports = IndexMap::new();
        match raw {
            Value::Array(_) => {
                let root = NodePath::root();
                let name = root.root_name().to_string();
                reports.insert(name, self.validate_at(raw, root)?);
            }
            Value::Object(map) => {
                for (name, tree) in map {
                    if name.is_empty() {
                        return Err(ValidationError::malformed(
                            NodePath::root(),
                            "sidebar names must not be empty",
                        ));
                    }
                    let report = self.validate_at(tree, NodePath::named(name.as_str()))?;
                    reports.insert(name.clone(), report);
                }
            }
            other => {
                return Err(ValidationError::malformed(
                    NodePath::root(),
                    format!(
                        "expected a list of nodes or a mapping of sidebar names, got {}",
                        type_name(other)
                    ),
                ))
            }
        }
        Ok(reports)
    }
}

/// Validate raw configuration into a navigation tree.
///
/// Pure: no I/O and no logging. Warnings are not collected; use
/// [`Validator`] to get them.
///
/// # Example
///
/// ```
/// use navtree::{validate, NavigationNode};
/// use serde_json::json;
///
/// let tree = validate(&json!(["index", {"label": "Guides", "items": ["setup"]}])).unwrap();
/// assert_eq!(tree.items()[0], NavigationNode::leaf("index"));
/// ```
pub fn validate(raw: &Value) -> Result<NavigationTree, ValidationError> {
    Validator::new(ValidateOptions::quiet())
        .validate(raw)
        .map(|report| report.tree)
}

/// Validate a sidebar set into named navigation trees.
pub fn validate_sidebars(raw: &Value) -> Result<Sidebars, ValidationError> {
    let reports = Validator::new(ValidateOptions::quiet()).validate_sidebars(raw)?;
    Ok(reports
        .into_iter()
        .map(|(name, report)| (name, report.tree))
        .collect())
}

// ═══════════════════════════════════════════════════════════════════════
// Structural walk
// ═══════════════════════════════════════════════════════════════════════

struct Walker<'o> {
    options: &'o ValidateOptions,
    warnings: Vec<Warning>,
}

impl<'o> Walker<'o> {
    fn new(options: &'o ValidateOptions) -> Self {
        Self {
            options,
            warnings: Vec::new(),
        }
    }

    fn tree(&mut self, raw: &Value, root: &NodePath) -> Result<NavigationTree, ValidationError> {
        let Value::Array(items) = raw else {
            return Err(ValidationError::malformed(
                root.clone(),
                format!("expected a list of nodes, got {}", type_name(raw)),
            ));
        };
        Ok(NavigationTree::new(self.items(items, root)?))
    }

    fn items(
        &mut self,
        items: &[Value],
        parent: &NodePath,
    ) -> Result<Vec<NavigationNode>, ValidationError> {
        items
            .iter()
            .enumerate()
            .map(|(i, item)| self.node(item, parent.index(i)))
            .collect()
    }

    fn node(&mut self, raw: &Value, path: NodePath) -> Result<NavigationNode, ValidationError> {
        self.check_depth(&path);

        match raw {
            Value::String(id) if id.is_empty() => Err(ValidationError::EmptyDocumentId { path }),
            Value::String(id) => Ok(NavigationNode::Leaf(id.clone())),
            Value::Object(map) => self.category(map, path).map(NavigationNode::Category),
            other => Err(ValidationError::malformed(
                path,
                format!(
                    "expected a document id or a category, got {}",
                    type_name(other)
                ),
            )),
        }
    }

    fn category(
        &mut self,
        map: &Map<String, Value>,
        path: NodePath,
    ) -> Result<Category, ValidationError> {
        match map.get("type") {
            Some(Value::String(kind)) if kind == CATEGORY_TYPE => {}
            Some(Value::String(kind)) => {
                return Err(ValidationError::malformed(
                    path,
                    format!("unsupported node type {:?}", kind),
                ))
            }
            Some(other) => {
                return Err(ValidationError::malformed(
                    path,
                    format!("node type must be a string, got {}", type_name(other)),
                ))
            }
            None if map.contains_key("label") || map.contains_key("items") => {}
            None => {
                return Err(ValidationError::malformed(
                    path,
                    "mapping is not a category: expected `label` and `items`",
                ))
            }
        }

        let label = match map.get("label") {
            None | Some(Value::Null) => return Err(ValidationError::EmptyLabel { path }),
            Some(Value::String(label)) if label.is_empty() => {
                return Err(ValidationError::EmptyLabel { path })
            }
            Some(Value::String(label)) => label.clone(),
            Some(other) => {
                return Err(ValidationError::malformed(
                    path,
                    format!("category label must be a string, got {}", type_name(other)),
                ))
            }
        };

        let Some(Value::Array(raw_items)) = map.get("items") else {
            return Err(ValidationError::InvalidItems { path });
        };

        if self.options.warn_unknown_fields {
            for field in map.keys().filter(|k| !KNOWN_FIELDS.contains(&k.as_str())) {
                self.warnings.push(Warning::UnknownField {
                    path: path.clone(),
                    field: field.clone(),
                });
            }
        }

        let items = self.items(raw_items, &path.key("items"))?;

        if items.is_empty() && self.options.warn_empty_categories {
            self.warnings.push(Warning::EmptyCategory {
                path,
                label: label.clone(),
            });
        }

        Ok(Category { label, items })
    }

    /// Warn once per branch, at the first node past the limit.
    fn check_depth(&mut self, path: &NodePath) {
        let Some(limit) = self.options.max_depth else {
            return;
        };
        let depth = path.depth();
        if depth == limit + 1 {
            self.warnings.push(Warning::DepthExceeded {
                path: path.clone(),
                depth,
                limit,
            });
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Whole-tree checks
// ═══════════════════════════════════════════════════════════════════════

fn check_duplicates(tree: &NavigationTree, root: NodePath) -> Result<(), ValidationError> {
    let mut seen: IndexMap<&str, Vec<NodePath>> = IndexMap::new();
    for (path, node) in tree.walk_from(root) {
        if let Some(id) = node.document_id() {
            seen.entry(id).or_default().push(path);
        }
    }

    let mut duplicates: Vec<ValidationError> = seen
        .into_iter()
        .filter(|(_, paths)| paths.len() > 1)
        .map(|(id, paths)| ValidationError::DuplicateDocumentId {
            document_id: id.to_string(),
            paths,
        })
        .collect();

    match duplicates.len() {
        0 => Ok(()),
        1 => Err(duplicates.remove(0)),
        _ => Err(ValidationError::Multiple(duplicates)),
    }
}
