//! Validation options

/// Settings that control which warnings validation reports.
///
/// Options never change whether a tree is valid; they only add or suppress
/// entries in [`crate::Report::warnings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateOptions {
    /// Deepest nesting the renderer can display, if it has a limit
    pub max_depth: Option<usize>,

    /// Warn about categories with no items
    pub warn_empty_categories: bool,

    /// Warn about category keys other than `type`, `label` and `items`
    pub warn_unknown_fields: bool,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            max_depth: None,
            warn_empty_categories: true,
            warn_unknown_fields: true,
        }
    }
}

impl ValidateOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options with a display-depth limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
            ..Default::default()
        }
    }

    /// Options that report no warnings at all.
    pub fn quiet() -> Self {
        Self {
            max_depth: None,
            warn_empty_categories: false,
            warn_unknown_fields: false,
        }
    }

    /// Whether a node at `depth` is deeper than the configured limit.
    pub fn exceeds_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|limit| depth > limit)
    }
}
