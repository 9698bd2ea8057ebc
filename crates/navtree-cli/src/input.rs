//! Reading and validating the input file

use anyhow::Context;
use indexmap::IndexMap;
use serde_json::Value;

use navtree::{
    read_raw, select_sidebar, NavigationTree, NodePath, Report, Sidebars, ValidationError,
    Validator,
};

use crate::cli::{FormatArg, InputArgs};

/// Validated sidebars from one input file.
#[derive(Debug)]
pub struct Loaded {
    /// Reports by sidebar name, in declaration order
    pub sidebars: IndexMap<String, Report>,

    /// Whether the input was one tree rather than a named set
    pub single: bool,
}

impl Loaded {
    /// The validated trees, without their warnings.
    pub fn trees(&self) -> Sidebars {
        self.sidebars
            .iter()
            .map(|(name, report)| (name.clone(), report.tree.clone()))
            .collect()
    }

    /// The only tree, when the input was a single tree.
    pub fn single_tree(&self) -> Option<&NavigationTree> {
        if !self.single {
            return None;
        }
        self.sidebars.values().next().map(|report| &report.tree)
    }
}

/// Read and decode the input file.
pub fn read_input(args: &InputArgs) -> anyhow::Result<Value> {
    let format = args.format.map(FormatArg::format);
    Ok(read_raw(&args.file, format)?)
}

/// Validate decoded input, honoring `--sidebar`.
///
/// The outer result fails when the requested sidebar does not exist; the
/// inner result carries validation errors for the caller to report.
pub fn validate_input(
    args: &InputArgs,
    raw: &Value,
    validator: &Validator,
) -> anyhow::Result<Result<Loaded, ValidationError>> {
    let Some(name) = &args.sidebar else {
        return Ok(validator.validate_sidebars(raw).map(|sidebars| Loaded {
            sidebars,
            single: raw.is_array(),
        }));
    };

    let tree = select_sidebar(raw, name)?;
    Ok(validator
        .validate_at(tree, NodePath::named(name.as_str()))
        .map(|report| {
            let mut sidebars = IndexMap::new();
            sidebars.insert(name.clone(), report);
            Loaded {
                sidebars,
                single: true,
            }
        }))
}

/// Read and validate, treating validation errors as failures.
pub fn load(args: &InputArgs, validator: &Validator) -> anyhow::Result<Loaded> {
    let raw = read_input(args)?;
    let loaded = validate_input(args, &raw, validator)?
        .with_context(|| format!("invalid navigation config in {}", args.file.display()))?;
    tracing::debug!(sidebars = loaded.sidebars.len(), "validated input");
    Ok(loaded)
}
