//! `navtree validate`

use std::io::Write;

use serde_json::json;

use navtree::{NavigationTree, ValidateOptions, ValidationError, Validator, Warning};

use crate::cli::ValidateArgs;
use crate::input::{read_input, validate_input, Loaded};

/// Validate a sidebar file and print diagnostics.
///
/// Exit code 0 when the file is valid, 1 when it has errors, or when it has
/// warnings and `--fail-on-warnings` is set.
pub fn run_validate(args: &ValidateArgs, out: &mut dyn Write) -> anyhow::Result<u8> {
    let options = ValidateOptions {
        max_depth: args.max_depth,
        ..ValidateOptions::default()
    };
    let validator = Validator::new(options);

    let raw = read_input(&args.input)?;
    let outcome = validate_input(&args.input, &raw, &validator)?;

    let (errors, warnings): (Vec<&ValidationError>, Vec<&Warning>) = match &outcome {
        Ok(loaded) => (
            Vec::new(),
            loaded
                .sidebars
                .values()
                .flat_map(|report| report.warnings.iter())
                .collect(),
        ),
        Err(err) => (err.iter().collect(), Vec::new()),
    };
    tracing::info!(
        file = %args.input.file.display(),
        errors = errors.len(),
        warnings = warnings.len(),
        "validation finished"
    );

    let failed = !errors.is_empty() || (args.fail_on_warnings && !warnings.is_empty());

    if args.json {
        write_json(args, &errors, &warnings, failed, out)?;
    } else {
        write_text(args, &outcome, &errors, &warnings, out)?;
    }

    Ok(if failed { 1 } else { 0 })
}

fn write_text(
    args: &ValidateArgs,
    outcome: &Result<Loaded, ValidationError>,
    errors: &[&ValidationError],
    warnings: &[&Warning],
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    for err in errors {
        writeln!(out, "error[{}]: {}", err.kind(), err)?;
    }
    for warning in warnings {
        writeln!(out, "warning[{}]: {}", warning.kind(), warning)?;
    }

    if let Ok(loaded) = outcome {
        for (name, report) in &loaded.sidebars {
            let (documents, categories) = count_nodes(&report.tree);
            writeln!(
                out,
                "{}: {} {}, {} {}",
                name,
                documents,
                plural(documents, "document", "documents"),
                categories,
                plural(categories, "category", "categories"),
            )?;
        }
    }

    writeln!(
        out,
        "{}: {} {}, {} {}",
        args.input.file.display(),
        errors.len(),
        plural(errors.len(), "error", "errors"),
        warnings.len(),
        plural(warnings.len(), "warning", "warnings"),
    )?;
    Ok(())
}

fn write_json(
    args: &ValidateArgs,
    errors: &[&ValidationError],
    warnings: &[&Warning],
    failed: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let errors: Vec<_> = errors
        .iter()
        .map(|err| {
            json!({
                "kind": err.kind(),
                "path": err.path().map(|p| p.to_string()),
                "message": err.to_string(),
            })
        })
        .collect();
    let warnings: Vec<_> = warnings
        .iter()
        .map(|warning| {
            json!({
                "kind": warning.kind(),
                "path": warning.path().to_string(),
                "message": warning.to_string(),
            })
        })
        .collect();

    let report = json!({
        "file": args.input.file.display().to_string(),
        "valid": !failed,
        "errors": errors,
        "warnings": warnings,
    });
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

/// Number of documents and categories in a tree.
pub fn count_nodes(tree: &NavigationTree) -> (usize, usize) {
    tree.walk().fold((0, 0), |(docs, cats), (_, node)| {
        if node.is_leaf() {
            (docs + 1, cats)
        } else {
            (docs, cats + 1)
        }
    })
}

fn plural(n: usize, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 {
        one
    } else {
        many
    }
}
