//! `navtree show`

use std::io::Write;

use navtree::{ValidateOptions, Validator};

use crate::cli::ShowArgs;
use crate::input::load;

/// Print the validated sidebars as indented outlines.
pub fn run_show(args: &ShowArgs, out: &mut dyn Write) -> anyhow::Result<u8> {
    let loaded = load(&args.input, &Validator::new(ValidateOptions::quiet()))?;

    if let Some(tree) = loaded.single_tree() {
        write!(out, "{}", tree)?;
        return Ok(0);
    }

    for (i, (name, report)) in loaded.sidebars.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}:", name)?;
        for line in report.tree.to_string().lines() {
            writeln!(out, "  {}", line)?;
        }
    }
    Ok(0)
}
