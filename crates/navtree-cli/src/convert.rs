//! `navtree convert`

use std::io::Write;

use anyhow::Context;

use navtree::{ValidateOptions, Validator};

use crate::cli::ConvertArgs;
use crate::input::load;

/// Validate the input and write it back out in the target format.
///
/// A single tree stays a list; a sidebar set stays a mapping.
pub fn run_convert(args: &ConvertArgs, out: &mut dyn Write) -> anyhow::Result<u8> {
    let loaded = load(&args.input, &Validator::new(ValidateOptions::quiet()))?;
    let format = args.to.format();

    let text = match loaded.single_tree() {
        Some(tree) => format.encode(tree)?,
        None => format.encode_sidebars(&loaded.trees())?,
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), format = format.name(), "wrote converted config");
        }
        None => out.write_all(text.as_bytes())?,
    }
    Ok(0)
}
