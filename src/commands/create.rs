//! Create command implementation

use console::Style;

use jobpath::Result;
use jobpath::project;

use super::helpers::{open_resolver, require_software, resolve_template, token_map};
use crate::cli::{CreateArgs, JobOptions};

/// Create a project file and print its path
pub fn run(options: &JobOptions, args: CreateArgs) -> Result<()> {
    let resolver = open_resolver(options)?;
    let software = require_software(options)?;
    let template = resolve_template(&resolver, options)?;

    let file = project::create_project(
        &resolver,
        &template,
        &token_map(options),
        software,
        &args.file,
    )?;

    eprintln!("{}", Style::new().green().apply_to("Created project file"));
    println!("{}", file.display());
    Ok(())
}
