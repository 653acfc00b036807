//! Listing commands feeding a launcher's pickers

use std::path::Path;

use jobpath::Result;
use jobpath::navigate;

use super::helpers::{open_resolver, resolve_template, token_map};
use crate::cli::{JobOptions, LsArgs, LsSubcommand};

/// Run ls command
pub fn run(options: &JobOptions, args: LsArgs) -> Result<()> {
    let names = match args.command {
        LsSubcommand::Jobs { jobs_dir } => navigate::list_jobs(&jobs_dir),
        LsSubcommand::Values { token } => {
            let resolver = open_resolver(options)?;
            let template = resolve_template(&resolver, options)?;
            navigate::list_token_values(&resolver, &template, &token_map(options), &token)?
        }
        LsSubcommand::Files { extensions } => {
            let resolver = open_resolver(options)?;
            let template = resolve_template(&resolver, options)?;
            let folder = resolver.get_path(&template, &token_map(options), None)?;

            let extensions = match (&options.software, extensions.is_empty()) {
                (Some(software), true) => resolver.config().extensions(software).to_vec(),
                _ => extensions,
            };
            navigate::list_files(Path::new(&folder), &extensions)
        }
    };

    for name in names {
        println!("{}", name);
    }
    Ok(())
}
