//! Template commands: path, tokens, name, excludes and profiles

use console::Style;

use jobpath::error::{self, Result};

use super::helpers::{open_resolver, require_software, resolve_template, token_map};
use crate::cli::{ExcludesArgs, JobOptions, NameArgs, PathArgs, TokensArgs};

/// Print the resolved path of the template
pub fn run_path(options: &JobOptions, args: PathArgs) -> Result<()> {
    let resolver = open_resolver(options)?;
    let template = resolve_template(&resolver, options)?;
    let path = resolver.get_path(&template, &token_map(options), args.stop.as_deref())?;
    println!("{}", path);
    Ok(())
}

/// Print the tokens the template needs, one per line or as JSON
pub fn run_tokens(options: &JobOptions, args: TokensArgs) -> Result<()> {
    let resolver = open_resolver(options)?;
    let template = resolve_template(&resolver, options)?;
    let tokens = resolver.get_tokens(&template)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    } else {
        for token in tokens {
            println!("{}", token);
        }
    }
    Ok(())
}

/// Print a file name built from a name profile
pub fn run_name(options: &JobOptions, args: NameArgs) -> Result<()> {
    let resolver = open_resolver(options)?;
    let software = options.software.as_deref();

    // the library degrades to an empty name; the CLI reports it
    resolver
        .config()
        .name_profile(&args.name_profile, software)
        .ok_or_else(|| error::config::name_profile_not_found(&args.name_profile))?;

    let name = resolver.get_name(&args.name_profile, &token_map(options), software, &args.ver)?;
    println!("{}", name);
    Ok(())
}

/// Print the folder names hidden for a token
pub fn run_excludes(options: &JobOptions, args: ExcludesArgs) -> Result<()> {
    let resolver = open_resolver(options)?;
    for exclude in resolver.get_excludes(&args.token) {
        println!("{}", exclude);
    }
    Ok(())
}

/// Print the launcher profiles of `--software` with their templates
pub fn run_profiles(options: &JobOptions) -> Result<()> {
    let resolver = open_resolver(options)?;
    let software = require_software(options)?;
    let profiles = resolver.config().launcher_profiles(software);

    if profiles.is_empty() {
        println!("No launcher profiles for {}.", software);
        return Ok(());
    }

    for (name, template) in &profiles {
        println!(
            "{}  {}",
            Style::new().bold().yellow().apply_to(name),
            Style::new().dim().apply_to(template)
        );
    }
    Ok(())
}
