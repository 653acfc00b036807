//! Recent command implementation

use console::Style;

use jobpath::error::{self, Result};
use jobpath::{RecentStore, SessionContext};

use super::helpers::require_software;
use crate::cli::{JobOptions, RecentArgs, RecentSubcommand};

/// Run recent command
pub fn run(options: &JobOptions, args: RecentArgs) -> Result<()> {
    let store = RecentStore::open_default()?;
    let software = require_software(options)?;

    match args.command {
        RecentSubcommand::Show => show(&store, software),
        RecentSubcommand::Save => save(&store, software, options),
    }
}

fn show(store: &RecentStore, software: &str) -> Result<()> {
    let Some(context) = store.load(software)? else {
        println!("No recent selection for {}.", software);
        return Ok(());
    };

    let label = Style::new().bold();
    println!("{} {}", label.apply_to("Job:"), context.job_path().display());
    println!("{} {}", label.apply_to("Profile:"), context.profile);
    for token in &context.tokens {
        println!("  {} = {}", Style::new().cyan().apply_to(&token.name), token.value);
    }
    Ok(())
}

fn save(store: &RecentStore, software: &str, options: &JobOptions) -> Result<()> {
    let job = options
        .job
        .as_ref()
        .ok_or_else(|| error::config::invalid("No job given; pass --job or set JOBPATH_JOB"))?;

    let mut context = SessionContext {
        jobs_dir: job
            .parent()
            .map(|dir| dir.to_string_lossy().into_owned())
            .unwrap_or_default(),
        job: job
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
        profile: options.profile.clone().unwrap_or_default(),
        tokens: Vec::new(),
    };
    // keep the order the tokens were given in
    for (name, value) in &options.tokens {
        context.set_token(name.as_str(), value.as_str());
    }

    store.save(software, &context)?;
    eprintln!(
        "{} {}",
        Style::new().green().apply_to("Saved recent selection to"),
        store.path().display()
    );
    Ok(())
}
