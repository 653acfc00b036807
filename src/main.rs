//! Jobpath - studio pipeline path resolution
//!
//! Command line front end over the `jobpath` library: resolve job paths and
//! names, list token values, create projects, and manage version markers.

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod cli;
mod commands;

use cli::{Cli, Commands};

/// Log to stderr; `RUST_LOG` wins over `--verbose`
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = &cli.job;
    let result = match cli.command {
        Commands::Path(args) => commands::path::run_path(options, args),
        Commands::Tokens(args) => commands::path::run_tokens(options, args),
        Commands::Name(args) => commands::path::run_name(options, args),
        Commands::Excludes(args) => commands::path::run_excludes(options, args),
        Commands::Profiles => commands::path::run_profiles(options),
        Commands::Ls(args) => commands::ls::run(options, args),
        Commands::Create(args) => commands::create::run(options, args),
        Commands::FileVersion(args) => commands::version::run_file_version(args),
        Commands::Bump(args) => commands::version::run_bump(args),
        Commands::PublishName(args) => commands::version::run_publish_name(args),
        Commands::Recent(args) => commands::recent::run(options, args),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
