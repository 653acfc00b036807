use clap::{Parser, Subcommand};

/// Arguments for the recent command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the last selection for Maya:\n    jobpath -s maya recent show\n\n\
                  Remember a selection:\n    jobpath -j /jobs/acme -s maya -p shots -k spot=S01 recent save")]
pub struct RecentArgs {
    #[command(subcommand)]
    pub command: RecentSubcommand,
}

/// Recents subcommands
#[derive(Subcommand, Debug)]
pub enum RecentSubcommand {
    /// Show the recent selection of --software
    Show,

    /// Save the current job, profile and tokens for --software
    Save,
}
