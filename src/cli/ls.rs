use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Arguments for the ls command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List jobs:\n    jobpath ls jobs /jobs\n\n\
                  List shots of a spot:\n    jobpath -j /jobs/acme -s maya -p shots -k spot=S01 ls values shot\n\n\
                  List project files:\n    jobpath -j /jobs/acme -s maya -p shots -k spot=S01 -k shot=sh010 ls files")]
pub struct LsArgs {
    #[command(subcommand)]
    pub command: LsSubcommand,
}

/// Listing subcommands
#[derive(Subcommand, Debug)]
pub enum LsSubcommand {
    /// List the jobs of a jobs folder
    Jobs {
        /// Folder holding the jobs
        jobs_dir: PathBuf,
    },

    /// List the values a token can take
    Values {
        /// Token to list
        token: String,
    },

    /// List the project files of the resolved folder
    Files {
        /// Extension to keep (defaults to the software's), repeatable
        #[arg(long = "ext")]
        extensions: Vec<String>,
    },
}
