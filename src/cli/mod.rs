//! CLI definitions using clap derive API
//!
//! Job, template and token options are global so every subcommand reads
//! them the same way. Per-command arguments live in submodules:
//! - path: path, tokens, name, excludes and profiles arguments
//! - ls: listing subcommands
//! - create: project creation arguments
//! - version: file-version, bump and publish-name arguments
//! - recent: recents subcommands
//! - completions: completions arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod create;
pub mod ls;
pub mod path;
pub mod recent;
pub mod version;

pub use completions::CompletionsArgs;
pub use create::CreateArgs;
pub use ls::{LsArgs, LsSubcommand};
pub use path::{ExcludesArgs, NameArgs, PathArgs, TokensArgs};
pub use recent::{RecentArgs, RecentSubcommand};
pub use version::{BumpArgs, FileVersionArgs, PublishNameArgs};

/// Jobpath - studio pipeline path resolution
///
/// Resolve folder and file templates of a job, bump version markers and
/// derive publish names.
#[derive(Parser, Debug)]
#[command(
    name = "jobpath",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resolve studio pipeline paths, versions and publish names",
    long_about = "Jobpath turns the path and name templates of a job's config.yml into \
                  concrete folders and file names, and manages the _v### version markers \
                  of working files.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  jobpath -j /jobs/acme -s maya -p shots -k spot=S01 -k shot=sh010 path   \x1b[90m# Resolve a folder\x1b[0m\n   \
                  jobpath -j /jobs/acme -s maya -p shots ls values spot                   \x1b[90m# List the spots\x1b[0m\n   \
                  jobpath bump /jobs/acme/S01/sh010/3d/sh010_v003.ma                      \x1b[90m# Next version\x1b[0m\n   \
                  jobpath publish-name sh010_anim_v003.ma                                 \x1b[90m# Publish name\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub job: JobOptions,

    #[command(subcommand)]
    pub command: Commands,
}

/// Job, template and token selection shared by the subcommands
#[derive(Args, Debug, Clone, Default)]
pub struct JobOptions {
    /// Job root folder
    #[arg(long, short = 'j', global = true, env = "JOBPATH_JOB")]
    pub job: Option<PathBuf>,

    /// Configuration file (defaults to <job>/config.yml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path template to resolve (instead of --software/--profile)
    #[arg(long, short = 't', global = true)]
    pub template: Option<String>,

    /// Software name (e.g. maya, nuke)
    #[arg(long, short = 's', global = true)]
    pub software: Option<String>,

    /// Launcher profile of the software
    #[arg(long, short = 'p', global = true)]
    pub profile: Option<String>,

    /// Token value, repeatable
    #[arg(
        long = "token",
        short = 'k',
        global = true,
        value_name = "KEY=VALUE",
        value_parser = parse_token
    )]
    pub tokens: Vec<(String, String)>,
}

/// Parse a `key=value` token argument; the value may be empty
fn parse_token(arg: &str) -> Result<(String, String), String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{arg}'"))?;
    if key.is_empty() {
        return Err(format!("missing token name in '{arg}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a path template
    Path(PathArgs),

    /// List the tokens a template needs
    Tokens(TokensArgs),

    /// Build a file name from a name profile
    Name(NameArgs),

    /// Show the folder names hidden for a token
    Excludes(ExcludesArgs),

    /// List the launcher profiles of a software
    Profiles,

    /// List jobs, token values or project files
    Ls(LsArgs),

    /// Create a project file from the software's boilerplate
    Create(CreateArgs),

    /// Show the version number of a path
    #[command(name = "file-version")]
    FileVersion(FileVersionArgs),

    /// Show the next version of a path
    Bump(BumpArgs),

    /// Show the publish name of a file
    #[command(name = "publish-name")]
    PublishName(PublishNameArgs),

    /// Show or save the recent selection of a software
    Recent(RecentArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
