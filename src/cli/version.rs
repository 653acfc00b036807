use clap::Parser;
use std::path::PathBuf;

/// Arguments for the file-version command
#[derive(Parser, Debug)]
pub struct FileVersionArgs {
    /// File name or path with a _v### marker
    pub path: String,

    /// Strip leading zeros
    #[arg(long)]
    pub unpadded: bool,
}

/// Arguments for the bump command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Bump every marker of a path:\n    jobpath bump /jobs/acme/anim_v003/sh010_v003.ma\n\n\
                  Bump only the file name:\n    jobpath bump /jobs/acme/anim_v003/sh010_v003.ma --filename-only")]
pub struct BumpArgs {
    /// File to version up
    pub path: PathBuf,

    /// Leave markers in the folder part untouched
    #[arg(long)]
    pub filename_only: bool,
}

/// Arguments for the publish-name command
#[derive(Parser, Debug)]
pub struct PublishNameArgs {
    /// Working file name
    pub name: String,
}
