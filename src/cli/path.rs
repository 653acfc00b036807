use clap::Parser;

/// Arguments for the path command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Resolve a launcher profile:\n    jobpath -j /jobs/acme -s maya -p shots -k spot=S01 -k shot=sh010 path\n\n\
                  Resolve up to a token:\n    jobpath -j /jobs/acme -s maya -p shots -k spot=S01 path --stop shot\n\n\
                  Resolve an explicit template:\n    jobpath -j /jobs/acme -t '<job_path>/<spot>/comp' -k spot=S01 path")]
pub struct PathArgs {
    /// Stop before this token and print its parent folder
    #[arg(long)]
    pub stop: Option<String>,
}

/// Arguments for the tokens command
#[derive(Parser, Debug)]
pub struct TokensArgs {
    /// Print the tokens as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the name command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Build a file name:\n    jobpath -j /jobs/acme -s maya -k shot=sh010 name --name-profile shot --ver 003")]
pub struct NameArgs {
    /// Name profile to use
    #[arg(long)]
    pub name_profile: String,

    /// Version digits, without the leading v
    #[arg(long, default_value = jobpath::resolver::name::DEFAULT_VERSION)]
    pub ver: String,
}

/// Arguments for the excludes command
#[derive(Parser, Debug)]
pub struct ExcludesArgs {
    /// Token whose excludes to show
    pub token: String,
}
