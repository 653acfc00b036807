use clap::Parser;

/// Arguments for the create command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Create a Maya scene:\n    jobpath -j /jobs/acme -s maya -p shots -k spot=S01 -k shot=sh010 create --file sh010_anim_v001")]
pub struct CreateArgs {
    /// File name of the new project; the software's extension is added when missing
    #[arg(long)]
    pub file: String,
}
