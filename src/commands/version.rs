//! Version commands: file-version, bump and publish-name

use console::Style;

use jobpath::Result;
use jobpath::{create_pub_name, get_version_str, version_up};

use crate::cli::{BumpArgs, FileVersionArgs, PublishNameArgs};

/// Print the version number of a path
pub fn run_file_version(args: FileVersionArgs) -> Result<()> {
    println!("{}", get_version_str(&args.path, !args.unpadded)?);
    Ok(())
}

/// Print the next version of a path, warning when it is already taken
pub fn run_bump(args: BumpArgs) -> Result<()> {
    let next = version_up(&args.path, args.filename_only)?;
    if next.exists {
        eprintln!(
            "{} {} already exists",
            Style::new().bold().yellow().apply_to("Warning:"),
            next.path.display()
        );
    }
    println!("{}", next.path.display());
    Ok(())
}

/// Print the publish name of a file
pub fn run_publish_name(args: PublishNameArgs) -> Result<()> {
    println!("{}", create_pub_name(&args.name)?);
    Ok(())
}
