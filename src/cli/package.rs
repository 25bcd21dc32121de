//! Package command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{load_manifest, ProcessExecutor};
use crate::error::Result;
use crate::output::Printer;
use crate::package::{package, PackageRequest};

/// Archive a build artifact
#[derive(Args, Debug)]
pub struct PackageArgs {
    /// Artifact to archive (default: `package.artifact` from regen.yaml)
    pub artifact: Option<PathBuf>,

    /// Archive to create
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Archiver command line, e.g. "7z a -tzip"
    #[arg(long)]
    pub archiver: Option<String>,

    /// Project root holding regen.yaml
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

pub fn run(args: PackageArgs, printer: &Printer) -> Result<()> {
    let (manifest, _) = load_manifest(&args.root)?;
    let request = PackageRequest::resolve(
        &manifest.package,
        &args.root,
        args.artifact,
        args.output,
        args.archiver,
    )?;

    let stdout = package(&request, &mut ProcessExecutor, printer)?;
    if !stdout.is_empty() {
        print!("{}", stdout);
    }
    Ok(())
}
