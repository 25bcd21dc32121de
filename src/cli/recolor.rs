//! Recolor command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::recolor::{recolor, RecolorConfig};

/// Derive coloured sprite variants from a base set
#[derive(Args, Debug)]
pub struct RecolorArgs {
    /// Recolor table (YAML)
    pub config: PathBuf,
}

pub fn run(args: RecolorArgs, printer: &Printer) -> Result<()> {
    let config = RecolorConfig::load(&args.config)?;
    printer.status("Recoloring", &display_path(&config.source_dir()));

    let report = recolor(&config, printer)?;

    printer.success(
        "Finished",
        &format!(
            "{}, {}",
            plural(report.images, "image", "images"),
            plural(report.pixels, "pixel", "pixels")
        ),
    );
    Ok(())
}
