//! Gen command implementation.
//!
//! Evaluates generator spec files directly, without discovery.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::template::load_plan;

/// Regenerate marked regions from generator specs
#[derive(Args, Debug)]
pub struct GenArgs {
    /// Generator spec files (*.gen.yaml)
    #[arg(required = true)]
    pub specs: Vec<PathBuf>,
}

pub fn run(args: GenArgs, printer: &Printer) -> Result<()> {
    let mut files = 0;

    for spec in &args.specs {
        printer.status("Generating", &display_path(spec));
        let plan = load_plan(spec)?;

        for (path, outcome) in plan.run()? {
            let note = if outcome.changed { "" } else { " (unchanged)" };
            printer.info(
                "Wrote",
                &format!(
                    "{} {}{}",
                    display_path(path),
                    printer.dim(&plural(outcome.rewritten, "region", "regions")),
                    note
                ),
            );
            files += 1;
        }
    }

    printer.success("Finished", &plural(files, "file", "files"));
    Ok(())
}
