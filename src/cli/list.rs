//! List command implementation.
//!
//! Discovers generator folders and prints the task list without running it.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover, TaskKind};
use crate::error::{RegenError, Result};
use crate::output::{display_path, plural, Printer};

/// List discovered generators without running them
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Project root to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Print the task list as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let project = discover(&args.root)?;

    if args.json {
        let json = serde_json::to_string_pretty(&project.tasks).map_err(|e| RegenError::Parse {
            message: format!("Failed to serialize task list: {}", e),
            help: None,
        })?;
        println!("{}", json);
        return Ok(());
    }

    if !project.has_manifest {
        printer.info("Manifest", &printer.dim("none, using defaults"));
    }

    for task in &project.tasks {
        match &task.kind {
            TaskKind::Script(command) => printer.info(
                "Script",
                &format!(
                    "{} {}",
                    display_path(&task.file),
                    printer.dim(&format!("-> {}", command.command_line()))
                ),
            ),
            TaskKind::Spec => printer.info("Spec", &display_path(&task.file)),
        }
    }

    printer.success("Found", &plural(project.tasks.len(), "generator", "generators"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_list_runs_nothing() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("code-gen")).unwrap();
        fs::write(dir.path().join("code-gen/game.js"), "process.exit(1)").unwrap();

        let args = ListArgs {
            root: dir.path().to_path_buf(),
            json: false,
        };
        assert!(run(args, &Printer::quiet()).is_ok());
    }

    #[test]
    fn test_list_missing_root() {
        let dir = tempdir().unwrap();
        let args = ListArgs {
            root: dir.path().join("missing"),
            json: true,
        };
        assert!(run(args, &Printer::quiet()).is_err());
    }
}
