//! Run command implementation.
//!
//! Discovers generator folders, runs every generator in order, then runs the
//! manifest's post-run commands if nothing failed.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover, run_commands, run_tasks, Executor, ProcessExecutor};
use crate::error::{RegenError, Result};
use crate::output::{display_path, plural, Printer};

/// Discover and run every generator in a project
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Project root to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Skip the post-run commands (e.g. cargo fmt)
    #[arg(long)]
    pub no_post_run: bool,
}

pub fn run(args: RunArgs, printer: &Printer) -> Result<()> {
    run_with(args, &mut ProcessExecutor, printer)
}

/// Run with an explicit executor.
pub fn run_with(args: RunArgs, executor: &mut dyn Executor, printer: &Printer) -> Result<()> {
    printer.status("Scanning", &display_path(&args.root));
    let project = discover(&args.root)?;

    if project.tasks.is_empty() {
        printer.warning(
            "Empty",
            &format!("no '{}' folders found", project.manifest.generator_dir),
        );
    }

    let report = run_tasks(&project.tasks, executor, printer);

    if !report.is_success() {
        return Err(RegenError::Process {
            message: format!(
                "{} of {} failed",
                report.failures.len(),
                plural(project.tasks.len(), "generator", "generators")
            ),
            help: Some("Files written by successful generators were kept".to_string()),
        });
    }

    if !args.no_post_run {
        run_commands(&project.manifest.post_run, &project.root, executor, printer)?;
    }

    printer.success("Finished", &plural(report.completed, "generator", "generators"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::{exit, RecordingExecutor};
    use std::fs;
    use tempfile::tempdir;

    fn project_with_scripts(names: &[&str]) -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("game/code-gen")).unwrap();
        for name in names {
            fs::write(dir.path().join("game/code-gen").join(name), "").unwrap();
        }
        dir
    }

    #[test]
    fn test_run_executes_scripts_then_post_run() {
        let dir = project_with_scripts(&["a.js", "b.js"]);
        let mut executor = RecordingExecutor::default();

        let args = RunArgs {
            root: dir.path().to_path_buf(),
            no_post_run: false,
        };
        run_with(args, &mut executor, &Printer::quiet()).unwrap();

        let lines: Vec<String> = executor.commands.iter().map(|c| c.command_line()).collect();
        assert_eq!(lines, vec!["node a.js", "node b.js", "cargo fmt"]);
        assert_eq!(executor.commands[2].cwd.as_deref(), Some(dir.path()));
    }

    #[test]
    fn test_run_without_post_run() {
        let dir = project_with_scripts(&["a.js"]);
        let mut executor = RecordingExecutor::default();

        let args = RunArgs {
            root: dir.path().to_path_buf(),
            no_post_run: true,
        };
        run_with(args, &mut executor, &Printer::quiet()).unwrap();

        assert_eq!(executor.commands.len(), 1);
    }

    #[test]
    fn test_run_failure_skips_post_run() {
        let dir = project_with_scripts(&["a.js", "b.js"]);
        let mut executor = RecordingExecutor::default().reply(exit(1, "boom"));

        let args = RunArgs {
            root: dir.path().to_path_buf(),
            no_post_run: false,
        };
        let result = run_with(args, &mut executor, &Printer::quiet());

        assert!(matches!(result, Err(RegenError::Process { .. })));
        let lines: Vec<String> = executor.commands.iter().map(|c| c.command_line()).collect();
        assert_eq!(lines, vec!["node a.js", "node b.js"]);
    }

    #[test]
    fn test_run_uses_manifest_post_run() {
        let dir = project_with_scripts(&[]);
        fs::write(
            dir.path().join("regen.yaml"),
            "post_run:\n  - cargo fmt --all\n  - cargo check\n",
        )
        .unwrap();
        let mut executor = RecordingExecutor::default();

        let args = RunArgs {
            root: dir.path().to_path_buf(),
            no_post_run: false,
        };
        run_with(args, &mut executor, &Printer::quiet()).unwrap();

        let lines: Vec<String> = executor.commands.iter().map(|c| c.command_line()).collect();
        assert_eq!(lines, vec!["cargo fmt --all", "cargo check"]);
    }
}
