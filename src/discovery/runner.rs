//! Sequential task execution.
//!
//! Script tasks go through an [`Executor`] so tests can substitute the
//! process layer. Spec tasks are compiled and run in-process.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Serialize;

use crate::error::{RegenError, Result};
use crate::output::{display_path, plural, Printer};
use crate::template::load_plan;

use super::manifest::split_command;
use super::scanner::{Task, TaskKind};

/// A process to run: program, arguments and working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    /// Build from a shell-style command line.
    pub fn parse(line: &str) -> Result<Self> {
        let mut parts = split_command(line)?;
        let program = parts.remove(0);
        Ok(Self {
            program,
            args: parts,
            cwd: None,
        })
    }

    /// Set the working directory.
    pub fn in_dir(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Append an argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Command line for display.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(|s| s.as_str()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Captured result of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOutput {
    /// Exit code, `None` if terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs commands.
pub trait Executor {
    /// Run a command to completion. Errors mean the process could not be
    /// started; a non-zero exit is reported through [`ExecOutput`].
    fn execute(&mut self, command: &CommandSpec) -> Result<ExecOutput>;
}

/// Executor that spawns real processes.
#[derive(Debug, Default)]
pub struct ProcessExecutor;

impl Executor for ProcessExecutor {
    fn execute(&mut self, command: &CommandSpec) -> Result<ExecOutput> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args);
        if let Some(cwd) = &command.cwd {
            cmd.current_dir(cwd);
        }

        let output = cmd.output().map_err(|e| RegenError::Process {
            message: format!("Failed to start '{}': {}", command.command_line(), e),
            help: Some(format!("Is '{}' installed and on PATH?", command.program)),
        })?;

        Ok(ExecOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// A task that did not complete.
#[derive(Debug, Clone)]
pub struct TaskFailure {
    pub file: PathBuf,
    pub message: String,
}

/// Result of running a task list.
#[derive(Debug, Default)]
pub struct RunReport {
    pub completed: usize,
    pub failures: Vec<TaskFailure>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run tasks one after another.
///
/// A failing task is logged and recorded; later tasks still run. Work done
/// by completed tasks is kept.
pub fn run_tasks(tasks: &[Task], executor: &mut dyn Executor, printer: &Printer) -> RunReport {
    let mut report = RunReport::default();

    for task in tasks {
        match run_task(task, executor, printer) {
            Ok(()) => report.completed += 1,
            Err(e) => {
                printer.error("Failed", &format!("{}: {}", display_path(&task.file), e));
                report.failures.push(TaskFailure {
                    file: task.file.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    report
}

fn run_task(task: &Task, executor: &mut dyn Executor, printer: &Printer) -> Result<()> {
    match &task.kind {
        TaskKind::Script(command) => {
            printer.status("Running", &command.command_line());
            let output = executor.execute(command)?;
            check_output(command, &output)
        }
        TaskKind::Spec => {
            printer.status("Generating", &display_path(&task.file));
            let plan = load_plan(&task.file)?;
            for (path, outcome) in plan.run()? {
                printer.info(
                    "Wrote",
                    &format!(
                        "{} ({} rewritten)",
                        display_path(path),
                        plural(outcome.rewritten, "region", "regions")
                    ),
                );
            }
            Ok(())
        }
    }
}

/// Run each command line from `cwd` in order, stopping at the first failure.
pub fn run_commands(
    lines: &[String],
    cwd: &Path,
    executor: &mut dyn Executor,
    printer: &Printer,
) -> Result<()> {
    for line in lines {
        let command = CommandSpec::parse(line)?.in_dir(cwd);
        printer.status("Running", &command.command_line());
        let output = executor.execute(&command)?;
        check_output(&command, &output)?;
    }
    Ok(())
}

/// Turn a non-zero exit into a process error carrying stderr.
pub fn check_output(command: &CommandSpec, output: &ExecOutput) -> Result<()> {
    if output.success() {
        return Ok(());
    }

    let status = match output.code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    };
    let stderr = output.stderr.trim();

    Err(RegenError::Process {
        message: format!("'{}' failed ({})", command.command_line(), status),
        help: (!stderr.is_empty()).then(|| stderr.to_string()),
    })
}
