//! Generator discovery and execution.
//!
//! Finds generator folders in a project tree, turns their files into an
//! explicit task list, and runs the tasks sequentially.
//!
//! # Example
//!
//! ```ignore
//! use regen::discovery::{discover, run_tasks, ProcessExecutor};
//!
//! let project = discover(".")?;
//! let report = run_tasks(&project.tasks, &mut ProcessExecutor, &printer);
//! ```

mod manifest;
mod runner;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use manifest::{split_command, Manifest, PackageConfig};
pub use runner::{
    check_output, run_commands, run_tasks, CommandSpec, ExecOutput, Executor, ProcessExecutor,
    RunReport, TaskFailure,
};
pub use scanner::{discover_tasks, tasks_in_dir, Task, TaskKind};

#[cfg(test)]
pub(crate) use runner::tests::{exit, RecordingExecutor};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "regen.yaml";

/// A discovered project.
#[derive(Debug)]
pub struct Project {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no regen.yaml found).
    pub manifest: Manifest,

    /// Whether a regen.yaml manifest was found.
    pub has_manifest: bool,

    /// Generator tasks in run order.
    pub tasks: Vec<Task>,
}

/// Load the manifest for `root`, falling back to defaults.
pub fn load_manifest(root: &Path) -> Result<(Manifest, bool)> {
    let manifest_path = root.join(MANIFEST_FILENAME);
    if manifest_path.exists() {
        Ok((Manifest::load(&manifest_path)?, true))
    } else {
        Ok((Manifest::default(), false))
    }
}

/// Discover generator tasks in a project directory.
pub fn discover(root: impl AsRef<Path>) -> Result<Project> {
    let root = root.as_ref().to_path_buf();
    let (manifest, has_manifest) = load_manifest(&root)?;
    let tasks = discover_tasks(&root, &manifest)?;

    Ok(Project {
        root,
        manifest,
        has_manifest,
        tasks,
    })
}
