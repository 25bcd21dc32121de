//! Generator folder discovery.
//!
//! Walks a project tree and turns every file inside a generator folder into
//! a task. Generator folders are not descended into.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::error::{RegenError, Result};
use crate::template::is_spec_file;

use super::manifest::Manifest;
use super::runner::CommandSpec;

/// One unit of generator work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    /// The generator file.
    pub file: PathBuf,
    pub kind: TaskKind,
}

/// How a task is executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TaskKind {
    /// External script run through its interpreter.
    Script(CommandSpec),
    /// Generator spec evaluated in-process.
    Spec,
}

/// Find generator tasks under `root`, in file-name order.
pub fn discover_tasks(root: &Path, manifest: &Manifest) -> Result<Vec<Task>> {
    if !root.is_dir() {
        return Err(RegenError::Io {
            path: root.to_path_buf(),
            message: "Not a directory".to_string(),
        });
    }

    let mut tasks = Vec::new();
    let mut walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0 || !(e.file_type().is_dir() && manifest.is_skipped(e.file_name()))
        });

    while let Some(entry) = walker.next() {
        let Ok(entry) = entry else {
            continue;
        };

        let is_generator_dir = entry.depth() > 0
            && entry.file_type().is_dir()
            && entry.file_name() == manifest.generator_dir.as_str();

        if is_generator_dir {
            tasks.extend(tasks_in_dir(entry.path(), manifest)?);
            walker.skip_current_dir();
        }
    }

    Ok(tasks)
}

/// Tasks for the immediate files of one generator folder.
pub fn tasks_in_dir(dir: &Path, manifest: &Manifest) -> Result<Vec<Task>> {
    let read = fs::read_dir(dir).map_err(|e| RegenError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to read generator folder: {}", e),
    })?;

    let mut files: Vec<PathBuf> = read
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    files.sort();

    let mut tasks = Vec::new();
    for file in files {
        if let Some(task) = task_for(&file, dir, manifest)? {
            tasks.push(task);
        }
    }

    Ok(tasks)
}

fn task_for(file: &Path, dir: &Path, manifest: &Manifest) -> Result<Option<Task>> {
    if is_spec_file(file) {
        return Ok(Some(Task {
            file: file.to_path_buf(),
            kind: TaskKind::Spec,
        }));
    }

    let Some(interpreter) = manifest.interpreter_for(file) else {
        return Ok(None);
    };

    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let command = CommandSpec::parse(interpreter)?.arg(file_name).in_dir(dir);

    Ok(Some(Task {
        file: file.to_path_buf(),
        kind: TaskKind::Script(command),
    }))
}
