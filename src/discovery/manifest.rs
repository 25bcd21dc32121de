//! Project manifest (regen.yaml) parsing.
//!
//! The manifest configures discovery (generator folder name, skipped
//! directories, script interpreters), the commands run after generation,
//! and packaging defaults. Every field is optional.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RegenError, Result};

/// Project manifest loaded from regen.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Name of the directories that hold generators.
    pub generator_dir: String,

    /// Directory names never descended into (exact match).
    pub skip_dirs: Vec<String>,

    /// Script extension to interpreter command line, e.g. `js: node`.
    pub interpreters: BTreeMap<String, String>,

    /// Command lines run once after every generator succeeded.
    pub post_run: Vec<String>,

    /// Packaging defaults.
    pub package: PackageConfig,
}

/// Packaging section of the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageConfig {
    /// Archiver command line; output and artifact paths are appended.
    pub archiver: String,

    /// Archive to create.
    pub output: PathBuf,

    /// Build artifact to archive.
    pub artifact: Option<PathBuf>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            generator_dir: "code-gen".to_string(),
            skip_dirs: ["node_modules", ".git", "target", ".history"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            interpreters: BTreeMap::from([("js".to_string(), "node".to_string())]),
            post_run: vec!["cargo fmt".to_string()],
            package: PackageConfig::default(),
        }
    }
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            archiver: "7z a -tzip".to_string(),
            output: PathBuf::from("out.zip"),
            artifact: None,
        }
    }
}

impl Manifest {
    /// Load manifest from a regen.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RegenError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| RegenError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check regen.yaml syntax".to_string()),
        })
    }

    /// Check if a directory name is skipped during discovery.
    pub fn is_skipped(&self, name: &OsStr) -> bool {
        self.skip_dirs.iter().any(|skip| OsStr::new(skip) == name)
    }

    /// Interpreter command line for a script, by extension.
    pub fn interpreter_for(&self, path: &Path) -> Option<&str> {
        let ext = path.extension()?.to_str()?;
        self.interpreters.get(ext).map(|s| s.as_str())
    }
}

/// Split a command line into program and arguments.
pub fn split_command(line: &str) -> Result<Vec<String>> {
    let parts = shlex::split(line).ok_or_else(|| RegenError::Parse {
        message: format!("Invalid command line: {}", line),
        help: Some("Check for unbalanced quotes".to_string()),
    })?;

    if parts.is_empty() {
        return Err(RegenError::Parse {
            message: "Empty command line".to_string(),
            help: None,
        });
    }

    Ok(parts)
}
