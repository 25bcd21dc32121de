//! Build artifact packaging through an external archiver.

use std::path::{Path, PathBuf};

use crate::discovery::{check_output, CommandSpec, Executor, PackageConfig};
use crate::error::{RegenError, Result};
use crate::output::{display_path, Printer};

/// Resolved packaging request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRequest {
    pub archiver: String,
    pub output: PathBuf,
    pub artifact: PathBuf,
}

impl PackageRequest {
    /// Merge CLI overrides onto manifest defaults. Relative paths resolve
    /// against `root`.
    pub fn resolve(
        config: &PackageConfig,
        root: &Path,
        artifact: Option<PathBuf>,
        output: Option<PathBuf>,
        archiver: Option<String>,
    ) -> Result<Self> {
        let artifact = artifact
            .or_else(|| config.artifact.clone())
            .ok_or_else(|| RegenError::Build {
                message: "No artifact to package".to_string(),
                help: Some("Pass an artifact path or set `package.artifact` in regen.yaml".to_string()),
            })?;

        Ok(Self {
            archiver: archiver.unwrap_or_else(|| config.archiver.clone()),
            output: root.join(output.unwrap_or_else(|| config.output.clone())),
            artifact: root.join(artifact),
        })
    }

    /// The archiver invocation: `<archiver...> <output> <artifact>`.
    pub fn command(&self) -> Result<CommandSpec> {
        Ok(CommandSpec::parse(&self.archiver)?
            .arg(self.output.to_string_lossy())
            .arg(self.artifact.to_string_lossy()))
    }
}

/// Run the archiver. Its stdout is returned for the caller to print;
/// stderr from a successful run is reported as a warning.
pub fn package(request: &PackageRequest, executor: &mut dyn Executor, printer: &Printer) -> Result<String> {
    if !request.artifact.exists() {
        return Err(RegenError::Io {
            path: request.artifact.clone(),
            message: "Artifact not found".to_string(),
        });
    }

    let command = request.command()?;
    printer.status("Packaging", &display_path(&request.artifact));

    let output = executor.execute(&command)?;
    check_output(&command, &output)?;

    let stderr = output.stderr.trim();
    if !stderr.is_empty() {
        printer.warning("stderr", stderr);
    }

    printer.success("Packaged", &display_path(&request.output));
    Ok(output.stdout)
}
