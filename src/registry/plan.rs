//! Generation plans: registries grouped by target file.

use std::path::{Path, PathBuf};

use crate::codegen::{regenerate, Outcome};
use crate::error::Result;

use super::GeneratorRegistry;

/// One target file and the generators for its regions.
#[derive(Debug)]
pub struct Target {
    pub path: PathBuf,
    pub registry: GeneratorRegistry,
}

/// Ordered list of target files to regenerate.
#[derive(Debug, Default)]
pub struct GenerationPlan {
    targets: Vec<Target>,
}

impl GenerationPlan {
    /// Create an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a target file. Targets run in insertion order.
    pub fn add_target(&mut self, path: impl Into<PathBuf>, registry: GeneratorRegistry) {
        self.targets.push(Target {
            path: path.into(),
            registry,
        });
    }

    /// All targets in run order.
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Check if the plan has no targets.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Regenerate every target in order, stopping at the first error.
    ///
    /// Files already written before an error are not restored.
    pub fn run(&self) -> Result<Vec<(&Path, Outcome)>> {
        let mut outcomes = Vec::with_capacity(self.targets.len());

        for target in &self.targets {
            let outcome = regenerate(&target.path, |name| target.registry.render(name))?;
            outcomes.push((target.path.as_path(), outcome));
        }

        Ok(outcomes)
    }
}
