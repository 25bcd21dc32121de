//! Region name to generator function mapping.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::Result;

/// A function producing the replacement text for one region.
pub type Generator = Box<dyn Fn() -> Result<String>>;

/// Generators for the regions of a single target file.
///
/// Looking up a name with no registered generator yields empty text,
/// which leaves that region untouched.
#[derive(Default)]
pub struct GeneratorRegistry {
    generators: BTreeMap<String, Generator>,
}

impl GeneratorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator for a region, replacing any previous one.
    pub fn register<F>(&mut self, name: impl Into<String>, generator: F) -> &mut Self
    where
        F: Fn() -> Result<String> + 'static,
    {
        self.generators.insert(name.into(), Box::new(generator));
        self
    }

    /// Register a region with fixed text.
    pub fn register_text(&mut self, name: impl Into<String>, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        self.register(name, move || Ok(text.clone()))
    }

    /// Check whether a region has a generator.
    pub fn contains(&self, name: &str) -> bool {
        self.generators.contains_key(name)
    }

    /// Registered region names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.generators.keys().map(|s| s.as_str())
    }

    /// Number of registered regions.
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Check if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Produce text for a region. Unknown names give an empty string.
    pub fn render(&self, name: &str) -> Result<String> {
        match self.generators.get(name) {
            Some(generator) => generator(),
            None => Ok(String::new()),
        }
    }
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("regions", &self.generators.keys().collect::<Vec<_>>())
            .finish()
    }
}
