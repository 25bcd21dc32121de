//! Generator registries.
//!
//! A [`GeneratorRegistry`] maps region names to text-producing functions for
//! one file. A [`GenerationPlan`] groups registries by target file.
//!
//! # Example
//!
//! ```ignore
//! use regen::registry::{GenerationPlan, GeneratorRegistry};
//!
//! let mut registry = GeneratorRegistry::new();
//! registry.register("workers", || Ok(worker_variants().join(" ")));
//!
//! let mut plan = GenerationPlan::new();
//! plan.add_target("../src/types_game.rs", registry);
//! plan.run()?;
//! ```

mod generators;
mod plan;

pub use generators::{Generator, GeneratorRegistry};
pub use plan::{GenerationPlan, Target};
