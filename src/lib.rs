//! regen - Marker-based code generation for game builds
//!
//! Rewrites the regions of source files that sit under `// [code-gen]`
//! markers with text produced by named generators, and bundles the small
//! build helpers around it: generator discovery, sprite recoloring and
//! artifact packaging.

pub mod cli;
pub mod codegen;
pub mod discovery;
pub mod error;
pub mod output;
pub mod package;
pub mod recolor;
pub mod registry;
pub mod template;

pub use codegen::{capitalize, pascal_to_snake, regenerate, regenerate_str, Outcome};
pub use discovery::{discover, run_tasks, Manifest, Project, Task, TaskKind};
pub use error::{RegenError, Result};
pub use recolor::{recolor, RecolorConfig};
pub use registry::{GenerationPlan, GeneratorRegistry};
pub use template::{load_plan, GeneratorSpec};
