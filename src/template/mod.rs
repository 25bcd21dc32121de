//! Declarative generator specs.
//!
//! A generator spec (`*.gen.yaml`) describes the regions of one or more target
//! files as templates expanded over named lists. Specs live in generator
//! folders next to script generators and compile to a
//! [`GenerationPlan`](crate::registry::GenerationPlan).

mod expand;
mod spec;

pub use expand::{Filter, Template};
pub use spec::{is_spec_file, load_plan, GeneratorSpec, RegionBody, RegionSpec, TargetSpec};
