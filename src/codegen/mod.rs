//! Marker-based code generation.
//!
//! Source files opt in to generation by carrying marker comments:
//!
//! ```text
//! enum Texture {
//!     // [code-gen] workers
//!     BlueWorkerIcon, BlueWorkerIdleDown,
//!     // [code-gen] end
//! }
//! ```
//!
//! Everything between a marker and its end marker belongs to the generator
//! and is replaced on every run. Everything else is left alone.
//!
//! # Example
//!
//! ```ignore
//! use regen::codegen::regenerate;
//!
//! regenerate(Path::new("src/types_game.rs"), |name| {
//!     Ok(match name {
//!         "workers" => "BlueWorkerIcon,\nRedWorkerIcon,".to_string(),
//!         _ => String::new(),
//!     })
//! })?;
//! ```

mod case;
mod driver;
mod rewriter;
mod scanner;

pub use case::{capitalize, pascal_to_snake};
pub use driver::{regenerate, regenerate_str, Outcome, LINE_ENDING};
pub use rewriter::reindent;
pub use scanner::{classify, scan, LineKind, Marker, Region, Segment, END_MARKER, MARKER};
