//! Turns a resolved program tree into an ordered, nested JSON document model
//! for visual editors and other tooling.
//!
//! ```text
//! ast::File ──emit──▶ doc::Document ──serde──▶ {"root": [...]}
//! ```
pub mod ast;
pub mod doc;
pub mod config;
pub mod render;
pub mod emit;
pub mod input;
pub mod error;
pub mod cli;

pub use config::{ModelConfig, RenderStrategy};
pub use doc::Document;
pub use emit::{build_document, Emitter};
pub use error::ModelError;
pub use render::{ExprRenderer, SourceRenderer};
