//! Library side of the `figgen` command.
//!
//! The binary only parses arguments and prints; everything it runs lives
//! here so integration tests can drive the pipeline directly.

pub mod cli_config;
pub mod paths;
pub mod pipeline;
pub mod settings;

pub use paths::{OutputKind, OutputLayout};
pub use pipeline::{GenerationReport, Pipeline, PipelineError};
pub use settings::{ConfigError, GenerateConfig, RawSettings, SourceSettings};
