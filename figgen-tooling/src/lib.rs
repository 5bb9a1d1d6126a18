//! Translation and rendering tooling for figgen.
//!
//! # Modules
//!
//! - [`translator`]: keyword tagging and node → component config extraction
//! - [`template_engine`]: Tera rendering of component templates
//! - [`assets`]: regex search and verbatim copy of template assets

pub mod assets;
pub mod template_engine;
pub mod translator;

pub use template_engine::{EngineError, TemplateEngine};
pub use translator::{translate, ComponentConfig, ComponentKind, TranslateError};
