//! Tera-based rendering of component templates.

mod engine;
mod filters;

pub use engine::{EngineError, TemplateEngine, TEMPLATE_EXTENSION};
