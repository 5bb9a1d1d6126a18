//! Single-template Tera engine with custom filter registration.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tera::{Context, Tera};

use super::filters;

/// Suffix of template files; `TextButton.swift.tera` renders `TextButton.swift`.
pub const TEMPLATE_EXTENSION: &str = "tera";

/// One compiled template, ready to render any number of configs.
#[derive(Debug)]
pub struct TemplateEngine {
    tera: Tera,
    name: String,
}

impl TemplateEngine {
    /// Read and compile the template at `path`.
    pub fn from_file(path: &Path) -> Result<Self, EngineError> {
        let raw = std::fs::read_to_string(path).map_err(|e| EngineError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_raw(&name, &raw)
    }

    /// Compile template text registered under `name`.
    pub fn from_raw(name: &str, raw: &str) -> Result<Self, EngineError> {
        let mut tera = Tera::default();

        // Register custom filters
        tera.register_filter("snake_case", filters::snake_case);
        tera.register_filter("pascal_case", filters::pascal_case);
        tera.register_filter("camel_case", filters::camel_case);
        tera.register_filter("swift_string", filters::swift_string);

        tera.add_raw_template(name, raw)
            .map_err(|e| EngineError::Compile {
                template: name.to_string(),
                source: e,
            })?;

        Ok(Self {
            tera,
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render with the fields of `record` as top-level variables.
    pub fn render<T: Serialize>(&self, record: &T) -> Result<String, EngineError> {
        let context = Context::from_serialize(record).map_err(|e| EngineError::Render {
            template: self.name.clone(),
            source: e,
        })?;
        self.tera
            .render(&self.name, &context)
            .map_err(|e| EngineError::Render {
                template: self.name.clone(),
                source: e,
            })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("couldn't get template {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to compile template '{template}': {source}")]
    Compile {
        template: String,
        source: tera::Error,
    },
    #[error("render error for '{template}': {source}")]
    Render {
        template: String,
        source: tera::Error,
    },
}
