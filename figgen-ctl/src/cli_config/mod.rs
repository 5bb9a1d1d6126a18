//! Project configuration for `figgen`, read from `.figgen.toml`.
//!
//! Everything here is optional. Command-line flags and environment
//! variables take precedence over values from the file.

pub mod loader;

pub use loader::{expand_path, load_cli_config, read_config_file, ConfigFileError};

use serde::Deserialize;

/// Settings read from a `.figgen.toml` file.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct CliConfig {
    /// Keyword patterns tagging components (e.g. `["textButton"]`).
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Node type collected from the document. Default: `COMPONENT`.
    pub node_kind: Option<String>,

    /// Figma REST endpoint override.
    pub api_base_url: Option<String>,

    /// Directory holding `Models/` and component templates.
    pub template_path: Option<String>,

    /// Directory receiving generated files.
    pub output_path: Option<String>,
}
