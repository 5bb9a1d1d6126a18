//! Command handlers for the figgen CLI.

pub(crate) mod generate;
pub(crate) mod list;

pub(crate) use generate::handle_generate_command;
pub(crate) use list::handle_list_command;

use anyhow::Context;
use figgen_ctl::cli_config::load_cli_config;
use figgen_ctl::{GenerateConfig, RawSettings};

/// Merge flags with `.figgen.toml` relative to the working directory.
pub(crate) fn resolve_config(raw: RawSettings) -> anyhow::Result<GenerateConfig> {
    let cwd = std::env::current_dir().context("failed to read the working directory")?;
    let file = load_cli_config(&cwd);
    GenerateConfig::resolve(raw, &file, &cwd).context("invalid configuration")
}
