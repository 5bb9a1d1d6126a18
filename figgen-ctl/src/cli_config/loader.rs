//! `.figgen.toml` discovery.
//!
//! The project file beside the working directory shadows the per-user file
//! under `~/.config`. Only the first existing candidate is read; the two are
//! never merged.

use std::path::{Path, PathBuf};

use super::CliConfig;

const CONFIG_FILENAME: &str = ".figgen.toml";
const GLOBAL_CONFIG_DIR: &str = ".config";
const GLOBAL_CONFIG_FILENAME: &str = "figgen.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Config file locations for `cwd`, highest precedence first.
pub fn config_candidates(cwd: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![cwd.join(CONFIG_FILENAME)];
    if let Some(home) = home_dir() {
        candidates.push(home.join(GLOBAL_CONFIG_DIR).join(GLOBAL_CONFIG_FILENAME));
    }
    candidates
}

/// Parse the first existing candidate. `Ok(None)` when there is none.
pub fn read_config_file(cwd: &Path) -> Result<Option<(PathBuf, CliConfig)>, ConfigFileError> {
    let Some(path) = config_candidates(cwd).into_iter().find(|p| p.is_file()) else {
        return Ok(None);
    };
    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigFileError::Read {
        path: path.clone(),
        source,
    })?;
    let config = toml::from_str(&contents).map_err(|source| ConfigFileError::Parse {
        path: path.clone(),
        source,
    })?;
    Ok(Some((path, config)))
}

/// Config from the first discovered file. A broken file is reported and
/// ignored so the flags and environment still apply.
pub fn load_cli_config(cwd: &Path) -> CliConfig {
    match read_config_file(cwd) {
        Ok(Some((path, config))) => {
            tracing::debug!(path = %path.display(), "Loaded figgen config");
            config
        }
        Ok(None) => CliConfig::default(),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring figgen config file");
            CliConfig::default()
        }
    }
}

/// Resolve a leading `~/` against `HOME`; other paths pass through.
pub fn expand_path(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}
