//! Resolved generator settings.
//!
//! Flags, environment variables and `.figgen.toml` are merged once at
//! startup into a [`GenerateConfig`]. Missing credentials are reported here
//! rather than at the first request.

use std::path::{Path, PathBuf};

use figgen_client::{ClientError, FigmaConfig, KeywordSet, NodeKind, DEFAULT_API_BASE_URL};
use secrecy::SecretString;

use crate::cli_config::{expand_path, CliConfig};

pub const FILE_KEY_ENV: &str = "FIGMA_FILE_KEY";
pub const ACCESS_TOKEN_ENV: &str = "FIGMA_ACCESS_TOKEN";
pub const API_BASE_URL_ENV: &str = "FIGMA_API_BASE_URL";
pub const TEMPLATE_PATH_ENV: &str = "TEMPLATE_PATH";
pub const OUTPUT_PATH_ENV: &str = "OUTPUT_PATH";

pub const DEFAULT_KEYWORDS: &[&str] = &["textButton"];
pub const DEFAULT_NODE_KIND: &str = "COMPONENT";
pub const DEFAULT_TEMPLATE_PATH: &str = "templates";
pub const DEFAULT_OUTPUT_PATH: &str = "generated";

/// Unmerged settings as they arrive from flags and the environment.
#[derive(Debug, Default)]
pub struct RawSettings {
    pub file_key: Option<String>,
    pub access_token: Option<SecretString>,
    pub api_base_url: Option<String>,
    pub template_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub keywords: Vec<String>,
    pub node_kind: Option<String>,
    pub from_snapshot: Option<PathBuf>,
    pub write_snapshot: bool,
}

/// Where the document comes from.
#[derive(Debug, Clone)]
pub enum SourceSettings {
    Remote(FigmaConfig),
    Snapshot(PathBuf),
}

/// Fully validated settings for one generator run.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub source: SourceSettings,
    pub template_dir: PathBuf,
    pub output_dir: PathBuf,
    pub keywords: KeywordSet,
    pub node_kind: NodeKind,
    pub write_snapshot: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing {setting}: set {env} or pass --{flag}")]
    MissingSetting {
        setting: &'static str,
        env: &'static str,
        flag: &'static str,
    },
    #[error("at least one keyword is required")]
    NoKeywords,
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl GenerateConfig {
    /// Merge `raw` over `file`, resolving relative paths against `cwd`.
    pub fn resolve(raw: RawSettings, file: &CliConfig, cwd: &Path) -> Result<Self, ConfigError> {
        let keyword_sources: Vec<String> = if !raw.keywords.is_empty() {
            raw.keywords
        } else if !file.keywords.is_empty() {
            file.keywords.clone()
        } else {
            DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect()
        };
        if keyword_sources.iter().all(|k| k.trim().is_empty()) {
            return Err(ConfigError::NoKeywords);
        }
        let keywords = KeywordSet::new(keyword_sources.iter().filter(|k| !k.trim().is_empty()))?;

        let node_kind = NodeKind::from(
            raw.node_kind
                .or_else(|| file.node_kind.clone())
                .unwrap_or_else(|| DEFAULT_NODE_KIND.to_string()),
        );

        let template_dir = resolve_dir(
            raw.template_path,
            file.template_path.as_deref(),
            DEFAULT_TEMPLATE_PATH,
            cwd,
        );
        let output_dir = resolve_dir(
            raw.output_path,
            file.output_path.as_deref(),
            DEFAULT_OUTPUT_PATH,
            cwd,
        );

        let source = match raw.from_snapshot {
            Some(path) => SourceSettings::Snapshot(absolutize(path, cwd)),
            None => {
                let file_key = raw.file_key.ok_or(ConfigError::MissingSetting {
                    setting: "figma file key",
                    env: FILE_KEY_ENV,
                    flag: "file-key",
                })?;
                let access_token = raw.access_token.ok_or(ConfigError::MissingSetting {
                    setting: "figma access token",
                    env: ACCESS_TOKEN_ENV,
                    flag: "access-token",
                })?;
                let base_url = raw
                    .api_base_url
                    .or_else(|| file.api_base_url.clone())
                    .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
                SourceSettings::Remote(
                    FigmaConfig::new(file_key, access_token)?.with_base_url(base_url),
                )
            }
        };

        Ok(Self {
            source,
            template_dir,
            output_dir,
            keywords,
            node_kind,
            write_snapshot: raw.write_snapshot,
        })
    }
}

fn resolve_dir(flag: Option<PathBuf>, file: Option<&str>, default: &str, cwd: &Path) -> PathBuf {
    let path = flag
        .or_else(|| file.map(expand_path))
        .unwrap_or_else(|| PathBuf::from(default));
    absolutize(path, cwd)
}

fn absolutize(path: PathBuf, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn remote_raw() -> RawSettings {
        RawSettings {
            file_key: Some("abc123".to_string()),
            access_token: Some(SecretString::from("token".to_string())),
            write_snapshot: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config =
            GenerateConfig::resolve(remote_raw(), &CliConfig::default(), Path::new("/work")).unwrap();
        assert_eq!(config.template_dir, PathBuf::from("/work/templates"));
        assert_eq!(config.output_dir, PathBuf::from("/work/generated"));
        assert_eq!(config.node_kind, NodeKind::Component);
        assert_eq!(config.keywords.sources().collect::<Vec<_>>(), vec!["textButton"]);
        match config.source {
            SourceSettings::Remote(figma) => {
                assert_eq!(figma.file_key, "abc123");
                assert_eq!(figma.base_url, DEFAULT_API_BASE_URL);
                assert_eq!(figma.access_token.expose_secret(), "token");
            }
            SourceSettings::Snapshot(_) => panic!("Expected remote source"),
        }
    }

    #[test]
    fn test_missing_file_key_is_fatal() {
        let raw = RawSettings {
            file_key: None,
            ..remote_raw()
        };
        let err = GenerateConfig::resolve(raw, &CliConfig::default(), Path::new("/work"))
            .unwrap_err();
        assert!(err.to_string().contains(FILE_KEY_ENV));
    }

    #[test]
    fn test_missing_token_is_fatal() {
        let raw = RawSettings {
            access_token: None,
            ..remote_raw()
        };
        let err = GenerateConfig::resolve(raw, &CliConfig::default(), Path::new("/work"))
            .unwrap_err();
        assert!(err.to_string().contains(ACCESS_TOKEN_ENV));
    }

    #[test]
    fn test_snapshot_source_needs_no_credentials() {
        let raw = RawSettings {
            from_snapshot: Some(PathBuf::from("fixtures/figma.json")),
            ..Default::default()
        };
        let config =
            GenerateConfig::resolve(raw, &CliConfig::default(), Path::new("/work")).unwrap();
        match config.source {
            SourceSettings::Snapshot(path) => {
                assert_eq!(path, PathBuf::from("/work/fixtures/figma.json"))
            }
            SourceSettings::Remote(_) => panic!("Expected snapshot source"),
        }
    }

    #[test]
    fn test_flags_override_file() {
        let file = CliConfig {
            keywords: vec!["card".to_string()],
            node_kind: Some("FRAME".to_string()),
            api_base_url: Some("http://file".to_string()),
            template_path: Some("/file/templates".to_string()),
            output_path: Some("/file/out".to_string()),
        };
        let raw = RawSettings {
            keywords: vec!["textButton".to_string()],
            node_kind: Some("INSTANCE".to_string()),
            api_base_url: Some("http://flag".to_string()),
            template_path: Some(PathBuf::from("/flag/templates")),
            ..remote_raw()
        };
        let config = GenerateConfig::resolve(raw, &file, Path::new("/work")).unwrap();
        assert_eq!(config.keywords.sources().collect::<Vec<_>>(), vec!["textButton"]);
        assert_eq!(config.node_kind, NodeKind::Instance);
        assert_eq!(config.template_dir, PathBuf::from("/flag/templates"));
        assert_eq!(config.output_dir, PathBuf::from("/file/out"));
        match config.source {
            SourceSettings::Remote(figma) => assert_eq!(figma.base_url, "http://flag"),
            SourceSettings::Snapshot(_) => panic!("Expected remote source"),
        }
    }

    #[test]
    fn test_file_keywords_used_when_no_flags() {
        let file = CliConfig {
            keywords: vec!["textButton".to_string(), "iconButton".to_string()],
            ..Default::default()
        };
        let config = GenerateConfig::resolve(remote_raw(), &file, Path::new("/work")).unwrap();
        assert_eq!(config.keywords.len(), 2);
    }

    #[test]
    fn test_blank_keywords_rejected() {
        let raw = RawSettings {
            keywords: vec!["  ".to_string()],
            ..remote_raw()
        };
        let err = GenerateConfig::resolve(raw, &CliConfig::default(), Path::new("/work"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::NoKeywords));
    }

    #[test]
    fn test_invalid_keyword_rejected() {
        let raw = RawSettings {
            keywords: vec!["text(".to_string()],
            ..remote_raw()
        };
        let err = GenerateConfig::resolve(raw, &CliConfig::default(), Path::new("/work"))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Client(ClientError::InvalidKeyword { .. })
        ));
    }
}
