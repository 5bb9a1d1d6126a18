//! Figma API connection settings.

use secrecy::{ExposeSecret, SecretString};

use crate::error::{ClientError, ClientResult};

/// Default REST endpoint for the Figma API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.figma.com/v1/";

/// Header carrying the personal access token.
pub const TOKEN_HEADER: &str = "X-FIGMA-TOKEN";

/// Connection settings for [`crate::FigmaClient`].
#[derive(Debug, Clone)]
pub struct FigmaConfig {
    pub base_url: String,
    pub file_key: String,
    pub access_token: SecretString,
}

impl FigmaConfig {
    /// Build a config for the public API, rejecting blank credentials.
    pub fn new(file_key: impl Into<String>, access_token: SecretString) -> ClientResult<Self> {
        let file_key = file_key.into();
        if file_key.trim().is_empty() {
            return Err(ClientError::config_error("figma file key is empty"));
        }
        if access_token.expose_secret().trim().is_empty() {
            return Err(ClientError::config_error("figma access token is empty"));
        }
        Ok(Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            file_key,
            access_token,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// `{base_url}/files/{file_key}`
    pub fn file_url(&self) -> String {
        format!(
            "{}/files/{}",
            self.base_url.trim_end_matches('/'),
            self.file_key
        )
    }
}
