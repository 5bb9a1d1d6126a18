//! Document sources.
//!
//! [`DocumentSource`] is the seam between the generator and wherever the
//! document tree comes from: the Figma REST API ([`FigmaClient`]) or a
//! snapshot written by an earlier run ([`SnapshotSource`]).

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use secrecy::ExposeSecret;
use tracing::{debug, info};

use crate::config::{FigmaConfig, TOKEN_HEADER};
use crate::document::{FigmaFile, Node, NodeKind};
use crate::error::{ClientError, ClientResult};
use crate::keywords::KeywordSet;
use crate::matcher;

#[async_trait]
pub trait DocumentSource: Send + Sync + std::fmt::Debug {
    /// Retrieve the whole document, writing the raw payload to `snapshot`
    /// when one is given.
    async fn fetch_file(&self, snapshot: Option<&Path>) -> ClientResult<FigmaFile>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;

    /// Every node of `kind` under the top-level pages whose name matches at
    /// least one keyword, in document order.
    async fn fetch_all(
        &self,
        kind: &NodeKind,
        keywords: &KeywordSet,
        snapshot: Option<&Path>,
    ) -> ClientResult<Vec<Node>> {
        let file = self.fetch_file(snapshot).await?;
        let nodes = collect_matching(&file, kind, keywords);
        info!(
            source = %self.describe(),
            %kind,
            matched = nodes.len(),
            "Collected candidate nodes"
        );
        Ok(nodes)
    }
}

/// Nodes of `kind` below the document's top-level children, filtered to
/// names matching any keyword.
pub fn collect_matching(file: &FigmaFile, kind: &NodeKind, keywords: &KeywordSet) -> Vec<Node> {
    matcher::find_all(&file.document.children, kind)
        .into_iter()
        .filter(|node| {
            let keep = keywords.matches_any(&node.name);
            if !keep {
                debug!(name = %node.name, "Node matches no keyword");
            }
            keep
        })
        .cloned()
        .collect()
}

/// Trimmed payload, or [`ClientError::NoDocument`] for blank and `null` bodies.
fn non_empty_body(body: &str) -> ClientResult<&str> {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(ClientError::NoDocument);
    }
    Ok(trimmed)
}

/// Decode a raw files payload. Blank and `null` bodies mean no document.
pub fn decode_document(body: &str) -> ClientResult<FigmaFile> {
    Ok(serde_json::from_str(non_empty_body(body)?)?)
}

async fn write_snapshot(path: &Path, body: &str) -> ClientResult<()> {
    tokio::fs::write(path, body)
        .await
        .map_err(|e| ClientError::snapshot(path, e))?;
    debug!(path = %path.display(), bytes = body.len(), "Wrote document snapshot");
    Ok(())
}

/// Figma REST API client. Each fetch issues exactly one request.
#[derive(Debug)]
pub struct FigmaClient {
    config: FigmaConfig,
    http: reqwest::Client,
}

impl FigmaClient {
    pub fn new(config: FigmaConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("figgen/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &FigmaConfig {
        &self.config
    }
}

#[async_trait]
impl DocumentSource for FigmaClient {
    async fn fetch_file(&self, snapshot: Option<&Path>) -> ClientResult<FigmaFile> {
        let url = self.config.file_url();
        debug!(%url, "Fetching figma file");

        let body = self
            .http
            .get(&url)
            .header(TOKEN_HEADER, self.config.access_token.expose_secret())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        // Written before decoding: undecodable payloads are kept too.
        non_empty_body(&body)?;
        if let Some(path) = snapshot {
            write_snapshot(path, &body).await?;
        }
        decode_document(&body)
    }

    fn describe(&self) -> String {
        format!("figma file {}", self.config.file_key)
    }
}

/// Reads a document previously persisted by a remote fetch.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    path: PathBuf,
}

impl SnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DocumentSource for SnapshotSource {
    async fn fetch_file(&self, snapshot: Option<&Path>) -> ClientResult<FigmaFile> {
        let body = tokio::fs::read_to_string(&self.path).await?;
        non_empty_body(&body)?;
        if let Some(path) = snapshot.filter(|p| *p != self.path.as_path()) {
            write_snapshot(path, &body).await?;
        }
        decode_document(&body)
    }

    fn describe(&self) -> String {
        format!("snapshot {}", self.path.display())
    }
}
