//! Figma access for figgen.
//!
//! # Modules
//!
//! - [`document`]: serde model of the Figma file payload
//! - [`matcher`]: post-order search over node trees
//! - [`keywords`]: case-insensitive keyword patterns matched against node names
//! - [`client`]: the [`DocumentSource`] seam with REST and snapshot implementations
//! - [`config`]: API connection settings
//! - [`error`]: [`ClientError`] and [`ClientResult`]

pub mod client;
pub mod config;
pub mod document;
pub mod error;
pub mod keywords;
pub mod matcher;

pub use client::{DocumentSource, FigmaClient, SnapshotSource};
pub use config::{FigmaConfig, DEFAULT_API_BASE_URL};
pub use document::{FigmaFile, Node, NodeKind, Paint, Rect, Rgba, TypeStyle};
pub use error::{ClientError, ClientResult};
pub use keywords::KeywordSet;
