//! Node → component config translation.
//!
//! Each candidate node is tagged with a keyword and handed to the component
//! that owns that keyword. Tagging follows two rules that pull in opposite
//! directions, and both are kept as observed behavior:
//!
//! - when several keywords match a node name, the last declared one wins;
//! - when a keyword already produced a config in this run, later nodes with
//!   the same keyword are skipped, so the first translated node wins.
//!
//! A component that cannot find a required descendant fails the whole
//! translation, not just the offending node.

mod button;

pub use button::{
    corner_radius, ButtonConfig, Color, Font, Insets, BUTTON_SHAPE_NAME, CORNER_RADIUS_SENTINEL,
};

use figgen_client::{KeywordSet, Node};
use serde::Serialize;
use tracing::{debug, warn};

/// Component types the generator knows how to translate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    TextButton,
}

impl ComponentKind {
    pub const ALL: &'static [ComponentKind] = &[ComponentKind::TextButton];

    /// Component owning `keyword`, if any.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.keyword() == keyword)
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::TextButton => "textButton",
        }
    }

    /// Name of the generated file; the template is `<name>.tera`.
    pub fn template_name(&self) -> &'static str {
        match self {
            Self::TextButton => "TextButton.swift",
        }
    }

    pub fn translate(&self, node: &Node) -> Result<ComponentConfig, TranslateError> {
        match self {
            Self::TextButton => {
                button::translate_text_button(node, self.keyword()).map(ComponentConfig::TextButton)
            }
        }
    }
}

/// Template data produced for one matched node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ComponentConfig {
    TextButton(ButtonConfig),
}

impl ComponentConfig {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::TextButton(_) => ComponentKind::TextButton,
        }
    }

    pub fn keyword(&self) -> &str {
        match self {
            Self::TextButton(config) => &config.keyword,
        }
    }

    pub fn template_name(&self) -> &'static str {
        self.kind().template_name()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TranslateError {
    #[error("no {expected} node within {within}")]
    MissingDescendant { expected: String, within: String },
    #[error("no absoluteBoundingBox on node {node}")]
    MissingBoundingBox { node: String },
}

/// Translate candidate nodes into at most one config per keyword.
pub fn translate(
    nodes: &[Node],
    keywords: &KeywordSet,
) -> Result<Vec<ComponentConfig>, TranslateError> {
    let mut configs: Vec<ComponentConfig> = Vec::new();

    for node in nodes {
        let Some(keyword) = keywords.last_match(&node.name) else {
            debug!(name = %node.name, "No keyword matches node, skipping");
            continue;
        };

        if configs.iter().any(|config| config.keyword() == keyword) {
            debug!(name = %node.name, keyword, "Keyword already translated, skipping");
            continue;
        }

        let Some(kind) = ComponentKind::from_keyword(keyword) else {
            warn!(name = %node.name, keyword, "No component handles keyword");
            continue;
        };

        let config = kind.translate(node)?;
        debug!(name = %node.name, keyword, "Translated node");
        configs.push(config);
    }

    Ok(configs)
}
