//! Fetch → translate → render.
//!
//! Stages run sequentially and stop at the first error. Files written by
//! earlier stages are left in place when a later stage fails.

use std::path::PathBuf;

use figgen_client::{ClientError, DocumentSource, FigmaClient, Node, SnapshotSource};
use figgen_tooling::assets::{self, AssetError};
use figgen_tooling::template_engine::TEMPLATE_EXTENSION;
use figgen_tooling::{translate, ComponentConfig, EngineError, TemplateEngine, TranslateError};
use tracing::{debug, info};

use crate::paths::{OutputKind, OutputLayout, TEMPLATE_MODELS_DIR};
use crate::settings::{GenerateConfig, SourceSettings};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Translate(#[from] TranslateError),
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl PipelineError {
    fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationReport {
    pub matched_nodes: usize,
    pub models_copied: usize,
    pub components: Vec<PathBuf>,
    pub snapshot: Option<PathBuf>,
}

#[derive(Debug)]
pub struct Pipeline {
    config: GenerateConfig,
    source: Box<dyn DocumentSource>,
    layout: OutputLayout,
}

impl Pipeline {
    /// Build a pipeline reading from the source named in `config`.
    pub fn new(config: GenerateConfig) -> Result<Self, PipelineError> {
        let source: Box<dyn DocumentSource> = match &config.source {
            SourceSettings::Remote(figma) => Box::new(FigmaClient::new(figma.clone())?),
            SourceSettings::Snapshot(path) => Box::new(SnapshotSource::new(path.clone())),
        };
        Ok(Self::with_source(config, source))
    }

    pub fn with_source(config: GenerateConfig, source: Box<dyn DocumentSource>) -> Self {
        let layout = OutputLayout::new(config.output_dir.clone());
        Self {
            config,
            source,
            layout,
        }
    }

    pub fn config(&self) -> &GenerateConfig {
        &self.config
    }

    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    fn snapshot_path(&self) -> Result<Option<PathBuf>, PipelineError> {
        if !self.config.write_snapshot {
            return Ok(None);
        }
        let path = self
            .layout
            .ensure(OutputKind::DocumentSnapshot)
            .map_err(|e| PipelineError::write(self.layout.root(), e))?;
        Ok(Some(path))
    }

    /// Candidate nodes from the configured source, persisting the payload
    /// when snapshots are enabled.
    pub async fn fetch(&self) -> Result<Vec<Node>, PipelineError> {
        let snapshot = self.snapshot_path()?;
        let nodes = self
            .source
            .fetch_all(
                &self.config.node_kind,
                &self.config.keywords,
                snapshot.as_deref(),
            )
            .await?;
        Ok(nodes)
    }

    /// Copy model assets and render one component file per config.
    pub fn generate(&self, configs: &[ComponentConfig]) -> Result<GenerationReport, PipelineError> {
        let template_dir = &self.config.template_dir;

        let models_src = assets::find_dir(
            template_dir,
            &assets::exact_name_pattern(TEMPLATE_MODELS_DIR),
        )?;
        let models_dst = self
            .layout
            .ensure(OutputKind::Models)
            .map_err(|e| PipelineError::write(self.layout.path(OutputKind::Models), e))?;
        let models_copied = assets::copy_dir(&models_src, &models_dst)?;
        info!(
            from = %models_src.display(),
            to = %models_dst.display(),
            files = models_copied,
            "Copied model assets"
        );

        let components_dir = self
            .layout
            .ensure(OutputKind::Components)
            .map_err(|e| PipelineError::write(self.layout.path(OutputKind::Components), e))?;

        let mut components = Vec::with_capacity(configs.len());
        for config in configs {
            let template_name = config.template_name();
            let template_file = format!("{template_name}.{TEMPLATE_EXTENSION}");
            let template_path =
                assets::find_file(template_dir, &assets::exact_name_pattern(&template_file))?;
            debug!(keyword = config.keyword(), template = %template_path.display(), "Rendering component");

            let engine = TemplateEngine::from_file(&template_path)?;
            let rendered = engine.render(config)?;

            let out = components_dir.join(template_name);
            std::fs::write(&out, rendered).map_err(|e| PipelineError::write(&out, e))?;
            info!(keyword = config.keyword(), path = %out.display(), "Wrote component");
            components.push(out);
        }

        Ok(GenerationReport {
            models_copied,
            components,
            ..Default::default()
        })
    }

    /// Run every stage in order.
    pub async fn run(&self) -> Result<GenerationReport, PipelineError> {
        info!(source = %self.source.describe(), "Fetching document");
        let nodes = self.fetch().await?;

        let configs = translate(&nodes, &self.config.keywords)?;
        info!(
            candidates = nodes.len(),
            records = configs.len(),
            "Translated nodes"
        );

        let mut report = self.generate(&configs)?;
        report.matched_nodes = nodes.len();
        if self.config.write_snapshot {
            report.snapshot = Some(self.layout.path(OutputKind::DocumentSnapshot));
        }
        Ok(report)
    }
}
