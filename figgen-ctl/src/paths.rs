//! Layout of the generated output directory.

use std::path::{Path, PathBuf};

pub const DOCUMENT_SNAPSHOT_FILE: &str = "figma.json";
pub const COMPONENTS_DIR: &str = "components";
pub const MODELS_DIR: &str = "models";

/// Name of the template directory copied verbatim into [`MODELS_DIR`].
pub const TEMPLATE_MODELS_DIR: &str = "Models";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    DocumentSnapshot,
    Components,
    Models,
}

#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, kind: OutputKind) -> PathBuf {
        match kind {
            OutputKind::DocumentSnapshot => self.root.join(DOCUMENT_SNAPSHOT_FILE),
            OutputKind::Components => self.root.join(COMPONENTS_DIR),
            OutputKind::Models => self.root.join(MODELS_DIR),
        }
    }

    /// Create the directory for `kind` (or its parent, for files) and
    /// return the path.
    pub fn ensure(&self, kind: OutputKind) -> std::io::Result<PathBuf> {
        let path = self.path(kind);
        let dir = match kind {
            OutputKind::DocumentSnapshot => self.root.clone(),
            OutputKind::Components | OutputKind::Models => path.clone(),
        };
        std::fs::create_dir_all(&dir)?;
        Ok(path)
    }
}
