//! Local Ollama model store layout
//!
//! ```text
//! <root>/manifests/registry.ollama.ai/library/<name>/<tag>
//! <root>/manifests/registry.ollama.ai/<namespace>/<name>/<tag>
//! <root>/manifests/hub/<namespace>/<name>/<tag>
//! <root>/blobs/sha256-<hex>
//! ```

pub mod manifest;

pub use manifest::{Layer, Manifest};

use crate::error::{Result, SyncError};
use std::path::PathBuf;

/// Registry host directory for models pulled from the default registry
pub const DEFAULT_REGISTRY: &str = "registry.ollama.ai";

/// Namespace of official models on the default registry
pub const DEFAULT_NAMESPACE: &str = "library";

/// Namespace whose manifests are stored without a registry directory
pub const HUB_NAMESPACE: &str = "hub";

/// Namespace of a model identifier: the text before the first `/`, or `""`
#[must_use]
pub fn model_namespace(model: &str) -> &str {
    model.split_once('/').map_or("", |(namespace, _)| namespace)
}

/// Read-only view of a local model store
#[derive(Debug, Clone)]
pub struct ModelStore {
    root: PathBuf,
}

impl ModelStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the manifest for `model` (`[namespace/]name[:tag]`)
    #[must_use]
    pub fn manifest_path(&self, model: &str) -> PathBuf {
        let mut path = self.root.join("manifests");

        match model_namespace(model) {
            HUB_NAMESPACE => {}
            "" => path.extend([DEFAULT_REGISTRY, DEFAULT_NAMESPACE]),
            _ => path.push(DEFAULT_REGISTRY),
        }

        // Both `/` and the tag's `:` become path separators
        path.extend(model.split(['/', ':']));
        path
    }

    /// Manifest path for `model`, which must exist as a file
    pub fn locate_manifest(&self, model: &str) -> Result<PathBuf> {
        let path = self.manifest_path(model);
        if !path.is_file() {
            return Err(SyncError::ManifestNotFound(path));
        }
        Ok(path)
    }

    /// Locate and load the manifest for `model`
    pub fn load_manifest(&self, model: &str) -> Result<Manifest> {
        let path = self.locate_manifest(model)?;
        tracing::debug!("Loading manifest {}", path.display());
        Manifest::load(&path)
    }

    /// Path of the blob file with the given hex hash
    #[must_use]
    pub fn blob_path(&self, hash: &str) -> PathBuf {
        self.root.join("blobs").join(format!("sha256-{hash}"))
    }
}
