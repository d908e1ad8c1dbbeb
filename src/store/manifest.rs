use crate::error::{Result, SyncError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Media type prefixes of layers that carry blobs worth copying
pub const TRANSFERABLE_MEDIA_TYPES: &[&str] = &[
    "application/vnd.ollama.image.model",
    "application/vnd.ollama.image.projector",
    "application/vnd.ollama.image.adapter",
];

/// Length of the `sha256:` digest prefix
const DIGEST_PREFIX_LEN: usize = 7;

/// One content layer of a model manifest
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub digest: String,
}

impl Layer {
    /// Whether this layer references a model, projector or adapter blob
    #[must_use]
    pub fn is_transferable(&self) -> bool {
        TRANSFERABLE_MEDIA_TYPES
            .iter()
            .any(|prefix| self.media_type.starts_with(prefix))
    }

    /// Hex hash of the blob, i.e. the digest without its `sha256:` prefix
    pub fn hash(&self) -> Result<&str> {
        self.digest
            .get(DIGEST_PREFIX_LEN..)
            .filter(|hash| !hash.is_empty())
            .ok_or_else(|| SyncError::Manifest(format!("invalid layer digest '{}'", self.digest)))
    }
}

/// Model manifest as stored under `manifests/`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    #[serde(default)]
    pub layers: Vec<Layer>,
}

impl Manifest {
    /// Load manifest from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse manifest JSON
    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| SyncError::Manifest(format!("Failed to parse manifest: {e}")))
    }

    /// Layers whose blobs need to exist on the remote, in manifest order
    pub fn transferable_layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter().filter(|layer| layer.is_transferable())
    }
}
