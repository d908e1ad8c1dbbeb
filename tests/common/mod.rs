//! Shared fixtures: a fake model store on disk and a canned exporter

#![allow(dead_code)]

use async_trait::async_trait;
use ollama_rsync::error::{Result, SyncError};
use ollama_rsync::modelfile::DefinitionExporter;
use ollama_rsync::store::ModelStore;
use std::fs;
use std::sync::Mutex;
use tempfile::TempDir;

pub const MODEL_MEDIA_TYPE: &str = "application/vnd.ollama.image.model";
pub const TEMPLATE_MEDIA_TYPE: &str = "application/vnd.ollama.image.template";

/// 64-hex-character hash built from a short seed
pub fn hash(seed: &str) -> String {
    format!("{seed:0<64}")
}

/// Model store in a temporary directory
pub struct TestStore {
    pub dir: TempDir,
    pub store: ModelStore,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(dir.path().join("blobs")).unwrap();
        let store = ModelStore::new(dir.path());
        Self { dir, store }
    }

    /// Write a manifest for `model` with `(media type, hash)` layers
    pub fn add_manifest(&self, model: &str, layers: &[(&str, &str)]) {
        let layers: Vec<serde_json::Value> = layers
            .iter()
            .map(|(media_type, hash)| {
                serde_json::json!({
                    "mediaType": media_type,
                    "digest": format!("sha256:{hash}"),
                    "size": 0,
                })
            })
            .collect();
        let manifest = serde_json::json!({ "schemaVersion": 2, "layers": layers });

        let path = self.store.manifest_path(model);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, manifest.to_string()).unwrap();
    }

    pub fn add_blob(&self, hash: &str, content: &[u8]) {
        fs::write(self.store.blob_path(hash), content).unwrap();
    }
}

/// Exporter returning a fixed Modelfile and recording what it was asked for
pub struct CannedExporter {
    output: std::result::Result<String, String>,
    pub requested: Mutex<Vec<String>>,
}

impl CannedExporter {
    pub fn new(output: &str) -> Self {
        Self {
            output: Ok(output.to_string()),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            output: Err("exit status: 1".to_string()),
            requested: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl DefinitionExporter for CannedExporter {
    async fn export_definition(&self, model: &str) -> Result<String> {
        self.requested.lock().unwrap().push(model.to_string());
        self.output.clone().map_err(SyncError::Export)
    }
}
