//! Blob transfer: make every model blob of a manifest exist on the remote
//!
//! Blobs are checked and uploaded one at a time, in manifest order. An upload
//! that fails is not resumed; the next run starts it again from byte zero.

pub mod progress;

pub use progress::{upload_progress_bar, ProgressReader};

use crate::error::{Result, SyncError};
use crate::remote::RemoteClient;
use crate::store::{Manifest, ModelStore};
use tokio_util::io::ReaderStream;

/// Prefix written in front of `sha256:<hash>` in generated `FROM` lines
pub const REMOTE_BLOB_PLACEHOLDER: &str = "@";

/// What happened to a single blob
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlobOutcome {
    /// The remote already had it
    Skipped,
    Uploaded,
}

/// Modelfile line referencing a blob on the remote
#[must_use]
pub fn from_line(hash: &str) -> String {
    format!("FROM {REMOTE_BLOB_PLACEHOLDER}sha256:{hash}")
}

/// Uploads the blobs of a local model store to a remote server
#[derive(Debug)]
pub struct BlobUploader<'a> {
    client: &'a RemoteClient,
    store: &'a ModelStore,
}

impl<'a> BlobUploader<'a> {
    #[must_use]
    pub fn new(client: &'a RemoteClient, store: &'a ModelStore) -> Self {
        Self { client, store }
    }

    /// Sync every transferable layer of `manifest`.
    ///
    /// Returns one `FROM` line per layer, in manifest order, whether the
    /// blob was uploaded or already present.
    pub async fn sync_layers(&self, manifest: &Manifest) -> Result<String> {
        let mut from_lines = String::new();

        for layer in manifest.transferable_layers() {
            let hash = layer.hash()?;
            self.sync_blob(hash).await?;
            from_lines.push_str(&from_line(hash));
            from_lines.push('\n');
        }

        Ok(from_lines)
    }

    /// Upload one blob unless the remote already has it
    pub async fn sync_blob(&self, hash: &str) -> Result<BlobOutcome> {
        if self.client.blob_exists(hash).await? {
            println!("skipping upload for already created layer sha256:{hash}");
            return Ok(BlobOutcome::Skipped);
        }

        println!("uploading layer sha256:{hash}");
        self.upload(hash).await?;
        println!("success uploading layer.");

        Ok(BlobOutcome::Uploaded)
    }

    async fn upload(&self, hash: &str) -> Result<()> {
        let path = self.store.blob_path(hash);
        let file = tokio::fs::File::open(&path).await.map_err(|e| {
            SyncError::UploadFailed(format!("cannot read blob {}: {e}", path.display()))
        })?;
        let total = file.metadata().await?.len();

        tracing::info!("Uploading {} ({total} bytes)", path.display());

        let pb = upload_progress_bar(total);
        let reader = ProgressReader::new(file, pb.clone());
        let body = reqwest::Body::wrap_stream(ReaderStream::new(reader));

        let result = self.client.upload_blob(hash, body, total).await;
        pb.finish();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_line() {
        assert_eq!(from_line("abc123"), "FROM @sha256:abc123");
    }
}
