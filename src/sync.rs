//! One copy run: manifest → blobs → Modelfile → remote create

use crate::error::{Result, SyncError};
use crate::modelfile::{build_definition, DefinitionExporter};
use crate::remote::{decode_status_line, RemoteClient, RemoteServer, StatusLine};
use crate::store::ModelStore;
use crate::transfer::BlobUploader;

/// A local model to copy and where to copy it
#[derive(Debug, Clone)]
pub struct SyncJob {
    pub model: String,
    pub remote: RemoteServer,
    pub store: ModelStore,
}

impl SyncJob {
    pub fn new(model: impl Into<String>, remote: RemoteServer, store: ModelStore) -> Self {
        Self {
            model: model.into(),
            remote,
            store,
        }
    }
}

/// Copy `job.model` to the remote, printing progress as it goes.
///
/// Returns the status lines reported by the remote create call. Every step
/// must succeed before the next one starts; a status object without a
/// `status` field means the create failed after the remote answered 200.
pub async fn run_sync(job: &SyncJob, exporter: &dyn DefinitionExporter) -> Result<Vec<String>> {
    let manifest = job.store.load_manifest(&job.model)?;

    println!("Copying model {} to {}...", job.model, job.remote);
    tracing::info!(
        "Copying {} ({} layers) to {}",
        job.model,
        manifest.layers.len(),
        job.remote
    );

    let client = RemoteClient::new(job.remote.clone())?;
    let from_lines = BlobUploader::new(&client, &job.store)
        .sync_layers(&manifest)
        .await?;

    let exported = exporter.export_definition(&job.model).await?;
    let modelfile = build_definition(&from_lines, &exported);
    tracing::debug!("Modelfile for {}:\n{modelfile}", job.model);

    let body = client.create_model(&job.model, &modelfile).await?;

    let mut statuses = Vec::new();
    for line in body.lines() {
        match decode_status_line(line) {
            Some(StatusLine::Status(status)) => {
                println!("{status}");
                statuses.push(status);
            }
            Some(StatusLine::Failure(detail)) => {
                return Err(SyncError::Unexpected(format!(
                    "could not create {} on the remote server: {detail}",
                    job.model
                )));
            }
            None => {}
        }
    }

    Ok(statuses)
}
