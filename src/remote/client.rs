use crate::error::{Result, SyncError};
use crate::remote::RemoteServer;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::redirect::Policy;
use reqwest::StatusCode;
use serde::Serialize;

/// Body of `POST /api/create`
#[derive(Debug, Serialize)]
struct CreateRequest<'a> {
    name: &'a str,
    modelfile: &'a str,
}

/// HTTP client for one remote Ollama server
///
/// Every call is awaited before the next one is made.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    client: reqwest::Client,
    server: RemoteServer,
}

impl RemoteClient {
    /// Create a client that reports redirects instead of following them
    pub fn new(server: RemoteServer) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .build()?;

        Ok(Self { client, server })
    }

    /// Whether the remote already has the blob (HEAD answered below 400)
    pub async fn blob_exists(&self, hash: &str) -> Result<bool> {
        let response = self.client.head(self.server.blob_url(hash)).send().await?;
        let status = response.status();
        tracing::debug!("HEAD blob sha256:{hash} -> {status}");
        Ok(!status.is_client_error() && !status.is_server_error())
    }

    /// Upload a blob from a streaming body of `len` bytes
    pub async fn upload_blob(&self, hash: &str, body: reqwest::Body, len: u64) -> Result<()> {
        let response = self
            .client
            .post(self.server.blob_url(hash))
            .header(CONTENT_LENGTH, len)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("POST blob sha256:{hash} -> {status}");

        match status {
            StatusCode::CREATED => Ok(()),
            StatusCode::BAD_REQUEST => Err(SyncError::VersionMismatch),
            _ => Err(SyncError::UploadFailed(reason(status))),
        }
    }

    /// Create `name` on the remote from a Modelfile, returning the raw
    /// newline-delimited status body
    pub async fn create_model(&self, name: &str, modelfile: &str) -> Result<String> {
        // Ollama decodes the body as JSON whatever the content type says;
        // `json()` keeps a content type that is already set
        let response = self
            .client
            .post(self.server.create_url())
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .json(&CreateRequest { name, modelfile })
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("POST create {name} -> {status}");

        if status != StatusCode::OK {
            return Err(SyncError::CreateFailed {
                model: name.to_string(),
                status: status.as_u16(),
                reason: reason(status),
            });
        }

        Ok(response.text().await?)
    }
}

fn reason(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or("Unknown").to_string()
}
