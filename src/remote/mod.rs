//! Remote Ollama server: address validation and the HTTP endpoints we call
//!
//! - `HEAD /api/blobs/sha256:<hash>` checks whether a blob exists
//! - `POST /api/blobs/sha256:<hash>` uploads a blob, answering 201
//! - `POST /api/create` creates a model from a Modelfile, answering
//!   newline-delimited JSON status objects

pub mod client;
pub mod status;

pub use client::RemoteClient;
pub use status::{decode_status_line, StatusLine};

use crate::error::{Result, SyncError};
use url::Url;

/// Base address of a remote server, e.g. `http://192.168.0.100:11434`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteServer {
    base: String,
}

impl RemoteServer {
    /// Validate a server address.
    ///
    /// Only `http`/`https` with an explicit port and nothing after it (no
    /// path, not even `/`, no query and no fragment) is accepted.
    pub fn parse(raw: &str) -> Result<Self> {
        if Self::is_valid(raw) {
            Ok(Self {
                base: raw.to_string(),
            })
        } else {
            Err(SyncError::InvalidUrl(raw.to_string()))
        }
    }

    fn is_valid(raw: &str) -> bool {
        let Ok(url) = Url::parse(raw) else {
            return false;
        };

        if !matches!(url.scheme(), "http" | "https") || url.host().is_none() {
            return false;
        }

        // The parser normalizes an empty path to "/", so look at the raw text
        if url.query().is_some()
            || url.fragment().is_some()
            || url.path() != "/"
            || raw.ends_with('/')
        {
            return false;
        }

        Self::has_explicit_port(raw, &url)
    }

    /// `Url::port` hides a port equal to the scheme default
    fn has_explicit_port(raw: &str, url: &Url) -> bool {
        if url.port().is_some() {
            return true;
        }

        url.port_or_known_default()
            .is_some_and(|port| raw.ends_with(&format!(":{port}")))
    }

    #[must_use]
    pub fn blob_url(&self, hash: &str) -> String {
        format!("{}/api/blobs/sha256:{hash}", self.base)
    }

    #[must_use]
    pub fn create_url(&self) -> String {
        format!("{}/api/create", self.base)
    }
}

impl std::fmt::Display for RemoteServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.base)
    }
}
