use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ollama-rsync
///
/// Every failure is fatal to a run. The `Display` text is what the user sees
/// after the `Error:` prefix printed by the binary.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("ollama models directory ({}) does not exist.", .0.display())]
    StoreNotFound(PathBuf),

    #[error("remote server URL is not valid: {0}")]
    InvalidUrl(String),

    #[error("model not found in {}.", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("could not read model manifest: {0}")]
    Manifest(String),

    #[error("{0}")]
    Network(String),

    #[error("invalid digest, check both ollama are running the same version.")]
    VersionMismatch,

    #[error("upload failed: {0}")]
    UploadFailed(String),

    #[error("could not run ollama to export Modelfile")]
    Export(String),

    #[error("could not create {model} on the remote server ({status}): {reason}")]
    CreateFailed {
        model: String,
        status: u16,
        reason: String,
    },

    #[error("Config error: {0}\n\nTroubleshooting:\n- Check config file: ~/.config/ollama-rsync/config.toml\n- Run with RUST_LOG=debug for more details")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Unexpected(String),
}

impl SyncError {
    /// Prefix printed in front of the message on fatal exit
    #[must_use]
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Unexpected(_) => "Exception",
            _ => "Error",
        }
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SyncError::StoreNotFound(PathBuf::from("/nope"));
        assert_eq!(
            err.to_string(),
            "ollama models directory (/nope) does not exist."
        );

        let err = SyncError::CreateFailed {
            model: "llama2:latest".to_string(),
            status: 500,
            reason: "Internal Server Error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "could not create llama2:latest on the remote server (500): Internal Server Error"
        );
    }

    #[test]
    fn test_prefix() {
        assert_eq!(SyncError::VersionMismatch.prefix(), "Error");
        assert_eq!(SyncError::Unexpected("boom".into()).prefix(), "Exception");
    }
}
