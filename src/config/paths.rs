use std::path::{Path, PathBuf};

/// Environment variable overriding the local model store root
pub const MODELS_ENV: &str = "OLLAMA_MODELS";

/// Override value meaning "use the platform default"
pub const WILDCARD: &str = "*";

/// Store root used by the Linux service install
const SYSTEM_STORE_ROOT: &str = "/usr/share/ollama/.ollama/models";

/// Host operating system, as far as store layout is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    Windows,
    MacOs,
    Other,
}

impl HostOs {
    #[must_use]
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Other
        }
    }
}

/// Resolve the model store root from the OS and an optional override.
///
/// `home` is `%USERPROFILE%` on Windows and the user's home directory on
/// macOS; it is ignored elsewhere. No filesystem access happens here.
#[must_use]
pub fn resolve_store_root(
    os: HostOs,
    override_value: Option<&str>,
    home: Option<&Path>,
) -> PathBuf {
    match override_value {
        Some(value) if value != WILDCARD => PathBuf::from(value),
        _ => default_store_root(os, home),
    }
}

fn default_store_root(os: HostOs, home: Option<&Path>) -> PathBuf {
    match os {
        HostOs::Windows | HostOs::MacOs => home
            .map_or_else(|| PathBuf::from("~"), Path::to_path_buf)
            .join(".ollama")
            .join("models"),
        HostOs::Other => PathBuf::from(SYSTEM_STORE_ROOT),
    }
}

/// Home directory used for the platform default
#[must_use]
pub fn platform_home(os: HostOs) -> Option<PathBuf> {
    match os {
        HostOs::Windows => std::env::var_os("USERPROFILE").map(PathBuf::from),
        HostOs::MacOs => dirs::home_dir(),
        HostOs::Other => None,
    }
}
