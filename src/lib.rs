//! Copy locally stored Ollama models to a remote Ollama server.
//!
//! Blobs the remote already has are not uploaded again; the model itself is
//! recreated remotely from a rewritten Modelfile.

pub mod config;
pub mod error;
pub mod modelfile;
pub mod remote;
pub mod store;
pub mod sync;
pub mod transfer;

pub use error::{Result, SyncError};
pub use sync::{run_sync, SyncJob};
