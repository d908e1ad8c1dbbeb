use crate::error::{Result, SyncError};
use crate::modelfile::DefinitionExporter;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Exports Modelfiles with `ollama show <model> --modelfile`
///
/// stdout is captured as the definition and stderr is discarded.
#[derive(Debug, Clone)]
pub struct OllamaExporter {
    program: String,
}

impl OllamaExporter {
    /// Create an exporter running `program` (normally `ollama`)
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl DefinitionExporter for OllamaExporter {
    async fn export_definition(&self, model: &str) -> Result<String> {
        let program = which::which(&self.program).map_err(|e| {
            SyncError::Export(format!("{} binary not found in PATH: {e}", self.program))
        })?;

        tracing::debug!("Running {} show {model} --modelfile", program.display());

        let output = Command::new(&program)
            .args(["show", model, "--modelfile"])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| SyncError::Export(format!("Failed to spawn {}: {e}", program.display())))?;

        if !output.status.success() {
            return Err(SyncError::Export(format!(
                "{} exited with {}",
                program.display(),
                output.status
            )));
        }

        let text = String::from_utf8(output.stdout)
            .map_err(|e| SyncError::Export(format!("Modelfile is not valid UTF-8: {e}")))?;

        if text.starts_with("Error:") {
            tracing::warn!("Exporter reported: {}", text.lines().next().unwrap_or_default());
            println!("Error: could not get ollama Modelfile");
        }

        Ok(text)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn fake_tool(dir: &Path, script: &str) -> PathBuf {
        let path = dir.join("fake-ollama");
        fs::write(&path, format!("#!/bin/sh\n{script}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[tokio::test]
    #[serial]
    async fn test_export_passes_model_and_flags() {
        let temp_dir = TempDir::new().unwrap();
        let tool = fake_tool(
            temp_dir.path(),
            "echo \"FROM $2\"\necho \"PARAMETER flag $3\"\necho noise >&2",
        );

        let exporter = OllamaExporter::new(tool.to_string_lossy());
        let text = exporter.export_definition("llama2:latest").await.unwrap();

        assert_eq!(text, "FROM llama2:latest\nPARAMETER flag --modelfile\n");
    }

    #[tokio::test]
    #[serial]
    async fn test_error_output_is_not_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let tool = fake_tool(temp_dir.path(), "echo \"Error: model 'x' not found\"");

        let exporter = OllamaExporter::new(tool.to_string_lossy());
        let text = exporter.export_definition("x").await.unwrap();

        assert!(text.starts_with("Error:"));
    }

    #[tokio::test]
    #[serial]
    async fn test_failing_tool() {
        let temp_dir = TempDir::new().unwrap();
        let tool = fake_tool(temp_dir.path(), "exit 3");

        let exporter = OllamaExporter::new(tool.to_string_lossy());
        let err = exporter.export_definition("llama2").await.unwrap_err();

        assert!(matches!(err, SyncError::Export(_)));
        assert_eq!(err.to_string(), "could not run ollama to export Modelfile");
    }

    #[tokio::test]
    #[serial]
    async fn test_missing_tool() {
        let exporter = OllamaExporter::new("/nonexistent/ollama-rsync-test-tool");
        let err = exporter.export_definition("llama2").await.unwrap_err();
        assert!(matches!(err, SyncError::Export(_)));
    }
}
