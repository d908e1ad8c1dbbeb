//! Modelfile export and rewriting
//!
//! The local definition comes from an external exporter. Its own `FROM`
//! lines point at local files, so they are replaced by lines referencing
//! blobs on the remote.

pub mod exporter;

pub use exporter::OllamaExporter;

use crate::error::Result;
use async_trait::async_trait;

/// Diagnostic printed by the Windows console when output is redirected
pub const CONSOLE_MODE_DIAGNOSTIC: &str = "failed to get console mode";

/// Source of a model's Modelfile text
#[async_trait]
pub trait DefinitionExporter: Send + Sync {
    /// Export the definition of `model`
    async fn export_definition(&self, model: &str) -> Result<String>;
}

/// Drop comments, `FROM` lines and console diagnostics, keeping everything
/// else in order (including a trailing newline)
#[must_use]
pub fn filter_definition(text: &str) -> String {
    text.split('\n')
        .filter(|line| {
            !line.starts_with('#')
                && !line.starts_with("FROM ")
                && !line.starts_with(CONSOLE_MODE_DIAGNOSTIC)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Final Modelfile: remote `FROM` lines followed by the filtered export
#[must_use]
pub fn build_definition(from_lines: &str, exported: &str) -> String {
    let mut definition = String::with_capacity(from_lines.len() + exported.len());
    definition.push_str(from_lines);
    definition.push_str(&filter_definition(exported));
    definition
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_definition() {
        let exported = "# Modelfile generated by \"ollama show\"\n\
                        # To build a new Modelfile based on this, replace FROM with:\n\
                        # FROM llama2:latest\n\
                        \n\
                        FROM /usr/share/ollama/.ollama/models/blobs/sha256-abc\n\
                        TEMPLATE \"\"\"[INST] {{ .Prompt }} [/INST]\"\"\"\n\
                        PARAMETER stop \"[INST]\"\n\
                        failed to get console mode for stdout: The handle is invalid.\n";

        assert_eq!(
            filter_definition(exported),
            "\nTEMPLATE \"\"\"[INST] {{ .Prompt }} [/INST]\"\"\"\nPARAMETER stop \"[INST]\"\n"
        );
    }

    #[test]
    fn test_filter_keeps_lookalikes() {
        // Only "FROM " with a space is a base reference
        let exported = "FROMAGE 1\n  # indented\nSYSTEM from here\n";
        assert_eq!(filter_definition(exported), exported);
    }

    #[test]
    fn test_build_definition() {
        let definition = build_definition(
            "FROM @sha256:abc123\n",
            "FROM llama2:latest\nPARAMETER x 1\n",
        );
        assert_eq!(definition, "FROM @sha256:abc123\nPARAMETER x 1\n");
    }

    #[test]
    fn test_build_definition_without_layers() {
        assert_eq!(build_definition("", "PARAMETER x 1"), "PARAMETER x 1");
    }
}
