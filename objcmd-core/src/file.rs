use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// Result of writing an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had identical content and was left alone
    Unchanged,
}

/// A generated artifact destined for disk.
///
/// Projection output is deterministic, so an artifact whose content already
/// matches the file on disk is not rewritten.
#[derive(Debug, Clone)]
pub struct Artifact {
    path: PathBuf,
    content: String,
}

impl Artifact {
    /// Create a new artifact with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the artifact path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the artifact content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check whether the file on disk already holds this content
    pub fn is_current(&self) -> bool {
        std::fs::read_to_string(&self.path).is_ok_and(|existing| existing == self.content)
    }

    /// Write the artifact, creating parent directories as needed
    pub fn write(&self) -> Result<WriteResult> {
        if self.is_current() {
            return Ok(WriteResult::Unchanged);
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
        }
        std::fs::write(&self.path, &self.content)
            .wrap_err_with(|| format!("failed to write '{}'", self.path.display()))?;
        Ok(WriteResult::Written)
    }
}
