//! Output Target - Where a rendered report ends up.
//!
//! File targets are written atomically:
//! 1. Write content to `{name}.tmp` next to the destination
//! 2. Sync to disk
//! 3. Rename over the destination
//!
//! A failed export therefore never leaves a truncated result file behind.

use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::ports::ExportError;

/// Destination of a result sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Standard output of the process.
    Stdout,
    /// A file path, replaced atomically.
    File(PathBuf),
}

impl OutputTarget {
    /// `Stdout` when no path is given.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(OutputTarget::Stdout, OutputTarget::File)
    }

    /// Human-readable destination, used in receipts and logs.
    pub fn describe(&self) -> String {
        match self {
            OutputTarget::Stdout => "stdout".to_string(),
            OutputTarget::File(path) => path.display().to_string(),
        }
    }

    /// Writes `content` to the target, returning the number of bytes written.
    pub async fn write(&self, content: &[u8]) -> Result<usize, ExportError> {
        match self {
            OutputTarget::Stdout => {
                let mut stdout = tokio::io::stdout();
                stdout
                    .write_all(content)
                    .await
                    .map_err(|e| ExportError::io(self.describe(), e))?;
                stdout
                    .flush()
                    .await
                    .map_err(|e| ExportError::io(self.describe(), e))?;
            }
            OutputTarget::File(path) => write_atomically(path, content).await?,
        }
        Ok(content.len())
    }
}

/// Returns the temporary sibling used while writing `path`.
fn temp_path(path: &Path) -> Option<PathBuf> {
    let mut name = path.file_name()?.to_os_string();
    name.push(".tmp");
    Some(path.with_file_name(name))
}

async fn write_atomically(path: &Path, content: &[u8]) -> Result<(), ExportError> {
    let destination = path.display().to_string();
    let temp = temp_path(path)
        .ok_or_else(|| ExportError::io(&destination, "path does not name a file"))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(|e| {
            ExportError::io(
                &destination,
                format!("failed to create directory {}: {}", parent.display(), e),
            )
        })?;
    }

    let written = async {
        let mut file = fs::File::create(&temp).await?;
        file.write_all(content).await?;
        file.sync_all().await?;
        fs::rename(&temp, path).await
    }
    .await;

    if let Err(e) = written {
        // Best effort; the original error is the one worth reporting.
        let _ = fs::remove_file(&temp).await;
        return Err(ExportError::io(destination, e));
    }
    Ok(())
}
