//! Filesystem storage for uploaded product and banner images

use std::path::{Path, PathBuf};

use tokio::{fs, io::AsyncWriteExt};

use crate::domain::DomainError;

/// URL prefix under which the upload directory is served
pub const UPLOADS_ROUTE: &str = "/uploads";

#[derive(Debug, Clone)]
pub struct UploadStorage {
    root: PathBuf,
}

impl UploadStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write the payload as `<unix-millis>-<sanitised name>` and return the
    /// stored file name.
    pub async fn store(&self, original_name: &str, data: &[u8]) -> Result<String, DomainError> {
        if data.is_empty() {
            return Err(DomainError::Validation("uploaded file is empty".to_string()));
        }

        fs::create_dir_all(&self.root).await?;

        let file_name = format!(
            "{}-{}",
            chrono::Utc::now().timestamp_millis(),
            sanitize_file_name(original_name)
        );
        let mut file = fs::File::create(self.root.join(&file_name)).await?;
        file.write_all(data).await?;
        file.flush().await?;

        tracing::info!("Stored upload {} ({} bytes)", file_name, data.len());
        Ok(file_name)
    }
}

/// Keep ASCII letters, digits, dots, dashes and underscores; strip any directory part
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '-'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned.to_string()
    }
}
