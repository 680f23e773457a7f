use std::path::PathBuf;

use serenity::async_trait;

use crate::{config::TempStorageConfig, error::AppError};

/// External storage for results too large to upload directly.
#[async_trait]
pub trait TempStorage: Send + Sync {
    /// Stores `bytes` under `filename` and returns the public URL it is served from.
    async fn write_temp_file(&self, bytes: &[u8], filename: &str) -> Result<String, AppError>;
}

/// Writes files into a local directory that a web server exposes under `domain`.
pub struct FsTempStorage {
    dir: PathBuf,
    domain: String,
}

impl FsTempStorage {
    pub fn new(config: &TempStorageConfig) -> Self {
        Self {
            dir: config.dir.clone(),
            domain: config.domain.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl TempStorage for FsTempStorage {
    async fn write_temp_file(&self, bytes: &[u8], filename: &str) -> Result<String, AppError> {
        // Callers generate the name, but never let it escape the directory
        if filename.contains(['/', '\\']) || filename.starts_with('.') {
            return Err(AppError::InternalError(format!(
                "Refusing to write temp file with unsafe name '{}'",
                filename
            )));
        }

        tokio::fs::write(self.dir.join(filename), bytes).await?;

        Ok(format!("{}/{}", self.domain, filename))
    }
}
