use std::path::Path;

use anyhow::{Context, Result};

use crate::fs::PurgeFS;

impl PurgeFS {
    pub async fn remove_file<T: AsRef<Path>>(path: T) -> Result<()> {
        tokio::fs::remove_file(path.as_ref())
            .await
            .with_context(|| format!("Failed to remove file {}", path.as_ref().display()))
    }
}
