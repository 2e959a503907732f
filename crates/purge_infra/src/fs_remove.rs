use std::path::Path;

use purge_app::FileRemoverInfra;

/// Low-level file remove service
///
/// Hands the path straight to the filesystem. Failures carry the path as
/// context and are never retried.
#[derive(Default)]
pub struct PurgeFileRemoveService;

impl PurgeFileRemoveService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl FileRemoverInfra for PurgeFileRemoveService {
    async fn remove(&self, path: &Path) -> anyhow::Result<()> {
        purge_common::fs::PurgeFS::remove_file(path).await
    }
}
