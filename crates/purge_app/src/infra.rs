use std::path::Path;

use purge_domain::Environment;

pub trait EnvironmentInfra: Send + Sync {
    fn get_environment(&self) -> Environment;
    fn get_env_var(&self, key: &str) -> Option<String>;
}

/// Removes a single file.
///
/// Implementations receive the path exactly as the caller supplied it and
/// surface any failure to the caller unchanged; they never retry.
#[async_trait::async_trait]
pub trait FileRemoverInfra: Send + Sync {
    async fn remove(&self, path: &Path) -> anyhow::Result<()>;
}
