use std::path::Path;
use std::sync::Arc;

use purge_app::{EnvironmentInfra, FileRemoverInfra};
use purge_domain::Environment;

use crate::env::PurgeEnvironmentInfra;
use crate::fs_remove::PurgeFileRemoveService;

#[derive(Clone)]
pub struct PurgeInfra {
    file_remove_service: Arc<PurgeFileRemoveService>,
    environment_service: Arc<PurgeEnvironmentInfra>,
}

impl PurgeInfra {
    pub fn new(cwd: &Path) -> Self {
        Self {
            file_remove_service: Arc::new(PurgeFileRemoveService::new()),
            environment_service: Arc::new(PurgeEnvironmentInfra::new(cwd)),
        }
    }
}

impl EnvironmentInfra for PurgeInfra {
    fn get_environment(&self) -> Environment {
        self.environment_service.get_environment()
    }

    fn get_env_var(&self, key: &str) -> Option<String> {
        self.environment_service.get_env_var(key)
    }
}

#[async_trait::async_trait]
impl FileRemoverInfra for PurgeInfra {
    async fn remove(&self, path: &Path) -> anyhow::Result<()> {
        self.file_remove_service.remove(path).await
    }
}
