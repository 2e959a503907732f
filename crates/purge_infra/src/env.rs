use std::path::{Path, PathBuf};

use purge_app::EnvironmentInfra;
use purge_domain::Environment;
use tracing::debug;

pub struct PurgeEnvironmentInfra;

impl PurgeEnvironmentInfra {
    /// Loads `<cwd>/.env` into the process environment when it exists.
    /// Variables already set in the process take precedence.
    pub fn new(cwd: &Path) -> Self {
        let dotenv = cwd.join(".env");
        if dotenvy::from_path(&dotenv).is_ok() {
            debug!(path = %dotenv.display(), "Loaded environment file");
        }
        Self
    }
}

fn resolve_environment(lookup: impl Fn(&str) -> Option<String>) -> Environment {
    let log_path = lookup("PURGE_LOG_DIR")
        .filter(|dir| !dir.trim().is_empty())
        .map(PathBuf::from);
    let log_filter = lookup("PURGE_LOG").filter(|directive| !directive.trim().is_empty());
    Environment { log_path, log_filter }
}

impl EnvironmentInfra for PurgeEnvironmentInfra {
    fn get_environment(&self) -> Environment {
        resolve_environment(|key| self.get_env_var(key))
    }

    fn get_env_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}
