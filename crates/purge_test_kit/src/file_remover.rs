use std::path::{Path, PathBuf};
use std::sync::Mutex;

use purge_app::FileRemoverInfra;
use purge_domain::Error;

/// What the next `remove` calls settle with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RemoveBehavior {
    #[default]
    Resolve,
    Reject(String),
}

/// Controllable stand-in for [`FileRemoverInfra`].
///
/// Every call is recorded before the configured behavior is applied. An
/// unconfigured remover resolves.
#[derive(Debug, Default)]
pub struct MockFileRemover {
    behavior: Mutex<RemoveBehavior>,
    calls: Mutex<Vec<PathBuf>>,
}

impl MockFileRemover {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolves(&self) -> &Self {
        *self.behavior.lock().unwrap() = RemoveBehavior::Resolve;
        self
    }

    pub fn rejects(&self, message: impl Into<String>) -> &Self {
        *self.behavior.lock().unwrap() = RemoveBehavior::Reject(message.into());
        self
    }

    pub fn behavior(&self) -> RemoveBehavior {
        self.behavior.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<PathBuf> {
        self.calls.lock().unwrap().last().cloned()
    }

    /// Clears both the call history and the configured behavior.
    pub fn reset(&self) {
        *self.behavior.lock().unwrap() = RemoveBehavior::default();
        self.calls.lock().unwrap().clear();
    }

    /// Returns a guard that resets the remover when the test case ends.
    pub fn scoped(&self) -> ResetGuard<'_> {
        ResetGuard(self)
    }
}

#[async_trait::async_trait]
impl FileRemoverInfra for MockFileRemover {
    async fn remove(&self, path: &Path) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(path.to_path_buf());
        match self.behavior() {
            RemoveBehavior::Resolve => Ok(()),
            RemoveBehavior::Reject(message) => Err(Error::RemoveFailed(message).into()),
        }
    }
}

/// Resets a [`MockFileRemover`] on drop.
#[must_use = "the remover is reset as soon as the guard is dropped"]
pub struct ResetGuard<'a>(&'a MockFileRemover);

impl std::ops::Deref for ResetGuard<'_> {
    type Target = MockFileRemover;

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl Drop for ResetGuard<'_> {
    fn drop(&mut self) {
        self.0.reset();
    }
}
