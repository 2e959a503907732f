use std::path::{Path, PathBuf};
use std::sync::Arc;

use purge_app::{ClickHandler, DisplayState, FileRemoverInfra, ResultDisplay};
use tracing::{info, warn};

/// Deletes one file when clicked and reports the outcome on a display.
pub struct PurgeDeleteFile<F> {
    infra: Arc<F>,
    path: PathBuf,
    display: ResultDisplay,
}

impl<F: FileRemoverInfra> PurgeDeleteFile<F> {
    pub fn new(infra: Arc<F>, path: impl Into<PathBuf>, display: ResultDisplay) -> Self {
        Self { infra, path: path.into(), display }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes the file and writes the settled outcome to the display.
    /// Errors are logged and folded into [`DisplayState::Failed`].
    pub async fn execute(&self) -> DisplayState {
        let outcome = self.infra.remove(&self.path).await;
        let state = DisplayState::from(&outcome);

        match outcome {
            Ok(()) => info!(path = %self.path.display(), "File deleted"),
            Err(error) => warn!(path = %self.path.display(), error = ?error, "File deletion failed"),
        }

        self.display.set(state);
        state
    }
}

#[async_trait::async_trait]
impl<F: FileRemoverInfra + 'static> ClickHandler for PurgeDeleteFile<F> {
    async fn on_click(&self) {
        let state = self.execute().await;
        tracing::debug!(display = %self.display, %state, "Click settled");
    }
}
