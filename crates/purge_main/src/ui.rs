use std::path::PathBuf;
use std::sync::Arc;

use colored::Colorize;
use purge_app::{Button, DisplayState, FileRemoverInfra, ResultDisplay};
use purge_services::PurgeDeleteFile;

/// Single-button session: clicking deletes one file and the result element
/// reports the outcome.
pub struct UI<F> {
    button: Button<PurgeDeleteFile<F>>,
    result: ResultDisplay,
}

impl<F: FileRemoverInfra + 'static> UI<F> {
    pub fn new(infra: Arc<F>, path: PathBuf) -> Self {
        let result = ResultDisplay::new("result");
        let handler = PurgeDeleteFile::new(infra, path, result.clone());
        Self { button: Button::new("deleteButton", Arc::new(handler)), result }
    }

    /// Clicks the delete button once, waits for it to settle and prints the
    /// result text.
    pub async fn run(&self) -> DisplayState {
        self.button.click();
        self.button.drain().await;

        let state = self.result.state();
        let text = state.text().unwrap_or_default();
        match state {
            DisplayState::Succeeded => println!("{}", text.green()),
            DisplayState::Failed => eprintln!("{}", text.red().bold()),
            DisplayState::Idle => {}
        }
        state
    }
}
