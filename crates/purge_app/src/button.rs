use std::sync::Arc;

use tokio_util::task::TaskTracker;
use tracing::debug;

use crate::ClickHandler;

/// Interactive control bound to a single [`ClickHandler`].
///
/// Clicks are dispatched like event listeners: [`Button::click`] returns
/// immediately and the handler runs as a tracked task on the current tokio
/// runtime. [`Button::drain`] waits for every dispatched click to settle.
pub struct Button<H> {
    id: String,
    handler: Arc<H>,
    tracker: TaskTracker,
}

impl<H: ClickHandler> Button<H> {
    pub fn new(id: impl Into<String>, handler: Arc<H>) -> Self {
        Self { id: id.into(), handler, tracker: TaskTracker::new() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Dispatches a click to the handler without waiting for it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn click(&self) {
        debug!(button = %self.id, "Dispatching click");
        let handler = self.handler.clone();
        self.tracker.spawn(async move { handler.on_click().await });
    }

    /// Number of dispatched clicks that have not settled yet.
    pub fn pending(&self) -> usize {
        self.tracker.len()
    }

    /// Waits until every click dispatched so far has settled.
    pub async fn drain(&self) {
        self.tracker.close();
        self.tracker.wait().await;
        self.tracker.reopen();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct Counter(AtomicUsize);

    #[async_trait::async_trait]
    impl ClickHandler for Counter {
        async fn on_click(&self) {
            tokio::task::yield_now().await;
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn test_click_does_not_wait_for_handler() {
        let handler = Arc::new(Counter::default());
        let button = Button::new("deleteButton", handler.clone());

        button.click();

        assert_eq!(handler.0.load(Ordering::SeqCst), 0);
        assert_eq!(button.pending(), 1);
    }

    #[tokio::test]
    async fn test_drain_settles_every_click() {
        let handler = Arc::new(Counter::default());
        let button = Button::new("deleteButton", handler.clone());

        button.click();
        button.click();
        button.drain().await;

        assert_eq!(handler.0.load(Ordering::SeqCst), 2);
        assert_eq!(button.pending(), 0);
    }

    #[tokio::test]
    async fn test_button_accepts_clicks_after_drain() {
        let handler = Arc::new(Counter::default());
        let button = Button::new("deleteButton", handler.clone());

        button.click();
        button.drain().await;
        button.click();
        button.drain().await;

        assert_eq!(handler.0.load(Ordering::SeqCst), 2);
        assert_eq!(button.id(), "deleteButton");
    }
}
