/// Reacts to a click on an interactive control.
///
/// Handlers own their error handling: a click has no caller to report to.
#[async_trait::async_trait]
pub trait ClickHandler: Send + Sync + 'static {
    async fn on_click(&self);
}
