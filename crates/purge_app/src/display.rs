use std::sync::{Arc, Mutex, PoisonError};

pub const SUCCESS_TEXT: &str = "Deletion succeeded";
pub const FAILURE_TEXT: &str = "Deletion failed";

/// Outcome shown by a [`ResultDisplay`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum DisplayState {
    /// No click has settled yet.
    #[default]
    Idle,
    Succeeded,
    Failed,
}

impl DisplayState {
    pub fn text(&self) -> Option<&'static str> {
        match self {
            DisplayState::Idle => None,
            DisplayState::Succeeded => Some(SUCCESS_TEXT),
            DisplayState::Failed => Some(FAILURE_TEXT),
        }
    }
}

impl From<&anyhow::Result<()>> for DisplayState {
    fn from(outcome: &anyhow::Result<()>) -> Self {
        match outcome {
            Ok(()) => DisplayState::Succeeded,
            Err(_) => DisplayState::Failed,
        }
    }
}

/// Output element whose text reflects the last settled deletion.
///
/// Clones share the same underlying state, so a handler can write to the
/// element while the owner of another clone reads it.
#[derive(Debug, Clone, derive_more::Display)]
#[display("#{id}")]
pub struct ResultDisplay {
    id: String,
    state: Arc<Mutex<DisplayState>>,
}

impl ResultDisplay {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), state: Default::default() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> DisplayState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn text_content(&self) -> Option<&'static str> {
        self.state().text()
    }

    pub fn set(&self, state: DisplayState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_new_display_has_no_text() {
        let fixture = ResultDisplay::new("result");
        assert_eq!(fixture.state(), DisplayState::Idle);
        assert_eq!(fixture.text_content(), None);
    }

    #[test]
    fn test_clones_share_state() {
        let fixture = ResultDisplay::new("result");
        let writer = fixture.clone();

        writer.set(DisplayState::Failed);

        assert_eq!(fixture.text_content(), Some(FAILURE_TEXT));
    }

    #[test]
    fn test_state_from_outcome() {
        let ok: anyhow::Result<()> = Ok(());
        let err: anyhow::Result<()> = Err(anyhow::anyhow!("file not found"));

        assert_eq!(DisplayState::from(&ok), DisplayState::Succeeded);
        assert_eq!(DisplayState::from(&err), DisplayState::Failed);
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(ResultDisplay::new("result").to_string(), "#result");
        assert_eq!(DisplayState::Succeeded.to_string(), "succeeded");
    }
}
