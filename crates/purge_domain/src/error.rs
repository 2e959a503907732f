use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The file could not be removed. Displays as the reported message alone.
    #[error("{0}")]
    RemoveFailed(String),
}

pub type Result<A> = std::result::Result<A, Error>;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_remove_failed_displays_message_verbatim() {
        let fixture = Error::RemoveFailed("file not found".to_string());
        let actual = fixture.to_string();
        let expected = "file not found";
        assert_eq!(actual, expected);
    }
}
