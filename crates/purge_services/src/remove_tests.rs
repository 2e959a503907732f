//! Remover behavior as seen by a plain async caller.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use purge_app::FileRemoverInfra;
use purge_test_kit::MockFileRemover;

const LOG_FILE: &str = "src/test/test.log";

#[tokio::test]
async fn test_remove_resolves_with_supplied_path() {
    let infra = MockFileRemover::new();
    let remover = infra.scoped();
    remover.resolves();

    let actual = remover.remove(Path::new(LOG_FILE)).await;

    assert!(actual.is_ok());
    assert_eq!(remover.call_count(), 1);
    assert_eq!(remover.calls(), vec![PathBuf::from(LOG_FILE)]);
}

#[tokio::test]
async fn test_remove_rejects_with_configured_message() {
    let infra = MockFileRemover::new();
    let remover = infra.scoped();
    remover.rejects("file not found");

    let actual = remover.remove(Path::new(LOG_FILE)).await.unwrap_err();

    assert_eq!(actual.to_string(), "file not found");
    assert_eq!(remover.last_call(), Some(PathBuf::from(LOG_FILE)));
}

#[tokio::test]
async fn test_failure_does_not_leak_into_next_case() {
    let infra = MockFileRemover::new();

    {
        let remover = infra.scoped();
        remover.rejects("file not found");
        assert!(remover.remove(Path::new(LOG_FILE)).await.is_err());
    }

    let remover = infra.scoped();
    let actual = remover.remove(Path::new(LOG_FILE)).await;

    assert!(actual.is_ok());
    assert_eq!(remover.call_count(), 1);
}
