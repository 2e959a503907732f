use std::path::PathBuf;

use tracing::debug;
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{self, EnvFilter, Layer, filter};

/// Installs a JSON subscriber writing to a daily rolling file under
/// `log_path`. Only events from `purge_*` targets are recorded.
pub fn init_tracing(log_path: PathBuf, directive: &str) -> anyhow::Result<Guard> {
    let (writer, guard) = prepare_writer(log_path.clone());

    let filter = filter::filter_fn(|metadata| metadata.target().starts_with("purge_"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_thread_ids(false)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_writer(writer)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(directive)?)
        .with(fmt_layer)
        .try_init()?;

    debug!(path = %log_path.display(), "JSON logging system initialized");
    Ok(Guard(Some(guard)))
}

/// Installs a human-readable subscriber writing to stderr.
pub fn init_stderr_tracing(directive: &str) -> anyhow::Result<Guard> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(directive)?)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(Guard(None))
}

fn prepare_writer(log_path: PathBuf) -> (non_blocking::NonBlocking, WorkerGuard) {
    let append = tracing_appender::rolling::daily(log_path, "purge.log");
    tracing_appender::non_blocking(append)
}

/// Keeps the background log writer alive; pending lines are flushed on drop.
pub struct Guard(#[allow(dead_code)] Option<WorkerGuard>);
