use std::path::PathBuf;

use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Runtime settings resolved from the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[setters(strip_option, into)]
pub struct Environment {
    /// Directory the rolling JSON log is written to. Logs go to stderr when
    /// unset.
    pub log_path: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directive overriding the CLI's log
    /// level.
    pub log_filter: Option<String>,
}
