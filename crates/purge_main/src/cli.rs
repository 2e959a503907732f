use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// File to delete. Passed to the filesystem exactly as given.
    pub path: PathBuf,

    /// Enable verbose logging output.
    ///
    /// Ignored when `PURGE_LOG` is set.
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    pub fn log_directive(&self, configured: Option<String>) -> String {
        configured.unwrap_or_else(|| {
            let level = if self.verbose { "debug" } else { "info" };
            format!("purge={level}")
        })
    }
}
