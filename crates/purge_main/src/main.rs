use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use purge_app::{DisplayState, EnvironmentInfra};
use purge_infra::PurgeInfra;
use purge_main::{Cli, UI};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let infra = Arc::new(PurgeInfra::new(&cwd));
    let env = infra.get_environment();

    let directive = cli.log_directive(env.log_filter);
    let guard = match env.log_path {
        Some(log_path) => purge_services::init_tracing(log_path, &directive)?,
        None => purge_services::init_stderr_tracing(&directive)?,
    };

    tracing::debug!(path = %cli.path.display(), "Starting purge");

    let state = UI::new(infra, cli.path).run().await;
    if state == DisplayState::Failed {
        drop(guard);
        std::process::exit(1);
    }

    Ok(())
}
