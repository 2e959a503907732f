mod cli;
mod ui;

pub use cli::Cli;
pub use ui::*;
