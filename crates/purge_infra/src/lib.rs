mod env;
mod fs_remove;
mod purge_infra;

pub use purge_infra::*;
