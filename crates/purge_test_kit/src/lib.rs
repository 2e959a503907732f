//! Test doubles for the infrastructure traits in `purge_app`.

mod file_remover;

pub use file_remover::*;
