//! # PurgeFS
//!
//! Thin wrappers over tokio's filesystem calls that attach a uniform
//! "Failed to [operation] [path]" context to every error while keeping the
//! original cause in the chain.

mod remove;

/// Entry point for file system operations with consistent error context.
#[derive(Debug)]
pub struct PurgeFS;
