mod delete_file;
mod log;

#[cfg(test)]
mod remove_tests;

pub use delete_file::*;
pub use log::*;
