mod environment;
mod error;

pub use environment::*;
pub use error::*;
