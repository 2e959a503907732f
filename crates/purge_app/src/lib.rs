mod button;
mod display;
mod infra;
mod services;

pub use button::*;
pub use display::*;
pub use infra::*;
pub use services::*;
