//! Application configuration module
//!
//! Environment-backed settings plus application-wide defaults.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
