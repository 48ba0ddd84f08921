//! Configuration file handling.

mod loader;
mod types;

pub use loader::{ConfigError, TICK_RATE_RANGE_MS};
pub use types::{Config, GameConfig, UiConfig};
