//! Configuration loading.
//!
//! Settings come from `<config_dir>/wayfarer/config.toml`; every key is
//! optional and a missing file means defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, GeneratorConfig, UiConfig};
