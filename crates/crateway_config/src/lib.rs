//! Project configuration loading for the build pipeline.
//!
//! A `crateway.toml` at the web project root lists the wasm crates to build
//! and where the bundler serves their compiled packages from.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE};
pub use types::{CrateConfig, ProjectConfig, ProjectSection};
