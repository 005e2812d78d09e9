//! Configuration file loading and validation.

use std::path::Path;

use crate::error::ConfigError;
use crate::types::ProjectConfig;

/// Name of the configuration file at the project root.
pub const CONFIG_FILE: &str = "crateway.toml";

/// Loads and validates a `crateway.toml` configuration from a project
/// directory.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    let config_path = project_dir.join(CONFIG_FILE);
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `crateway.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that required fields are present and non-empty.
fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.crates.is_empty() {
        return Err(ConfigError::MissingField("crates".to_string()));
    }
    for krate in &config.crates {
        if krate.name.is_empty() {
            return Err(ConfigError::MissingField("crates.name".to_string()));
        }
    }
    Ok(())
}
