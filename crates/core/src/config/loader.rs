use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::types::{ConfigError, EngineConfig};

/// Load configuration from a TOML file with environment variable overrides.
///
/// Env keys use a double-underscore separator because policy keys contain
/// single underscores, e.g. `STREAMRANK_RANKING__MAX_RESULTS=50`.
pub fn load_config(path: &Path) -> Result<EngineConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let config: EngineConfig = Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed("STREAMRANK_").split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Load configuration from a TOML string (useful for testing).
pub fn load_config_from_str(toml_str: &str) -> Result<EngineConfig, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}
