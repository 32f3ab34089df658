//! Engine configuration.

mod loader;
mod types;

pub use loader::{load_config, load_config_from_str};
pub use types::{ConfigError, EngineConfig, ProviderConfig, RankingPolicy};
