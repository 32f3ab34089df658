use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Root engine configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub ranking: RankingPolicy,
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// Thresholds and ordering policy for the rank pipeline.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RankingPolicy {
    /// Title similarity above this is a strong match.
    #[serde(default = "default_strong_match_threshold")]
    pub strong_match_threshold: f64,
    /// Name similarity above this admits a weak match.
    #[serde(default = "default_weak_match_threshold")]
    pub weak_match_threshold: f64,
    /// Maximum allowed distance between descriptor and hit year.
    #[serde(default = "default_year_tolerance")]
    pub year_tolerance: i32,
    /// Ranked list length cap.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Ordered language tags to rank first; empty disables the pass.
    #[serde(default)]
    pub preferred_languages: Vec<String>,
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self {
            strong_match_threshold: default_strong_match_threshold(),
            weak_match_threshold: default_weak_match_threshold(),
            year_tolerance: default_year_tolerance(),
            max_results: default_max_results(),
            preferred_languages: Vec::new(),
        }
    }
}

fn default_strong_match_threshold() -> f64 {
    0.5
}

fn default_weak_match_threshold() -> f64 {
    0.3
}

fn default_year_tolerance() -> i32 {
    1
}

fn default_max_results() -> usize {
    100
}

/// How ranked streams present themselves to the caller.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Display label prefixed to every stream name and binge group.
    #[serde(default = "default_label")]
    pub label: String,
    /// Base prepended to the hit identifier to form the playable URL.
    /// Token handling stays with the caller.
    #[serde(default)]
    pub stream_url_base: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            label: default_label(),
            stream_url_base: String::new(),
        }
    }
}

fn default_label() -> String {
    "streamrank".to_string()
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse config: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.ranking.strong_match_threshold, 0.5);
        assert_eq!(config.ranking.weak_match_threshold, 0.3);
        assert_eq!(config.ranking.year_tolerance, 1);
        assert_eq!(config.ranking.max_results, 100);
        assert!(config.ranking.preferred_languages.is_empty());
        assert_eq!(config.provider.label, "streamrank");
        assert!(config.provider.stream_url_base.is_empty());
    }

    #[test]
    fn test_deserialize_empty_toml_uses_defaults() {
        let config: EngineConfig = toml::from_str("").unwrap();
        assert_eq!(config.ranking.max_results, 100);
    }

    #[test]
    fn test_deserialize_partial_ranking_section() {
        let toml = r#"
[ranking]
max_results = 25
preferred_languages = ["cs", "sk"]
"#;
        let config: EngineConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.ranking.max_results, 25);
        assert_eq!(config.ranking.preferred_languages, vec!["cs", "sk"]);
        // Untouched keys keep their defaults.
        assert_eq!(config.ranking.strong_match_threshold, 0.5);
    }

    #[test]
    fn test_deserialize_provider_section() {
        let toml = r#"
[provider]
label = "My Provider"
stream_url_base = "https://example.test/play/"
"#;
        let config: EngineConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.provider.label, "My Provider");
        assert_eq!(config.provider.stream_url_base, "https://example.test/play/");
    }
}
