//! Service configuration from the environment

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Prefilled base URL on the input form
    pub default_api_base: String,
    /// Prefilled model name on the input form
    pub default_model: String,
    /// Per-request timeout of the LLM HTTP client
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            default_api_base: DEFAULT_API_BASE.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unparsable values fall back
    /// to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            port: non_empty("REASONING_PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            default_api_base: non_empty("OPENAI_API_BASE").unwrap_or(defaults.default_api_base),
            default_model: non_empty("DEFAULT_MODEL").unwrap_or(defaults.default_model),
            request_timeout: non_empty("LLM_TIMEOUT_SECS")
                .and_then(|s| s.trim().parse().ok())
                .map_or(defaults.request_timeout, Duration::from_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config.port, 8000);
        assert_eq!(config.default_api_base, "https://api.openai.com/v1");
        assert_eq!(config.default_model, "gpt-3.5-turbo");
        assert_eq!(config.request_timeout, Duration::from_secs(300));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("REASONING_PORT", "9090"),
            ("OPENAI_API_BASE", "http://localhost:11434/v1"),
            ("DEFAULT_MODEL", "llama3"),
            ("LLM_TIMEOUT_SECS", "30"),
        ]));
        assert_eq!(config.port, 9090);
        assert_eq!(config.default_api_base, "http://localhost:11434/v1");
        assert_eq!(config.default_model, "llama3");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            ("REASONING_PORT", "not-a-port"),
            ("DEFAULT_MODEL", "  "),
            ("LLM_TIMEOUT_SECS", "-1"),
        ]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.default_model, DEFAULT_MODEL);
        assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
