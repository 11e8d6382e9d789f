use std::env;

use async_openai::config::OpenAIConfig;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "anthropic/claude-haiku-4.5";

#[derive(Debug, Clone)]
pub struct Config {
    pub openai_config: OpenAIConfig,
    pub base_url: String,
    pub model_id: String,
    /// Show HH:MM next to message labels (ADAPT_UI_SHOW_TIMESTAMPS).
    pub show_timestamps: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("OPENROUTER_API_KEY is not set")]
    MissingApiKey,
}

/// Load configuration from environment. Returns an error if API key is missing.
pub fn load() -> Result<Config, ConfigError> {
    from_lookup(|key| env::var(key).ok())
}

/// Build the config from any key/value source (the environment in production).
pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let base_url = non_empty("OPENROUTER_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let api_key = non_empty("OPENROUTER_API_KEY").ok_or(ConfigError::MissingApiKey)?;
    let model_id = non_empty("OPENROUTER_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
    let show_timestamps = non_empty("ADAPT_UI_SHOW_TIMESTAMPS")
        .is_some_and(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"));

    let openai_config = OpenAIConfig::new()
        .with_api_base(base_url.clone())
        .with_api_key(api_key);

    Ok(Config {
        openai_config,
        base_url,
        model_id,
        show_timestamps,
    })
}

/// Model id that would be used, with where it came from. Works without an API key.
pub fn model_source() -> (String, &'static str) {
    match env::var("OPENROUTER_MODEL") {
        Ok(id) if !id.trim().is_empty() => (id, "from OPENROUTER_MODEL"),
        _ => (DEFAULT_MODEL.to_string(), "default"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_api_key_is_error() {
        let err = from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
        assert_eq!(err.to_string(), "OPENROUTER_API_KEY is not set");
    }

    #[test]
    fn blank_api_key_is_treated_as_missing() {
        let err = from_lookup(lookup(&[("OPENROUTER_API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn defaults_apply() {
        let config = from_lookup(lookup(&[("OPENROUTER_API_KEY", "sk-test")])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model_id, DEFAULT_MODEL);
        assert!(!config.show_timestamps);
    }

    #[test]
    fn overrides_apply() {
        let config = from_lookup(lookup(&[
            ("OPENROUTER_API_KEY", "sk-test"),
            ("OPENROUTER_BASE_URL", "http://localhost:8080/v1"),
            ("OPENROUTER_MODEL", "openai/gpt-4o-mini"),
            ("ADAPT_UI_SHOW_TIMESTAMPS", "true"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.model_id, "openai/gpt-4o-mini");
        assert!(config.show_timestamps);
    }
}
