/// Literal key used when no key variable is set. Calls made with it fail
/// upstream with an authentication error.
pub const FALLBACK_API_KEY: &str = "default_key";

/// Provider connection settings loaded from environment variables.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Bearer token for the provider API.
    pub api_key: String,
    /// Base URL including the version prefix, without a trailing slash.
    pub base_url: String,
    /// Model used for JSON-mode chat completions.
    pub chat_model: String,
    /// Model used for image generation.
    pub image_model: String,
    /// Per-call HTTP timeout in seconds.
    pub timeout_secs: u64,
}

impl OpenAiConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                       |
    /// |--------------------------|-------------------------------|
    /// | `OPENAI_API_KEY`         | `OPENAI_API_KEY_ENV_VAR`, then `default_key` |
    /// | `OPENAI_BASE_URL`        | `https://api.openai.com/v1`   |
    /// | `OPENAI_CHAT_MODEL`      | `gpt-4o`                      |
    /// | `OPENAI_IMAGE_MODEL`     | `dall-e-3`                    |
    /// | `OPENAI_TIMEOUT_SECS`    | `120`                         |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty("OPENAI_API_KEY")
            .or_else(|| non_empty("OPENAI_API_KEY_ENV_VAR"))
            .unwrap_or_else(|| {
                tracing::warn!("No provider API key configured, generation calls will fail");
                FALLBACK_API_KEY.to_string()
            });

        let base_url = non_empty("OPENAI_BASE_URL")
            .unwrap_or_else(|| "https://api.openai.com/v1".into())
            .trim_end_matches('/')
            .to_string();

        let chat_model = non_empty("OPENAI_CHAT_MODEL").unwrap_or_else(|| "gpt-4o".into());
        let image_model = non_empty("OPENAI_IMAGE_MODEL").unwrap_or_else(|| "dall-e-3".into());

        let timeout_secs: u64 = non_empty("OPENAI_TIMEOUT_SECS")
            .unwrap_or_else(|| "120".into())
            .parse()
            .expect("OPENAI_TIMEOUT_SECS must be a valid u64");

        Self {
            api_key,
            base_url,
            chat_model,
            image_model,
            timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = OpenAiConfig::from_lookup(lookup(&[]));
        assert_eq!(config.api_key, FALLBACK_API_KEY);
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.chat_model, "gpt-4o");
        assert_eq!(config.image_model, "dall-e-3");
        assert_eq!(config.timeout_secs, 120);
    }

    #[test]
    fn primary_key_wins_over_secondary() {
        let config = OpenAiConfig::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-primary"),
            ("OPENAI_API_KEY_ENV_VAR", "sk-secondary"),
        ]));
        assert_eq!(config.api_key, "sk-primary");
    }

    #[test]
    fn secondary_key_used_when_primary_blank() {
        let config = OpenAiConfig::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "  "),
            ("OPENAI_API_KEY_ENV_VAR", "sk-secondary"),
        ]));
        assert_eq!(config.api_key, "sk-secondary");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let config =
            OpenAiConfig::from_lookup(lookup(&[("OPENAI_BASE_URL", "http://localhost:9000/v1/")]));
        assert_eq!(config.base_url, "http://localhost:9000/v1");
    }
}
