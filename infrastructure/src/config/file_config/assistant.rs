//! Assistant endpoint configuration from TOML (`[assistant]` section)

use serde::{Deserialize, Serialize};

/// Raw assistant configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAssistantConfig {
    /// Environment variable holding the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended; use the env var instead).
    pub api_key: Option<String>,
    /// Base URL of the chat completions endpoint.
    pub base_url: String,
    /// Default model for answers.
    pub model: String,
    /// Max tokens per reply.
    pub max_tokens: u32,
}

impl Default for FileAssistantConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            max_tokens: 1024,
        }
    }
}

impl FileAssistantConfig {
    /// Resolve the API key: an explicit `api_key` wins, otherwise read the
    /// configured environment variable. Empty values count as absent.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(key) = &self.api_key
            && !key.is_empty()
        {
            return Some(key.clone());
        }
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_key_wins_over_env() {
        let config = FileAssistantConfig {
            api_key: Some("direct".to_string()),
            api_key_env: "STATEHOUSE_TEST_KEY_THAT_DOES_NOT_EXIST".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("direct"));
    }

    #[test]
    fn missing_key_resolves_to_none() {
        let config = FileAssistantConfig {
            api_key: None,
            api_key_env: "STATEHOUSE_TEST_KEY_THAT_DOES_NOT_EXIST".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), None);
    }

    #[test]
    fn empty_explicit_key_counts_as_absent() {
        let config = FileAssistantConfig {
            api_key: Some(String::new()),
            api_key_env: "STATEHOUSE_TEST_KEY_THAT_DOES_NOT_EXIST".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), None);
    }
}
