//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly.

mod assistant;
mod openleg;
mod output;

pub use assistant::FileAssistantConfig;
pub use openleg::FileOpenLegConfig;
pub use output::FileOutputConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Assistant endpoint settings
    pub assistant: FileAssistantConfig,
    /// Open Legislation API settings
    pub openleg: FileOpenLegConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Check the merged configuration for suspicious values.
    ///
    /// Returns human-readable warnings; nothing here is fatal.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.assistant.model.trim().is_empty() {
            warnings.push("assistant.model is empty".to_string());
        }
        if self.assistant.max_tokens == 0 {
            warnings.push("assistant.max_tokens is 0; replies will be empty".to_string());
        }
        if self.openleg.session_year % 2 == 0 {
            warnings.push(format!(
                "openleg.session_year {} is even; NY sessions start on odd years",
                self.openleg.session_year
            ));
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[assistant]
base_url = "https://llm.example.com/v1"
model = "gpt-4o"
max_tokens = 2048

[openleg]
session_year = 2025
api_key_env = "MY_OPENLEG_KEY"

[output]
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.assistant.base_url, "https://llm.example.com/v1");
        assert_eq!(config.assistant.model, "gpt-4o");
        assert_eq!(config.assistant.max_tokens, 2048);
        assert_eq!(config.openleg.session_year, 2025);
        assert_eq!(config.openleg.api_key_env, "MY_OPENLEG_KEY");
        assert!(!config.output.color);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[assistant]
model = "gpt-4o"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.assistant.model, "gpt-4o");
        // Defaults should apply
        assert_eq!(config.assistant.max_tokens, 1024);
        assert!(config.output.color);
        assert!(config.output.transcript.is_none());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.assistant.api_key_env, "OPENAI_API_KEY");
        assert!(config.assistant.api_key.is_none());
        assert!(config.output.color);
        assert_eq!(config.openleg.session_year % 2, 1);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_flags_even_session_year() {
        let mut config = FileConfig::default();
        config.openleg.session_year = 2024;
        let warnings = config.validate();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("2024"));
    }
}
