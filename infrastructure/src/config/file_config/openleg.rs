//! Open Legislation configuration from TOML (`[openleg]` section)

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Raw Open Legislation configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenLegConfig {
    /// Environment variable holding the API key (default: "OPENLEG_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended; use the env var instead).
    pub api_key: Option<String>,
    /// Base URL of the Open Legislation service.
    pub base_url: String,
    /// Legislative session year bills are looked up in.
    pub session_year: i32,
}

impl Default for FileOpenLegConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENLEG_API_KEY".to_string(),
            api_key: None,
            base_url: "https://legislation.nysenate.gov".to_string(),
            session_year: default_session_year(),
        }
    }
}

impl FileOpenLegConfig {
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

/// NY legislative sessions span two years and start on odd years, so the
/// default is the current year rounded down to odd.
fn default_session_year() -> i32 {
    let year = Utc::now().year();
    if year % 2 == 0 { year - 1 } else { year }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_year_is_odd() {
        assert_eq!(default_session_year() % 2, 1);
    }

    #[test]
    fn deserialize_overrides_session_year() {
        let toml_str = r#"
[openleg]
session_year = 2023
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.openleg.session_year, 2023);
        assert_eq!(
            config.openleg.base_url,
            "https://legislation.nysenate.gov"
        );
    }
}
