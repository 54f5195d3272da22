//! Session configuration.

use std::time::Duration;

use serde::Deserialize;

use invoicer_layout::PageTemplate;
use invoicer_observability::LogConfig;

use crate::error::SessionError;

/// Everything a session can be tuned with. All fields are optional when
/// deserializing; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Artificial wait before the backend runs, in milliseconds. Zero
    /// disables it; tests raise it to observe the in-flight state.
    pub simulated_latency_ms: u64,
    /// Page template name (`a4`).
    pub page: String,
    pub log: LogConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 0,
            page: "a4".to_string(),
            log: LogConfig::default(),
        }
    }
}

impl SessionConfig {
    pub fn from_json(text: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    /// Install the process-wide subscriber described by `log`.
    pub fn init_logging(&self) {
        invoicer_observability::init_with(&self.log);
    }

    pub fn template(&self) -> Result<PageTemplate, SessionError> {
        PageTemplate::named(&self.page).ok_or_else(|| SessionError::UnknownPage(self.page.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_no_latency_and_a4() {
        let config = SessionConfig::default();
        assert_eq!(config.simulated_latency(), Duration::ZERO);
        assert_eq!(config.template().unwrap(), PageTemplate::a4());
    }

    #[test]
    fn parses_partial_json() {
        let config = SessionConfig::from_json(r#"{"simulated_latency_ms": 1500}"#).unwrap();
        assert_eq!(config.simulated_latency(), Duration::from_millis(1500));
        assert_eq!(config.page, "a4");
    }

    #[test]
    fn unknown_page_is_an_error() {
        let config = SessionConfig::from_json(r#"{"page": "letter"}"#).unwrap();
        match config.template() {
            Err(SessionError::UnknownPage(name)) => assert_eq!(name, "letter"),
            other => panic!("expected UnknownPage, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(
            SessionConfig::from_json("{"),
            Err(SessionError::Config(_))
        ));
    }
}
