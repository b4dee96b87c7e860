//! Engine configuration.
//!
//! All fields have defaults, so an empty document (or no document at all)
//! yields the stock behavior.

use crate::repo::layout_repo::DEFAULT_LAYOUT_KEY;
use crate::service::theme_service::DEFAULT_THEME_KEY;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_TRANSITION_DELAY_MS: u64 = 300;

/// Tunables for storage keys and the shuffle/reset transition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Key under which the custom layout is stored.
    pub layout_key: String,
    /// Key under which the theme preference is stored.
    pub theme_key: String,
    /// Delay between starting a shuffle/reset and applying it.
    pub transition_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            layout_key: DEFAULT_LAYOUT_KEY.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
            transition_delay_ms: DEFAULT_TRANSITION_DELAY_MS,
        }
    }
}

impl EngineConfig {
    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::EngineConfig;
    use std::time::Duration;

    #[test]
    fn defaults_match_dashboard_behavior() {
        let config = EngineConfig::default();
        assert_eq!(config.layout_key, "bento-layout");
        assert_eq!(config.theme_key, "theme");
        assert_eq!(config.transition_delay(), Duration::from_millis(300));
    }

    #[test]
    fn partial_document_keeps_remaining_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "transition_delay_ms": 0 }"#).unwrap();
        assert_eq!(config.transition_delay(), Duration::ZERO);
        assert_eq!(config.layout_key, "bento-layout");
    }
}
