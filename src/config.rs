//! Page Configuration
//!
//! Build-time overrides (`MEAL_*` env vars seen by the compiler) plus the
//! runtime `?fmSeq=` query parameter.

use log::LevelFilter;
use percent_encoding::percent_decode_str;

pub const DEFAULT_API_URL: &str =
    "https://seocheon-m.goeyi.kr/seocheon-m/ad/fm/foodmenu/selectFoodData.do";
pub const DEFAULT_AGENT_PROBES: u32 = 30;
pub const DEFAULT_FALLBACK_PHOTO: &str = "assets/meal-placeholder.svg";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Meal endpoint (POST, form-encoded)
    pub api_url: String,
    /// Probe bound for "find next" when the agent toggle is on
    pub agent_probe_limit: u32,
    /// Image shown until a photo is picked
    pub fallback_photo: String,
    pub log_level: LevelFilter,
    /// Identifier loaded on startup
    pub initial_seq: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            agent_probe_limit: DEFAULT_AGENT_PROBES,
            fallback_photo: DEFAULT_FALLBACK_PHOTO.to_string(),
            log_level: LevelFilter::Info,
            initial_seq: None,
        }
    }
}

impl AppConfig {
    /// Apply build-time overrides; invalid values keep the defaults.
    pub fn from_overrides(
        api_url: Option<&str>,
        agent_probes: Option<&str>,
        fallback_photo: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_url: api_url
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.api_url),
            agent_probe_limit: agent_probes
                .and_then(|v| v.trim().parse::<u32>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.agent_probe_limit),
            fallback_photo: fallback_photo
                .filter(|p| !p.trim().is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.fallback_photo),
            log_level: log_level
                .and_then(|v| v.trim().parse::<LevelFilter>().ok())
                .unwrap_or(defaults.log_level),
            initial_seq: None,
        }
    }

    /// Load the config for the running page
    pub fn load() -> Self {
        let mut config = Self::from_overrides(
            option_env!("MEAL_API_URL"),
            option_env!("MEAL_AGENT_PROBES"),
            option_env!("MEAL_FALLBACK_PHOTO"),
            option_env!("MEAL_LOG"),
        );
        config.initial_seq = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .and_then(|search| seq_from_query(&search));
        config
    }
}

/// Extract `fmSeq` from a query string such as `?fmSeq=1203&x=1`
pub fn seq_from_query(search: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "fmSeq")
        .map(|(_, value)| {
            let value = value.replace('+', " ");
            percent_decode_str(&value).decode_utf8_lossy().trim().to_string()
        })
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_overrides() {
        let config = AppConfig::from_overrides(None, None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.agent_probe_limit, 30);
    }

    #[test]
    fn test_overrides_applied() {
        let config = AppConfig::from_overrides(
            Some("http://localhost:8080/food"),
            Some("5"),
            Some("img/tray.png"),
            Some("debug"),
        );
        assert_eq!(config.api_url, "http://localhost:8080/food");
        assert_eq!(config.agent_probe_limit, 5);
        assert_eq!(config.fallback_photo, "img/tray.png");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_overrides_fall_back() {
        let config = AppConfig::from_overrides(Some("  "), Some("0"), Some(""), Some("loud"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_seq_from_query() {
        assert_eq!(seq_from_query("?fmSeq=1203"), Some("1203".to_string()));
        assert_eq!(seq_from_query("?a=1&fmSeq=%2042%20"), Some("42".to_string()));
        assert_eq!(seq_from_query("?fmSeq="), None);
        assert_eq!(seq_from_query(""), None);
        assert_eq!(seq_from_query("?seq=9"), None);
    }
}
