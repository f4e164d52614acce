//! Start-up configuration. Defaults depend on the build profile and can be
//! overridden from the page query string: `?debug=true&log=trace`.

use serde::Deserialize;

pub const APP_TITLE: &str = "LMS Admin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Show error details in the error boundaries
    pub dev_mode: bool,
    pub log_level: log::Level,
    pub app_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dev_mode: cfg!(debug_assertions),
            log_level: if cfg!(debug_assertions) {
                log::Level::Debug
            } else {
                log::Level::Info
            },
            app_title: APP_TITLE.to_string(),
        }
    }
}

/// Raw query parameters; anything unparseable is dropped
#[derive(Debug, Default, Deserialize)]
struct QueryOverrides {
    debug: Option<String>,
    log: Option<String>,
}

impl AppConfig {
    /// Applies overrides from a query string (with or without the leading `?`)
    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        let overrides: QueryOverrides =
            serde_qs::from_str(query.trim_start_matches('?')).unwrap_or_default();

        match overrides.debug.as_deref() {
            Some("true") | Some("1") => config.dev_mode = true,
            Some("false") | Some("0") => config.dev_mode = false,
            _ => {}
        }
        if let Some(level) = overrides.log.as_deref().and_then(parse_level) {
            config.log_level = level;
        }
        config
    }

    /// Reads the current page location
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }
}

fn parse_level(raw: &str) -> Option<log::Level> {
    match raw.to_ascii_lowercase().as_str() {
        "trace" => Some(log::Level::Trace),
        "debug" => Some(log::Level::Debug),
        "info" => Some(log::Level::Info),
        "warn" => Some(log::Level::Warn),
        "error" => Some(log::Level::Error),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_keeps_defaults() {
        assert_eq!(AppConfig::from_query(""), AppConfig::default());
        assert_eq!(AppConfig::from_query("?"), AppConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::from_query("?debug=true&log=warn");
        assert!(config.dev_mode);
        assert_eq!(config.log_level, log::Level::Warn);

        let config = AppConfig::from_query("debug=0&log=TRACE");
        assert!(!config.dev_mode);
        assert_eq!(config.log_level, log::Level::Trace);
    }

    #[test]
    fn invalid_values_are_ignored() {
        let config = AppConfig::from_query("?debug=maybe&log=loud&other=1");
        let defaults = AppConfig::default();
        assert_eq!(config.dev_mode, defaults.dev_mode);
        assert_eq!(config.log_level, defaults.log_level);
        assert_eq!(config.app_title, APP_TITLE);
    }
}
