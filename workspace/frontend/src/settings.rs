use log::Level;
use web_sys::window;

const STORAGE_PREFIX: &str = "fuelctl_";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Base URL every endpoint path is appended to (e.g. "http://localhost:5000/api")
    pub api_base_url: String,

    /// Period of the dashboard summary refresh in milliseconds
    pub refresh_interval_ms: u32,

    /// How long a notification stays on screen before fading out
    pub toast_duration_ms: u32,

    /// Length of the notification fade-out
    pub toast_fade_ms: u32,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".to_string(),
            refresh_interval_ms: 30_000,
            toast_duration_ms: 3_000,
            toast_fade_ms: 300,
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from the window location and localStorage overrides
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            settings.apply_overrides(|key| {
                storage
                    .get_item(&format!("{}{}", STORAGE_PREFIX, key))
                    .ok()
                    .flatten()
            });
        }

        settings
    }

    /// Applies every override `lookup` knows about. Values that don't parse are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup("api_base_url") {
            let base_url = base_url.trim().trim_end_matches('/');
            if !base_url.is_empty() {
                self.api_base_url = base_url.to_string();
            }
        }

        if let Some(interval) = lookup("refresh_interval_ms").and_then(|v| v.trim().parse::<u32>().ok()) {
            if interval > 0 {
                self.refresh_interval_ms = interval;
            }
        }

        if let Some(duration) = lookup("toast_duration_ms").and_then(|v| v.trim().parse::<u32>().ok()) {
            self.toast_duration_ms = duration;
        }

        if let Some(level) = lookup("log_level") {
            self.log_level = match level.trim().to_lowercase().as_str() {
                "error" => Level::Error,
                "warn" => Level::Warn,
                "info" => Level::Info,
                "debug" => Level::Debug,
                "trace" => Level::Trace,
                _ => self.log_level,
            };
        }
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.api_base_url, "http://localhost:5000/api");
        assert_eq!(settings.refresh_interval_ms, 30_000);
        assert_eq!(settings.toast_duration_ms, 3_000);
        assert_eq!(settings.log_level, Level::Info);
    }

    #[test]
    fn test_overrides_are_applied() {
        let mut settings = AppSettings::default();
        settings.apply_overrides(lookup_from(&[
            ("api_base_url", "https://fuel.example.com/api/"),
            ("refresh_interval_ms", "60000"),
            ("toast_duration_ms", "5000"),
            ("log_level", "TRACE"),
        ]));

        assert_eq!(settings.api_base_url, "https://fuel.example.com/api");
        assert_eq!(settings.refresh_interval_ms, 60_000);
        assert_eq!(settings.toast_duration_ms, 5_000);
        assert_eq!(settings.log_level, Level::Trace);
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let mut settings = AppSettings::default();
        settings.apply_overrides(lookup_from(&[
            ("api_base_url", "   "),
            ("refresh_interval_ms", "0"),
            ("toast_duration_ms", "soon"),
            ("log_level", "verbose"),
        ]));

        assert_eq!(settings, AppSettings::default());
    }
}
