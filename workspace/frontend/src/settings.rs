use common::{SettingsStore, TimelineView};
use log::Level;
use wasm_bindgen::JsValue;
use web_sys::{window, Storage};

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Default log level for the application
    pub log_level: Level,

    /// Currency symbol used by statistic headers and tables
    pub currency_symbol: String,

    /// Timeline view the finance page opens with
    pub default_view: TimelineView,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            currency_symbol: "$".to_string(),
            default_view: TimelineView::Monthly,
            debug_mode: false,
        }
    }
}

fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }
        }

        if let Some(storage) = local_storage() {
            if let Ok(Some(log_level)) = storage.get_item("kpidash_log_level") {
                settings.log_level = parse_level(&log_level).unwrap_or(settings.log_level);
            }

            if let Ok(Some(symbol)) = storage.get_item("kpidash_currency_symbol") {
                if !symbol.is_empty() {
                    settings.currency_symbol = symbol;
                }
            }

            if let Ok(Some(view)) = storage.get_item("kpidash_default_view") {
                if let Ok(view) = view.parse::<TimelineView>() {
                    settings.default_view = view;
                }
            }
        }

        settings
    }

    /// Save settings to localStorage
    pub fn save_to_storage(&self) -> Result<(), JsValue> {
        if let Some(storage) = local_storage() {
            storage.set_item("kpidash_log_level", &self.log_level.as_str().to_lowercase())?;
            storage.set_item("kpidash_currency_symbol", &self.currency_symbol)?;
            storage.set_item("kpidash_default_view", self.default_view.as_str())?;
        }
        Ok(())
    }
}

/// [`SettingsStore`] over `window.localStorage`. Missing storage behaves like
/// an empty store that forgets writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSettings;

impl SettingsStore for LocalStorageSettings {
    fn load_bool(&self, key: &str, default: bool) -> bool {
        match local_storage().map(|s| s.get_item(key)) {
            Some(Ok(Some(saved))) => saved == "true",
            Some(Ok(None)) | None => default,
            Some(Err(e)) => {
                log::warn!("Failed to read {} from localStorage: {:?}", key, e);
                default
            }
        }
    }

    fn save_bool(&self, key: &str, value: bool) {
        let Some(storage) = local_storage() else {
            log::debug!("localStorage unavailable, not persisting {}", key);
            return;
        };
        if let Err(e) = storage.set_item(key, if value { "true" } else { "false" }) {
            log::warn!("Failed to persist {} to localStorage: {:?}", key, e);
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

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
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

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), Some(Level::Debug));
        assert_eq!(parse_level("warn"), Some(Level::Warn));
        assert_eq!(parse_level("verbose"), None);
    }

    #[test]
    fn test_update_settings() {
        update_settings(|s| s.currency_symbol = "€".to_string());
        assert_eq!(get_settings().currency_symbol, "€");
        update_settings(|s| *s = AppSettings::default());
        assert_eq!(get_settings().currency_symbol, "$");
    }
}
