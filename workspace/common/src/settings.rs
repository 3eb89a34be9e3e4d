//! Narrow persisted-settings interface.
//!
//! The dashboard persists exactly one value, the sidebar open flag. Browser
//! builds back [`SettingsStore`] with `localStorage`; tests and the terminal
//! front end use [`MemorySettings`].

use std::cell::RefCell;
use std::collections::HashMap;
use tracing::debug;

/// Storage key of the sidebar open/closed flag.
pub const SIDEBAR_STATE_KEY: &str = "sidebar:state";

/// Key-value persistence for boolean UI settings.
pub trait SettingsStore {
    /// Reads `key`. Absent keys yield `default`; any stored value other than
    /// `"true"` reads as `false`.
    fn load_bool(&self, key: &str, default: bool) -> bool;

    /// Writes `key` as `"true"` or `"false"`.
    fn save_bool(&self, key: &str, value: bool);
}

/// In-memory settings store.
#[derive(Debug, Default)]
pub struct MemorySettings {
    values: RefCell<HashMap<String, String>>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw stored value, as if another session had written it.
    pub fn with_raw(self, key: &str, raw: &str) -> Self {
        self.values.borrow_mut().insert(key.to_string(), raw.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl SettingsStore for MemorySettings {
    fn load_bool(&self, key: &str, default: bool) -> bool {
        match self.values.borrow().get(key) {
            Some(saved) => saved == "true",
            None => default,
        }
    }

    fn save_bool(&self, key: &str, value: bool) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Sidebar open flag, read once at startup and written on every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarState {
    open: bool,
}

impl SidebarState {
    /// Loads the flag, defaulting to open.
    pub fn load(store: &dyn SettingsStore) -> Self {
        let open = store.load_bool(SIDEBAR_STATE_KEY, true);
        debug!(open, "Loaded sidebar state");
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Sets the flag and persists it.
    pub fn set_open(&mut self, open: bool, store: &dyn SettingsStore) {
        self.open = open;
        store.save_bool(SIDEBAR_STATE_KEY, open);
    }

    /// Flips the flag, persists it and returns the new value.
    pub fn toggle(&mut self, store: &dyn SettingsStore) -> bool {
        self.set_open(!self.open, store);
        self.open
    }
}
