//! Persistence helpers for the theme preference.

use crate::core::theme::ThemeMode;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use serde::Serialize;

/// Storage key holding the persisted theme identifier.
pub(crate) const THEME_KEY: &str = "theme";

/// Stored theme identifier, if storage is reachable and holds one.
pub(crate) fn load_theme() -> Option<String> {
    if !storage_available() {
        return None;
    }
    LocalStorage::get::<String>(THEME_KEY).ok()
}

/// Persist the active theme; failures degrade to session-only behavior.
pub(crate) fn persist_theme(mode: ThemeMode) {
    if storage_available() {
        set_storage(THEME_KEY, mode.as_str());
    }
}

// Profiles that block storage throw on bare access; the fallible accessor
// turns that into a clean miss.
fn storage_available() -> bool {
    gloo::utils::window().local_storage().ok().flatten().is_some()
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::warn!("storage operation failed", operation, key, detail);
}
