use keep::session::{self, SessionUser};
use serde::{Deserialize, Serialize};

use super::Theme;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub(super) fn local_storage_get_string(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

pub(super) fn local_storage_set_string(key: &str, value: &str) {
    if let Some(s) = local_storage() {
        let _ = s.set_item(key, value);
    }
}

pub(super) fn local_storage_remove(key: &str) {
    if let Some(s) = local_storage() {
        let _ = s.remove_item(key);
    }
}

/// Read the persisted session. A record that fails to parse is dropped from
/// storage and treated as logged out.
pub(super) fn load_session() -> Option<SessionUser> {
    let raw = local_storage_get_string(super::LOCALSTORAGE_SESSION_KEY)?;
    match session::parse_session(&raw) {
        Some(user) => Some(user),
        None => {
            local_storage_remove(super::LOCALSTORAGE_SESSION_KEY);
            None
        }
    }
}

pub(super) fn save_session(user: &SessionUser) {
    if let Some(raw) = session::serialize_session(user) {
        local_storage_set_string(super::LOCALSTORAGE_SESSION_KEY, &raw);
    }
}

pub(super) fn clear_session() {
    local_storage_remove(super::LOCALSTORAGE_SESSION_KEY);
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct PersistedSettings {
    #[serde(default = "default_model")]
    pub(super) model: String,
    #[serde(default)]
    pub(super) api_key: String,
    #[serde(default = "default_theme")]
    pub(super) theme: String,
}

fn default_model() -> String {
    "gemini-pro".to_string()
}

fn default_theme() -> String {
    "dark".to_string()
}

impl Default for PersistedSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: String::new(),
            theme: default_theme(),
        }
    }
}

pub(super) fn load_persisted_settings() -> Option<PersistedSettings> {
    let raw = local_storage_get_string(super::LOCALSTORAGE_SETTINGS_KEY)?;
    serde_json::from_str(&raw).ok()
}

pub(super) fn save_persisted_settings(settings: &PersistedSettings) {
    if let Ok(raw) = serde_json::to_string(settings) {
        local_storage_set_string(super::LOCALSTORAGE_SETTINGS_KEY, &raw);
    }
}

pub(super) fn parse_theme_pref(v: &str) -> Option<Theme> {
    match v.trim().to_ascii_lowercase().as_str() {
        "dark" => Some(Theme::Dark),
        "light" => Some(Theme::Light),
        _ => None,
    }
}

pub(super) fn apply_theme_to_document(theme: Theme) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(el) = doc.document_element() else {
        return;
    };
    let _ = el.set_attribute("data-theme", theme.as_attr());
}
