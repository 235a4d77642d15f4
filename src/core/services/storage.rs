use web_sys::Storage;

use crate::config::{PREFERS_DARK_QUERY, THEME_STORAGE_KEY};
use crate::core::error::StorageError;
use crate::core::models::Theme;

fn local_storage() -> Result<Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

// Saved preference first, then the browser's color scheme.
pub fn load_theme() -> Theme {
    let saved = local_storage()
        .ok()
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten());

    match saved.as_deref().map(str::parse::<Theme>) {
        Some(Ok(theme)) => theme,
        Some(Err(unknown)) => {
            web_sys::console::warn_1(&format!("Ignoring saved theme {:?}", unknown.0).into());
            system_theme()
        }
        None => system_theme(),
    }
}

fn system_theme() -> Theme {
    let prefers_dark = web_sys::window()
        .and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten())
        .is_some_and(|query| query.matches());
    if prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

pub fn save_theme(theme: Theme) -> Result<(), StorageError> {
    local_storage()?
        .set_item(THEME_STORAGE_KEY, theme.as_str())
        .map_err(|e| StorageError::Write {
            key: THEME_STORAGE_KEY.to_string(),
            reason: format!("{:?}", e),
        })
}

/// Sets the theme as the class of the `<html>` element.
pub fn apply_theme(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        root.set_class_name(theme.as_str());
    }
}

// Save theme with logging for use in effects
pub fn persist_theme(theme: Theme) {
    apply_theme(theme);
    match save_theme(theme) {
        Ok(()) => web_sys::console::log_1(&format!("Theme set to {}", theme).into()),
        Err(e) => web_sys::console::error_1(&format!("Failed to save theme: {}", e).into()),
    }
}
