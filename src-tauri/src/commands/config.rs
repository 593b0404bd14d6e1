use tauri::AppHandle;
use tauri_plugin_store::StoreExt;
use tracing::{info, warn};

use crate::error::DeckError;

const PREFERENCES_STORE: &str = "preferences.json";
const THEME_KEY: &str = "bbx-theme";
const DEFAULT_THEME: &str = "dark";

/// Accept only the two supported themes.
fn parse_theme(value: &str) -> Option<&'static str> {
    match value {
        "dark" => Some("dark"),
        "light" => Some("light"),
        _ => None,
    }
}

#[tauri::command]
pub fn get_theme(app: AppHandle) -> Result<String, String> {
    let store = app.store(PREFERENCES_STORE).map_err(|e| {
        warn!("Failed to open store: {}", e);
        DeckError::Config(e.to_string())
    })?;
    let theme = store
        .get(THEME_KEY)
        .and_then(|v| v.as_str().and_then(parse_theme))
        .unwrap_or(DEFAULT_THEME);
    info!("Loaded theme preference: {}", theme);
    Ok(theme.to_string())
}

#[tauri::command]
pub fn set_theme(app: AppHandle, theme: String) -> Result<(), String> {
    let theme = parse_theme(&theme)
        .ok_or_else(|| DeckError::Config(format!("Unknown theme '{}'", theme)))?;
    info!("Setting theme preference: {}", theme);
    let store = app.store(PREFERENCES_STORE).map_err(|e| {
        warn!("Failed to open store: {}", e);
        DeckError::Config(e.to_string())
    })?;
    store.set(THEME_KEY, serde_json::json!(theme));
    store.save().map_err(|e| {
        warn!("Failed to save store: {}", e);
        DeckError::Config(e.to_string()).into()
    })
}
