//! Tauri commands for spreadsheet export.

use std::path::PathBuf;

use tracing::info;

use super::deck::{app_data_dir, open_store};
use crate::deck::Deck;
use crate::error::DeckError;
use crate::export;

/// Where exported workbooks are written: the user's downloads folder,
/// falling back to the app data dir.
fn export_dir(app: &tauri::AppHandle) -> Result<PathBuf, DeckError> {
    match dirs::download_dir() {
        Some(dir) => Ok(dir),
        None => app_data_dir(app),
    }
}

/// Export the decks saved during the current session.
///
/// Returns the written path, or `None` when there was nothing to export.
#[tauri::command]
pub fn export_session_decks(
    app: tauri::AppHandle,
    decks: Vec<Deck>,
) -> Result<Option<String>, String> {
    let dir = export_dir(&app)?;
    let path = export::export_session(&decks, &dir)?;
    Ok(path.map(|p| p.to_string_lossy().into_owned()))
}

/// Export every stored deck. Fails with a user-facing message when the
/// store is empty.
#[tauri::command]
pub fn export_history(app: tauri::AppHandle) -> Result<String, String> {
    let store = open_store(&app)?;
    let dir = export_dir(&app)?;
    let path = export::export_history(&store, &dir)?;
    info!("History exported to {:?}", path);
    Ok(path.to_string_lossy().into_owned())
}
