//! Spreadsheet export of saved decks.

pub mod rows;
pub mod workbook;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::deck::Deck;
use crate::error::DeckError;
use crate::store::DeckStore;

pub use rows::{build_sheet, Cell, Sheet};
pub use workbook::{write_workbook, ExportKind};

/// Export the decks saved during the current session.
///
/// Returns `None` without touching the disk when there is nothing to export.
pub fn export_session(decks: &[Deck], dir: &Path) -> Result<Option<PathBuf>, DeckError> {
    if decks.is_empty() {
        info!("No session decks to export");
        return Ok(None);
    }
    let path = write_workbook(&build_sheet(decks), ExportKind::Session, dir)
        .map_err(|e| DeckError::Export(format!("{:#}", e)))?;
    Ok(Some(path))
}

/// Export every deck in the store. An empty store is a user-facing error.
pub fn export_history(store: &DeckStore, dir: &Path) -> Result<PathBuf, DeckError> {
    let decks = store.all_decks()?;
    if decks.is_empty() {
        return Err(DeckError::EmptyHistory);
    }
    write_workbook(&build_sheet(&decks), ExportKind::History, dir)
        .map_err(|e| DeckError::Export(format!("{:#}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_export_session_empty_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let result = export_session(&[], dir.path()).unwrap();
        assert!(result.is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_export_history_empty_store_fails() {
        let dir = TempDir::new().unwrap();
        let store = DeckStore::new(&dir.path().join("decks.db")).unwrap();
        let out = dir.path().join("out");

        let err = export_history(&store, &out).unwrap_err();
        assert!(matches!(err, DeckError::EmptyHistory));
        assert!(!out.join("bbx-historial.xlsx").exists());
    }
}
