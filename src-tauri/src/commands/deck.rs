//! Tauri commands for the persisted deck store.

use std::path::PathBuf;

use serde::Serialize;
use tauri::Manager;
use tracing::info;

use crate::deck::Deck;
use crate::error::DeckError;
use crate::store::{AppendOutcome, DeckStore};

/// File name of the deck database inside the app data dir.
pub const DECK_DB_FILE: &str = "bbx_decks.db";

/// Message shown when a deck is saved without a tournament name.
pub const MISSING_TOURNAMENT_MESSAGE: &str = "Ingrese el nombre del torneo.";

pub(crate) fn app_data_dir(app: &tauri::AppHandle) -> Result<PathBuf, DeckError> {
    app.path()
        .app_data_dir()
        .map_err(|e| DeckError::Config(format!("Failed to get data dir: {}", e)))
}

pub(crate) fn open_store(app: &tauri::AppHandle) -> Result<DeckStore, DeckError> {
    DeckStore::new(&app_data_dir(app)?.join(DECK_DB_FILE))
}

/// One tournament and its saved decks, for the history view.
#[derive(Debug, Clone, Serialize)]
pub struct TournamentDecks {
    pub tournament: String,
    pub decks: Vec<Deck>,
}

fn store_deck(store: &DeckStore, deck: &Deck) -> Result<usize, String> {
    if deck.tournament.trim().is_empty() {
        return Err(MISSING_TOURNAMENT_MESSAGE.to_string());
    }

    match store.append_deck(deck)? {
        AppendOutcome::Appended { group_len } => Ok(group_len),
        AppendOutcome::SkippedCorrupt => Err(DeckError::Storage(format!(
            "los mazos guardados de '{}' están dañados, el mazo no se guardó",
            deck.tournament
        ))
        .into()),
    }
}

/// Append a deck to its tournament group.
///
/// Returns the number of decks now stored for that tournament. Fails when the
/// stored group is unreadable, leaving it untouched.
#[tauri::command]
pub fn save_deck(app: tauri::AppHandle, deck: Deck) -> Result<usize, String> {
    let store = open_store(&app)?;
    store_deck(&store, &deck)
}

/// Names of all tournaments with saved decks, first saved first.
#[tauri::command]
pub fn list_tournaments(app: tauri::AppHandle) -> Result<Vec<String>, String> {
    let store = open_store(&app)?;
    let tournaments = store.tournaments()?;
    info!("Listed {} tournaments", tournaments.len());
    Ok(tournaments)
}

/// Every tournament group with its decks.
#[tauri::command]
pub fn list_decks(app: tauri::AppHandle) -> Result<Vec<TournamentDecks>, String> {
    let store = open_store(&app)?;
    let groups = store
        .groups()?
        .into_iter()
        .map(|(tournament, decks)| TournamentDecks { tournament, decks })
        .collect::<Vec<_>>();
    info!("Loaded {} tournament groups", groups.len());
    Ok(groups)
}
