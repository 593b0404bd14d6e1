use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{info, warn};

use crate::deck::Deck;
use crate::error::DeckError;

/// Prefix shared by every tournament key in the store.
pub const STORAGE_PREFIX: &str = "bbx-decks-";

/// Storage key for a tournament. The name is embedded as-is.
pub fn storage_key(tournament: &str) -> String {
    format!("{}{}", STORAGE_PREFIX, tournament)
}

/// Result of appending a deck to its tournament group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The deck was written; the group now holds `group_len` decks.
    Appended { group_len: usize },
    /// The stored group could not be parsed and was left untouched.
    SkippedCorrupt,
}

/// Key-value store of saved decks, one JSON array per tournament.
/// All operations are synchronous (rusqlite is blocking).
/// Appends are read-then-write without locking: the last writer wins.
pub struct DeckStore {
    conn: Connection,
}

impl DeckStore {
    /// Create or open the deck database at `db_path`.
    pub fn new(db_path: &Path) -> Result<Self, DeckError> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| DeckError::Storage(format!("Failed to create data dir: {}", e)))?;
        }

        let conn = Connection::open(db_path).map_err(|e| {
            DeckError::Storage(format!("Failed to open deck db at {:?}: {}", db_path, e))
        })?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS local_storage (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
            [],
        )
        .map_err(|e| DeckError::Storage(format!("Failed to create table: {}", e)))?;

        info!("Opened deck store at {:?}", db_path);
        Ok(Self { conn })
    }

    /// Append a deck to the group of its tournament.
    pub fn append_deck(&self, deck: &Deck) -> Result<AppendOutcome, DeckError> {
        let key = storage_key(&deck.tournament);

        let mut decks = match self.read_raw(&key)? {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<Deck>>(&raw) {
                Ok(decks) => decks,
                Err(e) => {
                    warn!("Stored decks under '{}' are unreadable, not appending: {}", key, e);
                    return Ok(AppendOutcome::SkippedCorrupt);
                }
            },
        };
        decks.push(deck.clone());

        let json = serde_json::to_string(&decks)
            .map_err(|e| DeckError::Storage(format!("Failed to serialize decks: {}", e)))?;

        self.conn
            .execute(
                "INSERT INTO local_storage (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, json, Utc::now().to_rfc3339()],
            )
            .map_err(|e| DeckError::Storage(format!("Failed to write decks: {}", e)))?;

        info!(
            "Saved deck for blader '{}' under '{}' ({} total)",
            deck.blader,
            key,
            decks.len()
        );
        Ok(AppendOutcome::Appended {
            group_len: decks.len(),
        })
    }

    /// Decks saved for one tournament, oldest first.
    pub fn decks_for(&self, tournament: &str) -> Result<Vec<Deck>, DeckError> {
        let key = storage_key(tournament);
        Ok(self
            .read_raw(&key)?
            .map(|raw| parse_group(&key, &raw))
            .unwrap_or_default())
    }

    /// Tournament names in the order they were first saved.
    pub fn tournaments(&self) -> Result<Vec<String>, DeckError> {
        Ok(self
            .keys()?
            .into_iter()
            .filter_map(|key| key.strip_prefix(STORAGE_PREFIX).map(str::to_string))
            .collect())
    }

    /// Every tournament group with its decks.
    pub fn groups(&self) -> Result<Vec<(String, Vec<Deck>)>, DeckError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT key, value FROM local_storage
                 WHERE substr(key, 1, length(?1)) = ?1
                 ORDER BY rowid",
            )
            .map_err(|e| DeckError::Storage(format!("Failed to prepare query: {}", e)))?;

        let rows = stmt
            .query_map(params![STORAGE_PREFIX], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })
            .map_err(|e| DeckError::Storage(format!("Failed to query decks: {}", e)))?;

        let mut groups = Vec::new();
        for row in rows {
            let (key, raw) =
                row.map_err(|e| DeckError::Storage(format!("Failed to read row: {}", e)))?;
            let decks = parse_group(&key, &raw);
            let tournament = key[STORAGE_PREFIX.len()..].to_string();
            groups.push((tournament, decks));
        }
        Ok(groups)
    }

    /// All decks across all tournaments, concatenated group by group.
    pub fn all_decks(&self) -> Result<Vec<Deck>, DeckError> {
        Ok(self
            .groups()?
            .into_iter()
            .flat_map(|(_, decks)| decks)
            .collect())
    }

    fn keys(&self) -> Result<Vec<String>, DeckError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT key FROM local_storage
                 WHERE substr(key, 1, length(?1)) = ?1
                 ORDER BY rowid",
            )
            .map_err(|e| DeckError::Storage(format!("Failed to prepare query: {}", e)))?;

        let rows = stmt
            .query_map(params![STORAGE_PREFIX], |row| row.get::<_, String>(0))
            .map_err(|e| DeckError::Storage(format!("Failed to query keys: {}", e)))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| DeckError::Storage(format!("Failed to collect keys: {}", e)))
    }

    fn read_raw(&self, key: &str) -> Result<Option<String>, DeckError> {
        self.conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| DeckError::Storage(format!("Failed to read '{}': {}", key, e)))
    }
}

fn parse_group(key: &str, raw: &str) -> Vec<Deck> {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        warn!("Ignoring unreadable decks under '{}': {}", key, e);
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Combo, ComboCount};
    use tempfile::TempDir;

    fn create_test_store() -> (DeckStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = DeckStore::new(&dir.path().join("decks.db")).unwrap();
        (store, dir)
    }

    fn deck(tournament: &str, blader: &str) -> Deck {
        Deck {
            blader: blader.to_string(),
            date: "01-01-2024".to_string(),
            combos: vec![Combo {
                blade: "Dran Sword".to_string(),
                ratchet: "3-60".to_string(),
                bit: "Flat".to_string(),
                ..Default::default()
            }],
            tournament: tournament.to_string(),
            combo_count: ComboCount::One,
        }
    }

    fn put_raw(store: &DeckStore, key: &str, value: &str) {
        store
            .conn
            .execute(
                "INSERT INTO local_storage (key, value, updated_at) VALUES (?1, ?2, 'now')",
                params![key, value],
            )
            .unwrap();
    }

    #[test]
    fn test_storage_key_embeds_name_verbatim() {
        assert_eq!(storage_key("Copa Chile 2024"), "bbx-decks-Copa Chile 2024");
        assert_eq!(storage_key(""), "bbx-decks-");
    }

    #[test]
    fn test_append_and_read_back() {
        let (store, _dir) = create_test_store();

        let outcome = store.append_deck(&deck("Cup1", "Ana")).unwrap();
        assert_eq!(outcome, AppendOutcome::Appended { group_len: 1 });
        let outcome = store.append_deck(&deck("Cup1", "Beto")).unwrap();
        assert_eq!(outcome, AppendOutcome::Appended { group_len: 2 });

        let decks = store.decks_for("Cup1").unwrap();
        assert_eq!(decks.len(), 2);
        assert_eq!(decks[0].blader, "Ana");
        assert_eq!(decks[1].blader, "Beto");
    }

    #[test]
    fn test_value_is_json_array_of_decks() {
        let (store, _dir) = create_test_store();
        store.append_deck(&deck("Cup1", "Ana")).unwrap();

        let raw = store.read_raw("bbx-decks-Cup1").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["tournament"], "Cup1");
        assert_eq!(value[0]["comboCount"], 1);
    }

    #[test]
    fn test_unknown_tournament_is_empty() {
        let (store, _dir) = create_test_store();
        assert!(store.decks_for("nope").unwrap().is_empty());
    }

    #[test]
    fn test_tournaments_in_first_saved_order() {
        let (store, _dir) = create_test_store();
        store.append_deck(&deck("Zeta", "Ana")).unwrap();
        store.append_deck(&deck("Alfa", "Beto")).unwrap();
        store.append_deck(&deck("Zeta", "Caro")).unwrap();

        assert_eq!(store.tournaments().unwrap(), vec!["Zeta", "Alfa"]);
    }

    #[test]
    fn test_foreign_keys_are_ignored() {
        let (store, _dir) = create_test_store();
        put_raw(&store, "bbx-theme", "\"dark\"");
        store.append_deck(&deck("Cup1", "Ana")).unwrap();

        assert_eq!(store.tournaments().unwrap(), vec!["Cup1"]);
        assert_eq!(store.all_decks().unwrap().len(), 1);
    }

    #[test]
    fn test_all_decks_concatenates_groups() {
        let (store, _dir) = create_test_store();
        store.append_deck(&deck("A", "Ana")).unwrap();
        store.append_deck(&deck("B", "Beto")).unwrap();
        store.append_deck(&deck("A", "Caro")).unwrap();

        let bladers: Vec<_> = store
            .all_decks()
            .unwrap()
            .into_iter()
            .map(|d| d.blader)
            .collect();
        assert_eq!(bladers, vec!["Ana", "Caro", "Beto"]);
    }

    #[test]
    fn test_all_decks_empty_store() {
        let (store, _dir) = create_test_store();
        assert!(store.all_decks().unwrap().is_empty());
        assert!(store.groups().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_group_is_skipped_on_read_and_append() {
        let (store, _dir) = create_test_store();
        put_raw(&store, "bbx-decks-Broken", "{not json");
        store.append_deck(&deck("Cup1", "Ana")).unwrap();

        assert!(store.decks_for("Broken").unwrap().is_empty());
        assert_eq!(store.all_decks().unwrap().len(), 1);

        let outcome = store.append_deck(&deck("Broken", "Beto")).unwrap();
        assert_eq!(outcome, AppendOutcome::SkippedCorrupt);
        assert_eq!(
            store.read_raw("bbx-decks-Broken").unwrap().as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn test_store_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("decks.db");
        {
            let store = DeckStore::new(&path).unwrap();
            store.append_deck(&deck("Cup1", "Ana")).unwrap();
        }
        let store = DeckStore::new(&path).unwrap();
        assert_eq!(store.decks_for("Cup1").unwrap().len(), 1);
    }
}
