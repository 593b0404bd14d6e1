pub mod deck_store;

pub use deck_store::{storage_key, AppendOutcome, DeckStore, STORAGE_PREFIX};
