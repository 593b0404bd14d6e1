//! Deck records shared by the store, the spreadsheet export and the commands.

pub mod types;

pub use types::{Combo, ComboCount, ComboField, Deck};
