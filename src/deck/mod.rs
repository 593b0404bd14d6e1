//! Deck editing rules, independent of the UI.

pub mod pieces;
pub mod rules;
pub mod session;
pub mod share_text;
pub mod types;

pub use rules::{is_bit_exempt, missing_fields};
pub use session::{DeckAction, DeckEffect, DeckSession};
pub use share_text::format_date;
pub use types::{Combo, ComboCount, ComboField, Deck};
