//! Editor session state and its transitions.
//!
//! The page keeps one `DeckSession` in a signal and routes every user action
//! through [`DeckSession::reduce`]. Transitions never touch the browser or the
//! backend; side effects come back as a [`DeckEffect`] for the caller to run.

use super::pieces::options_for;
use super::rules::{allowed_options, is_combo_valid};
use super::share_text::compose_share_text;
use super::types::{Combo, ComboCount, ComboField, Deck};

/// Alert shown when saving without a tournament name.
pub const MISSING_TOURNAMENT_MESSAGE: &str = "Ingrese el nombre del torneo.";

#[derive(Debug, Clone, PartialEq)]
pub struct DeckSession {
    pub blader: String,
    pub tournament: String,
    pub combo_count: ComboCount,
    pub combos: Vec<Combo>,
    pub allow_repeats: bool,
    /// Decks saved since the page was loaded.
    pub saved_decks: Vec<Deck>,
    pub can_clear: bool,
}

impl Default for DeckSession {
    fn default() -> Self {
        Self {
            blader: String::new(),
            tournament: String::new(),
            combo_count: ComboCount::One,
            combos: vec![Combo::default()],
            allow_repeats: false,
            saved_decks: Vec::new(),
            can_clear: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeckAction {
    SetTournament(String),
    SetBlader(String),
    SetComboCount(ComboCount),
    UpdateCombo {
        index: usize,
        field: ComboField,
        value: String,
    },
    SetAllowRepeats(bool),
    /// Save a snapshot dated `date`.
    SaveDeck { date: String },
    ClearInputs,
    ExportSession,
}

/// Work the page must carry out after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum DeckEffect {
    /// Append this deck to the persisted store.
    Persist(Deck),
    /// Write these decks to the session spreadsheet.
    Export(Vec<Deck>),
    /// Show a blocking alert.
    Alert(&'static str),
}

impl DeckSession {
    pub fn reduce(&mut self, action: DeckAction) -> Option<DeckEffect> {
        match action {
            DeckAction::SetTournament(name) => {
                self.tournament = name;
                None
            }
            DeckAction::SetBlader(name) => {
                self.blader = name;
                None
            }
            DeckAction::SetComboCount(count) => {
                self.combo_count = count;
                self.combos.resize_with(count.len(), Combo::default);
                None
            }
            DeckAction::UpdateCombo {
                index,
                field,
                value,
            } => {
                if let Some(combo) = self.combos.get_mut(index) {
                    *combo = combo.with(field, value);
                }
                None
            }
            DeckAction::SetAllowRepeats(allow) => {
                self.allow_repeats = allow;
                None
            }
            DeckAction::SaveDeck { date } => self.save_deck(date),
            DeckAction::ClearInputs => {
                if self.can_clear {
                    self.blader.clear();
                    self.combos = vec![Combo::default(); self.combo_count.len()];
                    self.can_clear = false;
                }
                None
            }
            DeckAction::ExportSession => {
                if self.saved_decks.is_empty() {
                    None
                } else {
                    Some(DeckEffect::Export(self.saved_decks.clone()))
                }
            }
        }
    }

    fn save_deck(&mut self, date: String) -> Option<DeckEffect> {
        if self.tournament.trim().is_empty() {
            return Some(DeckEffect::Alert(MISSING_TOURNAMENT_MESSAGE));
        }

        let deck = Deck {
            blader: self.blader.clone(),
            date,
            combos: self.combos.clone(),
            tournament: self.tournament.clone(),
            combo_count: self.combo_count,
        };
        self.saved_decks.push(deck.clone());
        self.can_clear = true;
        Some(DeckEffect::Persist(deck))
    }

    /// Names filled in and every combo valid.
    pub fn is_ready(&self) -> bool {
        !self.blader.trim().is_empty()
            && !self.tournament.trim().is_empty()
            && self.combos.iter().all(is_combo_valid)
    }

    /// Options the selector for `field` of combo `index` may offer.
    pub fn options(&self, field: ComboField, index: usize) -> Vec<&'static str> {
        allowed_options(
            options_for(field),
            field,
            index,
            &self.combos,
            self.allow_repeats,
        )
    }

    pub fn share_text(&self, date: &str) -> String {
        compose_share_text(&self.tournament, &self.blader, date, &self.combos)
    }
}
