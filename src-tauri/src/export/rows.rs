//! Flattening of decks into spreadsheet rows.

use crate::deck::{ComboField, Deck};

/// Columns that precede the per-combo columns.
pub const BASE_COLUMNS: [&str; 4] = ["Torneo", "Blader", "Fecha", "Mazo"];

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Blank,
}

/// Header plus one row per deck, all rows the width of the header.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

/// Column name for a combo field at 1-based position `n`, e.g. `C2 Assist Blade`.
pub fn combo_column(n: usize, field: ComboField) -> String {
    format!("C{} {}", n, field.label())
}

/// Build the sheet for `decks`. `Mazo` is the 1-based ordinal within `decks`.
/// The header covers the largest combo count present; decks with fewer combos
/// leave the trailing cells blank.
pub fn build_sheet(decks: &[Deck]) -> Sheet {
    let max_combos = decks.iter().map(|d| d.combos.len()).max().unwrap_or(0);

    let mut headers: Vec<String> = BASE_COLUMNS.iter().map(|s| s.to_string()).collect();
    for n in 1..=max_combos {
        for field in ComboField::ALL {
            headers.push(combo_column(n, field));
        }
    }

    let rows = decks
        .iter()
        .enumerate()
        .map(|(deck_index, deck)| {
            let mut row = vec![
                Cell::Text(deck.tournament.clone()),
                Cell::Text(deck.blader.clone()),
                Cell::Text(deck.date.clone()),
                Cell::Number((deck_index + 1) as f64),
            ];
            for combo in &deck.combos {
                for field in ComboField::ALL {
                    row.push(Cell::Text(combo.get(field).to_string()));
                }
            }
            row.resize(headers.len(), Cell::Blank);
            row
        })
        .collect();

    Sheet { headers, rows }
}
