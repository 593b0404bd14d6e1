use bbx_deck_tauri::export::{self, build_sheet, Cell, ExportKind};
use bbx_deck_tauri::share::{self, QR_SIZE};
use bbx_deck_tauri::store::AppendOutcome;
use bbx_deck_tauri::{Combo, ComboCount, Deck, DeckError, DeckStore};
use calamine::{open_workbook, Reader, Xlsx};
use std::path::Path;
use tempfile::TempDir;

/// Sheet names and every row of a written workbook, cells as text.
fn read_workbook(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("Failed to open workbook");
    let names = workbook.sheet_names();
    let range = workbook
        .worksheet_range(&names[0])
        .expect("Failed to read sheet");
    let rows = range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();
    (names, rows)
}

fn combo(blade: &str, ratchet: &str, bit: &str) -> Combo {
    Combo {
        blade: blade.to_string(),
        ratchet: ratchet.to_string(),
        bit: bit.to_string(),
        ..Default::default()
    }
}

fn three_combo_deck(tournament: &str, blader: &str) -> Deck {
    Deck {
        blader: blader.to_string(),
        date: "15-03-2025".to_string(),
        combos: vec![
            combo("Dran Sword", "3-60", "Flat"),
            combo("Wizard Rod", "Operate - OP", ""),
            combo("Shark Edge", "1-60", "Gear Flat"),
        ],
        tournament: tournament.to_string(),
        combo_count: ComboCount::Three,
    }
}

#[test]
fn test_saved_decks_flow_into_history_export() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = DeckStore::new(&dir.path().join("bbx_decks.db")).expect("Failed to open store");

    assert_eq!(
        store.append_deck(&three_combo_deck("Copa Norte", "Ana")).unwrap(),
        AppendOutcome::Appended { group_len: 1 }
    );
    store
        .append_deck(&three_combo_deck("Copa Sur", "Beto"))
        .unwrap();
    store
        .append_deck(&three_combo_deck("Copa Norte", "Caro"))
        .unwrap();

    let all = store.all_decks().unwrap();
    let sheet = build_sheet(&all);
    assert_eq!(sheet.rows.len(), 3);
    assert_eq!(sheet.headers.len(), 4 + 3 * 5);
    // Ordinals run across the concatenated groups
    assert_eq!(sheet.rows[2][3], Cell::Number(3.0));
    assert_eq!(sheet.rows[2][0], Cell::Text("Copa Sur".to_string()));

    let out = dir.path().join("exports");
    let path = export::export_history(&store, &out).expect("History export failed");
    assert_eq!(path, out.join(ExportKind::History.file_name()));

    let (names, rows) = read_workbook(&path);
    assert_eq!(names, vec!["Historial BBX"]);
    assert_eq!(rows.len(), 4);
    assert_eq!(
        rows[0][..9],
        [
            "Torneo",
            "Blader",
            "Fecha",
            "Mazo",
            "C1 Lock Chip",
            "C1 Assist Blade",
            "C1 Blade",
            "C1 Ratchet",
            "C1 Bit"
        ]
    );
    assert_eq!(rows[0][18], "C3 Bit");
    assert_eq!(rows[1][..3], ["Copa Norte", "Ana", "15-03-2025"]);
    assert_eq!(rows[3][0], "Copa Sur");
}

#[test]
fn test_session_export_writes_mazos_file() {
    let dir = TempDir::new().unwrap();
    let decks = vec![three_combo_deck("Copa Norte", "Ana")];

    let path = export::export_session(&decks, dir.path())
        .unwrap()
        .expect("Expected a written file");
    assert_eq!(path.file_name().unwrap(), "bbx-mazos.xlsx");

    let (names, rows) = read_workbook(&path);
    assert_eq!(names, vec!["Mazos BBX"]);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][4], "C1 Lock Chip");
    assert_eq!(rows[1][6], "Dran Sword");
    assert_eq!(rows[1][11], "Wizard Rod");
}

#[test]
fn test_history_export_on_empty_store_is_user_error() {
    let dir = TempDir::new().unwrap();
    let store = DeckStore::new(&dir.path().join("bbx_decks.db")).unwrap();

    let err = export::export_history(&store, dir.path()).unwrap_err();
    assert!(matches!(err, DeckError::EmptyHistory));
    assert_eq!(err.to_string(), "No hay mazos guardados en historial.");
}

#[test]
fn test_share_card_and_print_document() {
    let text = "BBX-DECK\n\nTorneo: Copa Norte\nBlader: Ana\nFecha: 15-03-2025\n\n\
                Combo 1: Dran Sword | 3-60 | Flat\n\
                Combo 2: Wizard Rod | Operate - OP\n\
                Combo 3: Shark Edge | 1-60 | Gear Flat";

    let card = share::share_image(text, "Ana", "15-03-2025").unwrap();
    assert_eq!(card.width, QR_SIZE);
    assert_eq!(card.height, QR_SIZE + 60 + 20);
    assert!(card.data_url.starts_with("data:image/png;base64,"));

    let pdf = share::share_print_document(text, "Ana", "15-03-2025").unwrap();
    assert!(!pdf.is_empty());
}
