use super::types::{Combo, ComboField};

/// First line of every share payload.
pub const SHARE_HEADER: &str = "BBX-DECK";

/// Text encoded in the deck QR code.
///
/// ```text
/// BBX-DECK
///
/// Torneo: <tournament>
/// Blader: <blader>
/// Fecha: <date>
///
/// Combo 1: <parts joined by " | ">
/// ```
pub fn compose_share_text(tournament: &str, blader: &str, date: &str, combos: &[Combo]) -> String {
    let mut lines = vec![
        SHARE_HEADER.to_string(),
        String::new(),
        format!("Torneo: {}", tournament),
        format!("Blader: {}", blader),
        format!("Fecha: {}", date),
        String::new(),
    ];

    for (i, combo) in combos.iter().enumerate() {
        let parts: Vec<&str> = ComboField::ALL
            .iter()
            .map(|&f| combo.get(f))
            .filter(|v| !v.is_empty())
            .collect();
        lines.push(format!("Combo {}: {}", i + 1, parts.join(" | ")));
    }

    lines.join("\n")
}

/// Short date the way the `es-CL` locale prints it: `dd-mm-yyyy`.
pub fn format_date(day: u32, month: u32, year: i32) -> String {
    format!("{:02}-{:02}-{}", day, month, year)
}
