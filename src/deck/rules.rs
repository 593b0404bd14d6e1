//! Combo validation and piece uniqueness.

use super::types::{Combo, ComboField};

/// Ratchets that stand in for a bit, so the bit may stay empty.
pub const BIT_EXEMPT_RATCHETS: [&str; 2] = ["Operate - OP", "Turbo - Tr"];

pub fn is_bit_exempt(combo: &Combo) -> bool {
    BIT_EXEMPT_RATCHETS.contains(&combo.ratchet.as_str())
}

/// Blade and ratchet are required; bit too unless the ratchet is exempt.
pub fn is_combo_valid(combo: &Combo) -> bool {
    !combo.blade.is_empty()
        && !combo.ratchet.is_empty()
        && (is_bit_exempt(combo) || !combo.bit.is_empty())
}

/// Required fields still empty, for error styling.
pub fn missing_fields(combo: &Combo) -> Vec<ComboField> {
    let mut missing = Vec::new();
    if combo.blade.is_empty() {
        missing.push(ComboField::Blade);
    }
    if combo.ratchet.is_empty() {
        missing.push(ComboField::Ratchet);
    }
    if combo.bit.is_empty() && !is_bit_exempt(combo) {
        missing.push(ComboField::Bit);
    }
    missing
}

/// Options still selectable for `field` of the combo at `index`.
///
/// With repeats allowed every option is returned. Otherwise values already
/// picked for the same field by another combo are removed. An empty option
/// always stays selectable.
pub fn allowed_options<'a>(
    options: &[&'a str],
    field: ComboField,
    index: usize,
    combos: &[Combo],
    allow_repeats: bool,
) -> Vec<&'a str> {
    if allow_repeats {
        return options.to_vec();
    }

    let used: Vec<&str> = combos
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, c)| c.get(field))
        .filter(|v| !v.is_empty())
        .collect();

    options
        .iter()
        .copied()
        .filter(|opt| opt.is_empty() || !used.contains(opt))
        .collect()
}
