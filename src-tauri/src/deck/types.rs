use serde::{Deserialize, Serialize};

/// One combo: five optional parts, each empty or a value from the piece lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Combo {
    pub lock_chip: String,
    pub assist_blade: String,
    pub blade: String,
    pub ratchet: String,
    pub bit: String,
}

/// The five combo fields in their fixed display and export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboField {
    LockChip,
    AssistBlade,
    Blade,
    Ratchet,
    Bit,
}

impl ComboField {
    pub const ALL: [ComboField; 5] = [
        ComboField::LockChip,
        ComboField::AssistBlade,
        ComboField::Blade,
        ComboField::Ratchet,
        ComboField::Bit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ComboField::LockChip => "Lock Chip",
            ComboField::AssistBlade => "Assist Blade",
            ComboField::Blade => "Blade",
            ComboField::Ratchet => "Ratchet",
            ComboField::Bit => "Bit",
        }
    }
}

impl Combo {
    pub fn get(&self, field: ComboField) -> &str {
        match field {
            ComboField::LockChip => &self.lock_chip,
            ComboField::AssistBlade => &self.assist_blade,
            ComboField::Blade => &self.blade,
            ComboField::Ratchet => &self.ratchet,
            ComboField::Bit => &self.bit,
        }
    }
}

/// Number of combos in a deck. Only 1, 3 and 5 are legal formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ComboCount {
    One,
    Three,
    Five,
}

impl ComboCount {
    pub fn len(self) -> usize {
        u8::from(self) as usize
    }
}

impl From<ComboCount> for u8 {
    fn from(count: ComboCount) -> Self {
        match count {
            ComboCount::One => 1,
            ComboCount::Three => 3,
            ComboCount::Five => 5,
        }
    }
}

impl TryFrom<u8> for ComboCount {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ComboCount::One),
            3 => Ok(ComboCount::Three),
            5 => Ok(ComboCount::Five),
            other => Err(format!("Invalid combo count {}: expected 1, 3 or 5", other)),
        }
    }
}

/// A saved deck as stored under its tournament key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub blader: String,
    pub date: String,
    pub combos: Vec<Combo>,
    pub tournament: String,
    pub combo_count: ComboCount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_json_uses_camel_case() {
        let deck = Deck {
            blader: "Ana".to_string(),
            date: "01-01-2024".to_string(),
            combos: vec![Combo {
                blade: "Dran Sword".to_string(),
                ratchet: "3-60".to_string(),
                bit: "Flat".to_string(),
                ..Default::default()
            }],
            tournament: "Cup1".to_string(),
            combo_count: ComboCount::One,
        };

        let json = serde_json::to_value(&deck).unwrap();
        assert_eq!(json["comboCount"], 1);
        assert_eq!(json["combos"][0]["lockChip"], "");
        assert_eq!(json["combos"][0]["assistBlade"], "");
        assert_eq!(json["combos"][0]["blade"], "Dran Sword");
    }

    #[test]
    fn test_combo_count_rejects_other_sizes() {
        let json = r#"{"blader":"a","date":"d","combos":[],"tournament":"t","comboCount":2}"#;
        let result: Result<Deck, _> = serde_json::from_str(json);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("expected 1, 3 or 5"));
    }

    #[test]
    fn test_combo_missing_fields_default_to_empty() {
        let combo: Combo = serde_json::from_str(r#"{"blade":"Wizard Rod"}"#).unwrap();
        assert_eq!(combo.blade, "Wizard Rod");
        assert_eq!(combo.get(ComboField::Bit), "");
    }

    #[test]
    fn test_field_labels_in_order() {
        let labels: Vec<_> = ComboField::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(
            labels,
            vec!["Lock Chip", "Assist Blade", "Blade", "Ratchet", "Bit"]
        );
    }
}
