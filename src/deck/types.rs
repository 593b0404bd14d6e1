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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComboField {
    LockChip,
    AssistBlade,
    Blade,
    Ratchet,
    Bit,
}

impl ComboField {
    /// Display and share-text order.
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

    /// Copy of this combo with one field replaced.
    pub fn with(&self, field: ComboField, value: String) -> Combo {
        let mut next = self.clone();
        match field {
            ComboField::LockChip => next.lock_chip = value,
            ComboField::AssistBlade => next.assist_blade = value,
            ComboField::Blade => next.blade = value,
            ComboField::Ratchet => next.ratchet = value,
            ComboField::Bit => next.bit = value,
        }
        next
    }
}

/// Number of combos in a deck: 1, 3 or 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ComboCount {
    #[default]
    One,
    Three,
    Five,
}

impl ComboCount {
    pub const ALL: [ComboCount; 3] = [ComboCount::One, ComboCount::Three, ComboCount::Five];

    pub fn len(self) -> usize {
        u8::from(self) as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            ComboCount::One => "1 Combo",
            ComboCount::Three => "3 Combos",
            ComboCount::Five => "5 Combos",
        }
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
            other => Err(format!("Invalid combo count {}", other)),
        }
    }
}

/// A saved deck, as sent to the backend store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub blader: String,
    pub date: String,
    pub combos: Vec<Combo>,
    pub tournament: String,
    pub combo_count: ComboCount,
}
