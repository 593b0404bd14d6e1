//! Piece lists offered by the combo selectors, in display order.

use super::types::ComboField;

pub const LOCK_CHIPS: &[&str] = &[
    "Dran", "Wizard", "Perseus", "Hells", "Rhino", "Fox", "Pegasus", "Cerberus", "Whale", "Sol",
    "Phoenix", "Valkyrie", "Emperor", "Ragna", "Bahamut", "Knight",
];

pub const ASSIST_BLADES: &[&str] = &[
    "Slash - S",
    "Round - R",
    "Bumper - B",
    "Turn - T",
    "Charge - C",
    "Heavy - H",
    "Jaggy - J",
    "Wheel - W",
    "Assault - A",
    "Dual - D",
    "Free - F",
    "Massive - M",
];

pub const BLADES: &[&str] = &[
    "Dran Sword",
    "Hells Scythe",
    "Wizard Arrow",
    "Knight Shield",
    "Knight Lance",
    "Shark Edge",
    "Leon Claw",
    "Viper Tail",
    "Rhino Horn",
    "Dran Dagger",
    "Hells Chain",
    "Phoenix Wing",
    "Wyvern Gale",
    "Unicorn Sting",
    "Sphinx Cowl",
    "Tyranno Beat",
    "Weiss Tiger",
    "Cobalt Dragoon",
    "Black Shell",
    "Whale Wave",
    "Silver Wolf",
    "Samurai Saber",
    "Knight Mail",
    "Dran Buster",
    "Hells Hammer",
    "Wizard Rod",
    "Shinobi Shadow",
    "Leon Crest",
    "Phoenix Rudder",
    "Impact Drake",
    "Tusk Mammoth",
    "Ghost Circle",
    "Golem Rock",
    "Scorpio Spear",
    "Meteor Dragoon",
    "Aero Pegasus",
    "Crimson Garuda",
    "Bite Croc",
    "Mummy Curse",
    "Shelter Drake",
    "Brave",
    "Arc",
    "Dark",
    "Reaper",
    "Brush",
    "Flame",
    "Eclipse",
];

pub const RATCHETS: &[&str] = &[
    "0-70",
    "0-80",
    "1-60",
    "1-70",
    "1-80",
    "2-60",
    "2-70",
    "2-80",
    "3-60",
    "3-70",
    "3-80",
    "3-85",
    "4-50",
    "4-55",
    "4-60",
    "4-70",
    "4-80",
    "5-60",
    "5-70",
    "5-80",
    "6-60",
    "6-70",
    "6-80",
    "7-55",
    "7-60",
    "7-70",
    "7-80",
    "9-60",
    "9-65",
    "9-70",
    "9-80",
    "M-85",
    "Operate - OP",
    "Turbo - Tr",
];

pub const BITS: &[&str] = &[
    "Flat - F",
    "Ball - B",
    "Needle - N",
    "High Needle - HN",
    "Taper - T",
    "High Taper - HT",
    "Point - P",
    "Orb - O",
    "Spike - S",
    "Dot - D",
    "Gear Flat - GF",
    "Gear Ball - GB",
    "Gear Point - GP",
    "Gear Needle - GN",
    "Rush - R",
    "Low Flat - LF",
    "Low Rush - LR",
    "Low Orb - LO",
    "Accel - A",
    "Hexa - H",
    "Unite - U",
    "Cyclone - C",
    "Disc Ball - DB",
    "Elevate - E",
    "Quake - Q",
    "Free Ball - FB",
    "Glide - G",
    "Level - L",
    "Kick - K",
    "Bound Spike - BS",
    "Rubber Accel - RA",
    "Vortex - V",
    "Wedge - W",
    "Trans Point - TP",
    "Merge - M",
    "Zap - Z",
    "Jolt - J",
    "Under Needle - UN",
    "Under Flat - UF",
    "Metal Needle - MN",
    "Ignition - I",
];

/// Option list for a combo field.
pub fn options_for(field: ComboField) -> &'static [&'static str] {
    match field {
        ComboField::LockChip => LOCK_CHIPS,
        ComboField::AssistBlade => ASSIST_BLADES,
        ComboField::Blade => BLADES,
        ComboField::Ratchet => RATCHETS,
        ComboField::Bit => BITS,
    }
}
