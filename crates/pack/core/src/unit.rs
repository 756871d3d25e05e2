//! Generated unit instances.
//!
//! Units are created fresh for every spawn call and handed to the caller;
//! nothing here refers back to the loaded configuration.

use std::collections::BTreeMap;

use crate::data::{Affix, Immunities, ResistanceMap};

/// Scaled combat stats.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatBlock {
    pub hp: i64,
    /// Rounded to two decimals.
    pub dps: f64,
    pub def: i64,
}

/// Snapshot of an affix at the time it was attached.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AffixInstance {
    pub id: String,
    pub mods: BTreeMap<String, f64>,
}

impl From<&Affix> for AffixInstance {
    fn from(affix: &Affix) -> Self {
        Self {
            id: affix.id.clone(),
            mods: affix.mods.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UnitInstance {
    /// Short base-36 token drawn from the spawn's RNG stream.
    pub id: String,
    pub monster_id: String,
    /// `<Capitalized monster id> <tier id>`.
    pub name: String,
    pub tier: String,
    pub level: i32,
    pub stats: StatBlock,
    pub resists: ResistanceMap,
    pub immune: Immunities,
    pub affixes: Vec<AffixInstance>,
    /// Combat role of the monster (`melee`, `ranged`, ...).
    pub role: String,
    /// Behaviour id the AI layer drives the unit with.
    pub ai: String,
    pub loot_table: String,
}

/// Upper bound of the unit id draw: 36^6, i.e. six base-36 digits.
pub const UNIT_ID_SPACE: i64 = 2_176_782_336;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Formats `value` as lowercase base-36 padded to six digits.
pub fn base36_token(mut value: u64) -> String {
    let mut digits = Vec::with_capacity(6);
    loop {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
        if value == 0 {
            break;
        }
    }
    while digits.len() < 6 {
        digits.push(b'0');
    }
    digits.reverse();
    digits.into_iter().map(char::from).collect()
}
