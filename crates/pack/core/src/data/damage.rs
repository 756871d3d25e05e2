//! Damage types, resistance maps and immunity sets.

use bitflags::bitflags;
use strum::{EnumCount, IntoEnumIterator};

/// Lowest stored resistance value.
pub const RESIST_MIN: f64 = -100.0;
/// Highest stored resistance value. Anything at or above 100 before clamping
/// is recorded as an immunity instead.
pub const RESIST_MAX: f64 = 99.0;
/// Combined resistance at which a damage type becomes an immunity.
pub const IMMUNITY_THRESHOLD: f64 = 100.0;

/// Damage type keys shared by resistances, bonuses and affix mods.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum DamageType {
    Physical,
    Fire,
    Cold,
    Lightning,
    Poison,
}

impl DamageType {
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Affix mod key that grants resistance of this type (`fire_res`, ...).
    pub const fn resist_mod_key(self) -> &'static str {
        match self {
            DamageType::Physical => "physical_res",
            DamageType::Fire => "fire_res",
            DamageType::Cold => "cold_res",
            DamageType::Lightning => "lightning_res",
            DamageType::Poison => "poison_res",
        }
    }

    const fn immunity_flag(self) -> Immunities {
        match self {
            DamageType::Physical => Immunities::PHYSICAL,
            DamageType::Fire => Immunities::FIRE,
            DamageType::Cold => Immunities::COLD,
            DamageType::Lightning => Immunities::LIGHTNING,
            DamageType::Poison => Immunities::POISON,
        }
    }
}

/// One value per damage type. Missing entries are zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResistanceMap {
    values: [f64; DamageType::COUNT],
}

impl ResistanceMap {
    pub const fn zero() -> Self {
        Self {
            values: [0.0; DamageType::COUNT],
        }
    }

    /// Same value for every damage type.
    pub const fn uniform(value: f64) -> Self {
        Self {
            values: [value; DamageType::COUNT],
        }
    }

    #[inline]
    pub fn get(&self, kind: DamageType) -> f64 {
        self.values[kind.as_index()]
    }

    #[inline]
    pub fn set(&mut self, kind: DamageType, value: f64) {
        self.values[kind.as_index()] = value;
    }

    /// Builder-style [`ResistanceMap::set`].
    #[must_use]
    pub fn with(mut self, kind: DamageType, value: f64) -> Self {
        self.set(kind, value);
        self
    }

    /// Adds `value` to one entry. Non-finite contributions count as zero.
    pub fn add(&mut self, kind: DamageType, value: f64) {
        if value.is_finite() {
            self.values[kind.as_index()] += value;
        }
    }

    /// Entry-wise sum.
    #[must_use]
    pub fn merged(mut self, other: &ResistanceMap) -> Self {
        for kind in DamageType::iter() {
            self.add(kind, other.get(kind));
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (DamageType, f64)> + '_ {
        DamageType::iter().map(|kind| (kind, self.get(kind)))
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| *v == 0.0)
    }
}

impl FromIterator<(DamageType, f64)> for ResistanceMap {
    fn from_iter<I: IntoIterator<Item = (DamageType, f64)>>(iter: I) -> Self {
        let mut map = Self::zero();
        for (kind, value) in iter {
            map.add(kind, value);
        }
        map
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ResistanceMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(DamageType::COUNT))?;
        for (kind, value) in self.iter() {
            map.serialize_entry(kind.as_ref(), &value)?;
        }
        map.end()
    }
}

bitflags! {
    /// Damage types a unit ignores entirely.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Immunities: u8 {
        const PHYSICAL  = 1 << 0;
        const FIRE      = 1 << 1;
        const COLD      = 1 << 2;
        const LIGHTNING = 1 << 3;
        const POISON    = 1 << 4;
    }
}

impl Immunities {
    pub fn insert_type(&mut self, kind: DamageType) {
        self.insert(kind.immunity_flag());
    }

    pub fn is_immune(&self, kind: DamageType) -> bool {
        self.contains(kind.immunity_flag())
    }

    /// Immune damage types in declaration order.
    pub fn types(&self) -> impl Iterator<Item = DamageType> + '_ {
        DamageType::iter().filter(|kind| self.is_immune(*kind))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Immunities {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.types().map(|kind| kind.as_ref().to_owned()))
    }
}
