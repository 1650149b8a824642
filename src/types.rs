//! Core types shared across the damage engine

use crate::attribute::AttributeBlock;
use crate::equipment::{Artifact, Weapon};
use serde::{Deserialize, Serialize};

/// Damage element. The discriminant doubles as the index into the
/// per-element damage bonus array on [`AttributeBlock`], so the order
/// here is load-bearing and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Physical = 0,
    Pyro = 1,
    Electro = 2,
    Hydro = 3,
    Dendro = 4,
    Anemo = 5,
    Geo = 6,
    Cryo = 7,
}

impl Element {
    /// Number of damage elements (length of the damage bonus array)
    pub const COUNT: usize = 8;

    /// Index into the damage bonus array
    pub fn index(self) -> usize {
        self as usize
    }

    /// All elements in array order
    pub fn all() -> &'static [Element] {
        &[
            Element::Physical,
            Element::Pyro,
            Element::Electro,
            Element::Hydro,
            Element::Dendro,
            Element::Anemo,
            Element::Geo,
            Element::Cryo,
        ]
    }
}

/// Weapon category, used by set bonuses that only apply to ranged or
/// melee wielders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponType {
    Sword,
    Claymore,
    Polearm,
    Bow,
    Catalyst,
}

/// Talent slot for an action category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TalentSlot {
    /// Normal/charged/plunging attacks
    Attack,
    /// Elemental skill
    Skill,
    /// Elemental burst
    Burst,
}

/// Per-category talent levels, 1-indexed as stored in character data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentLevels {
    pub attack: u8,
    pub skill: u8,
    pub burst: u8,
}

impl TalentLevels {
    pub fn level(&self, slot: TalentSlot) -> u8 {
        match slot {
            TalentSlot::Attack => self.attack,
            TalentSlot::Skill => self.skill,
            TalentSlot::Burst => self.burst,
        }
    }

    /// 0-based index into a skill data value list
    pub fn level_index(&self, slot: TalentSlot) -> usize {
        self.level(slot).saturating_sub(1) as usize
    }
}

/// Immutable input snapshot for one damage computation.
///
/// Callers that evaluate several independent scenarios from the same base
/// data must hand each computation its own snapshot (or clone), since the
/// modifier pipeline works on a copy of `attributes` per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterSnapshot {
    pub name: String,
    pub level: u32,
    pub talents: TalentLevels,
    /// Number of unlocked constellation tiers; gates a handful of rules
    #[serde(default)]
    pub constellations: u8,
    pub attributes: AttributeBlock,
    pub weapon: Weapon,
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_indices_are_stable() {
        assert_eq!(Element::Physical.index(), 0);
        assert_eq!(Element::Pyro.index(), 1);
        assert_eq!(Element::Geo.index(), 6);
        assert_eq!(Element::all().len(), Element::COUNT);
        for (i, element) in Element::all().iter().enumerate() {
            assert_eq!(element.index(), i);
        }
    }

    #[test]
    fn test_talent_level_index() {
        let talents = TalentLevels {
            attack: 10,
            skill: 9,
            burst: 1,
        };
        assert_eq!(talents.level_index(TalentSlot::Attack), 9);
        assert_eq!(talents.level_index(TalentSlot::Skill), 8);
        assert_eq!(talents.level_index(TalentSlot::Burst), 0);
    }
}
