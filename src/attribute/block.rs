//! AttributeBlock - the working attribute panel

use crate::types::Element;
use serde::{Deserialize, Serialize};

/// A character's working attribute panel.
///
/// Owned exclusively by one computation: the modifier pipeline clones the
/// snapshot's block and accumulates equipment bonuses into the copy.
/// Percentages are stored as fractions (0.5 = 50%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeBlock {
    pub base_attack: f64,
    pub extra_attack: f64,
    pub base_defense: f64,
    pub extra_defense: f64,
    pub base_hp: f64,
    pub extra_hp: f64,
    pub crit_rate: f64,
    pub crit_damage: f64,
    pub elemental_mastery: f64,
    pub energy_recharge: f64,
    pub shield_strength: f64,
    pub healing_received: f64,
    /// Per-element damage bonus, indexed by [`Element::index`]
    pub damage_bonus: [f64; Element::COUNT],
    /// Extra amplifying-reaction coefficient (e.g. the Crimson Witch
    /// four-piece vaporize/melt bonus), set by the artifact stage
    pub reaction_bonus: Option<f64>,
}

impl Default for AttributeBlock {
    fn default() -> Self {
        AttributeBlock {
            base_attack: 0.0,
            extra_attack: 0.0,
            base_defense: 0.0,
            extra_defense: 0.0,
            base_hp: 0.0,
            extra_hp: 0.0,
            crit_rate: 0.0,
            crit_damage: 0.0,
            elemental_mastery: 0.0,
            // a bare panel still recharges at the 100% baseline
            energy_recharge: 1.0,
            shield_strength: 0.0,
            healing_received: 0.0,
            damage_bonus: [0.0; Element::COUNT],
            reaction_bonus: None,
        }
    }
}

impl AttributeBlock {
    pub fn total_attack(&self) -> f64 {
        self.base_attack + self.extra_attack
    }

    pub fn total_defense(&self) -> f64 {
        self.base_defense + self.extra_defense
    }

    pub fn total_hp(&self) -> f64 {
        self.base_hp + self.extra_hp
    }

    /// Add a uniform increment across every damage bonus slot
    pub fn add_damage_bonus_all(&mut self, value: f64) {
        for slot in self.damage_bonus.iter_mut() {
            *slot += value;
        }
    }

    /// Add to a single element's damage bonus slot
    pub fn add_damage_bonus(&mut self, element: Element, value: f64) {
        self.damage_bonus[element.index()] += value;
    }

    /// Damage bonus for a single element
    pub fn damage_bonus(&self, element: Element) -> f64 {
        self.damage_bonus[element.index()]
    }
}
