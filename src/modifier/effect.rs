//! Bonus effect vocabulary
//!
//! Every weapon and artifact rule is data: a target field, a formula
//! shape, and the balance numbers. The mechanism of applying a bonus
//! lives here once; the rule tables in `config/` only pick entries from
//! this vocabulary.

use crate::attribute::{AttributeBlock, BonusGroups};
use crate::types::Element;
use serde::{Deserialize, Serialize};

/// Where a bonus lands: a global attribute, one damage bonus slot, or
/// one of the action-scoped accumulators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusTarget {
    DamageBonusAll,
    DamageBonusSlot,
    ExtraAttack,
    ExtraDefense,
    ExtraHp,
    CritRate,
    EnergyRecharge,
    ElementalMastery,
    ShieldStrength,
    HealingReceived,
    ReactionBonus,
    BurstCritRate,
    BurstDamageBonus,
    BurstExtraMultiplier,
    SkillCritRate,
    SkillDamageBonus,
    SkillExtraMultiplier,
    NormalCritRate,
    NormalDamageBonus,
    NormalExtraMultiplier,
    ChargedCritRate,
    ChargedDamageBonus,
    ChargedExtraMultiplier,
    PlungingCritRate,
    PlungingDamageBonus,
    PlungingExtraMultiplier,
}

/// Formula shape: what the rule value is multiplied by before landing on
/// the target. Reads the attribute block as it stands when the effect
/// runs, which is why stage and effect order matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scaling {
    #[default]
    Flat,
    PctBaseAttack,
    PctBaseDefense,
    PctTotalDefense,
    PctTotalHp,
    /// value x current energy recharge (Emblem-style burst bonus)
    PctRecharge,
    /// base attack x (energy recharge - 1) x value (Engulfing Lightning)
    PctRechargeExcess,
}

/// One bonus: `mult x (base + per_rank x refinement)` applied to `target`
/// under `scaling`. Artifact rules leave `per_rank` at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusEffect {
    pub target: BonusTarget,
    /// Element slot, only for `damage_bonus_slot` targets
    #[serde(default)]
    pub element: Option<Element>,
    #[serde(default)]
    pub scaling: Scaling,
    #[serde(default)]
    pub base: f64,
    #[serde(default)]
    pub per_rank: f64,
    #[serde(default = "default_mult")]
    pub mult: f64,
}

fn default_mult() -> f64 {
    1.0
}

impl BonusEffect {
    /// Rule value at a refinement rank
    pub fn value_at(&self, rank: u8) -> f64 {
        self.mult * (self.base + self.per_rank * rank as f64)
    }

    /// Apply this effect to the working attribute block and bonus groups
    pub fn apply(&self, rank: u8, attr: &mut AttributeBlock, groups: &mut BonusGroups) {
        let value = self.value_at(rank);
        let amount = match self.scaling {
            Scaling::Flat => value,
            Scaling::PctBaseAttack => attr.base_attack * value,
            Scaling::PctBaseDefense => attr.base_defense * value,
            Scaling::PctTotalDefense => attr.total_defense() * value,
            Scaling::PctTotalHp => attr.total_hp() * value,
            Scaling::PctRecharge => attr.energy_recharge * value,
            Scaling::PctRechargeExcess => attr.base_attack * (attr.energy_recharge - 1.0) * value,
        };

        use BonusTarget::*;
        match self.target {
            DamageBonusAll => attr.add_damage_bonus_all(amount),
            DamageBonusSlot => {
                if let Some(element) = self.element {
                    attr.add_damage_bonus(element, amount);
                }
            }
            ExtraAttack => attr.extra_attack += amount,
            ExtraDefense => attr.extra_defense += amount,
            ExtraHp => attr.extra_hp += amount,
            CritRate => attr.crit_rate += amount,
            EnergyRecharge => attr.energy_recharge += amount,
            ElementalMastery => attr.elemental_mastery += amount,
            ShieldStrength => attr.shield_strength += amount,
            HealingReceived => attr.healing_received += amount,
            ReactionBonus => attr.reaction_bonus = Some(amount),
            BurstCritRate => groups.burst.crit_rate += amount,
            BurstDamageBonus => groups.burst.damage_bonus += amount,
            BurstExtraMultiplier => groups.burst.extra_multiplier += amount,
            SkillCritRate => groups.skill.crit_rate += amount,
            SkillDamageBonus => groups.skill.damage_bonus += amount,
            SkillExtraMultiplier => groups.skill.extra_multiplier += amount,
            NormalCritRate => groups.attack.normal.crit_rate += amount,
            NormalDamageBonus => groups.attack.normal.damage_bonus += amount,
            NormalExtraMultiplier => groups.attack.normal.extra_multiplier += amount,
            ChargedCritRate => groups.attack.charged.crit_rate += amount,
            ChargedDamageBonus => groups.attack.charged.damage_bonus += amount,
            ChargedExtraMultiplier => groups.attack.charged.extra_multiplier += amount,
            PlungingCritRate => groups.attack.plunging.crit_rate += amount,
            PlungingDamageBonus => groups.attack.plunging.damage_bonus += amount,
            PlungingExtraMultiplier => groups.attack.plunging.extra_multiplier += amount,
        }
    }
}
