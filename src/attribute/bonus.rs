//! Action-scoped bonus accumulators
//!
//! Many equipment and set effects apply only to one action category
//! (burst, skill, or a specific attack kind). Those bonuses accumulate
//! here instead of leaking into the global [`crate::AttributeBlock`].

use serde::{Deserialize, Serialize};

/// Bonuses scoped to a single action category
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionBonus {
    /// Extra crit rate for this action only
    pub crit_rate: f64,
    /// Extra damage bonus for this action only
    pub damage_bonus: f64,
    /// Extra flat multiplier added on top of the skill multiplier
    /// (e.g. a percent-of-defense rider)
    pub extra_multiplier: f64,
}

/// Attack-category bonuses, split by attack kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AttackBonuses {
    pub normal: ActionBonus,
    pub charged: ActionBonus,
    pub plunging: ActionBonus,
}

/// The three independent bonus scopes produced by the modifier pipeline.
/// All fields start at zero before any equipment rule runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BonusGroups {
    pub burst: ActionBonus,
    pub skill: ActionBonus,
    pub attack: AttackBonuses,
}
