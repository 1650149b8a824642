//! Coefficient library - the stateless pieces of the damage formula
//!
//! Resistance, defense and reaction coefficients as published for the
//! reference combat model. These are pure functions with no dependencies;
//! everything else in the crate composes them.

use serde::{Deserialize, Serialize};

/// Base coefficient for vaporize (hydro on pyro)
pub const VAPORIZE_BASE: f64 = 1.5;
/// Base coefficient for melt (pyro on cryo)
pub const MELT_BASE: f64 = 2.0;

/// Transformative reaction base coefficient at character level 90.
///
/// The full per-level table is not modeled; lower levels are a known gap
/// and must not be extrapolated from this value.
const TRANSFORMATIVE_LEVEL_90_BASE: f64 = 723.0;

/// Transformative reaction types and their fixed damage ratios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reaction {
    Superconduct,
    Swirl,
    Shatter,
    Overloaded,
    ElectroCharged,
    Burning,
    Bloom,
}

impl Reaction {
    /// Fixed damage ratio for this reaction
    pub fn base_ratio(self) -> f64 {
        match self {
            Reaction::Superconduct => 1.0,
            Reaction::Swirl => 1.2,
            Reaction::Shatter => 3.0,
            Reaction::Overloaded => 4.0,
            // electro-charged / burning / bloom family
            _ => 4.8,
        }
    }
}

/// Damage multiplier from enemy resistance.
///
/// `base` is the enemy's base resistance, `reduction` the total resistance
/// shred applied to it. The function is piecewise: above 0.75 net
/// resistance diminishing returns kick in (the 0.75 boundary itself uses
/// the diminishing branch), and negative net resistance grants bonus
/// damage at half effectiveness.
pub fn resistance_coefficient(base: f64, reduction: f64) -> f64 {
    let resistance = base - reduction;
    if resistance >= 0.75 {
        1.0 / (1.0 + 4.0 * resistance)
    } else if resistance >= 0.0 {
        1.0 - resistance
    } else {
        1.0 - resistance / 2.0
    }
}

/// Damage multiplier from enemy defense.
///
/// `reduction` is the defense reduction fraction, `ignore` the defense
/// ignore fraction. Valid inputs (positive levels, fractions below 1)
/// keep the denominator nonzero.
pub fn defense_coefficient(self_level: u32, enemy_level: u32, reduction: f64, ignore: f64) -> f64 {
    let own = self_level as f64 + 100.0;
    let enemy = (enemy_level as f64 + 100.0) * (1.0 - reduction) * (1.0 - ignore);
    own / (own + enemy)
}

/// Coefficient for an amplifying reaction (vaporize, melt).
///
/// `base` is the reaction's base constant ([`VAPORIZE_BASE`] or
/// [`MELT_BASE`]); `extra` is any additional reaction coefficient bonus,
/// e.g. from a set effect.
pub fn amplifying_reaction_coefficient(mastery: f64, base: f64, extra: f64) -> f64 {
    let mastery_increase = (2.78 * mastery) / (mastery + 1400.0);
    base * (1.0 + mastery_increase + extra)
}

/// Damage of a transformative reaction (superconduct, swirl, ...).
///
/// `resistance` is the enemy resistance coefficient computed by
/// [`resistance_coefficient`]. The `level` argument is accepted for
/// signature completeness but only the level-90 base coefficient is
/// tabled; see [`TRANSFORMATIVE_LEVEL_90_BASE`].
pub fn transformative_reaction_damage(
    _level: u32,
    reaction: Reaction,
    mastery: f64,
    extra: f64,
    resistance: f64,
) -> f64 {
    let mastery_increase = (16.0 * mastery) / (mastery + 2000.0);
    TRANSFORMATIVE_LEVEL_90_BASE
        * reaction.base_ratio()
        * (1.0 + mastery_increase + extra)
        * resistance
}
