//! Damage formula engine
//!
//! Combines a scenario descriptor with the coefficient library to
//! produce the final critical/expected damage pair. Outputs are decimal
//! strings truncated (not rounded) to integer precision, matching the
//! published reference formula.

use crate::coefficient::{defense_coefficient, resistance_coefficient};
use serde::{Deserialize, Serialize};

/// Inputs to one damage formula evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Multiplier zone: the resolved skill multiplier
    pub multiplier: f64,
    /// Crit zone: a rate at or above 1.0 means guaranteed critical
    pub crit_rate: f64,
    pub crit_damage: f64,
    /// Damage bonus zone, fractional
    pub damage_bonus: f64,
    pub character_level: u32,
    pub enemy_resistance: f64,
    pub resistance_reduction: f64,
    pub enemy_level: u32,
    pub defense_reduction: f64,
    pub defense_ignore: f64,
    /// Reaction final coefficient; 1.0 when no reaction applies
    pub reaction: f64,
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario {
            multiplier: 0.0,
            crit_rate: 0.0,
            crit_damage: 0.0,
            damage_bonus: 0.0,
            character_level: 90,
            enemy_resistance: 0.1,
            resistance_reduction: 0.0,
            enemy_level: 90,
            defense_reduction: 0.0,
            defense_ignore: 0.0,
            reaction: 1.0,
        }
    }
}

impl Scenario {
    /// Scenario with the usual variable parts set and everything else at
    /// the defaults
    pub fn new(multiplier: f64, crit: (f64, f64), damage_bonus: f64, character_level: u32) -> Self {
        Scenario {
            multiplier,
            crit_rate: crit.0,
            crit_damage: crit.1,
            damage_bonus,
            character_level,
            ..Default::default()
        }
    }

    pub fn with_reaction(mut self, reaction: f64) -> Self {
        self.reaction = reaction;
        self
    }

    pub fn with_resistance_reduction(mut self, reduction: f64) -> Self {
        self.resistance_reduction = reduction;
        self
    }

    pub fn with_defense_reduction(mut self, reduction: f64) -> Self {
        self.defense_reduction = reduction;
        self
    }

    pub fn with_defense_ignore(mut self, ignore: f64) -> Self {
        self.defense_ignore = ignore;
        self
    }

    /// Evaluate the scenario into the final damage pair
    pub fn evaluate(&self) -> DamageResult {
        let shared = (1.0 + self.damage_bonus)
            * resistance_coefficient(self.enemy_resistance, self.resistance_reduction)
            * defense_coefficient(
                self.character_level,
                self.enemy_level,
                self.defense_reduction,
                self.defense_ignore,
            )
            * self.reaction;

        if self.crit_rate >= 1.0 {
            // guaranteed critical: one value for both outputs
            let damage = self.multiplier * (1.0 + self.crit_damage) * shared;
            DamageResult::new(damage, damage)
        } else {
            let expected =
                self.multiplier * (1.0 + self.crit_rate * self.crit_damage) * shared;
            // strip the probability-weighted crit contribution, reapply
            // a full one
            let critical =
                expected / (1.0 + self.crit_rate * self.crit_damage) * (1.0 + self.crit_damage);
            DamageResult::new(critical, expected)
        }
    }
}

/// Final damage pair, critical first. Values are truncated to integer
/// precision and kept as strings for the presentation handoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageResult {
    pub critical: String,
    pub expected: String,
}

impl DamageResult {
    fn new(critical: f64, expected: f64) -> Self {
        DamageResult {
            critical: truncate(critical),
            expected: truncate(expected),
        }
    }

    /// The pair in handoff order: [critical, expected]
    pub fn as_pair(&self) -> [&str; 2] {
        [&self.critical, &self.expected]
    }
}

fn truncate(damage: f64) -> String {
    (damage as i64).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guaranteed_crit_outputs_match() {
        for &(multiplier, bonus) in &[(1000.0, 0.0), (2345.6, 0.466), (800.0, 1.2)] {
            let result = Scenario::new(multiplier, (1.0, 0.7), bonus, 90).evaluate();
            assert_eq!(result.critical, result.expected);
        }
    }

    #[test]
    fn test_crit_rate_above_one_is_still_guaranteed() {
        let capped = Scenario::new(1000.0, (1.0, 0.7), 0.0, 90).evaluate();
        let over = Scenario::new(1000.0, (1.3, 0.7), 0.0, 90).evaluate();
        assert_eq!(capped, over);
    }

    #[test]
    fn test_expected_and_critical_against_reference() {
        // cr 0.5, cd 1.0, multiplier 1000, defaults: RC = 0.9, DC = 190/280
        let result = Scenario::new(1000.0, (0.5, 1.0), 0.0, 90).evaluate();

        let rc = 0.9;
        let dc = 190.0 / 280.0;
        let expected = 1000.0 * 1.5 * rc * dc;
        let critical = 1000.0 * 2.0 * rc * dc;
        assert_eq!(result.expected, (expected as i64).to_string());
        assert_eq!(result.critical, (critical as i64).to_string());
    }

    #[test]
    fn test_truncation_not_rounding() {
        // pick inputs that land on a .9 fraction: multiplier alone with
        // everything neutral
        let scenario = Scenario {
            multiplier: 999.9,
            crit_rate: 0.0,
            crit_damage: 0.0,
            enemy_resistance: 0.0,
            character_level: 100,
            enemy_level: 0,
            ..Default::default()
        };
        // shared = 200/(200+100) -> damage = 999.9 * 2/3 = 666.6
        let result = scenario.evaluate();
        assert_eq!(result.expected, "666");
    }

    #[test]
    fn test_pair_order_is_critical_first() {
        let result = Scenario::new(1000.0, (0.5, 1.0), 0.0, 90).evaluate();
        let [critical, expected] = result.as_pair();
        assert_eq!(critical, result.critical);
        assert_eq!(expected, result.expected);
        // critical never falls below expected
        assert!(critical.parse::<i64>().unwrap() >= expected.parse::<i64>().unwrap());
    }

    #[test]
    fn test_reaction_coefficient_scales_linearly() {
        let plain = Scenario::new(1000.0, (0.5, 1.0), 0.0, 90).evaluate();
        let amplified = Scenario::new(1000.0, (0.5, 1.0), 0.0, 90)
            .with_reaction(2.0)
            .evaluate();
        let plain_expected: i64 = plain.expected.parse().unwrap();
        let amplified_expected: i64 = amplified.expected.parse().unwrap();
        // truncation may drop at most one unit
        assert!((amplified_expected - 2 * plain_expected).abs() <= 1);
    }
}
