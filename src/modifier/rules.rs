//! Rule tables - declarative weapon and artifact set bonuses
//!
//! The balance numbers live in `config/weapons.toml` and
//! `config/artifacts.toml`; this module loads them and walks a weapon or
//! artifact loadout through the matching entries. Unmodeled names are a
//! no-op by contract, never an error.

use super::effect::BonusEffect;
use crate::attribute::{AttributeBlock, BonusGroups};
use crate::equipment::{artifact_suits, Artifact, Weapon};
use crate::types::WeaponType;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Rule table loading error
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read rule table: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse rule table: {0}")]
    Parse(#[from] toml::de::Error),
}

/// One weapon rule: matched by exact name or name prefix (weapon
/// families). Exact matches win over prefix matches.
#[derive(Debug, Clone, Deserialize)]
pub struct WeaponRule {
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub prefix: Option<String>,
    /// Stacking-assumption note appended when the rule fires
    #[serde(default)]
    pub note: Option<String>,
    /// Append the note only if it is not already present
    #[serde(default)]
    pub note_once: bool,
    pub effects: Vec<BonusEffect>,
}

impl WeaponRule {
    fn matches_exact(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    fn matches_prefix(&self, name: &str) -> bool {
        self.prefix.as_deref().is_some_and(|p| name.starts_with(p))
    }
}

/// One artifact set rule. Four-piece rules may be conditioned on the
/// equipped weapon's type or on the character (with a complementary
/// entry covering the other characters).
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactRule {
    pub set: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub weapon_types: Option<Vec<WeaponType>>,
    #[serde(default)]
    pub characters: Option<Vec<String>>,
    #[serde(default)]
    pub exclude_characters: Option<Vec<String>>,
    pub effects: Vec<BonusEffect>,
}

impl ArtifactRule {
    fn condition_holds(&self, weapon_type: WeaponType, character: &str) -> bool {
        if let Some(types) = &self.weapon_types {
            if !types.contains(&weapon_type) {
                return false;
            }
        }
        if let Some(characters) = &self.characters {
            if !characters.iter().any(|c| c == character) {
                return false;
            }
        }
        if let Some(excluded) = &self.exclude_characters {
            if excluded.iter().any(|c| c == character) {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Deserialize)]
struct WeaponFile {
    weapons: Vec<WeaponRule>,
}

#[derive(Debug, Clone, Deserialize)]
struct ArtifactFile {
    #[serde(default)]
    two_piece: Vec<ArtifactRule>,
    #[serde(default)]
    four_piece: Vec<ArtifactRule>,
}

/// The full set of weapon and artifact rules
#[derive(Debug, Clone)]
pub struct RuleSet {
    weapons: Vec<WeaponRule>,
    two_piece: Vec<ArtifactRule>,
    four_piece: Vec<ArtifactRule>,
}

impl RuleSet {
    /// The rule tables bundled with the crate
    pub fn bundled() -> Result<RuleSet, TableError> {
        RuleSet::from_toml(
            include_str!("../../config/weapons.toml"),
            include_str!("../../config/artifacts.toml"),
        )
    }

    /// Parse rule tables from TOML strings
    pub fn from_toml(weapons: &str, artifacts: &str) -> Result<RuleSet, TableError> {
        let weapon_file: WeaponFile = toml::from_str(weapons)?;
        let artifact_file: ArtifactFile = toml::from_str(artifacts)?;
        Ok(RuleSet {
            weapons: weapon_file.weapons,
            two_piece: artifact_file.two_piece,
            four_piece: artifact_file.four_piece,
        })
    }

    /// Load rule tables from TOML files
    pub fn from_paths(weapons: &Path, artifacts: &Path) -> Result<RuleSet, TableError> {
        let weapon_toml = fs::read_to_string(weapons)?;
        let artifact_toml = fs::read_to_string(artifacts)?;
        RuleSet::from_toml(&weapon_toml, &artifact_toml)
    }

    /// Rule for a weapon name, if modeled
    pub fn weapon_rule(&self, name: &str) -> Option<&WeaponRule> {
        self.weapons
            .iter()
            .find(|rule| rule.matches_exact(name))
            .or_else(|| self.weapons.iter().find(|rule| rule.matches_prefix(name)))
    }

    /// Stage A: fold the weapon's bonuses into the working block.
    ///
    /// Accumulative: running the stage twice double-applies. Unmodeled
    /// weapon names change nothing and append no note.
    pub fn apply_weapon(
        &self,
        weapon: &Weapon,
        attr: &mut AttributeBlock,
        groups: &mut BonusGroups,
        notes: &mut Vec<String>,
    ) {
        let Some(rule) = self.weapon_rule(&weapon.name) else {
            return;
        };
        for effect in &rule.effects {
            effect.apply(weapon.refinement, attr, groups);
        }
        if let Some(note) = &rule.note {
            if !rule.note_once || !notes.contains(note) {
                notes.push(note.clone());
            }
        }
    }

    /// Stage B: fold artifact set bonuses into the working block.
    ///
    /// Every set with two equipped pieces contributes its 2-piece effect;
    /// the 4-piece effect fires additionally only when both equipped
    /// pairs share one set name. Runs after the weapon stage because
    /// several 4-piece bonuses read attributes the weapon stage already
    /// adjusted.
    pub fn apply_artifacts(
        &self,
        artifacts: &[Artifact],
        weapon: &Weapon,
        character: &str,
        attr: &mut AttributeBlock,
        groups: &mut BonusGroups,
        notes: &mut Vec<String>,
    ) {
        let suits = artifact_suits(artifacts);

        for set in &suits.two_piece {
            for rule in self.two_piece.iter().filter(|r| &r.set == set) {
                apply_artifact_rule(rule, attr, groups, notes);
            }
        }

        if let Some(set) = &suits.four_piece {
            for rule in self.four_piece.iter().filter(|r| &r.set == set) {
                if rule.condition_holds(weapon.weapon_type, character) {
                    apply_artifact_rule(rule, attr, groups, notes);
                }
            }
        }
    }
}

fn apply_artifact_rule(
    rule: &ArtifactRule,
    attr: &mut AttributeBlock,
    groups: &mut BonusGroups,
    notes: &mut Vec<String>,
) {
    for effect in &rule.effects {
        effect.apply(0, attr, groups);
    }
    if let Some(note) = &rule.note {
        notes.push(note.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Element;

    fn base_attr() -> AttributeBlock {
        AttributeBlock {
            base_attack: 500.0,
            base_defense: 600.0,
            base_hp: 10000.0,
            extra_hp: 5000.0,
            energy_recharge: 1.5,
            ..Default::default()
        }
    }

    fn apply(weapon: &Weapon) -> (AttributeBlock, BonusGroups, Vec<String>) {
        let rules = RuleSet::bundled().unwrap();
        let mut attr = base_attr();
        let mut groups = BonusGroups::default();
        let mut notes = Vec::new();
        rules.apply_weapon(weapon, &mut attr, &mut groups, &mut notes);
        (attr, groups, notes)
    }

    #[test]
    fn test_unmodeled_weapon_is_a_noop() {
        let weapon = Weapon::new("不存在的武器", WeaponType::Sword, 5);
        let (attr, groups, notes) = apply(&weapon);
        assert_eq!(attr, base_attr());
        assert_eq!(groups, BonusGroups::default());
        assert!(notes.is_empty());
    }

    #[test]
    fn test_flat_crit_rule() {
        let weapon = Weapon::new("黎明神剑", WeaponType::Sword, 5);
        let (attr, _, notes) = apply(&weapon);
        assert!((attr.crit_rate - 0.24).abs() < 1e-12);
        assert!(notes.is_empty());
    }

    #[test]
    fn test_double_application_doubles() {
        // the pipeline is accumulative by design; invoking a stage twice
        // without resetting the block applies the bonus twice
        let rules = RuleSet::bundled().unwrap();
        let weapon = Weapon::new("黎明神剑", WeaponType::Sword, 5);
        let mut attr = base_attr();
        let mut groups = BonusGroups::default();
        let mut notes = Vec::new();
        rules.apply_weapon(&weapon, &mut attr, &mut groups, &mut notes);
        rules.apply_weapon(&weapon, &mut attr, &mut groups, &mut notes);
        assert!((attr.crit_rate - 0.48).abs() < 1e-12);
    }

    #[test]
    fn test_uniform_damage_bonus_and_note() {
        let weapon = Weapon::new("雾切之回光", WeaponType::Sword, 1);
        let (attr, _, notes) = apply(&weapon);
        for element in Element::all() {
            assert!((attr.damage_bonus(*element) - 0.4).abs() < 1e-12);
        }
        assert_eq!(notes, vec!["雾切满层".to_string()]);
    }

    #[test]
    fn test_engulfing_lightning_reads_recharge_before_buffing_it() {
        let weapon = Weapon::new("薙草之稻光", WeaponType::Polearm, 1);
        let (attr, _, _) = apply(&weapon);
        // extra attack from the pre-buff 150% recharge: 500 * 0.5 * 0.28
        assert!((attr.extra_attack - 70.0).abs() < 1e-9);
        assert!((attr.energy_recharge - 1.8).abs() < 1e-12);
    }

    #[test]
    fn test_staff_of_homa_scales_with_total_hp() {
        let weapon = Weapon::new("护摩之杖", WeaponType::Polearm, 1);
        let (attr, _, notes) = apply(&weapon);
        // 15000 * 0.010
        assert!((attr.extra_attack - 150.0).abs() < 1e-9);
        assert_eq!(notes, vec!["半血以下".to_string()]);
    }

    #[test]
    fn test_homa_note_is_deduplicated() {
        let rules = RuleSet::bundled().unwrap();
        let weapon = Weapon::new("护摩之杖", WeaponType::Polearm, 1);
        let mut attr = base_attr();
        let mut groups = BonusGroups::default();
        let mut notes = vec!["半血以下".to_string()];
        rules.apply_weapon(&weapon, &mut attr, &mut groups, &mut notes);
        assert_eq!(notes, vec!["半血以下".to_string()]);
    }

    #[test]
    fn test_prefix_family() {
        let weapon = Weapon::new("千岩长枪", WeaponType::Polearm, 3);
        let (attr, _, notes) = apply(&weapon);
        assert!((attr.crit_rate - 0.05).abs() < 1e-12);
        assert!((attr.extra_attack - 500.0 * 0.09).abs() < 1e-9);
        assert_eq!(notes, vec!["璃月人1层".to_string()]);
    }

    #[test]
    fn test_exact_match_wins_over_prefix() {
        // 黑岩长剑 has its own entry and must not fall through to the
        // 黑岩 family rule twice
        let weapon = Weapon::new("黑岩长剑", WeaponType::Sword, 1);
        let (attr, _, notes) = apply(&weapon);
        assert!((attr.extra_attack - 500.0 * 0.12).abs() < 1e-9);
        assert_eq!(notes, vec!["黑岩1层".to_string()]);
    }

    #[test]
    fn test_shield_family_list() {
        let weapon = Weapon::new("无工之剑", WeaponType::Claymore, 1);
        let (attr, _, notes) = apply(&weapon);
        // 2 * 5 * 0.004 of base attack
        assert!((attr.extra_attack - 500.0 * 0.04).abs() < 1e-9);
        assert!((attr.shield_strength - 0.2).abs() < 1e-12);
        assert_eq!(notes, vec!["武器带盾满层".to_string()]);
    }

    #[test]
    fn test_group_scoped_weapon_rule() {
        let weapon = Weapon::new("绝弦", WeaponType::Bow, 5);
        let (attr, groups, _) = apply(&weapon);
        assert_eq!(attr, base_attr());
        assert!((groups.burst.damage_bonus - 0.48).abs() < 1e-12);
        assert!((groups.skill.damage_bonus - 0.48).abs() < 1e-12);
    }

    #[test]
    fn test_defense_rider_rule() {
        let weapon = Weapon::new("辰砂之纺锤", WeaponType::Sword, 5);
        let (_, groups, _) = apply(&weapon);
        // 600 total defense * 0.8
        assert!((groups.skill.extra_multiplier - 480.0).abs() < 1e-9);
    }
}
