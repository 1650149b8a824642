//! Stat modifier pipeline
//!
//! Folds equipment bonuses into a working attribute block in two fixed
//! stages: weapon rules first, artifact set rules second. The output also
//! carries the three action-scoped bonus groups and the list of
//! stacking-assumption notes the rules emitted (the engine assumes
//! best-case stacking unless a note says otherwise).

mod effect;
mod rules;

pub use effect::{BonusEffect, BonusTarget, Scaling};
pub use rules::{ArtifactRule, RuleSet, TableError, WeaponRule};

use crate::attribute::{AttributeBlock, BonusGroups};
use crate::types::CharacterSnapshot;

/// Result of one pipeline run: the adjusted attribute block, the
/// action-scoped bonus groups, and the active-condition notes
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub attributes: AttributeBlock,
    pub bonuses: BonusGroups,
    pub notes: Vec<String>,
}

/// Run both pipeline stages for a snapshot.
///
/// The snapshot's attribute block is cloned first; the caller's data is
/// never mutated. Run once per computation - the stages accumulate, so a
/// second run over the same output would double every bonus.
pub fn apply_equipment(snapshot: &CharacterSnapshot, rules: &RuleSet) -> PipelineOutput {
    let mut attributes = snapshot.attributes.clone();
    let mut bonuses = BonusGroups::default();
    let mut notes = Vec::new();

    rules.apply_weapon(&snapshot.weapon, &mut attributes, &mut bonuses, &mut notes);
    rules.apply_artifacts(
        &snapshot.artifacts,
        &snapshot.weapon,
        &snapshot.name,
        &mut attributes,
        &mut bonuses,
        &mut notes,
    );

    PipelineOutput {
        attributes,
        bonuses,
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::{Artifact, Weapon};
    use crate::types::{Element, TalentLevels, WeaponType};

    fn snapshot(weapon: Weapon, artifacts: Vec<Artifact>) -> CharacterSnapshot {
        CharacterSnapshot {
            name: "香菱".to_string(),
            level: 90,
            talents: TalentLevels {
                attack: 1,
                skill: 9,
                burst: 9,
            },
            constellations: 0,
            attributes: AttributeBlock {
                base_attack: 500.0,
                base_defense: 600.0,
                base_hp: 10000.0,
                energy_recharge: 1.5,
                ..Default::default()
            },
            weapon,
            artifacts,
        }
    }

    fn pieces(set: &str, n: usize) -> Vec<Artifact> {
        (0..n)
            .map(|i| Artifact::new(format!("{set}{i}"), set))
            .collect()
    }

    #[test]
    fn test_caller_snapshot_is_untouched() {
        let snap = snapshot(
            Weapon::new("护摩之杖", WeaponType::Polearm, 1),
            pieces("炽烈的炎之魔女", 4),
        );
        let before = snap.clone();
        let output = apply_equipment(&snap, &RuleSet::bundled().unwrap());
        assert_eq!(snap.attributes, before.attributes);
        assert!(output.attributes.extra_attack > 0.0);
    }

    #[test]
    fn test_four_piece_emblem_reads_weapon_buffed_recharge() {
        // weapon stage raises recharge 1.5 -> 1.8; the Emblem burst bonus
        // must read the buffed value, which is why stage order is fixed
        let snap = snapshot(
            Weapon::new("薙草之稻光", WeaponType::Polearm, 1),
            pieces("绝缘之旗印", 4),
        );
        let output = apply_equipment(&snap, &RuleSet::bundled().unwrap());
        assert!((output.attributes.energy_recharge - 1.8).abs() < 1e-12);
        assert!((output.bonuses.burst.damage_bonus - 0.25 * 1.8).abs() < 1e-9);
    }

    #[test]
    fn test_two_piece_effects_stack_across_sets() {
        let mut artifacts = pieces("昔日宗室之仪", 2);
        artifacts.extend(pieces("赌徒", 2));
        let snap = snapshot(Weapon::new("无名枪", WeaponType::Polearm, 1), artifacts);
        let output = apply_equipment(&snap, &RuleSet::bundled().unwrap());
        assert!((output.bonuses.burst.damage_bonus - 0.2).abs() < 1e-12);
        assert!((output.bonuses.skill.damage_bonus - 0.2).abs() < 1e-12);
        // two mixed pairs never unlock a 4-piece effect
        assert!(output.attributes.extra_attack.abs() < 1e-12);
    }

    #[test]
    fn test_four_piece_includes_its_two_piece_effect() {
        let snap = snapshot(
            Weapon::new("无名枪", WeaponType::Polearm, 1),
            pieces("逆飞的流星", 4),
        );
        let output = apply_equipment(&snap, &RuleSet::bundled().unwrap());
        assert!((output.attributes.shield_strength - 0.35).abs() < 1e-12);
        assert!((output.bonuses.attack.normal.damage_bonus - 0.4).abs() < 1e-12);
        assert!((output.bonuses.attack.charged.damage_bonus - 0.4).abs() < 1e-12);
        assert_eq!(output.notes, vec!["流星触发".to_string()]);
    }

    #[test]
    fn test_crimson_witch_character_branches() {
        let rules = RuleSet::bundled().unwrap();

        let mut hutao = snapshot(
            Weapon::new("无名枪", WeaponType::Polearm, 1),
            pieces("炽烈的炎之魔女", 4),
        );
        hutao.name = "胡桃".to_string();
        let output = apply_equipment(&hutao, &rules);
        assert!((output.attributes.damage_bonus(Element::Pyro) - 0.075).abs() < 1e-12);
        assert_eq!(output.attributes.reaction_bonus, Some(0.15));
        assert_eq!(output.notes, vec!["魔女1层".to_string()]);

        let other = snapshot(
            Weapon::new("无名枪", WeaponType::Polearm, 1),
            pieces("炽烈的炎之魔女", 4),
        );
        let output = apply_equipment(&other, &rules);
        assert!((output.attributes.damage_bonus(Element::Pyro) - 0.225).abs() < 1e-12);
        assert_eq!(output.attributes.reaction_bonus, Some(0.15));
        assert_eq!(output.notes, vec!["魔女满层".to_string()]);
    }

    #[test]
    fn test_weapon_type_conditioned_set() {
        let rules = RuleSet::bundled().unwrap();

        let bow = snapshot(Weapon::new("无名弓", WeaponType::Bow, 1), pieces("流浪大地的乐团", 4));
        let output = apply_equipment(&bow, &rules);
        assert!((output.bonuses.attack.charged.damage_bonus - 0.35).abs() < 1e-12);

        let sword = snapshot(
            Weapon::new("无名剑", WeaponType::Sword, 1),
            pieces("流浪大地的乐团", 4),
        );
        let output = apply_equipment(&sword, &rules);
        assert!(output.bonuses.attack.charged.damage_bonus.abs() < 1e-12);
    }

    #[test]
    fn test_unknown_set_contributes_nothing() {
        let snap = snapshot(Weapon::new("无名枪", WeaponType::Polearm, 1), pieces("未建模套装", 4));
        let output = apply_equipment(&snap, &RuleSet::bundled().unwrap());
        assert_eq!(output.attributes, snap.attributes);
        assert_eq!(output.bonuses, BonusGroups::default());
        assert!(output.notes.is_empty());
    }
}
