//! dmg_core - Expected combat damage computation for Genshin-style builds
//!
//! This library provides:
//! - AttributeBlock / BonusGroups: character stats plus action-scoped bonuses
//! - Modifier pipeline: weapon and artifact-set rules applied over a snapshot
//! - MultiplierRegistry: per-character skill multipliers from the talent table
//! - Scenario: the damage formula (crit, bonus, resistance, defense, reactions)
//! - DamageReport: ordered results handed off to the presentation layer

pub mod attribute;
pub mod coefficient;
pub mod equipment;
pub mod formula;
pub mod modifier;
pub mod prelude;
pub mod report;
pub mod skill;
pub mod types;

// Re-export core types for convenience
pub use attribute::{ActionBonus, AttackBonuses, AttributeBlock, BonusGroups};
pub use coefficient::{
    amplifying_reaction_coefficient, defense_coefficient, resistance_coefficient,
    transformative_reaction_damage, Reaction, MELT_BASE, VAPORIZE_BASE,
};
pub use equipment::{artifact_suits, Artifact, SuitSummary, Weapon};
pub use formula::{DamageResult, Scenario};
pub use modifier::{apply_equipment, BonusEffect, BonusTarget, PipelineOutput, RuleSet, Scaling};
pub use report::{DamageReport, ReportEntry};
pub use skill::{
    parse_multiplier, Multiplier, MultiplierRegistry, MultiplierSpec, ResolveError,
    ResolvedMultipliers, SkillTable,
};
pub use types::{CharacterSnapshot, Element, TalentLevels, TalentSlot, WeaponType};
