//! Prelude module for convenient imports
//!
//! ```rust
//! use dmg_core::prelude::*;
//! ```

// Core types
pub use crate::attribute::{ActionBonus, AttackBonuses, AttributeBlock, BonusGroups};
pub use crate::types::{CharacterSnapshot, Element, TalentLevels, TalentSlot, WeaponType};

// Equipment
pub use crate::equipment::{artifact_suits, Artifact, SuitSummary, Weapon};

// Modifier pipeline
pub use crate::modifier::{apply_equipment, BonusEffect, BonusTarget, PipelineOutput, RuleSet, Scaling};

// Skill multipliers
pub use crate::skill::{Multiplier, MultiplierRegistry, ResolvedMultipliers, SkillTable};

// Damage formula and coefficients
pub use crate::coefficient::{
    amplifying_reaction_coefficient, transformative_reaction_damage, Reaction,
};
pub use crate::formula::{DamageResult, Scenario};

// Report
pub use crate::report::{DamageReport, ReportEntry};
