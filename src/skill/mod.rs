//! Skill multiplier resolution
//!
//! Looks up a character's notable skill multipliers in the external
//! skill-data table and parses the string-encoded values into numbers.
//! Which (skill, field) combinations matter per character is itself part
//! of the rule set and lives in [`MultiplierRegistry`].

mod parse;
mod registry;
mod table;

pub use parse::{parse_multiplier, Multiplier, ParseError};
pub use registry::{
    Combine, FieldRef, MultiplierRegistry, MultiplierSpec, ResolvedMultipliers,
};
pub use table::SkillTable;

use thiserror::Error;

/// Errors from resolving a character's skill multipliers.
///
/// `UnsupportedCharacter` means no structured breakdown exists and is
/// deliberately distinct from a zero multiplier; the remaining variants
/// are per-field data gaps that only drop the one affected entry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    #[error("no damage breakdown available for character: {0}")]
    UnsupportedCharacter(String),
    #[error("skill data table has no entry for character: {0}")]
    MissingCharacterData(String),
    #[error("character {character} has no skill named {skill}")]
    UnknownSkill { character: String, skill: String },
    #[error("skill {skill} has no field {field}")]
    UnknownField { skill: String, field: String },
    #[error("level index {index} out of range for field {field} ({len} entries)")]
    LevelOutOfRange {
        field: String,
        index: usize,
        len: usize,
    },
    #[error("field {field}: value {raw} does not match the expected shape")]
    UnexpectedShape { field: String, raw: String },
    #[error(transparent)]
    Parse(#[from] ParseError),
}
