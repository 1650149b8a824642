//! SkillTable - serde model of the external skill-data table
//!
//! The table is loaded once at startup by an external collaborator and
//! treated as read-only afterwards; concurrent reads are safe. Only the
//! fields the resolver consumes are modeled, everything else in the JSON
//! is ignored.

use super::ResolveError;
use serde::Deserialize;
use std::collections::HashMap;

/// Read-only mapping: character name -> skill name -> field -> per-level
/// string-encoded values.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillTable(HashMap<String, CharacterSkills>);

#[derive(Debug, Clone, Deserialize)]
pub struct CharacterSkills {
    #[serde(rename = "skill")]
    pub skills: HashMap<String, SkillEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillEntry {
    /// Field name -> values indexed by talent level - 1
    #[serde(rename = "数值")]
    pub values: HashMap<String, Vec<String>>,
}

impl SkillTable {
    /// Parse the table from its JSON source
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse the table from a reader over its JSON source
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    pub fn contains(&self, character: &str) -> bool {
        self.0.contains_key(character)
    }

    pub fn character(&self, character: &str) -> Option<&CharacterSkills> {
        self.0.get(character)
    }

    /// Raw string value for (character, skill, field) at a 0-based level
    /// index. Each miss maps to its own [`ResolveError`] variant so the
    /// caller can contain the failure to a single entry.
    pub fn raw_value(
        &self,
        character: &str,
        skill: &str,
        field: &str,
        index: usize,
    ) -> Result<&str, ResolveError> {
        let skills = self
            .character(character)
            .ok_or_else(|| ResolveError::MissingCharacterData(character.to_string()))?;
        let entry = skills
            .skills
            .get(skill)
            .ok_or_else(|| ResolveError::UnknownSkill {
                character: character.to_string(),
                skill: skill.to_string(),
            })?;
        let values = entry
            .values
            .get(field)
            .ok_or_else(|| ResolveError::UnknownField {
                skill: skill.to_string(),
                field: field.to_string(),
            })?;
        values
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| ResolveError::LevelOutOfRange {
                field: field.to_string(),
                index,
                len: values.len(),
            })
    }
}
