//! Damage report - the handoff to the presentation layer
//!
//! An insertion-ordered mapping from action description to either a
//! damage pair, a single informational value, or a free-form note. The
//! core never formats or renders it.

use crate::formula::DamageResult;
use serde::{Deserialize, Serialize};

/// One report row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportEntry {
    /// Free-form explanation (e.g. which stacking assumptions were used)
    Note(String),
    /// Single value, such as a shield absorption or an energy amount
    Single(String),
    /// Critical/expected damage pair
    Damage(DamageResult),
}

/// Ordered description -> entry mapping for one character's damage
/// breakdown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageReport {
    entries: Vec<(String, ReportEntry)>,
}

impl DamageReport {
    pub fn new() -> Self {
        DamageReport::default()
    }

    pub fn push_damage(&mut self, description: impl Into<String>, result: DamageResult) {
        self.entries
            .push((description.into(), ReportEntry::Damage(result)));
    }

    pub fn push_single(&mut self, description: impl Into<String>, value: impl Into<String>) {
        self.entries
            .push((description.into(), ReportEntry::Single(value.into())));
    }

    pub fn push_note(&mut self, description: impl Into<String>, text: impl Into<String>) {
        self.entries
            .push((description.into(), ReportEntry::Note(text.into())));
    }

    pub fn entries(&self) -> &[(String, ReportEntry)] {
        &self.entries
    }

    pub fn get(&self, description: &str) -> Option<&ReportEntry> {
        self.entries
            .iter()
            .find(|(d, _)| d == description)
            .map(|(_, e)| e)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
