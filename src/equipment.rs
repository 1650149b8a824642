//! Equipment descriptors and artifact suit derivation

use crate::types::WeaponType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Equipped weapon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub weapon_type: WeaponType,
    /// Refinement rank, 1-5
    pub refinement: u8,
}

impl Weapon {
    pub fn new(name: impl Into<String>, weapon_type: WeaponType, refinement: u8) -> Self {
        Weapon {
            name: name.into(),
            weapon_type,
            refinement,
        }
    }
}

/// One equipped artifact piece; suit membership is derived from `set_name`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    pub name: String,
    pub set_name: String,
}

impl Artifact {
    pub fn new(name: impl Into<String>, set_name: impl Into<String>) -> Self {
        Artifact {
            name: name.into(),
            set_name: set_name.into(),
        }
    }
}

/// Derived suit membership for a set of equipped artifacts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuitSummary {
    /// Set names with at least two equipped pieces, in first-seen order
    pub two_piece: Vec<String>,
    /// Set name with at least four equipped pieces, if any
    pub four_piece: Option<String>,
}

/// Group equipped artifacts into 2-piece and 4-piece suit tiers.
///
/// Order of `two_piece` follows the first equipped piece of each set so
/// that rule application (and the notes it emits) stays deterministic.
pub fn artifact_suits(artifacts: &[Artifact]) -> SuitSummary {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut seen_order: Vec<&str> = Vec::new();
    for artifact in artifacts {
        let count = counts.entry(artifact.set_name.as_str()).or_insert(0);
        if *count == 0 {
            seen_order.push(artifact.set_name.as_str());
        }
        *count += 1;
    }

    let mut summary = SuitSummary::default();
    for name in seen_order {
        let count = counts[name];
        if count >= 2 {
            summary.two_piece.push(name.to_string());
        }
        if count >= 4 && summary.four_piece.is_none() {
            summary.four_piece = Some(name.to_string());
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pieces(set: &str, n: usize) -> Vec<Artifact> {
        (0..n).map(|i| Artifact::new(format!("piece{i}"), set)).collect()
    }

    #[test]
    fn test_four_piece_suit() {
        let mut artifacts = pieces("绝缘之旗印", 4);
        artifacts.push(Artifact::new("offpiece", "角斗士的终幕礼"));
        let suits = artifact_suits(&artifacts);
        assert_eq!(suits.two_piece, vec!["绝缘之旗印".to_string()]);
        assert_eq!(suits.four_piece.as_deref(), Some("绝缘之旗印"));
    }

    #[test]
    fn test_two_mixed_pairs_is_not_four_piece() {
        let mut artifacts = pieces("昔日宗室之仪", 2);
        artifacts.extend(pieces("赌徒", 2));
        artifacts.push(Artifact::new("off", "武人"));
        let suits = artifact_suits(&artifacts);
        assert_eq!(
            suits.two_piece,
            vec!["昔日宗室之仪".to_string(), "赌徒".to_string()]
        );
        assert!(suits.four_piece.is_none());
    }

    #[test]
    fn test_singles_do_not_qualify() {
        let artifacts = vec![
            Artifact::new("a", "战狂"),
            Artifact::new("b", "教官"),
            Artifact::new("c", "武人"),
        ];
        let suits = artifact_suits(&artifacts);
        assert!(suits.two_piece.is_empty());
        assert!(suits.four_piece.is_none());
    }
}
