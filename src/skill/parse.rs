//! Multiplier string parsing
//!
//! The skill-data table encodes numbers inconsistently: trailing percent
//! signs, unit words ("%最大生命值"), per-hit multiplicity markers
//! ("%×4"), thousands separators, and two-part values joined by `+` or
//! `/`. All of it funnels through [`parse_multiplier`]; new unit variants
//! are a table entry in [`UNIT_TOKENS`], not a new code path.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unit words stripped from raw values before numeric conversion.
/// Longer tokens first so compound units are removed whole.
const UNIT_TOKENS: &[&str] = &[
    "最大生命值",
    "生命值上限",
    "每点元素能量",
    "防御力",
    "攻击力",
    "每层",
];

/// A parsed multiplier: a scalar, or the two components of a split
/// encoding. How the two parts combine is the caller's business - the
/// separator carries no semantics of its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Multiplier {
    Single(f64),
    Pair(f64, f64),
}

impl Multiplier {
    pub fn single(self) -> Option<f64> {
        match self {
            Multiplier::Single(v) => Some(v),
            Multiplier::Pair(..) => None,
        }
    }

    pub fn pair(self) -> Option<(f64, f64)> {
        match self {
            Multiplier::Single(_) => None,
            Multiplier::Pair(a, b) => Some((a, b)),
        }
    }
}

/// Raw value did not match any known encoding
#[derive(Debug, Clone, PartialEq, Error)]
#[error("unrecognized multiplier encoding: {0}")]
pub struct ParseError(pub String);

/// Parse a raw skill-data value.
///
/// Values containing `+` or `/` split into two independently parsed
/// parts; each part strips unit words and multiplicity markers, and a
/// trailing percent sign converts the number to a fraction.
pub fn parse_multiplier(raw: &str) -> Result<Multiplier, ParseError> {
    let parts: Vec<&str> = if raw.contains('+') {
        raw.split('+').collect()
    } else if raw.contains('/') {
        raw.split('/').collect()
    } else {
        vec![raw]
    };

    match parts.as_slice() {
        [single] => Ok(Multiplier::Single(parse_part(single, raw)?)),
        [first, second] => Ok(Multiplier::Pair(
            parse_part(first, raw)?,
            parse_part(second, raw)?,
        )),
        _ => Err(ParseError(raw.to_string())),
    }
}

fn parse_part(part: &str, raw: &str) -> Result<f64, ParseError> {
    let mut s = part.trim().to_string();
    for token in UNIT_TOKENS {
        if s.contains(token) {
            s = s.replace(token, "");
        }
    }
    // thousands separators ("1,232")
    s.retain(|c| c != ',');
    strip_multiplicity(&mut s);
    let percent = s.ends_with('%');
    if percent {
        s.pop();
    }
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| ParseError(raw.to_string()))?;
    Ok(if percent { value / 100.0 } else { value })
}

/// Drop a trailing per-hit marker such as "×4" or "*3"
fn strip_multiplicity(s: &mut String) {
    if let Some(pos) = s.rfind(['×', '*']) {
        let mark_len = s[pos..].chars().next().map_or(1, char::len_utf8);
        let tail = &s[pos + mark_len..];
        if !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit()) {
            s.truncate(pos);
        }
    }
}
