//! Chord token splitting
//!
//! A chord token is split into three parts: the root pitch, an opaque
//! quality suffix, and an optional slash bass. Only the root and bass are
//! ever rewritten; the suffix is carried through byte-for-byte.
//!
//! A token is only treated as a chord when everything after the root is
//! recognised chord vocabulary. `Chorus`, `Bridge` or `x2` are annotations
//! and do not parse. Roots may be written lower-case (`am`, `e#`); they are
//! written back upper-case. A lone `a` is an article, not a chord.
//!
//! Bar lines and brackets glued to a chord (`(Am)`, `[G]`, `Am|`, `C*`)
//! are split off before parsing and put back afterwards.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

use crate::models::SpelledPitch;

lazy_static! {
    static ref CHORD_RE: Regex = Regex::new(concat!(
        r"^([A-Ga-g](?:##|bb|#|b|♯|♭)?)",
        r"((?:maj|min|dim|aug|sus|add|alt|omit|no|m|M|/\d+|\d|\+|-|°|ø|Δ|#|b|\(|\)|,)*)",
        r"(?:/([A-Ga-g](?:##|bb|#|b|♯|♭)?))?$",
    ))
    .expect("chord pattern is valid");
}

const LEADING_MARKS: &[char] = &['(', '[', '{', '|'];
const TRAILING_MARKS: &[char] = &[')', ']', '}', '|', '*', ',', '.'];

/// Split `(Am)|` into `("(", "Am", ")|")`
pub fn split_marks(token: &str) -> (&str, &str, &str) {
    let core = token.trim_start_matches(LEADING_MARKS);
    let lead = &token[..token.len() - core.len()];
    let trimmed = core.trim_end_matches(TRAILING_MARKS);
    let trail = &core[trimmed.len()..];
    (lead, trimmed, trail)
}

/// Rewrite the chord inside a token, keeping any glued bar lines or
/// brackets; tokens with no chord come back unchanged
pub fn rewrite_token<F>(token: &str, f: F) -> String
where
    F: FnOnce(&ChordToken) -> ChordToken,
{
    let (lead, core, trail) = split_marks(token);
    match ChordToken::parse(core) {
        Some(chord) => format!("{}{}{}", lead, f(&chord), trail),
        None => {
            log::trace!("passing through non-chord token '{}'", token);
            token.to_string()
        }
    }
}

/// Parse a root or bass spelling, folding a lower-case letter to upper-case
fn parse_pitch(s: &str) -> Option<SpelledPitch> {
    let mut chars = s.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    format!("{}{}", letter, chars.as_str()).parse().ok()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordToken {
    pub root: SpelledPitch,
    pub suffix: String,
    pub bass: Option<SpelledPitch>,
}

impl ChordToken {
    /// Parse a single whitespace-free token; `None` for anything that is
    /// not a chord symbol
    pub fn parse(token: &str) -> Option<ChordToken> {
        if token == "a" {
            return None;
        }

        let caps = CHORD_RE.captures(token)?;
        let root = parse_pitch(caps.get(1)?.as_str())?;
        let suffix = caps.get(2).map_or("", |m| m.as_str()).to_string();
        let bass = match caps.get(3) {
            Some(m) => Some(parse_pitch(m.as_str())?),
            None => None,
        };

        Some(ChordToken { root, suffix, bass })
    }

    /// Apply the same rewrite to root and bass
    pub fn map_pitches<F>(&self, mut f: F) -> ChordToken
    where
        F: FnMut(&SpelledPitch) -> SpelledPitch,
    {
        ChordToken {
            root: f(&self.root),
            suffix: self.suffix.clone(),
            bass: self.bass.as_ref().map(|b| f(b)),
        }
    }
}

impl fmt::Display for ChordToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.suffix)?;
        if let Some(bass) = &self.bass {
            write!(f, "/{}", bass)?;
        }
        Ok(())
    }
}
