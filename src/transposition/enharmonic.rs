/// Enharmonic cleanup tables for transposed spellings
///
/// Format: raw spelling → idiomatic spelling
///
/// Example:
///   "E#"  → "F"
///   "Fb"  → "E"
///   "C##" → "D"
///   "Bbb" → "A"
///
/// Chord roots and bass notes use CHORD_TABLE. Bare tonics use TONIC_TABLE,
/// which additionally collapses C#, D#, G#, A# (and their double-accidental
/// sources) to flats; the key-convention pass brings sharps back where the
/// key calls for them.

use crate::models::SpelledPitch;
use crate::transposition::chord::{rewrite_token, ChordToken};

pub const CHORD_TABLE: &[(&str, &str)] = &[
    // Double sharps
    ("C##", "D"),
    ("D##", "E"),
    ("E##", "F#"),
    ("F##", "G"),
    ("G##", "A"),
    ("A##", "B"),
    ("B##", "C#"),
    // Double flats
    ("Cbb", "Bb"),
    ("Dbb", "C"),
    ("Ebb", "D"),
    ("Fbb", "Eb"),
    ("Gbb", "F"),
    ("Abb", "G"),
    ("Bbb", "A"),
    // Non-idiomatic naturals
    ("Cb", "B"),
    ("Fb", "E"),
    ("E#", "F"),
    ("B#", "C"),
];

pub const TONIC_TABLE: &[(&str, &str)] = &[
    // Double sharps
    ("C##", "D"),
    ("D##", "E"),
    ("E##", "F#"),
    ("F##", "G"),
    ("G##", "A"),
    ("A##", "B"),
    ("B##", "Db"),
    // Double flats
    ("Cbb", "Bb"),
    ("Dbb", "C"),
    ("Ebb", "D"),
    ("Fbb", "Eb"),
    ("Gbb", "F"),
    ("Abb", "G"),
    ("Bbb", "A"),
    // Non-idiomatic naturals
    ("Cb", "B"),
    ("Fb", "E"),
    ("E#", "F"),
    ("B#", "C"),
    // Sharp tonics start out flat
    ("C#", "Db"),
    ("D#", "Eb"),
    ("G#", "Ab"),
    ("A#", "Bb"),
];

/// Look a spelling up in a table; no match → unchanged
pub fn substitute(table: &[(&str, &str)], pitch: &SpelledPitch) -> SpelledPitch {
    let spelled = pitch.to_string();
    table
        .iter()
        .find(|(from, _)| *from == spelled)
        .and_then(|(_, to)| to.parse().ok())
        .unwrap_or(*pitch)
}

pub fn clean_chord_token(chord: &ChordToken) -> ChordToken {
    chord.map_pitches(|p| substitute(CHORD_TABLE, p))
}

pub fn clean_tonic_token(chord: &ChordToken) -> ChordToken {
    chord.map_pitches(|p| substitute(TONIC_TABLE, p))
}

/// Clean every chord on a line; non-chord tokens pass through
///
/// Tokens are rejoined with single spaces.
pub fn clean_chord(text: &str) -> String {
    clean_tokens(text, clean_chord_token)
}

/// Clean a tonic name such as "C#", "E#m" or "Fb"
pub fn clean_tonic(text: &str) -> String {
    clean_tokens(text, clean_tonic_token)
}

fn clean_tokens(text: &str, clean: fn(&ChordToken) -> ChordToken) -> String {
    text.split_whitespace()
        .map(|token| rewrite_token(token, clean))
        .collect::<Vec<_>>()
        .join(" ")
}
