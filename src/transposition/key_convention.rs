//! Sharp/flat spelling by destination key
//!
//! The five black-key pitch classes can be spelled either way. Songs in a
//! sharp-leaning key use C# D# F# G# A#; songs in a flat-leaning key use
//! Db Eb Gb Ab Bb. Keys in neither set (C, Am) leave spellings alone.

use crate::models::{Key, SpelledPitch, Tonic};
use crate::transposition::chord::{rewrite_token, ChordToken};

pub const SHARP_KEYS: &[&str] = &[
    "G", "D", "A", "E", "B", "F#",
    "Em", "Bm", "F#m", "C#m", "G#m", "D#m",
];

pub const FLAT_KEYS: &[&str] = &[
    "F", "Bb", "Eb", "Ab", "Db", "Gb",
    "Dm", "Gm", "Cm", "Fm", "Bbm", "Ebm",
];

/// Sharp spelling → flat spelling of the ambiguous pitch classes
pub const SHARP_TO_FLAT: &[(&str, &str)] = &[
    ("C#", "Db"),
    ("D#", "Eb"),
    ("F#", "Gb"),
    ("G#", "Ab"),
    ("A#", "Bb"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bias {
    Sharp,
    Flat,
}

/// Spelling bias of a key, `None` for keys outside both sets
pub fn key_bias(key: &Key) -> Option<Bias> {
    let name = key.to_string();
    if SHARP_KEYS.contains(&name.as_str()) {
        Some(Bias::Sharp)
    } else if FLAT_KEYS.contains(&name.as_str()) {
        Some(Bias::Flat)
    } else {
        None
    }
}

/// Respell one pitch toward `bias`; naturals and already-matching
/// spellings are returned as-is
pub fn respell_pitch(pitch: &SpelledPitch, bias: Bias) -> SpelledPitch {
    let spelled = pitch.to_string();
    let replacement = match bias {
        Bias::Sharp => SHARP_TO_FLAT.iter().find(|(_, flat)| *flat == spelled).map(|(sharp, _)| *sharp),
        Bias::Flat => SHARP_TO_FLAT.iter().find(|(sharp, _)| *sharp == spelled).map(|(_, flat)| *flat),
    };

    replacement.and_then(|s| s.parse().ok()).unwrap_or(*pitch)
}

pub fn respell_chord_token(target: &Key, chord: &ChordToken) -> ChordToken {
    match key_bias(target) {
        Some(bias) => chord.map_pitches(|p| respell_pitch(p, bias)),
        None => chord.clone(),
    }
}

/// Respell chord symbols for the destination key
///
/// Each entry may hold one symbol or a whitespace-separated run of them;
/// anything that is not a chord passes through.
pub fn respell(target: &Key, symbols: &[String]) -> Vec<String> {
    symbols
        .iter()
        .map(|symbol| {
            symbol
                .split_whitespace()
                .map(|token| rewrite_token(token, |chord| respell_chord_token(target, chord)))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Tonic-level pass: a key spelling with no listed bias whose enharmonic
/// partner is listed switches to the partner (Dbm → C#m, Abm → G#m)
pub fn respell_tonic(key: &Key) -> Key {
    if key_bias(key).is_some() {
        return *key;
    }

    let spelled = key.tonic.to_string();
    let partner = SHARP_TO_FLAT.iter().find_map(|(sharp, flat)| {
        if *sharp == spelled {
            Some(*flat)
        } else if *flat == spelled {
            Some(*sharp)
        } else {
            None
        }
    });

    match partner.and_then(|p| p.parse::<Tonic>().ok()) {
        Some(tonic) if key_bias(&key.with_tonic(tonic)).is_some() => key.with_tonic(tonic),
        _ => *key,
    }
}
