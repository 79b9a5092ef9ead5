/// Enumeration of all valid tonic spellings (key centers)
///
/// Represents the 17 spellings a song key may be stored under:
/// - 7 natural tonics (C, D, E, F, G, A, B)
/// - 5 sharp tonics (C#, D#, F#, G#, A#)
/// - 5 flat tonics (Db, Eb, Gb, Ab, Bb)
///
/// Enharmonic equivalents are listed separately (e.g., C# and Db) because
/// the spelling decides which accidentals the song's chords are written with.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TransposeError;
use crate::models::spelled_pitch::{Letter, SpelledPitch};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tonic {
    C,
    #[serde(rename = "C#")]
    Cs,
    Db,
    D,
    #[serde(rename = "D#")]
    Ds,
    Eb,
    E,
    F,
    #[serde(rename = "F#")]
    Fs,
    Gb,
    G,
    #[serde(rename = "G#")]
    Gs,
    Ab,
    A,
    #[serde(rename = "A#")]
    As,
    Bb,
    B,
}

impl Tonic {
    pub const ALL: [Tonic; 17] = [
        Tonic::C, Tonic::Cs, Tonic::Db, Tonic::D, Tonic::Ds,
        Tonic::Eb, Tonic::E, Tonic::F, Tonic::Fs, Tonic::Gb,
        Tonic::G, Tonic::Gs, Tonic::Ab, Tonic::A, Tonic::As,
        Tonic::Bb, Tonic::B,
    ];

    /// Convert tonic to its string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Tonic::C => "C",
            Tonic::Cs => "C#",
            Tonic::Db => "Db",
            Tonic::D => "D",
            Tonic::Ds => "D#",
            Tonic::Eb => "Eb",
            Tonic::E => "E",
            Tonic::F => "F",
            Tonic::Fs => "F#",
            Tonic::Gb => "Gb",
            Tonic::G => "G",
            Tonic::Gs => "G#",
            Tonic::Ab => "Ab",
            Tonic::A => "A",
            Tonic::As => "A#",
            Tonic::Bb => "Bb",
            Tonic::B => "B",
        }
    }

    pub fn spelled(&self) -> SpelledPitch {
        let (letter, accidental) = match self {
            Tonic::C => (Letter::C, 0),
            Tonic::Cs => (Letter::C, 1),
            Tonic::Db => (Letter::D, -1),
            Tonic::D => (Letter::D, 0),
            Tonic::Ds => (Letter::D, 1),
            Tonic::Eb => (Letter::E, -1),
            Tonic::E => (Letter::E, 0),
            Tonic::F => (Letter::F, 0),
            Tonic::Fs => (Letter::F, 1),
            Tonic::Gb => (Letter::G, -1),
            Tonic::G => (Letter::G, 0),
            Tonic::Gs => (Letter::G, 1),
            Tonic::Ab => (Letter::A, -1),
            Tonic::A => (Letter::A, 0),
            Tonic::As => (Letter::A, 1),
            Tonic::Bb => (Letter::B, -1),
            Tonic::B => (Letter::B, 0),
        };
        SpelledPitch::new(letter, accidental)
    }

    /// Exact spelling match; `E#`, `Cb` and double accidentals have no tonic
    pub fn from_spelled(pitch: &SpelledPitch) -> Option<Tonic> {
        Tonic::ALL.iter().copied().find(|t| t.spelled() == *pitch)
    }

    /// Chromatic pitch class (0-11)
    pub fn semitone(&self) -> u8 {
        self.spelled().semitone()
    }
}

impl fmt::Display for Tonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tonic {
    type Err = TransposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Case-insensitive parsing
        match s.to_uppercase().as_str() {
            "C" => Ok(Tonic::C),
            "C#" | "C♯" => Ok(Tonic::Cs),
            "DB" | "D♭" => Ok(Tonic::Db),
            "D" => Ok(Tonic::D),
            "D#" | "D♯" => Ok(Tonic::Ds),
            "EB" | "E♭" => Ok(Tonic::Eb),
            "E" => Ok(Tonic::E),
            "F" => Ok(Tonic::F),
            "F#" | "F♯" => Ok(Tonic::Fs),
            "GB" | "G♭" => Ok(Tonic::Gb),
            "G" => Ok(Tonic::G),
            "G#" | "G♯" => Ok(Tonic::Gs),
            "AB" | "A♭" => Ok(Tonic::Ab),
            "A" => Ok(Tonic::A),
            "A#" | "A♯" => Ok(Tonic::As),
            "BB" | "B♭" => Ok(Tonic::Bb),
            "B" => Ok(Tonic::B),
            _ => Err(TransposeError::UnknownKey(s.to_string())),
        }
    }
}
