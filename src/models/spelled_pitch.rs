/// A spelled pitch: a letter name plus a signed accidental count
///
/// This is the working representation of a chord root while it is being
/// moved by an interval. Letter arithmetic can produce spellings such as
/// `E#`, `Fb` or `C##`; those are valid here and are cleaned up later by
/// the enharmonic normalizer.
///
/// Examples:
///   "C"   → (C, 0)
///   "F#"  → (F, +1)
///   "Bb"  → (B, -1)
///   "G##" → (G, +2)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TransposeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    pub const ALL: [Letter; 7] = [
        Letter::C, Letter::D, Letter::E, Letter::F, Letter::G, Letter::A, Letter::B,
    ];

    /// Position in the C-based letter cycle (C=0 .. B=6)
    pub fn index(self) -> u8 {
        match self {
            Letter::C => 0,
            Letter::D => 1,
            Letter::E => 2,
            Letter::F => 3,
            Letter::G => 4,
            Letter::A => 5,
            Letter::B => 6,
        }
    }

    /// Pitch class of the natural (white-key) note
    pub fn natural_semitone(self) -> u8 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// Move up by a number of letter steps, wrapping after B
    pub fn up(self, steps: u8) -> Letter {
        Letter::ALL[((self.index() + steps) % 7) as usize]
    }

    pub fn from_char(c: char) -> Option<Letter> {
        match c {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpelledPitch {
    pub letter: Letter,
    /// Positive = sharps, negative = flats
    pub accidental: i8,
}

impl SpelledPitch {
    pub fn new(letter: Letter, accidental: i8) -> Self {
        Self { letter, accidental }
    }

    /// Chromatic pitch class (0-11)
    /// 0=C, 1=C#, 2=D, 3=D#, 4=E, 5=F, 6=F#, 7=G, 8=G#, 9=A, 10=A#, 11=B
    pub fn semitone(&self) -> u8 {
        (self.letter.natural_semitone() as i16 + self.accidental as i16).rem_euclid(12) as u8
    }

    /// Canonical sharp spelling for a pitch class
    pub fn from_semitone_sharp(semitone: u8) -> Self {
        use Letter::*;
        let (letter, accidental) = match semitone % 12 {
            0 => (C, 0),
            1 => (C, 1),
            2 => (D, 0),
            3 => (D, 1),
            4 => (E, 0),
            5 => (F, 0),
            6 => (F, 1),
            7 => (G, 0),
            8 => (G, 1),
            9 => (A, 0),
            10 => (A, 1),
            _ => (B, 0),
        };
        Self::new(letter, accidental)
    }

    /// Nearest sharp-or-natural spelling of the same pitch class
    ///
    /// `Db` → `C#`, `Bb` → `A#`, `Cb` → `B`, `Fb` → `E`
    pub fn to_sharp_spelling(&self) -> Self {
        Self::from_semitone_sharp(self.semitone())
    }

    pub fn has_flat(&self) -> bool {
        self.accidental < 0
    }

    pub fn is_enharmonic(&self, other: &SpelledPitch) -> bool {
        self.semitone() == other.semitone()
    }
}

impl fmt::Display for SpelledPitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.accidental >= 0 { "#" } else { "b" };
        write!(f, "{}{}", self.letter.as_char(), sign.repeat(self.accidental.unsigned_abs() as usize))
    }
}

impl FromStr for SpelledPitch {
    type Err = TransposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(|| TransposeError::UnknownPitch(s.to_string()))?;

        let accidental = match chars.as_str() {
            "" => 0,
            "#" | "♯" => 1,
            "##" | "♯♯" | "x" => 2,
            "b" | "♭" => -1,
            "bb" | "♭♭" => -2,
            _ => return Err(TransposeError::UnknownPitch(s.to_string())),
        };

        Ok(SpelledPitch::new(letter, accidental))
    }
}

impl Serialize for SpelledPitch {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SpelledPitch {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
