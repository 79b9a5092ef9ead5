/// The 12 ascending simple intervals, one per semitone distance
///
/// Each interval also carries a letter-step count, which is what keeps
/// transposed spellings diatonically sensible (C + M3 = E, never Fb).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TransposeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    P1,
    #[serde(rename = "m2")]
    Min2,
    #[serde(rename = "M2")]
    Maj2,
    #[serde(rename = "m3")]
    Min3,
    #[serde(rename = "M3")]
    Maj3,
    P4,
    A4,
    P5,
    #[serde(rename = "m6")]
    Min6,
    #[serde(rename = "M6")]
    Maj6,
    #[serde(rename = "m7")]
    Min7,
    #[serde(rename = "M7")]
    Maj7,
}

impl Interval {
    /// Indexed by semitone count
    pub const ALL: [Interval; 12] = [
        Interval::P1, Interval::Min2, Interval::Maj2, Interval::Min3,
        Interval::Maj3, Interval::P4, Interval::A4, Interval::P5,
        Interval::Min6, Interval::Maj6, Interval::Min7, Interval::Maj7,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::P1 => "P1",
            Interval::Min2 => "m2",
            Interval::Maj2 => "M2",
            Interval::Min3 => "m3",
            Interval::Maj3 => "M3",
            Interval::P4 => "P4",
            Interval::A4 => "A4",
            Interval::P5 => "P5",
            Interval::Min6 => "m6",
            Interval::Maj6 => "M6",
            Interval::Min7 => "m7",
            Interval::Maj7 => "M7",
        }
    }

    pub fn semitones(&self) -> u8 {
        match self {
            Interval::P1 => 0,
            Interval::Min2 => 1,
            Interval::Maj2 => 2,
            Interval::Min3 => 3,
            Interval::Maj3 => 4,
            Interval::P4 => 5,
            Interval::A4 => 6,
            Interval::P5 => 7,
            Interval::Min6 => 8,
            Interval::Maj6 => 9,
            Interval::Min7 => 10,
            Interval::Maj7 => 11,
        }
    }

    /// Number of letter names spanned (generic interval size minus one)
    pub fn letter_steps(&self) -> u8 {
        match self {
            Interval::P1 => 0,
            Interval::Min2 | Interval::Maj2 => 1,
            Interval::Min3 | Interval::Maj3 => 2,
            Interval::P4 | Interval::A4 => 3,
            Interval::P5 => 4,
            Interval::Min6 | Interval::Maj6 => 5,
            Interval::Min7 | Interval::Maj7 => 6,
        }
    }

    /// Any semitone count, reduced to within one octave
    pub fn from_semitones(semitones: i32) -> Interval {
        Interval::ALL[semitones.rem_euclid(12) as usize]
    }

    /// Complement within the octave (M3 → m6, P1 → P1)
    pub fn invert(&self) -> Interval {
        Interval::from_semitones(12 - self.semitones() as i32)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Interval {
    type Err = TransposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Case matters: m = minor, M = major
        match s.trim() {
            "P1" | "P8" => Ok(Interval::P1),
            "m2" => Ok(Interval::Min2),
            "M2" => Ok(Interval::Maj2),
            "m3" => Ok(Interval::Min3),
            "M3" => Ok(Interval::Maj3),
            "P4" => Ok(Interval::P4),
            "A4" | "d5" | "TT" => Ok(Interval::A4),
            "P5" => Ok(Interval::P5),
            "m6" => Ok(Interval::Min6),
            "M6" => Ok(Interval::Maj6),
            "m7" => Ok(Interval::Min7),
            "M7" => Ok(Interval::Maj7),
            _ => Err(TransposeError::UnknownInterval(s.to_string())),
        }
    }
}
