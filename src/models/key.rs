/// A song key: a tonic spelling plus major/minor quality
///
/// Minor keys are written with a trailing `m` (`Am`, `F#m`, `Bbm`); the
/// quality carries no other meaning in the engine than selecting the
/// sharp/flat bias of the key.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TransposeError;
use crate::models::tonic::Tonic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    pub tonic: Tonic,
    pub minor: bool,
}

impl Key {
    pub fn major(tonic: Tonic) -> Self {
        Self { tonic, minor: false }
    }

    pub fn minor(tonic: Tonic) -> Self {
        Self { tonic, minor: true }
    }

    /// Same quality, different tonic
    pub fn with_tonic(&self, tonic: Tonic) -> Self {
        Self { tonic, minor: self.minor }
    }

    pub fn semitone(&self) -> u8 {
        self.tonic.semitone()
    }

    /// Suffix appended to the tonic name ("" or "m")
    pub fn quality_suffix(&self) -> &'static str {
        if self.minor {
            "m"
        } else {
            ""
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tonic, self.quality_suffix())
    }
}

impl FromStr for Key {
    type Err = TransposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (tonic_str, minor) = match trimmed.strip_suffix('m') {
            Some(rest) if !rest.is_empty() => (rest, true),
            _ => (trimmed, false),
        };

        let tonic = tonic_str
            .parse::<Tonic>()
            .map_err(|_| TransposeError::UnknownKey(s.to_string()))?;

        Ok(Key { tonic, minor })
    }
}

impl Serialize for Key {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
