/// Candidate keys for the "choose a new key" control
///
/// The 12 slots follow the button layout of the key picker, not the circle
/// of fifths: the four keys below the current one, the current key itself
/// at index 4, then the seven keys above it.
///
/// Example (from C):
///   Ab A Bb B [C] Db D Eb E F F# G
///
/// Only one spelling per slot is produced.

use crate::error::{Result, TransposeError};
use crate::models::{Interval, Key, Tonic};
use crate::transposition::chord::ChordToken;
use crate::transposition::enharmonic::clean_tonic_token;
use crate::transposition::interval::transpose;
use crate::transposition::key_convention::respell_tonic;

pub const PROGRESSION_OFFSETS: [Interval; 12] = [
    Interval::Min6,
    Interval::Maj6,
    Interval::Min7,
    Interval::Maj7,
    Interval::P1,
    Interval::Min2,
    Interval::Maj2,
    Interval::Min3,
    Interval::Maj3,
    Interval::P4,
    Interval::A4,
    Interval::P5,
];

/// Index of the current key within the progression
pub const CURRENT_KEY_SLOT: usize = 4;

/// Key reached by moving `key` up by `interval`, with a cleaned tonic
/// spelled the way that key is conventionally written
pub fn transpose_key(key: &Key, interval: Interval) -> Result<Key> {
    let raw = ChordToken {
        root: transpose(&key.tonic.spelled(), interval),
        suffix: key.quality_suffix().to_string(),
        bass: None,
    };
    let cleaned = clean_tonic_token(&raw);

    let tonic = Tonic::from_spelled(&cleaned.root).ok_or_else(|| {
        TransposeError::Internal(format!("{} + {} cleaned to non-tonic {}", key, interval, cleaned))
    })?;

    Ok(respell_tonic(&key.with_tonic(tonic)))
}

pub fn build_progression(tonic: &Key) -> Result<Vec<Key>> {
    let keys = PROGRESSION_OFFSETS
        .iter()
        .map(|&offset| transpose_key(tonic, offset))
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "progression for {}: {}",
        tonic,
        keys.iter().map(|k| k.to_string()).collect::<Vec<_>>().join(" ")
    );
    Ok(keys)
}
