//! Error types for the transposition engine
//!
//! Only caller contract violations surface as errors (unknown key, interval,
//! pitch or block format). Text that merely fails to look like a chord is
//! never an error: it passes through the transposer unchanged.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TransposeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransposeError {
    /// Key name outside the 17 supported tonic spellings (optionally minor)
    #[error("Invalid key: '{0}'. Expected one of: C, C#, Db, D, D#, Eb, E, F, F#, Gb, G, G#, Ab, A, A#, Bb, B (append 'm' for minor)")]
    UnknownKey(String),

    /// Interval name outside P1..M7
    #[error("Invalid interval: '{0}'. Expected one of: P1, m2, M2, m3, M3, P4, A4, P5, m6, M6, m7, M7")]
    UnknownInterval(String),

    /// Pitch spelling that is not a letter A-G with an optional accidental
    #[error("Invalid pitch: '{0}'")]
    UnknownPitch(String),

    /// Block format tag other than 1, 2 or 3
    #[error("Invalid block format: {0} (must be 1, 2 or 3)")]
    UnknownBlockFormat(u8),

    /// Internal engine error (should not occur, indicates a bug)
    #[error("Internal transposition error: {0}")]
    Internal(String),
}
