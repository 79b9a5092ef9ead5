//! Models module for the transposition engine
//!
//! Value types shared by the engine and the WASM API: spelled pitches,
//! tonics and keys, intervals, and song blocks.

pub mod block;
pub mod interval;
pub mod key;
pub mod spelled_pitch;
pub mod tonic;

// Re-export commonly used types
pub use block::{Block, BlockFormat};
pub use interval::Interval;
pub use key::Key;
pub use spelled_pitch::{Letter, SpelledPitch};
pub use tonic::Tonic;
