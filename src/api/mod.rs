//! Transposition engine WASM API
//!
//! JavaScript-facing wrappers around the engine. Inputs arrive as key and
//! interval names plus serde-encoded blocks; errors leave as string JsValues.
//!
//! - `helpers`: logging macros, serialization and input parsing
//! - `transpose`: the exported operations

pub mod helpers;
pub mod transpose;

pub use transpose::{
    build_progression, clean_chord, clean_tonic, distance, respell, transpose_block, transpose_key,
    transpose_song,
};
