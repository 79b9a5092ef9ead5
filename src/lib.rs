//! Chord Transposition WASM Module
//!
//! Transposes worship-song blocks (chord lines over lyric lines) to a new
//! key and builds the list of candidate keys offered by the key picker.
//! The engine is pure: no I/O, no shared state.

pub mod api;
pub mod error;
pub mod models;
pub mod transposition;

// Re-export commonly used types
pub use error::{Result, TransposeError};
pub use models::*;
pub use transposition::{build_progression, transpose_block, transpose_song, TransposedSong};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        crate::wasm_warn!("logger already initialized");
    }

    log::info!("Chord transposition WASM module initialized");
}
