pub mod block;
pub mod chord;
pub mod enharmonic;
pub mod interval;
pub mod key_convention;
pub mod progression;
pub mod song;

pub use block::{transpose_block, transpose_chord_line, transpose_token};
pub use chord::ChordToken;
pub use enharmonic::{clean_chord, clean_tonic};
pub use interval::{distance, transpose};
pub use key_convention::{key_bias, respell, respell_tonic, Bias};
pub use progression::{build_progression, transpose_key, CURRENT_KEY_SLOT, PROGRESSION_OFFSETS};
pub use song::{transpose_song, transpose_song_by, TransposedSong};
