//! Whole-song key changes
//!
//! Picks the interval between the stored key and the requested one, runs
//! every block through the block transposer and hands back the new key
//! label. Nothing is persisted here; the caller decides whether the result
//! is a saved edit or a preview.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Block, Interval, Key};
use crate::transposition::block::transpose_block;
use crate::transposition::interval::distance;
use crate::transposition::progression::transpose_key;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransposedSong {
    pub key: Key,
    pub interval: Interval,
    pub blocks: Vec<Block>,
}

/// Move a song from `from` to the user-selected key `to`
pub fn transpose_song(blocks: &[Block], from: &Key, to: &Key) -> TransposedSong {
    let interval = distance(&from.tonic.spelled(), &to.tonic.spelled());
    log::info!("transposing {} blocks from {} to {} ({})", blocks.len(), from, to, interval);

    TransposedSong {
        key: *to,
        interval,
        blocks: blocks.iter().map(|b| transpose_block(b, interval, to)).collect(),
    }
}

/// Move a song up by an interval; the new key label is derived from `from`
pub fn transpose_song_by(blocks: &[Block], from: &Key, interval: Interval) -> Result<TransposedSong> {
    let to = transpose_key(from, interval)?;
    Ok(transpose_song(blocks, from, &to))
}
