//! Transposition operations for the WASM API
//!
//! - buildProgression: candidate keys for the key picker
//! - transposeBlock / transposeSong: live preview and "save new key"
//! - distance: interval between the current and the picked key
//! - cleanChord / cleanTonic / respell: the individual cleanup passes

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, engine_error, parse_interval, parse_key, serialize};
use crate::models::Block;
use crate::transposition;
use crate::{wasm_info, wasm_log};

/// Build the 12 candidate keys for the key picker
///
/// # Returns
/// Array of key names; index 4 is the current key
#[wasm_bindgen(js_name = buildProgression)]
pub fn build_progression(key: &str) -> Result<JsValue, JsValue> {
    wasm_info!("buildProgression called: key={}", key);

    let tonic = parse_key(key)?;
    let keys = transposition::build_progression(&tonic).map_err(engine_error)?;
    let names: Vec<String> = keys.iter().map(|k| k.to_string()).collect();

    wasm_log!("  Progression: {}", names.join(" "));
    serialize(&names, "Progression serialization error")
}

/// Ascending interval name between two keys' tonics (e.g. "G", "A" → "M2")
#[wasm_bindgen(js_name = distance)]
pub fn distance(from: &str, to: &str) -> Result<String, JsValue> {
    let from = parse_key(from)?;
    let to = parse_key(to)?;
    Ok(transposition::distance(&from.tonic.spelled(), &to.tonic.spelled()).to_string())
}

/// Key label after moving `key` up by `interval`
#[wasm_bindgen(js_name = transposeKey)]
pub fn transpose_key(key: &str, interval: &str) -> Result<String, JsValue> {
    let key = parse_key(key)?;
    let interval = parse_interval(interval)?;
    let moved = transposition::transpose_key(&key, interval).map_err(engine_error)?;
    Ok(moved.to_string())
}

/// Transpose one block
///
/// # Parameters
/// - `block_js`: `{ name, ind, text, format }`
/// - `interval`: interval name such as "M2"
/// - `target_key`: destination key, decides sharp/flat spelling
#[wasm_bindgen(js_name = transposeBlock)]
pub fn transpose_block(block_js: JsValue, interval: &str, target_key: &str) -> Result<JsValue, JsValue> {
    wasm_info!("transposeBlock called: interval={}, target={}", interval, target_key);

    let block: Block = deserialize(block_js, "Block deserialization error")?;
    let interval = parse_interval(interval)?;
    let target = parse_key(target_key)?;

    let result = transposition::transpose_block(&block, interval, &target);
    serialize(&result, "Block serialization error")
}

/// Transpose every block of a song from one key to another
///
/// # Returns
/// `{ key, interval, blocks }`
#[wasm_bindgen(js_name = transposeSong)]
pub fn transpose_song(blocks_js: JsValue, from_key: &str, to_key: &str) -> Result<JsValue, JsValue> {
    wasm_info!("transposeSong called: {} -> {}", from_key, to_key);

    let blocks: Vec<Block> = deserialize(blocks_js, "Blocks deserialization error")?;
    let from = parse_key(from_key)?;
    let to = parse_key(to_key)?;

    wasm_log!("  {} blocks", blocks.len());
    let song = transposition::transpose_song(&blocks, &from, &to);

    wasm_info!("transposeSong completed: interval {}", song.interval);
    serialize(&song, "Song serialization error")
}

#[wasm_bindgen(js_name = cleanChord)]
pub fn clean_chord(text: &str) -> String {
    transposition::clean_chord(text)
}

#[wasm_bindgen(js_name = cleanTonic)]
pub fn clean_tonic(text: &str) -> String {
    transposition::clean_tonic(text)
}

/// Respell chord symbols for a destination key
#[wasm_bindgen(js_name = respell)]
pub fn respell(target_key: &str, symbols_js: JsValue) -> Result<JsValue, JsValue> {
    let target = parse_key(target_key)?;
    let symbols: Vec<String> = deserialize(symbols_js, "Symbols deserialization error")?;
    serialize(&transposition::respell(&target, &symbols), "Symbols serialization error")
}
