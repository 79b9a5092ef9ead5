//! Shared helpers for WASM API operations
//!
//! Console logging, serialization across the JS boundary, and parsing of
//! the key/interval names the UI sends in.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::TransposeError;
use crate::models::{Interval, Key};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

/// `console.log` with the [chordshift] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// `console.info` with the [chordshift] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// `console.warn` with the [chordshift] prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

const PREFIX: &str = "[chordshift]";

pub fn log_debug(msg: &str) {
    log(&format!("{} {}", PREFIX, msg));
}

pub fn log_info(msg: &str) {
    info(&format!("{} {}", PREFIX, msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("{} {}", PREFIX, msg));
}

/// Errors leaving the API are reported here before being handed to JS
fn log_error(msg: &str) {
    error(&format!("{} {}", PREFIX, msg));
}

fn boundary_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    let msg = format!("{}: {}", context, err);
    log_error(&msg);
    JsValue::from_str(&msg)
}

/// Read a value coming from JS, e.g. a block or a list of chord symbols
pub fn deserialize<T: DeserializeOwned>(value: JsValue, context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| boundary_error(context, e))
}

pub fn serialize<T: Serialize>(value: &T, context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| boundary_error(context, e))
}

/// Engine errors reach JS as their display string
pub fn engine_error(err: TransposeError) -> JsValue {
    let msg = err.to_string();
    log_error(&msg);
    JsValue::from_str(&msg)
}

pub fn parse_key(name: &str) -> Result<Key, JsValue> {
    name.parse().map_err(engine_error)
}

pub fn parse_interval(name: &str) -> Result<Interval, JsValue> {
    name.parse().map_err(engine_error)
}
