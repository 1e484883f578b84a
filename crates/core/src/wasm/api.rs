// JavaScript-callable sorting functions

use super::types::JsSortConfig;
use crate::config::SortConfig;
use crate::core::entry::Entity;
use crate::error::{DirsortError, Result};
use wasm_bindgen::prelude::*;

fn to_js(err: DirsortError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// `undefined` / `null` mean the default configuration
fn parse_config(config_js: JsValue) -> Result<SortConfig> {
    if config_js.is_undefined() || config_js.is_null() {
        return Ok(SortConfig::default());
    }

    let js_config: JsSortConfig = serde_wasm_bindgen::from_value(config_js)
        .map_err(|e| DirsortError::invalid_config(e.to_string()))?;
    SortConfig::try_from(js_config)
}

fn parse_entity(entity_js: JsValue) -> Result<Entity> {
    serde_wasm_bindgen::from_value(entity_js).map_err(|e| DirsortError::parse(e.to_string()))
}

/// Sort an array of `{ name, isDirectory }` entries
///
/// # Arguments
/// * `entries_js` - JavaScript array of entries
/// * `config_js` - Optional `{ comparator, kinds }` object
///
/// # Errors
/// Rejects malformed entries or configuration before sorting
#[wasm_bindgen(js_name = sortEntries)]
pub fn sort_entries(entries_js: JsValue, config_js: JsValue) -> std::result::Result<JsValue, JsValue> {
    let config = parse_config(config_js).map_err(to_js)?;

    let mut entries: Vec<Entity> = serde_wasm_bindgen::from_value(entries_js)
        .map_err(|e| to_js(DirsortError::parse(e.to_string())))?;

    crate::api::sort_entries_with(&mut entries, &config.build());

    serde_wasm_bindgen::to_value(&entries)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize output: {}", e)))
}

/// Compare two entries, returning -1, 0 or 1 like `Array.prototype.sort` expects
#[wasm_bindgen(js_name = compareEntries)]
pub fn compare_entries(
    a_js: JsValue,
    b_js: JsValue,
    config_js: JsValue,
) -> std::result::Result<i32, JsValue> {
    let sorter = parse_config(config_js).map_err(to_js)?.build();
    let a = parse_entity(a_js).map_err(to_js)?;
    let b = parse_entity(b_js).map_err(to_js)?;

    Ok(sorter.compare(&a, &b) as i32)
}

/// Sort bare file names
#[wasm_bindgen(js_name = sortNames)]
pub fn sort_names(names_js: JsValue, config_js: JsValue) -> std::result::Result<JsValue, JsValue> {
    let config = parse_config(config_js).map_err(to_js)?;

    let names: Vec<String> = serde_wasm_bindgen::from_value(names_js)
        .map_err(|e| to_js(DirsortError::parse(e.to_string())))?;

    let sorted = crate::api::sort_names(names, &config);

    serde_wasm_bindgen::to_value(&sorted)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize output: {}", e)))
}
