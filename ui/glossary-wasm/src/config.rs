//! Reads the page configuration.
//!
//! Priority: `#glossary-config` JSON element → template globals on `window`
//! (`itemsPerPage`, `glossaryLength`, `enableSubmissions`, `tweetedTerms`).

use crate::dom;
use kd_api_types::PageConfig;
use kd_glossary_core::ConfigError;
use kd_glossary_core::config::{page_config_from_value, parse_page_config, whole_numbers};
use wasm_bindgen::JsValue;

const GLOBALS: [&str; 4] = [
    "itemsPerPage",
    "glossaryLength",
    "enableSubmissions",
    "tweetedTerms",
];

/// A broken config falls back to defaults so the rest of the page still
/// works; the error goes to the console.
pub fn load() -> PageConfig {
    let mut config = read().unwrap_or_else(|e| {
        gloo_console::error!(format!("page config ignored: {}", e));
        PageConfig::default()
    });
    if config.glossary_length.is_none() {
        config.glossary_length = Some(dom::query_all("#glossary-content .list > li").len());
    }
    config
}

fn read() -> Result<PageConfig, ConfigError> {
    match dom::by_id("glossary-config") {
        Some(el) => parse_page_config(&el.text_content().unwrap_or_default()),
        None => page_config_from_value(read_globals()),
    }
}

fn read_globals() -> serde_json::Value {
    let window: JsValue = dom::window().into();
    let mut map = serde_json::Map::new();
    for name in GLOBALS {
        let Ok(value) = js_sys::Reflect::get(&window, &JsValue::from_str(name)) else {
            continue;
        };
        if value.is_undefined() {
            continue;
        }
        if let Ok(v) = serde_wasm_bindgen::from_value::<serde_json::Value>(value) {
            map.insert(name.to_string(), whole_numbers(v));
        }
    }
    serde_json::Value::Object(map)
}

