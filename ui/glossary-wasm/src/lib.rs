//! Klimadiskurs glossary frontend.
//!
//! Rust + WASM replacement for the site's page scripts: accordion panels,
//! paged glossary list, search with alphabet index and the submission modal.
//! Behaviour lives in `kd-glossary-core`; this crate only touches the DOM.

pub mod api;
pub mod collapsible;
pub mod config;
pub mod dom;
pub mod events;
pub mod pagination;
pub mod search;
pub mod state;
pub mod submit_modal;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init()
}

fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;

    let config = config::load();
    let glossary_length = config.glossary_length.unwrap_or_default();
    state::set_config(config);

    // Only pages with pager buttons render the paged home list.
    if dom::by_id("btn-next").is_some() && els.glossary_content.is_some() {
        pagination::init(glossary_length);
    }

    events::bind_events(&els);

    gloo_console::debug!("glossary frontend ready");
    Ok(())
}
