//! Event binding.
//!
//! Search, alphabet, pager buttons and the modal opener are delegated from
//! `document`, because search replaces the markup they live in. Collapsible
//! headers are static and bind directly.

use crate::collapsible;
use crate::dom::{self, Elements};
use crate::pagination;
use crate::search;
use crate::submit_modal;
use kd_glossary_core::keys::{KeyAction, KeyFocus, route_key};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(els: &Elements) {
    collapsible::bind(els);
    submit_modal::bind(els);

    // ── Delegated clicks ──
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            on_click(&els2, &e);
        }) as Box<dyn FnMut(_)>);
        dom::document()
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap_or_else(|e| gloo_console::error!("click listener:", e));
        cb.forget();
    }

    // ── Keyboard ──
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
            on_keydown(&els2, &e);
        }) as Box<dyn FnMut(_)>);
        dom::document()
            .add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref())
            .unwrap_or_else(|e| gloo_console::error!("keydown listener:", e));
        cb.forget();
    }
}

fn on_click(els: &Elements, e: &web_sys::MouseEvent) {
    let event: &web_sys::Event = e.as_ref();

    if dom::closest_target(event, "#btn-search").is_some() {
        e.prevent_default();
        search::on_search_form(els);
    } else if let Some(letter) = dom::closest_target(event, ".alpha") {
        e.prevent_default();
        search::on_letter(els, &letter.text_content().unwrap_or_default());
    } else if dom::closest_target(event, "#btn-next").is_some() {
        pagination::on_next();
    } else if dom::closest_target(event, "#btn-prev").is_some() {
        pagination::on_prev();
    } else if dom::closest_target(event, "#btn-modal").is_some() {
        submit_modal::on_open_button(els);
    }

    submit_modal::on_document_click(els, event);
}

fn on_keydown(els: &Elements, e: &web_sys::KeyboardEvent) {
    let Some(action) = route_key(&e.key(), e.key_code(), focus_of(els, e)) else {
        return;
    };
    match action {
        KeyAction::CloseModal => submit_modal::on_escape(els),
        KeyAction::Search => {
            e.prevent_default();
            search::on_search_form(els);
        }
        KeyAction::Page(key) => pagination::on_key(key),
    }
}

fn focus_of(els: &Elements, e: &web_sys::KeyboardEvent) -> KeyFocus {
    let Some(target) = e.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
        return KeyFocus::Elsewhere;
    };
    if let Some(input) = &els.query_input {
        let input: &web_sys::Element = input.as_ref();
        if input == &target {
            return KeyFocus::QueryBox;
        }
    }
    match target.tag_name().as_str() {
        "INPUT" | "TEXTAREA" => KeyFocus::TextField,
        _ => KeyFocus::Elsewhere,
    }
}
