//! Accordion binding for `.collapsible` headers.
//!
//! Each header's `nextElementSibling` is its content panel; opening a panel
//! sets its `max-height` to the full scroll height so CSS can animate it.

use crate::dom::{self, Elements};
use crate::state;
use kd_glossary_core::accordion::{Accordion, PanelChange, toggle_max_height};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

pub fn bind(els: &Elements) {
    if els.collapsibles.is_empty() {
        return;
    }
    let active = els
        .collapsibles
        .iter()
        .map(|c| dom::has_class(c, "active"))
        .collect();
    state::set_accordion(Accordion::from_active(active));

    for (index, header) in els.collapsibles.iter().enumerate() {
        let headers = els.collapsibles.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            let changes = state::with_mut(|s| s.accordion.click(index));
            apply(&headers, &changes);
        }) as Box<dyn FnMut(_)>);
        header
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap_or_else(|e| gloo_console::error!("collapsible listener:", e));
        cb.forget();
    }
}

fn apply(headers: &[Element], changes: &[PanelChange]) {
    for change in changes {
        let (index, open) = match *change {
            PanelChange::Close(i) => (i, false),
            PanelChange::Open(i) => (i, true),
        };
        let Some(header) = headers.get(index) else {
            continue;
        };
        if open {
            dom::add_class(header, "active");
        } else {
            dom::remove_class(header, "active");
        }
        if let Some(content) = header.next_element_sibling() {
            toggle_content(&content);
        }
    }
}

fn toggle_content(content: &Element) {
    let current = dom::style_get(content, "max-height");
    let next = toggle_max_height(&current, content.scroll_height());
    dom::style_set(content, "max-height", next.as_deref());
}
