//! DOM helpers and element bindings.
//!
//! Element lookups that a page may legitimately lack return `Option`; the
//! home page, search page and definition page each carry a different subset.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

fn collect(nl: web_sys::NodeList) -> Vec<Element> {
    let mut v = Vec::with_capacity(nl.length() as usize);
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn query_all(selector: &str) -> Vec<Element> {
    match document().query_selector_all(selector) {
        Ok(nl) => collect(nl),
        Err(_) => Vec::new(),
    }
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    match parent.query_selector_all(selector) {
        Ok(nl) => collect(nl),
        Err(_) => Vec::new(),
    }
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn get_input_value(el: &HtmlInputElement) -> String {
    el.value()
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

pub fn style_get(el: &Element, prop: &str) -> String {
    el.unchecked_ref::<HtmlElement>()
        .style()
        .get_property_value(prop)
        .unwrap_or_default()
}

pub fn style_set(el: &Element, prop: &str, value: Option<&str>) {
    let style = el.unchecked_ref::<HtmlElement>().style();
    let _ = match value {
        Some(v) => style.set_property(prop, v),
        None => style.remove_property(prop).map(|_| ()),
    };
}

pub fn set_disabled(id: &str, disabled: bool) {
    if let Some(btn) = by_id_typed::<web_sys::HtmlButtonElement>(id) {
        btn.set_disabled(disabled);
    }
}

/// Nearest ancestor-or-self of the event target matching `selector`.
/// This is what makes delegated handlers work for markup rendered later.
pub fn closest_target(event: &web_sys::Event, selector: &str) -> Option<Element> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    target.closest(selector).ok()?
}

// ── Elements struct ──

/// Page regions the glossary scripts touch.
#[derive(Clone)]
pub struct Elements {
    pub glossary_header: Option<Element>,
    pub glossary_content: Option<Element>,
    pub query_input: Option<HtmlInputElement>,
    pub submit_modal: Option<Element>,
    pub collapsibles: Vec<Element>,
}

impl Elements {
    /// Resolve all DOM references. Call once after the document is parsed.
    pub fn bind() -> Result<Elements, JsValue> {
        if document().body().is_none() {
            return Err(JsValue::from_str("document has no <body>"));
        }
        Ok(Elements {
            glossary_header: by_id("glossary-header"),
            glossary_content: by_id("glossary-content"),
            query_input: query("input[name=query]").and_then(|e| e.dyn_into().ok()),
            submit_modal: by_id("submit-modal"),
            collapsibles: query_all(".collapsible"),
        })
    }
}
