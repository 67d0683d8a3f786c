//! Submission modal (`#submit-modal`).
//!
//! Shown by `#btn-modal` (which search may render later, hence delegated),
//! hidden by a click on the backdrop or Escape, and reopened on load when
//! the server sent the form back with errors.

use crate::dom::{self, Elements};
use crate::state;
use kd_api_types::EntrySubmission;
use kd_glossary_core::modal::{self, FieldError, ModalEvent};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

const CLIENT_ERROR_CLASS: &str = "form-error-client";

pub fn bind(els: &Elements) {
    let Some(modal_el) = &els.submit_modal else {
        return;
    };
    if dom::query(".form-error").is_some() {
        dispatch(els, ModalEvent::LoadedWithErrors);
    }
    if let Some(form) = dom::query_all_within(modal_el, "form").into_iter().next() {
        bind_form_check(&form);
    }
}

pub fn on_open_button(els: &Elements) {
    dispatch(els, ModalEvent::OpenButton);
}

pub fn on_document_click(els: &Elements, event: &web_sys::Event) {
    let Some(modal_el) = &els.submit_modal else {
        return;
    };
    let on_backdrop = event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .is_some_and(|t| &t == modal_el);
    dispatch(els, ModalEvent::Click { on_backdrop });
}

pub fn on_escape(els: &Elements) {
    dispatch(els, ModalEvent::Escape);
}

fn dispatch(els: &Elements, event: ModalEvent) {
    let Some(modal_el) = &els.submit_modal else {
        return;
    };
    let Some(visibility) = state::with_mut(|s| s.modal.handle(event)) else {
        return;
    };
    dom::style_set(modal_el, "display", Some(visibility.display()));
    if event == ModalEvent::OpenButton {
        if let Some(term) = dom::query("input#term") {
            let _ = term.unchecked_ref::<HtmlElement>().focus();
        }
    }
}

/// Run the client-side checks on submit; block the submit when they fail.
fn bind_form_check(form: &Element) {
    let form2 = form.clone();
    let cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
        let submission = read_form(&form2);
        clear_errors(&form2);
        if modal::is_spam(&submission) {
            e.prevent_default();
            return;
        }
        let errors = modal::validate_submission(&submission);
        if !errors.is_empty() {
            e.prevent_default();
            show_errors(&form2, &errors);
        }
    }) as Box<dyn FnMut(_)>);
    form.add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())
        .unwrap_or_else(|e| gloo_console::error!("submit listener:", e));
    cb.forget();
}

fn field(form: &Element, name: &str) -> Option<Element> {
    dom::query_all_within(form, &format!("[name={}]", name))
        .into_iter()
        .next()
}

fn text_value(form: &Element, name: &str) -> String {
    let Some(el) = field(form, name) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn checked(form: &Element, name: &str) -> bool {
    field(form, name)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .is_some_and(|input| input.checked())
}

fn read_form(form: &Element) -> EntrySubmission {
    EntrySubmission {
        url: text_value(form, "url"),
        term: text_value(form, "term"),
        definition: text_value(form, "definition"),
        ass_pro: checked(form, "ass_pro"),
        ass_con: checked(form, "ass_con"),
        sources: text_value(form, "sources"),
        examples: text_value(form, "examples"),
    }
}

fn clear_errors(form: &Element) {
    for el in dom::query_all_within(form, &format!(".{}", CLIENT_ERROR_CLASS)) {
        el.remove();
    }
}

fn show_errors(form: &Element, errors: &[FieldError]) {
    for err in errors {
        let Some(input) = field(form, err.field) else {
            continue;
        };
        let Ok(msg) = dom::document().create_element("span") else {
            continue;
        };
        msg.set_class_name(&format!("form-error {}", CLIENT_ERROR_CLASS));
        dom::set_text(&msg, err.message);
        let _ = input.after_with_node_1(&msg);
    }
}
