//! Page-wide keyboard routing.
//!
//! One `keydown` listener serves the whole page; this decides what a key
//! means given where the focus is.

use crate::pager::PagerKey;

/// Where the keydown originated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyFocus {
    /// The search box (`input[name=query]`).
    QueryBox,
    /// Any other input or textarea.
    TextField,
    Elsewhere,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    CloseModal,
    /// Run the search box query; the key's default action is suppressed.
    Search,
    Page(PagerKey),
}

pub fn route_key(key: &str, key_code: u32, focus: KeyFocus) -> Option<KeyAction> {
    match key {
        "Escape" => return Some(KeyAction::CloseModal),
        "Enter" => {
            return (focus == KeyFocus::QueryBox).then_some(KeyAction::Search);
        }
        _ => {}
    }
    // Arrows move the caret while typing.
    if focus != KeyFocus::Elsewhere {
        return None;
    }
    PagerKey::from_event(key, key_code).map(KeyAction::Page)
}
