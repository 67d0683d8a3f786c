//! Paged display of `#glossary-content ul.list`.
//!
//! Items outside the current window get `display: none`. Buttons
//! `#btn-prev` / `#btn-next` and the arrow keys move the window; all of them
//! are dispatched from the delegated handlers in `events`.

use crate::dom;
use crate::state;
use kd_glossary_core::pager::{PageWindow, Pager, PagerKey};

const LIST_ITEMS: &str = "#glossary-content .list > li";

/// Start paging from the first page. `max_items` is the glossary length on
/// the home page or the result count after a search.
pub fn init(max_items: usize) {
    let per_page = state::config().items_per_page;
    let pager = Pager::new(per_page, max_items);
    show(pager.window());
    sync_buttons(&pager);
    gloo_console::debug!(format!("pagination: {} items, {} per page", max_items, per_page));
    state::set_pager(Some(pager));
}

pub fn on_next() {
    step(|p| p.next());
}

pub fn on_prev() {
    step(|p| p.prev());
}

pub fn on_key(key: PagerKey) {
    step(|p| p.on_key(key));
}

fn step(f: impl FnOnce(&mut Pager) -> Option<PageWindow>) {
    let moved = state::with_mut(|s| {
        let pager = s.pager.as_mut()?;
        let window = f(pager)?;
        Some((window, pager.clone()))
    });
    if let Some((window, pager)) = moved {
        show(window);
        sync_buttons(&pager);
    }
}

fn show(window: PageWindow) {
    for (index, item) in dom::query_all(LIST_ITEMS).iter().enumerate() {
        let display = if window.shows(index) { None } else { Some("none") };
        dom::style_set(item, "display", display);
    }
}

fn sync_buttons(pager: &Pager) {
    let buttons = pager.buttons();
    dom::set_disabled("btn-prev", buttons.prev_disabled);
    dom::set_disabled("btn-next", buttons.next_disabled);
}
