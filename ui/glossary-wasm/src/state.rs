//! Page-lifetime state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).

use kd_api_types::PageConfig;
use kd_glossary_core::accordion::Accordion;
use kd_glossary_core::modal::Modal;
use kd_glossary_core::pager::Pager;
use kd_glossary_core::session::SearchSession;
use std::cell::RefCell;

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub config: PageConfig,
    pub accordion: Accordion,
    /// Replaced on every search that needs more than one page.
    pub pager: Option<Pager>,
    pub modal: Modal,
    pub search: SearchSession,
}

thread_local! {
    static STATE: RefCell<AppState> = RefCell::new(AppState::default());
}

/// Run a closure with shared read access to the state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&AppState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

// ── Convenience accessors ──

pub fn config() -> PageConfig {
    with(|s| s.config.clone())
}

pub fn set_config(config: PageConfig) {
    with_mut(|s| s.config = config);
}

pub fn set_accordion(accordion: Accordion) {
    with_mut(|s| s.accordion = accordion);
}

pub fn set_pager(pager: Option<Pager>) {
    with_mut(|s| s.pager = pager);
}
