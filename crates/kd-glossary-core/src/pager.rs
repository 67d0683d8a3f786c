//! Previous/next paging over a flat list of items.
//!
//! Positions are 1-based: `start` is the first visible item. Button state is
//! part of the pager so that a disabled button can never move the window.

use tracing::debug;

/// Visible slice of the list: items `start..start + len` (1-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub start: usize,
    pub len: usize,
}

impl PageWindow {
    /// Whether the item at 0-based `index` is visible.
    pub fn shows(&self, index: usize) -> bool {
        index + 1 >= self.start && index + 1 < self.start + self.len
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonState {
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagerKey {
    Prev,
    Next,
}

impl PagerKey {
    /// Map a keydown to a paging action. Accepts either the `key` name or
    /// the legacy key code (37 left, 39 right).
    pub fn from_event(key: &str, key_code: u32) -> Option<Self> {
        match (key, key_code) {
            ("ArrowLeft", _) | (_, 37) => Some(PagerKey::Prev),
            ("ArrowRight", _) | (_, 39) => Some(PagerKey::Next),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pager {
    start: usize,
    per_page: usize,
    max_items: usize,
    buttons: ButtonState,
}

impl Pager {
    pub fn new(per_page: usize, max_items: usize) -> Self {
        let per_page = per_page.max(1);
        Self {
            start: 1,
            per_page,
            max_items,
            buttons: ButtonState {
                prev_disabled: true,
                next_disabled: 1 + per_page > max_items,
            },
        }
    }

    pub fn window(&self) -> PageWindow {
        PageWindow {
            start: self.start,
            len: self.per_page,
        }
    }

    pub fn buttons(&self) -> ButtonState {
        self.buttons
    }

    /// Advance one page. `None` when the next button is disabled.
    pub fn next(&mut self) -> Option<PageWindow> {
        if self.buttons.next_disabled {
            return None;
        }
        self.start += self.per_page;
        self.buttons.prev_disabled = false;
        if self.start + self.per_page > self.max_items {
            self.buttons.next_disabled = true;
        }
        debug!(start = self.start, "next page");
        Some(self.window())
    }

    /// Go back one page. `None` when the previous button is disabled.
    pub fn prev(&mut self) -> Option<PageWindow> {
        if self.buttons.prev_disabled {
            return None;
        }
        self.start = self.start.saturating_sub(self.per_page).max(1);
        self.buttons.next_disabled = false;
        if self.start <= 1 {
            self.buttons.prev_disabled = true;
        }
        debug!(start = self.start, "previous page");
        Some(self.window())
    }

    pub fn on_key(&mut self, key: PagerKey) -> Option<PageWindow> {
        match key {
            PagerKey::Prev => self.prev(),
            PagerKey::Next => self.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing::Level;

    #[test]
    fn walks_forward_and_back() {
        let mut pager = Pager::new(30, 75);
        assert_eq!(pager.window(), PageWindow { start: 1, len: 30 });
        assert!(pager.buttons().prev_disabled);
        assert!(!pager.buttons().next_disabled);

        assert_eq!(pager.next().unwrap().start, 31);
        assert!(!pager.buttons().prev_disabled);
        assert!(!pager.buttons().next_disabled);

        assert_eq!(pager.next().unwrap().start, 61);
        assert!(pager.buttons().next_disabled);
        assert_eq!(pager.next(), None);

        assert_eq!(pager.prev().unwrap().start, 31);
        assert!(!pager.buttons().next_disabled);
        assert_eq!(pager.prev().unwrap().start, 1);
        assert!(pager.buttons().prev_disabled);
        assert_eq!(pager.prev(), None);
    }

    #[test]
    fn exact_multiple_stops_on_last_full_page() {
        let mut pager = Pager::new(30, 60);
        assert_eq!(pager.next().unwrap().start, 31);
        assert!(pager.buttons().next_disabled);
    }

    #[test]
    fn single_page_has_both_buttons_disabled() {
        let pager = Pager::new(30, 12);
        assert_eq!(
            pager.buttons(),
            ButtonState {
                prev_disabled: true,
                next_disabled: true
            }
        );
    }

    #[test]
    fn page_size_one_never_goes_below_first_item() {
        let mut pager = Pager::new(1, 3);
        pager.next();
        assert_eq!(pager.prev().unwrap().start, 1);
        assert_eq!(pager.prev(), None);
    }

    #[test]
    fn window_membership() {
        let w = PageWindow { start: 31, len: 30 };
        assert!(!w.shows(29));
        assert!(w.shows(30));
        assert!(w.shows(59));
        assert!(!w.shows(60));
    }

    #[derive(Clone)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().expect("log buffer lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn page_moves_are_traced() {
        let buf = Arc::new(Mutex::new(Vec::new()));
        let writer = LogBuffer(buf.clone());
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(Level::DEBUG)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut pager = Pager::new(10, 30);
            pager.next();
        });

        let logs = String::from_utf8_lossy(&buf.lock().expect("log buffer lock")).to_string();
        assert!(logs.contains("next page"));
        assert!(logs.contains("start=11"));
    }

    #[test]
    fn arrow_keys_map_to_actions() {
        assert_eq!(PagerKey::from_event("ArrowLeft", 0), Some(PagerKey::Prev));
        assert_eq!(PagerKey::from_event("", 39), Some(PagerKey::Next));
        assert_eq!(PagerKey::from_event("Enter", 13), None);

        let mut pager = Pager::new(10, 25);
        assert_eq!(pager.on_key(PagerKey::Prev), None);
        assert_eq!(pager.on_key(PagerKey::Next).unwrap().start, 11);
    }
}
