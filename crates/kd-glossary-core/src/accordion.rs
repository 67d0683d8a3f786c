//! Accordion over a fixed list of collapsible headers.
//!
//! Opening one header closes every other open header first. Clicking an
//! open header closes it, so at most one header is active after any click.

use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelChange {
    /// Remove `active` from the header and collapse its content.
    Close(usize),
    /// Add `active` to the header and expand its content.
    Open(usize),
}

#[derive(Clone, Debug, Default)]
pub struct Accordion {
    active: Vec<bool>,
}

impl Accordion {
    /// Seed from the `active` classes already present in the markup.
    pub fn from_active(active: Vec<bool>) -> Self {
        Self { active }
    }

    /// Handle a click on header `index`, returning the DOM changes in the
    /// order they must be applied. Out-of-range clicks are ignored.
    pub fn click(&mut self, index: usize) -> Vec<PanelChange> {
        if index >= self.active.len() {
            return Vec::new();
        }
        let mut changes = Vec::new();
        if !self.active[index] {
            for (i, open) in self.active.iter_mut().enumerate() {
                if *open {
                    *open = false;
                    changes.push(PanelChange::Close(i));
                }
            }
            self.active[index] = true;
            changes.push(PanelChange::Open(index));
        } else {
            self.active[index] = false;
            changes.push(PanelChange::Close(index));
        }
        debug!(index, ?changes, "collapsible clicked");
        changes
    }
}

/// Next inline `max-height` for a content panel: cleared when it has one,
/// otherwise the full scroll height.
pub fn toggle_max_height(current: &str, scroll_height: i32) -> Option<String> {
    if current.trim().is_empty() {
        Some(format!("{}px", scroll_height))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_closes_the_other_panel() {
        let mut acc = Accordion::from_active(vec![false; 3]);
        assert_eq!(acc.click(0), vec![PanelChange::Open(0)]);
        assert_eq!(
            acc.click(2),
            vec![PanelChange::Close(0), PanelChange::Open(2)]
        );
        assert!(!acc.active[0]);
        assert!(acc.active[2]);
    }

    #[test]
    fn clicking_open_panel_closes_it() {
        let mut acc = Accordion::from_active(vec![false; 2]);
        acc.click(1);
        assert_eq!(acc.click(1), vec![PanelChange::Close(1)]);
        assert!(acc.active.iter().all(|open| !open));
    }

    #[test]
    fn several_preopened_panels_collapse_together() {
        let mut acc = Accordion::from_active(vec![true, false, true]);
        assert_eq!(
            acc.click(1),
            vec![
                PanelChange::Close(0),
                PanelChange::Close(2),
                PanelChange::Open(1)
            ]
        );
        assert_eq!(acc.active.iter().filter(|open| **open).count(), 1);
    }

    #[test]
    fn out_of_range_click_is_ignored() {
        let mut acc = Accordion::from_active(vec![false]);
        assert!(acc.click(5).is_empty());
    }

    #[test]
    fn max_height_toggles() {
        assert_eq!(toggle_max_height("", 240), Some("240px".to_string()));
        assert_eq!(toggle_max_height("240px", 240), None);
    }
}
