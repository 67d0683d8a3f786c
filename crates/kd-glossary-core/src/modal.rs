//! Submission modal: visibility rules and client-side form checks.
//!
//! The checks mirror what the server validates so that obvious mistakes are
//! reported without a round trip. The server remains authoritative.

use crate::search::TERM_STEM;
use kd_api_types::EntrySubmission;
use tracing::debug;

pub const MIN_SOURCES_LEN: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Shown,
}

impl Visibility {
    /// Value for the modal's inline `display` style.
    pub fn display(self) -> &'static str {
        match self {
            Visibility::Hidden => "none",
            Visibility::Shown => "block",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalEvent {
    /// The "Vorschlagen" button was clicked.
    OpenButton,
    /// A click landed somewhere; `on_backdrop` when its target is the modal
    /// element itself rather than the dialog inside it.
    Click { on_backdrop: bool },
    Escape,
    /// Page loaded with server-side form errors present.
    LoadedWithErrors,
}

#[derive(Clone, Copy, Debug)]
pub struct Modal {
    visibility: Visibility,
}

impl Default for Modal {
    fn default() -> Self {
        Self {
            visibility: Visibility::Hidden,
        }
    }
}

impl Modal {
    /// Apply an event, returning the new visibility if it changed.
    pub fn handle(&mut self, event: ModalEvent) -> Option<Visibility> {
        let next = match event {
            ModalEvent::OpenButton | ModalEvent::LoadedWithErrors => Visibility::Shown,
            ModalEvent::Click { on_backdrop: true } | ModalEvent::Escape => Visibility::Hidden,
            ModalEvent::Click { on_backdrop: false } => return None,
        };
        if next == self.visibility {
            return None;
        }
        debug!(?event, ?next, "submit modal");
        self.visibility = next;
        Some(next)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    /// `name` attribute of the offending input.
    pub field: &'static str,
    pub message: &'static str,
}

/// Honeypot filled in: a bot, not a person.
pub fn is_spam(form: &EntrySubmission) -> bool {
    !form.url.trim().is_empty()
}

pub fn validate_submission(form: &EntrySubmission) -> Vec<FieldError> {
    let mut errors = Vec::new();

    // Only the "required" checks look past surrounding whitespace; the other
    // rules see the field exactly as it will be posted.
    let term = form.term.as_str();
    if term.trim().is_empty() {
        errors.push(FieldError {
            field: "term",
            message: "Dieses Feld ist erforderlich.",
        });
    } else if !term.to_lowercase().starts_with(&TERM_STEM.to_lowercase()) {
        errors.push(FieldError {
            field: "term",
            message: "Das Wort muss mit \"Klima\" beginnen!",
        });
    } else if !term.chars().all(|c| c.is_alphabetic() || c == '-') {
        errors.push(FieldError {
            field: "term",
            message: "Das Wort darf nur Buchstaben und Bindestriche (-) beinhalten.",
        });
    }

    let sources = form.sources.as_str();
    if sources.trim().is_empty() {
        errors.push(FieldError {
            field: "sources",
            message: "Dieses Feld ist erforderlich.",
        });
    } else if sources.chars().count() < MIN_SOURCES_LEN {
        errors.push(FieldError {
            field: "sources",
            message: "Bitte mindestens 10 Zeichen eingeben.",
        });
    }

    errors
}
