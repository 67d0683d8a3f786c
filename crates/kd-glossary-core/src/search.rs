//! Search terms and the URLs built from them.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use std::fmt;

/// Placeholder the server understands as "return every entry".
pub const ALL_ENTRIES: &str = "None";

/// Every alphabet-index search is scoped to compounds of this stem.
pub const TERM_STEM: &str = "Klima";

/// Letters of the alphabet index, umlauts after their base vowel.
pub const ALPHABET: [&str; 29] = [
    "A", "Ä", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "Ö", "P",
    "Q", "R", "S", "T", "U", "Ü", "V", "W", "X", "Y", "Z",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Term typed into the search box. Blank input searches everything.
    pub fn from_query(raw: &str) -> Self {
        let term = raw.trim().to_lowercase();
        if term.is_empty() {
            SearchTerm(ALL_ENTRIES.to_string())
        } else {
            SearchTerm(term)
        }
    }

    /// Term for a click on an alphabet-index letter.
    pub fn from_letter(letter: &str) -> Self {
        SearchTerm(format!("{}{}", TERM_STEM, letter.trim().to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `GET` path of the JSON search endpoint.
    pub fn api_path(&self) -> String {
        format!("/api?query={}", encode_component(&self.0))
    }

    /// Server-rendered page listing every result at once.
    pub fn one_page_path(&self) -> String {
        format!("/search/{}", encode_component(&self.0))
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn definition_path(term: &str) -> String {
    format!("/def/{}", encode_component(term))
}

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}
