use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One glossary record as served by `/api`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GlossaryEntry {
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub definition: String,
    #[serde(default, deserialize_with = "string_or_list")]
    pub sources: Vec<String>,
    #[serde(default)]
    pub association: Vec<u8>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub examples: Vec<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub related: Vec<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub spellings: Vec<String>,
}

impl GlossaryEntry {
    pub fn has_definition(&self) -> bool {
        !self.definition.is_empty()
    }

    pub fn has_sources(&self) -> bool {
        self.sources.iter().any(|s| !s.is_empty())
    }
}

/// Fresh submissions store list fields as flat strings; the curated
/// database stores them as arrays. Accept both.
fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
        Null(()),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(s) if s.is_empty() => Vec::new(),
        OneOrMany::One(s) => vec![s],
        OneOrMany::Many(v) => v,
        OneOrMany::Null(()) => Vec::new(),
    })
}

/// Search response: term -> entry, in the order the server sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    entries: Vec<(String, GlossaryEntry)>,
}

impl SearchResults {
    pub fn new(entries: Vec<(String, GlossaryEntry)>) -> Self {
        Self { entries }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GlossaryEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<'de> Deserialize<'de> for SearchResults {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = SearchResults;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of glossary terms to entries")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((term, entry)) = map.next_entry::<String, GlossaryEntry>()? {
                    entries.push((term, entry));
                }
                Ok(SearchResults { entries })
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

pub const DEFAULT_ITEMS_PER_PAGE: usize = 30;

/// Per-page settings rendered into the HTML by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
    #[serde(default)]
    pub glossary_length: Option<usize>,
    #[serde(default, deserialize_with = "flag")]
    pub enable_submissions: bool,
    #[serde(default)]
    pub tweeted_terms: Vec<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            glossary_length: None,
            enable_submissions: false,
            tweeted_terms: Vec::new(),
        }
    }
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

/// Templates emit `1`/`0` for booleans.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Str(String),
        Null(()),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => Ok(b),
        Flag::Int(n) => Ok(n != 0),
        Flag::Str(s) => match s.trim() {
            "" | "0" | "false" | "False" => Ok(false),
            "1" | "true" | "True" => Ok(true),
            other => Err(de::Error::custom(format!("invalid flag value {other:?}"))),
        },
        Flag::Null(()) => Ok(false),
    }
}

/// Fields of the "Vorschlagen" form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntrySubmission {
    /// Honeypot; humans never see it.
    #[serde(default)]
    pub url: String,
    pub term: String,
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub ass_pro: bool,
    #[serde(default)]
    pub ass_con: bool,
    #[serde(default)]
    pub sources: String,
    #[serde(default)]
    pub examples: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_results_keep_server_order() {
        let raw = r#"{
            "Klimawandel": {"term": "Klimawandel", "id": 3, "definition": "x", "sources": []},
            "Klimaangst": {"term": "Klimaangst", "id": 1, "definition": "", "sources": []},
            "Klimaleugner": {"term": "Klimaleugner", "id": 2, "definition": "", "sources": ["a"]}
        }"#;
        let results = SearchResults::from_json(raw).unwrap();
        let terms: Vec<&str> = results.iter().map(|(t, _)| t).collect();
        assert_eq!(terms, ["Klimawandel", "Klimaangst", "Klimaleugner"]);
        assert!(results.iter().nth(2).unwrap().1.has_sources());
    }

    #[test]
    fn empty_object_is_empty_results() {
        let results = SearchResults::from_json("{}").unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn non_object_body_is_rejected() {
        assert!(SearchResults::from_json("[]").is_err());
    }

    #[test]
    fn entry_accepts_flat_string_lists() {
        let entry: GlossaryEntry = serde_json::from_str(
            r#"{"term": "Klimaschutz", "sources": "https://example.org", "examples": ""}"#,
        )
        .unwrap();
        assert_eq!(entry.sources, vec!["https://example.org".to_string()]);
        assert!(entry.examples.is_empty());
        assert!(!entry.has_definition());
    }

    #[test]
    fn page_config_defaults_and_flags() {
        let cfg: PageConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, PageConfig::default());

        let cfg: PageConfig = serde_json::from_str(
            r#"{"itemsPerPage": 10, "glossaryLength": 42, "enableSubmissions": 1,
                "tweetedTerms": ["Klimakrise"]}"#,
        )
        .unwrap();
        assert_eq!(cfg.items_per_page, 10);
        assert_eq!(cfg.glossary_length, Some(42));
        assert!(cfg.enable_submissions);
        assert_eq!(cfg.tweeted_terms, vec!["Klimakrise".to_string()]);

        let cfg: PageConfig = serde_json::from_str(r#"{"enableSubmissions": "0"}"#).unwrap();
        assert!(!cfg.enable_submissions);
        assert!(serde_json::from_str::<PageConfig>(r#"{"enableSubmissions": "maybe"}"#).is_err());
    }
}
