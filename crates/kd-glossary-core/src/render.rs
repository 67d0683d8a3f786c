//! HTML fragments that replace `#glossary-content` after a search.

use crate::search::{self, ALPHABET, SearchTerm};
use kd_api_types::{GlossaryEntry, SearchResults};
use std::fmt::Write;

/// Settings that shape the result markup.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions<'a> {
    pub items_per_page: usize,
    pub enable_submissions: bool,
    pub tweeted_terms: &'a [String],
}

impl RenderOptions<'_> {
    pub fn needs_pagination(&self, count: usize) -> bool {
        count > self.items_per_page
    }
}

pub fn header_text(count: usize) -> String {
    format!("Suchergebnisse ({})", count)
}

pub fn alphabet_html() -> String {
    let mut html = String::from(r#"<div id="glossary-alphabet">"#);
    for letter in ALPHABET {
        let _ = write!(html, r#"<span class="alpha">{}</span>"#, letter);
    }
    html.push_str("</div>");
    html
}

/// Full replacement for `#glossary-content`.
pub fn results_html(results: &SearchResults, term: &SearchTerm, opts: &RenderOptions) -> String {
    let mut html = alphabet_html();

    if results.is_empty() {
        html.push_str("<p style='margin-top: 2em'>Die Suche erzielte leider keine Treffer.</p>");
        if opts.enable_submissions {
            html.push_str("<p>Möchten Sie einen Glossareintrag vorschlagen?</p>");
            html.push_str("<button id='btn-modal'>Vorschlagen</button>");
        }
        return html;
    }

    // Wide layout, then the single-column list for phone screens.
    for class in ["list", "glossary-one-list"] {
        let _ = write!(html, "<ul class='{}'>", class);
        for (term, entry) in results.iter() {
            html.push_str(&entry_item(term, entry, opts.tweeted_terms));
        }
        html.push_str("</ul>");
    }

    if opts.needs_pagination(results.len()) {
        html.push_str(&pagination_controls(term));
    }
    html
}

/// An entry gets a link when its definition page has anything to show.
pub fn is_linked(term: &str, entry: &GlossaryEntry, tweeted_terms: &[String]) -> bool {
    entry.has_definition() || entry.has_sources() || tweeted_terms.iter().any(|t| t == term)
}

pub fn entry_item(term: &str, entry: &GlossaryEntry, tweeted_terms: &[String]) -> String {
    let label = html_escape(term);
    if is_linked(term, entry, tweeted_terms) {
        format!(
            "<li><a href='{}'>{}</a></li>",
            html_escape(&search::definition_path(term)),
            label
        )
    } else {
        format!("<li>{}</li>", label)
    }
}

pub fn pagination_controls(term: &SearchTerm) -> String {
    format!(
        concat!(
            r#"<div class="glossary-pagination">"#,
            r#"<button id="btn-prev">&#8592;</button><br>"#,
            r#"<button id="btn-next">&#8594;</button><br>"#,
            r#"<div class="tooltip"><a href="{}" class="button" id="btn-one">1</a>"#,
            r#"<span class="tooltip-text">Auf einer Seite<br>anzeigen</span></div>"#,
            r#"</div>"#
        ),
        html_escape(&term.one_page_path())
    )
}

/// Escape HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(definition: &str, sources: &[&str]) -> GlossaryEntry {
        GlossaryEntry {
            definition: definition.to_string(),
            sources: sources.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn opts(tweeted: &[String]) -> RenderOptions<'_> {
        RenderOptions {
            items_per_page: 2,
            enable_submissions: true,
            tweeted_terms: tweeted,
        }
    }

    #[test]
    fn alphabet_lists_every_letter() {
        let html = alphabet_html();
        assert!(html.starts_with(r#"<div id="glossary-alphabet">"#));
        assert_eq!(html.matches(r#"<span class="alpha">"#).count(), 29);
        assert!(html.contains(r#"<span class="alpha">Ö</span>"#));
    }

    #[test]
    fn no_results_offers_submission() {
        let term = SearchTerm::from_query("klimaxyz");
        let html = results_html(&SearchResults::default(), &term, &opts(&[]));
        assert!(html.contains("Die Suche erzielte leider keine Treffer."));
        assert!(html.contains("<button id='btn-modal'>Vorschlagen</button>"));
        assert!(!html.contains("<ul"));

        let closed = RenderOptions {
            enable_submissions: false,
            ..opts(&[])
        };
        let html = results_html(&SearchResults::default(), &term, &closed);
        assert!(!html.contains("btn-modal"));
    }

    #[test]
    fn entries_link_only_when_there_is_content() {
        let tweeted = vec!["Klimakrise".to_string()];
        assert!(is_linked("Klimaangst", &entry("Angst.", &[]), &tweeted));
        assert!(is_linked("Klimaangst", &entry("", &["src"]), &tweeted));
        assert!(is_linked("Klimakrise", &entry("", &[]), &tweeted));
        assert!(!is_linked("Klimaziel", &entry("", &[]), &tweeted));

        assert_eq!(
            entry_item("Klimaziel", &entry("", &[]), &tweeted),
            "<li>Klimaziel</li>"
        );
        assert_eq!(
            entry_item("Klimaangst", &entry("Angst.", &[]), &tweeted),
            "<li><a href='/def/Klimaangst'>Klimaangst</a></li>"
        );
    }

    #[test]
    fn results_render_both_layouts_in_order() {
        let results = SearchResults::new(vec![
            ("Klimawandel".into(), entry("x", &[])),
            ("Klimaangst".into(), entry("", &[])),
        ]);
        let term = SearchTerm::from_query("klima");
        let html = results_html(&results, &term, &opts(&[]));
        assert!(html.contains("<ul class='list'>"));
        assert!(html.contains("<ul class='glossary-one-list'>"));
        assert_eq!(html.matches("<li>").count(), 4);
        let wandel = html.find("Klimawandel").unwrap();
        let angst = html.find("Klimaangst").unwrap();
        assert!(wandel < angst);
        // Two results fit on one page of two.
        assert!(!html.contains("glossary-pagination"));
    }

    #[test]
    fn pagination_controls_appear_past_one_page() {
        let results = SearchResults::new(
            (0..3)
                .map(|i| (format!("Klima{}", i), entry("", &[])))
                .collect(),
        );
        let term = SearchTerm::from_query("klima");
        let html = results_html(&results, &term, &opts(&[]));
        assert!(html.contains(r#"<button id="btn-prev">&#8592;</button>"#));
        assert!(html.contains(r#"<a href="/search/klima" class="button" id="btn-one">1</a>"#));
        assert_eq!(header_text(results.len()), "Suchergebnisse (3)");
    }

    #[test]
    fn markup_in_terms_is_escaped() {
        let html = entry_item("<b>Klima</b>", &entry("", &[]), &[]);
        assert_eq!(html, "<li>&lt;b&gt;Klima&lt;/b&gt;</li>");
        assert_eq!(html_escape(r#"a "b" & 'c'"#), "a &quot;b&quot; &amp; &#39;c&#39;");
    }
}
