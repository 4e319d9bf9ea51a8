//! Text, link and image extraction from rendered HTML

use scraper::{ElementRef, Html, Node};

use crate::types::Link;

/// Elements whose text content is never shown to a reader
const HIDDEN_TEXT_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// All visible text nodes of the document, trimmed, one per line.
pub fn extract_text(document: &Html) -> String {
    let mut lines = Vec::new();

    for node in document.root_element().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| HIDDEN_TEXT_ELEMENTS.contains(&el.name()))
        });
        if hidden {
            continue;
        }

        let trimmed = text.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed);
        }
    }

    lines.join("\n")
}

/// Anchors with a non-empty `href`, in document order
pub fn extract_links(document: &Html) -> Vec<Link> {
    elements_named(document, "a")
        .filter_map(|el| {
            let href = el.value().attr("href")?.trim();
            if href.is_empty() {
                return None;
            }
            Some(Link {
                href: href.to_string(),
                text: collapse_whitespace(&el.text().collect::<String>()),
            })
        })
        .collect()
}

/// `src` of every `<img>` that has one
pub fn extract_images(document: &Html) -> Vec<String> {
    elements_named(document, "img")
        .filter_map(|el| el.value().attr("src"))
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .map(str::to_string)
        .collect()
}

/// Cut `text` to `limit` characters, marking the cut with a trailing "...".
pub fn truncate_preview(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => format!("{}\n...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

pub(crate) fn elements_named<'a>(
    document: &'a Html,
    name: &'a str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(move |el| el.value().name() == name)
}

pub(crate) fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
