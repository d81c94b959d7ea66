use std::collections::{HashMap, HashSet};

use ammonia::Builder;

use crate::tags::{extract_tags, merge_tags};
use crate::token::{Token, TokenKind};

const SCRIPT_INDEX_BASE: &str = "http://www.vim.org/scripts/script.php?script_id=";

/// Renders one HTML string per token. Tag links are resolved against the
/// built-in dictionary merged with the document's own anchors; everything
/// literal is escaped. Total: every token maps to exactly one string, and
/// joining them in order yields the whole fragment.
pub fn render(tokens: &[Token], builtin_tags: &HashMap<String, String>) -> Vec<String> {
    let tags = merge_tags(builtin_tags, extract_tags(tokens));
    tokens
        .iter()
        .map(|token| render_token(token, &tags))
        .collect()
}

/// Joined form of [`render`] for callers that want one fragment blob.
pub fn render_html(tokens: &[Token], builtin_tags: &HashMap<String, String>) -> String {
    render(tokens, builtin_tags).concat()
}

/// Renders and then sanitizes the fragment against an allow-list limited to
/// this renderer's own vocabulary. For callers embedding documents they do
/// not control.
pub fn render_html_sanitized(tokens: &[Token], builtin_tags: &HashMap<String, String>) -> String {
    let raw_html = render_html(tokens, builtin_tags);

    let tags: HashSet<&'static str> = ["a", "span"].iter().copied().collect();

    let mut generic_attributes: HashSet<&'static str> = HashSet::new();
    generic_attributes.insert("class");
    generic_attributes.insert("id");

    let mut tag_attributes = HashMap::new();
    tag_attributes.insert("a", ["href"].iter().copied().collect());

    Builder::new()
        .tags(tags)
        .generic_attributes(generic_attributes)
        .tag_attributes(tag_attributes)
        .link_rel(None)
        .clean(&raw_html)
        .to_string()
}

fn render_token(token: &Token, tags: &HashMap<String, String>) -> String {
    match &token.kind {
        TokenKind::Etc(text) => escape_html(text),
        TokenKind::Header(text) => class_span("header", text),
        TokenKind::SectionSeparator(text) => class_span("section_separator", text),
        TokenKind::Subheader { text, marker } => format!(
            "{}{}",
            class_span("subheader", text),
            class_span("subheader_marker", marker)
        ),
        TokenKind::SpecialKey(text) => class_span("special_key", text),
        TokenKind::SpecialTerm(text) => class_span("special_term", text),
        TokenKind::OptionalTerm(text) => class_span("optional_term", text),
        TokenKind::Option(text) => class_span("option", text),
        TokenKind::VimscriptLink { id } => {
            let id = escape_html(id);
            format!(
                "<a class=\"vimscript_link\" href=\"{SCRIPT_INDEX_BASE}{id}\">vimscript#{id}</a>"
            )
        }
        TokenKind::TagAnchor { begin, id, end } => {
            let id = escape_html(id);
            format!(
                "<span class=\"tag_anchor\">{}<a id=\"{id}\">{id}</a>{}</span>",
                escape_html(begin),
                escape_html(end)
            )
        }
        TokenKind::TagLink { begin, id, end } => {
            let label = escape_html(id);
            let href = match tags.get(*id) {
                Some(destination) => escape_html(destination),
                None => {
                    log::debug!("unresolved tag link {id:?}, linking to in-page fragment");
                    format!("#{label}")
                }
            };
            format!(
                "<span class=\"tag_link\">{}<a href=\"{href}\">{label}</a>{}</span>",
                escape_html(begin),
                escape_html(end)
            )
        }
        TokenKind::Example { begin, text, end } => format!(
            "<span class=\"example\"><span class=\"example_marker\">{}</span>{}<span class=\"example_marker\">{}</span></span>",
            escape_html(begin),
            escape_html(text),
            escape_html(end)
        ),
        TokenKind::Uri(uri) => {
            let uri = escape_html(uri);
            format!("<a href=\"{uri}\" class=\"uri\">{uri}</a>")
        }
    }
}

fn class_span(class: &str, text: &str) -> String {
    format!("<span class=\"{class}\">{}</span>", escape_html(text))
}

// Apostrophes stay as-is: rendered text only ever lands inside
// double-quoted attribute values or element bodies.
fn escape_html(text: &str) -> String {
    let mut out = String::new();
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
