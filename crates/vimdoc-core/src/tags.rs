use std::collections::HashMap;

use crate::token::{Token, TokenKind};

/// Collects every anchor the document defines itself, keyed by tag name.
/// Values are ready-to-use destinations, so a local anchor maps to its
/// in-page fragment.
pub fn extract_tags(tokens: &[Token]) -> HashMap<String, String> {
    let mut tags = HashMap::new();
    for token in tokens {
        if let TokenKind::TagAnchor { id, .. } = &token.kind {
            tags.insert((*id).to_string(), format!("#{id}"));
        }
    }
    tags
}

/// Overlays the document's own anchors on the built-in dictionary.
/// Document-local tags win on a name collision; every other built-in entry
/// passes through unchanged.
pub fn merge_tags(
    builtin: &HashMap<String, String>,
    local: HashMap<String, String>,
) -> HashMap<String, String> {
    let mut merged = builtin.clone();
    merged.extend(local);
    merged
}
