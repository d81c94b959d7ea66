mod builtin;
mod emit;
mod span;
mod tags;
mod token;
mod tokenizer;
mod uri;

pub use builtin::builtin_tags;
pub use emit::{render, render_html, render_html_sanitized};
pub use span::Span;
pub use tags::{extract_tags, merge_tags};
pub use token::{Token, TokenKind};
pub use tokenizer::tokenize;
