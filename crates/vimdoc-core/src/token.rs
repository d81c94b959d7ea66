use crate::span::Span;

/// One tokenized stretch of a help document. The span always covers the
/// payload exactly; concatenating every token's span in order reconstructs
/// the source byte for byte.
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'a> {
    pub span: Span,
    pub kind: TokenKind<'a>,
}

impl<'a> Token<'a> {
    pub fn new(span: Span, kind: TokenKind<'a>) -> Self {
        Self { span, kind }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind<'a> {
    /// A single character no other rule claimed.
    Etc(&'a str),
    /// Line-leading run of uppercase/hyphen words, confirmed by an anchor
    /// on the same line. The anchor itself is tokenized separately.
    Header(&'a str),
    SectionSeparator(&'a str),
    Subheader {
        text: &'a str,
        marker: &'a str,
    },
    SpecialKey(&'a str),
    SpecialTerm(&'a str),
    OptionalTerm(&'a str),
    Option(&'a str),
    VimscriptLink {
        id: &'a str,
    },
    TagAnchor {
        begin: &'a str,
        id: &'a str,
        end: &'a str,
    },
    TagLink {
        begin: &'a str,
        id: &'a str,
        end: &'a str,
    },
    Example {
        begin: &'a str,
        text: &'a str,
        end: &'a str,
    },
    Uri(&'a str),
}
