use crate::span::Span;
use crate::token::{Token, TokenKind};
use crate::uri;

/// Splits a help document into typed tokens covering every byte exactly
/// once. Total: anything that matches no markup rule degrades to
/// single-character [`TokenKind::Etc`] tokens, so malformed documents are
/// never rejected.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let tokens = Tokenizer::new(source).run();
    log::trace!(
        "tokenized {} bytes into {} tokens",
        source.len(),
        tokens.len()
    );
    tokens
}

struct Tokenizer<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            pos: 0,
        }
    }

    fn run(mut self) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        while self.pos < self.bytes.len() {
            // Rule order is load-bearing: the first match wins, so e.g. a
            // header outranks its own words and `vimscript#1` never parses
            // as a URI. Matchers are pure; an emitted span is final.
            let token = self
                .try_header()
                .or_else(|| self.try_section_separator())
                .or_else(|| self.try_subheader())
                .or_else(|| self.try_special_key())
                .or_else(|| self.try_special_term())
                .or_else(|| self.try_optional_term())
                .or_else(|| self.try_option())
                .or_else(|| self.try_vimscript_link())
                .or_else(|| self.try_tag_anchor())
                .or_else(|| self.try_tag_link())
                .or_else(|| self.try_example())
                .or_else(|| self.try_uri())
                .unwrap_or_else(|| self.etc());
            self.pos = token.span.end;
            tokens.push(token);
        }
        tokens
    }

    fn token(&self, start: usize, end: usize, kind: TokenKind<'a>) -> Token<'a> {
        Token::new(Span::new(start, end), kind)
    }

    fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.source[start..end]
    }

    fn at_line_start(&self, pos: usize) -> bool {
        pos == 0 || self.bytes[pos - 1] == b'\n'
    }

    /// Lookahead only: true when a line break begins at `pos`.
    fn at_line_break(&self, pos: usize) -> bool {
        match self.bytes.get(pos) {
            Some(b'\n') => true,
            Some(b'\r') => self.bytes.get(pos + 1) == Some(&b'\n'),
            _ => false,
        }
    }

    /// A line-leading run of uppercase/hyphen words. Only confirmed when a
    /// blank gap and a valid tag anchor follow; the lookahead consumes
    /// neither, so the anchor becomes its own token right after.
    fn try_header(&self) -> Option<Token<'a>> {
        let start = self.pos;
        if !self.at_line_start(start) {
            return None;
        }
        let mut end = self.scan_header_word(start)?;
        loop {
            let gap = self.scan_blanks(end);
            match self.scan_header_word(gap) {
                Some(word_end) if gap > end => end = word_end,
                _ => break,
            }
        }
        let gap = self.scan_blanks(end);
        if gap == end || self.scan_tag_anchor(gap).is_none() {
            return None;
        }
        Some(self.token(start, end, TokenKind::Header(self.slice(start, end))))
    }

    fn scan_header_word(&self, pos: usize) -> Option<usize> {
        let mut end = pos;
        while end < self.bytes.len()
            && (self.bytes[end].is_ascii_uppercase() || self.bytes[end] == b'-')
        {
            end += 1;
        }
        if end > pos { Some(end) } else { None }
    }

    fn scan_blanks(&self, pos: usize) -> usize {
        let mut end = pos;
        while end < self.bytes.len() && matches!(self.bytes[end], b' ' | b'\t') {
            end += 1;
        }
        end
    }

    fn try_section_separator(&self) -> Option<Token<'a>> {
        let start = self.pos;
        let mut end = start;
        while end < self.bytes.len() && matches!(self.bytes[end], b'=' | b'-') {
            end += 1;
        }
        if end - start < 3 || !self.at_line_break(end) {
            return None;
        }
        Some(self.token(start, end, TokenKind::SectionSeparator(self.slice(start, end))))
    }

    fn try_subheader(&self) -> Option<Token<'a>> {
        let start = self.pos;
        let mut end = start;
        while end < self.bytes.len() && !matches!(self.bytes[end], b'~' | b'\r' | b'\n') {
            end += 1;
        }
        if end == start
            || end >= self.bytes.len()
            || self.bytes[end] != b'~'
            || !self.at_line_break(end + 1)
        {
            return None;
        }
        Some(self.token(
            start,
            end + 1,
            TokenKind::Subheader {
                text: self.slice(start, end),
                marker: self.slice(end, end + 1),
            },
        ))
    }

    fn try_special_key(&self) -> Option<Token<'a>> {
        let start = self.pos;
        if self.bytes[start] == b'<' {
            let mut end = start + 1;
            while end < self.bytes.len() && is_key_name_byte(self.bytes[end]) {
                end += 1;
            }
            if end > start + 1 && end < self.bytes.len() && self.bytes[end] == b'>' {
                return Some(self.token(start, end + 1, TokenKind::SpecialKey(self.slice(start, end + 1))));
            }
            return None;
        }
        if !self.source[start..].starts_with("CTRL-") {
            return None;
        }
        let after = start + 5;
        // CTRL-{char}: the key name is itself a placeholder
        if after < self.bytes.len() && self.bytes[after] == b'{' {
            let mut end = after + 1;
            while end < self.bytes.len() && is_term_byte(self.bytes[end]) {
                end += 1;
            }
            if end > after + 1 && end < self.bytes.len() && self.bytes[end] == b'}' {
                return Some(self.token(start, end + 1, TokenKind::SpecialKey(self.slice(start, end + 1))));
            }
        }
        let mut end = after;
        while end < self.bytes.len() && self.bytes[end].is_ascii_alphanumeric() {
            end += 1;
        }
        if end > after {
            return Some(self.token(start, end, TokenKind::SpecialKey(self.slice(start, end))));
        }
        // single punctuation key, e.g. CTRL-@
        if after < self.bytes.len() && !is_space_byte(self.bytes[after]) {
            let end = after + self.char_len(after);
            return Some(self.token(start, end, TokenKind::SpecialKey(self.slice(start, end))));
        }
        None
    }

    fn try_special_term(&self) -> Option<Token<'a>> {
        let start = self.pos;
        if self.bytes[start] != b'{' {
            return None;
        }
        let mut end = start + 1;
        while end < self.bytes.len() && is_term_byte(self.bytes[end]) {
            end += 1;
        }
        if end > start + 1 && end < self.bytes.len() && self.bytes[end] == b'}' {
            return Some(self.token(start, end + 1, TokenKind::SpecialTerm(self.slice(start, end + 1))));
        }
        None
    }

    fn try_optional_term(&self) -> Option<Token<'a>> {
        let start = self.pos;
        if self.bytes[start] != b'[' {
            return None;
        }
        let mut end = start + 1;
        while end < self.bytes.len()
            && !is_space_byte(self.bytes[end])
            && !matches!(self.bytes[end], b'[' | b']')
        {
            end += 1;
        }
        if end > start + 1 && end < self.bytes.len() && self.bytes[end] == b']' {
            return Some(self.token(start, end + 1, TokenKind::OptionalTerm(self.slice(start, end + 1))));
        }
        None
    }

    fn try_option(&self) -> Option<Token<'a>> {
        let start = self.pos;
        if self.bytes[start] != b'\'' {
            return None;
        }
        // terminal-code options are 't_' plus exactly two code characters
        if start + 6 <= self.bytes.len()
            && self.bytes[start + 1] == b't'
            && self.bytes[start + 2] == b'_'
            && is_termcode_byte(self.bytes[start + 3])
            && is_termcode_byte(self.bytes[start + 4])
            && self.bytes[start + 5] == b'\''
        {
            return Some(self.token(start, start + 6, TokenKind::Option(self.slice(start, start + 6))));
        }
        let mut end = start + 1;
        while end < self.bytes.len() && self.bytes[end].is_ascii_lowercase() {
            end += 1;
        }
        if end - start >= 3 && end < self.bytes.len() && self.bytes[end] == b'\'' {
            return Some(self.token(start, end + 1, TokenKind::Option(self.slice(start, end + 1))));
        }
        None
    }

    fn try_vimscript_link(&self) -> Option<Token<'a>> {
        let start = self.pos;
        if !self.source[start..].starts_with("vimscript#") {
            return None;
        }
        let digits = start + "vimscript#".len();
        let mut end = digits;
        while end < self.bytes.len() && self.bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end == digits {
            return None;
        }
        Some(self.token(
            start,
            end,
            TokenKind::VimscriptLink {
                id: self.slice(digits, end),
            },
        ))
    }

    fn try_tag_anchor(&self) -> Option<Token<'a>> {
        let end = self.scan_tag_anchor(self.pos)?;
        let start = self.pos;
        Some(self.token(
            start,
            end,
            TokenKind::TagAnchor {
                begin: self.slice(start, start + 1),
                id: self.slice(start + 1, end - 1),
                end: self.slice(end - 1, end),
            },
        ))
    }

    /// Shared with the header lookahead. The closing `*` must sit on a
    /// boundary (end of input, whitespace, or another `*`, which keeps
    /// back-to-back anchors parseable); `*foo*bar*` fails here so the
    /// opening `*` degrades to Etc and scanning retries one character on.
    fn scan_tag_anchor(&self, pos: usize) -> Option<usize> {
        if pos >= self.bytes.len() || self.bytes[pos] != b'*' {
            return None;
        }
        let mut end = pos + 1;
        while end < self.bytes.len() && is_tag_id_byte(self.bytes[end]) {
            end += 1;
        }
        if end == pos + 1 || end >= self.bytes.len() || self.bytes[end] != b'*' {
            return None;
        }
        let end = end + 1;
        if end < self.bytes.len() && !is_space_byte(self.bytes[end]) && self.bytes[end] != b'*' {
            return None;
        }
        Some(end)
    }

    fn try_tag_link(&self) -> Option<Token<'a>> {
        let start = self.pos;
        if self.bytes[start] != b'|' {
            return None;
        }
        let mut end = start + 1;
        while end < self.bytes.len() && is_tag_id_byte(self.bytes[end]) {
            end += 1;
        }
        if end == start + 1 || end >= self.bytes.len() || self.bytes[end] != b'|' {
            return None;
        }
        Some(self.token(
            start,
            end + 1,
            TokenKind::TagLink {
                begin: self.slice(start, start + 1),
                id: self.slice(start + 1, end),
                end: self.slice(end, end + 1),
            },
        ))
    }

    /// A `>` at end of line opens a literal block. The body keeps consuming
    /// blank or indented lines; a line starting with `<` closes the block
    /// with a `\n<` end marker, any other non-blank start closes it with
    /// just the preceding line break. A block that never closes (or never
    /// has a body line) fails as a whole and degrades to Etc.
    fn try_example(&self) -> Option<Token<'a>> {
        let start = self.pos;
        if self.bytes[start] != b'>' {
            return None;
        }
        let body_start = start + 1;
        if body_start >= self.bytes.len() || self.bytes[body_start] != b'\n' {
            return None;
        }
        let mut cursor = body_start;
        loop {
            let line_start = cursor + 1;
            if line_start >= self.bytes.len() {
                return None;
            }
            match self.bytes[line_start] {
                b'<' => {
                    if cursor == body_start {
                        return None;
                    }
                    return Some(self.example_token(start, body_start, cursor, line_start + 1));
                }
                b'\n' => cursor = line_start,
                b' ' | b'\t' => {
                    let mut line_end = line_start;
                    while line_end < self.bytes.len() && self.bytes[line_end] != b'\n' {
                        line_end += 1;
                    }
                    if line_end >= self.bytes.len() {
                        return None;
                    }
                    cursor = line_end;
                }
                _ => {
                    if cursor == body_start {
                        return None;
                    }
                    return Some(self.example_token(start, body_start, cursor, cursor + 1));
                }
            }
        }
    }

    fn example_token(&self, start: usize, body_start: usize, body_end: usize, end: usize) -> Token<'a> {
        self.token(
            start,
            end,
            TokenKind::Example {
                begin: self.slice(start, body_start),
                text: self.slice(body_start, body_end),
                end: self.slice(body_end, end),
            },
        )
    }

    fn try_uri(&self) -> Option<Token<'a>> {
        let start = self.pos;
        let end = uri::scan_uri(self.source, start)?;
        Some(self.token(start, end, TokenKind::Uri(self.slice(start, end))))
    }

    fn etc(&self) -> Token<'a> {
        let start = self.pos;
        let end = start + self.char_len(start);
        self.token(start, end, TokenKind::Etc(self.slice(start, end)))
    }

    fn char_len(&self, pos: usize) -> usize {
        self.source[pos..]
            .chars()
            .next()
            .map(|ch| ch.len_utf8())
            .unwrap_or(1)
    }
}

fn is_space_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

fn is_tag_id_byte(b: u8) -> bool {
    !matches!(b, b' ' | b'\t' | b'\r' | b'\n' | b'*' | b'|')
}

fn is_key_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'@')
}

fn is_term_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_')
}

fn is_termcode_byte(b: u8) -> bool {
    !is_space_byte(b) && b != b'\''
}
