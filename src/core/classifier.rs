// src/core/classifier.rs
//! Decides whether an offset in raw source is code, string content or comment.
//!
//! Offsets are byte offsets. Every character the rules care about (quotes,
//! `\`, `#`, `\n`, `{`, `}`) is ASCII, so a byte scan never lands inside one.

const ESCAPE: u8 = b'\\';
const COMMENT: u8 = b'#';
const NEWLINE: u8 = b'\n';

fn is_quote(b: u8) -> bool {
    b == b'"' || b == b'\''
}

/// Letters, digits and `_`.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Is `pos` inside a quoted string literal?
///
/// The opening quote itself is outside; the closing quote is still inside.
/// Offsets at or past the end of `text` are outside everything.
pub fn is_inside_string(text: &str, pos: usize) -> bool {
    let bytes = text.as_bytes();
    if pos >= bytes.len() {
        return false;
    }

    let mut open: Option<u8> = None;
    let mut i = 0;
    while i < pos {
        let b = bytes[i];
        if open.is_some() && b == ESCAPE && i + 1 < bytes.len() {
            i += 2;
            continue;
        }
        if is_quote(b) {
            match open {
                None => open = Some(b),
                Some(q) if q == b => open = None,
                Some(_) => {}
            }
        }
        i += 1;
    }
    open.is_some()
}

/// Is `pos` inside a `#` line comment?
///
/// Only the first `#` between the start of the line and `pos` is looked at.
/// When that one sits inside a string the answer is `false`.
pub fn is_inside_comment(text: &str, pos: usize) -> bool {
    let bytes = text.as_bytes();
    let pos = pos.min(bytes.len());
    let line_start = bytes[..pos]
        .iter()
        .rposition(|&b| b == NEWLINE)
        .map_or(0, |nl| nl + 1);

    match bytes[line_start..pos].iter().position(|&b| b == COMMENT) {
        Some(offset) => !is_inside_string(text, line_start + offset),
        None => false,
    }
}

/// Does word-character-ness change at `pos`?
///
/// True at or past the end of `text`, or when the character at `pos`
/// differs from either neighbour (a missing neighbour counts as non-word).
pub fn is_word_boundary(text: &str, pos: usize) -> bool {
    if pos >= text.len() {
        return true;
    }

    let mut start = pos;
    while !text.is_char_boundary(start) {
        start -= 1;
    }
    let Some(current) = text[start..].chars().next() else {
        return true;
    };

    let at = is_word_char(current);
    let before = text[..start].chars().next_back().is_some_and(is_word_char);
    let after = text[start + current.len_utf8()..]
        .chars()
        .next()
        .is_some_and(is_word_char);

    at != before || at != after
}

/// Is the quote at `quote_pos` the opening quote of an `f"..."` string?
pub fn is_template_quote(text: &str, quote_pos: usize) -> bool {
    quote_pos > 0 && matches!(text.as_bytes().get(quote_pos - 1), Some(b'f' | b'F'))
}

/// Answers every classification question about one buffer in O(1).
///
/// Built by a single forward scan; gives the same answers as the free
/// functions above for every offset.
#[derive(Debug, Clone)]
pub struct LexicalIndex {
    /// Opening quote of the string `pos` is inside, if any.
    open_quote: Vec<Option<usize>>,
    /// The string `pos` is inside opened with `f"` or `F"`.
    template: Vec<bool>,
    /// `pos` lies inside a `{...}` hole of a template string.
    hole: Vec<bool>,
    comment: Vec<bool>,
}

impl LexicalIndex {
    pub fn build(text: &str) -> Self {
        let bytes = text.as_bytes();
        let n = bytes.len();
        let mut open_quote = vec![None; n];
        let mut template = vec![false; n];
        let mut hole = vec![false; n];

        let mut open: Option<usize> = None;
        let mut is_template = false;
        let mut depth = 0usize;
        let mut i = 0;
        while i < n {
            open_quote[i] = open;
            template[i] = is_template;
            hole[i] = depth > 0;
            let b = bytes[i];

            let Some(q) = open else {
                if is_quote(b) {
                    open = Some(i);
                    is_template = is_template_quote(text, i);
                }
                i += 1;
                continue;
            };

            if b == ESCAPE && i + 1 < n {
                open_quote[i + 1] = open;
                template[i + 1] = is_template;
                hole[i + 1] = depth > 0;
                i += 2;
                continue;
            }

            if b == bytes[q] {
                open = None;
                is_template = false;
                depth = 0;
            } else if is_template {
                match b {
                    // `{{` outside a hole is a literal brace
                    b'{' if depth == 0 && bytes.get(i + 1) == Some(&b'{') => {
                        open_quote[i + 1] = open;
                        template[i + 1] = true;
                        i += 2;
                        continue;
                    }
                    b'{' => depth += 1,
                    b'}' if depth > 0 => depth -= 1,
                    _ => {}
                }
            }
            i += 1;
        }

        let mut comment = vec![false; n];
        let mut first_hash: Option<usize> = None;
        for (pos, &b) in bytes.iter().enumerate() {
            comment[pos] = first_hash.is_some_and(|h| open_quote[h].is_none());
            match b {
                NEWLINE => first_hash = None,
                COMMENT if first_hash.is_none() => first_hash = Some(pos),
                _ => {}
            }
        }

        Self { open_quote, template, hole, comment }
    }

    pub fn in_string(&self, pos: usize) -> bool {
        self.string_start(pos).is_some()
    }

    /// Offset of the opening quote of the string containing `pos`.
    pub fn string_start(&self, pos: usize) -> Option<usize> {
        self.open_quote.get(pos).copied().flatten()
    }

    pub fn in_comment(&self, pos: usize) -> bool {
        self.comment.get(pos).copied().unwrap_or(false)
    }

    pub fn in_template(&self, pos: usize) -> bool {
        self.template.get(pos).copied().unwrap_or(false)
    }

    pub fn in_hole(&self, pos: usize) -> bool {
        self.hole.get(pos).copied().unwrap_or(false)
    }
}
