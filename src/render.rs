//! Article body rendering.
//!
//! Turns the lightweight markup used in article bodies into a sequence of
//! typed [`Block`]s. The body is split on blank lines; each resulting
//! paragraph is classified by its leading marker, in this order:
//!
//! | Marker | Block |
//! |--------|-------|
//! | `## ` | [`Block::Heading2`] |
//! | `### ` | [`Block::Heading3`] |
//! | `- ` | [`Block::UnorderedList`] |
//! | `1. ` (any number) | [`Block::OrderedList`] |
//! | `*...*` | [`Block::Emphasis`] (outer asterisks stripped) |
//! | `---` (hyphens only) | [`Block::Separator`] |
//! | anything else | [`Block::Paragraph`] |
//!
//! Inside a list paragraph only the lines carrying the list marker become
//! items; any other line in the same paragraph is dropped.
//!
//! Paragraph, emphasis and list-item text is further split into inline
//! [`Span`]s: `[text](url)` links and `**text**` bold runs. Headings keep
//! their raw text. Markup that does not close (a lone `**`, a `[` with no
//! `](...)`) is left in place as literal characters.
//!
//! Rendering is a pure function of the input string. HTML emission of the
//! resulting tree is done by [`crate::generate`].

/// One inline fragment of a paragraph or list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Bold(String),
    Link { text: String, href: String },
}

/// One top-level display unit of an article body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading2(String),
    Heading3(String),
    UnorderedList(Vec<Vec<Span>>),
    OrderedList(Vec<Vec<Span>>),
    /// Centered, italic paragraph.
    Emphasis(Vec<Span>),
    Separator,
    Paragraph(Vec<Span>),
}

/// Render a whole body into blocks, in display order.
pub fn render_body(body: &str) -> Vec<Block> {
    body.split("\n\n")
        .map(|p| p.trim_matches(|c| c == '\n' || c == '\r'))
        .filter(|p| !p.is_empty())
        .map(classify)
        .collect()
}

fn classify(paragraph: &str) -> Block {
    if let Some(rest) = paragraph.strip_prefix("## ") {
        return Block::Heading2(rest.to_string());
    }
    if let Some(rest) = paragraph.strip_prefix("### ") {
        return Block::Heading3(rest.to_string());
    }
    if paragraph.starts_with("- ") {
        let items = paragraph
            .lines()
            .filter_map(|line| line.strip_prefix("- "))
            .map(parse_inline)
            .collect();
        return Block::UnorderedList(items);
    }
    if ordered_item(paragraph).is_some() {
        let items = paragraph
            .lines()
            .filter_map(ordered_item)
            .map(parse_inline)
            .collect();
        return Block::OrderedList(items);
    }
    if paragraph.len() >= 2 && paragraph.starts_with('*') && paragraph.ends_with('*') {
        let inner = &paragraph[1..paragraph.len() - 1];
        return Block::Emphasis(parse_inline(inner));
    }
    if is_separator(paragraph) {
        return Block::Separator;
    }
    Block::Paragraph(parse_inline(paragraph))
}

/// Strip an `NN. ` prefix (digits, a dot, one whitespace character).
fn ordered_item(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix('.')?;
    let ws = rest.chars().next().filter(|c| c.is_whitespace())?;
    Some(&rest[ws.len_utf8()..])
}

fn is_separator(paragraph: &str) -> bool {
    let trimmed = paragraph.trim_end();
    trimmed.len() >= 3 && trimmed.bytes().all(|b| b == b'-')
}

/// Split text into plain, bold and link spans.
///
/// Scans left to right; at each position a link (`[text](url)`) or a bold
/// run (`**text**`) is tried, and the first one that matches wins. Both
/// constructs need non-empty content. Text with no matches comes back as a
/// single [`Span::Text`] equal to the input.
pub fn parse_inline(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        let matched = match text.as_bytes()[pos] {
            b'[' => match_link(&text[pos..]),
            b'*' => match_bold(&text[pos..]),
            _ => None,
        };
        match matched {
            Some((span, consumed)) => {
                if pos > plain_start {
                    spans.push(Span::Text(text[plain_start..pos].to_string()));
                }
                spans.push(span);
                pos += consumed;
                plain_start = pos;
            }
            None => {
                pos += text[pos..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    if plain_start < text.len() {
        spans.push(Span::Text(text[plain_start..].to_string()));
    }
    if spans.is_empty() {
        spans.push(Span::Text(text.to_string()));
    }
    spans
}

/// `[text](href)` at the start of `s`; returns the span and bytes consumed.
fn match_link(s: &str) -> Option<(Span, usize)> {
    let after_open = &s[1..];
    let close = after_open.find(']')?;
    if close == 0 {
        return None;
    }
    let label = &after_open[..close];
    let rest = after_open[close + 1..].strip_prefix('(')?;
    let end = rest.find(')')?;
    if end == 0 {
        return None;
    }
    let href = &rest[..end];
    // '[' + label + "](" + href + ')'
    let consumed = 1 + close + 2 + end + 1;
    Some((
        Span::Link {
            text: label.to_string(),
            href: href.to_string(),
        },
        consumed,
    ))
}

/// `**text**` at the start of `s`, where text contains no `*`.
fn match_bold(s: &str) -> Option<(Span, usize)> {
    let inner = s.strip_prefix("**")?;
    let end = inner.find('*')?;
    if end == 0 || !inner[end..].starts_with("**") {
        return None;
    }
    Some((Span::Bold(inner[..end].to_string()), 2 + end + 2))
}

/// Plain-text rendition of a span sequence, with markup removed.
pub fn spans_to_plain(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|s| match s {
            Span::Text(t) | Span::Bold(t) => t.as_str(),
            Span::Link { text, .. } => text.as_str(),
        })
        .collect()
}
