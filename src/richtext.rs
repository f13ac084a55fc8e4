//! Inline styled text fragments.
//!
//! A [`Span`] carries the subset of `genpdf` styling the directory needs (bold and italic).  [`parse_markup`] turns a tiny markdown-like syntax into spans so formatted
//! lines such as `**Specialty:** Surgeon` can be written as plain strings.

use genpdf::style::{Style, StyledString};
use thiserror::Error;

/// A slice of text together with inline style attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Span {
    text: String,
    bold: bool,
    italic: bool,
}

impl Span {
    /// Creates a new span with the provided text and no styles applied.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Returns the raw text contained in this span.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether the span should be rendered in bold.
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Returns whether the span should be rendered in italic.
    pub fn is_italic(&self) -> bool {
        self.italic
    }

    /// Marks the span as bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Marks the span as italic.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    fn style(&self) -> Style {
        let mut style = Style::new();
        if self.bold {
            style.set_bold();
        }
        if self.italic {
            style.set_italic();
        }
        style
    }

    /// Converts the span into a `genpdf` styled string.
    pub fn to_styled_string(&self) -> StyledString {
        StyledString::new(self.text.clone(), self.style())
    }
}

impl From<&Span> for StyledString {
    fn from(span: &Span) -> Self {
        span.to_styled_string()
    }
}

/// Error produced by [`parse_markup`] for malformed input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message} (at byte {index})")]
pub struct ParseError {
    index: usize,
    message: String,
}

impl ParseError {
    fn new(index: usize, message: impl Into<String>) -> Self {
        Self {
            index,
            message: message.into(),
        }
    }

    /// Byte offset in the input where the problem was detected.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Human-readable description of the problem.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Marker {
    Bold,
    Italic,
}

impl Marker {
    fn name(self) -> &'static str {
        match self {
            Marker::Bold => "bold",
            Marker::Italic => "italic",
        }
    }
}

/// Open markers, innermost last.
struct MarkerStack {
    open: Vec<(Marker, usize)>,
}

impl MarkerStack {
    fn top(&self) -> Option<Marker> {
        self.open.last().map(|(marker, _)| *marker)
    }

    fn contains(&self, marker: Marker) -> bool {
        self.open.iter().any(|(open, _)| *open == marker)
    }

    fn span(&self, text: String) -> Span {
        Span {
            text,
            bold: self.contains(Marker::Bold),
            italic: self.contains(Marker::Italic),
        }
    }
}

/// Parses `**bold**` and `*italic*` markup into spans.
///
/// Markers nest but must close in reverse order of opening.  A backslash escapes the next
/// character, so `\*` yields a literal asterisk.  Unterminated or overlapping markers are
/// rejected with a [`ParseError`].
pub fn parse_markup(input: &str) -> Result<Vec<Span>, ParseError> {
    let mut spans = Vec::new();
    let mut buffer = String::new();
    let mut stack = MarkerStack { open: Vec::new() };
    let mut index = 0;

    while index < input.len() {
        let rest = &input[index..];

        if let Some(escaped) = rest.strip_prefix('\\') {
            let ch = escaped
                .chars()
                .next()
                .ok_or_else(|| ParseError::new(index, "dangling escape at end of input"))?;
            buffer.push(ch);
            index += 1 + ch.len_utf8();
            continue;
        }

        if rest.starts_with("**") {
            let top = stack.top();
            if top == Some(Marker::Bold) {
                close(&mut buffer, &mut spans, &mut stack);
                index += 2;
            } else if top == Some(Marker::Italic) && rest.starts_with("***") {
                // `***` closes the inner italic; the remaining `**` is handled next.
                close(&mut buffer, &mut spans, &mut stack);
                index += 1;
            } else {
                open(Marker::Bold, index, &mut buffer, &mut spans, &mut stack)?;
                index += 2;
            }
            continue;
        }

        if rest.starts_with('*') {
            if stack.top() == Some(Marker::Italic) {
                close(&mut buffer, &mut spans, &mut stack);
            } else {
                open(Marker::Italic, index, &mut buffer, &mut spans, &mut stack)?;
            }
            index += 1;
            continue;
        }

        // `rest` is non-empty inside the loop.
        if let Some(ch) = rest.chars().next() {
            buffer.push(ch);
            index += ch.len_utf8();
        }
    }

    if let Some((marker, start)) = stack.open.last() {
        return Err(ParseError::new(
            *start,
            format!("unterminated {} span", marker.name()),
        ));
    }

    flush(&mut buffer, &mut spans, &stack);
    Ok(spans)
}

fn open(
    marker: Marker,
    index: usize,
    buffer: &mut String,
    spans: &mut Vec<Span>,
    stack: &mut MarkerStack,
) -> Result<(), ParseError> {
    if stack.contains(marker) {
        return Err(ParseError::new(
            index,
            format!("{} span closed out of order", marker.name()),
        ));
    }
    flush(buffer, spans, stack);
    stack.open.push((marker, index));
    Ok(())
}

fn close(buffer: &mut String, spans: &mut Vec<Span>, stack: &mut MarkerStack) {
    flush(buffer, spans, stack);
    stack.open.pop();
}

fn flush(buffer: &mut String, spans: &mut Vec<Span>, stack: &MarkerStack) {
    if !buffer.is_empty() {
        spans.push(stack.span(std::mem::take(buffer)));
    }
}
