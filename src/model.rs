//! Data structures describing the logical content of the directory document.
//!
//! The types here do not reference the rendering crate: a [`Block`] only records *what* is
//! shown and in which role, while [`crate::styles`] decides how each role looks and
//! [`crate::elements`] turns blocks into `genpdf` elements.

use crate::richtext::Span;

const MM_PER_INCH: f64 = 25.4;

/// Typographic role of a paragraph, resolved against a [`crate::styles::StyleSheet`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ParagraphRole {
    /// Document title at the top of the first page.
    Title,
    /// Per-entry heading.
    Heading,
    /// Regular body text.
    #[default]
    Body,
}

/// Rich text paragraph carrying inline styling and a role.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RichParagraph {
    spans: Vec<Span>,
    role: ParagraphRole,
}

impl RichParagraph {
    /// Creates a paragraph with the given role.
    pub fn new(role: ParagraphRole, spans: impl Into<Vec<Span>>) -> Self {
        Self {
            spans: spans.into(),
            role,
        }
    }

    /// Returns the spans that make up the paragraph.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Returns the role used to pick the paragraph style.
    pub fn role(&self) -> ParagraphRole {
        self.role
    }

    /// Concatenated text of all spans, without styling.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(Span::text).collect()
    }
}

/// Individual content blocks in document order.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    /// Styled paragraph content.
    Paragraph(RichParagraph),
    /// Fixed vertical gap.
    Spacer { height_mm: f64 },
}

impl Block {
    /// Title paragraph made of a single unstyled span.
    pub fn title(text: impl Into<String>) -> Self {
        Self::Paragraph(RichParagraph::new(
            ParagraphRole::Title,
            vec![Span::new(text)],
        ))
    }

    /// Heading paragraph made of a single unstyled span.
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Paragraph(RichParagraph::new(
            ParagraphRole::Heading,
            vec![Span::new(text)],
        ))
    }

    /// Body paragraph from pre-styled spans.
    pub fn body(spans: impl Into<Vec<Span>>) -> Self {
        Self::Paragraph(RichParagraph::new(ParagraphRole::Body, spans))
    }

    /// Vertical gap measured in inches.
    pub fn spacer_inches(inches: f64) -> Self {
        Self::Spacer {
            height_mm: inches * MM_PER_INCH,
        }
    }

    /// Returns the paragraph if this block is one.
    pub fn as_paragraph(&self) -> Option<&RichParagraph> {
        match self {
            Self::Paragraph(paragraph) => Some(paragraph),
            Self::Spacer { .. } => None,
        }
    }
}
