//! Paragraph styles keyed by [`ParagraphRole`].

use genpdf::style::{Color, Style};
use genpdf::{Margins, Mm};

use crate::model::ParagraphRole;

/// Converts typographic points into `genpdf` millimetres.
pub fn points(value: f64) -> Mm {
    Mm::from(printpdf::Mm::from(printpdf::Pt(value)))
}

/// Font and spacing settings applied to every paragraph of one role.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParagraphStyle {
    font_size: u8,
    bold: bool,
    color: Option<Color>,
    space_before_pt: f64,
    space_after_pt: f64,
}

impl ParagraphStyle {
    /// Regular text at the given size with no surrounding space.
    pub fn new(font_size: u8) -> Self {
        Self {
            font_size,
            bold: false,
            color: None,
            space_before_pt: 0.0,
            space_after_pt: 0.0,
        }
    }

    /// Font size in points.
    pub fn font_size(&self) -> u8 {
        self.font_size
    }

    /// Returns whether the paragraph is set in bold.
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Text color, if one is set.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Space above the paragraph in points.
    pub fn space_before_pt(&self) -> f64 {
        self.space_before_pt
    }

    /// Space below the paragraph in points.
    pub fn space_after_pt(&self) -> f64 {
        self.space_after_pt
    }

    /// Sets the paragraph in bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Sets the text color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the vertical space (in points) above and below the paragraph.
    pub fn with_spacing(mut self, before_pt: f64, after_pt: f64) -> Self {
        self.space_before_pt = before_pt;
        self.space_after_pt = after_pt;
        self
    }

    /// Builds the `genpdf` style inherited by the paragraph's spans.
    pub fn text_style(&self) -> Style {
        let mut style = Style::new().with_font_size(self.font_size);
        if self.bold {
            style.set_bold();
        }
        if let Some(color) = self.color {
            style.set_color(color);
        }
        style
    }

    /// Padding that reproduces the configured space before and after.
    pub fn padding(&self) -> Margins {
        Margins::trbl(
            points(self.space_before_pt),
            0,
            points(self.space_after_pt),
            0,
        )
    }
}

/// The set of paragraph styles used by a document.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleSheet {
    title: ParagraphStyle,
    heading: ParagraphStyle,
    body: ParagraphStyle,
}

impl StyleSheet {
    /// Creates a style sheet from explicit styles.
    pub fn new(title: ParagraphStyle, heading: ParagraphStyle, body: ParagraphStyle) -> Self {
        Self {
            title,
            heading,
            body,
        }
    }

    /// Directory styling: 16pt black title, 14pt headings and 10pt body text.
    pub fn sample() -> Self {
        Self::new(
            ParagraphStyle::new(16)
                .bold()
                .with_color(Color::Rgb(0, 0, 0))
                .with_spacing(0.0, 12.0),
            ParagraphStyle::new(14).bold().with_spacing(10.0, 6.0),
            ParagraphStyle::new(10),
        )
    }

    /// Returns the style for a paragraph role.
    pub fn style_for(&self, role: ParagraphRole) -> &ParagraphStyle {
        match role {
            ParagraphRole::Title => &self.title,
            ParagraphRole::Heading => &self.heading,
            ParagraphRole::Body => &self.body,
        }
    }

    /// Body style, also used as the document default.
    pub fn body(&self) -> &ParagraphStyle {
        &self.body
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::sample()
    }
}
