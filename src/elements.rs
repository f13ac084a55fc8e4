//! `genpdf` element implementations for the directory content model.
//!
//! [`BlockElement`] is the bridge between [`crate::model::Block`] and the renderer: paragraphs
//! become styled, padded [`Paragraph`]s and spacers become a [`Spacer`] that reserves a fixed
//! amount of vertical space.

use genpdf::elements::{PaddedElement, Paragraph, StyledElement};
use genpdf::error::Error;
use genpdf::style::Style;
use genpdf::{render, Element, Mm, RenderResult, Size};

use crate::model::{Block, RichParagraph};
use crate::styles::StyleSheet;

/// Empty element that occupies a fixed height.
///
/// The height is clipped to the space left in the render area, so a spacer at the bottom of a
/// page never spills onto the next one.
#[derive(Clone, Copy, Debug)]
pub struct Spacer {
    height: Mm,
}

impl Spacer {
    /// Creates a spacer of the given height.
    pub fn new(height: impl Into<Mm>) -> Self {
        Self {
            height: height.into(),
        }
    }

    /// Requested height before clipping.
    pub fn height(&self) -> Mm {
        self.height
    }
}

impl Element for Spacer {
    fn render(
        &mut self,
        _context: &genpdf::Context,
        area: render::Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let available = area.size().height;
        let height = if self.height > available {
            available
        } else {
            self.height
        };

        let mut result = RenderResult::default();
        result.size = Size::new(0, height);
        Ok(result)
    }
}

type TextElement = PaddedElement<StyledElement<Paragraph>>;

/// A rendered [`Block`].
pub enum BlockElement {
    Text(TextElement),
    Spacer(Spacer),
}

impl BlockElement {
    /// Converts a block, resolving paragraph roles against `styles`.
    pub fn new(block: &Block, styles: &StyleSheet) -> Self {
        match block {
            Block::Paragraph(paragraph) => Self::Text(text_element(paragraph, styles)),
            Block::Spacer { height_mm } => Self::Spacer(Spacer::new(*height_mm)),
        }
    }
}

fn text_element(paragraph: &RichParagraph, styles: &StyleSheet) -> TextElement {
    let style = styles.style_for(paragraph.role());

    let mut element = Paragraph::default();
    for span in paragraph.spans() {
        element.push(span.to_styled_string());
    }

    element.styled(style.text_style()).padded(style.padding())
}

impl Element for BlockElement {
    fn render(
        &mut self,
        context: &genpdf::Context,
        area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        match self {
            Self::Text(element) => element.render(context, area, style),
            Self::Spacer(element) => element.render(context, area, style),
        }
    }
}
