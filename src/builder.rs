//! Document construction for the provider directory.

use std::fs;
use std::path::Path;

use genpdf::{Margins, PaperSize, SimplePageDecorator, Size};
use log::debug;

use crate::elements::BlockElement;
use crate::error::PdfBuildError;
use crate::fonts::FontSearch;
use crate::model::Block;
use crate::styles::StyleSheet;

/// Page margin applied on every side.
pub const DEFAULT_MARGIN_MM: f64 = 25.4;

/// Builder that lays out [`Block`]s into a PDF using `genpdf`.
///
/// Defaults to US Letter paper with one-inch margins and the sample [`StyleSheet`].
pub struct PdfBuilder {
    paper_size: Size,
    margins: Margins,
    title: Option<String>,
    styles: StyleSheet,
    fonts: FontSearch,
    blocks: Vec<Block>,
}

impl Default for PdfBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfBuilder {
    /// Creates a builder with Letter paper, one-inch margins and no blocks.
    pub fn new() -> Self {
        Self {
            paper_size: PaperSize::Letter.into(),
            margins: Margins::all(DEFAULT_MARGIN_MM),
            title: None,
            styles: StyleSheet::sample(),
            fonts: FontSearch::new(),
            blocks: Vec::new(),
        }
    }

    /// Sets the title stored in the PDF metadata.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the font search used when rendering.
    pub fn with_fonts(mut self, fonts: FontSearch) -> Self {
        self.fonts = fonts;
        self
    }

    /// Appends a block to the document body.
    pub fn add_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// Appends several blocks in order.
    pub fn add_blocks<I>(mut self, blocks: I) -> Self
    where
        I: IntoIterator<Item = Block>,
    {
        self.blocks.extend(blocks);
        self
    }

    /// Returns the blocks queued for rendering.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Lays out all blocks and serializes the document into memory.
    pub fn render(self) -> Result<RenderedPdf, PdfBuildError> {
        let font_family = self
            .fonts
            .load_family()
            .map_err(PdfBuildError::FontLoad)?;

        let mut document = genpdf::Document::new(font_family);
        document.set_paper_size(self.paper_size);
        document.set_font_size(self.styles.body().font_size());
        if let Some(title) = &self.title {
            document.set_title(title.clone());
        }

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(self.margins);
        document.set_page_decorator(decorator);

        debug!("Laying out {} blocks", self.blocks.len());
        for block in &self.blocks {
            document.push(BlockElement::new(block, &self.styles));
        }

        let mut bytes = Vec::new();
        document
            .render(&mut bytes)
            .map_err(PdfBuildError::Render)?;
        debug!("Rendered {} bytes", bytes.len());

        Ok(RenderedPdf { bytes })
    }
}

/// A serialized PDF document.
#[derive(Clone, Debug)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
}

impl RenderedPdf {
    /// Writes the document to `path`, replacing any existing file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), PdfBuildError> {
        let path = path.as_ref();
        fs::write(path, &self.bytes).map_err(|source| PdfBuildError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::richtext::Span;

    #[test]
    fn blocks_accumulate_in_order() {
        let builder = PdfBuilder::new()
            .add_block(Block::title("Provider Directory"))
            .add_blocks(vec![
                Block::spacer_inches(0.3),
                Block::body(vec![Span::new("NPI: 1234567890")]),
            ]);
        assert_eq!(builder.blocks().len(), 3);
        assert_eq!(builder.blocks()[0], Block::title("Provider Directory"));
    }

    #[test]
    fn write_to_missing_directory_reports_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let target = dir.path().join("missing").join("out.pdf");
        let pdf = RenderedPdf {
            bytes: b"%PDF-1.3".to_vec(),
        };
        match pdf.write_to(&target) {
            Err(PdfBuildError::Write { path, .. }) => assert_eq!(path, target),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn write_to_creates_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let target = dir.path().join("out.pdf");
        let pdf = RenderedPdf {
            bytes: b"%PDF-1.3".to_vec(),
        };
        pdf.write_to(&target).expect("write succeeds");
        assert_eq!(std::fs::read(&target).expect("read back"), b"%PDF-1.3");
    }
}
