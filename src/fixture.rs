//! End-to-end generation of the provider directory fixture.

use std::path::{Path, PathBuf};

use log::info;

use crate::builder::{PdfBuilder, RenderedPdf};
use crate::directory::{directory_blocks, DIRECTORY_TITLE};
use crate::error::PdfBuildError;
use crate::fonts::FontSearch;
use crate::provider::{sample_providers, Provider};

/// File written when no output path is configured.
pub const DEFAULT_OUTPUT_FILE: &str = "test_providers.pdf";

/// Where the fixture goes and where fonts come from.
#[derive(Clone, Debug)]
pub struct FixtureConfig {
    pub output: PathBuf,
    pub fonts_dir: Option<PathBuf>,
    /// Falls back to installed system fonts when the bundled family is missing.
    pub system_fonts: bool,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            fonts_dir: None,
            system_fonts: true,
        }
    }
}

impl FixtureConfig {
    fn font_search(&self) -> FontSearch {
        let search = FontSearch::new().with_system_fallback(self.system_fonts);
        match &self.fonts_dir {
            Some(dir) => search.with_directory(dir),
            None => search,
        }
    }
}

/// Outcome of a successful [`generate`] run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixtureReport {
    pub path: PathBuf,
    pub provider_count: usize,
    pub byte_len: usize,
}

impl FixtureReport {
    /// Console lines confirming the file and its contents.
    pub fn status_lines(&self) -> Vec<String> {
        vec![
            format!("✓ Test PDF created: {}", self.path.display()),
            format!("  Contains {} sample providers", self.provider_count),
            "  Upload this file to test the PDF OCR feature".to_owned(),
        ]
    }
}

/// Builds the directory PDF for `providers` without touching the filesystem.
pub fn render_directory(
    providers: &[Provider],
    fonts: FontSearch,
) -> Result<RenderedPdf, PdfBuildError> {
    let blocks = directory_blocks(providers)?;
    PdfBuilder::new()
        .with_title(DIRECTORY_TITLE)
        .with_fonts(fonts)
        .add_blocks(blocks)
        .render()
}

/// Renders the sample providers and writes them to `config.output`.
pub fn generate(config: &FixtureConfig) -> Result<FixtureReport, PdfBuildError> {
    let providers = sample_providers();
    info!(
        "Rendering {} providers to {}",
        providers.len(),
        config.output.display()
    );

    let pdf = render_directory(&providers, config.font_search())?;
    pdf.write_to(&config.output)?;
    info!("Wrote {} bytes", pdf.bytes.len());

    Ok(FixtureReport {
        path: config.output.clone(),
        provider_count: providers.len(),
        byte_len: pdf.bytes.len(),
    })
}

/// Convenience wrapper around [`generate`] for a custom output path.
pub fn generate_to(output: impl AsRef<Path>) -> Result<FixtureReport, PdfBuildError> {
    generate(&FixtureConfig {
        output: output.as_ref().to_path_buf(),
        ..FixtureConfig::default()
    })
}
