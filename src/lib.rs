//! Generates the provider-directory PDF used as a manual OCR upload fixture.
//!
//! The pipeline is a straight line: [`provider::sample_providers`] supplies the records,
//! [`directory::directory_blocks`] formats them into [`model::Block`]s, and
//! [`builder::PdfBuilder`] lays those out with `genpdf`.  [`fixture::generate`] runs all three
//! and writes the file.

pub mod builder;
pub mod directory;
pub mod elements;
pub mod error;
pub mod fixture;
pub mod fonts;
pub mod model;
pub mod provider;
pub mod richtext;
pub mod styles;

pub use error::PdfBuildError;
pub use fixture::{generate, FixtureConfig, FixtureReport, DEFAULT_OUTPUT_FILE};
