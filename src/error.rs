//! Error type shared by rendering and fixture generation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::richtext::ParseError;

/// Failures that can occur while producing the directory PDF.
#[derive(Debug, Error)]
pub enum PdfBuildError {
    /// No usable font family could be loaded.
    #[error("failed to load fonts")]
    FontLoad(#[source] genpdf::error::Error),
    /// A formatted line contained malformed inline markup.
    #[error("invalid inline markup")]
    Markup(#[from] ParseError),
    /// Layout or serialization inside `genpdf` failed.
    #[error("failed to render PDF document")]
    Render(#[source] genpdf::error::Error),
    /// The rendered bytes could not be written to disk.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
