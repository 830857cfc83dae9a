//! Save plotted figures for LaTeX documents.
//!
//! A [`FigureExporter`] writes each figure to disk as PGF (pulled into the
//! document with `\input`) or PDF (placed with `\includegraphics`) and hands back
//! a [`Snippet`] of LaTeX that references the file. [`footnote`] credits the
//! notebook the code came from.

mod backend;
mod config;
mod error;
mod exporter;
mod figure;
mod footnote;
mod output_type;
mod request;
mod snippet;

pub use backend::{Backend, BackendGuard, BackendState, PgfSettings, DEFAULT_TEXSYSTEM};
pub use config::{ExportDefaults, CONFIG_FILE};
pub use error::ExportError;
pub use exporter::FigureExporter;
pub use figure::{FileFigure, Figure, SaveTarget};
pub use footnote::footnote;
pub use output_type::OutputType;
pub use request::{ExportRequest, ExportRequestBuilder, ExportRequestBuilderError, SaveOptions};
pub use snippet::{graphics_command, Snippet, Wrapper};
