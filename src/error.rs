use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by [`FigureExporter::export`](crate::FigureExporter::export).
#[derive(Debug, Error)]
pub enum ExportError {
    /// The output format selector wasn't one of the formats we know how to write.
    #[error("output type `{given}` is not supported (expected one of: {accepted})")]
    UnsupportedOutputType { given: String, accepted: String },

    /// The plotting library failed to write the figure.
    #[error("failed to save figure to `{}`", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}
