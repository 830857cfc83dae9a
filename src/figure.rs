//! The seam between the exporter and whatever plotting library draws the figure.

use crate::backend::Backend;
use crate::request::SaveOptions;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Everything a figure needs to know to write itself to disk.
#[derive(Debug, Clone, Copy)]
pub struct SaveTarget<'a> {
    /// Where the artifact must be written, including its extension
    pub path: &'a Path,
    /// The backend that is active for the duration of the save
    pub backend: &'a Backend,
    /// Keyword options forwarded untouched to the save routine
    pub options: &'a SaveOptions,
    /// Figure width as a fraction of `\linewidth`
    pub linewidth: f64,
    /// Figure height as a fraction of its width
    pub height_fraction: f64,
}

/// A rendered figure that can save itself.
pub trait Figure {
    fn save(&self, target: &SaveTarget<'_>) -> Result<()>;
}

impl<F> Figure for F
where
    F: Fn(&SaveTarget<'_>) -> Result<()>,
{
    fn save(&self, target: &SaveTarget<'_>) -> Result<()> {
        self(target)
    }
}

/// A figure that was already rendered to a file by some other tool.
///
/// Saving copies the file to the target path, so the artifact naming and
/// snippet generation work the same as for figures drawn in-process.
#[derive(Debug, Clone)]
pub struct FileFigure {
    source: PathBuf,
}

impl FileFigure {
    pub fn new<P: Into<PathBuf>>(source: P) -> FileFigure {
        FileFigure {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}

impl Figure for FileFigure {
    fn save(&self, target: &SaveTarget<'_>) -> Result<()> {
        if let Some(parent) = target.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create save directory `{}`", parent.display())
                })?;
            }
        }

        std::fs::copy(&self.source, target.path).with_context(|| {
            format!(
                "Failed to copy `{}` to `{}`",
                self.source.display(),
                target.path.display()
            )
        })?;
        Ok(())
    }
}
