//! Saving figures and producing the LaTeX that references them.
//!
//! An exporter numbers every figure it saves, so exporting `plot.png` twice
//! produces `plot_1.pgf` and then `plot_2.pgf` rather than overwriting the first.
//! The counter is shared by all filenames and belongs to the exporter instance:
//! create one exporter per document and keep it around for the session.

use crate::backend::{Backend, BackendState};
use crate::error::ExportError;
use crate::figure::{Figure, SaveTarget};
use crate::request::ExportRequest;
use crate::snippet::{graphics_command, Snippet, Wrapper};
use log::{debug, info};
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Default)]
pub struct FigureExporter {
    counter: u64,
    backend: BackendState,
}

impl FigureExporter {
    pub fn new() -> FigureExporter {
        FigureExporter::default()
    }

    /// How many non-draft exports have been started so far.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// The backend in effect right now. Outside of a save this is always inline.
    pub fn backend(&self) -> &Backend {
        self.backend.current()
    }

    /// Save `figure` according to `request` and return the snippet referencing it.
    ///
    /// Returns `Ok(None)` in draft mode, in which case nothing is written and the
    /// counter is left alone. The counter is advanced before saving, so a failed
    /// save still uses up its number.
    pub fn export(
        &mut self,
        figure: &dyn Figure,
        request: &ExportRequest,
    ) -> Result<Option<Snippet>, ExportError> {
        if request.draft_mode {
            info!("draft mode ... no figure saved ({})", request.filename);
            return Ok(None);
        }

        self.counter += 1;
        let counter = self.counter;

        let stem = strip_extension(&request.filename);
        let label = match &request.label {
            Some(label) => label.clone(),
            None => format!("{stem}_{counter}"),
        };
        let artifact = format!(
            "{stem}_{counter}.{}",
            request.output_type.extension()
        );
        let save_path = request.save_dir.join(&artifact);

        {
            let backend = self.backend.activate(Backend::for_output_type(
                request.output_type,
                &request.save_options.texsystem,
            ));
            let target = SaveTarget {
                path: &save_path,
                backend: &backend,
                options: &request.save_options,
                linewidth: request.linewidth,
                height_fraction: request.height_fraction,
            };
            figure.save(&target).map_err(|source| ExportError::Save {
                path: save_path.clone(),
                source,
            })?;
        }
        debug!("saved figure to {}", save_path.display());

        let command = graphics_command(
            request.output_type,
            request.linewidth,
            &format!("{}/{artifact}", request.graphics_dir),
        );
        let wrapper = if request.figure_env {
            Wrapper::Figure {
                caption: &request.caption,
                label: &label,
            }
        } else {
            Wrapper::Center {
                linewidth: request.linewidth,
                caption: &request.caption,
                label: &label,
            }
        };
        Ok(Some(wrapper.wrap(&command)))
    }
}

/// Drop the final extension of `filename`, keeping any directories and earlier dots.
///
/// Roots and drive prefixes are dropped too, so the artifact always lands inside
/// `save_dir` and matches the path printed under `graphics_dir`.
fn strip_extension(filename: &str) -> String {
    Path::new(filename)
        .with_extension("")
        .components()
        .filter(|component| !matches!(component, Component::RootDir | Component::Prefix(_)))
        .collect::<PathBuf>()
        .to_string_lossy()
        .into_owned()
}
