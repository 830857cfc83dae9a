//! Plotting backend configuration.
//!
//! Exporting a PGF figure needs a LaTeX-oriented backend, while everything else
//! (including interactive previews between exports) runs on the inline backend.
//! Switching is scoped: [`BackendState::activate`] hands out a [`BackendGuard`]
//! and the inline backend comes back when the guard is dropped, whether the save
//! in between succeeded, failed, or panicked.

use crate::output_type::OutputType;
use log::debug;
use std::fmt;
use std::ops::Deref;

pub const DEFAULT_TEXSYSTEM: &str = "pdflatex";

fn default_preamble() -> Vec<String> {
    vec![
        r"\usepackage[T1]{fontenc}".to_string(),
        r"\usepackage[utf8]{inputenc}".to_string(),
        r"\DeclareUnicodeCharacter{2212}{\textendash}".to_string(),
        r"\usepackage{cmbright}".to_string(),
    ]
}

/// Settings handed to a LaTeX-oriented vector backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PgfSettings {
    /// The LaTeX engine used to typeset text inside the figure
    pub texsystem: String,
    /// Lines placed in the preamble the backend typesets with
    pub preamble: Vec<String>,
}

impl Default for PgfSettings {
    fn default() -> Self {
        PgfSettings {
            texsystem: DEFAULT_TEXSYSTEM.to_string(),
            preamble: default_preamble(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Backend {
    /// The interactive backend used for previews
    #[default]
    Inline,
    Pgf(PgfSettings),
}

impl Backend {
    /// The backend a figure of the given output type is saved with.
    pub fn for_output_type(output_type: OutputType, texsystem: &str) -> Backend {
        match output_type {
            OutputType::Pgf => Backend::Pgf(PgfSettings {
                texsystem: texsystem.to_string(),
                ..PgfSettings::default()
            }),
            OutputType::Pdf => Backend::Inline,
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(self, Backend::Inline)
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Inline => write!(f, "inline"),
            Backend::Pgf(settings) => write!(f, "pgf ({})", settings.texsystem),
        }
    }
}

/// The backend currently in effect for one exporter.
#[derive(Debug, Default)]
pub struct BackendState {
    current: Backend,
}

impl BackendState {
    pub fn current(&self) -> &Backend {
        &self.current
    }

    /// Switch to `backend` until the returned guard is dropped.
    pub fn activate(&mut self, backend: Backend) -> BackendGuard<'_> {
        debug!("switching plotting backend to {backend}");
        self.current = backend;
        BackendGuard { state: self }
    }
}

/// Keeps a backend active; restores the inline backend on drop.
#[derive(Debug)]
pub struct BackendGuard<'s> {
    state: &'s mut BackendState,
}

impl Deref for BackendGuard<'_> {
    type Target = Backend;

    fn deref(&self) -> &Backend {
        &self.state.current
    }
}

impl Drop for BackendGuard<'_> {
    fn drop(&mut self) {
        if !self.state.current.is_inline() {
            debug!("restoring inline plotting backend");
        }
        self.state.current = Backend::Inline;
    }
}
