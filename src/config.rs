//! Session-wide export defaults, read from `texfig.toml`.

use crate::backend::DEFAULT_TEXSYSTEM;
use crate::output_type::OutputType;
use crate::request::{ExportRequest, ExportRequestBuilder, SaveOptions};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "texfig.toml";

/// Defaults applied to every export in a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDefaults {
    /// Directory artifacts are written to
    #[serde(default = "default_save_dir")]
    pub save_dir: PathBuf,
    /// Directory prefix used for artifacts inside LaTeX snippets
    #[serde(default = "default_graphics_dir")]
    pub graphics_dir: String,
    #[serde(default = "default_linewidth")]
    pub linewidth: f64,
    #[serde(default = "default_height_fraction")]
    pub height_fraction: f64,
    #[serde(default)]
    pub output_type: OutputType,
    /// Wrap figures in floating `figure` environments
    #[serde(default)]
    pub figure_env: bool,
    /// Skip writing figures while iterating on the document
    #[serde(default)]
    pub draft_mode: bool,
    #[serde(default = "default_texsystem")]
    pub texsystem: String,
}

fn default_save_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_graphics_dir() -> String {
    "source".to_string()
}
fn default_linewidth() -> f64 {
    1.0
}
fn default_height_fraction() -> f64 {
    0.5
}
fn default_texsystem() -> String {
    DEFAULT_TEXSYSTEM.to_string()
}

impl Default for ExportDefaults {
    fn default() -> Self {
        ExportDefaults {
            save_dir: default_save_dir(),
            graphics_dir: default_graphics_dir(),
            linewidth: default_linewidth(),
            height_fraction: default_height_fraction(),
            output_type: OutputType::default(),
            figure_env: false,
            draft_mode: false,
            texsystem: default_texsystem(),
        }
    }
}

impl ExportDefaults {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<ExportDefaults> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to load {} contents", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Like [`ExportDefaults::load`], but a missing file just means "use the defaults".
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<ExportDefaults> {
        let path = path.as_ref();
        if path.exists() {
            ExportDefaults::load(path)
        } else {
            Ok(ExportDefaults::default())
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let contents =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize configuration")?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    /// A request builder for `filename`, pre-filled with these defaults.
    pub fn request<S: Into<String>>(&self, filename: S) -> ExportRequestBuilder {
        let mut builder = ExportRequest::builder(filename);
        builder
            .draft_mode(self.draft_mode)
            .save_dir(self.save_dir.clone())
            .graphics_dir(self.graphics_dir.clone())
            .linewidth(self.linewidth)
            .height_fraction(self.height_fraction)
            .output_type(self.output_type)
            .figure_env(self.figure_env)
            .save_options(SaveOptions {
                texsystem: self.texsystem.clone(),
                ..SaveOptions::default()
            });
        builder
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn can_serialize_defaults() {
        let defaults = ExportDefaults::default();
        let text = toml::to_string(&defaults).expect("can serialize defaults to TOML");
        let parsed: ExportDefaults = toml::from_str(&text).expect("can parse defaults");
        assert_eq!(parsed, defaults);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let parsed: ExportDefaults = toml::from_str(
            r#"
            output_type = "pdf"
            graphics_dir = "figures"
            "#,
        )
        .expect("can parse partial config");

        assert_eq!(parsed.output_type, OutputType::Pdf);
        assert_eq!(parsed.graphics_dir, "figures");
        assert_eq!(parsed.save_dir, PathBuf::from("."));
        assert_eq!(parsed.linewidth, 1.0);
        assert_eq!(parsed.texsystem, "pdflatex");
    }

    #[test]
    fn unknown_output_type_is_rejected() {
        assert!(toml::from_str::<ExportDefaults>(r#"output_type = "svg""#).is_err());
    }

    #[test]
    fn request_inherits_defaults() {
        let defaults = ExportDefaults {
            output_type: OutputType::Pdf,
            figure_env: true,
            texsystem: "xelatex".to_string(),
            ..ExportDefaults::default()
        };
        let request = defaults
            .request("plot.png")
            .caption("A plot")
            .build()
            .expect("can build request");

        assert_eq!(request.output_type, OutputType::Pdf);
        assert!(request.figure_env);
        assert_eq!(request.caption, "A plot");
        assert_eq!(request.save_options.texsystem, "xelatex");
    }

    #[test]
    fn load_or_default_tolerates_missing_file() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let defaults = ExportDefaults::load_or_default(dir.path().join(CONFIG_FILE))
            .expect("missing file is fine");
        assert_eq!(defaults, ExportDefaults::default());
    }
}
