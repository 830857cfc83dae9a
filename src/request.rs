use crate::backend::DEFAULT_TEXSYSTEM;
use crate::output_type::OutputType;
use derive_builder::Builder;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Keyword options passed through to the plotting library's save routine.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveOptions {
    /// LaTeX engine the save routine is told to use; always forwarded
    pub texsystem: String,
    /// Any other options, forwarded as-is
    pub extra: BTreeMap<String, Value>,
}

impl Default for SaveOptions {
    fn default() -> Self {
        SaveOptions {
            texsystem: DEFAULT_TEXSYSTEM.to_string(),
            extra: BTreeMap::default(),
        }
    }
}

impl SaveOptions {
    pub fn set<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) -> &mut Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

/// One call's worth of export settings.
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(setter(into))]
pub struct ExportRequest {
    /// Base name of the artifact; its extension (if any) is replaced
    pub filename: String,
    /// Skip saving entirely
    #[builder(default)]
    pub draft_mode: bool,
    /// Directory the artifact is written to
    #[builder(default = "PathBuf::from(\".\")")]
    pub save_dir: PathBuf,
    /// Directory prefix used for the artifact inside the LaTeX snippet
    #[builder(default = "\"source\".to_string()")]
    pub graphics_dir: String,
    /// Width as a fraction of `\linewidth`
    #[builder(default = "1.0")]
    pub linewidth: f64,
    /// Height as a fraction of the width
    #[builder(default = "0.5")]
    pub height_fraction: f64,
    #[builder(default)]
    pub output_type: OutputType,
    /// Wrap the graphic in a floating `figure` environment instead of `center`
    #[builder(default)]
    pub figure_env: bool,
    #[builder(default)]
    pub caption: String,
    /// Label for `\label{...}`; defaults to `<stem>_<counter>`.
    ///
    /// The stem has its extension stripped (`plot_1` for `plot.png`). Older
    /// notebook helpers appended the counter to the full filename (`plot.png_1`);
    /// pass that explicitly to keep existing `\ref`s working.
    #[builder(setter(into, strip_option), default)]
    pub label: Option<String>,
    #[builder(default)]
    pub save_options: SaveOptions,
}

impl ExportRequest {
    /// Start a request for `filename` with every other setting at its default.
    pub fn builder<S: Into<String>>(filename: S) -> ExportRequestBuilder {
        let mut builder = ExportRequestBuilder::default();
        builder.filename(filename);
        builder
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn can_create_request_with_builder_pattern() {
        let request = ExportRequest::builder("plot.png")
            .build()
            .expect("can build request");

        assert_eq!(request.filename, "plot.png");
        assert!(!request.draft_mode);
        assert_eq!(request.save_dir, PathBuf::from("."));
        assert_eq!(request.graphics_dir, "source");
        assert_eq!(request.linewidth, 1.0);
        assert_eq!(request.height_fraction, 0.5);
        assert_eq!(request.output_type, OutputType::Pgf);
        assert!(!request.figure_env);
        assert_eq!(request.caption, "");
        assert_eq!(request.label, None);
        assert_eq!(request.save_options.texsystem, "pdflatex");
    }

    #[test]
    fn filename_is_required() {
        assert!(ExportRequestBuilder::default().build().is_err());
    }

    #[test]
    fn save_options_keep_extra_keywords() {
        let mut options = SaveOptions::default();
        options.set("dpi", 300).set("bbox_inches", "tight");

        assert_eq!(options.get("dpi"), Some(&Value::from(300)));
        assert_eq!(options.get("bbox_inches"), Some(&Value::from("tight")));
        assert_eq!(options.get("transparent"), None);
    }
}
