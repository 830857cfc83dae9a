use crate::error::ExportError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The file format a figure is exported as.
#[derive(Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Debug, Default)]
pub enum OutputType {
    /// Vector output that LaTeX pulls in as text with `\input`
    #[serde(rename = "pgf")]
    #[default]
    Pgf,
    /// Image output placed with `\includegraphics`
    #[serde(rename = "pdf")]
    Pdf,
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl OutputType {
    pub fn name(&self) -> &'static str {
        match self {
            OutputType::Pgf => "pgf",
            OutputType::Pdf => "pdf",
        }
    }

    /// File extension of the written artifact, without the leading dot.
    pub fn extension(&self) -> &'static str {
        self.name()
    }

    pub fn all() -> &'static [OutputType] {
        &[OutputType::Pgf, OutputType::Pdf]
    }

    fn accepted() -> String {
        OutputType::all()
            .iter()
            .map(OutputType::name)
            .collect::<Vec<&str>>()
            .join(", ")
    }
}

impl FromStr for OutputType {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputType::all()
            .iter()
            .copied()
            .find(|output_type| output_type.name() == s)
            .ok_or_else(|| ExportError::UnsupportedOutputType {
                given: s.to_string(),
                accepted: OutputType::accepted(),
            })
    }
}
