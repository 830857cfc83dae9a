//! LaTeX markup returned to the caller.

use crate::output_type::OutputType;
use std::fmt;

/// A piece of LaTeX ready to be pasted into (or rendered by) a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet(String);

impl Snippet {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Snippet {
    fn from(s: String) -> Self {
        Snippet(s)
    }
}

/// The command that pulls the artifact at `path` into the document.
pub fn graphics_command(output_type: OutputType, linewidth: f64, path: &str) -> String {
    match output_type {
        OutputType::Pgf => format!("\\input{{{path}}}"),
        OutputType::Pdf => format!("\\includegraphics[width={linewidth}\\linewidth]{{{path}}}"),
    }
}

/// How the graphics command gets wrapped.
#[derive(Debug, Clone, Copy)]
pub enum Wrapper<'a> {
    /// A numbered floating `figure` environment
    Figure { caption: &'a str, label: &'a str },
    /// A centred, scaled block with `\captionof` so it can sit outside a float
    Center {
        linewidth: f64,
        caption: &'a str,
        label: &'a str,
    },
}

impl Wrapper<'_> {
    pub fn wrap(&self, command: &str) -> Snippet {
        let text = match self {
            Wrapper::Figure { caption, label } => format!(
                "\\begin{{figure}}\n\\centering\n{command}\n\\caption{{{caption}}}\n\\label{{{label}}}\n\\end{{figure}}\n"
            ),
            Wrapper::Center {
                linewidth,
                caption,
                label,
            } => format!(
                "\\begin{{center}}\n\\resizebox{{{linewidth}\\linewidth}}{{!}}{{\n{command}\n}}\n\\captionof{{figure}}{{{caption}}}\n\\label{{{label}}}\\end{{center}}"
            ),
        };
        Snippet(text)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pgf_is_input() {
        assert_eq!(
            graphics_command(OutputType::Pgf, 1.0, "source/chart_1.pgf"),
            r"\input{source/chart_1.pgf}"
        );
    }

    #[test]
    fn pdf_is_included_at_linewidth() {
        assert_eq!(
            graphics_command(OutputType::Pdf, 0.8, "source/chart_1.pdf"),
            r"\includegraphics[width=0.8\linewidth]{source/chart_1.pdf}"
        );
        assert_eq!(
            graphics_command(OutputType::Pdf, 1.0, "source/chart_1.pdf"),
            r"\includegraphics[width=1\linewidth]{source/chart_1.pdf}"
        );
    }

    #[test]
    fn figure_wrapper_is_a_float() {
        let snippet = Wrapper::Figure {
            caption: "A chart",
            label: "fig:chart",
        }
        .wrap(r"\input{source/chart_1.pgf}");

        assert_eq!(
            snippet.as_str(),
            "\\begin{figure}\n\\centering\n\\input{source/chart_1.pgf}\n\\caption{A chart}\n\\label{fig:chart}\n\\end{figure}\n"
        );
    }

    #[test]
    fn center_wrapper_uses_captionof() {
        let snippet = Wrapper::Center {
            linewidth: 0.5,
            caption: "",
            label: "chart_2",
        }
        .wrap(r"\input{source/chart_2.pgf}");

        assert_eq!(snippet.to_string(), snippet.as_str());
        assert_eq!(
            snippet.into_string(),
            "\\begin{center}\n\\resizebox{0.5\\linewidth}{!}{\n\\input{source/chart_2.pgf}\n}\n\\captionof{figure}{}\n\\label{chart_2}\\end{center}"
        );
    }
}
