use crate::snippet::Snippet;

/// Credit the notebook (and its kernel) that generated the code in a section.
///
/// Both names are substituted as-is; nothing is escaped.
pub fn footnote(notebook_name: &str, kernel_name: &str) -> Snippet {
    Snippet::from(format!(
        "\\footnotetext{{Python code in this section was generated from a Jupyter notebook named \\mintinline{{bash}}{{{notebook_name}.ipynb}} with a \\texttt{{{kernel_name}}} kernel.}}"
    ))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn footnote_fills_in_the_template() {
        assert_eq!(
            footnote("analysis", "python3").as_str(),
            r"\footnotetext{Python code in this section was generated from a Jupyter notebook named \mintinline{bash}{analysis.ipynb} with a \texttt{python3} kernel.}"
        );
    }

    #[test]
    fn footnote_accepts_anything() {
        let note = footnote("", "my kernel_{x}");
        assert!(note.as_str().contains(r"\mintinline{bash}{.ipynb}"));
        assert!(note.as_str().contains(r"\texttt{my kernel_{x}}"));
    }
}
