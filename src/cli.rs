use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use texfig::OutputType;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generates a texfig.toml config file with the default export settings
    Config,
    /// Prints a footnote crediting the notebook that generated a section's code
    Footnote {
        /// Notebook name, without the .ipynb extension
        notebook: String,
        /// Kernel the notebook ran on
        kernel: String,
    },
    /// Exports an already-rendered figure and prints the LaTeX that references it
    Export(ExportArgs),
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// The rendered figure file
    pub input: PathBuf,
    /// Base name of the artifact (defaults to the input's file name)
    #[clap(long)]
    pub filename: Option<String>,
    #[clap(long, value_parser = parse_output_type)]
    pub output_type: Option<OutputType>,
    #[clap(long, default_value = "")]
    pub caption: String,
    #[clap(long)]
    pub label: Option<String>,
    /// Wrap the graphic in a floating figure environment
    #[clap(long)]
    pub figure: bool,
    /// Don't save anything
    #[clap(long)]
    pub draft: bool,
    #[clap(long)]
    pub save_dir: Option<PathBuf>,
    #[clap(long)]
    pub graphics_dir: Option<String>,
    #[clap(long)]
    pub linewidth: Option<f64>,
    /// Extra save option as key=value; the value is parsed as JSON when possible
    #[clap(long = "option", value_parser = parse_key_value)]
    pub options: Vec<(String, serde_json::Value)>,
}

#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Cli {
    /// Print debug output
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

fn parse_output_type(s: &str) -> Result<OutputType, String> {
    s.parse().map_err(|e: texfig::ExportError| e.to_string())
}

fn parse_key_value(s: &str) -> Result<(String, serde_json::Value), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{s}`"))?;
    let value = serde_json::from_str(value)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn key_values_parse_json_or_fall_back_to_strings() {
        assert_eq!(
            parse_key_value("dpi=300").unwrap(),
            ("dpi".to_string(), serde_json::json!(300))
        );
        assert_eq!(
            parse_key_value("bbox_inches=tight").unwrap(),
            ("bbox_inches".to_string(), serde_json::json!("tight"))
        );
        assert!(parse_key_value("nonsense").is_err());
    }

    #[test]
    fn can_parse_export_command() {
        let cli = Cli::parse_from([
            "texfig",
            "export",
            "plot.pdf",
            "--output-type",
            "pdf",
            "--figure",
            "--option",
            "dpi=300",
        ]);
        let Commands::Export(args) = cli.command else {
            panic!("expected export command");
        };
        assert_eq!(args.output_type, Some(OutputType::Pdf));
        assert!(args.figure);
        assert_eq!(args.options.len(), 1);
    }

    #[test]
    fn verbose_flag_is_global() {
        let cli = Cli::parse_from(["texfig", "footnote", "analysis", "python3", "-v"]);
        assert!(cli.verbose);
        assert!(!Cli::parse_from(["texfig", "config"]).verbose);
    }

    #[test]
    fn rejects_unknown_output_type() {
        assert!(Cli::try_parse_from(["texfig", "export", "plot.svg", "--output-type", "svg"]).is_err());
    }
}
