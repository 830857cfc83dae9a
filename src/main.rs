use anyhow::{anyhow, Context, Result};
use cli::{Cli, Commands, ExportArgs};
use std::path::Path;
use std::process::ExitCode;
use texfig::{footnote, ExportDefaults, FigureExporter, FileFigure, CONFIG_FILE};

mod cli;

fn main() -> ExitCode {
    if let Err(e) = try_main() {
        eprintln!("{}: {e:#}", console::style("Error").red());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Route `log` records from the library through a `tracing` fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` picks between info and debug.
fn init_logging(verbose: bool) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn try_main() -> Result<()> {
    use clap::Parser;
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Config => {
            if Path::new(CONFIG_FILE).exists() {
                return Err(anyhow!("{CONFIG_FILE} already exists, not overwriting it"));
            }
            ExportDefaults::default().save(CONFIG_FILE)?;
            println!("Wrote default settings to {CONFIG_FILE}");
            Ok(())
        }
        Commands::Footnote { notebook, kernel } => {
            println!("{}", footnote(&notebook, &kernel));
            Ok(())
        }
        Commands::Export(args) => export(args),
    }
}

fn export(args: ExportArgs) -> Result<()> {
    let defaults = ExportDefaults::load_or_default(CONFIG_FILE)?;

    let filename = match args.filename {
        Some(filename) => filename,
        None => args
            .input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| anyhow!("`{}` has no file name", args.input.display()))?,
    };

    let mut builder = defaults.request(filename);
    builder
        .caption(args.caption)
        .draft_mode(args.draft || defaults.draft_mode)
        .figure_env(args.figure || defaults.figure_env);
    if let Some(output_type) = args.output_type {
        builder.output_type(output_type);
    }
    if let Some(label) = args.label {
        builder.label(label);
    }
    if let Some(save_dir) = args.save_dir {
        builder.save_dir(save_dir);
    }
    if let Some(graphics_dir) = args.graphics_dir {
        builder.graphics_dir(graphics_dir);
    }
    if let Some(linewidth) = args.linewidth {
        builder.linewidth(linewidth);
    }
    let mut request = builder
        .build()
        .with_context(|| "Failed to build export request")?;
    for (key, value) in args.options {
        request.save_options.set(key, value);
    }

    let mut exporter = FigureExporter::new();
    let figure = FileFigure::new(&args.input);
    if let Some(snippet) = exporter
        .export(&figure, &request)
        .with_context(|| format!("Failed to export `{}`", args.input.display()))?
    {
        println!("{snippet}");
    }
    Ok(())
}
