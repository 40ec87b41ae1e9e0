//! fieldview CLI - render form responses under a presentation config.

#![allow(
    clippy::needless_pass_by_value,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::fn_params_excessive_bools,
    clippy::struct_excessive_bools
)]

mod logging;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use fieldview::{
    visible_style_keys, ConfigError, FieldNormalizer, LayoutId, PresentationConfig,
    PresentationEngine, SortMode,
};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;

#[derive(Parser)]
#[command(name = "fieldview")]
#[command(about = "Render form responses with configurable layouts")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a response file to a render tree
    Render {
        /// Response JSON file, or `-` for stdin
        response: PathBuf,

        #[command(flatten)]
        display: DisplayArgs,

        /// Search query
        #[arg(short, long)]
        search: Option<String>,

        /// Hide fields without a value
        #[arg(long)]
        hide_empty: bool,

        /// Sort mode (original, alphabetical, filled-first, empty-first)
        #[arg(long)]
        sort: Option<String>,

        /// Group fields by category
        #[arg(short, long)]
        group: bool,

        /// Mark fields as copyable
        #[arg(long)]
        copy: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the normalized fields of a response file
    Normalize {
        /// Response JSON file, or `-` for stdin
        response: PathBuf,

        /// Config file providing a field mapping (.yaml, .toml or .json)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List layouts and the style keys each one reads
    Layouts,

    /// List the style properties the editor shows for a configuration
    Visible {
        #[command(flatten)]
        display: DisplayArgs,
    },
}

#[derive(clap::Args)]
struct DisplayArgs {
    /// Config file (.yaml, .toml or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Layout id, overriding the config
    #[arg(short, long)]
    layout: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Indented outline
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),

    #[error("cannot serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(cli.command, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Commands::Render {
            response,
            display,
            search,
            hide_empty,
            sort,
            group,
            copy,
            format,
        } => {
            let mut config = load_config(display.config.as_deref())?;
            apply_layout(&mut config, display.layout);
            let pipeline = &mut config.settings.pipeline;
            if let Some(query) = search {
                pipeline.search_query = query;
            }
            if let Some(mode) = sort {
                pipeline.sort_mode = SortMode::parse_lenient(&mode);
            }
            pipeline.hide_empty |= hide_empty;
            pipeline.grouping_enabled |= group;
            config.settings.enable_copy_to_clipboard |= copy;

            let raw = read_response(&response)?;
            render(&raw, &config, format, out)
        }
        Commands::Normalize { response, config } => {
            let config = load_config(config.as_deref())?;
            let normalizer = config
                .field_mapping
                .map_or_else(FieldNormalizer::new, FieldNormalizer::with_mapping);
            let raw = read_response(&response)?;
            let normalized = normalizer.normalize(&raw);
            tracing::info!(id = %normalized.id, fields = normalized.len(), "normalized response");
            serde_json::to_writer_pretty(&mut *out, &normalized)?;
            writeln!(out)?;
            Ok(())
        }
        Commands::Layouts => list_layouts(out),
        Commands::Visible { display } => {
            let mut config = load_config(display.config.as_deref())?;
            apply_layout(&mut config, display.layout);
            list_visible(&config, out)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<PresentationConfig, CliError> {
    match path {
        Some(path) => {
            let config = PresentationConfig::load(path)?;
            tracing::info!(path = %path.display(), layout = %config.settings.layout, "loaded config");
            Ok(config)
        }
        None => Ok(PresentationConfig::default()),
    }
}

fn apply_layout(config: &mut PresentationConfig, layout: Option<String>) {
    if let Some(layout) = layout {
        config.settings.layout = layout;
    }
}

fn read_response(path: &Path) -> Result<serde_json::Value, CliError> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        text
    } else {
        std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?
    };
    // malformed input renders the empty state like any other bad record
    Ok(serde_json::from_str(&text).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %e, "response is not valid JSON");
        serde_json::Value::Null
    }))
}

fn render(
    raw: &serde_json::Value,
    config: &PresentationConfig,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let tree = PresentationEngine::for_config(config).present_config(raw, config);
    match format {
        OutputFormat::Text => out.write_all(tree.to_outline().as_bytes())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &tree)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn list_layouts(out: &mut impl Write) -> Result<(), CliError> {
    for layout in LayoutId::ALL {
        let keys: Vec<&str> = layout
            .descriptor()
            .style_keys
            .iter()
            .map(|k| k.as_str())
            .collect();
        writeln!(out, "{:<10} {}", layout.as_str(), keys.join(", "))?;
    }
    Ok(())
}

fn list_visible(config: &PresentationConfig, out: &mut impl Write) -> Result<(), CliError> {
    let layout = config.settings.layout_id();
    writeln!(out, "layout: {layout}")?;
    for key in visible_style_keys(config) {
        writeln!(out, "  {:<28} {}", key.as_str(), config.style.get(key))?;
    }
    Ok(())
}
