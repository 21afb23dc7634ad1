//! Cobalt CLI
//!
//! Usage:
//!   cobalt parse patient.json [--type Patient]
//!   cobalt roundtrip fixtures/*.json
//!   cobalt format bundle.json --pretty
//!   cobalt types
//!   cobalt config --preset lenient

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use cobalt_models::{ParserConfig, Preset};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cobalt")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Parse, round-trip and format FHIR R4 JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// More output (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Parser configuration file (YAML)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Drop unknown input and rewrite non-canonical numbers with a warning instead of failing
    #[arg(long, global = true)]
    lenient: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a resource and print a one-line summary
    Parse {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Expected resource type (case-insensitive)
        #[arg(long = "type", value_name = "TYPE")]
        resource_type: Option<String>,
    },

    /// Decode and re-encode resources and report structural differences
    Roundtrip {
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },

    /// Print the canonical JSON of a resource
    Format {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[arg(long)]
        pretty: bool,
    },

    /// List the supported resource types
    Types,

    /// Print a parser configuration as YAML
    Config {
        #[arg(long, value_enum)]
        preset: Option<PresetArg>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum PresetArg {
    Strict,
    Lenient,
}

impl From<PresetArg> for Preset {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Strict => Preset::Strict,
            PresetArg::Lenient => Preset::Lenient,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = resolve_config(cli.config.as_deref(), cli.lenient)?;
    tracing::debug!(?config, "resolved parser configuration");

    match cli.command {
        Command::Parse {
            file,
            resource_type,
        } => commands::parse(&config, &file, resource_type.as_deref()),
        Command::Roundtrip { files } => commands::roundtrip(&config, &files),
        Command::Format { file, pretty } => commands::format(&config, &file, pretty),
        Command::Types => commands::types(),
        Command::Config { preset } => commands::config(&config, preset.map(Preset::from)),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("cobalt={level},cobalt_models={level}"))),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// A configuration file wins over the default preset; `--lenient` then relaxes the
/// handling policies while keeping the file's output settings.
fn resolve_config(path: Option<&std::path::Path>, lenient: bool) -> Result<ParserConfig> {
    let mut config = match path {
        Some(path) => {
            let yaml = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            ParserConfig::from_yaml(&yaml)
                .with_context(|| format!("Invalid config file {}", path.display()))?
        }
        None => ParserConfig::default(),
    };
    if lenient {
        let relaxed = ParserConfig::preset(Preset::Lenient);
        config.unknown_elements = relaxed.unknown_elements;
        config.null_values = relaxed.null_values;
        config.empty_arrays = relaxed.empty_arrays;
        config.number_rewrites = relaxed.number_rewrites;
        config.validate_ids = relaxed.validate_ids;
    }
    Ok(config)
}
