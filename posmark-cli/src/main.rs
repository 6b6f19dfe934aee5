//! Posmark CLI - Command line interface
//!
//! Tokenizes a file (or stdin) and prints every token with its source position.

use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, info, Level};

mod platform;

use crate::platform::print_error_with_source;
use posmark::config::{self, parse_level, Config};
use posmark::logger::{self, LogFormat};
use posmark::{tokenize_with_config, Baseline, FileConfig, TokenizeOutput};

#[derive(Parser)]
#[command(
    name = "posmark",
    about = "Print the tokens of a source file with their positions",
    version = "0.1.0"
)]
struct Cli {
    /// Input file (default: stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Line / column baseline: 0 or 1
    #[arg(long, value_parser = parse_baseline)]
    baseline: Option<Baseline>,

    /// Property name positions are attached under
    #[arg(long)]
    property: Option<String>,

    /// Source label copied into every position (default: the input path)
    #[arg(long)]
    source: Option<String>,

    /// Print tokens as JSON
    #[arg(long)]
    json: bool,

    /// Log format: pretty, compact, json
    #[arg(long, value_parser = parse_log_format, default_value = "compact")]
    log_format: LogFormat,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn parse_baseline(s: &str) -> Result<Baseline, String> {
    Baseline::parse(s).ok_or_else(|| format!("invalid baseline '{}', expected 0 or 1", s))
}

fn parse_log_format(s: &str) -> Result<LogFormat, String> {
    LogFormat::parse(s).ok_or_else(|| format!("invalid log format '{}'", s))
}

fn main() {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = logger::init_with_file(&config.log, cli.log_format, cli.log_file.as_ref()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let baseline = config.cursor.baseline;
    if let Err(e) = config::init(config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let source = match read_source(cli.input.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    info!(target: "posmark::cli", bytes = source.len(), "Read source");

    match tokenize_with_config(&source, config::config()) {
        Ok(output) => {
            if cli.json {
                match serde_json::to_string_pretty(&output) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: cannot serialize tokens: {}", e);
                        process::exit(1);
                    }
                }
            } else {
                print_tokens(&output);
            }
        }
        Err(e) => {
            print_error_with_source(&e, &source, baseline);
            process::exit(1);
        }
    }
}

/// Merge the config file and command line flags; flags win
fn build_config(cli: &Cli) -> Result<Config, String> {
    let file = match &cli.config {
        Some(path) => read_file_config(path)?,
        None => FileConfig::default(),
    };
    let mut config = Config::from_file(&file);

    if let Some(baseline) = cli.baseline {
        config.cursor.baseline = baseline;
    }
    if let Some(property) = &cli.property {
        config.position.property = property.clone();
    }
    if let Some(source) = &cli.source {
        config.cursor.source = Some(source.clone());
    } else if config.cursor.source.is_none() {
        config.cursor.source = cli.input.as_ref().map(|p| p.display().to_string());
    }

    config.log.global = match cli.log_level.as_deref().or(file.log_level.as_deref()) {
        Some(s) => parse_level(s).ok_or_else(|| format!("invalid log level '{}'", s))?,
        None => Level::WARN,
    };

    Ok(config)
}

/// Read and parse the JSON configuration file
fn read_file_config(path: &Path) -> Result<FileConfig, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
    serde_json::from_str(&content).map_err(|e| format!("cannot parse '{}': {}", path.display(), e))
}

fn read_source(input: Option<&Path>) -> Result<String, String> {
    match input {
        Some(path) => {
            debug!(target: "posmark::cli", path = %path.display(), "Reading input file");
            std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read input file '{}': {}", path.display(), e))
        }
        None => {
            debug!(target: "posmark::cli", "Reading stdin");
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .map_err(|e| format!("cannot read stdin: {}", e))?;
            Ok(source)
        }
    }
}

/// One line per token: kind, value, offset range, line:col span
fn print_tokens(output: &TokenizeOutput) {
    for token in &output.tokens {
        let value = format!("{:?}", token.value);
        match token.positions.get(&output.property) {
            Some(position) => {
                let [start, end] = position.range();
                println!("{:<8} {:<16} [{}, {}] {}", token.kind, value, start, end, position);
            }
            None => println!("{:<8} {}", token.kind, value),
        }
    }
}
