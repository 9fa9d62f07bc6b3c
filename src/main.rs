#![forbid(unsafe_code)]
//! NebulaForge Command Line Interface

use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use nebulaforge::commands::{execute_generate, GenerateOptions};
use nebulaforge::vocab;
use nebulaforge::{Config, OutputFormat};

#[derive(Parser)]
#[command(name = "nebulaforge")]
#[command(about = "Spin up new solo project directions with a human-friendly story.")]
#[command(version)]
struct Cli {
    /// How many ideas to show
    #[arg(short, long)]
    count: Option<usize>,

    /// Restrict the output to a particular stack category
    #[arg(short, long, value_parser = PossibleValuesParser::new(vocab::stack_keys()))]
    focus: Option<String>,

    /// Replay the same random stream
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the action plan so each idea reads like a sprint recap
    #[arg(long)]
    detail: bool,

    /// Output format (text, json)
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Config file path (defaults to .nebulaforge.json, then the user config dir)
    #[arg(long, env = "NEBULAFORGE_CONFIG")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match Config::discover(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} Failed to load config: {}", style("✗").red(), e);
            std::process::exit(1);
        }
    };

    let options = GenerateOptions {
        count: cli.count.unwrap_or(config.count),
        focus: cli.focus.or(config.focus),
        seed: cli.seed,
        detail: cli.detail || config.detail,
        format: cli.format.unwrap_or(config.format),
    };

    execute_generate(options)
}
