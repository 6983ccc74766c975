//! wprof - profile-marker resolution and consistency checking

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wprof_cli::{hint, CliConfig, Command, ExitStatus};

/// Resolve which annotated rules are active under a profile
#[derive(Parser, Debug)]
#[command(name = "wprof")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Configuration file (defaults to ./wprof.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Reject markers that are not declared before use
    #[arg(long, global = true)]
    strict: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn load_config(args: &Args) -> Result<CliConfig> {
    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    let mut config = CliConfig::load(args.config.as_deref(), &cwd)?;
    config.apply_flags(args.strict, args.json);
    Ok(config)
}

fn run(args: &Args) -> Result<ExitStatus> {
    let config = load_config(args)?;
    let outcome = args.command.run(&config)?;
    if !outcome.output.is_empty() {
        println!("{}", outcome.output);
    }
    Ok(outcome.status)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("error: {:#}", err);
            if let Some(hint) = hint(&err) {
                eprintln!("hint: {}", hint);
            }
            ExitStatus::Failure.into()
        }
    }
}
