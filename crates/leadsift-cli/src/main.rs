mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{phone, process, Context};
use crate::error::{exit_code_for, report_error};
use leadsift_config as config;

#[derive(Debug, Parser)]
#[command(name = "leadsift", version, about = "leadsift CLI")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Clean, deduplicate and batch a contact sheet into a zip archive
    Process(process::ProcessArgs),
    /// Normalize phone values without reading a sheet
    #[command(name = "check-phone")]
    CheckPhone(phone::CheckPhoneArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        json,
        command,
        ..
    } = cli;

    match command {
        Command::CheckPhone(args) => phone::check_phone(json, args),
        Command::Process(args) => {
            let app_config = config::load(config_path).with_context(|| "load config")?;
            match &app_config.source {
                Some(path) => debug!(path = %path.display(), "config loaded"),
                None => debug!("no config file, using defaults"),
            }

            let ctx = Context {
                json,
                config: &app_config,
            };
            process::process(&ctx, args)
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
