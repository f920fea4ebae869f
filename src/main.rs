//! mk2env CLI entry point
//!
//! Usage:
//!   mk2env config.mk                 Print shell assignments to stdout
//!   mk2env config.mk -o config.env   Write them to a file

use std::fs::File;
use std::io::{self, BufWriter, IsTerminal};
use std::process::ExitCode;

use colored::Colorize;
use tracing_subscriber::EnvFilter;

use mk2env::cli::{parse_args, Cli};
use mk2env::config::load_config;
use mk2env::translate::{translate_file, Header};
use mk2env::ConvertError;

fn main() -> ExitCode {
    if !io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(ConvertError::Info(info)) => {
            // help and version text go to stdout
            if let Err(e) = info.print() {
                return report(&ConvertError::Io(e), false);
            }
            return ExitCode::SUCCESS;
        }
        Err(e) => return report(&e, false),
    };

    init_logging(cli.verbose);
    let verbose = cli.verbose;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e, verbose),
    }
}

fn run(cli: Cli) -> Result<(), ConvertError> {
    let config = load_config(cli.config.as_deref())
        .map_err(|e| ConvertError::Config(format!("{:#}", e)))?;

    let translation =
        translate_file(&cli.file_path())?.with_header(Header::from_config(&config.header));

    match cli.output {
        Some(ref path) => {
            let file = File::create(path)?;
            translation.write_to(BufWriter::new(file))?;
            tracing::info!(
                "Wrote {} assignment(s) to {}",
                translation.len(),
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            translation.write_to(BufWriter::new(stdout.lock()))?;
        }
    }

    Ok(())
}

/// Route tracing to stderr so stdout carries only the generated assignments
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}

/// Print an error to stderr and pick the exit code
fn report(err: &ConvertError, verbose: bool) -> ExitCode {
    if err.is_usage() {
        eprintln!("{}", err);
    } else {
        eprintln!("{}: {}", "Error".red().bold(), err);
    }

    if verbose {
        if let Some(hint) = err.suggestion() {
            eprintln!("{}: {}", "hint".cyan(), hint);
        }
    }

    ExitCode::from(err.exit_code())
}
