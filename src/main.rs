mod cli;
mod deserialise;
mod error;
mod output;
mod padding;
mod paths;
mod patching;
mod reading;

use std::process::ExitCode;

use anyhow::{Error, Result};
use clap::Parser;
use cli::{command, Cli, Commands};
use error::SpherePadError;
use paths::{resolve_input, resolve_io};
use tracing_subscriber::FmtSubscriber;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Logging was already initialised");
    }

    match run(&cli) {
        Ok(Some(filename)) => {
            println!("File saved to `{}`", filename);
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}

fn run(cli: &Cli) -> Result<Option<String>> {
    let mut prompt = cli.prompt();

    match &cli.command {
        Commands::Pad { files, format } => {
            let paths = resolve_io(
                files.input.clone(),
                files.output.clone(),
                cli.path_options(),
                prompt.as_mut(),
            )?;
            command::pad(&paths, &format.into()).map(Some)
        }
        Commands::Patch { files } => {
            let paths = resolve_io(
                files.input.clone(),
                files.output.clone(),
                cli.path_options(),
                prompt.as_mut(),
            )?;
            command::patch(&paths).map(Some)
        }
        Commands::Poles { input } => {
            let input = resolve_input(input.clone(), prompt.as_mut())?;
            command::poles(&input).map(|_| None)
        }
    }
}

/// Exit code of the first known failure in the error chain.
fn exit_code(e: &Error) -> u8 {
    e.chain()
        .find_map(|cause| cause.downcast_ref::<SpherePadError>())
        .map(SpherePadError::exit_code)
        .unwrap_or(1)
}
