//! Command line interface.

pub mod command;

use std::{path::PathBuf, time::Duration};

use clap::{Args, Parser, Subcommand};
use indicatif::ProgressBar;
use tracing::Level;

use crate::{
    paths::{NoPrompt, PathOptions, Prompt, TerminalPrompt},
    reading::{Delimiter, PointFormat},
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Prepares spherical point data for gridding and repairs polar rows afterwards
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Replace an existing output file without asking
    #[arg(long, global = true)]
    pub force: bool,

    /// Never prompt; missing or conflicting files become errors
    #[arg(long, global = true)]
    pub no_input: bool,

    /// Log level
    #[arg(long, global = true, env = "SPHEREPAD_LOG", default_value = "info")]
    pub log_level: Level,
}

impl Cli {
    pub fn path_options(&self) -> PathOptions {
        PathOptions { force: self.force }
    }

    pub fn prompt(&self) -> Box<dyn Prompt> {
        if self.no_input {
            Box::new(NoPrompt)
        } else {
            Box::new(TerminalPrompt)
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pad a spiral points file past the poles and the antimeridian
    Pad {
        #[command(flatten)]
        files: FileArgs,

        #[command(flatten)]
        format: PointFormatArgs,
    },
    /// Replace the polar rows of a grid file with the pole values
    Patch {
        #[command(flatten)]
        files: FileArgs,
    },
    /// Show the pole values of a grid file
    Poles {
        /// Grid file
        input: Option<PathBuf>,
    },
}

#[derive(Args)]
pub struct FileArgs {
    /// File to read
    pub input: Option<PathBuf>,

    /// File to write
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct PointFormatArgs {
    /// Field separator of the input
    #[arg(long, value_enum, default_value_t = Delimiter::Auto)]
    pub delimiter: Delimiter,

    /// The input has no header line
    #[arg(long)]
    pub no_header: bool,

    /// Number of fields after latitude and longitude
    #[arg(long, default_value_t = 3)]
    pub payload_fields: usize,
}

impl From<&PointFormatArgs> for PointFormat {
    fn from(args: &PointFormatArgs) -> Self {
        PointFormat {
            delimiter: args.delimiter,
            has_header: !args.no_header,
            payload_fields: args.payload_fields,
        }
    }
}

/// Creates a spinner.
pub fn create_spinner(message: String) -> ProgressBar {
    let bar = ProgressBar::new_spinner().with_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));

    bar
}
