//! Command implementations for the GED CLI.
//!
//! Provides subcommands for downloading the constituency dataset and
//! inspecting the views the dashboard derives from it.

use clap::{Subcommand, ValueEnum};

pub mod fetch;
pub mod view;

/// Static figures that can be dumped as JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FigureName {
    Bar,
    Box,
    Malay,
    Chinese,
}

#[derive(Subcommand)]
pub enum Command {
    /// Download the constituency CSV, keep the dashboard columns and write it sorted by electors
    Fetch {
        /// Output path for the projected CSV
        #[arg(short = 'o', long)]
        output: String,

        /// Source URL (defaults to the published aggregate dataset)
        #[arg(long)]
        url: Option<String>,
    },

    /// List the elector range options (label and value)
    Ranges,

    /// Show the constituencies inside an elector range
    Filter {
        /// Range value, e.g. 200001-250000
        #[arg(short = 'r', long)]
        range: String,

        /// Local CSV to filter instead of the built-in ten-row sample
        #[arg(long)]
        csv: Option<String>,
    },

    /// Print a dashboard figure as JSON
    Figure {
        #[arg(value_enum)]
        name: FigureName,

        /// Local CSV to use instead of downloading the dataset
        #[arg(long)]
        csv: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch { output, url } => fetch::run_fetch(&output, url.as_deref()).await,
        Command::Ranges => {
            print!("{}", view::ranges_table());
            Ok(())
        }
        Command::Filter { range, csv } => view::run_filter(&range, csv.as_deref()),
        Command::Figure { name, csv } => view::run_figure(name, csv.as_deref()).await,
    }
}
