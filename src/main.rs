use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::errors::CliError;
use crate::store::properties::PropertyStore;

mod commands;
mod domain;
mod errors;
mod render;
mod store;

#[derive(Parser)]
#[command(name = "property-cli")]
#[command(about = "A CLI tool for managing property data")]
#[command(version)]
struct Cli {
    /// Path to the backing data file
    #[arg(long, global = true, default_value = "properties.json")]
    data_file: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate random properties
    Generate {
        /// Number of properties to generate
        count: u32,
    },

    /// List all properties
    List,

    /// Show detailed information about a property
    Details {
        /// Index of the property
        index: u32,
    },

    /// Search properties by criteria
    Search(commands::search::SearchArgs),
}

fn main() -> ExitCode {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let mut store = PropertyStore::open(&cli.data_file);

    match &cli.command {
        Commands::Generate { count } => commands::generate::run(&mut store, *count),
        Commands::List => commands::list::run(&store),
        Commands::Details { index } => commands::details::run(&store, *index),
        Commands::Search(args) => commands::search::run(&store, args),
    }
}
