//! CLI frontend for the fortune teller.

mod commands;
mod render;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::SessionArgs;

#[derive(Parser)]
#[command(
    name = "fortune",
    about = "Fortune teller — enter a lucky number, receive your fortune",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reveal the fortune for a lucky number
    Reveal {
        /// Lucky number (0-9999)
        #[arg(allow_hyphen_values = true)]
        number: String,

        /// Print the fortune as JSON instead of the result card
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        session: SessionArgs,
    },

    /// Read lucky numbers and commands from stdin
    Interactive {
        #[command(flatten)]
        session: SessionArgs,
    },

    /// Summarize the loaded data tables
    Tables {
        /// Directory containing the table files
        #[arg(short, long, default_value = "data")]
        data: std::path::PathBuf,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Reveal {
            number,
            json,
            session,
        } => commands::reveal::run(&session, &number, json),
        Commands::Interactive { session } => commands::interactive::run(&session),
        Commands::Tables { data } => commands::tables::run(&data),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
