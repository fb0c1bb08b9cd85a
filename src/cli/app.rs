//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use super::commands;
use earthling::output::OutputMode;

/// earthling - Character roster fetcher and server
#[derive(Parser, Debug)]
#[command(
    name = "earthling",
    version,
    about = "Fetch and filter Rick and Morty character rosters",
    long_about = "Walks the paginated character API to completion, keeps the\n\
                  living humans from Earth, and either serves the result over\n\
                  HTTP (JSON, CSV, health probe) or writes it to a CSV file."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the filtered roster over HTTP
    Serve {
        /// Port to bind on all interfaces (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Fetch, filter, and write the roster to a CSV file
    Export {
        /// Output file path (overwritten if it exists)
        #[arg(short, long, default_value = "characters.csv")]
        output: String,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Serve { port }) => commands::serve(port),
        Some(Command::Export { output }) => commands::export(&output, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("earthling v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("earthling v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'earthling --help' for usage");
                println!("Run 'earthling serve' to start the HTTP server");
                println!("Run 'earthling export' to write characters.csv");
            }
            Ok(())
        },
    }
}
