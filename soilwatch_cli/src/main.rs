use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use soilwatch_core::range_token::RangeToken;

mod feed_commands;
mod normalize;
mod parsers;
mod schema;
mod table;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and print the latest reading
    Latest,
    /// Fetch and print every reading of a time window
    #[command(visible_alias = "h")]
    History {
        /// One of 1h, 24h, 2d, 7d
        #[arg(short, long, default_value = "1h", value_parser = parsers::parse_range_token)]
        range: RangeToken,
    },
    /// Convert a raw sensor value into a moisture percentage
    #[command(allow_negative_numbers = true)]
    Normalize {
        raw: f64,

        /// Fully wet sensor value (defaults to SOILWATCH_SENSOR_MIN or 460)
        #[arg(long)]
        min: Option<f64>,

        /// Fully dry sensor value (defaults to SOILWATCH_SENSOR_MAX or 1023)
        #[arg(long)]
        max: Option<f64>,
    },
    /// Print the JSON schema of the readings returned by `/range`
    Schema {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Latest) => feed_commands::latest().await?,
        Some(Commands::History { range }) => feed_commands::history(range).await?,
        Some(Commands::Normalize { raw, min, max }) => normalize::run(raw, min, max)?,
        Some(Commands::Schema { output }) => schema::run(output)?,
        None => {
            // Handle no command provided
        }
    }

    Ok(())
}
