use anyhow::Result;
use clap::{Parser, Subcommand};
use std::env;
use tracing_subscriber::EnvFilter;

use skybook::commands::{self, SubmitArgs};
use skybook::tickets_client::DEFAULT_BASE_URL;

#[derive(Parser, Debug)]
#[command(
    name = "skybook",
    about = "Manage airline ticket requests against a remote collection service."
)]
struct Cli {
    /// Base URL of the ticket collection service
    /// (falls back to SKYBOOK_BASE_URL, then the production default)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List ticket requests, optionally filtered by flight number and date
    List {
        #[arg(long)]
        flight_number: Option<String>,
        /// Departure date (YYYY-MM-DD)
        #[arg(long)]
        departure_date: Option<String>,
    },
    /// Query the search endpoint (both parameters are sent even when empty)
    Search {
        #[arg(long, default_value = "")]
        flight_number: String,
        #[arg(long, default_value = "")]
        departure_date: String,
    },
    /// Validate and submit a new ticket request
    Submit(SubmitArgs),
    /// Delete a ticket request by id
    Delete { id: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let base_url = cli
        .base_url
        .or_else(|| env::var("SKYBOOK_BASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    match cli.command {
        Commands::List {
            flight_number,
            departure_date,
        } => commands::handle_list(&base_url, flight_number, departure_date).await,
        Commands::Search {
            flight_number,
            departure_date,
        } => commands::handle_search(&base_url, flight_number, departure_date).await,
        Commands::Submit(args) => commands::handle_submit(&base_url, args).await,
        Commands::Delete { id } => commands::handle_delete(&base_url, id).await,
    }
}
