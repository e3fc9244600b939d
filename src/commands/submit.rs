use anyhow::{Result, bail};
use clap::Args;
use reqwest::Client;

use crate::desk::TicketDesk;
use crate::tickets::{DurationUnit, TicketDraft};
use crate::tickets_client::TicketsClient;

use super::output::ticket_table;

#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Destination city or airport
    #[arg(long)]
    pub destination: String,

    /// Departure city or airport
    #[arg(long)]
    pub departure: String,

    #[arg(long)]
    pub flight_number: String,

    /// Passenger surname and initials
    #[arg(long)]
    pub passenger_name: String,

    /// Desired departure date (YYYY-MM-DD)
    #[arg(long)]
    pub departure_date: String,

    /// Flight duration in the selected unit
    #[arg(long)]
    pub flight_duration: String,

    /// Unit the duration was entered in (defaults to minutes)
    #[arg(long, value_enum)]
    pub duration_unit: Option<DurationUnit>,

    /// Aircraft type, e.g. A320
    #[arg(long)]
    pub aircraft_type: String,
}

/// Validate and submit a new ticket request, then print the refreshed
/// listing. Field errors are printed per field and no request is sent.
pub async fn handle_submit(base_url: &str, args: SubmitArgs) -> Result<()> {
    let draft = TicketDraft {
        destination: args.destination,
        departure: args.departure,
        flight_number: args.flight_number,
        passenger_name: args.passenger_name,
        departure_date: args.departure_date,
        flight_duration: args.flight_duration,
        duration_unit: args.duration_unit,
        aircraft_type: args.aircraft_type,
    };

    let client = TicketsClient::new(Client::new(), base_url);
    let mut desk = TicketDesk::new(client);

    if let Err(errors) = desk.submit(&draft).await {
        for error in &errors {
            eprintln!("{error}");
        }
        bail!("ticket request rejected: {} invalid field(s)", errors.len());
    }

    println!("{}", ticket_table(desk.tickets()));
    Ok(())
}
