use anyhow::Result;
use reqwest::Client;

use crate::desk::TicketDesk;
use crate::tickets_client::TicketsClient;

use super::output::ticket_table;

/// Fetch and print the ticket listing.
///
/// The listing is filtered only when both the flight number and the
/// departure date are given; a single filter field behaves as no filter.
pub async fn handle_list(
    base_url: &str,
    flight_number: Option<String>,
    departure_date: Option<String>,
) -> Result<()> {
    let client = TicketsClient::new(Client::new(), base_url);
    let mut desk = TicketDesk::new(client);

    desk.set_filter(
        flight_number.unwrap_or_default(),
        departure_date.unwrap_or_default(),
    );
    desk.refresh().await;

    println!("{}", ticket_table(desk.tickets()));
    Ok(())
}
