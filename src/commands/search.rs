use anyhow::Result;
use reqwest::Client;

use crate::desk::TicketDesk;
use crate::tickets_client::TicketsClient;

use super::output::ticket_table;

/// Query the dedicated search endpoint and print the result table.
///
/// Unlike the plain listing, both parameters are sent even when empty.
pub async fn handle_search(
    base_url: &str,
    flight_number: String,
    departure_date: String,
) -> Result<()> {
    let client = TicketsClient::new(Client::new(), base_url);
    let mut desk = TicketDesk::new(client);

    desk.set_filter(flight_number, departure_date);
    desk.search().await;

    println!("{}", ticket_table(desk.tickets()));
    Ok(())
}
