use anyhow::Result;
use reqwest::Client;

use crate::desk::TicketDesk;
use crate::tickets_client::TicketsClient;

use super::output::ticket_table;

/// Delete a ticket request by id and print the refreshed listing
pub async fn handle_delete(base_url: &str, id: i64) -> Result<()> {
    let client = TicketsClient::new(Client::new(), base_url);
    let mut desk = TicketDesk::new(client);

    desk.remove(id).await;

    println!("{}", ticket_table(desk.tickets()));
    Ok(())
}
