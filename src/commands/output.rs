use tabled::{builder::Builder, settings::Style};

use crate::tickets::TicketRequest;

/// Render the result table: numbered rows, duration shown in hours to two
/// decimals, and the flight-tracking link per row.
pub fn ticket_table(tickets: &[TicketRequest]) -> String {
    if tickets.is_empty() {
        return "No tickets found".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(vec![
        "#",
        "Destination",
        "Departure",
        "Flight",
        "Passenger",
        "Date",
        "Duration (h)",
        "Tracking",
    ]);

    for (index, ticket) in tickets.iter().enumerate() {
        builder.push_record(vec![
            (index + 1).to_string(),
            ticket.destination.clone(),
            ticket.departure.clone(),
            ticket.flight_number.clone(),
            ticket.passenger_name.clone(),
            ticket.departure_date.to_string(),
            format!("{:.2}", ticket.duration_hours()),
            ticket.tracking_url(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}
