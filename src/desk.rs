//! Transient application state over the record store client.
//!
//! The desk keeps one displayed list, replaced wholesale on each successful
//! fetch, plus the active filter fields entered by the user. Fetch
//! and mutation failures are logged and swallowed here, leaving the prior
//! list untouched; callers wanting explicit errors use [`TicketsClient`]
//! directly.

use tracing::warn;

use crate::tickets::{TicketDraft, TicketFilter, TicketRequest};
use crate::tickets_client::TicketsClient;
use crate::validation::{self, FieldError};

pub struct TicketDesk {
    client: TicketsClient,
    tickets: Vec<TicketRequest>,
    filter: TicketFilter,
}

impl TicketDesk {
    pub fn new(client: TicketsClient) -> Self {
        Self {
            client,
            tickets: Vec::new(),
            filter: TicketFilter::default(),
        }
    }

    /// The currently displayed tickets
    pub fn tickets(&self) -> &[TicketRequest] {
        &self.tickets
    }

    pub fn filter(&self) -> &TicketFilter {
        &self.filter
    }

    pub fn set_filter(
        &mut self,
        flight_number: impl Into<String>,
        departure_date: impl Into<String>,
    ) {
        self.filter = TicketFilter::new(flight_number, departure_date);
    }

    /// Refetch the listing with the current filter.
    ///
    /// On failure the previously displayed list is kept.
    pub async fn refresh(&mut self) {
        match self.client.list(Some(&self.filter)).await {
            Ok(tickets) => self.tickets = tickets,
            Err(e) => warn!("Failed to fetch tickets: {e:#}"),
        }
    }

    /// Query the dedicated search endpoint with the current filter fields,
    /// sent even when empty.
    pub async fn search(&mut self) {
        let result = self
            .client
            .search(&self.filter.flight_number, &self.filter.departure_date)
            .await;
        match result {
            Ok(tickets) => self.tickets = tickets,
            Err(e) => warn!("Failed to search tickets: {e:#}"),
        }
    }

    /// Validate a draft and submit it.
    ///
    /// Field errors are returned to the caller without any network call.
    /// A create failure is logged and the prior state kept; on success the
    /// listing is refreshed so the new record shows up.
    pub async fn submit(&mut self, draft: &TicketDraft) -> Result<(), Vec<FieldError>> {
        let submission = validation::validate(draft)?;
        match self.client.create(&submission).await {
            Ok(_) => self.refresh().await,
            Err(e) => warn!("Failed to add ticket: {e:#}"),
        }
        Ok(())
    }

    /// Delete a record by id, refreshing the listing on success
    pub async fn remove(&mut self, id: i64) {
        match self.client.delete(id).await {
            Ok(()) => self.refresh().await,
            Err(e) => warn!("Failed to delete ticket {id}: {e:#}"),
        }
    }

    /// Blank both filter fields and refetch the unfiltered collection
    pub async fn clear_filters(&mut self) {
        self.filter = TicketFilter::default();
        self.refresh().await;
    }
}
