use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use tracing::{debug, info};

use crate::tickets::{TicketFilter, TicketRequest, TicketSubmission};

/// Default location of the remote ticket collection service
pub const DEFAULT_BASE_URL: &str = "https://airlineticketsmanage.azurewebsites.net";

const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// Client for the remote ticket request collection endpoint.
///
/// Each operation is a single round-trip with no retry or backoff. Failures
/// (transport errors and non-success statuses alike) come back as explicit
/// errors; whether to surface or swallow them is the caller's choice.
#[derive(Clone)]
pub struct TicketsClient {
    client: Client,
    base_url: String,
}

impl TicketsClient {
    /// Create a new client against the given service base URL
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Create a new client against the production service
    pub fn with_default_base_url(client: Client) -> Self {
        Self::new(client, DEFAULT_BASE_URL)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the ticket collection.
    ///
    /// The listing is filtered only when both filter fields are non-empty;
    /// otherwise the full collection is requested with no query parameters.
    pub async fn list(&self, filter: Option<&TicketFilter>) -> Result<Vec<TicketRequest>> {
        let url = format!("{}/tickets", self.base_url);
        let mut request = self.client.get(&url).timeout(REQUEST_TIMEOUT);

        match filter.filter(|f| f.is_active()) {
            Some(filter) => {
                debug!(
                    "Listing tickets for flight {} on {}",
                    filter.flight_number, filter.departure_date
                );
                request = request.query(&[
                    ("flightNumber", filter.flight_number.as_str()),
                    ("departureDate", filter.departure_date.as_str()),
                ]);
            }
            None => debug!("Listing all tickets"),
        }

        let response = request
            .send()
            .await
            .context("Failed to send ticket listing request")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("Ticket service error {}: {}", status, body));
        }

        let tickets: Vec<TicketRequest> = response
            .json()
            .await
            .context("Failed to parse ticket listing response")?;

        info!("Fetched {} tickets", tickets.len());
        Ok(tickets)
    }

    /// Search the dedicated search endpoint.
    ///
    /// Both parameters are always sent, even when empty.
    pub async fn search(
        &self,
        flight_number: &str,
        departure_date: &str,
    ) -> Result<Vec<TicketRequest>> {
        debug!(
            "Searching tickets for flight '{}' on '{}'",
            flight_number, departure_date
        );

        let url = format!("{}/tickets/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("flightNumber", flight_number),
                ("departureDate", departure_date),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .context("Failed to send ticket search request")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("Ticket service error {}: {}", status, body));
        }

        let tickets: Vec<TicketRequest> = response
            .json()
            .await
            .context("Failed to parse ticket search response")?;

        info!("Search returned {} tickets", tickets.len());
        Ok(tickets)
    }

    /// Submit a normalized ticket request and return the created record
    pub async fn create(&self, submission: &TicketSubmission) -> Result<TicketRequest> {
        debug!(
            "Creating ticket request for flight {} to {}",
            submission.flight_number, submission.destination
        );

        let url = format!("{}/tickets", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(submission)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .context("Failed to send ticket creation request")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("Ticket service error {}: {}", status, body));
        }

        let created: TicketRequest = response
            .json()
            .await
            .context("Failed to parse ticket creation response")?;

        info!("Created ticket request {}", created.id);
        Ok(created)
    }

    /// Remove a ticket request by id
    pub async fn delete(&self, id: i64) -> Result<()> {
        debug!("Deleting ticket request {}", id);

        let url = format!("{}/tickets/{}", self.base_url, id);
        let response = self
            .client
            .delete(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .context("Failed to send ticket deletion request")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("Ticket service error {}: {}", status, body));
        }

        info!("Deleted ticket request {}", id);
        Ok(())
    }
}
