use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// External flight-tracking view; ticket rows link their flight number here.
pub const FLIGHT_TRACKING_BASE_URL: &str = "https://www.flightaware.com/live/flight";

pub(crate) const MINUTES_PER_HOUR: f64 = 60.0;

/// Unit a flight duration was entered in.
///
/// Input-only: the store always receives minutes, so this never appears in
/// a submission payload or a fetched record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    #[default]
    Minutes,
    Hours,
}

/// A ticket request as held by the remote collection service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRequest {
    /// Assigned by the remote store; used as the deletion key
    pub id: i64,
    pub destination: String,
    pub departure: String,
    pub flight_number: String,
    pub passenger_name: String,
    pub departure_date: NaiveDate,
    /// Always minutes once persisted
    pub flight_duration: f64,
    pub aircraft_type: String,
}

impl TicketRequest {
    /// Flight duration in hours, the unit the result table displays.
    pub fn duration_hours(&self) -> f64 {
        self.flight_duration / MINUTES_PER_HOUR
    }

    /// Link into the external flight-tracking view for this flight number.
    pub fn tracking_url(&self) -> String {
        format!("{}/{}", FLIGHT_TRACKING_BASE_URL, self.flight_number)
    }
}

/// Normalized payload POSTed to the collection endpoint.
///
/// Identical to [`TicketRequest`] minus the id, with `flight_duration`
/// already converted to minutes and the entry unit dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSubmission {
    pub destination: String,
    pub departure: String,
    pub flight_number: String,
    pub passenger_name: String,
    pub departure_date: NaiveDate,
    pub flight_duration: f64,
    pub aircraft_type: String,
}

/// Raw form input for a new ticket request, before validation.
///
/// Date and duration are kept as entered text; the validation pipeline
/// parses them and reports per-field problems.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketDraft {
    pub destination: String,
    pub departure: String,
    pub flight_number: String,
    pub passenger_name: String,
    pub departure_date: String,
    pub flight_duration: String,
    pub duration_unit: Option<DurationUnit>,
    pub aircraft_type: String,
}

/// Listing filter fields as entered by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketFilter {
    pub flight_number: String,
    pub departure_date: String,
}

impl TicketFilter {
    pub fn new(flight_number: impl Into<String>, departure_date: impl Into<String>) -> Self {
        Self {
            flight_number: flight_number.into(),
            departure_date: departure_date.into(),
        }
    }

    /// The listing call is filtered only when both fields are non-empty.
    pub fn is_active(&self) -> bool {
        !self.flight_number.is_empty() && !self.departure_date.is_empty()
    }
}
