//! Validation pipeline for new ticket requests.
//!
//! Checks the raw form input field by field, collecting every problem
//! instead of stopping at the first, and converts the entered duration into
//! the canonical minutes value before anything reaches the network.

use std::fmt;

use chrono::NaiveDate;

use crate::tickets::{DurationUnit, MINUTES_PER_HOUR, TicketDraft, TicketSubmission};

/// Expected wire format for the departure date
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single field-level validation problem.
///
/// `field` carries the wire name of the offending field so callers can
/// attach the message to the right form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn required(field: &'static str, label: &str) -> Self {
        Self {
            field,
            message: format!("{label} is required"),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a draft and produce the normalized submission payload.
///
/// All violations are collected; a draft that fails here must never be
/// submitted. On success the payload is the draft with `flight_duration`
/// converted to minutes and the entry unit dropped. A missing unit means
/// minutes, the canonical unit.
pub fn validate(draft: &TicketDraft) -> Result<TicketSubmission, Vec<FieldError>> {
    let mut errors = Vec::new();

    for (field, label, value) in [
        ("destination", "Destination", &draft.destination),
        ("departure", "Departure", &draft.departure),
        ("flightNumber", "Flight number", &draft.flight_number),
        ("passengerName", "Passenger name", &draft.passenger_name),
        ("aircraftType", "Aircraft type", &draft.aircraft_type),
    ] {
        if value.trim().is_empty() {
            errors.push(FieldError::required(field, label));
        }
    }

    let departure_date = parse_departure_date(draft, &mut errors);
    let flight_duration = parse_flight_duration(draft, &mut errors);

    let (Some(departure_date), Some(flight_duration)) = (departure_date, flight_duration) else {
        return Err(errors);
    };
    if !errors.is_empty() {
        return Err(errors);
    }

    let unit = draft.duration_unit.unwrap_or_default();
    let normalized = match unit {
        DurationUnit::Hours => flight_duration * MINUTES_PER_HOUR,
        DurationUnit::Minutes => flight_duration,
    };

    Ok(TicketSubmission {
        destination: draft.destination.trim().to_string(),
        departure: draft.departure.trim().to_string(),
        flight_number: draft.flight_number.trim().to_string(),
        passenger_name: draft.passenger_name.trim().to_string(),
        departure_date,
        flight_duration: normalized,
        aircraft_type: draft.aircraft_type.trim().to_string(),
    })
}

fn parse_departure_date(draft: &TicketDraft, errors: &mut Vec<FieldError>) -> Option<NaiveDate> {
    let raw = draft.departure_date.trim();
    if raw.is_empty() {
        errors.push(FieldError::required("departureDate", "Departure date"));
        return None;
    }
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(FieldError {
                field: "departureDate",
                message: format!("Departure date must be a YYYY-MM-DD date, got '{raw}'"),
            });
            None
        }
    }
}

fn parse_flight_duration(draft: &TicketDraft, errors: &mut Vec<FieldError>) -> Option<f64> {
    let raw = draft.flight_duration.trim();
    if raw.is_empty() {
        errors.push(FieldError::required("flightDuration", "Flight duration"));
        return None;
    }
    // Non-numeric input is rejected before any unit conversion happens
    let duration: f64 = match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            errors.push(FieldError {
                field: "flightDuration",
                message: format!("Flight duration must be a number, got '{raw}'"),
            });
            return None;
        }
    };
    if !duration.is_finite() || duration <= 0.0 {
        errors.push(FieldError {
            field: "flightDuration",
            message: "Flight duration must be positive".to_string(),
        });
        return None;
    }
    Some(duration)
}
