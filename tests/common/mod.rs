//! In-process fake of the remote ticket collection service.
//!
//! Serves the four collection endpoints over an in-memory list, records
//! every incoming request line so tests can assert on the exact query
//! parameters sent, and can be switched into a failing mode where every
//! endpoint answers 500.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;

use skybook::tickets::{TicketRequest, TicketSubmission};

#[derive(Clone, Default)]
pub struct FakeStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    tickets: Vec<TicketRequest>,
    next_id: i64,
    requests: Vec<String>,
    failing: bool,
}

impl FakeStore {
    /// Request lines seen so far, e.g. `GET /tickets?flightNumber=PS101&...`
    pub fn requests(&self) -> Vec<String> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn ticket_count(&self) -> usize {
        self.inner.lock().unwrap().tickets.len()
    }

    /// When failing, every endpoint answers 500
    pub fn set_failing(&self, failing: bool) {
        self.inner.lock().unwrap().failing = failing;
    }

    fn record(&self, line: String) {
        self.inner.lock().unwrap().requests.push(line);
    }
}

fn parse_query(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| pair.split_once('='))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

async fn list_tickets(
    State(store): State<FakeStore>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<TicketRequest>>, StatusCode> {
    let suffix = query
        .as_deref()
        .map(|q| format!("?{q}"))
        .unwrap_or_default();
    store.record(format!("GET /tickets{suffix}"));

    let inner = store.inner.lock().unwrap();
    if inner.failing {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    let params = parse_query(query.as_deref().unwrap_or_default());
    let tickets = match (params.get("flightNumber"), params.get("departureDate")) {
        (Some(flight_number), Some(departure_date)) => inner
            .tickets
            .iter()
            .filter(|t| {
                t.flight_number == *flight_number
                    && t.departure_date.to_string() == *departure_date
            })
            .cloned()
            .collect(),
        _ => inner.tickets.clone(),
    };

    Ok(Json(tickets))
}

async fn search_tickets(
    State(store): State<FakeStore>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<TicketRequest>>, StatusCode> {
    let suffix = query
        .as_deref()
        .map(|q| format!("?{q}"))
        .unwrap_or_default();
    store.record(format!("GET /tickets/search{suffix}"));

    let inner = store.inner.lock().unwrap();
    if inner.failing {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    let params = parse_query(query.as_deref().unwrap_or_default());
    let flight_number = params.get("flightNumber").cloned().unwrap_or_default();
    let departure_date = params.get("departureDate").cloned().unwrap_or_default();

    let tickets = inner
        .tickets
        .iter()
        .filter(|t| flight_number.is_empty() || t.flight_number == flight_number)
        .filter(|t| departure_date.is_empty() || t.departure_date.to_string() == departure_date)
        .cloned()
        .collect();

    Ok(Json(tickets))
}

async fn create_ticket(
    State(store): State<FakeStore>,
    Json(submission): Json<TicketSubmission>,
) -> Result<(StatusCode, Json<TicketRequest>), StatusCode> {
    store.record("POST /tickets".to_string());

    let mut inner = store.inner.lock().unwrap();
    if inner.failing {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    inner.next_id += 1;
    let created = TicketRequest {
        id: inner.next_id,
        destination: submission.destination,
        departure: submission.departure,
        flight_number: submission.flight_number,
        passenger_name: submission.passenger_name,
        departure_date: submission.departure_date,
        flight_duration: submission.flight_duration,
        aircraft_type: submission.aircraft_type,
    };
    inner.tickets.push(created.clone());

    Ok((StatusCode::CREATED, Json(created)))
}

async fn delete_ticket(State(store): State<FakeStore>, Path(id): Path<i64>) -> StatusCode {
    store.record(format!("DELETE /tickets/{id}"));

    let mut inner = store.inner.lock().unwrap();
    if inner.failing {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    let before = inner.tickets.len();
    inner.tickets.retain(|t| t.id != id);
    if inner.tickets.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

/// Start the fake service on an ephemeral port. Returns the store handle
/// (for assertions) and the base URL to point a client at.
pub async fn spawn_fake_service() -> (FakeStore, String) {
    let store = FakeStore::default();

    let app = Router::new()
        .route("/tickets", get(list_tickets).post(create_ticket))
        .route("/tickets/search", get(search_tickets))
        .route("/tickets/{id}", axum::routing::delete(delete_ticket))
        .with_state(store.clone());

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake ticket service");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Fake ticket service crashed");
    });

    (store, format!("http://{addr}"))
}
