//! Skybook - client library and CLI for a remote airline ticket request
//! service
//!
//! This library wraps the ticket collection endpoint (list, search, create,
//! delete) behind a typed client, validates and normalizes new ticket
//! requests before submission, and tracks the transiently displayed listing
//! that a form-and-table frontend renders.

pub mod commands;
pub mod desk;
pub mod tickets;
pub mod tickets_client;
pub mod validation;

pub use desk::TicketDesk;
pub use tickets::{DurationUnit, TicketDraft, TicketFilter, TicketRequest, TicketSubmission};
pub use tickets_client::{DEFAULT_BASE_URL, TicketsClient};
pub use validation::{FieldError, validate};
