pub mod ticket_service;

pub use ticket_service::{TicketFilter, TicketService};
