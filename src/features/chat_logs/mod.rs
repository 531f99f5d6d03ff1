//! AI chat log persistence.
//!
//! Every assistant exchange tied to a ticket lands here. Rows are append-only
//! apart from single deletes; removing a ticket cascades in the database.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::ChatLogService;
