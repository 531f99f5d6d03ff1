//! Mock AI assistant for technicians.
//!
//! Text chat, voice recordings and follow-up suggestions. No model is called;
//! responses come from fixed templates with a seedable random choice.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::AssistantService;
