//! Legacy blog-style posts, kept for existing API consumers.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::PostService;
