//! Field-service tickets.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/tickets` | List tickets (`status`, `technicianId`, `priority`) |
//! | POST | `/api/tickets` | Create a ticket |
//! | GET | `/api/tickets/{id}` | Ticket with attachments and AI chat logs |
//! | PUT | `/api/tickets/{id}` | Partial update |
//! | DELETE | `/api/tickets/{id}` | Delete (cascades to attachments and chat logs) |
//! | POST | `/api/tickets/{id}/attachments` | Register an attachment |
//! | GET | `/api/technicians/{technician_id}/tickets` | Dispatch queue |
//! | GET | `/api/technicians/{technician_id}/tickets/{ticket_id}` | Owned ticket |
//! | PATCH | `/api/technicians/{technician_id}/tickets/{ticket_id}/status` | Owned status change |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::TicketService;
