pub mod ticket;
pub mod ticket_attachment;

pub use ticket::{Ticket, TicketPriority, TicketStatus, TicketWithAttachments};
pub use ticket_attachment::{TicketAttachment, TicketAttachmentSummary};
