pub mod technician_handler;
pub mod ticket_handler;

pub use technician_handler::{
    __path_get_technician_ticket, __path_list_technician_tickets,
    __path_update_technician_ticket_status, get_technician_ticket, list_technician_tickets,
    update_technician_ticket_status,
};
pub use ticket_handler::{
    __path_add_ticket_attachment, __path_create_ticket, __path_delete_ticket, __path_get_ticket,
    __path_list_tickets, __path_update_ticket, add_ticket_attachment, create_ticket,
    delete_ticket, get_ticket, list_tickets, update_ticket, TicketState,
};
