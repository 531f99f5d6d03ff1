pub mod ticket_dto;

pub use ticket_dto::{
    AttachmentResponseDto, CreateAttachmentDto, CreateTicketDto, TechnicianTicketsQuery,
    TicketQueryParams, TicketResponseDto, UpdateTicketDto, UpdateTicketStatusDto,
};
