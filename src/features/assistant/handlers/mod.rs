pub mod assistant_handler;

pub use assistant_handler::{
    __path_get_ticket_suggestions, __path_process_voice_recording, __path_send_chat_message,
    get_ticket_suggestions, process_voice_recording, send_chat_message,
};
