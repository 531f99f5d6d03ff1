pub mod chat_log_handler;

pub use chat_log_handler::{
    __path_create_ticket_chat_log, __path_delete_chat_log, __path_get_chat_log,
    __path_get_ticket_chat_log_stats, __path_list_chat_logs, __path_list_session_chat_logs,
    __path_list_ticket_chat_logs, create_ticket_chat_log, delete_chat_log, get_chat_log,
    get_ticket_chat_log_stats, list_chat_logs, list_session_chat_logs, list_ticket_chat_logs,
};
