pub mod chat_log_service;

pub use chat_log_service::ChatLogService;
