pub mod assistant;
pub mod chat_logs;
pub mod posts;
pub mod tickets;
