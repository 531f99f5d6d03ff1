pub mod assistant_service;
pub mod responder;
pub mod suggestions;
pub mod voice;

pub use assistant_service::AssistantService;
