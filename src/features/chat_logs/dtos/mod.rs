pub mod chat_log_dto;

pub use chat_log_dto::{
    ChatLogListQuery, ChatLogQueryParams, ChatLogResponseDto, ChatLogStatsDto, CreateChatLogDto,
    CreateChatLogRequestDto,
};
