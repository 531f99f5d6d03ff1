pub mod assistant_dto;

pub use assistant_dto::{
    ChatMessageDto, ChatRequestDto, ChatResponseDto, MessageSender, SuggestionRequestDto,
    SuggestionResponseDto, UploadAudioDto, VoiceFileInfoDto, VoiceRecordingResponseDto,
};
