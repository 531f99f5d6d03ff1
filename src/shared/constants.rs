/// Default page size for chat log listings
pub const DEFAULT_CHAT_LOG_LIMIT: i64 = 50;

/// Maximum page size accepted from clients
pub const MAX_PAGE_SIZE: i64 = 500;

/// Maximum accepted voice recording size in bytes (10MB)
pub const MAX_AUDIO_FILE_SIZE: usize = 10 * 1024 * 1024;

/// MIME prefix accepted for voice recordings
pub const AUDIO_MIME_PREFIX: &str = "audio/";

/// Highest page number referenced in the equipment manual
pub const MANUAL_PAGE_COUNT: u32 = 300;
