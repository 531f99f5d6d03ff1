use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::core::error::ValidationDetails;

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Field-level failures, present only for 422 responses
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<ValidationDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub message: String,
}

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, status: u16) -> Self {
        Self {
            error: error.into(),
            status: Some(status),
            details: None,
        }
    }

    pub fn validation(details: ValidationDetails) -> Self {
        Self {
            error: "Validation failed".to_string(),
            status: None,
            details: Some(details),
        }
    }

    pub fn internal() -> Self {
        Self {
            error: "Internal Server Error".to_string(),
            status: None,
            details: None,
        }
    }
}

/// Plain acknowledgement body (deletes, status changes)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Optional free text where a blank string means "not provided".
///
/// Forms submit untouched inputs as `""`; those are stored as NULL.
pub fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.trim().is_empty()))
}

/// Partial-update counterpart of [`deserialize_optional_text`].
///
/// Use with `#[serde(default, deserialize_with = "deserialize_some_text")]` on an
/// `Option<Option<String>>`: absent → `None`, `null` or blank → `Some(None)`.
pub fn deserialize_some_text<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_optional_text(deserializer).map(Some)
}

const LOCAL_TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// RFC 3339, or an offset-less `YYYY-MM-DDTHH:MM[:SS[.fff]]` read as UTC
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    LOCAL_TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Optional timestamp accepting everything [`parse_timestamp`] does; blank → `None`
pub fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_timestamp(raw.trim()).map(Some).ok_or_else(|| {
            D::Error::custom(format!(
                "invalid date-time `{}`, expected RFC 3339 or YYYY-MM-DDTHH:MM[:SS]",
                raw
            ))
        }),
    }
}

/// Partial-update counterpart of [`deserialize_optional_timestamp`]
pub fn deserialize_some_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<Option<DateTime<Utc>>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_optional_timestamp(deserializer).map(Some)
}
