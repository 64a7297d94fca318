use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{BookingId, Period};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Room {room_no} is not available for {period}")]
    RoomUnavailable { room_no: u32, period: Period },

    #[error("Not found: booking with id={0}")]
    BookingNotFound(BookingId),

    #[error("Room {room_no} does not exist (hotel has {no_of_rooms} rooms)")]
    InvalidRoomNumber { room_no: u32, no_of_rooms: u32 },

    #[error("Validation: departure {departure} must be after arrival {arrival}")]
    InvalidPeriod {
        arrival: NaiveDate,
        departure: NaiveDate,
    },
}

impl DomainError {
    /// Whether the request clashed with an existing booking, so the caller
    /// may retry with another room or period.
    pub fn is_conflict(&self) -> bool {
        matches!(self, DomainError::RoomUnavailable { .. })
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}
