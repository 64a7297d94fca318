//! Booking domain entity

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Stay;

/// Unique booking identifier (random v4 UUID)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(Uuid);

impl BookingId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for BookingId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for BookingId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Booking status
///
/// Only `Reserved` is produced today; the other variants are placeholders
/// for a confirmation workflow and have no transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Reserved,
    Confirmed,
    Unconfirmed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reserved => "RESERVED",
            Self::Confirmed => "CONFIRMED",
            Self::Unconfirmed => "UNCONFIRMED",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A reserved stay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    id: BookingId,
    stay: Stay,
    status: BookingStatus,
    created_at: DateTime<Utc>,
}

impl Booking {
    /// Create a fresh booking in `Reserved` status
    pub fn reserve(stay: Stay) -> Self {
        Self {
            id: BookingId::new(),
            stay,
            status: BookingStatus::Reserved,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> BookingId {
        self.id
    }

    pub fn stay(&self) -> &Stay {
        &self.stay
    }

    pub fn status(&self) -> BookingStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn intersects_with(&self, stay: &Stay) -> bool {
        self.stay.intersects_with(stay)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Period;
    use chrono::NaiveDate;

    fn sample_stay(room_no: u32) -> Stay {
        Stay::new(
            room_no,
            Period::new(
                NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2022, 1, 3).unwrap(),
            ),
        )
    }

    #[test]
    fn reserve_sets_reserved_status() {
        let booking = Booking::reserve(sample_stay(1));
        assert_eq!(booking.status(), BookingStatus::Reserved);
        assert_eq!(booking.stay().room_no, 1);
        assert!(booking.created_at() <= Utc::now());
    }

    #[test]
    fn each_booking_gets_its_own_id() {
        let a = Booking::reserve(sample_stay(1));
        let b = Booking::reserve(sample_stay(1));
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn intersects_with_delegates_to_stay() {
        let booking = Booking::reserve(sample_stay(1));
        assert!(booking.intersects_with(&sample_stay(1)));
        assert!(!booking.intersects_with(&sample_stay(0)));
    }

    #[test]
    fn status_serializes_as_upper_case() {
        let json = serde_json::to_string(&BookingStatus::Unconfirmed).unwrap();
        assert_eq!(json, "\"UNCONFIRMED\"");
        assert_eq!(BookingStatus::Reserved.to_string(), "RESERVED");
        assert_eq!(BookingStatus::Confirmed.as_str(), "CONFIRMED");
    }

    #[test]
    fn booking_id_serializes_as_plain_uuid() {
        let uuid = Uuid::new_v4();
        let id = BookingId::from(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));
        assert_eq!(id.to_string(), uuid.to_string());
        assert_eq!(id.as_uuid(), &uuid);
    }
}
