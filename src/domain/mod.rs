pub mod booking;
pub mod stay;

// Re-export commonly used types
pub use booking::{Booking, BookingId, BookingStatus};
pub use stay::{Period, Stay};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::{DomainError, DomainResult};
