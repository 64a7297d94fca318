//! Booking aggregate

pub mod model;

pub use model::{Booking, BookingId, BookingStatus};
