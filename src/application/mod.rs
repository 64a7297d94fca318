pub mod booking;

pub use booking::{BookingRegistry, SharedBookingRegistry};
