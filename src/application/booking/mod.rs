pub mod registry;

pub use registry::{BookingRegistry, SharedBookingRegistry};
