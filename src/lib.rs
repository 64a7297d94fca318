//! # Hotel Booking
//!
//! Room availability and booking for a single hotel property.
//!
//! ## Architecture
//!
//! - **domain**: Periods, stays, bookings and their overlap rules
//! - **application**: The booking registry that keeps stored stays disjoint
//! - **config**: TOML configuration
//! - **telemetry**: Tracing subscriber setup
//! - **shared**: Error types
//!
//! ```
//! use chrono::NaiveDate;
//! use hotel_booking::{BookingRegistry, BookingStatus, Period, Stay};
//!
//! let hotel = BookingRegistry::new(2);
//! let period = Period::new(
//!     NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2022, 1, 2).unwrap(),
//! );
//!
//! let id = hotel.book(Stay::new(1, period)).unwrap();
//! assert_eq!(hotel.get_booking_status(&id), Ok(BookingStatus::Reserved));
//! assert_eq!(hotel.get_available_rooms(&period).into_iter().collect::<Vec<_>>(), vec![0]);
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod shared;
pub mod telemetry;

pub use application::{BookingRegistry, SharedBookingRegistry};
pub use config::{default_config_path, AppConfig, HotelConfig, LoggingConfig};
pub use domain::{Booking, BookingId, BookingStatus, DomainError, DomainResult, Period, Stay};
pub use shared::errors::ConfigError;
pub use telemetry::init_tracing;
