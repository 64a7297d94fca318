//! Stay value objects
//!
//! Date ranges and room occupancies, with their overlap rules.

pub mod model;

pub use model::{Period, Stay};
