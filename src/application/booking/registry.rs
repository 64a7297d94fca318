//! Booking registry — availability and reservations for one hotel

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info, warn};

use crate::config::HotelConfig;
use crate::domain::{Booking, BookingId, BookingStatus, DomainError, DomainResult, Period, Stay};

/// Thread-safe registry of all bookings of a single hotel.
///
/// A single lock guards the booking map. `book` holds the write lock across
/// the conflict scan and the insert, so two intersecting stays can never
/// both be stored.
#[derive(Debug)]
pub struct BookingRegistry {
    no_of_rooms: u32,
    bookings: RwLock<HashMap<BookingId, Booking>>,
}

/// Shared, reference-counted booking registry
pub type SharedBookingRegistry = Arc<BookingRegistry>;

impl BookingRegistry {
    /// Rooms are numbered `0..no_of_rooms`
    pub fn new(no_of_rooms: u32) -> Self {
        Self {
            no_of_rooms,
            bookings: RwLock::new(HashMap::new()),
        }
    }

    pub fn from_config(config: &HotelConfig) -> Self {
        Self::new(config.rooms)
    }

    /// Wrap in `Arc` for shared ownership
    pub fn shared(no_of_rooms: u32) -> SharedBookingRegistry {
        Arc::new(Self::new(no_of_rooms))
    }

    pub fn no_of_rooms(&self) -> u32 {
        self.no_of_rooms
    }

    pub fn booking_count(&self) -> usize {
        self.read().len()
    }

    /// Rooms with no booking intersecting `period`
    pub fn get_available_rooms(&self, period: &Period) -> BTreeSet<u32> {
        let bookings = self.read();
        let available: BTreeSet<u32> = (0..self.no_of_rooms)
            .filter(|&room_no| is_vacant(&bookings, &Stay::new(room_no, *period)))
            .collect();

        debug!(
            period = %period,
            available = available.len(),
            "Availability query"
        );
        available
    }

    /// Whether `stay` conflicts with no stored booking.
    ///
    /// Does not check the room number; `book` does.
    pub fn is_stay_possible(&self, stay: &Stay) -> bool {
        is_vacant(&self.read(), stay)
    }

    /// Reserve a room, failing if the stay clashes with an existing booking.
    pub fn book(&self, stay: Stay) -> DomainResult<BookingId> {
        if stay.room_no >= self.no_of_rooms {
            warn!(
                room_no = stay.room_no,
                no_of_rooms = self.no_of_rooms,
                "Rejected booking for nonexistent room"
            );
            return Err(DomainError::InvalidRoomNumber {
                room_no: stay.room_no,
                no_of_rooms: self.no_of_rooms,
            });
        }

        let mut bookings = self.write();

        if !is_vacant(&bookings, &stay) {
            debug!(
                room_no = stay.room_no,
                period = %stay.period,
                "Room unavailable"
            );
            return Err(DomainError::RoomUnavailable {
                room_no: stay.room_no,
                period: stay.period,
            });
        }

        let booking = Booking::reserve(stay);
        let id = booking.id();
        bookings.insert(id, booking);

        info!(
            booking_id = %id,
            room_no = stay.room_no,
            period = %stay.period,
            "Room booked"
        );
        Ok(id)
    }

    pub fn get_booking_status(&self, booking_id: &BookingId) -> DomainResult<BookingStatus> {
        self.read()
            .get(booking_id)
            .map(Booking::status)
            .ok_or(DomainError::BookingNotFound(*booking_id))
    }

    pub fn get_booking(&self, booking_id: &BookingId) -> DomainResult<Booking> {
        self.read()
            .get(booking_id)
            .cloned()
            .ok_or(DomainError::BookingNotFound(*booking_id))
    }

    // Poisoning is recovered: the map is only ever changed by one `insert`.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<BookingId, Booking>> {
        self.bookings.read().unwrap_or_else(|poisoned| {
            warn!("Booking registry lock was poisoned, recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<BookingId, Booking>> {
        self.bookings.write().unwrap_or_else(|poisoned| {
            warn!("Booking registry lock was poisoned, recovering");
            PoisonError::into_inner(poisoned)
        })
    }
}

fn is_vacant(bookings: &HashMap<BookingId, Booking>, stay: &Stay) -> bool {
    bookings.values().all(|booking| !booking.intersects_with(stay))
}

// ── Tests ──────────────────────────────────────────────────────
