//! Seat allocation for a single flight: seat a passenger, move them, take
//! them off, ask who sits where, and print boarding cards.

pub mod aircraft;
pub mod boarding;
pub mod error;
pub mod flight;
pub mod flight_number;
pub mod manifest;
pub mod seat;

pub use aircraft::{Aircraft, SeatingPlan, SEAT_LETTERS};
pub use error::{SeatError, SeatResult};
pub use flight::{Flight, EMPTY_SEAT};
pub use flight_number::{FlightNumber, RoutePolicy};
pub use seat::Seat;
