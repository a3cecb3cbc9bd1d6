use crate::aircraft::Aircraft;
use crate::error::SeatError;
use crate::flight::Flight;
use crate::flight_number::RoutePolicy;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Cannot read manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Seat(#[from] SeatError),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Booking {
    pub seat: String,
    pub name: String,
}

/// Start-of-day description of a flight: the aircraft, the designator and
/// the passengers already seated.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub aircraft: Aircraft,
    pub flight: String,
    #[serde(default)]
    pub allow_empty_route: bool,
    #[serde(default)]
    pub passengers: Vec<Booking>,
}

impl Manifest {
    pub fn load_from_file(path: &str) -> Result<Self, ManifestError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Opens the flight and seats every booked passenger through
    /// [`Flight::allocate_seat`], stopping at the first rejected booking.
    pub fn into_flight(self) -> Result<Flight, ManifestError> {
        let policy = if self.allow_empty_route {
            RoutePolicy::Optional
        } else {
            RoutePolicy::Required
        };
        let mut flight = Flight::with_route_policy(&self.flight, Arc::new(self.aircraft), policy)?;
        for booking in self.passengers {
            flight.allocate_seat(&booking.seat, booking.name)?;
        }
        Ok(flight)
    }
}
