use crate::aircraft::{Aircraft, SeatingPlan};
use crate::error::{SeatError, SeatResult};
use crate::flight_number::{FlightNumber, RoutePolicy};
use crate::seat::Seat;
use std::sync::Arc;
use tracing::debug;


/// What [`Flight::return_seat`] reports for an unoccupied seat.
pub const EMPTY_SEAT: &str = "Empty";

/// Seat occupancy of one flight on one aircraft.
///
/// The occupancy map is sized from the aircraft's seating plan once, at
/// construction, and always holds exactly one entry per seat of that plan.
/// Callers sharing a flight across threads must serialize access themselves.
pub struct Flight {
    number: FlightNumber,
    aircraft: Arc<Aircraft>,
    plan: SeatingPlan,
    seating: Vec<Option<String>>,
}

impl Flight {
    pub fn new(number: &str, aircraft: Arc<Aircraft>) -> SeatResult<Flight> {
        Self::with_route_policy(number, aircraft, RoutePolicy::default())
    }

    pub fn with_route_policy(
        number: &str,
        aircraft: Arc<Aircraft>,
        policy: RoutePolicy,
    ) -> SeatResult<Flight> {
        let number = FlightNumber::parse(number, policy)?;
        let plan = aircraft.seating_plan();
        let seating = vec![None; plan.capacity()];
        debug!(
            flight = %number,
            aircraft = aircraft.registration(),
            seats = seating.len(),
            "flight opened"
        );
        Ok(Flight {
            number,
            aircraft,
            plan,
            seating,
        })
    }

    pub fn number(&self) -> &str {
        self.number.as_str()
    }

    pub fn airline(&self) -> &str {
        self.number.airline()
    }

    pub fn flight_number(&self) -> &FlightNumber {
        &self.number
    }

    pub fn aircraft(&self) -> &Arc<Aircraft> {
        &self.aircraft
    }

    pub fn aircraft_model(&self) -> &str {
        self.aircraft.model()
    }

    pub fn seating_plan(&self) -> &SeatingPlan {
        &self.plan
    }

    pub fn parse_seat(&self, designator: &str) -> SeatResult<Seat> {
        self.plan.parse_seat(designator)
    }

    fn slot(&self, seat: Seat) -> SeatResult<usize> {
        self.plan.check_seat(seat).map(|seat| self.plan.index_of(seat))
    }

    pub fn allocate_seat(&mut self, seat: &str, passenger: impl Into<String>) -> SeatResult<()> {
        let seat = self.parse_seat(seat)?;
        self.allocate(seat, passenger)
    }

    pub fn allocate(&mut self, seat: Seat, passenger: impl Into<String>) -> SeatResult<()> {
        let idx = self.slot(seat)?;
        if self.seating[idx].is_some() {
            return Err(SeatError::SeatOccupied(seat.to_string()));
        }
        let passenger = passenger.into();
        debug!(flight = %self.number, %seat, passenger = %passenger, "seat allocated");
        self.seating[idx] = Some(passenger);
        Ok(())
    }

    pub fn relocate_passenger(&mut self, from: &str, to: &str) -> SeatResult<()> {
        let from = self.parse_seat(from)?;
        let to = self.parse_seat(to)?;
        self.relocate(from, to)
    }

    /// Moves the occupant of `from` into `to`. Nothing changes unless both
    /// checks pass.
    pub fn relocate(&mut self, from: Seat, to: Seat) -> SeatResult<()> {
        let from_idx = self.slot(from)?;
        let to_idx = self.slot(to)?;
        if self.seating[from_idx].is_none() {
            return Err(SeatError::SeatEmpty(from.to_string()));
        }
        if self.seating[to_idx].is_some() {
            return Err(SeatError::SeatOccupied(to.to_string()));
        }
        let passenger = self.seating[from_idx].take();
        debug!(flight = %self.number, %from, %to, passenger = ?passenger, "passenger relocated");
        self.seating[to_idx] = passenger;
        Ok(())
    }

    pub fn remove_passenger(&mut self, seat: &str) -> SeatResult<String> {
        let seat = self.parse_seat(seat)?;
        self.remove(seat)
    }

    pub fn remove(&mut self, seat: Seat) -> SeatResult<String> {
        let idx = self.slot(seat)?;
        let passenger = self.seating[idx]
            .take()
            .ok_or_else(|| SeatError::SeatEmpty(seat.to_string()))?;
        debug!(flight = %self.number, %seat, passenger = %passenger, "passenger removed");
        Ok(passenger)
    }

    /// Occupant of `seat`, or [`EMPTY_SEAT`] when nobody sits there.
    ///
    /// Kept for callers that expect a placeholder name. New code should
    /// prefer [`Flight::occupant`], which cannot confuse a passenger
    /// literally named "Empty" with a free seat.
    pub fn return_seat(&self, seat: &str) -> SeatResult<&str> {
        self.occupant(seat).map(|name| name.unwrap_or(EMPTY_SEAT))
    }

    pub fn occupant(&self, seat: &str) -> SeatResult<Option<&str>> {
        let seat = self.parse_seat(seat)?;
        self.occupant_at(seat)
    }

    pub fn occupant_at(&self, seat: Seat) -> SeatResult<Option<&str>> {
        let idx = self.slot(seat)?;
        Ok(self.seating[idx].as_deref())
    }

    pub fn capacity(&self) -> usize {
        self.seating.len()
    }

    pub fn num_available_seats(&self) -> usize {
        self.seating.iter().filter(|s| s.is_none()).count()
    }

    pub fn num_occupied_seats(&self) -> usize {
        self.capacity() - self.num_available_seats()
    }

    /// Designator of the first seat, in row then letter order, held by
    /// `passenger`. Later seats with the same name are not reported.
    pub fn find_passenger(&self, passenger: &str) -> Option<String> {
        self.occupied_seats()
            .find(|(_, name)| *name == passenger)
            .map(|(seat, _)| seat.to_string())
    }

    /// Every seat of the plan with its occupant, rows ascending.
    pub fn seats(&self) -> impl Iterator<Item = (Seat, Option<&str>)> + '_ {
        self.plan
            .seats()
            .zip(self.seating.iter().map(|s| s.as_deref()))
    }

    pub fn occupied_seats(&self) -> impl Iterator<Item = (Seat, &str)> + '_ {
        self.seats()
            .filter_map(|(seat, name)| name.map(|name| (seat, name)))
    }

    pub fn passenger_seats(&self) -> impl Iterator<Item = (String, &str)> + '_ {
        self.occupied_seats()
            .map(|(seat, name)| (seat.to_string(), name))
    }

    /// Calls `card_printer(passenger, seat, flight_number, aircraft_model)`
    /// once per occupied seat.
    ///
    /// Cards come out ordered by the designator as text, so `10A` is printed
    /// before `2A`.
    pub fn make_boarding_cards<F>(&self, mut card_printer: F)
    where
        F: FnMut(&str, &str, &str, &str),
    {
        let mut cards = self.passenger_seats().collect::<Vec<_>>();
        cards.sort_by(|a, b| a.0.cmp(&b.0));
        for (seat, passenger) in cards {
            card_printer(passenger, &seat, self.number(), self.aircraft_model());
        }
    }
}
