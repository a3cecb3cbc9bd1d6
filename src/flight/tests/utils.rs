use crate::aircraft::Aircraft;
use crate::flight::Flight;
use proptest::prelude::Strategy;
use proptest::sample::select;
use std::sync::Arc;

pub fn aircraft(rows: u32, seats_per_row: usize) -> Arc<Aircraft> {
    Arc::new(Aircraft::new("G-EUPT", "Airbus A319", rows, seats_per_row).unwrap())
}

pub fn flight(number: &str, rows: u32, seats_per_row: usize) -> Flight {
    Flight::new(number, aircraft(rows, seats_per_row)).unwrap()
}

pub fn a319() -> Flight {
    flight("BA758", 22, 6)
}

/// BA758 on G-EUPT with the Mackenzie and Weinberger parties seated.
pub fn test_flight() -> Flight {
    let mut flight = a319();
    seat_passengers(
        &mut flight,
        &[
            ("1A", "Rob Mackenzie"),
            ("1C", "Ava Mackenzie"),
            ("1D", "Olivia Mackenzie"),
            ("1F", "Krysta Mackenzie"),
            ("7A", "Ashley Weinberger"),
            ("7B", "Tytan Weinberger"),
            ("7C", "Keirin Weinberger"),
            ("7D", "Fat Guy 1"),
            ("7E", "Travis Weinberger"),
            ("7F", "Fat Guy 2"),
        ],
    );
    flight
}

pub fn seat_passengers(flight: &mut Flight, bookings: &[(&str, &str)]) {
    for (seat, name) in bookings {
        flight.allocate_seat(seat, *name).unwrap();
    }
}

/// Collects every card the flight prints as `(passenger, seat, number, model)`.
pub fn cards(flight: &Flight) -> Vec<(String, String, String, String)> {
    let mut printed = vec![];
    flight.make_boarding_cards(|passenger, seat, number, model| {
        printed.push((
            passenger.to_string(),
            seat.to_string(),
            number.to_string(),
            model.to_string(),
        ))
    });
    printed
}

pub fn arb_seat(rows: u32, letters: &'static str) -> impl Strategy<Value = String> {
    (1..=rows, select(letters.chars().collect::<Vec<_>>()))
        .prop_map(|(row, letter)| format!("{}{}", row, letter))
}
