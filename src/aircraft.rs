use crate::error::{SeatError, SeatResult};
use crate::seat::Seat;
use serde::Deserialize;
use std::num::IntErrorKind;
use std::ops::RangeInclusive;
use std::sync::Arc;

/// Reference seat alphabet. `I` is skipped so it is never mistaken for `1`.
pub const SEAT_LETTERS: &str = "ABCDEFGHJK";

pub type Registration = Arc<str>;

/// Raw layout as it appears in a manifest, before validation.
#[derive(Deserialize)]
struct Layout {
    registration: Registration,
    model: String,
    rows: u32,
    seats_per_row: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Layout")]
pub struct Aircraft {
    registration: Registration,
    model: String,
    rows: u32,
    seats_per_row: usize,
}

impl Aircraft {
    pub fn new(
        registration: impl Into<Registration>,
        model: impl Into<String>,
        rows: u32,
        seats_per_row: usize,
    ) -> SeatResult<Aircraft> {
        let registration = registration.into();
        if rows == 0 {
            return Err(SeatError::InvalidLayout(format!(
                "{} has no rows",
                registration
            )));
        }
        if !(1..=SEAT_LETTERS.len()).contains(&seats_per_row) {
            return Err(SeatError::InvalidLayout(format!(
                "{} cannot seat {} per row",
                registration, seats_per_row
            )));
        }
        Ok(Aircraft {
            registration,
            model: model.into(),
            rows,
            seats_per_row,
        })
    }

    pub fn registration(&self) -> &str {
        &self.registration
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn seating_plan(&self) -> SeatingPlan {
        SeatingPlan {
            rows: 1..=self.rows,
            letters: &SEAT_LETTERS[..self.seats_per_row],
        }
    }
}

impl TryFrom<Layout> for Aircraft {
    type Error = SeatError;

    fn try_from(raw: Layout) -> Result<Self, Self::Error> {
        Aircraft::new(raw.registration, raw.model, raw.rows, raw.seats_per_row)
    }
}

/// Valid rows and seat letters of an aircraft. Every seat-addressing
/// operation goes through [`SeatingPlan::parse_seat`] or
/// [`SeatingPlan::check_seat`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatingPlan {
    rows: RangeInclusive<u32>,
    letters: &'static str,
}

impl SeatingPlan {
    pub fn rows(&self) -> RangeInclusive<u32> {
        self.rows.clone()
    }

    pub fn letters(&self) -> &'static str {
        self.letters
    }

    pub fn capacity(&self) -> usize {
        *self.rows.end() as usize * self.letters.len()
    }

    /// Splits a designator such as `12C` into its row and letter.
    ///
    /// The letter is checked first, then the row text, then the row range,
    /// so `23Z` reports a bad letter even when row 23 does not exist.
    pub fn parse_seat(&self, designator: &str) -> SeatResult<Seat> {
        let mut chars = designator.chars();
        let letter = chars
            .next_back()
            .filter(|c| self.letters.contains(*c))
            .ok_or_else(|| SeatError::InvalidSeatLetter(designator.to_string()))?;

        // Digits too long for i64 are still a number, just not a row.
        let row = match chars.as_str().parse::<i64>() {
            Ok(row) => u32::try_from(row).ok(),
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => None,
            Err(_) => return Err(SeatError::InvalidSeatRow(designator.to_string())),
        };

        match row {
            Some(row) if self.rows.contains(&row) => Ok(Seat::new(row, letter)),
            _ => Err(SeatError::InvalidRowNumber(designator.to_string())),
        }
    }

    pub fn check_seat(&self, seat: Seat) -> SeatResult<Seat> {
        if !self.letters.contains(seat.letter) {
            return Err(SeatError::InvalidSeatLetter(seat.to_string()));
        }
        if !self.rows.contains(&seat.row) {
            return Err(SeatError::InvalidRowNumber(seat.to_string()));
        }
        Ok(seat)
    }

    /// Position of a checked seat in row-major order.
    pub(crate) fn index_of(&self, seat: Seat) -> usize {
        let column = self.letters.find(seat.letter).unwrap_or(0);
        (seat.row - 1) as usize * self.letters.len() + column
    }

    /// All seats, rows ascending, letters in plan order.
    pub fn seats(&self) -> impl Iterator<Item = Seat> + '_ {
        self.rows
            .clone()
            .flat_map(move |row| self.letters.chars().map(move |letter| Seat::new(row, letter)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a319() -> Aircraft {
        Aircraft::new("G-EUPT", "Airbus A319", 22, 6).unwrap()
    }

    #[test]
    fn test_seating_plan() {
        let plan = a319().seating_plan();
        assert_eq!(1..=22, plan.rows());
        assert_eq!("ABCDEF", plan.letters());
        assert_eq!(132, plan.capacity());
    }

    #[test]
    fn test_full_width_skips_i() {
        let plan = Aircraft::new("G-VIIA", "Boeing 777", 50, 10).unwrap().seating_plan();
        assert_eq!("ABCDEFGHJK", plan.letters());
        assert!(matches!(plan.parse_seat("3I"), Err(SeatError::InvalidSeatLetter(_))));
        assert_eq!(Ok(Seat::new(3, 'J')), plan.parse_seat("3J"));
    }

    #[test]
    fn test_invalid_layout() {
        assert!(matches!(Aircraft::new("G-0", "Glider", 0, 2), Err(SeatError::InvalidLayout(_))));
        assert!(matches!(Aircraft::new("G-0", "Wide", 10, 11), Err(SeatError::InvalidLayout(_))));
        assert!(matches!(Aircraft::new("G-0", "None", 10, 0), Err(SeatError::InvalidLayout(_))));
    }

    #[test]
    fn test_parse_seat() {
        let plan = a319().seating_plan();
        assert_eq!(Ok(Seat::new(12, 'C')), plan.parse_seat("12C"));
        assert_eq!(Ok(Seat::new(22, 'F')), plan.parse_seat("22F"));
        assert_eq!(Ok(Seat::new(1, 'A')), plan.parse_seat("01A"));
    }

    #[test]
    fn test_parse_seat_errors() {
        let plan = a319().seating_plan();
        assert_eq!(Err(SeatError::InvalidSeatLetter("23Z".into())), plan.parse_seat("23Z"));
        assert_eq!(Err(SeatError::InvalidSeatLetter("".into())), plan.parse_seat(""));
        assert_eq!(Err(SeatError::InvalidSeatLetter("1a".into())), plan.parse_seat("1a"));
        assert_eq!(Err(SeatError::InvalidSeatRow("A".into())), plan.parse_seat("A"));
        assert_eq!(Err(SeatError::InvalidSeatRow("XA".into())), plan.parse_seat("XA"));
        assert_eq!(Err(SeatError::InvalidRowNumber("99A".into())), plan.parse_seat("99A"));
        assert_eq!(Err(SeatError::InvalidRowNumber("0A".into())), plan.parse_seat("0A"));
        assert_eq!(Err(SeatError::InvalidRowNumber("-1A".into())), plan.parse_seat("-1A"));
    }

    #[test]
    fn test_parse_seat_huge_row() {
        let plan = a319().seating_plan();
        assert_eq!(
            Err(SeatError::InvalidRowNumber("99999999999999999999A".into())),
            plan.parse_seat("99999999999999999999A")
        );
        assert_eq!(
            Err(SeatError::InvalidRowNumber("-99999999999999999999A".into())),
            plan.parse_seat("-99999999999999999999A")
        );
        assert_eq!(Err(SeatError::InvalidRowNumber("4294967297A".into())), plan.parse_seat("4294967297A"));
        assert_eq!(Err(SeatError::InvalidSeatRow("9999x9999A".into())), plan.parse_seat("9999x9999A"));
    }

    #[test]
    fn test_check_seat() {
        let plan = a319().seating_plan();
        assert_eq!(Ok(Seat::new(3, 'B')), plan.check_seat(Seat::new(3, 'B')));
        assert!(matches!(plan.check_seat(Seat::new(3, 'G')), Err(SeatError::InvalidSeatLetter(_))));
        assert!(matches!(plan.check_seat(Seat::new(23, 'A')), Err(SeatError::InvalidRowNumber(_))));
    }

    #[test]
    fn test_seat_order() {
        let plan = Aircraft::new("G-TINY", "Islander", 2, 2).unwrap().seating_plan();
        let seats = plan.seats().map(|s| s.to_string()).collect::<Vec<_>>();
        assert_eq!(vec!["1A", "1B", "2A", "2B"], seats);
        assert_eq!(3, plan.index_of(Seat::new(2, 'B')));
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Aircraft = serde_json::from_str(
            r#"{"registration":"G-EUPT","model":"Airbus A319","rows":22,"seats_per_row":6}"#,
        )
        .unwrap();
        assert_eq!(a319(), ok);

        let bad = serde_json::from_str::<Aircraft>(
            r#"{"registration":"G-EUPT","model":"Airbus A319","rows":22,"seats_per_row":12}"#,
        );
        assert!(bad.is_err());
    }
}
