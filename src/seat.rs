use std::fmt;
use std::fmt::Formatter;

/// A validated seat address. Rows count from 1, letters come from the
/// aircraft's seating plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seat {
    pub row: u32,
    pub letter: char,
}

impl Seat {
    pub fn new(row: u32, letter: char) -> Seat {
        Seat { row, letter }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.letter)
    }
}
