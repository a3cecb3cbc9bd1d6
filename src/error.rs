use thiserror::Error;

pub type SeatResult<T> = Result<T, SeatError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatError {
    #[error("Invalid flight number {number}: {reason}")]
    InvalidFormat { number: String, reason: &'static str },

    #[error("Invalid seat letter in {0}")]
    InvalidSeatLetter(String),

    #[error("Invalid seat row in {0}")]
    InvalidSeatRow(String),

    #[error("Invalid row number {0}")]
    InvalidRowNumber(String),

    #[error("Seat {0} already occupied")]
    SeatOccupied(String),

    #[error("Seat {0} is empty")]
    SeatEmpty(String),

    #[error("Invalid aircraft layout: {0}")]
    InvalidLayout(String),
}
