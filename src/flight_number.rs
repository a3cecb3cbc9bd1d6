use crate::error::{SeatError, SeatResult};
use std::fmt;
use std::fmt::Formatter;

const MAX_ROUTE: u32 = 9999;

/// Whether a designator made of only an airline code (`BA`) is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoutePolicy {
    #[default]
    Required,
    Optional,
}

/// A validated flight designator: two upper-case letters followed by a
/// route number no greater than 9999.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlightNumber {
    number: String,
    code_len: usize,
    route: u32,
}

impl FlightNumber {
    pub fn parse(number: &str, policy: RoutePolicy) -> SeatResult<FlightNumber> {
        let invalid = |reason| SeatError::InvalidFormat {
            number: number.to_string(),
            reason,
        };

        let code = number.chars().take(2).collect::<Vec<char>>();
        if code.len() < 2 || !code.iter().all(|c| c.is_alphabetic()) {
            return Err(invalid("no airline code"));
        }
        if !code.iter().all(|c| c.is_uppercase()) {
            return Err(invalid("invalid airline code"));
        }

        let code_len = code.iter().map(|c| c.len_utf8()).sum::<usize>();
        let digits = &number[code_len..];
        let route = if digits.is_empty() {
            match policy {
                RoutePolicy::Optional => 0,
                RoutePolicy::Required => return Err(invalid("invalid route number")),
            }
        } else if digits.chars().all(|c| c.is_ascii_digit()) {
            digits
                .parse::<u32>()
                .ok()
                .filter(|route| *route <= MAX_ROUTE)
                .ok_or_else(|| invalid("invalid route number"))?
        } else {
            return Err(invalid("invalid route number"));
        };

        Ok(FlightNumber {
            number: number.to_string(),
            code_len,
            route,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.number
    }

    pub fn airline(&self) -> &str {
        &self.number[..self.code_len]
    }

    pub fn route(&self) -> u32 {
        self.route
    }
}

impl fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number)
    }
}
