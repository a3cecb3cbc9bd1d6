/// Renders the fixed-width text boarding card used by the seat desk console.
///
/// The card is the field line framed by a `+---+` banner and a blank `|   |`
/// border above and below, all of the same width.
pub fn console_card(passenger: &str, seat: &str, flight_number: &str, aircraft_model: &str) -> String {
    let output = format!(
        "| Name: {}  Seat: {}  Flight: {}  Aircraft: {} |",
        passenger, seat, flight_number, aircraft_model
    );
    let inner = output.chars().count() - 2;
    let banner = format!("+{}+", "-".repeat(inner));
    let border = format!("|{}|", " ".repeat(inner));
    [banner.as_str(), border.as_str(), output.as_str(), border.as_str(), banner.as_str()].join("\n")
}
