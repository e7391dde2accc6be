//! Compile-time embedded puzzle inputs

/// Look up the embedded input for a given year and day.
///
/// Inputs live next to their solution module and are baked into the binary
/// with `include_str!`, so running a solver needs no files or network.
pub fn embedded_input(year: u16, day: u8) -> Option<&'static str> {
    match (year, day) {
        (2024, 3) => Some(include_str!("year_2024/day_3.txt")),
        _ => None,
    }
}
