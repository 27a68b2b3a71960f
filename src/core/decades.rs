//! Fixed decade layout of the name database.

/// Number of decades stored per name.
pub const NDECADES: usize = 12;

/// Calendar year of decade index 0.
pub const START_DECADE: u32 = 1900;

/// Years between two consecutive decade indices.
pub const DECADE_SPAN_YEARS: u32 = 10;

/// Largest rank the plot band is scaled for.
pub const MAX_RANK: u32 = 1000;

/// Returns the first year of the decade at `index`.
///
/// Indices past the stored range are still mapped linearly, so `12` yields
/// `2020` even though no rank is stored for it.
#[must_use]
pub const fn decade_year(index: usize) -> u32 {
    START_DECADE + DECADE_SPAN_YEARS * index as u32
}
