//! Crate-wide error type.
//!
//! Every failure mode named in the decoder, initializer and propagator is a
//! variant here so callers can match on it instead of parsing a message
//! string. This follows the teacher crate's `gp::Error` shape (a proper enum
//! with fields) rather than its older flat `message: String` error structs.

/// Which of the two TLE lines a line-scoped error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    One,
    Two,
}

impl core::fmt::Display for Line {
    fn fmt(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Line::One => formatter.write_str("line 1"),
            Line::Two => formatter.write_str("line 2"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Error {
    /// A TLE line is not exactly 69 characters.
    BadLineLength { line: Line, length: usize },

    /// A TLE line does not start with the expected prefix character.
    BadLinePrefix { line: Line, found: char },

    /// The catalog numbers on line 1 and line 2 disagree.
    CatalogMismatch { line1: u32, line2: u32 },

    /// A numeric field failed to parse.
    BadNumeric { field: String },

    /// The epoch's year/day-of-year cannot be reconstructed into a calendar
    /// instant.
    BadEpoch { year: u16, day: f64 },

    /// Eccentricity recovered from the TLE (or propagated) is outside
    /// `[0, 1)`.
    BadEccentricity { eccentricity: f64 },

    /// The orbit has decayed: perigee altitude fell below the physical
    /// floor, the semi-major axis or eccentricity diverged, or the
    /// semi-latus rectum went negative.
    Decayed { reason: String, minutes_since_epoch: f64 },
}

impl core::fmt::Display for Error {
    fn fmt(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::BadLineLength { line, length } => write!(
                formatter,
                "{line} must be exactly 69 characters, found {length}"
            ),
            Error::BadLinePrefix { line, found } => write!(
                formatter,
                "{line} must start with '{}', found '{found}'",
                match line {
                    Line::One => '1',
                    Line::Two => '2',
                }
            ),
            Error::CatalogMismatch { line1, line2 } => write!(
                formatter,
                "catalog number mismatch between lines: {line1} != {line2}"
            ),
            Error::BadNumeric { field } => write!(formatter, "field '{field}' failed to parse"),
            Error::BadEpoch { year, day } => {
                write!(formatter, "epoch out of range: year {year}, day {day}")
            }
            Error::BadEccentricity { eccentricity } => write!(
                formatter,
                "eccentricity {eccentricity} is outside the range [0, 1)"
            ),
            Error::Decayed {
                reason,
                minutes_since_epoch,
            } => write!(
                formatter,
                "orbit decayed {minutes_since_epoch} minutes after epoch: {reason}"
            ),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
