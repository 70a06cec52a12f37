//! TLE decoder.
//!
//! Parses two fixed-width 69-character lines (plus an optional free-form
//! name) into a validated [`Tle`] record. Column positions follow the
//! layout in spec.md §4.2, using 0-based byte offsets.

use crate::error::{Error, Line};
use crate::scalar::{fixed_field, parse_implicit_mantissa};
use chrono::{DateTime, Duration, TimeZone, Utc};

/// Orbital elements at epoch, as decoded from a TLE.
#[derive(Debug, Clone)]
pub struct Tle {
    pub name: Option<String>,
    pub catalog_number: u32,
    pub international_designator: String,
    pub epoch: DateTime<Utc>,
    pub mean_motion_dot_over_2: f64,
    pub mean_motion_ddot_over_6: f64,
    pub bstar: f64,
    pub inclination: f64,
    pub raan: f64,
    pub eccentricity: f64,
    pub argument_of_perigee: f64,
    pub mean_anomaly: f64,
    pub mean_motion: f64,
    pub revolution_number: u32,
}

fn require_length(line: &str, which: Line) -> Result<(), Error> {
    if line.len() != 69 {
        return Err(Error::BadLineLength {
            line: which,
            length: line.len(),
        });
    }
    Ok(())
}

fn require_prefix(line: &str, which: Line, expected: char) -> Result<(), Error> {
    match line.chars().next() {
        Some(found) if found == expected => Ok(()),
        Some(found) => Err(Error::BadLinePrefix { line: which, found }),
        None => Err(Error::BadLinePrefix {
            line: which,
            found: '\0',
        }),
    }
}

fn parse_float(field: &str, name: &str) -> Result<f64, Error> {
    field.trim().parse().map_err(|_| Error::BadNumeric {
        field: name.to_owned(),
    })
}

fn parse_uint(field: &str, name: &str) -> Result<u32, Error> {
    field.trim().parse().map_err(|_| Error::BadNumeric {
        field: name.to_owned(),
    })
}

/// Reconstructs the TLE epoch from a 2-digit year and a fractional,
/// 1-based day-of-year.
///
/// `yy < 57` maps to `2000 + yy`, otherwise `1900 + yy`, per the TLE
/// convention (chosen so the format never has to represent a year before
/// Sputnik).
fn reconstruct_epoch(yy: u16, day: f64) -> Result<DateTime<Utc>, Error> {
    let year = if yy < 57 { 2000 + yy as i32 } else { 1900 + yy as i32 };
    if day < 1.0 {
        return Err(Error::BadEpoch { year: yy, day });
    }
    let jan_first = Utc
        .with_ymd_and_hms(year, 1, 1, 0, 0, 0)
        .single()
        .ok_or(Error::BadEpoch { year: yy, day })?;
    let whole_days = day.trunc() as i64 - 1;
    let fractional_seconds = (day.fract() * 86400.0).round() as i64;
    jan_first
        .checked_add_signed(Duration::days(whole_days))
        .and_then(|instant| instant.checked_add_signed(Duration::seconds(fractional_seconds)))
        .ok_or(Error::BadEpoch { year: yy, day })
}

/// Decodes a validated [`Tle`] from an optional free-form name and two
/// 69-character lines.
///
/// Checksum digits (the final column of each line) are ignored by design:
/// the reference implementations do not enforce them, and test vectors
/// with deliberately wrong checksums exist in the wild (spec §9, "Open
/// question: checksum validation").
pub fn decode_tle(name: Option<String>, line1: &str, line2: &str) -> Result<Tle, Error> {
    require_length(line1, Line::One)?;
    require_length(line2, Line::Two)?;
    require_prefix(line1, Line::One, '1')?;
    require_prefix(line2, Line::Two, '2')?;

    let catalog_number_1 = parse_uint(fixed_field(line1, 2, 5), "catalog_number")?;
    let catalog_number_2 = parse_uint(fixed_field(line2, 2, 5), "catalog_number")?;
    if catalog_number_1 != catalog_number_2 {
        return Err(Error::CatalogMismatch {
            line1: catalog_number_1,
            line2: catalog_number_2,
        });
    }

    let international_designator = fixed_field(line1, 9, 8).to_owned();

    let epoch_year_field = fixed_field(line1, 18, 2);
    let epoch_year: u16 = epoch_year_field.trim().parse().map_err(|_| Error::BadNumeric {
        field: "epoch_year".to_owned(),
    })?;
    let epoch_day = parse_float(fixed_field(line1, 20, 12), "epoch_day")?;
    let epoch = reconstruct_epoch(epoch_year, epoch_day)?;

    let mean_motion_dot_over_2 = parse_float(fixed_field(line1, 33, 10), "mean_motion_dot_over_2")?;
    let mean_motion_ddot_over_6 = parse_implicit_mantissa(fixed_field(line1, 44, 8))?;
    let bstar = parse_implicit_mantissa(fixed_field(line1, 53, 8))?;

    let inclination = parse_float(fixed_field(line2, 8, 8), "inclination")?;
    let raan = parse_float(fixed_field(line2, 17, 8), "raan")?;
    let eccentricity = {
        let field = fixed_field(line2, 26, 7);
        let digits: f64 = field.trim().parse().map_err(|_| Error::BadNumeric {
            field: "eccentricity".to_owned(),
        })?;
        digits / 1.0e7
    };
    if !(0.0..1.0).contains(&eccentricity) {
        return Err(Error::BadEccentricity { eccentricity });
    }
    let argument_of_perigee = parse_float(fixed_field(line2, 34, 8), "argument_of_perigee")?;
    let mean_anomaly = parse_float(fixed_field(line2, 43, 8), "mean_anomaly")?;
    let mean_motion = parse_float(fixed_field(line2, 52, 11), "mean_motion")?;
    if mean_motion <= 0.0 {
        return Err(Error::BadNumeric {
            field: "mean_motion".to_owned(),
        });
    }
    let revolution_number = parse_uint(fixed_field(line2, 63, 5), "revolution_number")?;

    Ok(Tle {
        name,
        catalog_number: catalog_number_1,
        international_designator,
        epoch,
        mean_motion_dot_over_2,
        mean_motion_ddot_over_6,
        bstar,
        inclination,
        raan,
        eccentricity,
        argument_of_perigee,
        mean_anomaly,
        mean_motion,
        revolution_number,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_satellite_00005() {
        let tle = decode_tle(
            None,
            "1 00005U 58002B   00179.78495062  .00000023  00000-0  28098-4 0  4753",
            "2 00005  34.2682 348.7242 1859667 331.7664  19.3264 10.82419157413667",
        )
        .unwrap();
        assert_eq!(tle.catalog_number, 5);
        assert!((tle.eccentricity - 0.1859667).abs() < 1e-9);
        assert!((tle.inclination - 34.2682).abs() < 1e-9);
        assert!((tle.mean_motion - 10.82419157).abs() < 1e-7);
        assert_eq!(tle.revolution_number, 41366);
    }

    #[test]
    fn rejects_mismatched_catalog_numbers() {
        let err = decode_tle(
            None,
            "1 00005U 58002B   00179.78495062  .00000023  00000-0  28098-4 0  4753",
            "2 00006  34.2682 348.7242 1859667 331.7664  19.3264 10.82419157413667",
        )
        .unwrap_err();
        assert!(matches!(err, Error::CatalogMismatch { .. }));
    }

    #[test]
    fn rejects_bad_line_length() {
        let err = decode_tle(
            None,
            "1 00005U 58002B   00179.78495062  .00000023  00000-0  28098-4 0  475",
            "2 00005  34.2682 348.7242 1859667 331.7664  19.3264 10.82419157413667",
        )
        .unwrap_err();
        assert!(matches!(err, Error::BadLineLength { .. }));
    }

    #[test]
    fn rejects_bad_prefix() {
        let err = decode_tle(
            None,
            "3 00005U 58002B   00179.78495062  .00000023  00000-0  28098-4 0  4753",
            "2 00005  34.2682 348.7242 1859667 331.7664  19.3264 10.82419157413667",
        )
        .unwrap_err();
        assert!(matches!(err, Error::BadLinePrefix { .. }));
    }

    #[test]
    fn ignores_checksum_even_when_wrong() {
        // Final digit of each line deliberately wrong; spec says checksums
        // are not enforced.
        let mut line1 =
            "1 00005U 58002B   00179.78495062  .00000023  00000-0  28098-4 0  4753".as_bytes().to_vec();
        *line1.last_mut().unwrap() = b'9';
        let line1 = String::from_utf8(line1).unwrap();
        decode_tle(
            None,
            &line1,
            "2 00005  34.2682 348.7242 1859667 331.7664  19.3264 10.82419157413667",
        )
        .unwrap();
    }

    #[test]
    fn two_digit_year_before_57_is_2000s() {
        let tle = decode_tle(
            None,
            "1 00005U 58002B   00179.78495062  .00000023  00000-0  28098-4 0  4753",
            "2 00005  34.2682 348.7242 1859667 331.7664  19.3264 10.82419157413667",
        )
        .unwrap();
        assert_eq!(tle.epoch.format("%Y").to_string(), "2000");
    }

    #[test]
    fn two_digit_year_at_or_after_57_is_1900s() {
        let tle = decode_tle(
            None,
            "1 88888U          80275.98708465  .00073094  13844-3  66816-4 0    87",
            "2 88888  72.8435 115.9689 0086731  52.6988 110.5714 16.05824518  1058",
        )
        .unwrap();
        assert_eq!(tle.epoch.format("%Y").to_string(), "1980");
    }
}
