//! Scalar helpers shared by the decoder and the propagator.
//!
//! These are the three leaf-level utilities the rest of the crate builds
//! on: angle wrapping, fixed-column substring extraction, and the TLE's
//! implicit-decimal scientific notation.

use crate::error::Error;

pub const PI: f64 = std::f64::consts::PI;

/// Wraps `x` into `[0, 2π)`.
///
/// Used at every angular accumulation in the propagator (RAAN, argument of
/// perigee, mean anomaly) so that drift over many revolutions never grows
/// outside a single turn.
pub fn normalize_two_pi(x: f64) -> f64 {
    x.rem_euclid(2.0 * PI)
}

/// Extracts the substring of `line` spanning `[column, column + length)`,
/// trimmed of surrounding whitespace.
///
/// Columns are 0-based byte offsets, matching the layout tables in the TLE
/// format (as opposed to the 1-based column numbers used in most NORAD
/// documentation).
pub fn fixed_field(line: &str, column: usize, length: usize) -> &str {
    line[column..column + length].trim()
}

/// Decodes a TLE-packed scientific mantissa of the form `"±DDDDD±E"`: the
/// mantissa has an implicit leading decimal point and the trailing signed
/// digit is a base-10 exponent.
///
/// `" 81062-5"` decodes to `0.81062e-5`; `"-11606-4"` to `-0.11606e-4`;
/// `" 00000-0"` to exactly `0.0`. Misreading this field by dropping the
/// implicit decimal point is a known historical defect (it silently
/// inflates every downstream quantity by `10^5`), so this function is the
/// single place that interprets it.
pub fn parse_implicit_mantissa(field: &str) -> Result<f64, Error> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Err(Error::BadNumeric {
            field: "implicit mantissa".to_owned(),
        });
    }
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    // The exponent is the trailing signed single digit; everything before
    // it is the mantissa digits with an implied leading "0.".
    if digits.len() < 2 {
        return Err(Error::BadNumeric {
            field: "implicit mantissa".to_owned(),
        });
    }
    let (mantissa_digits, exponent_field) = digits.split_at(digits.len() - 2);
    let mantissa: f64 = format!("0.{mantissa_digits}")
        .parse()
        .map_err(|_| Error::BadNumeric {
            field: "implicit mantissa".to_owned(),
        })?;
    let exponent: i32 = exponent_field.parse().map_err(|_| Error::BadNumeric {
        field: "implicit mantissa exponent".to_owned(),
    })?;
    Ok(sign * mantissa * 10f64.powi(exponent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_two_pi_wraps_into_range() {
        for x in [-10.0, -2.0 * PI, -0.001, 0.0, 0.001, 2.0 * PI, 123.456] {
            let wrapped = normalize_two_pi(x);
            assert!((0.0..2.0 * PI).contains(&wrapped), "{x} -> {wrapped}");
        }
    }

    #[test]
    fn normalize_two_pi_is_idempotent() {
        let x = 17.42;
        let once = normalize_two_pi(x);
        let twice = normalize_two_pi(once);
        assert_eq!(once, twice);
    }

    #[test]
    fn fixed_field_trims_whitespace() {
        let line = "1 00005U 58002B   00179.78495062";
        assert_eq!(fixed_field(line, 2, 5), "00005");
        assert_eq!(fixed_field(line, 9, 8), "58002B");
    }

    #[test]
    fn bstar_mantissa_decoding_regression() {
        assert!((parse_implicit_mantissa(" 81062-5").unwrap() - 0.81062e-5).abs() < 1e-15);
        assert!((parse_implicit_mantissa("-11606-4").unwrap() - (-0.11606e-4)).abs() < 1e-15);
        assert_eq!(parse_implicit_mantissa(" 00000-0").unwrap(), 0.0);
    }

    #[test]
    fn bstar_mantissa_is_not_misread_without_implicit_point() {
        // A decoder that forgets the implicit decimal point would read
        // " 81062-5" as 0.81062 instead of 0.81062e-5 -- five orders of
        // magnitude off.
        let value = parse_implicit_mantissa(" 81062-5").unwrap();
        assert!((value - 0.81062).abs() > 1e-3);
    }
}
