//! WGS-72 gravity model constants.
//!
//! SGP4/SDP4 is defined against WGS-72, not WGS-84: substituting WGS-84
//! constants reproduces km-scale errors against the Vallado 2006 reference
//! data (see spec §9 design notes).

use crate::scalar::PI;

/// Frozen constant table consumed by the initializer.
pub struct GravityModel {
    /// Equatorial radius of the earth, km.
    pub earth_radius_km: f64,
    /// Square root of earth's gravitational parameter, in earth radii^1.5 min^-1.
    pub xke: f64,
    /// Un-normalized second zonal harmonic.
    pub j2: f64,
    /// Un-normalized third zonal harmonic.
    pub j3: f64,
    /// Un-normalized fourth zonal harmonic.
    pub j4: f64,
    /// `J3 / J2`.
    pub j3_over_j2: f64,
    /// Atmospheric shell boundary, km (78 km above the WGS-72 ellipsoid).
    pub s_ref_km: f64,
    /// `((120 - 78) / earth_radius_km)^4`.
    pub qoms2t: f64,
}

const fn gravity_model(earth_radius_km: f64, mu: f64, j2: f64, j3: f64, j4: f64) -> GravityModel {
    // xke = 60 / sqrt(Re^3 / mu), in earth radii^1.5 min^-1.
    let xke = 60.0 / sqrt_const(earth_radius_km * earth_radius_km * earth_radius_km / mu);
    GravityModel {
        earth_radius_km,
        xke,
        j2,
        j3,
        j4,
        j3_over_j2: j3 / j2,
        s_ref_km: 78.0,
        qoms2t: pow4_const((120.0 - 78.0) / earth_radius_km),
    }
}

// `f64::sqrt`/`f64::powi` are not `const fn` on stable; these Newton
// iterations let the WGS-72 table stay a `const` the same way the teacher
// keeps `WGS72`/`WGS84` as plain `const` values.
const fn sqrt_const(x: f64) -> f64 {
    let mut guess = x;
    let mut i = 0;
    while i < 64 {
        guess = 0.5 * (guess + x / guess);
        i += 1;
    }
    guess
}

const fn pow4_const(x: f64) -> f64 {
    x * x * x * x
}

/// WGS-72 gravitational constants, as published in Vallado 2006.
pub const WGS72: GravityModel = gravity_model(
    6378.135,
    398_600.8,
    0.001082616,
    -0.00000253881,
    -0.00000165597,
);

/// Greenwich sidereal time at the TLE epoch, computed from the IAU-1982
/// polynomial, normalized to `[0, 2*PI)`.
///
/// `epoch` is years since UTC 1 January 2000, 12h00 (J2000).
pub fn epoch_to_sidereal_time(epoch: f64) -> f64 {
    let c2000 = epoch / 100.0;
    ((-6.2e-6 * c2000.powi(3)
        + 0.093104 * c2000.powi(2)
        + (876_600.0 * 3600.0 + 8_640_184.812866) * c2000
        + 67310.54841)
        * (PI / 180.0)
        / 240.0)
        .rem_euclid(2.0 * PI)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wgs72_xke_matches_published_value() {
        // Published WGS-72 xke = 0.0743669161.
        assert!((WGS72.xke - 0.0743669161).abs() < 1e-9);
    }

    #[test]
    #[allow(clippy::excessive_precision)]
    fn qoms2t_matches_published_value() {
        assert!((WGS72.qoms2t - 1.880279159015270e-9).abs() < 1e-18);
    }
}
