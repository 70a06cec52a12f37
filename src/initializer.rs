//! Brouwer mean motion recovery and the per-satellite coefficient build.
//!
//! `from_kozai_elements` undoes the Kozai mean motion convention used by
//! TLEs; `build` runs the shared secular-rate computation (the `con41`,
//! `c1`, `c4`, `nodecf`, `t2cof` block common to both regimes) and then
//! dispatches to `near_earth::constants` or `deep_space::constants`
//! depending on the resulting orbital period.

use crate::deep_space;
use crate::error::{Error, Result};
use crate::model::GravityModel;
use crate::near_earth;
use crate::propagator::{Orbit, PropagatorState};
use crate::scalar::PI;

/// Recovers the Brouwer mean motion from a Kozai mean motion (the
/// convention used by TLEs) via the standard iterative deflation.
pub fn from_kozai_elements(
    gravity_model: &GravityModel,
    inclination: f64,
    raan: f64,
    eccentricity: f64,
    argument_of_perigee: f64,
    mean_anomaly: f64,
    kozai_mean_motion: f64,
) -> Result<Orbit> {
    if kozai_mean_motion <= 0.0 {
        return Err(Error::BadNumeric {
            field: "kozai_mean_motion".to_owned(),
        });
    }

    let a1 = (gravity_model.xke / kozai_mean_motion).powf(2.0 / 3.0);
    let con41 = 3.0 * inclination.cos().powi(2) - 1.0;
    let d0_numerator =
        0.75 * gravity_model.j2 * con41 / (1.0 - eccentricity.powi(2)).powf(1.5);
    let delta1 = d0_numerator / a1.powi(2);
    let a0 = a1
        * (1.0 - delta1.powi(2) - delta1 * (1.0 / 3.0 + 134.0 * delta1.powi(2) / 81.0));
    let delta0 = d0_numerator / a0.powi(2);
    let mean_motion = kozai_mean_motion / (1.0 + delta0);

    if mean_motion <= 0.0 {
        return Err(Error::BadNumeric {
            field: "brouwer_mean_motion".to_owned(),
        });
    }

    Ok(Orbit {
        inclination,
        raan,
        eccentricity,
        argument_of_perigee,
        mean_anomaly,
        mean_motion,
    })
}

/// Builds the per-satellite propagator state from Brouwer elements at
/// epoch.
///
/// `epoch_years_since_j2000` is only consulted for deep-space orbits,
/// where it feeds the lunisolar ephemeris and (for resonant orbits) the
/// sidereal time at epoch.
pub fn build<'a>(
    gravity_model: &'a GravityModel,
    epoch_to_sidereal_time: impl Fn(f64) -> f64,
    epoch_years_since_j2000: f64,
    drag_term: f64,
    orbit_0: Orbit,
) -> Result<PropagatorState<'a>> {
    if !(0.0..1.0).contains(&orbit_0.eccentricity) {
        return Err(Error::BadEccentricity {
            eccentricity: orbit_0.eccentricity,
        });
    }

    let cos_i = orbit_0.inclination.cos();
    let omeosq = 1.0 - orbit_0.eccentricity.powi(2);
    let con41 = 3.0 * cos_i.powi(2) - 1.0;

    let a0 = (gravity_model.xke / orbit_0.mean_motion).powf(2.0 / 3.0);
    let perigee = a0 * (1.0 - orbit_0.eccentricity);

    let perigee_altitude_km = (perigee - 1.0) * gravity_model.earth_radius_km;
    if perigee_altitude_km < 90.0 {
        return Err(Error::Decayed {
            reason: "perigee altitude below 90 km".to_owned(),
            minutes_since_epoch: 0.0,
        });
    }

    let sfour = if perigee_altitude_km < 98.0 {
        20.0
    } else if perigee_altitude_km < 156.0 {
        perigee_altitude_km - 78.0
    } else {
        78.0
    };
    let s = sfour / gravity_model.earth_radius_km + 1.0;
    let qzms24 = ((120.0 - sfour) / gravity_model.earth_radius_km).powi(4);

    let tsi = 1.0 / (a0 - s);
    let eta = a0 * orbit_0.eccentricity * tsi;
    let psisq = (1.0 - eta.powi(2)).abs();
    let coef = qzms24 * tsi.powi(4);
    let coef1 = coef / psisq.powf(3.5);

    let c2 = coef1
        * orbit_0.mean_motion
        * (a0
            * (1.0 + 1.5 * eta.powi(2) + orbit_0.eccentricity * eta * (4.0 + eta.powi(2)))
            + 0.375 * gravity_model.j2 * tsi / psisq
                * con41
                * (8.0 + 3.0 * eta.powi(2) * (8.0 + eta.powi(2))));
    let c1 = drag_term * c2;

    let b0 = omeosq.sqrt();
    let x1m5th = 1.0 / (a0 * omeosq).powi(2);
    // temp1/temp2/temp3 follow the teacher's p11/p12/p13 intermediate split.
    let temp1 = 1.5 * gravity_model.j2 * x1m5th * orbit_0.mean_motion;
    let temp2 = 0.5 * temp1 * gravity_model.j2 * x1m5th;
    let temp3 = -0.46875 * gravity_model.j4 * x1m5th.powi(2) * orbit_0.mean_motion;

    let nodedot_secular = -temp1 * cos_i
        + (0.5 * temp2 * (4.0 - 19.0 * cos_i.powi(2)) + 2.0 * temp3 * (3.0 - 7.0 * cos_i.powi(2)))
            * cos_i;

    let argpdot = -0.5 * temp1 * (1.0 - 5.0 * cos_i.powi(2))
        + 0.0625 * temp2 * (7.0 - 114.0 * cos_i.powi(2) + 395.0 * cos_i.powi(4))
        + temp3 * (3.0 - 36.0 * cos_i.powi(2) + 49.0 * cos_i.powi(4));

    let mdot = orbit_0.mean_motion
        + 0.5 * temp1 * b0 * con41
        + 0.0625 * temp2 * b0 * (13.0 - 78.0 * cos_i.powi(2) + 137.0 * cos_i.powi(4));

    let c4 = drag_term
        * (2.0
            * orbit_0.mean_motion
            * coef1
            * a0
            * omeosq
            * (eta * (2.0 + 0.5 * eta.powi(2))
                + orbit_0.eccentricity * (0.5 + 2.0 * eta.powi(2))
                - gravity_model.j2 * tsi / (a0 * psisq)
                    * (-3.0 * con41 * (1.0 - 2.0 * orbit_0.eccentricity * eta
                        + eta.powi(2) * (1.5 - 0.5 * orbit_0.eccentricity * eta))
                        + 0.75
                            * (1.0 - cos_i.powi(2))
                            * (2.0 * eta.powi(2) - orbit_0.eccentricity * eta * (1.0 + eta.powi(2)))
                            * (2.0 * orbit_0.argument_of_perigee).cos())));

    // k0 = 3.5 p2 (-p11 p1) C1, the RAAN secular t² coefficient.
    let nodecf = 3.5 * omeosq * (-temp1 * cos_i) * c1;
    let t2cof = 1.5 * c1;

    let period = 2.0 * PI / orbit_0.mean_motion;
    let (method, nodedot, argpdot_total, mdot_total) = if period < 225.0 {
        (
            near_earth::constants(
                drag_term,
                orbit_0,
                cos_i,
                a0,
                s,
                tsi,
                eta,
                c1,
                con41,
                perigee_altitude_km,
                coef,
                coef1,
            ),
            nodedot_secular,
            argpdot,
            mdot,
        )
    } else {
        deep_space::constants(
            epoch_to_sidereal_time,
            epoch_years_since_j2000,
            orbit_0,
            cos_i,
            a0,
            b0,
            argpdot,
            nodedot_secular,
            mdot,
        )
    };

    Ok(PropagatorState {
        gravity_model,
        nodedot,
        argpdot: argpdot_total,
        mdot: mdot_total,
        c1,
        c4,
        nodecf,
        t2cof,
        method,
        orbit_0,
    })
}
