//! Near-earth (SGP4) coefficient construction and per-call secular
//! update.

use crate::error::{Error, Result};
use crate::propagator::{self, DragExtension, EllipticDrag, Method, Orbit, SecularElements};

#[allow(clippy::too_many_arguments)]
pub(crate) fn constants(
    drag_term: f64,
    orbit_0: Orbit,
    cos_i: f64,
    a0: f64,
    s: f64,
    tsi: f64,
    eta: f64,
    c1: f64,
    con41: f64,
    perigee_altitude_km: f64,
    coef: f64,
    coef1: f64,
) -> Method {
    let x1mth2 = 1.0 - cos_i.powi(2);
    let x7thm1 = 7.0 * cos_i.powi(2) - 1.0;
    let j3_over_j2 = crate::model::WGS72.j3_over_j2;

    let aycof = -0.5 * j3_over_j2 * orbit_0.inclination.sin();
    let xlcof = if (1.0 + cos_i).abs() > 1.5e-12 {
        -0.25 * j3_over_j2 * orbit_0.inclination.sin() * (3.0 + 5.0 * cos_i) / (1.0 + cos_i)
    } else {
        -0.25 * j3_over_j2 * orbit_0.inclination.sin() * (3.0 + 5.0 * cos_i) / 1.5e-12
    };

    let drag_extension = if perigee_altitude_km < 220.0 {
        DragExtension::Simplified
    } else {
        let d2 = 4.0 * a0 * tsi * c1.powi(2);
        let temp = d2 * tsi * c1 / 3.0;
        let d3 = (17.0 * a0 + s) * temp;
        let d4 = 0.5 * temp * a0 * tsi * (221.0 * a0 + 31.0 * s) * c1;

        DragExtension::Extended {
            d2,
            d3,
            d4,
            t3cof: d2 + 2.0 * c1.powi(2),
            t4cof: 0.25 * (3.0 * d3 + c1 * (12.0 * d2 + 10.0 * c1.powi(2))),
            t5cof: 0.2
                * (3.0 * d4
                    + 12.0 * c1 * d3
                    + 6.0 * d2.powi(2)
                    + 15.0 * c1.powi(2) * (2.0 * d2 + c1.powi(2))),
            c5: drag_term
                * 2.0
                * coef1
                * a0
                * (1.0 - orbit_0.eccentricity.powi(2))
                * (1.0 + 2.75 * (eta.powi(2) + eta * orbit_0.eccentricity) + orbit_0.eccentricity * eta.powi(3)),
            eta,
            sinmao: orbit_0.mean_anomaly.sin(),
            elliptic: if orbit_0.eccentricity > 1.0e-4 {
                EllipticDrag::Some {
                    delmo: (1.0 + eta * orbit_0.mean_anomaly.cos()).powi(3),
                    omgcof: drag_term
                        * (-2.0
                            * coef
                            * tsi
                            * j3_over_j2
                            * orbit_0.mean_motion
                            * orbit_0.inclination.sin()
                            / orbit_0.eccentricity)
                        * orbit_0.argument_of_perigee.cos(),
                    xmcof: -2.0 / 3.0 * coef * drag_term / (orbit_0.eccentricity * eta),
                }
            } else {
                EllipticDrag::None
            },
        }
    };

    Method::NearEarth {
        a0,
        con41,
        x1mth2,
        x7thm1,
        aycof,
        xlcof,
        drag_extension,
    }
}

/// Step A of the near-earth propagation: secular drag and gravitational
/// drift, producing the elements fed into the Lyddane long-period
/// correction (Step B).
#[allow(clippy::too_many_arguments)]
pub(crate) fn secular_update(
    state: &propagator::PropagatorState,
    a0: f64,
    con41: f64,
    x1mth2: f64,
    x7thm1: f64,
    aycof: f64,
    xlcof: f64,
    drag_extension: &DragExtension,
    t: f64,
    raan_t: f64,
    argp_t: f64,
) -> Result<SecularElements> {
    let mean_anomaly_linear = state.orbit_0.mean_anomaly + state.mdot * t;
    let (argument_of_perigee, mean_anomaly, a, eccentricity_raw) = match drag_extension {
        DragExtension::Simplified => (
            argp_t,
            mean_anomaly_linear + state.orbit_0.mean_motion * state.t2cof * t.powi(2),
            a0 * (1.0 - state.c1 * t).powi(2),
            state.orbit_0.eccentricity - state.c4 * t,
        ),
        DragExtension::Extended {
            d2,
            d3,
            d4,
            t3cof,
            t4cof,
            t5cof,
            c5,
            eta,
            sinmao,
            elliptic,
        } => {
            let (argument_of_perigee, mean_anomaly_with_drag) = match elliptic {
                EllipticDrag::Some { delmo, omgcof, xmcof } => {
                    let drag_increment = *xmcof * ((1.0 + eta * mean_anomaly_linear.cos()).powi(3) - delmo)
                        + omgcof * t;
                    (argp_t - drag_increment, mean_anomaly_linear + drag_increment)
                }
                EllipticDrag::None => (argp_t, mean_anomaly_linear),
            };
            (
                argument_of_perigee,
                mean_anomaly_with_drag
                    + state.orbit_0.mean_motion
                        * (state.t2cof * t.powi(2) + t3cof * t.powi(3) + t.powi(4) * (t4cof + t * t5cof)),
                a0 * (1.0 - state.c1 * t - d2 * t.powi(2) - d3 * t.powi(3) - d4 * t.powi(4)).powi(2),
                state.orbit_0.eccentricity
                    - (state.c4 * t + c5 * (mean_anomaly_with_drag.sin() - sinmao)),
            )
        }
    };

    if !(-0.001..1.0).contains(&eccentricity_raw) {
        return Err(Error::Decayed {
            reason: "eccentricity diverged during secular update".to_owned(),
            minutes_since_epoch: t,
        });
    }
    let eccentricity = eccentricity_raw.max(1.0e-6);
    if a < 0.95 {
        return Err(Error::Decayed {
            reason: "semi-major axis fell below 0.95 earth radii".to_owned(),
            minutes_since_epoch: t,
        });
    }

    Ok(SecularElements {
        orbit: Orbit {
            inclination: state.orbit_0.inclination,
            raan: raan_t,
            eccentricity,
            argument_of_perigee,
            mean_anomaly,
            mean_motion: state.gravity_model.xke / a.powf(1.5),
        },
        a,
        aycof,
        x1mth2,
        x7thm1,
        xlcof,
        con41,
    })
}
