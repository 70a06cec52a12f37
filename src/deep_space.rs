//! Lunisolar deep-space perturbation setup (SDP4) and the 720-minute
//! geopotential resonance integrator.
//!
//! Used when the Brouwer mean motion corresponds to a period of 225
//! minutes or more (see `initializer::constants`'s dispatch).

use crate::error::{Error, Result};
use crate::model::GravityModel;
use crate::propagator::{self, Method, Orbit, Resonance, Resonant};
use crate::scalar::PI;
use crate::third_body;
use std::cmp::Ordering;

#[allow(clippy::excessive_precision)]
const SIDEREAL_SPEED: f64 = 4.37526908801129966e-3;
const SOLAR_ECCENTRICITY: f64 = 0.01675;
const LUNAR_ECCENTRICITY: f64 = 0.05490;
const SOLAR_MEAN_MOTION: f64 = 1.19459e-5;
const LUNAR_MEAN_MOTION: f64 = 1.5835218e-4;
const SOLAR_PERTURBATION_COEFFICIENT: f64 = 2.9864797e-6;
const LUNAR_PERTURBATION_COEFFICIENT: f64 = 4.7968065e-7;
const DELTA_T: f64 = 720.0;
const LAMBDA31: f64 = 0.13130908;
const LAMBDA22: f64 = 2.8843198;
const LAMBDA33: f64 = 0.37448087;
const G22: f64 = 5.7686396;
const G32: f64 = 0.95240898;
const G44: f64 = 1.8014998;
const G52: f64 = 1.0508330;
const G54: f64 = 4.4108898;

/// State of the 720-minute geopotential resonance integrator.
///
/// Propagation times must be monotonic while reusing the same state; a
/// direction reversal resets the integrator back to epoch rather than
/// panicking, so callers sweeping forward and backward through the same
/// satellite don't need to allocate a fresh state for every direction
/// change.
#[derive(Debug, Clone, Copy)]
pub struct ResonanceState {
    t: f64,
    mean_motion: f64,
    lambda: f64,
    mean_motion_0: f64,
    lambda_0: f64,
}

impl ResonanceState {
    pub(crate) fn new(mean_motion_0: f64, lambda_0: f64) -> ResonanceState {
        ResonanceState {
            t: 0.0,
            mean_motion: mean_motion_0,
            lambda: lambda_0,
            mean_motion_0,
            lambda_0,
        }
    }

    /// Integrator time in minutes since epoch.
    pub fn t(&self) -> f64 {
        self.t
    }

    #[allow(clippy::too_many_arguments)]
    fn integrate(
        &mut self,
        gravity_model: &GravityModel,
        argpdot: f64,
        argp_0: f64,
        lambda_dot_0: f64,
        resonance: &Resonance,
        sidereal_time_0: f64,
        t: f64,
        raan_t: f64,
        argp_t: f64,
    ) -> (f64, f64) {
        // A direction reversal mid-sweep re-seeds the integrator from
        // epoch instead of panicking, so callers sweeping a time grid
        // that changes sign don't need to build a fresh state.
        if self.t != 0.0 && self.t.is_sign_positive() != t.is_sign_positive() {
            self.t = 0.0;
            self.mean_motion = self.mean_motion_0;
            self.lambda = self.lambda_0;
        }
        let sidereal_time = (sidereal_time_0 + t * SIDEREAL_SPEED).rem_euclid(2.0 * PI);
        let (delta_t, ordering) = if t > 0.0 {
            (DELTA_T, Ordering::Less)
        } else {
            (-DELTA_T, Ordering::Greater)
        };
        loop {
            let lambda_dot = self.mean_motion + lambda_dot_0;
            let (ni_dot, ni_ddot) = match resonance {
                Resonance::Synchronous { dr1, dr2, dr3 } => (
                    dr1 * (self.lambda - LAMBDA31).sin()
                        + dr2 * (2.0 * (self.lambda - LAMBDA22)).sin()
                        + dr3 * (3.0 * (self.lambda - LAMBDA33)).sin(),
                    (dr1 * (self.lambda - LAMBDA31).cos()
                        + 2.0 * dr2 * (2.0 * (self.lambda - LAMBDA22)).cos()
                        + 3.0 * dr3 * (3.0 * (self.lambda - LAMBDA33)).cos())
                        * lambda_dot,
                ),
                Resonance::SemiSynchronous {
                    d2201,
                    d2211,
                    d3210,
                    d3222,
                    d4410,
                    d4422,
                    d5220,
                    d5232,
                    d5421,
                    d5433,
                    argpdot: _,
                } => {
                    let argp_i = argp_0 + argpdot * self.t;
                    (
                        d2201 * (2.0 * argp_i + self.lambda - G22).sin()
                            + d2211 * (self.lambda - G22).sin()
                            + d3210 * (argp_i + self.lambda - G32).sin()
                            + d3222 * (-argp_i + self.lambda - G32).sin()
                            + d4410 * (2.0 * argp_i + 2.0 * self.lambda - G44).sin()
                            + d4422 * (2.0 * self.lambda - G44).sin()
                            + d5220 * (argp_i + self.lambda - G52).sin()
                            + d5232 * (-argp_i + self.lambda - G52).sin()
                            + d5421 * (argp_i + 2.0 * self.lambda - G54).sin()
                            + d5433 * (-argp_i + 2.0 * self.lambda - G54).sin(),
                        (d2201 * (2.0 * argp_i + self.lambda - G22).cos()
                            + d2211 * (self.lambda - G22).cos()
                            + d3210 * (argp_i + self.lambda - G32).cos()
                            + d3222 * (-argp_i + self.lambda - G32).cos()
                            + d5220 * (argp_i + self.lambda - G52).cos()
                            + d5232 * (-argp_i + self.lambda - G52).cos()
                            + 2.0
                                * (d4410 * (2.0 * argp_i + 2.0 * self.lambda - G44).cos()
                                    + d4422 * (2.0 * self.lambda - G44).cos()
                                    + d5421 * (argp_i + 2.0 * self.lambda - G54).cos()
                                    + d5433 * (-argp_i + 2.0 * self.lambda - G54).cos()))
                            * lambda_dot,
                    )
                }
            };
            if (t - delta_t).partial_cmp(&self.t).unwrap_or(Ordering::Equal) == ordering {
                return (
                    (gravity_model.xke
                        / (self.mean_motion
                            + ni_dot * (t - self.t)
                            + ni_ddot * (t - self.t).powi(2) * 0.5))
                        .powf(2.0 / 3.0),
                    match resonance {
                        Resonance::Synchronous { .. } => {
                            self.lambda + lambda_dot * (t - self.t)
                                + ni_dot * (t - self.t).powi(2) * 0.5
                                - raan_t
                                - argp_t
                                + sidereal_time
                        }
                        Resonance::SemiSynchronous { .. } => {
                            self.lambda + lambda_dot * (t - self.t)
                                + ni_dot * (t - self.t).powi(2) * 0.5
                                - 2.0 * raan_t
                                + 2.0 * sidereal_time
                        }
                    },
                );
            }
            self.t += delta_t;
            self.mean_motion += ni_dot * delta_t + ni_ddot * (DELTA_T.powi(2) / 2.0);
            self.lambda += lambda_dot * delta_t + ni_dot * (DELTA_T.powi(2) / 2.0);
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn constants(
    epoch_to_sidereal_time: impl Fn(f64) -> f64,
    epoch_years_since_j2000: f64,
    orbit_0: Orbit,
    cos_i: f64,
    a0: f64,
    b0: f64,
    argpdot: f64,
    nodedot: f64,
    mdot: f64,
) -> (Method, f64, f64, f64) {
    let d1900 = (epoch_years_since_j2000 + 100.0) * 365.25;
    let (solar_perturbations, solar_dots) = third_body::perturbations_and_dots(
        orbit_0.inclination,
        orbit_0.eccentricity,
        orbit_0.argument_of_perigee,
        orbit_0.mean_motion,
        0.39785416,
        0.91744867,
        orbit_0.raan.sin(),
        orbit_0.raan.cos(),
        SOLAR_ECCENTRICITY,
        -0.98088458,
        0.1945905,
        SOLAR_PERTURBATION_COEFFICIENT,
        SOLAR_MEAN_MOTION,
        (6.2565837 + 0.017201977 * d1900).rem_euclid(2.0 * PI),
        orbit_0.eccentricity.mul_add(-orbit_0.eccentricity, 1.0),
        b0,
    );

    let lunar_raan_epsilon = (4.5236020 - 9.2422029e-4 * d1900).rem_euclid(2.0 * PI);
    let lunar_inclination_cosine = 0.91375164 - 0.03568096 * lunar_raan_epsilon.cos();
    let lunar_inclination_sine = (1.0 - lunar_inclination_cosine.powi(2)).sqrt();
    let lunar_raan_sine = 0.089683511 * lunar_raan_epsilon.sin() / lunar_inclination_sine;
    let lunar_raan_cosine = (1.0 - lunar_raan_sine.powi(2)).sqrt();
    let lunar_argument_of_perigee = 5.8351514
        + 0.001944368 * d1900
        + (0.39785416 * lunar_raan_epsilon.sin() / lunar_inclination_sine).atan2(
            lunar_raan_cosine * lunar_raan_epsilon.cos()
                + 0.91744867 * lunar_raan_sine * lunar_raan_epsilon.sin(),
        )
        - lunar_raan_epsilon;
    let (lunar_perturbations, lunar_dots) = third_body::perturbations_and_dots(
        orbit_0.inclination,
        orbit_0.eccentricity,
        orbit_0.argument_of_perigee,
        orbit_0.mean_motion,
        lunar_inclination_sine,
        lunar_inclination_cosine,
        orbit_0.raan.sin() * lunar_raan_cosine - orbit_0.raan.cos() * lunar_raan_sine,
        lunar_raan_cosine * orbit_0.raan.cos() + lunar_raan_sine * orbit_0.raan.sin(),
        LUNAR_ECCENTRICITY,
        lunar_argument_of_perigee.sin(),
        lunar_argument_of_perigee.cos(),
        LUNAR_PERTURBATION_COEFFICIENT,
        LUNAR_MEAN_MOTION,
        (-1.1151842 + 0.228027132 * d1900).rem_euclid(2.0 * PI),
        orbit_0.eccentricity.mul_add(-orbit_0.eccentricity, 1.0),
        b0,
    );

    let nodedot_total = nodedot + (solar_dots.right_ascension + lunar_dots.right_ascension);
    let argpdot_total = argpdot + (solar_dots.argument_of_perigee + lunar_dots.argument_of_perigee);
    let mdot_total = mdot + (solar_dots.mean_anomaly + lunar_dots.mean_anomaly);

    let resonant = if (orbit_0.mean_motion < 0.0052359877 && orbit_0.mean_motion > 0.0034906585)
        || (orbit_0.mean_motion >= 8.26e-3 && orbit_0.mean_motion <= 9.24e-3 && orbit_0.eccentricity >= 0.5)
    {
        let sidereal_time_0 = epoch_to_sidereal_time(epoch_years_since_j2000);
        if orbit_0.mean_motion < 0.0052359877 && orbit_0.mean_motion > 0.0034906585 {
            let p17 = 3.0 * (orbit_0.mean_motion / a0).powi(2);
            Resonant::Some {
                xlamo: (orbit_0.mean_anomaly + orbit_0.raan + orbit_0.argument_of_perigee
                    - sidereal_time_0)
                    .rem_euclid(2.0 * PI),
                xlamo_dot: mdot_total - SIDEREAL_SPEED + nodedot_total + argpdot_total
                    - orbit_0.mean_motion,
                sidereal_time_0,
                resonance: Resonance::Synchronous {
                    dr1: p17
                        * (0.9375 * orbit_0.inclination.sin().powi(2) * (1.0 + 3.0 * cos_i)
                            - 0.75 * (1.0 + cos_i))
                        * (1.0 + 2.0 * orbit_0.eccentricity.powi(2))
                        * 2.1460748e-6
                        / a0,
                    dr2: 2.0
                        * p17
                        * (0.75 * (1.0 + cos_i).powi(2))
                        * (1.0
                            + orbit_0.eccentricity.powi(2)
                                * (-2.5 + 0.8125 * orbit_0.eccentricity.powi(2)))
                        * 1.7891679e-6,
                    dr3: 3.0
                        * p17
                        * (1.875 * (1.0 + cos_i).powi(3))
                        * (1.0
                            + orbit_0.eccentricity.powi(2)
                                * (-6.0 + 6.60937 * orbit_0.eccentricity.powi(2)))
                        * 2.2123015e-7
                        / a0,
                },
            }
        } else {
            let p18 = 3.0 * orbit_0.mean_motion.powi(2) * (1.0 / a0).powi(2);
            let p19 = p18 / a0;
            let p20 = p19 / a0;
            let p21 = p20 / a0;
            let f220 = 0.75 * (1.0 + 2.0 * cos_i + cos_i.powi(2));

            let (g211, g310, g322, g410, g422) = if orbit_0.eccentricity <= 0.65 {
                (
                    3.616 - 13.247 * orbit_0.eccentricity + 16.29 * orbit_0.eccentricity.powi(2),
                    -19.302 + 117.39 * orbit_0.eccentricity - 228.419 * orbit_0.eccentricity.powi(2)
                        + 156.591 * orbit_0.eccentricity.powi(3),
                    -18.9068 + 109.7927 * orbit_0.eccentricity
                        - 214.6334 * orbit_0.eccentricity.powi(2)
                        + 146.5816 * orbit_0.eccentricity.powi(3),
                    -41.122 + 242.694 * orbit_0.eccentricity - 471.094 * orbit_0.eccentricity.powi(2)
                        + 313.953 * orbit_0.eccentricity.powi(3),
                    -146.407 + 841.88 * orbit_0.eccentricity - 1629.014 * orbit_0.eccentricity.powi(2)
                        + 1083.435 * orbit_0.eccentricity.powi(3),
                )
            } else {
                (
                    -72.099 + 331.819 * orbit_0.eccentricity - 508.738 * orbit_0.eccentricity.powi(2)
                        + 266.724 * orbit_0.eccentricity.powi(3),
                    -346.844 + 1582.851 * orbit_0.eccentricity
                        - 2415.925 * orbit_0.eccentricity.powi(2)
                        + 1246.113 * orbit_0.eccentricity.powi(3),
                    -342.585 + 1554.908 * orbit_0.eccentricity
                        - 2366.899 * orbit_0.eccentricity.powi(2)
                        + 1215.972 * orbit_0.eccentricity.powi(3),
                    -1052.797 + 4758.686 * orbit_0.eccentricity
                        - 7193.992 * orbit_0.eccentricity.powi(2)
                        + 3651.957 * orbit_0.eccentricity.powi(3),
                    -3581.69 + 16178.11 * orbit_0.eccentricity
                        - 24462.77 * orbit_0.eccentricity.powi(2)
                        + 12422.52 * orbit_0.eccentricity.powi(3),
                )
            };

            let g520 = if orbit_0.eccentricity <= 0.65 {
                -532.114 + 3017.977 * orbit_0.eccentricity - 5740.032 * orbit_0.eccentricity.powi(2)
                    + 3708.276 * orbit_0.eccentricity.powi(3)
            } else if orbit_0.eccentricity < 0.715 {
                1464.74 - 4664.75 * orbit_0.eccentricity + 3763.64 * orbit_0.eccentricity.powi(2)
            } else {
                -5149.66 + 29936.92 * orbit_0.eccentricity - 54087.36 * orbit_0.eccentricity.powi(2)
                    + 31324.56 * orbit_0.eccentricity.powi(3)
            };

            let (g532, g521, g533) = if orbit_0.eccentricity < 0.7 {
                (
                    -853.666 + 4690.25 * orbit_0.eccentricity - 8624.77 * orbit_0.eccentricity.powi(2)
                        + 5341.4 * orbit_0.eccentricity.powi(3),
                    -822.71072 + 4568.6173 * orbit_0.eccentricity
                        - 8491.4146 * orbit_0.eccentricity.powi(2)
                        + 5337.524 * orbit_0.eccentricity.powi(3),
                    -919.2277 + 4988.61 * orbit_0.eccentricity - 9064.77 * orbit_0.eccentricity.powi(2)
                        + 5542.21 * orbit_0.eccentricity.powi(3),
                )
            } else {
                (
                    -40023.88 + 170470.89 * orbit_0.eccentricity
                        - 242699.48 * orbit_0.eccentricity.powi(2)
                        + 115605.82 * orbit_0.eccentricity.powi(3),
                    -51752.104 + 218913.95 * orbit_0.eccentricity
                        - 309468.16 * orbit_0.eccentricity.powi(2)
                        + 146349.42 * orbit_0.eccentricity.powi(3),
                    -37995.78 + 161616.52 * orbit_0.eccentricity
                        - 229838.2 * orbit_0.eccentricity.powi(2)
                        + 109377.94 * orbit_0.eccentricity.powi(3),
                )
            };

            Resonant::Some {
                xlamo: (orbit_0.mean_anomaly + orbit_0.raan + orbit_0.raan - sidereal_time_0
                    - sidereal_time_0)
                    .rem_euclid(2.0 * PI),
                xlamo_dot: mdot_total
                    + 2.0 * (nodedot_total - SIDEREAL_SPEED)
                    - orbit_0.mean_motion,
                sidereal_time_0,
                resonance: Resonance::SemiSynchronous {
                    d2201: p18 * 1.7891679e-6 * f220 * (-0.306 - (orbit_0.eccentricity - 0.64) * 0.44),
                    d2211: p18 * 1.7891679e-6 * (1.5 * orbit_0.inclination.sin().powi(2)) * g211,
                    d3210: p19
                        * 3.7393792e-7
                        * (1.875 * orbit_0.inclination.sin() * (1.0 - 2.0 * cos_i - 3.0 * cos_i.powi(2)))
                        * g310,
                    d3222: p19
                        * 3.7393792e-7
                        * (-1.875 * orbit_0.inclination.sin() * (1.0 + 2.0 * cos_i - 3.0 * cos_i.powi(2)))
                        * g322,
                    d4410: 2.0
                        * p20
                        * 7.3636953e-9
                        * (35.0 * orbit_0.inclination.sin().powi(2) * f220)
                        * g410,
                    d4422: 2.0 * p20 * 7.3636953e-9 * (39.375 * orbit_0.inclination.sin().powi(4)) * g422,
                    d5220: p21
                        * 1.1428639e-7
                        * (9.84375
                            * orbit_0.inclination.sin()
                            * (orbit_0.inclination.sin().powi(2)
                                * (1.0 - 2.0 * cos_i - 5.0 * cos_i.powi(2))
                                + 0.33333333 * (-2.0 + 4.0 * cos_i + 6.0 * cos_i.powi(2))))
                        * g520,
                    d5232: p21
                        * 1.1428639e-7
                        * (orbit_0.inclination.sin()
                            * (4.92187512
                                * orbit_0.inclination.sin().powi(2)
                                * (-2.0 - 4.0 * cos_i + 10.0 * cos_i.powi(2))
                                + 6.56250012 * (1.0 + 2.0 * cos_i - 3.0 * cos_i.powi(2))))
                        * g532,
                    d5421: 2.0
                        * p21
                        * 2.1765803e-9
                        * (29.53125
                            * orbit_0.inclination.sin()
                            * (2.0 - 8.0 * cos_i + cos_i.powi(2) * (-12.0 + 8.0 * cos_i + 10.0 * cos_i.powi(2))))
                        * g521,
                    d5433: 2.0
                        * p21
                        * 2.1765803e-9
                        * (29.53125
                            * orbit_0.inclination.sin()
                            * (-2.0 - 8.0 * cos_i + cos_i.powi(2) * (12.0 + 8.0 * cos_i - 10.0 * cos_i.powi(2))))
                        * g533,
                    argpdot: argpdot_total,
                },
            }
        }
    } else {
        Resonant::None { a0 }
    };

    let method = Method::DeepSpace {
        eccentricity_dot: solar_dots.eccentricity + lunar_dots.eccentricity,
        inclination_dot: solar_dots.inclination + lunar_dots.inclination,
        solar_perturbations,
        lunar_perturbations,
        resonant,
    };
    (method, nodedot_total, argpdot_total, mdot_total)
}

/// Step A of the deep-space propagation: resonance-integrated secular
/// elements plus the Lyddane long-period lunisolar corrections, producing
/// the same shape of output as `near_earth::secular_update`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn secular_update(
    state: &propagator::PropagatorState,
    eccentricity_dot: f64,
    inclination_dot: f64,
    solar_perturbations: &third_body::Perturbations,
    lunar_perturbations: &third_body::Perturbations,
    resonant: &Resonant,
    resonance_state: Option<&mut ResonanceState>,
    t: f64,
    raan_t: f64,
    argp_t: f64,
    afspc_compatibility_mode: bool,
) -> Result<propagator::SecularElements> {
    let (a_resonant, mean_anomaly_resonant) = match resonant {
        Resonant::None { a0 } => (*a0, state.orbit_0.mean_anomaly + state.mdot * t),
        Resonant::Some {
            xlamo_dot,
            sidereal_time_0,
            resonance,
            ..
        } => match resonance_state {
            Some(resonance_state) => resonance_state.integrate(
                state.gravity_model,
                state.argpdot,
                state.orbit_0.argument_of_perigee,
                *xlamo_dot,
                resonance,
                *sidereal_time_0,
                t,
                raan_t,
                argp_t,
            ),
            None => {
                return Err(Error::Decayed {
                    reason: "resonant deep-space propagation requires a resonance state".to_owned(),
                    minutes_since_epoch: t,
                });
            }
        },
    };

    let (solar_de, solar_di, solar_dm, solar_l4, solar_l5) =
        solar_perturbations.long_period_periodic_effects(SOLAR_ECCENTRICITY, SOLAR_MEAN_MOTION, t);
    let (lunar_de, lunar_di, lunar_dm, lunar_l4, lunar_l5) =
        lunar_perturbations.long_period_periodic_effects(LUNAR_ECCENTRICITY, LUNAR_MEAN_MOTION, t);

    let inclination = state.orbit_0.inclination + inclination_dot * t + (solar_di + lunar_di);
    let (raan, argument_of_perigee) = if inclination >= 0.2 {
        (
            raan_t + (solar_l5 + lunar_l5) / inclination.sin(),
            argp_t + (solar_l4 + lunar_l4)
                - inclination.cos() * ((solar_l5 + lunar_l5) / inclination.sin()),
        )
    } else {
        let p30 = (inclination.sin() * raan_t.sin()
            + ((solar_l5 + lunar_l5) * raan_t.cos()
                + (solar_di + lunar_di) * inclination.cos() * raan_t.sin()))
        .atan2(
            inclination.sin() * raan_t.cos()
                + (-(solar_l5 + lunar_l5) * raan_t.sin()
                    + (solar_di + lunar_di) * inclination.cos() * raan_t.cos()),
        );
        let raan = if p30 < raan_t % (2.0 * PI) - PI {
            p30 + 2.0 * PI
        } else if p30 > raan_t % (2.0 * PI) + PI {
            p30 - 2.0 * PI
        } else {
            p30
        };
        (
            raan,
            argp_t + (solar_l4 + lunar_l4) + inclination.cos() * (raan_t % (2.0 * PI) - raan)
                - (solar_di + lunar_di)
                    * if afspc_compatibility_mode {
                        raan_t.rem_euclid(2.0 * PI)
                    } else {
                        raan_t % (2.0 * PI)
                    }
                    * inclination.sin(),
        )
    };

    let eccentricity_raw = state.orbit_0.eccentricity + eccentricity_dot * t - state.c4 * t;
    if !(-0.001..1.0).contains(&eccentricity_raw) {
        return Err(Error::Decayed {
            reason: "eccentricity diverged during secular update".to_owned(),
            minutes_since_epoch: t,
        });
    }
    let eccentricity = eccentricity_raw.max(1.0e-6) + (solar_de + lunar_de);
    if !(0.0..=1.0).contains(&eccentricity) {
        return Err(Error::Decayed {
            reason: "perturbed eccentricity diverged during secular update".to_owned(),
            minutes_since_epoch: t,
        });
    }

    let a = a_resonant * (1.0 - state.c1 * t).powi(2);
    let j3_over_j2 = state.gravity_model.j3_over_j2;
    let con41 = 3.0 * inclination.cos().powi(2) - 1.0;

    Ok(propagator::SecularElements {
        orbit: Orbit {
            inclination,
            raan,
            eccentricity,
            argument_of_perigee,
            mean_anomaly: mean_anomaly_resonant
                + (solar_dm + lunar_dm)
                + state.orbit_0.mean_motion * state.t2cof * t.powi(2),
            mean_motion: state.gravity_model.xke / a.powf(1.5),
        },
        a,
        aycof: -0.5 * j3_over_j2 * inclination.sin(),
        x1mth2: 1.0 - inclination.cos().powi(2),
        x7thm1: 7.0 * inclination.cos().powi(2) - 1.0,
        xlcof: if (1.0 + inclination.cos()).abs() > 1.5e-12 {
            -0.25 * j3_over_j2 * inclination.sin() * (3.0 + 5.0 * inclination.cos())
                / (1.0 + inclination.cos())
        } else {
            -0.25 * j3_over_j2 * inclination.sin() * (3.0 + 5.0 * inclination.cos()) / 1.5e-12
        },
        con41,
    })
}
