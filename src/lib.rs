//! This crate implements the NORAD/Vallado SGP4 + SDP4 algorithm for
//! satellite orbit propagation.
//!
//! It also provides a decoder for Two-Line Element sets (TLE) and for
//! Orbit Mean-Elements Messages (OMM), two alternative surface encodings
//! of the same epoch orbital elements record.
//!
//! # Example
//!
//! ```
//! # fn main() -> norad_sgp4::Result<()> {
//! let tle = norad_sgp4::Tle::from_lines(
//!     Some("ISS (ZARYA)".to_owned()),
//!     "1 25544U 98067A   20194.88612269 -.00002218  00000-0 -31515-4 0  9992",
//!     "2 25544  51.6461 221.2784 0001413  89.1723 280.4612 15.49507896236008",
//! )?;
//! let state = norad_sgp4::PropagatorState::build(&norad_sgp4::WGS72, &tle)?;
//! let prediction = state.propagate(60.0 * 24.0)?;
//! println!("r = {:?} km", prediction.position);
//! println!("v = {:?} km.s⁻¹", prediction.velocity);
//! #     Ok(())
//! # }
//! ```

mod deep_space;
mod error;
#[cfg(feature = "serde")]
mod gp;
mod initializer;
mod kepler;
mod model;
mod near_earth;
mod propagator;
mod scalar;
mod third_body;
mod tle;
mod vector;

pub use deep_space::ResonanceState;
pub use error::{Error, Line, Result};
#[cfg(feature = "serde")]
pub use gp::GeneralPerturbations;
pub use model::{epoch_to_sidereal_time, GravityModel, WGS72};
pub use propagator::{Method, Orbit, Prediction, PropagatorState};
pub use tle::{decode_tle, Tle};
pub use vector::Vector3;

fn years_since_j2000(epoch: chrono::DateTime<chrono::Utc>) -> f64 {
    let j2000 = chrono::Utc
        .with_ymd_and_hms(2000, 1, 1, 12, 0, 0)
        .single()
        .expect("J2000 epoch is representable");
    (epoch - j2000).num_milliseconds() as f64 / (1000.0 * 86400.0 * 365.25)
}

use chrono::TimeZone;

impl Tle {
    /// Convenience wrapper around [`decode_tle`].
    pub fn from_lines(name: Option<String>, line1: &str, line2: &str) -> Result<Tle> {
        decode_tle(name, line1, line2)
    }
}

impl<'a> PropagatorState<'a> {
    /// Builds a propagator state from a decoded TLE against `gravity_model`.
    pub fn build(gravity_model: &'a GravityModel, tle: &Tle) -> Result<PropagatorState<'a>> {
        let mean_motion_kozai = tle.mean_motion * (2.0 * scalar::PI / 1440.0);
        let orbit_0 = initializer::from_kozai_elements(
            gravity_model,
            tle.inclination * (scalar::PI / 180.0),
            tle.raan * (scalar::PI / 180.0),
            tle.eccentricity,
            tle.argument_of_perigee * (scalar::PI / 180.0),
            tle.mean_anomaly * (scalar::PI / 180.0),
            mean_motion_kozai,
        )?;
        initializer::build(
            gravity_model,
            model::epoch_to_sidereal_time,
            years_since_j2000(tle.epoch),
            tle.bstar,
            orbit_0,
        )
    }

    /// Returns the resonance integrator seeded at epoch, for callers that
    /// want to reuse it across a monotonic sequence of `propagate_from_state`
    /// calls. `None` for near-earth orbits and non-resonant deep-space orbits.
    pub fn initial_state(&self) -> Option<ResonanceState> {
        match &self.method {
            propagator::Method::NearEarth { .. } => None,
            propagator::Method::DeepSpace { resonant, .. } => match resonant {
                propagator::Resonant::None { .. } => None,
                propagator::Resonant::Some { xlamo, .. } => {
                    Some(ResonanceState::new(self.orbit_0.mean_motion, *xlamo))
                }
            },
        }
    }

    /// Propagates to `t` minutes since epoch, using a fresh resonance state
    /// for deep-space orbits (see [`PropagatorState::propagate_from_state`]
    /// for the advanced, state-reusing entry point).
    pub fn propagate(&self, t: f64) -> Result<Prediction> {
        self.propagate_from_state(t, self.initial_state().as_mut(), false)
    }

    /// Propagates to `t` minutes since epoch, reusing a resonance state
    /// across a monotonic sequence of calls for resonant deep-space orbits.
    ///
    /// `afspc_compatibility_mode` only affects Lyddane-regime deep-space
    /// orbits (period ≥ 225 min, inclination < 0.2 rad).
    pub fn propagate_from_state(
        &self,
        t: f64,
        resonance_state: Option<&mut ResonanceState>,
        afspc_compatibility_mode: bool,
    ) -> Result<Prediction> {
        let raan_t = self.orbit_0.raan + self.nodedot * t + self.nodecf * t.powi(2);
        let argp_t = self.orbit_0.argument_of_perigee + self.argpdot * t;

        let secular = match &self.method {
            propagator::Method::NearEarth {
                a0,
                con41,
                x1mth2,
                x7thm1,
                aycof,
                xlcof,
                drag_extension,
            } => {
                assert!(
                    resonance_state.is_none(),
                    "resonance state must be None for a near-earth propagator"
                );
                near_earth::secular_update(
                    self,
                    *a0,
                    *con41,
                    *x1mth2,
                    *x7thm1,
                    *aycof,
                    *xlcof,
                    drag_extension,
                    t,
                    raan_t,
                    argp_t,
                )
            }
            propagator::Method::DeepSpace {
                eccentricity_dot,
                inclination_dot,
                solar_perturbations,
                lunar_perturbations,
                resonant,
            } => deep_space::secular_update(
                self,
                *eccentricity_dot,
                *inclination_dot,
                solar_perturbations,
                lunar_perturbations,
                resonant,
                resonance_state,
                t,
                raan_t,
                argp_t,
                afspc_compatibility_mode,
            ),
        }?;

        let propagator::SecularElements {
            orbit,
            a,
            aycof,
            x1mth2,
            x7thm1,
            xlcof,
            con41,
        } = secular;

        // 1 / (a (1 - e²))
        let recip_semi_latus = 1.0 / (a * (1.0 - orbit.eccentricity.powi(2)));

        // Lyddane axial components.
        let axn = orbit.eccentricity * orbit.argument_of_perigee.cos();
        let ayn = orbit.eccentricity * orbit.argument_of_perigee.sin() + recip_semi_latus * aycof;

        let u = scalar::normalize_two_pi(
            orbit.mean_anomaly + orbit.argument_of_perigee + recip_semi_latus * xlcof * axn,
        );
        let big_e = kepler::solve(u, axn, ayn);

        let el_squared = axn.powi(2) + ayn.powi(2);
        let semi_latus_rectum = a * (1.0 - el_squared);
        if semi_latus_rectum < 0.0 {
            return Err(Error::Decayed {
                reason: "semi-latus rectum went negative".to_owned(),
                minutes_since_epoch: t,
            });
        }

        let esin_e = axn * big_e.sin() - ayn * big_e.cos();
        let r = a * (1.0 - (axn * big_e.cos() + ayn * big_e.sin()));
        let r_dot = a.sqrt() * esin_e / r;
        let b = (1.0 - el_squared).sqrt();
        let p41 = esin_e / (1.0 + b);
        let sin_u = a / r * (big_e.sin() - ayn - axn * p41);
        let cos_u = a / r * (big_e.cos() - axn + ayn * p41);
        let u_angle = sin_u.atan2(cos_u);

        let sin_2u = 2.0 * cos_u * sin_u;
        let cos_2u = 1.0 - 2.0 * sin_u.powi(2);

        let temp1 = 0.5 * self.gravity_model.j2 / semi_latus_rectum;
        let temp2 = temp1 / semi_latus_rectum;

        let rk = r * (1.0 - 1.5 * temp2 * b * con41) + 0.5 * temp1 * x1mth2 * cos_2u;
        let uk = u_angle - 0.25 * temp2 * x7thm1 * sin_2u;
        let raan_k = orbit.raan + 1.5 * temp2 * orbit.inclination.cos() * sin_2u;
        let inclination_k = orbit.inclination
            + 1.5 * temp2 * orbit.inclination.cos() * orbit.inclination.sin() * cos_2u;

        let rk_dot = r_dot - orbit.mean_motion * temp1 * x1mth2 * sin_2u / self.gravity_model.xke;
        let rfk_dot = semi_latus_rectum.sqrt() / r
            + orbit.mean_motion * temp1 * (x1mth2 * cos_2u + 1.5 * con41) / self.gravity_model.xke;

        let u0 = -raan_k.sin() * inclination_k.cos() * uk.sin() + raan_k.cos() * uk.cos();
        let u1 = raan_k.cos() * inclination_k.cos() * uk.sin() + raan_k.sin() * uk.cos();
        let u2 = inclination_k.sin() * uk.sin();

        let position_scale = self.gravity_model.earth_radius_km;
        let velocity_scale = self.gravity_model.earth_radius_km * self.gravity_model.xke / 60.0;

        Ok(Prediction {
            position: [rk * u0 * position_scale, rk * u1 * position_scale, rk * u2 * position_scale],
            velocity: [
                (rk_dot * u0
                    + rfk_dot * (-raan_k.sin() * inclination_k.cos() * uk.cos() - raan_k.cos() * uk.sin()))
                    * velocity_scale,
                (rk_dot * u1
                    + rfk_dot * (raan_k.cos() * inclination_k.cos() * uk.cos() - raan_k.sin() * uk.sin()))
                    * velocity_scale,
                (rk_dot * u2 + rfk_dot * (inclination_k.sin() * uk.cos())) * velocity_scale,
            ],
        })
    }
}

/// Free-function façade mirroring the core callable surface.
pub fn build_propagator<'a>(
    tle: &Tle,
    gravity_model: &'a GravityModel,
) -> Result<PropagatorState<'a>> {
    PropagatorState::build(gravity_model, tle)
}

/// Free-function façade mirroring the core callable surface.
pub fn propagate(state: &PropagatorState, minutes_since_epoch: f64) -> Result<Prediction> {
    state.propagate(minutes_since_epoch)
}
