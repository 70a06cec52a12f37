//! Shared propagator types: the orbit record, the regime-tagged
//! coefficient sets, and the output prediction.
//!
//! The near-earth/deep-space split is a sum type, not a subclass
//! hierarchy: the façade in `lib.rs` matches on `Method` instead of
//! dispatching through a trait object.

use crate::model::GravityModel;
use crate::third_body;

/// Brouwer mean orbital elements, radians and radians/minute.
#[derive(Debug, Clone, Copy)]
pub struct Orbit {
    pub inclination: f64,
    pub raan: f64,
    pub eccentricity: f64,
    pub argument_of_perigee: f64,
    pub mean_anomaly: f64,
    pub mean_motion: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct Prediction {
    pub position: [f64; 3],
    pub velocity: [f64; 3],
}

/// Updated orbital elements and the Lyddane axial-component inputs
/// produced by a method's secular update (Step A), consumed by the
/// shared Step B-F assembly in `lib.rs`.
#[derive(Debug, Clone, Copy)]
pub struct SecularElements {
    pub orbit: Orbit,
    pub a: f64,
    pub aycof: f64,
    pub x1mth2: f64,
    pub x7thm1: f64,
    pub xlcof: f64,
    pub con41: f64,
}

/// Third- and fourth-order drag contribution to mean anomaly, present
/// only when the eccentricity at epoch exceeds `1e-4`.
#[derive(Debug, Clone, Copy)]
pub enum EllipticDrag {
    None,
    Some { delmo: f64, omgcof: f64, xmcof: f64 },
}

/// Extra drag terms that only apply above the 220 km perigee-altitude
/// floor (`is_simplified == false`).
#[derive(Debug, Clone, Copy)]
pub enum DragExtension {
    Simplified,
    Extended {
        d2: f64,
        d3: f64,
        d4: f64,
        t3cof: f64,
        t4cof: f64,
        t5cof: f64,
        c5: f64,
        eta: f64,
        sinmao: f64,
        elliptic: EllipticDrag,
    },
}

#[derive(Debug, Clone, Copy)]
pub enum Resonance {
    /// 24-hour (synchronous) resonance coefficients.
    Synchronous { dr1: f64, dr2: f64, dr3: f64 },
    /// 12-hour (semi-synchronous) resonance coefficients.
    SemiSynchronous {
        d2201: f64,
        d2211: f64,
        d3210: f64,
        d3222: f64,
        d4410: f64,
        d4422: f64,
        d5220: f64,
        d5232: f64,
        d5421: f64,
        d5433: f64,
        argpdot: f64,
    },
}

#[derive(Debug, Clone, Copy)]
pub enum Resonant {
    None { a0: f64 },
    Some {
        xlamo: f64,
        xlamo_dot: f64,
        sidereal_time_0: f64,
        resonance: Resonance,
    },
}

/// Near-earth (SGP4) or deep-space (SDP4) coefficient set.
pub enum Method {
    NearEarth {
        a0: f64,
        con41: f64,
        x1mth2: f64,
        x7thm1: f64,
        aycof: f64,
        xlcof: f64,
        drag_extension: DragExtension,
    },
    DeepSpace {
        eccentricity_dot: f64,
        inclination_dot: f64,
        solar_perturbations: third_body::Perturbations,
        lunar_perturbations: third_body::Perturbations,
        resonant: Resonant,
    },
}

/// Immutable propagator state built once from a decoded TLE.
///
/// Owns no mutable data: the only hidden state in the whole crate is the
/// deep-space resonance integrator, which is a separate companion object
/// (see `deep_space::ResonanceState`).
pub struct PropagatorState<'a> {
    pub gravity_model: &'a GravityModel,
    pub nodedot: f64,
    pub argpdot: f64,
    pub mdot: f64,
    pub c1: f64,
    pub c4: f64,
    pub nodecf: f64,
    pub t2cof: f64,
    pub method: Method,
    pub orbit_0: Orbit,
}

impl<'a> PropagatorState<'a> {
    pub fn is_deep_space(&self) -> bool {
        matches!(self.method, Method::DeepSpace { .. })
    }

    /// Classifies the geopotential resonance band for a deep-space orbit.
    /// `None` for near-earth orbits and for deep-space orbits outside both
    /// resonance bands.
    pub fn resonance(&self) -> Option<&'static str> {
        match &self.method {
            Method::NearEarth { .. } => None,
            Method::DeepSpace { resonant, .. } => match resonant {
                Resonant::None { .. } => None,
                Resonant::Some {
                    resonance: Resonance::Synchronous { .. },
                    ..
                } => Some("synchronous"),
                Resonant::Some {
                    resonance: Resonance::SemiSynchronous { .. },
                    ..
                } => Some("semi_synchronous"),
            },
        }
    }
}
