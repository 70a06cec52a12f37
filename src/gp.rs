//! Orbit Mean-Elements Message (OMM) support.
//!
//! OMM is the JSON/XML catalog format used by space-track.org and
//! CelesTrak as a TLE successor. This module only covers the JSON
//! encoding and only when the `serde` feature is enabled: it is an
//! alternative surface encoding of the exact same epoch elements record
//! [`crate::Tle`] already holds, not a new propagation input.

use crate::error::{Error, Result};
use crate::tle::Tle;
use chrono::{DateTime, NaiveDateTime, Utc};

/// A single CelesTrak/space-track "General Perturbations" JSON record.
///
/// Field names mirror the OMM JSON schema exactly (all upper case with
/// underscores), so `#[serde(rename)]` attributes are unavoidable.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct GeneralPerturbations {
    #[serde(rename = "OBJECT_NAME")]
    pub object_name: Option<String>,
    #[serde(rename = "OBJECT_ID")]
    pub object_id: String,
    #[serde(rename = "NORAD_CAT_ID")]
    pub norad_cat_id: u32,
    #[serde(rename = "EPOCH")]
    pub epoch: String,
    #[serde(rename = "MEAN_MOTION_DOT")]
    pub mean_motion_dot: f64,
    #[serde(rename = "MEAN_MOTION_DDOT")]
    pub mean_motion_ddot: f64,
    #[serde(rename = "BSTAR")]
    pub bstar: f64,
    #[serde(rename = "INCLINATION")]
    pub inclination: f64,
    #[serde(rename = "RA_OF_ASC_NODE")]
    pub raan: f64,
    #[serde(rename = "ECCENTRICITY")]
    pub eccentricity: f64,
    #[serde(rename = "ARG_OF_PERICENTER")]
    pub argument_of_perigee: f64,
    #[serde(rename = "MEAN_ANOMALY")]
    pub mean_anomaly: f64,
    #[serde(rename = "MEAN_MOTION")]
    pub mean_motion: f64,
    #[serde(rename = "REV_AT_EPOCH")]
    pub revolution_number: u32,
}

#[cfg(feature = "serde")]
impl GeneralPerturbations {
    /// Converts this OMM record into the same [`Tle`]-shaped element
    /// record the line-oriented decoder produces, so the rest of the
    /// pipeline never has to special-case the input format.
    pub fn into_tle(self) -> Result<Tle> {
        let epoch = parse_omm_epoch(&self.epoch)?;
        Ok(Tle {
            name: self.object_name,
            catalog_number: self.norad_cat_id,
            international_designator: self.object_id,
            epoch,
            mean_motion_dot_over_2: self.mean_motion_dot,
            mean_motion_ddot_over_6: self.mean_motion_ddot,
            bstar: self.bstar,
            inclination: self.inclination,
            raan: self.raan,
            eccentricity: self.eccentricity,
            argument_of_perigee: self.argument_of_perigee,
            mean_anomaly: self.mean_anomaly,
            mean_motion: self.mean_motion,
            revolution_number: self.revolution_number,
        })
    }
}

#[cfg(feature = "serde")]
fn parse_omm_epoch(field: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(field, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| Error::BadNumeric {
            field: "EPOCH".to_owned(),
        })
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    const ISS_OMM_JSON: &str = r#"{
        "OBJECT_NAME": "ISS (ZARYA)",
        "OBJECT_ID": "1998-067A",
        "EPOCH": "2020-07-13T21:16:03.881760",
        "MEAN_MOTION": 15.49507896,
        "ECCENTRICITY": 0.0001413,
        "INCLINATION": 51.6461,
        "RA_OF_ASC_NODE": 221.2784,
        "ARG_OF_PERICENTER": 89.1723,
        "MEAN_ANOMALY": 280.4612,
        "EPHEMERIS_TYPE": 0,
        "CLASSIFICATION_TYPE": "U",
        "NORAD_CAT_ID": 25544,
        "ELEMENT_SET_NO": 999,
        "REV_AT_EPOCH": 23600,
        "BSTAR": -0.000031515,
        "MEAN_MOTION_DOT": -0.00002218,
        "MEAN_MOTION_DDOT": 0
    }"#;

    #[test]
    fn decodes_celestrak_style_omm_json() {
        let gp: GeneralPerturbations = serde_json::from_str(ISS_OMM_JSON).unwrap();
        assert_eq!(gp.norad_cat_id, 25544);
        let tle = gp.into_tle().unwrap();
        assert_eq!(tle.catalog_number, 25544);
        assert!((tle.eccentricity - 0.0001413).abs() < 1e-9);
        assert_eq!(tle.epoch.format("%Y-%m-%d").to_string(), "2020-07-13");
    }

    #[test]
    fn rejects_malformed_epoch() {
        let mut gp: GeneralPerturbations = serde_json::from_str(ISS_OMM_JSON).unwrap();
        gp.epoch = "not-a-date".to_owned();
        assert!(gp.into_tle().is_err());
    }
}
