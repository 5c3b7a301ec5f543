//! # Body descriptors
//!
//! [`BodyDescriptor`] is the canonical entity stored in the [`BodyRegistry`](crate::body::registry::BodyRegistry)
//! and consumed by the external propagator/renderer. A body optionally carries an [`Orbit`]:
//!
//! ```text
//! Orbit
//! ├── epoch  instant at which `base` is valid
//! ├── base   osculating elements (a [km], e, w [deg], M [deg], i [deg], o [deg])
//! └── day    secular rates (M [deg/day])
//! ```
//!
//! The serialized form keeps the short element keys (`a`, `e`, `w`, `M`, `i`, `o`) expected by
//! the simulation engine; the epoch is written as an ISO-8601 UTC timestamp
//! (`2000-01-01T12:00:00.000Z`).
use hifitime::Epoch;
use serde::{Serialize, Serializer};

use crate::constants::{
    BodyName, Degree, DegreePerDay, Kilometer, NEO_COLOR, NEO_MASS, NEO_RADIUS,
};
use crate::neo_errors::NeoError;
use crate::time::epoch_to_iso_timestamp;

/// A body of the scenario, keyed by `name` in the registry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyDescriptor {
    pub name: BodyName,
    pub title: String,
    /// kg
    pub mass: f64,
    /// km
    pub radius: Kilometer,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orbit: Option<Orbit>,
}

/// Orbital elements anchored to an epoch, with the rates used to propagate them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Orbit {
    #[serde(serialize_with = "serialize_epoch")]
    pub epoch: Epoch,
    pub base: OrbitBase,
    pub day: OrbitRates,
}

/// Osculating elements valid at [`Orbit::epoch`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitBase {
    #[serde(rename = "a")]
    pub semi_major_axis: Kilometer,
    #[serde(rename = "e")]
    pub eccentricity: f64,
    #[serde(rename = "w")]
    pub periapsis_argument: Degree,
    #[serde(rename = "M")]
    pub mean_anomaly: Degree,
    #[serde(rename = "i")]
    pub inclination: Degree,
    #[serde(rename = "o")]
    pub ascending_node_longitude: Degree,
}

/// Secular rates per day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitRates {
    #[serde(rename = "M")]
    pub mean_anomaly: DegreePerDay,
}

fn serialize_epoch<S: Serializer>(epoch: &Epoch, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&epoch_to_iso_timestamp(epoch))
}

impl BodyDescriptor {
    /// Build a body with the mass, radius and color shared by every NEO of the feed.
    ///
    /// Arguments
    /// ---------
    /// * `name`: name of the object, also used as its title
    /// * `orbit`: the converted orbit
    pub fn neo(name: &str, orbit: Orbit) -> Self {
        BodyDescriptor {
            name: name.to_string(),
            title: name.to_string(),
            mass: NEO_MASS,
            radius: NEO_RADIUS,
            color: NEO_COLOR.to_string(),
            orbit: Some(orbit),
        }
    }

    /// Build a reference body (sun, planets, moon) provided by the host application.
    pub fn reference(
        name: &str,
        title: &str,
        mass: f64,
        radius: Kilometer,
        color: &str,
        orbit: Option<Orbit>,
    ) -> Self {
        BodyDescriptor {
            name: name.to_string(),
            title: title.to_string(),
            mass,
            radius,
            color: color.to_string(),
            orbit,
        }
    }

    /// Check that every orbital element and rate is a finite number.
    ///
    /// Return
    /// ------
    /// * `Ok(())` for a body without orbit or with finite elements
    /// * [`NeoError::InvalidElements`] naming the first offending field otherwise
    pub fn validate(&self) -> Result<(), NeoError> {
        let Some(orbit) = &self.orbit else {
            return Ok(());
        };

        let base = &orbit.base;
        let fields = [
            ("semi_major_axis", base.semi_major_axis),
            ("eccentricity", base.eccentricity),
            ("perihelion_argument", base.periapsis_argument),
            ("mean_anomaly", base.mean_anomaly),
            ("inclination", base.inclination),
            ("ascending_node_longitude", base.ascending_node_longitude),
            ("orbital_period", orbit.day.mean_anomaly),
        ];

        match fields.iter().find(|(_, value)| !value.is_finite()) {
            Some((field, _)) => Err(NeoError::InvalidElements {
                name: self.name.clone(),
                field: *field,
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod descriptor_test {
    use super::*;
    use crate::time::reference_epoch;

    fn orbit(a: f64, period_rate: f64) -> Orbit {
        Orbit {
            epoch: reference_epoch(),
            base: OrbitBase {
                semi_major_axis: a,
                eccentricity: 0.1,
                periapsis_argument: 10.0,
                mean_anomaly: 20.0,
                inclination: 5.0,
                ascending_node_longitude: 30.0,
            },
            day: OrbitRates {
                mean_anomaly: period_rate,
            },
        }
    }

    #[test]
    fn test_neo_defaults() {
        let body = BodyDescriptor::neo("(2019 AB)", orbit(1.0, 1.0));
        assert_eq!(body.name, "(2019 AB)");
        assert_eq!(body.title, "(2019 AB)");
        assert_eq!(body.mass, 1.0);
        assert_eq!(body.radius, 2000.0);
        assert_eq!(body.color, "#ffffff");
    }

    #[test]
    fn test_validate() {
        assert!(BodyDescriptor::neo("ok", orbit(1.0, 1.0)).validate().is_ok());
        assert!(BodyDescriptor::reference("sun", "Sun", 1.9891e30, 696_342.0, "#ffff00", None)
            .validate()
            .is_ok());

        assert_eq!(
            BodyDescriptor::neo("bad", orbit(f64::NAN, 1.0)).validate(),
            Err(NeoError::InvalidElements {
                name: "bad".into(),
                field: "semi_major_axis"
            })
        );
        assert_eq!(
            BodyDescriptor::neo("zero period", orbit(1.0, f64::INFINITY)).validate(),
            Err(NeoError::InvalidElements {
                name: "zero period".into(),
                field: "orbital_period"
            })
        );
    }

    #[test]
    fn test_serialize_short_keys() {
        let body = BodyDescriptor::neo("TestNEO", orbit(2.0, 0.5));
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["name"], "TestNEO");
        assert_eq!(json["orbit"]["base"]["a"], 2.0);
        assert_eq!(json["orbit"]["base"]["M"], 20.0);
        assert_eq!(json["orbit"]["day"]["M"], 0.5);
        assert_eq!(json["orbit"]["epoch"], "2000-01-01T12:00:00.000Z");

        let sun = BodyDescriptor::reference("sun", "Sun", 1.9891e30, 696_342.0, "#ffff00", None);
        let json = serde_json::to_value(&sun).unwrap();
        assert!(json.get("orbit").is_none());
    }
}
