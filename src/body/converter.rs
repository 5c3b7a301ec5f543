//! # Orbital record conversion
//!
//! Maps a [`RawOrbitalRecord`] of the NeoWs detail endpoint onto a [`BodyDescriptor`]:
//!
//! | feed field                 | unit   | descriptor field        | conversion              |
//! |----------------------------|--------|-------------------------|-------------------------|
//! | `semi_major_axis`          | AU     | `orbit.base.a`          | × [`AU`](crate::constants::AU) (km) |
//! | `eccentricity`             | –      | `orbit.base.e`          | –                       |
//! | `perihelion_argument`      | deg    | `orbit.base.w`          | –                       |
//! | `mean_anomaly`             | deg    | `orbit.base.M`          | –                       |
//! | `inclination`              | deg    | `orbit.base.i`          | –                       |
//! | `ascending_node_longitude` | deg    | `orbit.base.o`          | –                       |
//! | `orbital_period`           | days   | `orbit.day.M`           | 360 / period            |
//! | `epoch_osculation`         | JD     | `orbit.epoch`           | J2000 + (JD − 2451545) days |
//!
//! Fields that are missing or not decimal numbers are forwarded as `NaN`; rejecting them is
//! left to the caller (see [`BodyDescriptor::validate`]). The osculation epoch is the exception:
//! it has to be a finite julian date to become an instant.
use crate::body::descriptor::{BodyDescriptor, Orbit, OrbitBase, OrbitRates};
use crate::conversion::{au_to_km, mean_motion_deg_per_day};
use crate::feed::feed_records::{field_value, RawOrbitalRecord};
use crate::neo_errors::NeoError;
use crate::time::jd_to_epoch;

/// Convert one detail record into the canonical body descriptor.
///
/// Arguments
/// ---------
/// * `record`: the decoded detail response
///
/// Return
/// ------
/// * the body with the fixed NEO mass, radius and color, or
///   [`NeoError::InvalidEpoch`] if the osculation epoch is not a finite julian date
pub fn convert_orbital_record(record: &RawOrbitalRecord) -> Result<BodyDescriptor, NeoError> {
    let data = &record.orbital_data;

    let epoch = jd_to_epoch(field_value(&data.epoch_osculation)).ok_or_else(|| {
        NeoError::InvalidEpoch {
            name: record.name.clone(),
            value: data
                .epoch_osculation
                .as_ref()
                .map_or_else(|| "<missing>".to_string(), |field| field.raw()),
        }
    })?;

    let orbit = Orbit {
        epoch,
        base: OrbitBase {
            semi_major_axis: au_to_km(field_value(&data.semi_major_axis)),
            eccentricity: field_value(&data.eccentricity),
            periapsis_argument: field_value(&data.perihelion_argument),
            mean_anomaly: field_value(&data.mean_anomaly),
            inclination: field_value(&data.inclination),
            ascending_node_longitude: field_value(&data.ascending_node_longitude),
        },
        day: OrbitRates {
            mean_anomaly: mean_motion_deg_per_day(field_value(&data.orbital_period)),
        },
    };

    Ok(BodyDescriptor::neo(&record.name, orbit))
}
