//! # Wire records of the NASA NeoWs API
//!
//! Serde models for the two responses consumed by this crate:
//!
//! - the **list feed** (`/neo/rest/v1/feed`), grouping object summaries by calendar date;
//! - the **detail record** (`links.self` of a summary), carrying the osculating orbital data.
//!
//! Only the fields actually used are modelled; everything else in the payload is ignored.
//! Numeric fields are transported as decimal strings by the API, see [`DecimalField`].
use std::collections::BTreeMap;

use serde::Deserialize;

use crate::conversion::parse_decimal;

/// A numeric field as found in the feed: usually a decimal string, occasionally a bare number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DecimalField {
    Number(f64),
    Text(String),
}

impl DecimalField {
    /// Numeric value of the field, `NaN` if the text is not a decimal number
    pub fn value(&self) -> f64 {
        match self {
            DecimalField::Number(value) => *value,
            DecimalField::Text(text) => parse_decimal(text),
        }
    }

    /// The field as it appeared on the wire, used in error messages
    pub fn raw(&self) -> String {
        match self {
            DecimalField::Number(value) => value.to_string(),
            DecimalField::Text(text) => text.clone(),
        }
    }
}

impl From<&str> for DecimalField {
    fn from(text: &str) -> Self {
        DecimalField::Text(text.to_string())
    }
}

/// Value of an optional decimal field, missing fields read as `NaN`
pub(crate) fn field_value(field: &Option<DecimalField>) -> f64 {
    field.as_ref().map_or(f64::NAN, DecimalField::value)
}

/// Top level of the list-feed response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedResponse {
    /// Summaries keyed by `YYYY-MM-DD`; iterated in ascending date order
    #[serde(default)]
    pub near_earth_objects: Option<BTreeMap<String, Vec<NeoSummary>>>,
}

/// One object of the list feed
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NeoSummary {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub links: Option<Links>,
    #[serde(default)]
    pub close_approach_data: Option<Vec<CloseApproach>>,
}

impl NeoSummary {
    /// Locator of the full orbital record
    pub fn detail_link(&self) -> Option<&str> {
        self.links.as_ref()?.self_link.as_deref()
    }

    /// The chronologically first close approach, if any
    pub fn first_approach(&self) -> Option<&CloseApproach> {
        self.close_approach_data.as_ref()?.first()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Links {
    #[serde(rename = "self", default)]
    pub self_link: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CloseApproach {
    #[serde(default)]
    pub close_approach_date: Option<String>,
    #[serde(default)]
    pub miss_distance: Option<MissDistance>,
}

impl CloseApproach {
    /// Miss distance in AU, `NaN` when absent or malformed
    pub fn miss_distance_au(&self) -> f64 {
        self.miss_distance
            .as_ref()
            .map_or(f64::NAN, |miss| field_value(&miss.astronomical))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MissDistance {
    #[serde(default)]
    pub astronomical: Option<DecimalField>,
}

/// Full orbital record returned by a summary's detail link
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOrbitalRecord {
    pub name: String,
    #[serde(default)]
    pub orbital_data: RawOrbitalData,
}

/// Heliocentric osculating elements in the units of the feed (AU, degrees, days, julian date)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOrbitalData {
    #[serde(default)]
    pub semi_major_axis: Option<DecimalField>,
    #[serde(default)]
    pub eccentricity: Option<DecimalField>,
    #[serde(default)]
    pub perihelion_argument: Option<DecimalField>,
    #[serde(default)]
    pub mean_anomaly: Option<DecimalField>,
    #[serde(default)]
    pub inclination: Option<DecimalField>,
    #[serde(default)]
    pub ascending_node_longitude: Option<DecimalField>,
    #[serde(default)]
    pub orbital_period: Option<DecimalField>,
    #[serde(default)]
    pub epoch_osculation: Option<DecimalField>,
}
