//! # Constants and type definitions for the NEO scenario
//!
//! This module centralizes the **physical constants**, **conversion factors**, **scenario
//! defaults** and **common type aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Astronomical constants (AU, reference epoch)
//! - Unit conversions (days ↔ milliseconds, degrees per revolution)
//! - Defaults applied to every body produced from the NEO feed
//! - Filtering/ranking defaults for the close-approach list
//!
//! All distances produced by this crate are expressed in **kilometers**, all angles in
//! **degrees** and all rates in **degrees per day**.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Number of milliseconds in a Julian day
pub const MILLISECONDS_PER_DAY: f64 = SECONDS_PER_DAY * 1000.0;

/// Julian date of the J2000.0 reference epoch (2000-01-01 12:00:00)
pub const J2000_JD: f64 = 2_451_545.0;

/// Degrees in one full revolution
pub const DEGREES_PER_REVOLUTION: f64 = 360.0;

// -------------------------------------------------------------------------------------------------
// Feed defaults
// -------------------------------------------------------------------------------------------------

/// Default NASA NeoWs feed endpoint
pub const NEO_FEED_URL: &str = "https://api.nasa.gov/neo/rest/v1/feed";

/// Public demonstration key accepted by api.nasa.gov
pub const DEMO_API_KEY: &str = "DEMO_KEY";

/// Number of close approaches kept after ranking
pub const N_TO_SHOW: usize = 10;

/// Close approaches at or beyond this miss distance (AU) are discarded
pub const MIN_DIST_AU: f64 = 0.05;

// -------------------------------------------------------------------------------------------------
// Defaults for bodies produced from the feed
// -------------------------------------------------------------------------------------------------

/// Mass assigned to every NEO body (kg)
pub const NEO_MASS: f64 = 1.0;

/// Display radius assigned to every NEO body (km)
pub const NEO_RADIUS: f64 = 2000.0;

/// Display color assigned to every NEO body
pub const NEO_COLOR: &str = "#ffffff";

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Julian date (days)
pub type JulianDate = f64;
/// Rate in degrees per day
pub type DegreePerDay = f64;
/// Name of a body, used as the registry key
pub type BodyName = String;
