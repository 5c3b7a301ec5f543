use crate::constants::{AstronomicalUnit, DegreePerDay, Kilometer, AU, DEGREES_PER_REVOLUTION};

/// Parse a decimal string coming from the NEO feed.
///
/// The feed transports every numeric field as a string. Surrounding whitespace is
/// ignored; anything that is not a valid decimal number becomes `NaN` instead of an error,
/// leaving the decision to reject it to the caller.
///
/// Arguments
/// ---------
/// * `field`: the raw decimal string (e.g. `"1.0274"`)
///
/// Return
/// ------
/// * the parsed value, or `f64::NAN` if the string is malformed
pub fn parse_decimal(field: &str) -> f64 {
    field.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Convert a distance from astronomical units to kilometers
pub fn au_to_km(distance: AstronomicalUnit) -> Kilometer {
    distance * AU
}

/// Mean anomaly rate from an orbital period.
///
/// Arguments
/// ---------
/// * `period_days`: the orbital period in days
///
/// Return
/// ------
/// * the mean motion in degrees per day. A zero period yields `inf`, a `NaN` period yields `NaN`.
pub fn mean_motion_deg_per_day(period_days: f64) -> DegreePerDay {
    DEGREES_PER_REVOLUTION / period_days
}
