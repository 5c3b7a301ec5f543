use hifitime::{Epoch, Unit};

use crate::constants::{JulianDate, J2000_JD, MILLISECONDS_PER_DAY};
use crate::neo_errors::NeoError;

/// The fixed reference epoch (J2000.0, 2000-01-01 12:00:00 UTC) all osculation epochs are
/// measured against.
pub fn reference_epoch() -> Epoch {
    Epoch::from_gregorian_utc_hms(2000, 1, 1, 12, 0, 0)
}

/// Offset in milliseconds between a julian date and the reference epoch
pub fn ms_since_reference(jd: JulianDate) -> f64 {
    (jd - J2000_JD) * MILLISECONDS_PER_DAY
}

/// Map a julian date to an absolute instant.
///
/// The instant is the reference epoch shifted by `(jd - 2451545) * 86_400_000` milliseconds,
/// so a julian date of `2451545` maps exactly onto [`reference_epoch`].
///
/// Arguments
/// ---------
/// * `jd`: a julian date (days)
///
/// Return
/// ------
/// * `Some(epoch)` for a finite julian date, `None` otherwise
pub fn jd_to_epoch(jd: JulianDate) -> Option<Epoch> {
    if !jd.is_finite() {
        return None;
    }
    Some(reference_epoch() + Unit::Millisecond * ms_since_reference(jd))
}

/// Format an epoch as a `YYYY-MM-DD` calendar date (UTC)
pub fn epoch_to_iso_date(epoch: &Epoch) -> String {
    let (year, month, day, ..) = epoch.to_gregorian_utc();
    format!("{year:04}-{month:02}-{day:02}")
}

/// Format an epoch as an ISO-8601 UTC timestamp with millisecond precision,
/// e.g. `2000-01-01T12:00:00.000Z`
pub fn epoch_to_iso_timestamp(epoch: &Epoch) -> String {
    let (year, month, day, hour, minute, second, nanos) = epoch.to_gregorian_utc();
    let millis = nanos / 1_000_000;
    format!("{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}.{millis:03}Z")
}

/// Check a `YYYY-MM-DD` date and return its canonical form.
///
/// Arguments
/// ---------
/// * `date`: the calendar date to check
///
/// Return
/// ------
/// * the zero-padded date, or a [`NeoError::Config`] if the date is not a valid gregorian date
pub fn parse_iso_date(date: &str) -> Result<String, NeoError> {
    let invalid = || NeoError::Config(format!("invalid date '{date}', expected YYYY-MM-DD"));

    let mut parts = date.trim().split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u8 = month.parse().map_err(|_| invalid())?;
    let day: u8 = day.parse().map_err(|_| invalid())?;

    let epoch =
        Epoch::maybe_from_gregorian_utc(year, month, day, 0, 0, 0, 0).map_err(|_| invalid())?;
    Ok(epoch_to_iso_date(&epoch))
}

/// Start date of the list-feed query.
///
/// Arguments
/// ---------
/// * `override_date`: an explicit `YYYY-MM-DD` date, usually taken from the configuration
///
/// Return
/// ------
/// * the override when given, otherwise today's date (UTC)
pub fn feed_start_date(override_date: Option<&str>) -> Result<String, NeoError> {
    match override_date {
        Some(date) => parse_iso_date(date),
        None => {
            let now = Epoch::now()
                .map_err(|err| NeoError::Config(format!("system clock unavailable: {err}")))?;
            Ok(epoch_to_iso_date(&now))
        }
    }
}
