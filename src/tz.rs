//! Timezone arithmetic over the IANA database (via jiff). Unresolvable
//! airport or zone names degrade to "no timezone effect", never an error.

use jiff::civil::DateTime;
use jiff::tz::TimeZone;
use jiff::Timestamp;

use crate::refdata;

/// Signed offset from UTC in hours, DST included, at the given instant.
pub fn utc_offset_hours(tz: &TimeZone, at: Timestamp) -> f64 {
    f64::from(tz.to_offset(at).seconds()) / 3600.0
}

fn zone_of(airport_code: &str) -> Option<TimeZone> {
    let airport = refdata::airport(airport_code)?;
    TimeZone::get(airport.timezone).ok()
}

/// Offset difference `dest - origin` in hours, both evaluated at the single
/// instant obtained by reading `local_departure` on the origin's clock.
/// Returns 0 if either airport is unknown.
pub fn timezone_delta(origin: &str, dest: &str, local_departure: DateTime) -> f64 {
    let (Some(origin_tz), Some(dest_tz)) = (zone_of(origin), zone_of(dest)) else {
        return 0.0;
    };
    let Ok(zoned) = local_departure.to_zoned(origin_tz.clone()) else {
        return 0.0;
    };
    let at = zoned.timestamp();
    utc_offset_hours(&dest_tz, at) - utc_offset_hours(&origin_tz, at)
}

/// Re-express a wall-clock time at one airport as the hour of day at
/// another. Falls back to the raw local hour when either airport cannot be
/// resolved.
pub fn hour_at(local: DateTime, at_airport: &str, in_airport: &str) -> i8 {
    let fallback = local.hour();
    let (Some(from_tz), Some(to_tz)) = (zone_of(at_airport), zone_of(in_airport)) else {
        return fallback;
    };
    match local.to_zoned(from_tz) {
        Ok(zoned) => zoned.timestamp().to_zoned(to_tz).hour(),
        Err(_) => fallback,
    }
}
