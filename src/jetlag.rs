//! Jet-lag assessment for itineraries crossing three or more timezones.
//! Produces a 0-100 quality score plus a dollar penalty for the breakdown.

use crate::model::{CabinClass, Direction, FlightItinerary, JetLagDetail};
use crate::prefs::Preferences;
use crate::{refdata, tz};

pub struct JetLagAssessment {
    pub detail: JetLagDetail,
    pub penalty: f64,
}

/// Eastbound travelers want a late-afternoon arrival; westbound a morning
/// one. Returns 100/70/50/20 on the direction's curve.
fn arrival_time_score(direction: Direction, arrival_hour: i8) -> u8 {
    match direction {
        Direction::East => {
            if (16..=20).contains(&arrival_hour) {
                100
            } else if (14..=22).contains(&arrival_hour) {
                70
            } else if arrival_hour >= 10 {
                50
            } else {
                20
            }
        }
        Direction::West | Direction::None => {
            if (8..=12).contains(&arrival_hour) {
                100
            } else if (6..=15).contains(&arrival_hour) {
                70
            } else if (15..=20).contains(&arrival_hour) {
                50
            } else {
                20
            }
        }
    }
}

/// `None` when fewer than three timezones are crossed (or the destination
/// is unknown) — the itinerary has no jet-lag line item at all.
pub fn assess(flight: &FlightItinerary, prefs: &Preferences) -> Option<JetLagAssessment> {
    refdata::airport(&flight.to_airport)?;

    let delta = tz::timezone_delta(&flight.from_airport, &flight.to_airport, flight.departure);
    let abs_delta = delta.abs();
    if abs_delta < 3.0 {
        return None;
    }

    let direction = Direction::from_delta(delta);
    let mut score = 100.0;
    let mut penalty = 0.0;

    // Arrival is already destination-local wall-clock time.
    let ats = arrival_time_score(direction, flight.arrival.hour());
    score -= f64::from(100 - ats) * 0.3;
    penalty += f64::from(100 - ats) / 100.0 * 50.0;

    let has_preferred_aircraft = flight
        .segments
        .iter()
        .any(|seg| prefs.prefers_aircraft(&seg.aircraft));
    if has_preferred_aircraft {
        score += 10.0;
        penalty -= 50.0;
    }

    let departure_hour = flight.departure.hour();
    let is_red_eye = departure_hour >= 20 || departure_hour < 4;
    let has_economy = flight
        .segments
        .iter()
        .any(|seg| seg.cabin == CabinClass::Economy);
    let red_eye_penalty = is_red_eye && has_economy;
    if red_eye_penalty {
        score -= 25.0;
        penalty += 150.0;
    }

    // A layover that falls inside the destination's sleep window (23:00 to
    // 07:00, destination clock) disrupts adjustment; each one counts.
    if flight.segments.len() > 1 {
        for seg in &flight.segments[..flight.segments.len() - 1] {
            let layover_start_hour = tz::hour_at(seg.arrival, &seg.to_airport, &flight.to_airport);
            if layover_start_hour >= 23 || layover_start_hour < 7 {
                score -= 15.0;
                penalty += 40.0;
            }
        }
    }

    // More timezones crossed scales the cost, capped at 1.5x (9+ hours).
    let multiplier = (abs_delta / 6.0).min(1.5);
    penalty = (penalty * multiplier).round();

    let overall = score.round().clamp(0.0, 100.0) as u8;

    Some(JetLagAssessment {
        detail: JetLagDetail {
            timezone_delta: delta,
            direction,
            arrival_time_score: ats,
            aircraft_bonus: has_preferred_aircraft,
            red_eye_penalty,
            overall_score: overall,
        },
        // Bonuses can cancel penalties, but this line item never pays out.
        penalty: penalty.max(0.0),
    })
}
