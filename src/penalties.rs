//! The seven independent penalty functions. Each is a pure map from
//! `(itinerary, preferences)` to dollars; negative values are rewards.

use crate::model::{CabinClass, FlightItinerary, FlightSegment};
use crate::prefs::{AirlineTier, Preferences};
use crate::tz;

fn is_overnight_departure(seg: &FlightSegment) -> bool {
    let hour = seg.departure.hour();
    hour >= 20 || hour < 4
}

/// Configured alternate departure airports cost their flat dollar penalty
/// plus the extra minutes billed at the hourly rate. Unlisted non-home
/// departures and all arrivals cost nothing.
pub fn airport_penalty(flight: &FlightItinerary, prefs: &Preferences) -> f64 {
    flight
        .segments
        .iter()
        .filter(|seg| !seg.from_airport.eq_ignore_ascii_case(&prefs.home_airport))
        .filter_map(|seg| prefs.alternate_airport(&seg.from_airport))
        .map(|alt| {
            alt.dollar_penalty + f64::from(alt.time_penalty_minutes) / 60.0 * prefs.dollar_per_hour
        })
        .sum()
}

/// Per segment: preferred carriers are free, every other tier has a flat
/// configured cost, unlisted carriers fall into their own bucket.
pub fn airline_penalty(flight: &FlightItinerary, prefs: &Preferences) -> f64 {
    flight
        .segments
        .iter()
        .map(|seg| match prefs.airline_tier(&seg.airline) {
            Some(AirlineTier::Preferred) => 0.0,
            Some(AirlineTier::Acceptable) => prefs.acceptable_airline_penalty,
            Some(AirlineTier::Avoid) => prefs.avoid_airline_penalty,
            None => prefs.non_preferred_airline_penalty,
        })
        .sum()
}

/// Flat once-per-itinerary charge for flying economy on an overnight
/// journey, when the traveler wants business for overnights. A journey is
/// overnight if any segment departs in [20:00, 04:00) on its own clock.
pub fn cabin_class_penalty(flight: &FlightItinerary, prefs: &Preferences) -> f64 {
    if !prefs.business_if_overnight {
        return 0.0;
    }
    let overnight = flight.segments.iter().any(is_overnight_departure);
    let has_economy = flight
        .segments
        .iter()
        .any(|seg| seg.cabin == CabinClass::Economy);
    if overnight && has_economy {
        prefs.overnight_economy_penalty
    } else {
        0.0
    }
}

/// Nonstops earn the bonus; otherwise a flat charge per stop plus the
/// layover hours beyond the threshold. Layovers are measured on the shared
/// local clock of the connection airport.
pub fn stops_penalty(flight: &FlightItinerary, prefs: &Preferences) -> f64 {
    if flight.stops == 0 {
        return prefs.nonstop_bonus;
    }

    let mut penalty = f64::from(flight.stops) * prefs.per_stop_penalty;
    for pair in flight.segments.windows(2) {
        let layover_minutes = pair[1].departure.duration_since(pair[0].arrival).as_secs() as f64 / 60.0;
        let excess = (layover_minutes - f64::from(prefs.layover_threshold_minutes)).max(0.0);
        penalty += excess / 60.0 * prefs.per_layover_hour_penalty;
    }
    penalty
}

/// Per leg, not per itinerary: preferred types earn the (negative) bonus,
/// everything else the flat non-preferred charge.
pub fn aircraft_penalty(flight: &FlightItinerary, prefs: &Preferences) -> f64 {
    flight
        .segments
        .iter()
        .map(|seg| {
            if prefs.prefers_aircraft(&seg.aircraft) {
                prefs.aircraft_bonus
            } else {
                prefs.non_preferred_aircraft_penalty
            }
        })
        .sum()
}

/// First segment only. Early westbound departures are discounted to a
/// quarter of the penalty — they still land at a reasonable destination
/// hour. Late departures get no such relief.
pub fn departure_time_penalty(flight: &FlightItinerary, prefs: &Preferences) -> f64 {
    let Some(first) = flight.segments.first() else {
        return 0.0;
    };
    let hour = first.departure.hour() as u8;

    if hour < prefs.early_departure_threshold {
        let delta = tz::timezone_delta(&first.from_airport, &flight.to_airport, first.departure);
        if delta < -1.0 {
            return prefs.early_departure_penalty * 0.25;
        }
        return prefs.early_departure_penalty;
    }

    if hour >= prefs.late_departure_threshold {
        return prefs.late_departure_penalty;
    }

    0.0
}

/// Excess over the shortest total duration in the batch being scored,
/// billed at the hourly rate. The baseline is supplied by the orchestrator.
pub fn travel_time_penalty(
    flight: &FlightItinerary,
    prefs: &Preferences,
    shortest_duration_minutes: u32,
) -> f64 {
    if flight.total_duration_minutes <= shortest_duration_minutes {
        return 0.0;
    }
    let excess = f64::from(flight.total_duration_minutes - shortest_duration_minutes);
    excess / 60.0 * prefs.dollar_per_hour
}
