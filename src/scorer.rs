//! Orchestrates the penalty functions and the jet-lag evaluator into a
//! scored, ranked result set.

use crate::error::Error;
use crate::jetlag;
use crate::model::{FlightItinerary, PenaltyBreakdown, ScoredFlight};
use crate::penalties;
use crate::prefs::Preferences;

/// Score one itinerary against the batch-wide shortest duration. Pure and
/// total: unknown reference codes degrade to neutral terms, nothing fails.
pub fn score_flight(
    flight: &FlightItinerary,
    prefs: &Preferences,
    shortest_duration_minutes: u32,
) -> ScoredFlight {
    let mut breakdown = PenaltyBreakdown {
        airport: penalties::airport_penalty(flight, prefs),
        airline: penalties::airline_penalty(flight, prefs),
        cabin_class: penalties::cabin_class_penalty(flight, prefs),
        stops: penalties::stops_penalty(flight, prefs),
        aircraft: penalties::aircraft_penalty(flight, prefs),
        departure_time: penalties::departure_time_penalty(flight, prefs),
        travel_time: penalties::travel_time_penalty(flight, prefs, shortest_duration_minutes),
        jet_lag: 0.0,
    };

    let jet_lag = jetlag::assess(flight, prefs).map(|assessment| {
        breakdown.jet_lag = assessment.penalty;
        assessment.detail
    });

    let total_penalty = breakdown.total();

    ScoredFlight {
        flight: flight.clone(),
        effective_cost: (flight.price + total_penalty).round() as i64,
        penalties: breakdown,
        total_penalty: total_penalty.round() as i64,
        jet_lag,
    }
}

/// Score a whole batch against its own shortest total duration and rank
/// ascending by effective cost. The baseline is computed once, up front,
/// from the complete batch — each itinerary's travel-time penalty is
/// relative to the best option in this result set.
pub fn score_flights(
    flights: &[FlightItinerary],
    prefs: &Preferences,
) -> Result<Vec<ScoredFlight>, Error> {
    let shortest = flights
        .iter()
        .map(|f| f.total_duration_minutes)
        .min()
        .ok_or(Error::EmptyBatch)?;

    let mut scored: Vec<ScoredFlight> = flights
        .iter()
        .map(|f| score_flight(f, prefs, shortest))
        .collect();
    scored.sort_by_key(|s| s.effective_cost);
    Ok(scored)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    EffectiveCost,
    Price,
    Duration,
    Departure,
}

impl SortField {
    pub fn from_str_loose(s: &str) -> Result<Self, Error> {
        match s {
            "effective-cost" | "effective_cost" => Ok(Self::EffectiveCost),
            "price" => Ok(Self::Price),
            "duration" => Ok(Self::Duration),
            "departure" => Ok(Self::Departure),
            _ => Err(Error::Validation(format!(
                "invalid sort field: {s} (expected effective-cost, price, duration or departure)"
            ))),
        }
    }
}

/// Re-sort an already scored result set for display. `EffectiveCost` is the
/// ranking order `score_flights` already produced.
pub fn sort_results(results: &mut [ScoredFlight], field: SortField) {
    match field {
        SortField::EffectiveCost => results.sort_by_key(|s| s.effective_cost),
        SortField::Price => results.sort_by(|a, b| a.flight.price.total_cmp(&b.flight.price)),
        SortField::Duration => results.sort_by_key(|s| s.flight.total_duration_minutes),
        SortField::Departure => results.sort_by_key(|s| s.flight.departure),
    }
}
