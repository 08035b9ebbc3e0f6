use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CabinClass {
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl CabinClass {
    pub fn from_str_loose(s: &str) -> Result<Self, Error> {
        match s {
            "economy" => Ok(Self::Economy),
            "premium-economy" | "premium_economy" => Ok(Self::PremiumEconomy),
            "business" => Ok(Self::Business),
            "first" => Ok(Self::First),
            _ => Err(Error::Validation(format!("invalid cabin class: {s}"))),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Economy => "Economy",
            Self::PremiumEconomy => "Premium Economy",
            Self::Business => "Business",
            Self::First => "First",
        }
    }
}

/// One flight-numbered leg. Departure and arrival are wall-clock times
/// local to their respective airports, not a shared timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightSegment {
    pub flight_number: String,
    pub airline: String,
    pub aircraft: String,
    pub from_airport: String,
    pub to_airport: String,
    pub departure: DateTime,
    pub arrival: DateTime,
    pub duration_minutes: u32,
    pub cabin: CabinClass,
}

/// A complete journey of one or more contiguous segments. The engine
/// assumes `stops == segments.len() - 1` and that adjacent segments share
/// the layover airport; the itinerary source upholds both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightItinerary {
    pub id: String,
    pub segments: Vec<FlightSegment>,
    pub total_duration_minutes: u32,
    pub stops: u32,
    pub price: f64,
    pub from_airport: String,
    pub to_airport: String,
    pub departure: DateTime,
    pub arrival: DateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    East,
    West,
    None,
}

impl Direction {
    /// The ±1h dead zone absorbs rounding and DST noise near zone borders.
    pub fn from_delta(delta_hours: f64) -> Self {
        if delta_hours > 1.0 {
            Self::East
        } else if delta_hours < -1.0 {
            Self::West
        } else {
            Self::None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::East => "east",
            Self::West => "west",
            Self::None => "none",
        }
    }
}

/// Exactly eight independently-computed dollar terms. Any field may be
/// negative (a reward); the total is their plain sum.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PenaltyBreakdown {
    pub airport: f64,
    pub airline: f64,
    pub cabin_class: f64,
    pub stops: f64,
    pub aircraft: f64,
    pub departure_time: f64,
    pub travel_time: f64,
    pub jet_lag: f64,
}

impl PenaltyBreakdown {
    pub fn total(&self) -> f64 {
        self.airport
            + self.airline
            + self.cabin_class
            + self.stops
            + self.aircraft
            + self.departure_time
            + self.travel_time
            + self.jet_lag
    }
}

/// Diagnostics for a jet-lag-relevant itinerary (3+ timezones crossed).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JetLagDetail {
    pub timezone_delta: f64,
    pub direction: Direction,
    pub arrival_time_score: u8,
    pub aircraft_bonus: bool,
    pub red_eye_penalty: bool,
    pub overall_score: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredFlight {
    pub flight: FlightItinerary,
    pub effective_cost: i64,
    pub penalties: PenaltyBreakdown,
    pub total_penalty: i64,
    pub jet_lag: Option<JetLagDetail>,
}
