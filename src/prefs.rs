use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::model::CabinClass;

pub const PREFERENCES_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AirlineTier {
    Preferred,
    Acceptable,
    Avoid,
}

impl AirlineTier {
    pub fn from_str_loose(s: &str) -> Result<Self, Error> {
        match s {
            "preferred" => Ok(Self::Preferred),
            "acceptable" => Ok(Self::Acceptable),
            "avoid" => Ok(Self::Avoid),
            _ => Err(Error::Validation(format!("invalid airline tier: {s}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportPreference {
    pub code: String,
    /// Flat extra cost of flying from here instead of home.
    pub dollar_penalty: f64,
    /// Extra door-to-door minutes, billed at `dollar_per_hour`.
    pub time_penalty_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirlinePreference {
    pub code: String,
    pub tier: AirlineTier,
}

/// The full scoring configuration. The engine only reads it; loading,
/// editing, and persistence live here and in the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub version: u32,
    pub home_airport: String,
    pub alternate_airports: Vec<AirportPreference>,
    pub airlines: Vec<AirlinePreference>,
    pub acceptable_airline_penalty: f64,
    pub avoid_airline_penalty: f64,
    /// Applied to carriers with no tier entry at all.
    pub non_preferred_airline_penalty: f64,
    pub preferred_cabin: CabinClass,
    pub business_if_overnight: bool,
    pub overnight_economy_penalty: f64,
    /// Negative = reward.
    pub nonstop_bonus: f64,
    pub per_stop_penalty: f64,
    pub per_layover_hour_penalty: f64,
    /// Layover minutes below this accrue no penalty.
    pub layover_threshold_minutes: u32,
    pub preferred_aircraft: Vec<String>,
    /// Negative = reward, applied per matching segment.
    pub aircraft_bonus: f64,
    pub non_preferred_aircraft_penalty: f64,
    pub early_departure_penalty: f64,
    /// Hour of day (0-23); departures strictly before it are "early".
    pub early_departure_threshold: u8,
    pub late_departure_penalty: f64,
    /// Hour of day (0-23); departures at or after it are "late".
    pub late_departure_threshold: u8,
    /// Conversion rate for excess time into dollars.
    pub dollar_per_hour: f64,
    /// Advisory only — the scorer never enforces it.
    pub max_budget: Option<f64>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            version: PREFERENCES_VERSION,
            home_airport: "EWR".into(),
            alternate_airports: vec![
                AirportPreference { code: "JFK".into(), dollar_penalty: 100.0, time_penalty_minutes: 120 },
                AirportPreference { code: "LGA".into(), dollar_penalty: 75.0, time_penalty_minutes: 90 },
            ],
            airlines: vec![
                AirlinePreference { code: "UA".into(), tier: AirlineTier::Preferred },
                AirlinePreference { code: "LH".into(), tier: AirlineTier::Preferred },
                AirlinePreference { code: "NH".into(), tier: AirlineTier::Preferred },
                AirlinePreference { code: "SQ".into(), tier: AirlineTier::Preferred },
                AirlinePreference { code: "AA".into(), tier: AirlineTier::Acceptable },
                AirlinePreference { code: "DL".into(), tier: AirlineTier::Acceptable },
                AirlinePreference { code: "BA".into(), tier: AirlineTier::Acceptable },
                AirlinePreference { code: "B6".into(), tier: AirlineTier::Acceptable },
                AirlinePreference { code: "NK".into(), tier: AirlineTier::Avoid },
                AirlinePreference { code: "F9".into(), tier: AirlineTier::Avoid },
            ],
            acceptable_airline_penalty: 50.0,
            avoid_airline_penalty: 200.0,
            non_preferred_airline_penalty: 75.0,
            preferred_cabin: CabinClass::Economy,
            business_if_overnight: true,
            overnight_economy_penalty: 250.0,
            nonstop_bonus: -50.0,
            per_stop_penalty: 75.0,
            per_layover_hour_penalty: 25.0,
            layover_threshold_minutes: 60,
            preferred_aircraft: vec!["A350".into(), "A380".into(), "B787".into()],
            aircraft_bonus: -30.0,
            non_preferred_aircraft_penalty: 0.0,
            early_departure_penalty: 60.0,
            early_departure_threshold: 7,
            late_departure_penalty: 40.0,
            late_departure_threshold: 21,
            dollar_per_hour: 50.0,
            max_budget: None,
        }
    }
}

impl Preferences {
    pub fn airline_tier(&self, code: &str) -> Option<AirlineTier> {
        self.airlines
            .iter()
            .find(|a| a.code.eq_ignore_ascii_case(code))
            .map(|a| a.tier)
    }

    pub fn alternate_airport(&self, code: &str) -> Option<&AirportPreference> {
        self.alternate_airports
            .iter()
            .find(|a| a.code.eq_ignore_ascii_case(code))
    }

    pub fn prefers_aircraft(&self, code: &str) -> bool {
        self.preferred_aircraft
            .iter()
            .any(|a| a.eq_ignore_ascii_case(code))
    }
}

/// Missing file loads defaults; a version mismatch resets to defaults
/// (migration policy); a corrupt file is reported instead of silently
/// discarded.
pub fn load(path: &Path) -> Result<Preferences, Error> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Preferences::default()),
        Err(e) => {
            return Err(Error::PrefsIo {
                path: path.display().to_string(),
                detail: e.to_string(),
            })
        }
    };

    let parsed: Preferences = serde_json::from_str(&raw).map_err(|e| Error::PrefsParse {
        path: path.display().to_string(),
        detail: e.to_string(),
    })?;

    if parsed.version != PREFERENCES_VERSION {
        return Ok(Preferences::default());
    }

    Ok(parsed)
}

pub fn save(path: &Path, prefs: &Preferences) -> Result<(), Error> {
    let io_err = |e: std::io::Error| Error::PrefsIo {
        path: path.display().to_string(),
        detail: e.to_string(),
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    let json = serde_json::to_string_pretty(prefs).map_err(|e| Error::PrefsParse {
        path: path.display().to_string(),
        detail: e.to_string(),
    })?;
    fs::write(path, json).map_err(io_err)
}

/// `FAREWEIGHT_PREFS` overrides; otherwise the file lives under the user's
/// config directory, falling back to the working directory without `$HOME`.
pub fn default_path() -> PathBuf {
    if let Some(path) = std::env::var_os("FAREWEIGHT_PREFS") {
        return PathBuf::from(path);
    }
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home)
            .join(".config")
            .join("fareweight")
            .join("preferences.json"),
        None => PathBuf::from("fareweight-preferences.json"),
    }
}
