use std::fmt;

#[derive(Debug)]
pub enum Error {
    InvalidAirport(String),
    InvalidDate(String),
    Validation(String),
    EmptyBatch,
    PrefsIo { path: String, detail: String },
    PrefsParse { path: String, detail: String },
    FixtureIo { path: String, detail: String },
    FixtureParse { path: String, detail: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAirport(code) => write!(
                f,
                "invalid airport code \"{code}\" — must be exactly 3 letters (e.g. EWR, SFO, LHR)"
            ),
            Self::InvalidDate(date) => write!(
                f,
                "invalid date \"{date}\" — must be YYYY-MM-DD format (e.g. 2026-03-15)"
            ),
            Self::Validation(msg) => write!(f, "{msg}"),
            Self::EmptyBatch => write!(
                f,
                "cannot rank an empty batch of itineraries — the shared shortest-duration \
                 baseline is undefined with no flights"
            ),
            Self::PrefsIo { path, detail } => {
                write!(f, "failed to read preferences file {path} ({detail})")
            }
            Self::PrefsParse { path, detail } => write!(
                f,
                "preferences file {path} is not valid JSON — {detail}. \
                 Fix it by hand or run `fareweight prefs reset` to restore defaults"
            ),
            Self::FixtureIo { path, detail } => {
                write!(f, "failed to read itinerary file {path} ({detail})")
            }
            Self::FixtureParse { path, detail } => write!(
                f,
                "itinerary file {path} is not a valid JSON array of itineraries — {detail}"
            ),
        }
    }
}

impl std::error::Error for Error {}
