pub mod error;
pub mod jetlag;
pub mod mock;
pub mod model;
pub mod penalties;
pub mod prefs;
pub mod refdata;
pub mod scorer;
pub mod table;
pub mod tz;

use error::Error;
use mock::SearchParams;
use model::ScoredFlight;
use prefs::Preferences;

pub fn search_and_rank(
    params: &SearchParams,
    preferences: &Preferences,
) -> Result<Vec<ScoredFlight>, Error> {
    let flights = mock::generate(params);
    scorer::score_flights(&flights, preferences)
}
