use std::str::FromStr;

use jiff::civil::Date;

use fareweight::mock::{self, SearchParams};

fn params(origin: &str, destination: &str) -> SearchParams {
    SearchParams {
        origin: origin.into(),
        destination: destination.into(),
        date: Date::from_str("2026-03-15").expect("valid date"),
    }
}

#[test]
fn same_search_generates_identical_flights() {
    let a = mock::generate(&params("EWR", "SFO"));
    let b = mock::generate(&params("EWR", "SFO"));
    let a_json = serde_json::to_string(&a).expect("serializable");
    let b_json = serde_json::to_string(&b).expect("serializable");
    assert_eq!(a_json, b_json);
}

#[test]
fn different_routes_generate_different_flights() {
    let a = mock::generate(&params("EWR", "SFO"));
    let b = mock::generate(&params("EWR", "LAX"));
    let a_json = serde_json::to_string(&a).expect("serializable");
    let b_json = serde_json::to_string(&b).expect("serializable");
    assert_ne!(a_json, b_json);
}

#[test]
fn generated_itineraries_are_well_formed() {
    for route in [("EWR", "SFO"), ("EWR", "LHR"), ("SFO", "NRT")] {
        let flights = mock::generate(&params(route.0, route.1));
        assert!(!flights.is_empty());
        for flight in &flights {
            assert_eq!(flight.stops as usize, flight.segments.len() - 1);
            assert!(flight.price >= 0.0);
            assert!(flight.total_duration_minutes > 0);
            for pair in flight.segments.windows(2) {
                assert_eq!(pair[0].to_airport, pair[1].from_airport);
            }
            let first = flight.segments.first().expect("non-empty");
            let last = flight.segments.last().expect("non-empty");
            assert_eq!(first.from_airport, flight.from_airport);
            assert_eq!(last.to_airport, flight.to_airport);
        }
    }
}

#[test]
fn long_haul_routes_include_red_eyes() {
    let flights = mock::generate(&params("EWR", "LHR"));
    assert!(flights
        .iter()
        .any(|f| f.segments.first().is_some_and(|s| s.departure.hour() >= 20)));
}

#[test]
fn some_departures_use_alternate_origins() {
    let flights = mock::generate(&params("EWR", "SFO"));
    assert!(flights
        .iter()
        .any(|f| f.from_airport == "JFK" || f.from_airport == "LGA"));
}
