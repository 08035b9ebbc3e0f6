use jiff::civil::date;

use fareweight::jetlag;
use fareweight::model::{CabinClass, Direction, FlightItinerary, FlightSegment};
use fareweight::prefs::Preferences;

fn segment(from: &str, to: &str) -> FlightSegment {
    FlightSegment {
        flight_number: "UA100".into(),
        airline: "UA".into(),
        aircraft: "B777".into(),
        from_airport: from.into(),
        to_airport: to.into(),
        departure: date(2026, 3, 15).at(18, 0, 0, 0),
        arrival: date(2026, 3, 16).at(6, 0, 0, 0),
        duration_minutes: 420,
        cabin: CabinClass::Economy,
    }
}

fn itinerary(segments: Vec<FlightSegment>) -> FlightItinerary {
    let first = segments.first().expect("at least one segment").clone();
    let last = segments.last().expect("at least one segment").clone();
    FlightItinerary {
        id: "test-1".into(),
        stops: (segments.len() - 1) as u32,
        segments,
        total_duration_minutes: 420,
        price: 600.0,
        from_airport: first.from_airport,
        to_airport: last.to_airport,
        departure: first.departure,
        arrival: last.arrival,
    }
}

#[test]
fn activates_eastbound_across_the_atlantic() {
    let prefs = Preferences::default();
    let flight = itinerary(vec![segment("EWR", "LHR")]);
    let assessment = jetlag::assess(&flight, &prefs).expect("3+ timezones crossed");
    assert!(assessment.detail.timezone_delta > 0.0);
    assert_eq!(assessment.detail.direction, Direction::East);
}

#[test]
fn inactive_below_three_timezones() {
    let prefs = Preferences::default();
    let mut seg = segment("EWR", "ORD");
    seg.arrival = date(2026, 3, 15).at(19, 30, 0, 0);
    let flight = itinerary(vec![seg]);
    assert!(jetlag::assess(&flight, &prefs).is_none());
}

#[test]
fn inactive_for_unknown_destination() {
    let prefs = Preferences::default();
    let flight = itinerary(vec![segment("EWR", "XXX")]);
    assert!(jetlag::assess(&flight, &prefs).is_none());
}

#[test]
fn preferred_aircraft_sets_the_bonus_flag() {
    let prefs = Preferences::default();
    let mut seg = segment("EWR", "LHR");
    seg.aircraft = "A350".into();
    let flight = itinerary(vec![seg]);
    let assessment = jetlag::assess(&flight, &prefs).expect("3+ timezones crossed");
    assert!(assessment.detail.aircraft_bonus);
}

#[test]
fn penalty_never_goes_negative() {
    let prefs = Preferences::default();
    // Ideal eastbound arrival at 17:00 plus the aircraft bonus would push
    // the raw penalty below zero; the line item floors at 0.
    let mut seg = segment("EWR", "LHR");
    seg.aircraft = "A350".into();
    seg.departure = date(2026, 3, 15).at(9, 0, 0, 0);
    seg.arrival = date(2026, 3, 15).at(17, 0, 0, 0);
    let flight = itinerary(vec![seg]);
    let assessment = jetlag::assess(&flight, &prefs).expect("3+ timezones crossed");
    assert_eq!(assessment.detail.arrival_time_score, 100);
    assert_eq!(assessment.penalty, 0.0);
}

#[test]
fn economy_red_eye_is_flagged_and_charged() {
    let prefs = Preferences::default();
    let mut seg = segment("EWR", "LHR");
    seg.departure = date(2026, 3, 15).at(21, 30, 0, 0);
    seg.arrival = date(2026, 3, 16).at(9, 30, 0, 0);
    let flight = itinerary(vec![seg]);
    let assessment = jetlag::assess(&flight, &prefs).expect("3+ timezones crossed");
    assert!(assessment.detail.red_eye_penalty);
    assert!(assessment.penalty > 0.0);
}

#[test]
fn business_red_eye_is_not_flagged() {
    let prefs = Preferences::default();
    let mut seg = segment("EWR", "LHR");
    seg.departure = date(2026, 3, 15).at(21, 30, 0, 0);
    seg.arrival = date(2026, 3, 16).at(9, 30, 0, 0);
    seg.cabin = CabinClass::Business;
    let flight = itinerary(vec![seg]);
    let assessment = jetlag::assess(&flight, &prefs).expect("3+ timezones crossed");
    assert!(!assessment.detail.red_eye_penalty);
}

#[test]
fn layover_in_destination_sleep_window_disrupts() {
    let prefs = Preferences::default();
    // EWR → ORD arriving 21:30 Chicago time is 02:30 in London: squarely
    // inside the destination sleep window.
    let mut seg1 = segment("EWR", "ORD");
    seg1.departure = date(2026, 3, 15).at(19, 0, 0, 0);
    seg1.arrival = date(2026, 3, 15).at(21, 30, 0, 0);
    let mut seg2 = segment("ORD", "LHR");
    seg2.departure = date(2026, 3, 15).at(23, 0, 0, 0);
    seg2.arrival = date(2026, 3, 16).at(17, 0, 0, 0);
    seg2.cabin = CabinClass::Business;
    let flight = itinerary(vec![seg1, seg2]);

    let assessment = jetlag::assess(&flight, &prefs).expect("3+ timezones crossed");
    // Perfect eastbound arrival (17:00), business cabin but a 19:00
    // departure is no red-eye anyway; the only deduction is the layover.
    assert_eq!(assessment.detail.arrival_time_score, 100);
    assert_eq!(assessment.detail.overall_score, 85);
    // $40 scaled by 4/6 timezones, rounded
    assert_eq!(assessment.penalty, 27.0);
}
