use jiff::civil::date;

use fareweight::model::Direction;
use fareweight::tz;

#[test]
fn transcontinental_delta_is_minus_three() {
    let delta = tz::timezone_delta("EWR", "SFO", date(2026, 3, 15).at(10, 0, 0, 0));
    assert_eq!(delta, -3.0);
}

#[test]
fn transatlantic_delta_depends_on_dst_divergence() {
    // US DST starts Mar 8, UK summer time starts Mar 29: four hours apart
    // in the gap, five in January.
    let in_gap = tz::timezone_delta("EWR", "LHR", date(2026, 3, 15).at(18, 0, 0, 0));
    assert_eq!(in_gap, 4.0);

    let in_winter = tz::timezone_delta("EWR", "LHR", date(2026, 1, 15).at(18, 0, 0, 0));
    assert_eq!(in_winter, 5.0);
}

#[test]
fn delta_is_symmetric_in_sign() {
    let east = tz::timezone_delta("EWR", "LHR", date(2026, 7, 1).at(12, 0, 0, 0));
    let west = tz::timezone_delta("LHR", "EWR", date(2026, 7, 1).at(12, 0, 0, 0));
    assert_eq!(east, 5.0);
    assert_eq!(west, -5.0);
}

#[test]
fn unknown_airport_means_no_timezone_effect() {
    let at = date(2026, 3, 15).at(10, 0, 0, 0);
    assert_eq!(tz::timezone_delta("XXX", "SFO", at), 0.0);
    assert_eq!(tz::timezone_delta("EWR", "XXX", at), 0.0);
}

#[test]
fn direction_dead_zone_absorbs_small_deltas() {
    assert_eq!(Direction::from_delta(0.0), Direction::None);
    assert_eq!(Direction::from_delta(1.0), Direction::None);
    assert_eq!(Direction::from_delta(-1.0), Direction::None);
    assert_eq!(Direction::from_delta(1.5), Direction::East);
    assert_eq!(Direction::from_delta(-1.5), Direction::West);
}

#[test]
fn hour_at_reexpresses_wall_clock_across_zones() {
    // 21:30 in Chicago on Mar 15 is 02:30 the next day in London.
    let hour = tz::hour_at(date(2026, 3, 15).at(21, 30, 0, 0), "ORD", "LHR");
    assert_eq!(hour, 2);
}

#[test]
fn hour_at_falls_back_to_raw_hour_for_unknown_airports() {
    let hour = tz::hour_at(date(2026, 3, 15).at(21, 30, 0, 0), "XXX", "LHR");
    assert_eq!(hour, 21);
}
