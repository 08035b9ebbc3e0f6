//! Deterministic synthetic itinerary source. The same search parameters
//! always produce the same flights: the RNG is seeded from a hash of the
//! route and date, so scoring runs are reproducible.

use std::hash::{DefaultHasher, Hash, Hasher};

use jiff::civil::{Date, DateTime};
use jiff::Span;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::model::{CabinClass, FlightItinerary, FlightSegment};
use crate::refdata;

#[derive(Debug, Clone)]
pub struct SearchParams {
    pub origin: String,
    pub destination: String,
    pub date: Date,
}

struct RouteConfig {
    airlines: &'static [&'static str],
    aircraft: &'static [&'static str],
    hubs: &'static [&'static str],
}

fn timezone_prefix(code: &str) -> &'static str {
    match refdata::airport(code) {
        Some(a) => a.timezone.split('/').next().unwrap_or(""),
        None => "",
    }
}

fn route_config(origin: &str, destination: &str) -> RouteConfig {
    let from = timezone_prefix(origin);
    let to = timezone_prefix(destination);
    let americas = |p: &str| p == "America" || p == "Pacific";
    let asia_pacific = |p: &str| p == "Asia" || p == "Australia";

    if americas(from) && americas(to) {
        return RouteConfig {
            airlines: &["UA", "AA", "DL", "B6", "WN", "NK", "AS", "F9"],
            aircraft: &["B738", "A321", "B739", "A320", "B757", "E175"],
            hubs: &["ORD", "DFW", "ATL", "DEN", "IAH", "CLT", "PHX", "MSP"],
        };
    }
    if (americas(from) && to == "Europe") || (from == "Europe" && americas(to)) {
        return RouteConfig {
            airlines: &["UA", "AA", "DL", "BA", "LH", "AF", "KL"],
            aircraft: &["B777", "A350", "B787", "A330", "B767"],
            hubs: &["ORD", "IAD", "BOS", "JFK"],
        };
    }
    if (americas(from) && asia_pacific(to)) || (asia_pacific(from) && americas(to)) {
        return RouteConfig {
            airlines: &["UA", "AA", "DL", "NH", "JL", "SQ", "CX", "KE"],
            aircraft: &["B777", "A350", "B787", "A380"],
            hubs: &["LAX", "SFO", "ORD", "NRT", "ICN"],
        };
    }
    RouteConfig {
        airlines: &["UA", "AA", "DL", "EK", "BA", "LH"],
        aircraft: &["B777", "A350", "B787", "A380", "A330"],
        hubs: &["JFK", "ORD", "DXB", "LHR", "FRA"],
    }
}

fn alternate_origins(origin: &str) -> &'static [&'static str] {
    match origin {
        "EWR" => &["JFK", "LGA"],
        "JFK" => &["EWR", "LGA"],
        "LGA" => &["EWR", "JFK"],
        "SFO" => &["OAK", "SJC"],
        "OAK" => &["SFO", "SJC"],
        "SJC" => &["SFO", "OAK"],
        "LAX" => &["SAN"],
        "ORD" => &["MDW"],
        "MDW" => &["ORD"],
        "DCA" => &["IAD"],
        "IAD" => &["DCA"],
        "LHR" => &["LGW"],
        "LGW" => &["LHR"],
        "NRT" => &["HND"],
        "HND" => &["NRT"],
        _ => &[],
    }
}

/// Great-circle distance in statute miles; unknown airports get a generic
/// medium-haul 2000.
fn distance_miles(a: &str, b: &str) -> f64 {
    let (Some(ap1), Some(ap2)) = (refdata::airport(a), refdata::airport(b)) else {
        return 2000.0;
    };
    let r = 3959.0;
    let d_lat = (ap2.lat - ap1.lat).to_radians();
    let d_lon = (ap2.lon - ap1.lon).to_radians();
    let lat1 = ap1.lat.to_radians();
    let lat2 = ap2.lat.to_radians();
    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    r * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

fn seed_for(params: &SearchParams) -> u64 {
    let mut hasher = DefaultHasher::new();
    params.origin.hash(&mut hasher);
    params.destination.hash(&mut hasher);
    params.date.to_string().hash(&mut hasher);
    hasher.finish()
}

fn cruise_minutes(dist: f64) -> i64 {
    // ~500 mph cruise
    (dist / 500.0 * 60.0).round() as i64
}

fn quarter_hour(rng: &mut ChaCha8Rng) -> i8 {
    (rng.gen_range(0..4) * 15) as i8
}

fn flight_number(rng: &mut ChaCha8Rng, airline: &str) -> String {
    format!("{airline}{}", 100 + rng.gen_range(0..900))
}

fn pick<'a>(rng: &mut ChaCha8Rng, options: &[&'a str]) -> &'a str {
    options[rng.gen_range(0..options.len())]
}

fn cabin_multiplier(rng: &mut ChaCha8Rng, cabin: CabinClass) -> f64 {
    match cabin {
        CabinClass::Business => 3.5 + rng.gen::<f64>(),
        CabinClass::PremiumEconomy => 1.6 + rng.gen::<f64>() * 0.4,
        _ => 1.0,
    }
}

fn nonstop(
    id: u32,
    from: &str,
    to: &str,
    airline: &str,
    aircraft: &str,
    cabin: CabinClass,
    departure: DateTime,
    duration_minutes: i64,
    price: f64,
    rng: &mut ChaCha8Rng,
) -> FlightItinerary {
    let arrival = departure + Span::new().minutes(duration_minutes);
    let segment = FlightSegment {
        flight_number: flight_number(rng, airline),
        airline: airline.into(),
        aircraft: aircraft.into(),
        from_airport: from.into(),
        to_airport: to.into(),
        departure,
        arrival,
        duration_minutes: duration_minutes as u32,
        cabin,
    };
    FlightItinerary {
        id: format!("f{id}"),
        segments: vec![segment],
        total_duration_minutes: duration_minutes as u32,
        stops: 0,
        price,
        from_airport: from.into(),
        to_airport: to.into(),
        departure,
        arrival,
    }
}

pub fn generate(params: &SearchParams) -> Vec<FlightItinerary> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed_for(params));
    let origin = params.origin.as_str();
    let destination = params.destination.as_str();
    let dist = distance_miles(origin, destination);
    let config = route_config(origin, destination);

    let base_duration = cruise_minutes(dist);
    let long_haul = dist > 3000.0;
    let cabins: &[CabinClass] = if long_haul {
        &[CabinClass::Economy, CabinClass::PremiumEconomy, CabinClass::Business]
    } else {
        &[CabinClass::Economy]
    };

    let mut flights = Vec::new();
    let mut id = 0u32;

    // Daytime nonstops
    let nonstop_count = if long_haul {
        rng.gen_range(2..5)
    } else {
        rng.gen_range(3..7)
    };
    for _ in 0..nonstop_count {
        let airline = pick(&mut rng, config.airlines);
        let aircraft = pick(&mut rng, config.aircraft);
        let cabin = cabins[rng.gen_range(0..cabins.len())];
        let departure = params.date.at(rng.gen_range(6..22), quarter_hour(&mut rng), 0, 0);
        let jitter = ((rng.gen::<f64>() - 0.5) * 30.0).round() as i64;
        let duration = (base_duration + jitter).max(30);

        let base_price = dist * (0.08 + rng.gen::<f64>() * 0.06);
        let price = (base_price * cabin_multiplier(&mut rng, cabin)).round();

        flights.push(nonstop(
            id, origin, destination, airline, aircraft, cabin, departure, duration, price, &mut rng,
        ));
        id += 1;
    }

    // One-stop connections through a hub
    let connection_count = rng.gen_range(3..7);
    for _ in 0..connection_count {
        let usable_hubs: Vec<&str> = config
            .hubs
            .iter()
            .copied()
            .filter(|h| *h != origin && *h != destination)
            .collect();
        let hub = if usable_hubs.is_empty() {
            "ORD"
        } else {
            usable_hubs[rng.gen_range(0..usable_hubs.len())]
        };
        let airline = pick(&mut rng, config.airlines);
        let aircraft1 = pick(&mut rng, config.aircraft);
        let aircraft2 = pick(&mut rng, config.aircraft);
        let cabin = cabins[rng.gen_range(0..cabins.len())];

        let duration1 =
            (cruise_minutes(distance_miles(origin, hub)) + ((rng.gen::<f64>() - 0.5) * 20.0).round() as i64).max(30);
        let layover = rng.gen_range(60..240);
        let duration2 = (cruise_minutes(distance_miles(hub, destination))
            + ((rng.gen::<f64>() - 0.5) * 20.0).round() as i64)
            .max(30);

        let departure1 = params.date.at(rng.gen_range(6..20), quarter_hour(&mut rng), 0, 0);
        let arrival1 = departure1 + Span::new().minutes(duration1);
        let departure2 = departure1 + Span::new().minutes(duration1 + layover);
        let arrival2 = departure1 + Span::new().minutes(duration1 + layover + duration2);

        let base_price = (distance_miles(origin, hub) + distance_miles(hub, destination))
            * (0.06 + rng.gen::<f64>() * 0.04);
        let multiplier = match cabin {
            CabinClass::Business => 3.2 + rng.gen::<f64>(),
            CabinClass::PremiumEconomy => 1.5 + rng.gen::<f64>() * 0.3,
            _ => 1.0,
        };
        // Connections price below nonstops
        let price = (base_price * multiplier * (0.8 + rng.gen::<f64>() * 0.2)).round();

        let seg1 = FlightSegment {
            flight_number: flight_number(&mut rng, airline),
            airline: airline.into(),
            aircraft: aircraft1.into(),
            from_airport: origin.into(),
            to_airport: hub.into(),
            departure: departure1,
            arrival: arrival1,
            duration_minutes: duration1 as u32,
            cabin,
        };
        let seg2 = FlightSegment {
            flight_number: flight_number(&mut rng, airline),
            airline: airline.into(),
            aircraft: aircraft2.into(),
            from_airport: hub.into(),
            to_airport: destination.into(),
            departure: departure2,
            arrival: arrival2,
            duration_minutes: duration2 as u32,
            cabin,
        };

        flights.push(FlightItinerary {
            id: format!("f{id}"),
            segments: vec![seg1, seg2],
            total_duration_minutes: (duration1 + layover + duration2) as u32,
            stops: 1,
            price,
            from_airport: origin.into(),
            to_airport: destination.into(),
            departure: departure1,
            arrival: arrival2,
        });
        id += 1;
    }

    // Red-eyes on long-haul routes
    if long_haul {
        for _ in 0..2 {
            let airline = pick(&mut rng, config.airlines);
            let aircraft = pick(&mut rng, config.aircraft);
            let cabin = cabins[rng.gen_range(0..cabins.len())];
            let departure = params.date.at(rng.gen_range(20..24), quarter_hour(&mut rng), 0, 0);
            let duration = (base_duration + ((rng.gen::<f64>() - 0.5) * 30.0).round() as i64).max(30);

            let base_price = dist * (0.07 + rng.gen::<f64>() * 0.05);
            let price = (base_price * cabin_multiplier(&mut rng, cabin)).round();

            flights.push(nonstop(
                id, origin, destination, airline, aircraft, cabin, departure, duration, price,
                &mut rng,
            ));
            id += 1;
        }
    }

    // Departures from nearby alternate airports
    for alt_origin in alternate_origins(origin).iter().take(2) {
        let airline = pick(&mut rng, config.airlines);
        let aircraft = pick(&mut rng, config.aircraft);
        let departure = params.date.at(rng.gen_range(8..18), quarter_hour(&mut rng), 0, 0);
        let alt_dist = distance_miles(alt_origin, destination);
        let duration =
            (cruise_minutes(alt_dist) + ((rng.gen::<f64>() - 0.5) * 20.0).round() as i64).max(30);
        let price = (alt_dist * (0.07 + rng.gen::<f64>() * 0.05)).round();

        flights.push(nonstop(
            id,
            alt_origin,
            destination,
            airline,
            aircraft,
            CabinClass::Economy,
            departure,
            duration,
            price,
            &mut rng,
        ));
        id += 1;
    }

    flights
}
