//! Static reference tables. Lookups return `Option` — an unknown code is
//! never an error, callers fall back to neutral behavior or the raw code.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alliance {
    StarAlliance,
    Oneworld,
    SkyTeam,
    None,
}

impl Alliance {
    pub fn label(&self) -> &'static str {
        match self {
            Self::StarAlliance => "Star Alliance",
            Self::Oneworld => "Oneworld",
            Self::SkyTeam => "SkyTeam",
            Self::None => "None",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Airport {
    pub code: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub timezone: &'static str,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct Airline {
    pub code: &'static str,
    pub name: &'static str,
    pub alliance: Alliance,
}

#[derive(Debug, Clone, Copy)]
pub struct Aircraft {
    pub code: &'static str,
    pub name: &'static str,
    /// Cabin pressure altitude in feet — lower is better (A350 = 6000,
    /// typical narrowbody = 7800-8000).
    pub cabin_pressure_altitude_ft: u32,
    pub high_humidity: bool,
    pub better_filtration: bool,
}

pub fn airport(code: &str) -> Option<&'static Airport> {
    AIRPORTS.iter().find(|a| a.code.eq_ignore_ascii_case(code))
}

pub fn airline(code: &str) -> Option<&'static Airline> {
    AIRLINES.iter().find(|a| a.code.eq_ignore_ascii_case(code))
}

pub fn aircraft(code: &str) -> Option<&'static Aircraft> {
    AIRCRAFT.iter().find(|a| a.code.eq_ignore_ascii_case(code))
}

macro_rules! airports {
    ($($code:literal, $name:literal, $city:literal, $tz:literal, $lat:literal, $lon:literal;)*) => {
        &[$(Airport {
            code: $code,
            name: $name,
            city: $city,
            timezone: $tz,
            lat: $lat,
            lon: $lon,
        }),*]
    };
}

pub static AIRPORTS: &[Airport] = airports![
    // New York area
    "EWR", "Newark Liberty International", "Newark", "America/New_York", 40.6925, -74.1686;
    "JFK", "John F. Kennedy International", "New York", "America/New_York", 40.6413, -73.7781;
    "LGA", "LaGuardia", "New York", "America/New_York", 40.7769, -73.8740;
    // California
    "SFO", "San Francisco International", "San Francisco", "America/Los_Angeles", 37.6213, -122.3790;
    "LAX", "Los Angeles International", "Los Angeles", "America/Los_Angeles", 33.9425, -118.4081;
    "SJC", "San Jose International", "San Jose", "America/Los_Angeles", 37.3639, -121.9289;
    "OAK", "Oakland International", "Oakland", "America/Los_Angeles", 37.7213, -122.2208;
    "SAN", "San Diego International", "San Diego", "America/Los_Angeles", 32.7338, -117.1933;
    // Midwest
    "ORD", "O'Hare International", "Chicago", "America/Chicago", 41.9742, -87.9073;
    "MDW", "Midway International", "Chicago", "America/Chicago", 41.7868, -87.7522;
    "DTW", "Detroit Metropolitan", "Detroit", "America/Detroit", 42.2124, -83.3534;
    "MSP", "Minneapolis-Saint Paul", "Minneapolis", "America/Chicago", 44.8848, -93.2223;
    // South
    "ATL", "Hartsfield-Jackson Atlanta", "Atlanta", "America/New_York", 33.6407, -84.4277;
    "MIA", "Miami International", "Miami", "America/New_York", 25.7959, -80.2870;
    "FLL", "Fort Lauderdale-Hollywood", "Fort Lauderdale", "America/New_York", 26.0726, -80.1527;
    "DFW", "Dallas/Fort Worth International", "Dallas", "America/Chicago", 32.8998, -97.0403;
    "IAH", "George Bush Intercontinental", "Houston", "America/Chicago", 29.9902, -95.3368;
    "DEN", "Denver International", "Denver", "America/Denver", 39.8561, -104.6737;
    // Pacific Northwest
    "SEA", "Seattle-Tacoma International", "Seattle", "America/Los_Angeles", 47.4502, -122.3088;
    "PDX", "Portland International", "Portland", "America/Los_Angeles", 45.5898, -122.5951;
    // Other US
    "BOS", "Boston Logan International", "Boston", "America/New_York", 42.3656, -71.0096;
    "PHL", "Philadelphia International", "Philadelphia", "America/New_York", 39.8744, -75.2424;
    "DCA", "Ronald Reagan Washington National", "Washington", "America/New_York", 38.8512, -77.0402;
    "IAD", "Washington Dulles International", "Washington", "America/New_York", 38.9531, -77.4565;
    "CLT", "Charlotte Douglas International", "Charlotte", "America/New_York", 35.2140, -80.9431;
    "PHX", "Phoenix Sky Harbor", "Phoenix", "America/Phoenix", 33.4373, -112.0078;
    "LAS", "Harry Reid International", "Las Vegas", "America/Los_Angeles", 36.0840, -115.1537;
    "MCO", "Orlando International", "Orlando", "America/New_York", 28.4312, -81.3081;
    "MSY", "Louis Armstrong New Orleans", "New Orleans", "America/Chicago", 29.9934, -90.2580;
    "SLC", "Salt Lake City International", "Salt Lake City", "America/Denver", 40.7899, -111.9791;
    "HNL", "Daniel K. Inouye International", "Honolulu", "Pacific/Honolulu", 21.3187, -157.9225;
    "ANC", "Ted Stevens Anchorage", "Anchorage", "America/Anchorage", 61.1744, -149.9964;
    // Europe
    "LHR", "London Heathrow", "London", "Europe/London", 51.4700, -0.4543;
    "LGW", "London Gatwick", "London", "Europe/London", 51.1537, -0.1821;
    "CDG", "Charles de Gaulle", "Paris", "Europe/Paris", 49.0097, 2.5479;
    "FRA", "Frankfurt Airport", "Frankfurt", "Europe/Berlin", 50.0379, 8.5622;
    "MUC", "Munich Airport", "Munich", "Europe/Berlin", 48.3537, 11.7750;
    "AMS", "Amsterdam Schiphol", "Amsterdam", "Europe/Amsterdam", 52.3105, 4.7683;
    "MAD", "Adolfo Suárez Madrid-Barajas", "Madrid", "Europe/Madrid", 40.4983, -3.5676;
    "FCO", "Leonardo da Vinci-Fiumicino", "Rome", "Europe/Rome", 41.8003, 12.2389;
    "ZRH", "Zurich Airport", "Zurich", "Europe/Zurich", 47.4647, 8.5492;
    // Asia
    "NRT", "Narita International", "Tokyo", "Asia/Tokyo", 35.7720, 140.3929;
    "HND", "Tokyo Haneda", "Tokyo", "Asia/Tokyo", 35.5494, 139.7798;
    "ICN", "Incheon International", "Seoul", "Asia/Seoul", 37.4602, 126.4407;
    "SIN", "Singapore Changi", "Singapore", "Asia/Singapore", 1.3644, 103.9915;
    "HKG", "Hong Kong International", "Hong Kong", "Asia/Hong_Kong", 22.3080, 113.9185;
    "PEK", "Beijing Capital International", "Beijing", "Asia/Shanghai", 40.0799, 116.6031;
    "DXB", "Dubai International", "Dubai", "Asia/Dubai", 25.2532, 55.3657;
    "DEL", "Indira Gandhi International", "Delhi", "Asia/Kolkata", 28.5562, 77.1000;
    "BKK", "Suvarnabhumi Airport", "Bangkok", "Asia/Bangkok", 13.6900, 100.7501;
    // Oceania
    "SYD", "Sydney Kingsford Smith", "Sydney", "Australia/Sydney", -33.9461, 151.1772;
];

pub static AIRLINES: &[Airline] = &[
    // Star Alliance
    Airline { code: "UA", name: "United Airlines", alliance: Alliance::StarAlliance },
    Airline { code: "LH", name: "Lufthansa", alliance: Alliance::StarAlliance },
    Airline { code: "NH", name: "ANA", alliance: Alliance::StarAlliance },
    Airline { code: "AC", name: "Air Canada", alliance: Alliance::StarAlliance },
    Airline { code: "SQ", name: "Singapore Airlines", alliance: Alliance::StarAlliance },
    Airline { code: "SK", name: "SAS", alliance: Alliance::StarAlliance },
    // Oneworld
    Airline { code: "AA", name: "American Airlines", alliance: Alliance::Oneworld },
    Airline { code: "BA", name: "British Airways", alliance: Alliance::Oneworld },
    Airline { code: "JL", name: "Japan Airlines", alliance: Alliance::Oneworld },
    Airline { code: "QF", name: "Qantas", alliance: Alliance::Oneworld },
    Airline { code: "CX", name: "Cathay Pacific", alliance: Alliance::Oneworld },
    Airline { code: "AS", name: "Alaska Airlines", alliance: Alliance::Oneworld },
    // SkyTeam
    Airline { code: "DL", name: "Delta Air Lines", alliance: Alliance::SkyTeam },
    Airline { code: "AF", name: "Air France", alliance: Alliance::SkyTeam },
    Airline { code: "KL", name: "KLM", alliance: Alliance::SkyTeam },
    Airline { code: "KE", name: "Korean Air", alliance: Alliance::SkyTeam },
    // No alliance
    Airline { code: "B6", name: "JetBlue", alliance: Alliance::None },
    Airline { code: "WN", name: "Southwest Airlines", alliance: Alliance::None },
    Airline { code: "NK", name: "Spirit Airlines", alliance: Alliance::None },
    Airline { code: "F9", name: "Frontier Airlines", alliance: Alliance::None },
    Airline { code: "EK", name: "Emirates", alliance: Alliance::None },
];

pub static AIRCRAFT: &[Aircraft] = &[
    Aircraft { code: "A350", name: "Airbus A350", cabin_pressure_altitude_ft: 6000, high_humidity: true, better_filtration: true },
    Aircraft { code: "A380", name: "Airbus A380", cabin_pressure_altitude_ft: 6000, high_humidity: true, better_filtration: true },
    Aircraft { code: "B787", name: "Boeing 787 Dreamliner", cabin_pressure_altitude_ft: 6000, high_humidity: true, better_filtration: true },
    Aircraft { code: "A330", name: "Airbus A330", cabin_pressure_altitude_ft: 6900, high_humidity: false, better_filtration: false },
    Aircraft { code: "B777", name: "Boeing 777", cabin_pressure_altitude_ft: 6900, high_humidity: false, better_filtration: false },
    Aircraft { code: "B767", name: "Boeing 767", cabin_pressure_altitude_ft: 7900, high_humidity: false, better_filtration: false },
    Aircraft { code: "B757", name: "Boeing 757", cabin_pressure_altitude_ft: 7900, high_humidity: false, better_filtration: false },
    Aircraft { code: "A321", name: "Airbus A321", cabin_pressure_altitude_ft: 7800, high_humidity: false, better_filtration: false },
    Aircraft { code: "A320", name: "Airbus A320", cabin_pressure_altitude_ft: 7800, high_humidity: false, better_filtration: false },
    Aircraft { code: "B738", name: "Boeing 737-800", cabin_pressure_altitude_ft: 7800, high_humidity: false, better_filtration: false },
    Aircraft { code: "B739", name: "Boeing 737-900", cabin_pressure_altitude_ft: 7800, high_humidity: false, better_filtration: false },
    Aircraft { code: "E175", name: "Embraer E175", cabin_pressure_altitude_ft: 7800, high_humidity: false, better_filtration: false },
    Aircraft { code: "CRJ9", name: "CRJ-900", cabin_pressure_altitude_ft: 8000, high_humidity: false, better_filtration: false },
];
