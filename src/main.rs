use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use clap::Parser;
use jiff::civil::Date;

use fareweight::error::Error;
use fareweight::mock::SearchParams;
use fareweight::model::{FlightItinerary, ScoredFlight};
use fareweight::prefs::{self, Preferences};
use fareweight::scorer::{self, SortField};
use fareweight::table;

#[derive(Parser)]
#[command(
    name = "fareweight",
    about = "Rank flights by effective cost against your travel preferences",
    version,
    after_help = "\
Examples:
  fareweight search -f EWR -t SFO -d 2026-03-15
  fareweight search -f EWR -t LHR -d 2026-03-15 --json --pretty
  fareweight search -f EWR -t SFO -d 2026-03-15 --nonstop-only --top 3
  fareweight search --input flights.json --sort duration
  fareweight prefs show
  fareweight prefs reset"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    #[command(
        about = "Score and rank flights for a route",
        long_about = "Generate (or load) itineraries for a route, score each one against your \
            preference profile, and print them ranked by effective cost \
            (ticket price plus the dollar value of every preference mismatch).",
        after_help = "\
Examples:
  Basic:        fareweight search -f EWR -t SFO -d 2026-03-15
  Long-haul:    fareweight search -f EWR -t LHR -d 2026-03-15 --breakdown
  From a file:  fareweight search --input flights.json
  Filtered:     fareweight search -f EWR -t SFO -d 2026-03-15 --nonstop-only --max-price 600
  For scripts:  fareweight search -f EWR -t SFO -d 2026-03-15 --compact --top 3"
    )]
    Search(SearchArgs),
    #[command(about = "Inspect or manage the preference profile")]
    Prefs(PrefsArgs),
}

#[derive(clap::Args)]
struct SearchArgs {
    #[arg(
        short, long,
        value_name = "IATA",
        help = "Departure airport code",
        long_help = "Departure airport IATA code (3 letters, e.g. EWR, SFO). \
            Required unless using --input."
    )]
    from: Option<String>,

    #[arg(
        short, long,
        value_name = "IATA",
        help = "Arrival airport code",
        long_help = "Arrival airport IATA code (3 letters, e.g. LHR, NRT). \
            Required unless using --input."
    )]
    to: Option<String>,

    #[arg(
        short, long,
        value_name = "YYYY-MM-DD",
        help = "Departure date",
        long_help = "Departure date in YYYY-MM-DD format. Required unless using --input."
    )]
    date: Option<String>,

    #[arg(
        long,
        value_name = "FILE",
        help = "Score itineraries from a JSON file instead of generating them",
        long_help = "Read a JSON array of itineraries from FILE and score those instead of \
            generating synthetic ones. Replaces -f/-t/-d when used."
    )]
    input: Option<PathBuf>,

    #[arg(long, value_name = "FILE", help = "Preferences file (default: config dir)")]
    prefs: Option<PathBuf>,

    #[arg(
        long,
        default_value = "effective-cost",
        value_name = "FIELD",
        help = "Sort order [effective-cost, price, duration, departure]"
    )]
    sort: String,

    #[arg(long, value_name = "N", help = "Show only the N best results")]
    top: Option<usize>,

    #[arg(long, help = "Only show nonstop itineraries")]
    nonstop_only: bool,

    #[arg(long, value_name = "DOLLARS", help = "Hide itineraries priced above this")]
    max_price: Option<f64>,

    #[arg(
        long,
        value_name = "AA,DL,...",
        help = "Only show itineraries operated by these airlines (comma-separated IATA codes)"
    )]
    airlines: Option<String>,

    #[arg(long, help = "Hide itineraries priced above the profile's max budget")]
    within_budget: bool,

    #[arg(long, help = "Print the full penalty breakdown for each itinerary")]
    breakdown: bool,

    #[arg(long, help = "One-line-per-flight output (recommended for scripts)")]
    compact: bool,

    #[arg(long, help = "Output as JSON")]
    json: bool,

    #[arg(long, help = "Output as pretty-printed JSON")]
    pretty: bool,
}

#[derive(clap::Args)]
struct PrefsArgs {
    #[command(subcommand)]
    action: PrefsAction,

    #[arg(long, value_name = "FILE", help = "Preferences file (default: config dir)")]
    prefs: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum PrefsAction {
    #[command(about = "Print the active preference profile as JSON")]
    Show,
    #[command(about = "Reset the preference profile to defaults and save it")]
    Reset,
    #[command(about = "Print the path of the preferences file")]
    Path,
}

fn is_json(args: &SearchArgs) -> bool {
    args.json || args.pretty
}

fn error_code(err: &Error) -> i32 {
    match err {
        Error::InvalidAirport(_)
        | Error::InvalidDate(_)
        | Error::Validation(_)
        | Error::EmptyBatch => 2,
        Error::PrefsIo { .. } | Error::FixtureIo { .. } => 3,
        Error::PrefsParse { .. } | Error::FixtureParse { .. } => 4,
    }
}

fn error_kind(err: &Error) -> &'static str {
    match err {
        Error::InvalidAirport(_) => "invalid_airport",
        Error::InvalidDate(_) => "invalid_date",
        Error::Validation(_) => "validation_error",
        Error::EmptyBatch => "empty_batch",
        Error::PrefsIo { .. } => "prefs_io_error",
        Error::PrefsParse { .. } => "prefs_parse_error",
        Error::FixtureIo { .. } => "fixture_io_error",
        Error::FixtureParse { .. } => "fixture_parse_error",
    }
}

fn die(err: &Error, json_mode: bool) -> ! {
    if json_mode {
        let json = serde_json::json!({
            "error": {
                "kind": error_kind(err),
                "message": err.to_string(),
            }
        });
        println!("{}", serde_json::to_string(&json).unwrap());
    } else {
        eprintln!("error: {err}");
    }
    process::exit(error_code(err));
}

fn validate_airport(code: &str) -> Result<(), Error> {
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(Error::InvalidAirport(code.to_string()));
    }
    Ok(())
}

fn parse_date(date: &str) -> Result<Date, Error> {
    Date::from_str(date).map_err(|_| Error::InvalidDate(date.to_string()))
}

fn build_search_params(args: &SearchArgs) -> Result<SearchParams, Error> {
    let from = args
        .from
        .as_ref()
        .ok_or_else(|| Error::Validation("--from is required (or use --input)".into()))?
        .to_uppercase();
    let to = args
        .to
        .as_ref()
        .ok_or_else(|| Error::Validation("--to is required (or use --input)".into()))?
        .to_uppercase();
    let date = args
        .date
        .as_ref()
        .ok_or_else(|| Error::Validation("--date is required (or use --input)".into()))?;

    validate_airport(&from)?;
    validate_airport(&to)?;
    let date = parse_date(date)?;

    Ok(SearchParams { origin: from, destination: to, date })
}

fn load_fixture(path: &PathBuf) -> Result<Vec<FlightItinerary>, Error> {
    let raw = std::fs::read_to_string(path).map_err(|e| Error::FixtureIo {
        path: path.display().to_string(),
        detail: e.to_string(),
    })?;
    serde_json::from_str(&raw).map_err(|e| Error::FixtureParse {
        path: path.display().to_string(),
        detail: e.to_string(),
    })
}

fn apply_filters(results: &mut Vec<ScoredFlight>, args: &SearchArgs, preferences: &Preferences) {
    let airline_filter: Option<Vec<String>> = args
        .airlines
        .as_ref()
        .map(|s| s.split(',').map(|a| a.trim().to_uppercase()).collect());
    let budget = if args.within_budget {
        preferences.max_budget
    } else {
        None
    };

    results.retain(|r| {
        if args.nonstop_only && r.flight.stops > 0 {
            return false;
        }
        if let Some(max) = args.max_price {
            if r.flight.price > max {
                return false;
            }
        }
        if let Some(max) = budget {
            if r.flight.price > max {
                return false;
            }
        }
        if let Some(ref allowed) = airline_filter {
            let operated = r
                .flight
                .segments
                .iter()
                .all(|s| allowed.contains(&s.airline.to_uppercase()));
            if !operated {
                return false;
            }
        }
        true
    });
}

fn month_abbr(m: i8) -> &'static str {
    match m {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "???",
    }
}

fn print_compact(results: &[ScoredFlight]) {
    for scored in results {
        let flight = &scored.flight;

        let route: Vec<&str> = std::iter::once(
            flight
                .segments
                .first()
                .map(|s| s.from_airport.as_str())
                .unwrap_or("?"),
        )
        .chain(flight.segments.iter().map(|s| s.to_airport.as_str()))
        .collect();
        let route_str = route.join(">");

        let total = flight.total_duration_minutes;
        let duration = format!("{}h{:02}m", total / 60, total % 60);

        let stops = if flight.segments.len() <= 1 {
            "nonstop".to_string()
        } else {
            let n = flight.segments.len() - 1;
            let codes: Vec<&str> = flight.segments[..n]
                .iter()
                .map(|s| s.to_airport.as_str())
                .collect();
            format!("{n} stop {}", codes.join(","))
        };

        let airlines: Vec<&str> = flight.segments.iter().map(|s| s.airline.as_str()).collect();

        let time_str = match (flight.segments.first(), flight.segments.last()) {
            (Some(d), Some(a)) => format!(
                "{}{:02} {:02}:{:02}>{:02}:{:02}",
                month_abbr(d.departure.month()),
                d.departure.day(),
                d.departure.hour(),
                d.departure.minute(),
                a.arrival.hour(),
                a.arrival.minute(),
            ),
            _ => "—".to_string(),
        };

        let jet_lag = match &scored.jet_lag {
            Some(detail) => format!("jl {}/100", detail.overall_score),
            None => "jl —".to_string(),
        };

        println!(
            "eff {} | {} | {route_str} | {duration} | {stops} | {} | {time_str} | {jet_lag}",
            table::format_money(scored.effective_cost as f64),
            table::format_money(flight.price),
            airlines.join(","),
        );
    }
}

fn print_breakdown(results: &[ScoredFlight]) {
    for scored in results {
        let p = &scored.penalties;
        println!(
            "{} {} → {}  price {}  effective {}",
            scored.flight.id,
            scored.flight.from_airport,
            scored.flight.to_airport,
            table::format_money(scored.flight.price),
            table::format_money(scored.effective_cost as f64),
        );
        println!("  airport        {:>8}", table::format_money(p.airport));
        println!("  airline        {:>8}", table::format_money(p.airline));
        println!("  cabin class    {:>8}", table::format_money(p.cabin_class));
        println!("  stops          {:>8}", table::format_money(p.stops));
        println!("  aircraft       {:>8}", table::format_money(p.aircraft));
        println!("  departure time {:>8}", table::format_money(p.departure_time));
        println!("  travel time    {:>8}", table::format_money(p.travel_time));
        println!("  jet lag        {:>8}", table::format_money(p.jet_lag));
        println!("  total          {:>8}", table::format_money(scored.total_penalty as f64));
        if let Some(detail) = &scored.jet_lag {
            println!(
                "  jet lag detail: {:+.1}h {} | arrival score {} | aircraft bonus {} | red-eye {} | overall {}/100",
                detail.timezone_delta,
                detail.direction.label(),
                detail.arrival_time_score,
                detail.aircraft_bonus,
                detail.red_eye_penalty,
                detail.overall_score,
            );
        }
        println!();
    }
}

fn print_result(results: &[ScoredFlight], args: &SearchArgs) {
    if results.is_empty() && !is_json(args) {
        println!("No flights found.");
        return;
    }
    if args.breakdown {
        print_breakdown(results);
    } else if args.compact {
        print_compact(results);
    } else if is_json(args) {
        let output = if args.pretty {
            serde_json::to_string_pretty(results).unwrap()
        } else {
            serde_json::to_string(results).unwrap()
        };
        println!("{output}");
    } else {
        println!("{}", table::render(results));
    }
}

fn prefs_path(explicit: &Option<PathBuf>) -> PathBuf {
    explicit.clone().unwrap_or_else(prefs::default_path)
}

fn run_search(args: SearchArgs) {
    let json_mode = is_json(&args);

    let preferences = match prefs::load(&prefs_path(&args.prefs)) {
        Ok(p) => p,
        Err(e) => die(&e, json_mode),
    };

    let flights = match &args.input {
        Some(path) => match load_fixture(path) {
            Ok(flights) => flights,
            Err(e) => die(&e, json_mode),
        },
        None => {
            let params = match build_search_params(&args) {
                Ok(p) => p,
                Err(e) => die(&e, json_mode),
            };
            fareweight::mock::generate(&params)
        }
    };

    if flights.is_empty() {
        if json_mode {
            println!("[]");
        } else {
            println!("No flights found.");
        }
        return;
    }

    let sort = match SortField::from_str_loose(&args.sort) {
        Ok(s) => s,
        Err(e) => die(&e, json_mode),
    };

    let mut results = match scorer::score_flights(&flights, &preferences) {
        Ok(r) => r,
        Err(e) => die(&e, json_mode),
    };

    apply_filters(&mut results, &args, &preferences);
    scorer::sort_results(&mut results, sort);
    if let Some(n) = args.top {
        results.truncate(n);
    }

    print_result(&results, &args);
}

fn run_prefs(args: PrefsArgs) {
    let path = prefs_path(&args.prefs);
    match args.action {
        PrefsAction::Show => match prefs::load(&path) {
            Ok(p) => println!("{}", serde_json::to_string_pretty(&p).unwrap()),
            Err(e) => die(&e, false),
        },
        PrefsAction::Reset => {
            let defaults = Preferences::default();
            if let Err(e) = prefs::save(&path, &defaults) {
                die(&e, false);
            }
            println!("Preferences reset to defaults: {}", path.display());
        }
        PrefsAction::Path => println!("{}", path.display()),
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search(args) => run_search(args),
        Commands::Prefs(args) => run_prefs(args),
    }
}
