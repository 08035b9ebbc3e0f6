use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use crate::model::ScoredFlight;
use crate::refdata;

pub fn format_money(amount: f64) -> String {
    let rounded = amount.round() as i64;
    if rounded < 0 {
        format!("-${}", -rounded)
    } else {
        format!("${rounded}")
    }
}

fn airline_names(scored: &ScoredFlight) -> String {
    let mut names: Vec<String> = Vec::new();
    for seg in &scored.flight.segments {
        let name = refdata::airline(&seg.airline)
            .map(|a| a.name.to_string())
            .unwrap_or_else(|| seg.airline.clone());
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names.join(", ")
}

fn route(scored: &ScoredFlight) -> String {
    scored
        .flight
        .segments
        .iter()
        .map(|s| format!("{} → {}", s.from_airport, s.to_airport))
        .collect::<Vec<_>>()
        .join("\n")
}

fn duration(scored: &ScoredFlight) -> String {
    let total = scored.flight.total_duration_minutes;
    format!("{}h {:02}m", total / 60, total % 60)
}

fn stops(scored: &ScoredFlight) -> String {
    let segments = &scored.flight.segments;
    if segments.len() <= 1 {
        return "Nonstop".to_string();
    }
    let stopovers: Vec<&str> = segments[..segments.len() - 1]
        .iter()
        .map(|s| s.to_airport.as_str())
        .collect();
    format!("{} ({})", segments.len() - 1, stopovers.join(", "))
}

fn cabins(scored: &ScoredFlight) -> String {
    let mut labels: Vec<&str> = Vec::new();
    for seg in &scored.flight.segments {
        let label = seg.cabin.label();
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    labels.join(", ")
}

fn jet_lag(scored: &ScoredFlight) -> String {
    match &scored.jet_lag {
        Some(detail) => format!("{}/100 {}", detail.overall_score, detail.direction.label()),
        None => "—".to_string(),
    }
}

pub fn render(results: &[ScoredFlight]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Airlines", "Route", "Depart", "Arrive", "Duration", "Stops", "Cabin", "Price",
            "Penalty", "Effective", "Jet Lag",
        ]);

    for scored in results {
        let depart = scored
            .flight
            .segments
            .first()
            .map(|s| s.departure.to_string())
            .unwrap_or_else(|| "—".to_string());
        let arrive = scored
            .flight
            .segments
            .last()
            .map(|s| s.arrival.to_string())
            .unwrap_or_else(|| "—".to_string());

        table.add_row(vec![
            airline_names(scored),
            route(scored),
            depart,
            arrive,
            duration(scored),
            stops(scored),
            cabins(scored),
            format_money(scored.flight.price),
            format_money(scored.total_penalty as f64),
            format_money(scored.effective_cost as f64),
            jet_lag(scored),
        ]);
    }

    table.to_string()
}
