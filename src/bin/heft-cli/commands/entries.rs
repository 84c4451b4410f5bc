// ABOUTME: Entry commands - add, list, delete, and summary statistics
// ABOUTME: Validates input, converts units, and renders engine output

use anyhow::Result;
use chrono::Local;
use heft::constants::{ROLLING_WINDOW_DAYS, TREND_WINDOW_ENTRIES};
use heft::database::Database;
use heft::formatters::{format_latest, format_optional_weight, format_weight, ABSENT_VALUE};
use heft::intelligence::{rolling_average, trend_slope, TrendDirection, WeightSample, WeightSummary};
use heft::models::parse_date;
use heft::units::to_kilograms;
use heft::validation::validate_weight;
use serde_json::json;
use tracing::info;

/// Record a new entry. The weight is interpreted in the configured display
/// unit, validated, and converted to canonical kilograms before storage.
pub(super) async fn add(
    database: &Database,
    weight: f64,
    date: Option<String>,
    note: Option<String>,
) -> Result<()> {
    let unit = database.unit_system().await?;
    validate_weight(weight, unit)?;
    let weight_kg = to_kilograms(weight, unit);

    let date = match date {
        Some(raw) => parse_date(&raw)?,
        None => Local::now().date_naive(),
    };

    let id = database.add_weight(date, weight_kg, note.as_deref()).await?;
    info!(id, %date, weight_kg, "entry recorded");
    println!("Recorded {} on {} (id {id})", format_weight(weight_kg, unit), date);
    Ok(())
}

/// Print entries newest-first, optionally limited
pub(super) async fn list(database: &Database, limit: Option<usize>) -> Result<()> {
    let unit = database.unit_system().await?;
    let entries = database.list_weights().await?;

    if entries.is_empty() {
        println!("No entries recorded yet.");
        return Ok(());
    }

    let shown = limit.unwrap_or(entries.len());
    for entry in entries.iter().take(shown) {
        let note = entry
            .note
            .as_deref()
            .map_or_else(String::new, |n| format!("  ({n})"));
        println!(
            "{:>4}  {}  {}{note}",
            entry.id,
            entry.date,
            format_weight(entry.weight_kg, unit)
        );
    }
    Ok(())
}

/// Delete one entry by id
pub(super) async fn delete(database: &Database, id: i64) -> Result<()> {
    if database.delete_weight(id).await? {
        info!(id, "entry deleted");
        println!("Deleted entry {id}");
        Ok(())
    } else {
        Err(heft::errors::AppError::not_found(format!("entry {id}")).into())
    }
}

/// Render the summary card: latest value, all-time average, 7-day rolling
/// average, and trend direction.
pub(super) async fn stats(database: &Database, json: bool) -> Result<()> {
    let unit = database.unit_system().await?;
    let entries = database.list_weights().await?;

    let weights: Vec<f64> = entries.iter().map(|e| e.weight_kg).collect();
    let samples: Vec<WeightSample> = entries.iter().map(WeightSample::from).collect();

    let summary = WeightSummary::from_weights(&weights);
    let today = Local::now().date_naive();
    let rolling = rolling_average(&samples, ROLLING_WINDOW_DAYS, today);
    let slope = trend_slope(&samples, TREND_WINDOW_ENTRIES);
    let direction = TrendDirection::from_slope(slope);

    if json {
        let payload = json!({
            "unit": unit,
            "count": summary.count,
            "latest_kg": entries.first().map(|e| e.weight_kg),
            "latest_date": entries.first().map(|e| e.date),
            "average_kg": summary.average(),
            "min_kg": summary.min,
            "max_kg": summary.max,
            "rolling_average_kg": rolling,
            "trend_slope": slope,
            "trend": direction,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let latest = entries
        .first()
        .map_or_else(|| ABSENT_VALUE.to_owned(), |e| format_latest(e, unit));
    println!("Latest:        {latest}");
    println!("Entries:       {}", summary.count);
    println!("Average:       {}", format_optional_weight(summary.average(), unit));
    println!("7-day average: {}", format_optional_weight(rolling, unit));
    println!("Trend:         {}", direction.symbol());
    Ok(())
}
