//! Command-line shipment lookup.
//!
//! Looks up a label through the same tracking service the web page uses,
//! without starting the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Look up a label
//! cargo run --bin track -- se-28529731
//!
//! # Prompt for the label interactively
//! cargo run --bin track
//!
//! # Include the scan history
//! cargo run --bin track -- se-28529731 --events
//!
//! # Print the provider's record as JSON
//! cargo run --bin track -- se-28529731 --json
//! ```
//!
//! # Environment Variables
//!
//! - `SHIPENGINE_API_KEY` (required): ShipEngine API key
//! - `SHIPENGINE_BASE_URL`, `SHIPENGINE_TIMEOUT_SECS` (optional)

use shipment_tracker::config;
use shipment_tracker::domain::entities::{TrackingEvent, TrackingRecord};
use shipment_tracker::infrastructure::shipengine::ShipEngineClient;
use shipment_tracker::prelude::TrackingService;

use anyhow::{Context, Result};
use chrono::DateTime;
use clap::Parser;
use colored::*;
use dialoguer::Input;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Look up a shipment's tracking status by label ID.
#[derive(Parser)]
#[command(name = "track")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Label ID to track (prompted for when omitted)
    label_id: Option<String>,

    /// Print the provider's tracking record as JSON
    #[arg(long)]
    json: bool,

    /// Also list tracking events
    #[arg(short, long)]
    events: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let client = ShipEngineClient::new(
        &config.shipengine_base_url,
        config.shipengine_api_key.clone(),
        config.shipengine_timeout(),
    )
    .context("Failed to build ShipEngine client")?;
    let service = TrackingService::new(Arc::new(client));

    let label_id = match cli.label_id {
        Some(id) => id,
        None => Input::new()
            .with_prompt("Label ID")
            .allow_empty(true)
            .interact_text()?,
    };

    let record = match service.track(&label_id).await {
        Ok(record) => record,
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), e.to_string().red());
            std::process::exit(1);
        }
    };

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&record).context("Failed to encode tracking record")?
        );
        return Ok(());
    }

    print_details(&record);

    if cli.events {
        print_events(&record.events);
    }

    Ok(())
}

/// Prints the five tracking fields.
fn print_details(record: &TrackingRecord) {
    let summary = record.summary();

    println!("{}", "📦 Tracking Details".bright_blue().bold());
    println!();
    println!("  {:<20} {}", "Tracking Number:".bold(), summary.tracking_number);
    println!("  {:<20} {}", "Status:".bold(), summary.status.green());
    println!("  {:<20} {}", "Carrier Status:".bold(), summary.carrier_status);
    println!(
        "  {:<20} {}",
        "Estimated Delivery:".bold(),
        format_timestamp(&summary.estimated_delivery)
    );
    println!(
        "  {:<20} {}",
        "Actual Delivery:".bold(),
        format_timestamp(&summary.actual_delivery)
    );
}

/// Shortens RFC 3339 timestamps to `YYYY-MM-DD HH:MM UTC`; anything else is
/// printed as reported.
fn format_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.to_utc().format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Prints the scan history in the order the provider returned it.
fn print_events(events: &[TrackingEvent]) {
    println!();

    if events.is_empty() {
        println!("{}", "No tracking events yet.".yellow());
        return;
    }

    println!("{}", "Events".bright_blue().bold());
    println!("{}", "─".repeat(80).dimmed());

    for event in events {
        let when = event
            .occurred_at
            .as_deref()
            .map(format_timestamp)
            .unwrap_or_else(|| "-".to_string());
        let what = event
            .description
            .as_deref()
            .or(event.status_description.as_deref())
            .unwrap_or("-");
        let place = [
            event.city_locality.as_deref(),
            event.state_province.as_deref(),
            event.country_code.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

        println!("  {:<22} {} {}", when.dimmed(), what, place.cyan());
    }
}
