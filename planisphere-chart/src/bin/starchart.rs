//! Starchart: render planisphere chart data from the command line.
//!
//! Loads a BSC5 catalog once, builds an observer context from local
//! date/time/zone and latitude, and writes the rendered chart (star
//! positions, horizon circle, cardinal markers) to stdout. This tool
//! emits data, not pixels; feed the JSON to whatever actually draws.

use anyhow::Context;
use chrono::{NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use planisphere_catalog::Catalog;
use planisphere_chart::{render_chart, VisibilityLimits};
use planisphere_core::ObserverContext;

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Parser)]
#[command(name = "starchart")]
#[command(about = "Render planisphere star-chart data for a time and latitude")]
struct Cli {
    /// Path to the BSC5 fixed-width catalog file
    #[arg(long)]
    catalog: PathBuf,

    /// Observation date, YYYY-MM-DD (default: today, UTC)
    #[arg(long)]
    date: Option<String>,

    /// Observation time, HH:MM or HH:MM:SS (default: now, UTC)
    #[arg(long)]
    time: Option<String>,

    /// IANA time zone the date/time are given in
    #[arg(long, default_value = "UTC")]
    timezone: String,

    /// Observer latitude in degrees, [-90, 90]
    #[arg(long, allow_hyphen_values = true)]
    latitude: f64,

    /// Minimum altitude in degrees; stars below this are cut
    #[arg(long, default_value = "0.0")]
    min_altitude: f64,

    /// Maximum visual magnitude; stars fainter (numerically greater) are cut
    #[arg(long, default_value = "6.0")]
    max_magnitude: f64,

    /// Output format. `json` carries the full chart (stars, horizon
    /// polyline, cardinal markers); `csv` and `table` list stars only.
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let date = match &cli.date {
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .with_context(|| format!("invalid --date {text:?}, expected YYYY-MM-DD"))?,
        None => Utc::now().date_naive(),
    };
    let time = match &cli.time {
        Some(text) => parse_time(text)
            .with_context(|| format!("invalid --time {text:?}, expected HH:MM or HH:MM:SS"))?,
        None => Utc::now().time(),
    };
    let zone: Tz = cli
        .timezone
        .parse()
        .map_err(|e: chrono_tz::ParseError| anyhow::anyhow!(e))
        .with_context(|| format!("unknown time zone {:?}", cli.timezone))?;

    let observer = ObserverContext::from_local(date, time, zone, cli.latitude)?;
    let catalog = Catalog::load(&cli.catalog)?;
    let limits = VisibilityLimits {
        min_altitude_deg: cli.min_altitude,
        max_magnitude: cli.max_magnitude,
    };

    let chart = render_chart(&catalog, &observer, &limits);

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&chart)?),
        OutputFormat::Csv => {
            println!("hr,name,x,y,size,opacity,vmag");
            for star in &chart.stars {
                println!(
                    "{},{},{:.6},{:.6},{:.3},{:.4},{:.2}",
                    star.hr.map_or(String::new(), |hr| hr.to_string()),
                    star.name,
                    star.x,
                    star.y,
                    star.size,
                    star.opacity,
                    star.vmag
                );
            }
        }
        OutputFormat::Table => {
            println!(
                "Chart for {} UTC, latitude {:.2}°: {} stars visible",
                observer.utc().format("%Y-%m-%d %H:%M:%S"),
                observer.latitude_deg(),
                chart.stars.len()
            );
            println!(
                "{:>6}  {:<12} {:>9} {:>9} {:>8} {:>8} {:>6}",
                "HR", "Name", "x", "y", "size", "opacity", "Vmag"
            );
            for star in &chart.stars {
                println!(
                    "{:>6}  {:<12} {:>9.4} {:>9.4} {:>8.2} {:>8.3} {:>6.2}",
                    star.hr.map_or(String::new(), |hr| hr.to_string()),
                    star.name,
                    star.x,
                    star.y,
                    star.size,
                    star.opacity,
                    star.vmag
                );
            }
        }
    }

    Ok(())
}

fn parse_time(text: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(text, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
}
