//! Plan a trip from the command line
//!
//! Talks to the providers directly using the server configuration, or to a
//! running trip planner server with `--proxy`.

use anyhow::Context;
use clap::Parser;

use trip_planner::{
    config::AppConfig, models::TripRequest, providers::Providers, services::trips::TripPlanner,
    view,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Destination city
    #[arg(short, long)]
    city: String,

    /// Departure date (YYYY-MM-DD)
    #[arg(short, long)]
    departure: String,

    /// Return date (YYYY-MM-DD)
    #[arg(short, long = "return")]
    return_date: String,

    /// Base URL of a trip planner server API, e.g. http://localhost:3000/api/v1
    #[arg(long)]
    proxy: Option<String>,

    /// Print the trip record as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trip_planner=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = AppConfig::load().context("Failed to load configuration")?;

    let providers = match &args.proxy {
        Some(url) => Providers::via_proxy(url, config.providers.timeout_seconds)?,
        None => Providers::direct(&config.providers)?,
    };

    let request = TripRequest::new(args.city, args.departure, args.return_date);
    let record = TripPlanner::new(providers)
        .plan(&request)
        .await
        .context("Unable to fetch trip details")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print!("{}", view::render_text(&record));
    }

    Ok(())
}
