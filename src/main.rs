use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cafescout::{
    filter, Cafe, Client, Coordinate, Session, DEFAULT_ENDPOINT, DEFAULT_LAT, DEFAULT_LON,
    DEFAULT_RADIUS_M,
};

#[derive(Debug, Parser)]
struct Cli {
    /// Overpass interpreter to query
    #[arg(long, env = "OVERPASS_URL", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// List cafes around a point
    Near {
        #[arg(long, default_value_t = DEFAULT_LAT)]
        lat: f64,
        #[arg(long, default_value_t = DEFAULT_LON)]
        lon: f64,
        /// Search radius in meters
        #[arg(long, default_value_t = DEFAULT_RADIUS_M)]
        radius: u32,
        /// Keep only cafes whose name or address contains this
        #[arg(long, default_value = "")]
        search: String,
        /// Keep only cafes rated at least this
        #[arg(long, default_value_t = 0.0)]
        min_rating: f64,
        #[arg(long)]
        json: bool,
    },
    /// Look up a single cafe by OSM id
    Show {
        id: u64,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cafescout=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let client = Client::new(&cli.endpoint);

    match cli.command {
        Command::Near {
            lat,
            lon,
            radius,
            search,
            min_rating,
            json,
        } => {
            let mut session = Session::new();
            let ticket = session.begin();
            let cafes = client
                .nearby(lat, lon, radius)
                .context("Failed to fetch nearby cafes")?;
            session.adopt(ticket, filter::apply(cafes, &search, min_rating));

            let cafes = session.cafes();
            if json {
                println!("{}", serde_json::to_string_pretty(cafes)?);
            } else {
                let here = Coordinate { lat, lng: lon };
                println!("{} cafes found", cafes.len());
                if !cafes.is_empty() {
                    println!("{}", cafes.iter().map(|x| line(x, &here)).join("\n"));
                }
            }
        }
        Command::Show { id, json } => match client.by_id(id).context("Failed to fetch cafe")? {
            Some(cafe) if json => println!("{}", serde_json::to_string_pretty(&cafe)?),
            Some(cafe) => print!("{}", card(&cafe)),
            None => println!("Cafe not found."),
        },
    }

    Ok(())
}

fn line(cafe: &Cafe, here: &Coordinate) -> String {
    format!(
        "{}  {} ({} reviews)  {}  {:.0}m  {}",
        cafe.name,
        cafe.rating,
        cafe.reviews,
        if cafe.is_open { "open" } else { "closed" },
        cafe.coordinates.distance_m(here),
        cafe.address,
    )
}

fn card(cafe: &Cafe) -> String {
    format!(
        "{}\n{} ({} reviews)  {}\n{}\n{}\n{}, {}\n",
        cafe.name,
        cafe.rating,
        cafe.reviews,
        if cafe.is_open { "open" } else { "closed" },
        cafe.address,
        cafe.description,
        cafe.coordinates.lat,
        cafe.coordinates.lng,
    )
}
