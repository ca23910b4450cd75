use anyhow::{Context, Result};
use clap::Parser;

use portnav::piers::PierTable;
use portnav::units::DEFAULT_TUG_SPEED_KNOTS;
use portnav::{geo, transit};

#[derive(Parser, Debug)]
#[command(name = "portnav")]
#[command(about = "Compute the great-circle distance and travel time between two positions or piers.", long_about = None)]
struct Cli {
    /// Start position as "lat,lng" in degrees, or a pier id when --piers is given
    #[arg(short, long)]
    from: String,

    /// Destination, same format as --from
    #[arg(short, long)]
    to: String,

    /// Speed in knots
    #[arg(short, long, default_value_t = DEFAULT_TUG_SPEED_KNOTS)]
    speed: f64,

    /// Pier table CSV (id,lat,lng). When given, --from/--to are pier ids.
    #[arg(short, long)]
    piers: Option<String>,
}

fn parse_latlng(s: &str) -> Result<(f64, f64)> {
    let (lat, lng) = s
        .split_once(',')
        .with_context(|| format!("expected \"lat,lng\", got {:?}", s))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .with_context(|| format!("bad latitude {:?}", lat))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .with_context(|| format!("bad longitude {:?}", lng))?;
    Ok((lat, lng))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (from, to) = if let Some(path) = &cli.piers {
        let table = PierTable::from_csv_path(path)?;
        let from: u32 = cli
            .from
            .parse()
            .with_context(|| format!("bad pier id {:?}", &cli.from))?;
        let to: u32 = cli
            .to
            .parse()
            .with_context(|| format!("bad pier id {:?}", &cli.to))?;
        (table.latlng(from)?, table.latlng(to)?)
    } else {
        (parse_latlng(&cli.from)?, parse_latlng(&cli.to)?)
    };

    let dist = geo::great_circle_distance_km(from.1, from.0, to.1, to.0);
    let hours = transit::travel_time_hours(dist, cli.speed);

    println!("Distance: {:.3} km", dist);
    println!("Time at {} kn: {:.3} h", cli.speed, hours);
    if let Ok(duration) = transit::travel_time(dist, cli.speed) {
        println!("          ({} s)", duration.as_secs());
    }

    Ok(())
}
