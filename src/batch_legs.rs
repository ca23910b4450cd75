use anyhow::{Context, Result};
use clap::Parser;
use csv::{ReaderBuilder, Writer};

use portnav::units::DEFAULT_TUG_SPEED_KNOTS;
use portnav::{geo, transit};

#[derive(Parser, Debug)]
#[command(name = "legs")]
#[command(about = "Compute distance and travel time for every leg in a CSV with lng1,lat1,lng2,lat2[,speed_knots] per row.", long_about = None)]
struct Cli {
    /// Path to the .csv file
    #[arg(short, long)]
    csv: String,

    /// Speed in knots for rows without their own speed column
    #[arg(short, long, default_value_t = DEFAULT_TUG_SPEED_KNOTS)]
    speed: f64,

    /// Output CSV (distance_km, time_hours). If omitted, prints a summary to stdout.
    #[arg(short, long)]
    out: Option<String>,
}

struct Leg {
    lng1: f64,
    lat1: f64,
    lng2: f64,
    lat2: f64,
    speed: Option<f64>,
}

fn parse_legs(path: &str) -> Result<Vec<Leg>> {
    // Flexible so rows may carry or omit the trailing speed column.
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path))?;

    let mut legs = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let field = |i: usize| {
            record
                .get(i)
                .with_context(|| format!("row {:?} has too few fields", record))
        };
        legs.push(Leg {
            lng1: field(0)?.parse()?,
            lat1: field(1)?.parse()?,
            lng2: field(2)?.parse()?,
            lat2: field(3)?.parse()?,
            speed: record
                .get(4)
                .filter(|s| !s.is_empty())
                .map(|s| s.parse())
                .transpose()?,
        });
    }

    Ok(legs)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let legs = parse_legs(&cli.csv)?;
    println!("Loaded {} legs from {}", legs.len(), cli.csv);

    let mut results: Vec<(f64, f64)> = Vec::with_capacity(legs.len());
    for leg in &legs {
        let dist = geo::great_circle_distance_km(leg.lng1, leg.lat1, leg.lng2, leg.lat2);
        let speed = leg.speed.unwrap_or(cli.speed);
        results.push((dist, transit::travel_time_hours(dist, speed)));
    }

    if let Some(out_path) = cli.out {
        let mut wtr =
            Writer::from_path(&out_path).with_context(|| format!("creating CSV {}", &out_path))?;
        wtr.write_record(["distance_km", "time_hours"])?;
        for (dist, hours) in &results {
            wtr.write_record(&[format!("{:.6}", dist), format!("{:.6}", hours)])?;
        }
        wtr.flush()?;
        println!("Wrote {} legs to {}", results.len(), out_path);
    } else {
        let total_km: f64 = results.iter().map(|(d, _)| d).sum();
        let total_hours: f64 = results.iter().map(|(_, t)| t).sum();
        println!("Legs: {}", results.len());
        println!("Total distance (km): {:.3}", total_km);
        println!("Total time (h): {:.3}", total_hours);
    }

    Ok(())
}
