use std::path::Path;

use anyhow::{Context, Result};
use continent_chart::data::model::Record;
use continent_chart::style::WORLD;

/// (continent, saturation users, midpoint year, growth rate)
const CONTINENTS: [(&str, f64, f64, f64); 5] = [
    ("Africa", 700.0e6, 2017.0, 0.28),
    ("Asia", 2_900.0e6, 2012.0, 0.30),
    ("Europe", 680.0e6, 2005.0, 0.35),
    ("North America", 340.0e6, 2002.0, 0.38),
    ("South America", 380.0e6, 2010.0, 0.33),
];

const FIRST_YEAR: i32 = 1995;
const LAST_YEAR: i32 = 2020;

/// Logistic adoption curve.
fn users(year: i32, ceiling: f64, midpoint: f64, rate: f64) -> i64 {
    let t = f64::from(year) - midpoint;
    (ceiling / (1.0 + (-rate * t).exp())).round() as i64
}

/// All continents for every year, then the world total for that year.
fn sample_records() -> Vec<Record> {
    let mut records = Vec::new();
    for year in FIRST_YEAR..=LAST_YEAR {
        let mut total = 0;
        for &(name, ceiling, midpoint, rate) in &CONTINENTS {
            let value = users(year, ceiling, midpoint, rate);
            total += value;
            records.push(Record::new(name, year, value));
        }
        records.push(Record::new(WORLD, year, total));
    }
    records
}

fn main() -> Result<()> {
    env_logger::init();

    let output_path = Path::new("data.csv");
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;

    let records = sample_records();
    for record in &records {
        writer.serialize(record).context("writing record")?;
    }
    writer.flush().context("flushing output")?;

    log::info!("Wrote {} records to {}", records.len(), output_path.display());
    println!(
        "Wrote {} records ({} continents + {WORLD}, {FIRST_YEAR}-{LAST_YEAR}) to {}",
        records.len(),
        CONTINENTS.len(),
        output_path.display()
    );
    Ok(())
}
