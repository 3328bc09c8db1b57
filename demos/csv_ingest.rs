//! CSV Ingestion Example for Water Quality Index
//!
//! This example ingests station readings from CSV, either a file given on the
//! command line or the built-in sample, and prints per-station and per-state
//! results.
//!
//! Run with: cargo run --example csv_ingest [path/to/stations.csv]
//! Set `RUST_LOG=warn` to see skipped rows.

use std::fs::File;

use water_quality_index::{
    StationDataset, parse_stations, read_stations, sample::SAMPLE_CSV, wqi_category,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("📄 Water Quality Index - CSV Ingestion Example\n");

    let dataset = match std::env::args().nth(1) {
        Some(path) => {
            println!("Reading stations from {path}");
            read_stations(File::open(&path)?)?
        }
        None => {
            println!("No file given, using the built-in sample CSV");
            parse_stations(SAMPLE_CSV)?
        }
    };

    print_stations(&dataset);
    print_states(&dataset);

    Ok(())
}

fn print_stations(dataset: &StationDataset) {
    println!("\n📍 Stations ({})", dataset.len());
    println!("==============");

    for record in &dataset.stations {
        println!(
            "  {:<20} {:<16} {:<15} ({:>8.4}, {:>8.4})  WQI {:>5.1} {}",
            record.station,
            record.location,
            record.state,
            record.latitude,
            record.longitude,
            record.wqi,
            record.category()
        );
    }
}

fn print_states(dataset: &StationDataset) {
    println!("\n🗺️  States");
    println!("==========");

    for summary in dataset.state_summaries() {
        println!(
            "  {:<15} stations: {:>3}  avg WQI: {:>5.1} ({})",
            summary.state,
            summary.count,
            summary.average_wqi,
            wqi_category(summary.average_wqi)
        );
    }
}
