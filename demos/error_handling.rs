//! Error Handling Example for Water Quality Index
//!
//! This example demonstrates how ingestion errors surface and how the scoring
//! engine treats out-of-domain readings without failing.
//!
//! Run with: RUST_LOG=warn cargo run --example error_handling

use water_quality_index::{PartialWaterParameters, WqiError, calculate_wqi, parse_stations};

/// Statistics for error tracking
#[derive(Debug, Default)]
struct IngestStats {
    total_attempts: u32,
    successful_ingests: u32,
    stations_ingested: usize,
    empty_errors: u32,
    missing_column_errors: u32,
    no_valid_row_errors: u32,
    other_errors: u32,
}

impl IngestStats {
    fn record_success(&mut self, stations: usize) {
        self.total_attempts += 1;
        self.successful_ingests += 1;
        self.stations_ingested += stations;
    }

    fn record_error(&mut self, error: &WqiError) {
        self.total_attempts += 1;
        match error {
            WqiError::Empty => self.empty_errors += 1,
            WqiError::MissingColumns(_) => self.missing_column_errors += 1,
            WqiError::NoValidRows => self.no_valid_row_errors += 1,
            WqiError::Io(_) | WqiError::Csv(_) => self.other_errors += 1,
        }
    }

    fn print(&self) {
        println!("\n📊 Ingestion Statistics");
        println!("=======================");
        println!("Total attempts: {}", self.total_attempts);
        println!("Successful: {}", self.successful_ingests);
        println!("Stations ingested: {}", self.stations_ingested);
        println!("\nError Breakdown:");
        println!("  Empty input: {}", self.empty_errors);
        println!("  Missing columns: {}", self.missing_column_errors);
        println!("  No valid rows: {}", self.no_valid_row_errors);
        println!("  Other errors: {}", self.other_errors);
    }
}

fn main() {
    env_logger::init();

    println!("⚠️  Water Quality Index - Error Handling Example");
    println!("================================================\n");

    let mut stats = IngestStats::default();

    let cases = [
        ("Valid upload", "station,do,ph\nRiver A,7.1,7.4\n"),
        ("Empty file", ""),
        ("Header only", "station,do,ph\n"),
        ("Missing pH column", "station,do,temp\nRiver A,7.1,22\n"),
        ("Every row broken", "station,do,ph\n,7.1,7.4\nRiver B,6.0\n"),
        (
            "Mixed quality rows",
            "station;do;ph;bod\nRiver C;6.9;7.2;n/a\nRiver D;7.0\nRiver E;8 mg/L;7.9;1.2\n",
        ),
    ];

    for (description, csv) in cases {
        println!("🧪 {description}");
        match parse_stations(csv) {
            Ok(dataset) => {
                stats.record_success(dataset.len());
                for record in &dataset.stations {
                    println!("    ✅ {}: WQI {} ({})", record.station, record.wqi, record.category());
                }
            }
            Err(e) => {
                println!("    ❌ {e}");
                stats.record_error(&e);
            }
        }
    }

    stats.print();

    println!("\n🧮 Out-of-domain readings are scored, never rejected");
    println!("====================================================");

    let readings = [
        ("NaN pH falls back to default", PartialWaterParameters::new().with_ph(f64::NAN)),
        ("Zero coliform", PartialWaterParameters::new().with_coliform(0.0)),
        ("Negative oxygen", PartialWaterParameters::new().with_dissolved_oxygen(-3.0)),
        ("Freezing water", PartialWaterParameters::new().with_temperature(1.0)),
    ];

    for (description, params) in readings {
        println!("  {description:<30} WQI {}", calculate_wqi(&params));
    }
}
