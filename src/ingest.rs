//! CSV ingestion of user station data
//!
//! Column names are matched case-insensitively against a list of aliases per
//! standard column. Only `station`, `do` and `ph` are required; every other
//! numeric column falls back to its default when absent, empty or unparsable.
//!
//! # Example
//!
//! ```rust
//! use water_quality_index::ingest::parse_stations;
//!
//! let csv = "name;dissolved_oxygen;ph_value\nRiver Gauge;8.1;7.4\n";
//! let dataset = parse_stations(csv).unwrap();
//! assert_eq!(dataset.stations[0].station, "River Gauge");
//! assert_eq!(dataset.stations[0].state, "Unknown");
//! ```

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info, warn};

use crate::error::{Result, WqiError};
use crate::parameters::{Parameter, PartialWaterParameters};
use crate::station::{StationDataset, StationRecord};

/// Latitude used when a row has none (geographic center of India)
pub const DEFAULT_LATITUDE: f64 = 20.5937;
/// Longitude used when a row has none
pub const DEFAULT_LONGITUDE: f64 = 78.9629;
/// State used when a row has none
pub const DEFAULT_STATE: &str = "Unknown";

const STATION_ALIASES: &[&str] = &["station", "station_name", "station_id", "name", "id"];
const LOCATION_ALIASES: &[&str] = &["location", "loc", "place", "water_body", "river", "lake"];
const STATE_ALIASES: &[&str] = &["state", "province", "region", "area"];
const LATITUDE_ALIASES: &[&str] = &["latitude", "lat", "y"];
const LONGITUDE_ALIASES: &[&str] = &["longitude", "long", "lon", "lng", "x"];

/// Header aliases accepted for a water parameter
#[must_use]
pub fn parameter_aliases(parameter: Parameter) -> &'static [&'static str] {
    match parameter {
        Parameter::DissolvedOxygen => &["do", "dissolved_oxygen", "oxygen"],
        Parameter::Ph => &["ph", "ph_value"],
        Parameter::Bod => &["bod", "biochemical_oxygen_demand"],
        Parameter::Nitrates => &["nitrates", "nitrate", "no3", "nitrogen"],
        Parameter::Conductivity => &["conductivity", "cond", "ec"],
        Parameter::Coliform => &["coliform", "fecal_coliform", "bacteria"],
        Parameter::Temperature => &["temperature", "temp", "water_temperature"],
        Parameter::Turbidity => &["turbidity", "turb", "clarity"],
        Parameter::Phosphates => &["phosphates", "phosphate", "po4", "phosphorus"],
    }
}

/// Header positions of the standard columns
#[derive(Debug, Clone, PartialEq)]
struct ColumnMap {
    station: usize,
    location: Option<usize>,
    state: Option<usize>,
    latitude: Option<usize>,
    longitude: Option<usize>,
    readings: [Option<usize>; 9],
}

impl ColumnMap {
    fn resolve(header: &[String]) -> Result<Self> {
        let find = |aliases: &[&str]| {
            aliases
                .iter()
                .find_map(|alias| header.iter().position(|h| h == alias))
        };

        let station = find(STATION_ALIASES);
        let readings = Parameter::ALL.map(|p| find(parameter_aliases(p)));

        let mut missing = Vec::new();
        if station.is_none() {
            missing.push("station");
        }
        for parameter in [Parameter::DissolvedOxygen, Parameter::Ph] {
            if readings[parameter as usize].is_none() {
                missing.push(parameter.key());
            }
        }

        match station {
            Some(station) if missing.is_empty() => Ok(Self {
                station,
                location: find(LOCATION_ALIASES),
                state: find(STATE_ALIASES),
                latitude: find(LATITUDE_ALIASES),
                longitude: find(LONGITUDE_ALIASES),
                readings,
            }),
            _ => Err(WqiError::missing_columns(missing)),
        }
    }
}

/// Trim whitespace and one layer of surrounding quotes
fn clean_field(field: &str) -> &str {
    let field = field.trim();
    let field = field
        .strip_prefix(['"', '\''])
        .unwrap_or(field);
    field.strip_suffix(['"', '\'']).unwrap_or(field)
}

/// Parse the longest numeric prefix of `value`, ignoring trailing text
///
/// `"7.2 mg/L"` parses as 7.2; `"n/a"` and `""` yield `None`. A signed or
/// unsigned `Infinity` prefix parses as the matching infinity.
#[must_use]
pub fn parse_leading_f64(value: &str) -> Option<f64> {
    let s = value.trim_start();
    let bytes = s.as_bytes();
    let is_digit = |i: usize| bytes.get(i).is_some_and(u8::is_ascii_digit);

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with("Infinity") {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    let int_start = end;
    while is_digit(end) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let mut frac_end = end + 1;
        while is_digit(frac_end) {
            frac_end += 1;
        }
        let frac_digits = frac_end - end - 1;
        if digits + frac_digits > 0 {
            digits += frac_digits;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_start = exp_end;
        while is_digit(exp_end) {
            exp_end += 1;
        }
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// Delimiter of the header line: comma if present, otherwise semicolon
fn detect_delimiter(header_line: &str) -> u8 {
    if header_line.contains(',') { b',' } else { b';' }
}

/// Read station rows from any reader
///
/// # Errors
///
/// * `WqiError::Io` - The reader failed or the input is not UTF-8
/// * see [`parse_stations`] for the remaining variants
pub fn read_stations<R: Read>(mut reader: R) -> Result<StationDataset> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_stations(&text)
}

/// Parse station rows from CSV text and score each one
///
/// # Errors
///
/// * `WqiError::Empty` - No header row or no data row
/// * `WqiError::MissingColumns` - `station`, `do` or `ph` column is absent
/// * `WqiError::NoValidRows` - Every data row was skipped
/// * `WqiError::Csv` - The CSV reader failed
pub fn parse_stations(text: &str) -> Result<StationDataset> {
    // 1-based line numbers of the non-blank lines, for diagnostics
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| (i + 1, line))
        .collect();
    let header_line = match lines.as_slice() {
        [] | [_] => return Err(WqiError::Empty),
        [(_, header_line), ..] => *header_line,
    };

    // One physical line per record: quotes are stripped per field rather
    // than honored, so a stray quote cannot swallow the following rows.
    let body = lines
        .iter()
        .map(|(_, line)| *line)
        .collect::<Vec<_>>()
        .join("\n");
    let mut reader = ReaderBuilder::new()
        .delimiter(detect_delimiter(header_line))
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(body.as_bytes());

    let header: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| clean_field(h).to_lowercase())
        .collect();
    let columns = ColumnMap::resolve(&header)?;
    debug!("Resolved CSV columns {columns:?} from header {header:?}");

    let mut dataset = StationDataset::new();
    for (result, &(line, _)) in reader.records().zip(&lines[1..]) {
        let record = result?;

        if record.iter().all(|field| clean_field(field).is_empty()) {
            continue;
        }
        if record.len() != header.len() {
            warn!(
                "Skipping line {line}: column count mismatch (expected {}, got {})",
                header.len(),
                record.len()
            );
            continue;
        }

        match parse_row(&record, &columns) {
            Some((station, params)) => dataset.push(station, params.merge()),
            None => warn!("Skipping line {line}: missing station name"),
        }
    }

    if dataset.is_empty() {
        return Err(WqiError::NoValidRows);
    }

    info!("Ingested {} stations from CSV", dataset.len());
    Ok(dataset)
}

/// Build one station from a row; `None` when the station name is empty
fn parse_row(
    record: &StringRecord,
    columns: &ColumnMap,
) -> Option<(StationRecord, PartialWaterParameters)> {
    let text = |column: Option<usize>| {
        column
            .and_then(|i| record.get(i))
            .map(clean_field)
            .filter(|value| !value.is_empty())
    };
    let number = |column: Option<usize>| text(column).and_then(parse_leading_f64);

    let station = text(Some(columns.station))?.to_string();

    let mut params = PartialWaterParameters::new();
    for (parameter, column) in Parameter::ALL.into_iter().zip(columns.readings) {
        params.set(parameter, number(column));
    }

    let record = StationRecord {
        location: text(columns.location).unwrap_or(&station).to_string(),
        state: text(columns.state).unwrap_or(DEFAULT_STATE).to_string(),
        latitude: number(columns.latitude).unwrap_or(DEFAULT_LATITUDE),
        longitude: number(columns.longitude).unwrap_or(DEFAULT_LONGITUDE),
        wqi: params.merge().wqi(),
        station,
    };

    Some((record, params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::WaterParameters;
    use rstest::rstest;

    #[rstest]
    #[case("7.2", Some(7.2))]
    #[case("  7.2 mg/L", Some(7.2))]
    #[case("-3", Some(-3.0))]
    #[case("+.5", Some(0.5))]
    #[case("7.", Some(7.0))]
    #[case("1e3", Some(1000.0))]
    #[case("2e", Some(2.0))]
    #[case("1.5E-1x", Some(0.15))]
    #[case("", None)]
    #[case("n/a", None)]
    #[case(".", None)]
    #[case("-", None)]
    #[case("Infinity", Some(f64::INFINITY))]
    #[case("+Infinity mg/L", Some(f64::INFINITY))]
    #[case("-Infinity x", Some(f64::NEG_INFINITY))]
    #[case("inf", None)]
    #[case("NaN", None)]
    fn leading_float(#[case] input: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_leading_f64(input), expected);
    }

    #[rstest]
    #[case("\"Ganga\"", "Ganga")]
    #[case("'Ganga'", "Ganga")]
    #[case("  Ganga ", "Ganga")]
    #[case("\"", "")]
    fn field_cleanup(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(clean_field(input), expected);
    }

    #[test]
    fn parses_full_rows() {
        let csv = "station,location,state,latitude,longitude,do,ph,bod,nitrates,coliform,conductivity,temperature,turbidity,phosphates\n\
                   S1,Ganga River,Uttar Pradesh,28.6139,77.209,7.2,7.8,2.5,15,500,350,25,10,0.5\n";
        let dataset = parse_stations(csv).unwrap();

        assert_eq!(dataset.len(), 1);
        let station = &dataset.stations[0];
        assert_eq!(station.station, "S1");
        assert_eq!(station.location, "Ganga River");
        assert_eq!(station.state, "Uttar Pradesh");
        assert_eq!(station.latitude, 28.6139);
        assert_eq!(station.longitude, 77.209);
        assert_eq!(station.wqi, 79.8);
        assert_eq!(dataset.parameters_for("S1").unwrap().coliform, 500.0);
    }

    #[test]
    fn aliases_semicolons_and_fallbacks() {
        let csv = "Station_Name; Oxygen; PH_VALUE; Temp; River\r\n\
                   Lake Gauge; 8.0; 7.5; ; \r\n";
        let dataset = parse_stations(csv).unwrap();

        let station = &dataset.stations[0];
        assert_eq!(station.station, "Lake Gauge");
        assert_eq!(station.location, "Lake Gauge");
        assert_eq!(station.state, DEFAULT_STATE);
        assert_eq!(station.latitude, DEFAULT_LATITUDE);
        assert_eq!(station.longitude, DEFAULT_LONGITUDE);

        let params = dataset.parameters_for("Lake Gauge").unwrap();
        assert_eq!(params.dissolved_oxygen, 8.0);
        assert_eq!(params.ph, 7.5);
        assert_eq!(params.temperature, 25.0);
        assert_eq!(
            station.wqi,
            WaterParameters {
                dissolved_oxygen: 8.0,
                ph: 7.5,
                ..WaterParameters::default()
            }
            .wqi()
        );
    }

    #[test]
    fn unparsable_numbers_use_defaults() {
        let csv = "id,do,ph,bod\nX,abc,7.0,n/a\n";
        let dataset = parse_stations(csv).unwrap();
        let params = dataset.parameters_for("X").unwrap();
        assert_eq!(params.dissolved_oxygen, 7.5);
        assert_eq!(params.bod, 2.5);
        assert_eq!(params.ph, 7.0);
    }

    #[test]
    fn skips_bad_rows() {
        let csv = "station,do,ph\n\
                   A,7.0,7.1\n\
                   B,7.0\n\
                   ,6.0,7.0\n\
                   \n\
                   C,6.5,7.3\n";
        let dataset = parse_stations(csv).unwrap();
        let names: Vec<_> = dataset.stations.iter().map(|s| s.station.as_str()).collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn quoted_fields() {
        let csv = "\"station\",location,do,ph\n\"Gauge North\",'Yamuna',\"7.0\",7.2\n";
        let dataset = parse_stations(csv).unwrap();
        assert_eq!(dataset.stations[0].station, "Gauge North");
        assert_eq!(dataset.stations[0].location, "Yamuna");
        assert_eq!(dataset.parameters_for("Gauge North").unwrap().dissolved_oxygen, 7.0);
    }

    #[test]
    fn stray_quote_stays_on_its_line() {
        let csv = "station,do,ph\n\"A,7.0,7.2\nB,6.5,7.3\nC,6.0,7.0\n";
        let dataset = parse_stations(csv).unwrap();
        let names: Vec<_> = dataset.stations.iter().map(|s| s.station.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(dataset.parameters_for("A").unwrap().ph, 7.2);
    }

    #[rstest]
    #[case("   \nstation,do,ph\nA,7.0,7.2\n")]
    #[case("\n\t\n\nstation,do,ph\n\nA,7.0,7.2\n")]
    #[case(" \r\nstation;do;ph\r\nA;7.0;7.2\r\n")]
    fn blank_lines_before_header(#[case] csv: &str) {
        let dataset = parse_stations(csv).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.stations[0].station, "A");
        assert_eq!(dataset.parameters_for("A").unwrap().dissolved_oxygen, 7.0);
    }

    #[test]
    fn missing_required_columns() {
        let err = parse_stations("location,temp\nGanga,20\n").unwrap_err();
        match err {
            WqiError::MissingColumns(columns) => assert_eq!(columns, ["station", "do", "ph"]),
            other => panic!("Expected MissingColumns, got {other:?}"),
        }

        let err = parse_stations("station,do\nA,7\n").unwrap_err();
        assert_eq!(err.to_string(), "Missing required columns: ph");
    }

    #[rstest]
    #[case("")]
    #[case("   \n\n")]
    #[case("station,do,ph\n")]
    #[case("station,do,ph\n  \n")]
    fn empty_inputs(#[case] csv: &str) {
        assert!(matches!(parse_stations(csv), Err(WqiError::Empty)));
    }

    #[test]
    fn no_valid_rows() {
        let err = parse_stations("station,do,ph\n,7,7\nA,7\n").unwrap_err();
        assert!(matches!(err, WqiError::NoValidRows));
    }

    #[test]
    fn read_from_reader() {
        let csv = b"station,do,ph\nA,7.5,7.2\n";
        let dataset = read_stations(&csv[..]).unwrap();
        assert_eq!(dataset.stations[0].wqi, 80.4);
    }

    #[test]
    fn read_rejects_invalid_utf8() {
        let bytes: &[u8] = &[0xFF, 0xFE, 0x00];
        assert!(matches!(read_stations(bytes), Err(WqiError::Io(_))));
    }
}
