//! Built-in sample stations
//!
//! The same three stations are available as CSV text ([`SAMPLE_CSV`], e.g. as
//! a template for users preparing their own upload) and as a ready-made
//! dataset ([`sample_dataset`]).

use crate::parameters::WaterParameters;
use crate::station::{StationDataset, StationRecord};

/// Sample upload with every supported column
pub const SAMPLE_CSV: &str = "\
station,location,state,latitude,longitude,do,ph,bod,nitrates,coliform,conductivity,temperature,turbidity,phosphates
Sample Station 1,Ganga River,Uttar Pradesh,28.6139,77.209,7.2,7.8,2.5,15,500,350,25,10,0.5
Sample Station 2,Yamuna River,Delhi,19.076,72.8777,6.8,7.6,2.8,18,600,380,26,12,0.6
Sample Station 3,Cauvery River,Karnataka,12.9716,77.5946,6.5,7.5,3.0,20,700,400,27,15,0.7
";

struct SampleStation {
    station: &'static str,
    location: &'static str,
    state: &'static str,
    latitude: f64,
    longitude: f64,
    params: WaterParameters,
}

const SAMPLE_STATIONS: [SampleStation; 3] = [
    SampleStation {
        station: "Sample Station 1",
        location: "Ganga River",
        state: "Uttar Pradesh",
        latitude: 28.6139,
        longitude: 77.209,
        params: WaterParameters {
            dissolved_oxygen: 7.2,
            ph: 7.8,
            bod: 2.5,
            nitrates: 15.0,
            conductivity: 350.0,
            coliform: 500.0,
            temperature: 25.0,
            turbidity: 10.0,
            phosphates: 0.5,
        },
    },
    SampleStation {
        station: "Sample Station 2",
        location: "Yamuna River",
        state: "Delhi",
        latitude: 19.076,
        longitude: 72.8777,
        params: WaterParameters {
            dissolved_oxygen: 6.8,
            ph: 7.6,
            bod: 2.8,
            nitrates: 18.0,
            conductivity: 380.0,
            coliform: 600.0,
            temperature: 26.0,
            turbidity: 12.0,
            phosphates: 0.6,
        },
    },
    SampleStation {
        station: "Sample Station 3",
        location: "Cauvery River",
        state: "Karnataka",
        latitude: 12.9716,
        longitude: 77.5946,
        params: WaterParameters {
            dissolved_oxygen: 6.5,
            ph: 7.5,
            bod: 3.0,
            nitrates: 20.0,
            conductivity: 400.0,
            coliform: 700.0,
            temperature: 27.0,
            turbidity: 15.0,
            phosphates: 0.7,
        },
    },
];

/// The sample stations, each scored by the engine
#[must_use]
pub fn sample_dataset() -> StationDataset {
    let mut dataset = StationDataset::new();
    for sample in &SAMPLE_STATIONS {
        let record = StationRecord {
            station: sample.station.to_string(),
            location: sample.location.to_string(),
            state: sample.state.to_string(),
            latitude: sample.latitude,
            longitude: sample.longitude,
            wqi: sample.params.wqi(),
        };
        dataset.push(record, sample.params);
    }
    dataset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::WqiCategory;
    use crate::ingest::parse_stations;
    use insta::{assert_debug_snapshot, assert_snapshot};

    #[test]
    fn csv_matches_dataset() {
        assert_eq!(parse_stations(SAMPLE_CSV).unwrap(), sample_dataset());
    }

    #[test]
    fn sample_scores() {
        let dataset = sample_dataset();
        let scores: Vec<f64> = dataset.stations.iter().map(|s| s.wqi).collect();
        assert_eq!(scores, [79.8, 77.6, 75.6]);
        assert!(
            dataset
                .stations
                .iter()
                .all(|s| s.category() == WqiCategory::Fair)
        );
    }

    #[test]
    fn state_summaries_snapshot() {
        assert_debug_snapshot!(sample_dataset().state_summaries(), @r#"
        [
            StateSummary {
                state: "Delhi",
                count: 1,
                average_wqi: 77.6,
            },
            StateSummary {
                state: "Karnataka",
                count: 1,
                average_wqi: 75.6,
            },
            StateSummary {
                state: "Uttar Pradesh",
                count: 1,
                average_wqi: 79.8,
            },
        ]
        "#);
    }

    #[test]
    fn station_json_snapshot() {
        let dataset = sample_dataset();
        let json = serde_json::to_string_pretty(&dataset.stations[0]).unwrap();
        assert_snapshot!(json, @r#"
        {
          "station": "Sample Station 1",
          "location": "Ganga River",
          "state": "Uttar Pradesh",
          "latitude": 28.6139,
          "longitude": 77.209,
          "wqi": 79.8
        }
        "#);
    }
}
