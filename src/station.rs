//! Monitoring stations and their scored readings

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::WqiCategory;
use crate::parameters::WaterParameters;

/// A monitoring station with its current WQI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    /// Station name, also the key into [`StationDataset::parameters`]
    pub station: String,
    /// Water body or place name
    pub location: String,
    /// State or region
    pub state: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Composite WQI, rounded to one decimal
    pub wqi: f64,
}

impl StationRecord {
    /// Category of the station WQI
    #[must_use]
    pub fn category(&self) -> WqiCategory {
        WqiCategory::from_wqi(self.wqi)
    }
}

/// Stations in input order plus the readings each WQI was computed from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StationDataset {
    /// Stations in input order
    pub stations: Vec<StationRecord>,
    /// Complete readings keyed by station name
    pub parameters: BTreeMap<String, WaterParameters>,
}

/// Aggregate WQI of all stations in one state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateSummary {
    /// State name
    pub state: String,
    /// Number of stations in the state
    pub count: usize,
    /// Unrounded mean of the station WQI values
    pub average_wqi: f64,
}

impl StateSummary {
    /// Category of the average WQI
    #[must_use]
    pub fn category(&self) -> WqiCategory {
        WqiCategory::from_wqi(self.average_wqi)
    }
}

impl StationDataset {
    /// Empty dataset
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stations, duplicates included
    #[must_use]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether there are no stations
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Add a station; readings for an existing station name are replaced
    pub fn push(&mut self, record: StationRecord, params: WaterParameters) {
        self.parameters.insert(record.station.clone(), params);
        self.stations.push(record);
    }

    /// Readings stored for a station
    #[must_use]
    pub fn parameters_for(&self, station: &str) -> Option<&WaterParameters> {
        self.parameters.get(station)
    }

    /// Re-score every station from its stored readings
    ///
    /// Stations without stored readings keep their current value.
    pub fn recompute_wqi(&mut self) {
        for record in &mut self.stations {
            if let Some(params) = self.parameters.get(&record.station) {
                record.wqi = params.wqi();
            }
        }
    }

    /// Per-state station count and mean WQI, ordered by state name
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn state_summaries(&self) -> Vec<StateSummary> {
        let mut totals: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
        for record in &self.stations {
            let entry = totals.entry(record.state.as_str()).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += record.wqi;
        }

        totals
            .into_iter()
            .map(|(state, (count, total))| StateSummary {
                state: state.to_string(),
                count,
                average_wqi: total / count as f64,
            })
            .collect()
    }
}
