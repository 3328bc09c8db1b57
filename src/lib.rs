//! Water Quality Index
//!
//! This crate scores water chemistry readings with a simplified NSF-style
//! Water Quality Index:
//! - nine per-parameter sub-indices on a 0..100 scale
//! - a weighted composite rounded to one decimal
//! - a qualitative category with display colors
//!
//! It also ingests station readings from CSV and aggregates WQI per state.
//!
//! # Example
//!
//! ```rust
//! use water_quality_index::{calculate_wqi, wqi_category, PartialWaterParameters, WqiCategory};
//!
//! let readings = PartialWaterParameters::new()
//!     .with_dissolved_oxygen(7.2)
//!     .with_ph(7.8);
//! let wqi = calculate_wqi(&readings);
//!
//! assert_eq!(wqi, 79.8);
//! assert_eq!(wqi_category(wqi), WqiCategory::Fair);
//! println!("WQI: {wqi} ({})", wqi_category(wqi));
//! ```

pub mod category;
pub mod error;
pub mod index;
pub mod ingest;
pub mod parameters;
pub mod sample;
pub mod station;
pub mod sub_index;

pub use category::{WqiCategory, wqi_category, wqi_color, wqi_text_color};
pub use error::{Result, WqiError};
pub use index::{WqiAssessment, assess, calculate_wqi};
pub use ingest::{parse_stations, read_stations};
pub use parameters::{Parameter, PartialWaterParameters, WaterParameters};
pub use station::{StateSummary, StationDataset, StationRecord};
pub use sub_index::SubIndices;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_surface() {
        let wqi = calculate_wqi(&PartialWaterParameters::new());
        assert_eq!(wqi, 80.4);
        assert_eq!(wqi_category(wqi).label(), "Good");
        assert_eq!(wqi_color(wqi), "#34d399");
        assert_eq!(wqi_text_color(wqi), "#000000");
    }

    #[test]
    fn test_category_shared_across_sources() {
        // Computed, stored and hand-entered values classify identically
        let computed = assess(&PartialWaterParameters::new()).category;
        let stored = StationRecord {
            station: "S".into(),
            location: "L".into(),
            state: "X".into(),
            latitude: 0.0,
            longitude: 0.0,
            wqi: 80.4,
        }
        .category();
        assert_eq!(computed, stored);
        assert_eq!(computed, wqi_category(80.4));
    }

    #[test]
    fn test_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StationDataset>();
        assert_send_sync::<WqiAssessment>();
        assert_send_sync::<WqiError>();
    }
}
