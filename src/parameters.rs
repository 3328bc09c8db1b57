//! Water chemistry parameters
//!
//! [`WaterParameters`] is the fully populated record every sub-index formula
//! runs on. [`PartialWaterParameters`] is what callers usually have: any
//! subset of readings, merged over [`WaterParameters::default`] before
//! scoring.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Dissolved oxygen default in mg/L
pub const DEFAULT_DISSOLVED_OXYGEN: f64 = 7.5;
/// pH default
pub const DEFAULT_PH: f64 = 7.2;
/// Biochemical oxygen demand default in mg/L
pub const DEFAULT_BOD: f64 = 2.5;
/// Nitrate default in mg/L
pub const DEFAULT_NITRATES: f64 = 15.0;
/// Conductivity default in μS/cm
pub const DEFAULT_CONDUCTIVITY: f64 = 350.0;
/// Fecal coliform default in MPN/100ml
pub const DEFAULT_COLIFORM: f64 = 500.0;
/// Water temperature default in °C
pub const DEFAULT_TEMPERATURE: f64 = 25.0;
/// Turbidity default in NTU
pub const DEFAULT_TURBIDITY: f64 = 10.0;
/// Total phosphates default in mg/L
pub const DEFAULT_PHOSPHATES: f64 = 0.5;

/// The nine parameters that make up the index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parameter {
    /// Dissolved oxygen
    #[serde(rename = "do")]
    DissolvedOxygen,
    /// pH
    Ph,
    /// Biochemical oxygen demand
    Bod,
    /// Nitrates
    Nitrates,
    /// Electrical conductivity
    Conductivity,
    /// Fecal coliform
    Coliform,
    /// Water temperature
    Temperature,
    /// Turbidity
    Turbidity,
    /// Phosphates
    Phosphates,
}

impl Parameter {
    /// All parameters, in aggregation order
    pub const ALL: [Self; 9] = [
        Self::DissolvedOxygen,
        Self::Ph,
        Self::Bod,
        Self::Nitrates,
        Self::Conductivity,
        Self::Coliform,
        Self::Temperature,
        Self::Turbidity,
        Self::Phosphates,
    ];

    /// Short key used in serialized records and CSV headers
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::DissolvedOxygen => "do",
            Self::Ph => "ph",
            Self::Bod => "bod",
            Self::Nitrates => "nitrates",
            Self::Conductivity => "conductivity",
            Self::Coliform => "coliform",
            Self::Temperature => "temperature",
            Self::Turbidity => "turbidity",
            Self::Phosphates => "phosphates",
        }
    }

    /// Human-readable name
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::DissolvedOxygen => "Dissolved Oxygen",
            Self::Ph => "pH",
            Self::Bod => "Biochemical Oxygen Demand",
            Self::Nitrates => "Nitrates",
            Self::Conductivity => "Conductivity",
            Self::Coliform => "Fecal Coliform",
            Self::Temperature => "Temperature",
            Self::Turbidity => "Turbidity",
            Self::Phosphates => "Total Phosphates",
        }
    }

    /// Measurement unit, empty for pH
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Self::DissolvedOxygen | Self::Bod | Self::Nitrates | Self::Phosphates => "mg/L",
            Self::Ph => "",
            Self::Conductivity => "μS/cm",
            Self::Coliform => "MPN/100ml",
            Self::Temperature => "°C",
            Self::Turbidity => "NTU",
        }
    }

    /// NSF-style weight of this parameter in the composite index
    #[must_use]
    pub fn weight(self) -> f64 {
        match self {
            Self::DissolvedOxygen => 0.17,
            Self::Ph | Self::Bod => 0.11,
            Self::Nitrates | Self::Temperature => 0.10,
            Self::Conductivity | Self::Turbidity => 0.08,
            Self::Coliform => 0.16,
            Self::Phosphates => 0.09,
        }
    }

    /// Value substituted when a reading is missing
    #[must_use]
    pub fn default_value(self) -> f64 {
        match self {
            Self::DissolvedOxygen => DEFAULT_DISSOLVED_OXYGEN,
            Self::Ph => DEFAULT_PH,
            Self::Bod => DEFAULT_BOD,
            Self::Nitrates => DEFAULT_NITRATES,
            Self::Conductivity => DEFAULT_CONDUCTIVITY,
            Self::Coliform => DEFAULT_COLIFORM,
            Self::Temperature => DEFAULT_TEMPERATURE,
            Self::Turbidity => DEFAULT_TURBIDITY,
            Self::Phosphates => DEFAULT_PHOSPHATES,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A complete set of water chemistry readings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterParameters {
    /// Dissolved oxygen in mg/L
    #[serde(rename = "do")]
    pub dissolved_oxygen: f64,
    /// pH, 0..14
    pub ph: f64,
    /// Biochemical oxygen demand in mg/L
    pub bod: f64,
    /// Nitrate concentration in mg/L
    pub nitrates: f64,
    /// Electrical conductivity in μS/cm
    pub conductivity: f64,
    /// Fecal coliform count in MPN/100ml
    pub coliform: f64,
    /// Water temperature in °C
    pub temperature: f64,
    /// Turbidity in NTU
    pub turbidity: f64,
    /// Total phosphate concentration in mg/L
    pub phosphates: f64,
}

impl Default for WaterParameters {
    fn default() -> Self {
        Self {
            dissolved_oxygen: DEFAULT_DISSOLVED_OXYGEN,
            ph: DEFAULT_PH,
            bod: DEFAULT_BOD,
            nitrates: DEFAULT_NITRATES,
            conductivity: DEFAULT_CONDUCTIVITY,
            coliform: DEFAULT_COLIFORM,
            temperature: DEFAULT_TEMPERATURE,
            turbidity: DEFAULT_TURBIDITY,
            phosphates: DEFAULT_PHOSPHATES,
        }
    }
}

impl WaterParameters {
    /// Reading for a single parameter
    #[must_use]
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::DissolvedOxygen => self.dissolved_oxygen,
            Parameter::Ph => self.ph,
            Parameter::Bod => self.bod,
            Parameter::Nitrates => self.nitrates,
            Parameter::Conductivity => self.conductivity,
            Parameter::Coliform => self.coliform,
            Parameter::Temperature => self.temperature,
            Parameter::Turbidity => self.turbidity,
            Parameter::Phosphates => self.phosphates,
        }
    }
}

/// Any subset of water chemistry readings
///
/// `None` and NaN values both fall back to the parameter default when merged.
///
/// ```rust
/// use water_quality_index::PartialWaterParameters;
///
/// let params = PartialWaterParameters::new().with_ph(7.8).with_dissolved_oxygen(7.2);
/// let merged = params.merge();
/// assert_eq!(merged.ph, 7.8);
/// assert_eq!(merged.bod, 2.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialWaterParameters {
    /// Dissolved oxygen in mg/L
    #[serde(rename = "do")]
    pub dissolved_oxygen: Option<f64>,
    /// pH, 0..14
    pub ph: Option<f64>,
    /// Biochemical oxygen demand in mg/L
    pub bod: Option<f64>,
    /// Nitrate concentration in mg/L
    pub nitrates: Option<f64>,
    /// Electrical conductivity in μS/cm
    pub conductivity: Option<f64>,
    /// Fecal coliform count in MPN/100ml
    pub coliform: Option<f64>,
    /// Water temperature in °C
    pub temperature: Option<f64>,
    /// Turbidity in NTU
    pub turbidity: Option<f64>,
    /// Total phosphate concentration in mg/L
    pub phosphates: Option<f64>,
}

impl PartialWaterParameters {
    /// No readings; merges to the defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Supplied reading for a parameter, if any
    #[must_use]
    pub fn get(&self, parameter: Parameter) -> Option<f64> {
        match parameter {
            Parameter::DissolvedOxygen => self.dissolved_oxygen,
            Parameter::Ph => self.ph,
            Parameter::Bod => self.bod,
            Parameter::Nitrates => self.nitrates,
            Parameter::Conductivity => self.conductivity,
            Parameter::Coliform => self.coliform,
            Parameter::Temperature => self.temperature,
            Parameter::Turbidity => self.turbidity,
            Parameter::Phosphates => self.phosphates,
        }
    }

    /// Set or clear the reading for a parameter
    pub fn set(&mut self, parameter: Parameter, value: Option<f64>) {
        let slot = match parameter {
            Parameter::DissolvedOxygen => &mut self.dissolved_oxygen,
            Parameter::Ph => &mut self.ph,
            Parameter::Bod => &mut self.bod,
            Parameter::Nitrates => &mut self.nitrates,
            Parameter::Conductivity => &mut self.conductivity,
            Parameter::Coliform => &mut self.coliform,
            Parameter::Temperature => &mut self.temperature,
            Parameter::Turbidity => &mut self.turbidity,
            Parameter::Phosphates => &mut self.phosphates,
        };
        *slot = value;
    }

    /// Builder form of [`set`](Self::set) with a supplied value
    #[must_use]
    pub fn with(mut self, parameter: Parameter, value: f64) -> Self {
        self.set(parameter, Some(value));
        self
    }

    /// Set dissolved oxygen (mg/L)
    #[must_use]
    pub fn with_dissolved_oxygen(self, value: f64) -> Self {
        self.with(Parameter::DissolvedOxygen, value)
    }

    /// Set pH
    #[must_use]
    pub fn with_ph(self, value: f64) -> Self {
        self.with(Parameter::Ph, value)
    }

    /// Set BOD (mg/L)
    #[must_use]
    pub fn with_bod(self, value: f64) -> Self {
        self.with(Parameter::Bod, value)
    }

    /// Set nitrates (mg/L)
    #[must_use]
    pub fn with_nitrates(self, value: f64) -> Self {
        self.with(Parameter::Nitrates, value)
    }

    /// Set conductivity (μS/cm)
    #[must_use]
    pub fn with_conductivity(self, value: f64) -> Self {
        self.with(Parameter::Conductivity, value)
    }

    /// Set fecal coliform (MPN/100ml)
    #[must_use]
    pub fn with_coliform(self, value: f64) -> Self {
        self.with(Parameter::Coliform, value)
    }

    /// Set temperature (°C)
    #[must_use]
    pub fn with_temperature(self, value: f64) -> Self {
        self.with(Parameter::Temperature, value)
    }

    /// Set turbidity (NTU)
    #[must_use]
    pub fn with_turbidity(self, value: f64) -> Self {
        self.with(Parameter::Turbidity, value)
    }

    /// Set phosphates (mg/L)
    #[must_use]
    pub fn with_phosphates(self, value: f64) -> Self {
        self.with(Parameter::Phosphates, value)
    }

    /// Merge supplied readings over the defaults
    #[must_use]
    pub fn merge(&self) -> WaterParameters {
        self.merge_over(&WaterParameters::default())
    }

    /// Merge supplied readings over an arbitrary base record
    ///
    /// A supplied value wins unless it is NaN.
    #[must_use]
    pub fn merge_over(&self, base: &WaterParameters) -> WaterParameters {
        let pick = |parameter: Parameter| match self.get(parameter) {
            Some(value) if !value.is_nan() => value,
            _ => base.get(parameter),
        };

        WaterParameters {
            dissolved_oxygen: pick(Parameter::DissolvedOxygen),
            ph: pick(Parameter::Ph),
            bod: pick(Parameter::Bod),
            nitrates: pick(Parameter::Nitrates),
            conductivity: pick(Parameter::Conductivity),
            coliform: pick(Parameter::Coliform),
            temperature: pick(Parameter::Temperature),
            turbidity: pick(Parameter::Turbidity),
            phosphates: pick(Parameter::Phosphates),
        }
    }
}

impl From<WaterParameters> for PartialWaterParameters {
    fn from(params: WaterParameters) -> Self {
        Self {
            dissolved_oxygen: Some(params.dissolved_oxygen),
            ph: Some(params.ph),
            bod: Some(params.bod),
            nitrates: Some(params.nitrates),
            conductivity: Some(params.conductivity),
            coliform: Some(params.coliform),
            temperature: Some(params.temperature),
            turbidity: Some(params.turbidity),
            phosphates: Some(params.phosphates),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn empty_merge_yields_defaults() {
        let merged = PartialWaterParameters::new().merge();
        assert_eq!(merged, WaterParameters::default());
        assert_eq!(merged.dissolved_oxygen, 7.5);
        assert_eq!(merged.ph, 7.2);
        assert_eq!(merged.bod, 2.5);
        assert_eq!(merged.nitrates, 15.0);
        assert_eq!(merged.conductivity, 350.0);
        assert_eq!(merged.coliform, 500.0);
        assert_eq!(merged.temperature, 25.0);
        assert_eq!(merged.turbidity, 10.0);
        assert_eq!(merged.phosphates, 0.5);
    }

    #[test]
    fn supplied_values_win() {
        let merged = PartialWaterParameters::new()
            .with_dissolved_oxygen(7.2)
            .with_ph(7.8)
            .merge();
        assert_eq!(merged.dissolved_oxygen, 7.2);
        assert_eq!(merged.ph, 7.8);
        assert_eq!(merged.temperature, DEFAULT_TEMPERATURE);
    }

    #[test]
    fn nan_falls_back_to_default() {
        let merged = PartialWaterParameters::new()
            .with_coliform(f64::NAN)
            .with_turbidity(0.0)
            .merge();
        assert_eq!(merged.coliform, DEFAULT_COLIFORM);
        assert_eq!(merged.turbidity, 0.0);
    }

    #[test]
    fn infinite_values_are_honored() {
        let merged = PartialWaterParameters::new()
            .with_bod(f64::INFINITY)
            .merge();
        assert_eq!(merged.bod, f64::INFINITY);
    }

    #[test]
    fn weights_sum_to_one() {
        let total: f64 = Parameter::ALL.iter().map(|p| p.weight()).sum();
        assert!((total - 1.0).abs() < 1e-9, "total weight {total}");
    }

    #[rstest]
    #[case(Parameter::DissolvedOxygen, "do", "mg/L")]
    #[case(Parameter::Ph, "ph", "")]
    #[case(Parameter::Conductivity, "conductivity", "μS/cm")]
    #[case(Parameter::Coliform, "coliform", "MPN/100ml")]
    #[case(Parameter::Temperature, "temperature", "°C")]
    #[case(Parameter::Turbidity, "turbidity", "NTU")]
    fn parameter_metadata(#[case] parameter: Parameter, #[case] key: &str, #[case] unit: &str) {
        assert_eq!(parameter.key(), key);
        assert_eq!(parameter.to_string(), key);
        assert_eq!(parameter.unit(), unit);
    }

    #[test]
    fn set_and_get_every_parameter() {
        let mut partial = PartialWaterParameters::new();
        for (i, parameter) in Parameter::ALL.into_iter().enumerate() {
            partial.set(parameter, Some(i as f64));
        }
        let merged = partial.merge();
        for (i, parameter) in Parameter::ALL.into_iter().enumerate() {
            assert_eq!(partial.get(parameter), Some(i as f64));
            assert_eq!(merged.get(parameter), i as f64);
        }

        partial.set(Parameter::Ph, None);
        assert_eq!(partial.merge().ph, DEFAULT_PH);
    }

    #[test]
    fn deserialize_partial_json() {
        let partial: PartialWaterParameters =
            serde_json::from_str(r#"{"do": 6.1, "ph": 8.0}"#).unwrap();
        assert_eq!(partial.dissolved_oxygen, Some(6.1));
        assert_eq!(partial.ph, Some(8.0));
        assert_eq!(partial.bod, None);
    }

    #[test]
    fn serialize_uses_short_keys() {
        let json = serde_json::to_value(WaterParameters::default()).unwrap();
        assert_eq!(json["do"], 7.5);
        assert_eq!(json["phosphates"], 0.5);
        assert!(json.get("dissolved_oxygen").is_none());
    }

    #[test]
    fn full_record_round_trips_through_partial() {
        let full = WaterParameters {
            ph: 6.4,
            ..WaterParameters::default()
        };
        assert_eq!(PartialWaterParameters::from(full).merge(), full);
    }
}
