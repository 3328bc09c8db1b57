//! Per-parameter sub-indices
//!
//! Each function maps one reading onto a 0..100 scale where 100 is the ideal
//! condition for that parameter alone.

use serde::{Deserialize, Serialize};

use crate::parameters::{Parameter, WaterParameters};

const SUB_INDEX_MAX: f64 = 100.0;

const PH_IDEAL_MIN: f64 = 7.0;
const PH_IDEAL_MAX: f64 = 8.5;
const PH_MIN: f64 = 2.0;
const PH_MAX: f64 = 12.0;

const BOD_MAX: f64 = 30.0;
const NITRATES_MAX: f64 = 100.0;
const CONDUCTIVITY_MAX: f64 = 2000.0;
const COLIFORM_MAX: f64 = 100_000.0;
const TURBIDITY_MAX: f64 = 100.0;
const PHOSPHATES_MAX: f64 = 10.0;

const TEMPERATURE_IDEAL: f64 = 20.0;
const TEMPERATURE_MIN: f64 = 10.0;
const TEMPERATURE_MAX: f64 = 30.0;
const TEMPERATURE_PENALTY_PER_DEGREE: f64 = 5.0;
const TEMPERATURE_OUT_OF_RANGE: f64 = 50.0;

/// Linear falloff from 100 at zero to 0 at `max`; anything above `max` is 0
fn linear_decline(value: f64, max: f64) -> f64 {
    if value > max {
        return 0.0;
    }
    SUB_INDEX_MAX - (value / max) * SUB_INDEX_MAX
}

/// Oxygen solubility in mg/L at `temperature` °C
#[must_use]
pub fn oxygen_solubility(temperature: f64) -> f64 {
    14.652 - 0.41022 * temperature + 0.007991 * temperature * temperature
}

/// Dissolved oxygen, scored by percent saturation
///
/// Saturation is capped at 100 and floored at 0. The solubility polynomial is
/// positive for every real temperature, so the floor only applies to negative
/// oxygen readings.
#[must_use]
pub fn dissolved_oxygen(dissolved_oxygen: f64, temperature: f64) -> f64 {
    let saturation = dissolved_oxygen / oxygen_solubility(temperature) * 100.0;
    saturation.clamp(0.0, SUB_INDEX_MAX)
}

/// pH: flat 100 in 7..=8.5, linear to 0 at pH 2 and pH 12
#[must_use]
pub fn ph(ph: f64) -> f64 {
    if !(PH_MIN..=PH_MAX).contains(&ph) {
        return 0.0;
    }
    if (PH_IDEAL_MIN..=PH_IDEAL_MAX).contains(&ph) {
        return SUB_INDEX_MAX;
    }
    if ph < PH_IDEAL_MIN {
        SUB_INDEX_MAX - (PH_IDEAL_MIN - ph) / (PH_IDEAL_MIN - PH_MIN) * SUB_INDEX_MAX
    } else {
        SUB_INDEX_MAX - (ph - PH_IDEAL_MAX) / (PH_MAX - PH_IDEAL_MAX) * SUB_INDEX_MAX
    }
}

/// BOD: linear from 100 at 0 mg/L to 0 at 30 mg/L
#[must_use]
pub fn bod(bod: f64) -> f64 {
    linear_decline(bod, BOD_MAX)
}

/// Nitrates: linear from 100 at 0 mg/L to 0 at 100 mg/L
#[must_use]
pub fn nitrates(nitrates: f64) -> f64 {
    linear_decline(nitrates, NITRATES_MAX)
}

/// Conductivity: linear from 100 at 0 μS/cm to 0 at 2000 μS/cm
#[must_use]
pub fn conductivity(conductivity: f64) -> f64 {
    linear_decline(conductivity, CONDUCTIVITY_MAX)
}

/// Fecal coliform on a log10 scale: 1 MPN/100ml scores 100, 100 000 scores 0
///
/// Counts below 1 (zero and negative included) score 100 so the logarithm is
/// never taken of a non-positive value.
#[must_use]
pub fn coliform(coliform: f64) -> f64 {
    if coliform > COLIFORM_MAX {
        return 0.0;
    }
    if coliform < 1.0 {
        return SUB_INDEX_MAX;
    }
    SUB_INDEX_MAX - (coliform.log10() / 5.0) * SUB_INDEX_MAX
}

/// Temperature: 100 at 20 °C, minus 5 per degree of deviation
///
/// Outside 10..=30 °C the score is forced to exactly 50. This is a step, not
/// a continuation of the slope: 9.9 °C scores 50 while 10.5 °C scores 52.5.
#[must_use]
pub fn temperature(temperature: f64) -> f64 {
    if temperature < TEMPERATURE_MIN || temperature > TEMPERATURE_MAX {
        return TEMPERATURE_OUT_OF_RANGE;
    }
    SUB_INDEX_MAX - (temperature - TEMPERATURE_IDEAL).abs() * TEMPERATURE_PENALTY_PER_DEGREE
}

/// Turbidity: one point lost per NTU
#[must_use]
pub fn turbidity(turbidity: f64) -> f64 {
    if turbidity > TURBIDITY_MAX {
        return 0.0;
    }
    SUB_INDEX_MAX - turbidity
}

/// Phosphates: linear from 100 at 0 mg/L to 0 at 10 mg/L
#[must_use]
pub fn phosphates(phosphates: f64) -> f64 {
    linear_decline(phosphates, PHOSPHATES_MAX)
}

/// Sub-index values for one set of readings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubIndices {
    /// Dissolved oxygen, from percent saturation
    #[serde(rename = "do")]
    pub dissolved_oxygen: f64,
    /// pH
    pub ph: f64,
    /// Biochemical oxygen demand
    pub bod: f64,
    /// Nitrates
    pub nitrates: f64,
    /// Conductivity
    pub conductivity: f64,
    /// Fecal coliform
    pub coliform: f64,
    /// Temperature
    pub temperature: f64,
    /// Turbidity
    pub turbidity: f64,
    /// Phosphates
    pub phosphates: f64,
}

impl SubIndices {
    /// Score every parameter of a complete record
    #[must_use]
    pub fn compute(params: &WaterParameters) -> Self {
        Self {
            dissolved_oxygen: dissolved_oxygen(params.dissolved_oxygen, params.temperature),
            ph: ph(params.ph),
            bod: bod(params.bod),
            nitrates: nitrates(params.nitrates),
            conductivity: conductivity(params.conductivity),
            coliform: coliform(params.coliform),
            temperature: temperature(params.temperature),
            turbidity: turbidity(params.turbidity),
            phosphates: phosphates(params.phosphates),
        }
    }

    /// Sub-index of one parameter
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

    /// `(parameter, sub-index)` pairs in aggregation order
    pub fn iter(&self) -> impl Iterator<Item = (Parameter, f64)> + '_ {
        Parameter::ALL.into_iter().map(|p| (p, self.get(p)))
    }
}
