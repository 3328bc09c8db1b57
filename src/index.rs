//! Weighted aggregation of sub-indices into the composite WQI

use serde::{Deserialize, Serialize};

use crate::category::WqiCategory;
use crate::parameters::{Parameter, PartialWaterParameters, WaterParameters};
use crate::sub_index::SubIndices;

/// Weighted mean of the sub-indices, unrounded
///
/// Divides by the total weight so the result does not drift when the weights
/// do not sum to exactly 1.0.
#[must_use]
pub fn weighted_mean(sub_indices: &SubIndices) -> f64 {
    let (weighted_sum, total_weight) = sub_indices.iter().fold(
        (0.0, 0.0),
        |(sum, total), (parameter, score)| {
            let weight = parameter.weight();
            (sum + score * weight, total + weight)
        },
    );
    weighted_sum / total_weight
}

/// Round to one decimal place, half away from zero
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compute the Water Quality Index for any subset of readings
///
/// Missing or NaN readings use the documented defaults. The result is rounded
/// to one decimal.
///
/// # Example
///
/// ```rust
/// use water_quality_index::{calculate_wqi, PartialWaterParameters};
///
/// let wqi = calculate_wqi(&PartialWaterParameters::new());
/// assert_eq!(wqi, 80.4);
/// ```
#[must_use]
pub fn calculate_wqi(params: &PartialWaterParameters) -> f64 {
    params.merge().wqi()
}

impl WaterParameters {
    /// Sub-indices of this record
    #[must_use]
    pub fn sub_indices(&self) -> SubIndices {
        SubIndices::compute(self)
    }

    /// Rounded WQI of this record
    #[must_use]
    pub fn wqi(&self) -> f64 {
        round_to_tenth(weighted_mean(&self.sub_indices()))
    }
}

/// Full result of scoring one set of readings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WqiAssessment {
    /// Readings after merging over the defaults
    pub parameters: WaterParameters,
    /// Per-parameter sub-index values
    pub sub_indices: SubIndices,
    /// Rounded WQI
    pub wqi: f64,
    /// Category of `wqi`
    pub category: WqiCategory,
}

impl WqiAssessment {
    /// Parameter with the lowest sub-index, i.e. the one dragging the score down
    #[must_use]
    pub fn limiting_parameter(&self) -> Parameter {
        self.sub_indices
            .iter()
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map_or(Parameter::DissolvedOxygen, |(parameter, _)| parameter)
    }
}

/// Score readings and keep the intermediate values
#[must_use]
pub fn assess(params: &PartialWaterParameters) -> WqiAssessment {
    let parameters = params.merge();
    let sub_indices = parameters.sub_indices();
    let wqi = round_to_tenth(weighted_mean(&sub_indices));

    WqiAssessment {
        parameters,
        sub_indices,
        wqi,
        category: WqiCategory::from_wqi(wqi),
    }
}
