//! WQI categories and display colors
//!
//! Every classification of a WQI value, whether computed, predicted or entered
//! by hand, goes through [`WqiCategory::from_wqi`]. The color helpers are
//! derived from the category so they cannot drift from its thresholds.

use std::fmt;

use serde::{Deserialize, Serialize};

const EXCELLENT_MIN: f64 = 95.0;
const GOOD_MIN: f64 = 80.0;
const FAIR_MIN: f64 = 65.0;
const MARGINAL_MIN: f64 = 45.0;

const TEXT_DARK: &str = "#000000";
const TEXT_LIGHT: &str = "#ffffff";

/// Qualitative band of a WQI value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WqiCategory {
    /// WQI below 45
    Poor,
    /// WQI in 45..65
    Marginal,
    /// WQI in 65..80
    Fair,
    /// WQI in 80..95
    Good,
    /// WQI of 95 and above
    Excellent,
}

impl WqiCategory {
    /// Classify a WQI value; lower bounds are inclusive and NaN is `Poor`
    #[must_use]
    pub fn from_wqi(wqi: f64) -> Self {
        if wqi >= EXCELLENT_MIN {
            Self::Excellent
        } else if wqi >= GOOD_MIN {
            Self::Good
        } else if wqi >= FAIR_MIN {
            Self::Fair
        } else if wqi >= MARGINAL_MIN {
            Self::Marginal
        } else {
            Self::Poor
        }
    }

    /// Display name, e.g. `"Good"`
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Marginal => "Marginal",
            Self::Poor => "Poor",
        }
    }

    /// Inclusive lower WQI bound of this band
    #[must_use]
    pub fn min_wqi(self) -> f64 {
        match self {
            Self::Excellent => EXCELLENT_MIN,
            Self::Good => GOOD_MIN,
            Self::Fair => FAIR_MIN,
            Self::Marginal => MARGINAL_MIN,
            Self::Poor => 0.0,
        }
    }

    /// Marker/badge background color as a hex string
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Excellent => "#10b981",
            Self::Good => "#34d399",
            Self::Fair => "#fbbf24",
            Self::Marginal => "#f97316",
            Self::Poor => "#ef4444",
        }
    }

    /// Tailwind palette name of [`Self::color`]
    #[must_use]
    pub fn color_token(self) -> &'static str {
        match self {
            Self::Excellent => "emerald-500",
            Self::Good => "emerald-400",
            Self::Fair => "amber-400",
            Self::Marginal => "orange-500",
            Self::Poor => "red-500",
        }
    }

    /// Text color that contrasts with [`Self::color`]
    #[must_use]
    pub fn text_color(self) -> &'static str {
        if self >= Self::Fair { TEXT_DARK } else { TEXT_LIGHT }
    }
}

impl fmt::Display for WqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category label for a WQI value
#[must_use]
pub fn wqi_category(wqi: f64) -> WqiCategory {
    WqiCategory::from_wqi(wqi)
}

/// Background color for a WQI value
#[must_use]
pub fn wqi_color(wqi: f64) -> &'static str {
    WqiCategory::from_wqi(wqi).color()
}

/// Contrasting text color for a WQI value
#[must_use]
pub fn wqi_text_color(wqi: f64) -> &'static str {
    WqiCategory::from_wqi(wqi).text_color()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(100.0, WqiCategory::Excellent)]
    #[case(95.0, WqiCategory::Excellent)]
    #[case(94.9, WqiCategory::Good)]
    #[case(80.0, WqiCategory::Good)]
    #[case(79.9, WqiCategory::Fair)]
    #[case(65.0, WqiCategory::Fair)]
    #[case(64.9, WqiCategory::Marginal)]
    #[case(45.0, WqiCategory::Marginal)]
    #[case(44.9, WqiCategory::Poor)]
    #[case(0.0, WqiCategory::Poor)]
    #[case(-3.0, WqiCategory::Poor)]
    #[case(f64::NAN, WqiCategory::Poor)]
    fn category_boundaries(#[case] wqi: f64, #[case] expected: WqiCategory) {
        assert_eq!(wqi_category(wqi), expected);
    }

    #[test]
    fn just_below_excellent_is_not_marginal() {
        assert_ne!(wqi_category(94.9), WqiCategory::Marginal);
    }

    #[rstest]
    #[case(97.0, "#10b981", "#000000")]
    #[case(85.0, "#34d399", "#000000")]
    #[case(65.0, "#fbbf24", "#000000")]
    #[case(64.9, "#f97316", "#ffffff")]
    #[case(12.0, "#ef4444", "#ffffff")]
    fn colors(#[case] wqi: f64, #[case] background: &str, #[case] text: &str) {
        assert_eq!(wqi_color(wqi), background);
        assert_eq!(wqi_text_color(wqi), text);
    }

    #[test]
    fn bounds_classify_into_their_own_band() {
        for category in [
            WqiCategory::Excellent,
            WqiCategory::Good,
            WqiCategory::Fair,
            WqiCategory::Marginal,
            WqiCategory::Poor,
        ] {
            assert_eq!(WqiCategory::from_wqi(category.min_wqi()), category);
        }
    }

    #[test]
    fn display_and_tokens() {
        assert_eq!(WqiCategory::Marginal.to_string(), "Marginal");
        assert_eq!(WqiCategory::Good.color_token(), "emerald-400");
        assert_eq!(
            serde_json::to_string(&WqiCategory::Excellent).unwrap(),
            "\"Excellent\""
        );
    }
}
