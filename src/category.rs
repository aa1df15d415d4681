// ABOUTME: BMI category bands with display name, color, and recommendation per band
// ABOUTME: Implements threshold classification over the WHO band table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Evaluator Contributors

use crate::constants::thresholds;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// BMI classification band
///
/// Six ordered categories derived from the WHO BMI thresholds. Each band
/// carries fixed display attributes (name and hex color, used by the website
/// frontend) and a fixed recommendation message. All attributes are
/// compile-time constants and never change at runtime.
///
/// Bands are half-open intervals with exclusive upper bounds, evaluated in
/// ascending order:
///
/// | BMI (kg/m²)  | Category      |
/// |--------------|---------------|
/// | < 18.5       | `Underweight` |
/// | < 25.0       | `Normal`      |
/// | < 30.0       | `Overweight`  |
/// | < 35.0       | `ObeseClassI` |
/// | < 40.0       | `ObeseClassII`|
/// | ≥ 40.0       | `ObeseClassIII`|
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25.0)
    Normal,
    /// BMI in [25.0, 30.0)
    Overweight,
    /// BMI in [30.0, 35.0)
    ObeseClassI,
    /// BMI in [35.0, 40.0)
    #[serde(rename = "obese_class_ii")]
    ObeseClassII,
    /// BMI of 40.0 or above
    #[serde(rename = "obese_class_iii")]
    ObeseClassIII,
}

impl BmiCategory {
    /// Classify a computed BMI into its band
    ///
    /// Upper bounds are exclusive: a BMI of exactly 18.5 is `Normal`, 25.0 is
    /// `Overweight`, and 40.0 is `ObeseClassIII`.
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < thresholds::UNDERWEIGHT_MAX_BMI {
            Self::Underweight
        } else if bmi < thresholds::NORMAL_MAX_BMI {
            Self::Normal
        } else if bmi < thresholds::OVERWEIGHT_MAX_BMI {
            Self::Overweight
        } else if bmi < thresholds::OBESE_CLASS_I_MAX_BMI {
            Self::ObeseClassI
        } else if bmi < thresholds::OBESE_CLASS_II_MAX_BMI {
            Self::ObeseClassII
        } else {
            Self::ObeseClassIII
        }
    }

    /// Display name shown to users
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::ObeseClassI => "Obesity Class I",
            Self::ObeseClassII => "Obesity Class II",
            Self::ObeseClassIII => "Obesity Class III",
        }
    }

    /// Hex display color used by the website frontend
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Underweight => "#3498db",
            Self::Normal => "#2d8659",
            Self::Overweight => "#f39c12",
            Self::ObeseClassI => "#e67e22",
            Self::ObeseClassII => "#d35400",
            Self::ObeseClassIII => "#c0392b",
        }
    }

    /// Fixed recommendation message for this band
    ///
    /// All three obesity classes share one message.
    #[must_use]
    pub const fn recommendation(&self) -> &'static str {
        match self {
            Self::Underweight => "consult a nutritionist for healthy weight gain",
            Self::Normal => "keep maintaining your healthy weight",
            Self::Overweight => "consider regular physical activity",
            Self::ObeseClassI | Self::ObeseClassII | Self::ObeseClassIII => {
                "seek professional guidance urgently"
            }
        }
    }

    /// Machine-readable tag, matching the serde representation
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::ObeseClassI => "obese_class_i",
            Self::ObeseClassII => "obese_class_ii",
            Self::ObeseClassIII => "obese_class_iii",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BmiCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "underweight" => Ok(Self::Underweight),
            "normal" | "normal_weight" => Ok(Self::Normal),
            "overweight" => Ok(Self::Overweight),
            "obese_class_i" => Ok(Self::ObeseClassI),
            "obese_class_ii" => Ok(Self::ObeseClassII),
            "obese_class_iii" => Ok(Self::ObeseClassIII),
            other => Err(AppError::invalid_input(format!(
                "Unknown BMI category: '{other}'. Valid options: underweight, normal, overweight, obese_class_i, obese_class_ii, obese_class_iii"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_bands() {
        assert_eq!(BmiCategory::from_bmi(16.0), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(22.0), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(27.5), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(32.0), BmiCategory::ObeseClassI);
        assert_eq!(BmiCategory::from_bmi(37.0), BmiCategory::ObeseClassII);
        assert_eq!(BmiCategory::from_bmi(45.0), BmiCategory::ObeseClassIII);
    }

    #[test]
    fn test_band_upper_bounds_are_exclusive() {
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::ObeseClassI);
        assert_eq!(BmiCategory::from_bmi(35.0), BmiCategory::ObeseClassII);
        assert_eq!(BmiCategory::from_bmi(40.0), BmiCategory::ObeseClassIII);
    }

    #[test]
    fn test_display_attributes() {
        assert_eq!(BmiCategory::Underweight.name(), "Underweight");
        assert_eq!(BmiCategory::Underweight.color(), "#3498db");
        assert_eq!(BmiCategory::Normal.name(), "Normal weight");
        assert_eq!(BmiCategory::Normal.color(), "#2d8659");
        assert_eq!(BmiCategory::ObeseClassIII.name(), "Obesity Class III");
        assert_eq!(BmiCategory::ObeseClassIII.color(), "#c0392b");
    }

    #[test]
    fn test_obesity_classes_share_recommendation() {
        let message = BmiCategory::ObeseClassI.recommendation();
        assert_eq!(BmiCategory::ObeseClassII.recommendation(), message);
        assert_eq!(BmiCategory::ObeseClassIII.recommendation(), message);
        assert_eq!(message, "seek professional guidance urgently");
    }

    #[test]
    fn test_from_str_round_trips_tags() {
        for category in [
            BmiCategory::Underweight,
            BmiCategory::Normal,
            BmiCategory::Overweight,
            BmiCategory::ObeseClassI,
            BmiCategory::ObeseClassII,
            BmiCategory::ObeseClassIII,
        ] {
            assert_eq!(category.tag().parse::<BmiCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_tag() {
        let error = "chonky".parse::<BmiCategory>().unwrap_err();
        assert!(error.message().contains("Unknown BMI category"));
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(BmiCategory::ObeseClassII.to_string(), "Obesity Class II");
    }
}
