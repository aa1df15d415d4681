// ABOUTME: Core BMI evaluation pipeline: validate, compute, classify, annotate
// ABOUTME: Also formats and emits the evaluation log line for the backend audit trail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Evaluator Contributors

use crate::category::BmiCategory;
use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// Outcome of one BMI evaluation
///
/// Plain immutable value carrier: the computed index, its classification
/// band, and the band's fixed recommendation. Created once per call to
/// [`evaluate`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiEvaluation {
    /// Computed body mass index in kg/m², unrounded
    ///
    /// Rounding is a presentation concern; the stored value is the raw
    /// division result.
    pub bmi: f64,
    /// Classification band consistent with `bmi` under the threshold table
    pub category: BmiCategory,
    /// Fixed recommendation for the band
    pub message: String,
}

impl fmt::Display for BmiEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BMI: {:.2} | {}", self.bmi, self.category.name())
    }
}

/// Evaluate a weight/height measurement pair
///
/// Validates the measurements, computes `bmi = weight / height²`, classifies
/// the result, and attaches the band's recommendation. Pure computation with
/// no side effects; pair with [`log_evaluation`] to record the outcome.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` when, checked in this order:
/// - weight or height is not greater than zero (NaN is rejected here too)
/// - weight exceeds 500 kg
/// - height is outside the 0.5 m to 2.5 m range
///
/// # Example
///
/// ```
/// use bmi_evaluator::evaluator::evaluate;
///
/// # fn example() -> bmi_evaluator::AppResult<()> {
/// let result = evaluate(85.0, 1.70)?;
/// // result.bmi ≈ 29.41, overweight band
/// assert_eq!(result.message, "consider regular physical activity");
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub fn evaluate(weight_kg: f64, height_m: f64) -> AppResult<BmiEvaluation> {
    validate_measurements(weight_kg, height_m)?;

    let bmi = weight_kg / (height_m * height_m);
    let category = BmiCategory::from_bmi(bmi);

    Ok(BmiEvaluation {
        bmi,
        category,
        message: category.recommendation().to_owned(),
    })
}

/// Validate a measurement pair, first violation wins
fn validate_measurements(weight_kg: f64, height_m: f64) -> AppResult<()> {
    if weight_kg <= 0.0 || height_m <= 0.0 || weight_kg.is_nan() || height_m.is_nan() {
        return Err(AppError::invalid_input(
            "weight and height must be greater than zero",
        ));
    }

    if weight_kg > limits::MAX_WEIGHT_KG {
        return Err(AppError::invalid_input("invalid weight: maximum 500kg"));
    }

    if !(limits::MIN_HEIGHT_M..=limits::MAX_HEIGHT_M).contains(&height_m) {
        return Err(AppError::invalid_input(
            "invalid height: must be between 0.5m and 2.5m",
        ));
    }

    Ok(())
}

/// Format the audit line for one evaluation
///
/// `[BMI] Weight: {:.2} kg | Height: {:.2} m | BMI: {:.2} | Category: {name}`
#[must_use]
pub fn format_log_line(weight_kg: f64, height_m: f64, result: &BmiEvaluation) -> String {
    format!(
        "[BMI] Weight: {weight_kg:.2} kg | Height: {height_m:.2} m | BMI: {:.2} | Category: {}",
        result.bmi,
        result.category.name()
    )
}

/// Record one evaluation on the logging sink
///
/// Emits the formatted audit line at info level. No return value and no
/// failure mode; sink write errors are the subscriber's concern.
pub fn log_evaluation(weight_kg: f64, height_m: f64, result: &BmiEvaluation) {
    info!(target: "bmi", "{}", format_log_line(weight_kg, height_m, result));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_measurements() {
        for (weight_kg, height_m) in [(0.0, 1.75), (-70.0, 1.75), (70.0, 0.0), (70.0, -1.75)] {
            let error = evaluate(weight_kg, height_m).unwrap_err();
            assert_eq!(error.message(), "weight and height must be greater than zero");
        }
    }

    #[test]
    fn test_rejects_nan_measurements() {
        let error = evaluate(f64::NAN, 1.75).unwrap_err();
        assert_eq!(error.message(), "weight and height must be greater than zero");
        let error = evaluate(70.0, f64::NAN).unwrap_err();
        assert_eq!(error.message(), "weight and height must be greater than zero");
    }

    #[test]
    fn test_rejects_excessive_weight() {
        let error = evaluate(500.1, 1.75).unwrap_err();
        assert_eq!(error.message(), "invalid weight: maximum 500kg");
        // 500 kg exactly is still accepted
        assert!(evaluate(500.0, 1.75).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_height() {
        for height_m in [0.49, 2.51, 3.0] {
            let error = evaluate(70.0, height_m).unwrap_err();
            assert_eq!(error.message(), "invalid height: must be between 0.5m and 2.5m");
        }
        assert!(evaluate(70.0, 0.5).is_ok());
        assert!(evaluate(70.0, 2.5).is_ok());
    }

    #[test]
    fn test_weight_check_runs_before_height_check() {
        // Both measurements invalid: the weight message wins
        let error = evaluate(600.0, 3.0).unwrap_err();
        assert_eq!(error.message(), "invalid weight: maximum 500kg");
    }

    #[test]
    fn test_bmi_is_exact_division() {
        let result = evaluate(70.0, 1.75).unwrap();
        assert_eq!(result.bmi, 70.0 / (1.75 * 1.75));
        assert_eq!(result.bmi, 22.857_142_857_142_858);
    }

    #[test]
    fn test_display_rounds_to_two_decimals() {
        let result = evaluate(85.0, 1.70).unwrap();
        assert_eq!(result.to_string(), "BMI: 29.41 | Overweight");
    }

    #[test]
    fn test_log_line_format() {
        let result = evaluate(70.0, 1.75).unwrap();
        assert_eq!(
            format_log_line(70.0, 1.75, &result),
            "[BMI] Weight: 70.00 kg | Height: 1.75 m | BMI: 22.86 | Category: Normal weight"
        );
    }
}
