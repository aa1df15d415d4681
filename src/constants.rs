// ABOUTME: Classification thresholds and validation limits for BMI evaluation
// ABOUTME: WHO band boundaries plus the accepted weight and height measurement ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Evaluator Contributors

//! Application constants organized by domain. These tables are read-only
//! process-wide; classification and validation never mutate them.

/// BMI classification thresholds (kg/m²)
///
/// Each constant is the exclusive upper bound of its band; values at the
/// boundary belong to the next band up.
pub mod thresholds {
    /// Upper bound of the underweight band
    pub const UNDERWEIGHT_MAX_BMI: f64 = 18.5;
    /// Upper bound of the normal-weight band
    pub const NORMAL_MAX_BMI: f64 = 25.0;
    /// Upper bound of the overweight band
    pub const OVERWEIGHT_MAX_BMI: f64 = 30.0;
    /// Upper bound of the class I obesity band
    pub const OBESE_CLASS_I_MAX_BMI: f64 = 35.0;
    /// Upper bound of the class II obesity band; anything above is class III
    pub const OBESE_CLASS_II_MAX_BMI: f64 = 40.0;
}

/// Accepted measurement ranges for input validation
pub mod limits {
    /// Maximum accepted body weight in kilograms
    pub const MAX_WEIGHT_KG: f64 = 500.0;
    /// Minimum accepted height in meters
    pub const MIN_HEIGHT_M: f64 = 0.5;
    /// Maximum accepted height in meters
    pub const MAX_HEIGHT_M: f64 = 2.5;
}
