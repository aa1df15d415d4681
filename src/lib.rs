// ABOUTME: BMI evaluation engine for health and nutrition backends
// ABOUTME: Validates measurements, computes BMI, classifies into WHO bands, and attaches recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Evaluator Contributors

#![deny(unsafe_code)]

//! # BMI Evaluator
//!
//! Backend calculation utility for body mass index: validates a weight/height
//! measurement pair, computes the index, classifies it into one of six
//! medical categories, and attaches a fixed recommendation and display color
//! per category. Stateless and synchronous; safe to call from any number of
//! threads without coordination.
//!
//! ## Modules
//!
//! - **errors**: `AppError` and the `AppResult` alias
//! - **constants**: classification thresholds and input validation limits
//! - **category**: `BmiCategory` with per-band display attributes
//! - **evaluator**: the validate → compute → classify → annotate pipeline
//!
//! ## Example
//!
//! ```
//! use bmi_evaluator::{evaluate, BmiCategory};
//!
//! # fn example() -> bmi_evaluator::AppResult<()> {
//! let result = evaluate(70.0, 1.75)?;
//! assert_eq!(result.category, BmiCategory::Normal);
//! assert_eq!(result.message, "keep maintaining your healthy weight");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

/// Error handling with `AppError` and the `AppResult` alias
pub mod errors;

/// Classification thresholds and input validation limits
pub mod constants;

/// BMI category bands with display name, color, and recommendation
pub mod category;

/// Measurement validation, BMI computation, and evaluation logging
pub mod evaluator;

pub use category::BmiCategory;
pub use errors::{AppError, AppResult};
pub use evaluator::{evaluate, format_log_line, log_evaluation, BmiEvaluation};
