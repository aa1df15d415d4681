// ABOUTME: Unified error handling for the BMI evaluation engine
// ABOUTME: Defines AppError, convenience constructors, and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Evaluator Contributors

//! # Error Handling
//!
//! Single error surface for the crate. Evaluation has exactly one failure
//! domain: measurement validation. The error carries the human-readable
//! message the website presents to the user; callers decide how to render it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the evaluation pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppError {
    /// A measurement failed range validation before computation
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// The human-readable message carried by this error
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidInput(message) => message,
        }
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
