// ABOUTME: Command-line front end for the BMI evaluation engine
// ABOUTME: Evaluates a single measurement pair or runs the fixed demo scenarios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Evaluator Contributors

//! BMI evaluation CLI.
//!
//! Usage:
//! ```bash
//! # Evaluate one measurement pair
//! bmi-cli evaluate --weight-kg 70 --height-m 1.75
//!
//! # Same, as JSON (for piping into other tools)
//! bmi-cli evaluate --weight-kg 70 --height-m 1.75 --json
//!
//! # Run the three illustrative demo scenarios
//! bmi-cli demo
//! ```

use anyhow::Result;
use bmi_evaluator::{evaluate, log_evaluation, BmiEvaluation};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bmi-cli",
    about = "BMI evaluation CLI",
    long_about = "Compute and classify body mass index from a weight/height measurement pair."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Evaluate one measurement pair
    Evaluate {
        /// Body weight in kilograms
        #[arg(long)]
        weight_kg: f64,

        /// Height in meters
        #[arg(long)]
        height_m: f64,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the three fixed demo scenarios (normal, overweight, underweight)
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    match cli.command {
        Command::Evaluate {
            weight_kg,
            height_m,
            json,
        } => {
            let result = evaluate(weight_kg, height_m)?;
            log_evaluation(weight_kg, height_m, &result);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_result(&result);
            }
        }
        Command::Demo => run_demo()?,
    }

    Ok(())
}

/// The illustrative scenarios from the original site backend: normal weight,
/// overweight, underweight.
fn run_demo() -> Result<()> {
    for (weight_kg, height_m) in [(70.0, 1.75), (85.0, 1.70), (55.0, 1.75)] {
        let result = evaluate(weight_kg, height_m)?;
        log_evaluation(weight_kg, height_m, &result);
        print_result(&result);
        println!();
    }

    Ok(())
}

fn print_result(result: &BmiEvaluation) {
    println!("{result}");
    println!("Recommendation: {}", result.message);
    println!("Color: {}", result.category.color());
}
