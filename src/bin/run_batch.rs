//! Compute summaries for every loan in a CSV file
//!
//! Each row is an independent calculation; rows are evaluated in parallel.
//! Accepts config via environment variables:
//!   LOANS_CSV (input, default loans.csv), BATCH_OUTPUT (default batch_summary.csv)
//! Pass --json to print the results as JSON instead of writing CSV.

use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use mortgage_engine::loan::{load_loans, loader::DEFAULT_LOANS_PATH};
use mortgage_engine::{compute_summary, report, LoanInput};
use rayon::prelude::*;
use serde::Serialize;
use std::env;
use std::fs::File;
use std::time::Instant;

const DEFAULT_OUTPUT_PATH: &str = "batch_summary.csv";

/// One output line per input loan; invalid loans carry only the error
#[derive(Debug, Clone, Serialize)]
struct BatchRow {
    row: usize,
    loan_amount: Option<f64>,
    monthly_payment_pi: Option<f64>,
    total_monthly_payment: Option<f64>,
    total_interest_paid: Option<f64>,
    total_payments: Option<f64>,
    annual_payment_amount: Option<f64>,
    payoff: Option<String>,
    error: Option<String>,
}

impl BatchRow {
    fn evaluate(row: usize, input: &LoanInput) -> Self {
        match compute_summary(input) {
            Ok(summary) => Self {
                row,
                loan_amount: Some(summary.loan_amount),
                monthly_payment_pi: Some(summary.monthly_payment_pi),
                total_monthly_payment: Some(summary.total_monthly_payment),
                total_interest_paid: Some(summary.total_interest_paid),
                total_payments: Some(summary.total_payments),
                annual_payment_amount: Some(summary.annual_payment_amount),
                payoff: Some(summary.payoff_label()),
                error: None,
            },
            Err(e) => {
                warn!("Row {}: {}", row, e);
                Self {
                    row,
                    loan_amount: None,
                    monthly_payment_pi: None,
                    total_monthly_payment: None,
                    total_interest_paid: None,
                    total_payments: None,
                    annual_payment_amount: None,
                    payoff: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let json_output = env::args().any(|arg| arg == "--json");
    let input_path = env::var("LOANS_CSV").unwrap_or_else(|_| DEFAULT_LOANS_PATH.to_string());
    let output_path = env::var("BATCH_OUTPUT").unwrap_or_else(|_| DEFAULT_OUTPUT_PATH.to_string());

    let start = Instant::now();
    let loans = load_loans(&input_path)
        .map_err(|e| anyhow!("Failed to load loans from {}: {}", input_path, e))?;
    info!("Loaded {} loans in {:?}", loans.len(), start.elapsed());

    let results: Vec<BatchRow> = loans
        .par_iter()
        .enumerate()
        .map(|(index, input)| BatchRow::evaluate(index + 1, input))
        .collect();

    let failed = results.iter().filter(|r| r.error.is_some()).count();
    info!(
        "Computed {} summaries ({} invalid) in {:?}",
        results.len(),
        failed,
        start.elapsed()
    );

    if json_output {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let file = File::create(&output_path).with_context(|| format!("Failed to create {}", output_path))?;
    report::write_csv(file, &results).context("Failed to write batch summary")?;

    println!("Loans: {} ({} invalid)", results.len(), failed);
    println!("Output written to {}", output_path);
    Ok(())
}
