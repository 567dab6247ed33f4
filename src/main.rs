//! Mortgage Engine CLI
//!
//! Computes a loan summary with yearly and sampled monthly schedules

use std::fs::File;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use serde::Serialize;

use mortgage_engine::markets::{default_market, find_market, MARKETS};
use mortgage_engine::report;
use mortgage_engine::{
    compute_summary, generate_monthly_schedule, generate_yearly_schedule, LoanInput, Market,
    MonthlyRow, MortgageSummary, YearlyRow,
};

#[derive(Debug, Parser)]
#[command(name = "mortgage", version, about = "Mortgage payment and amortization calculator")]
struct Args {
    /// Country name or currency code used for the default rate and labels
    #[arg(long, default_value = mortgage_engine::markets::DEFAULT_MARKET)]
    country: String,

    /// List the known countries and exit
    #[arg(long)]
    list_countries: bool,

    #[arg(long, default_value_t = 400_000.0)]
    home_value: f64,

    #[arg(long, default_value_t = 80_000.0)]
    down_payment: f64,

    /// Annual interest rate in percent (defaults to the country's rate)
    #[arg(long)]
    rate: Option<f64>,

    /// Loan term in years
    #[arg(long, default_value_t = 30)]
    term: u32,

    /// First payment date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Annual property tax
    #[arg(long, default_value_t = 3_000.0)]
    property_tax: f64,

    /// Annual PMI rate in percent of the loan amount
    #[arg(long, default_value_t = 0.0)]
    pmi_rate: f64,

    /// Annual home insurance
    #[arg(long, default_value_t = 1_500.0)]
    home_insurance: f64,

    /// Monthly HOA fee
    #[arg(long, default_value_t = 0.0)]
    hoa_fee: f64,

    /// Override interest rate in percent (0 = not set)
    #[arg(long, default_value_t = 0.0)]
    override_rate: f64,

    /// Override loan term in years (0 = not set)
    #[arg(long, default_value_t = 0)]
    override_term: u32,

    /// Print summary and schedules as JSON
    #[arg(long)]
    json: bool,

    /// Write the yearly schedule to a CSV file
    #[arg(long)]
    yearly_csv: Option<PathBuf>,

    /// Write the sampled monthly schedule to a CSV file
    #[arg(long)]
    monthly_csv: Option<PathBuf>,
}

#[derive(Serialize)]
struct CalculationResponse<'a> {
    market: &'a Market,
    input: &'a LoanInput,
    summary: &'a MortgageSummary,
    yearly_schedule: &'a [YearlyRow],
    monthly_schedule: &'a [MonthlyRow],
}

impl Args {
    fn market(&self) -> Result<&'static Market> {
        match find_market(&self.country) {
            Some(market) => Ok(market),
            None => bail!(
                "Unknown country '{}' (use --list-countries, default is {})",
                self.country,
                default_market().name
            ),
        }
    }

    fn loan_input(&self, market: &Market) -> LoanInput {
        let start_date = self.start_date.unwrap_or_else(|| Local::now().date_naive());
        let override_rate = (self.override_rate > 0.0).then_some(self.override_rate);
        let override_term = (self.override_term > 0).then_some(self.override_term);

        LoanInput::new(
            self.home_value,
            self.down_payment,
            self.rate.unwrap_or(market.default_rate_percent),
            self.term,
            start_date,
        )
        .with_costs(self.property_tax, self.home_insurance, self.hoa_fee)
        .with_pmi(self.pmi_rate)
        .with_overrides(override_rate, override_term)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.list_countries {
        for market in MARKETS {
            println!(
                "{} {:<16} {}  default rate {:.2}%",
                market.flag, market.name, market.currency, market.default_rate_percent
            );
        }
        return Ok(());
    }

    let market = args.market()?;
    let input = args.loan_input(market);

    let summary = compute_summary(&input).context("An error occurred during calculation")?;
    let yearly = generate_yearly_schedule(&input);
    let monthly = generate_monthly_schedule(&input);

    if let Some(path) = &args.yearly_csv {
        let file = File::create(path).with_context(|| format!("Unable to create {}", path.display()))?;
        report::write_csv(file, &yearly).context("Failed to write yearly schedule")?;
    }
    if let Some(path) = &args.monthly_csv {
        let file = File::create(path).with_context(|| format!("Unable to create {}", path.display()))?;
        report::write_csv(file, &monthly).context("Failed to write monthly schedule")?;
    }

    if args.json {
        let response = CalculationResponse {
            market,
            input: &input,
            summary: &summary,
            yearly_schedule: &yearly,
            monthly_schedule: &monthly,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let currency = market.currency;
    println!("Mortgage Calculator ({} {})", market.flag, market.name);
    println!("======================================\n");
    report::print_summary(&summary, currency);

    println!("\nYearly Breakdown");
    if yearly.is_empty() {
        println!("  Yearly schedule could not be generated.");
    } else {
        report::print_yearly(&yearly, currency);
    }

    println!("\nMonthly Breakdown (first and last year)");
    if monthly.is_empty() {
        println!("  Monthly schedule could not be generated.");
    } else {
        report::print_monthly(&monthly, currency);
    }

    println!("\nThis estimate includes principal, interest, taxes, insurance, and HOA fees.");
    Ok(())
}
