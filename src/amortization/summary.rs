//! Aggregate loan metrics: payment breakdown, totals and payoff date

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::error::LoanResult;
use crate::loan::{LoanInput, MONTHS_PER_YEAR};

/// Summary figures for one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageSummary {
    pub loan_amount: f64,

    /// Principal and interest portion of the monthly payment
    pub monthly_payment_pi: f64,

    // Monthly add-ons
    pub property_tax_monthly: f64,
    pub pmi_monthly: f64,
    pub home_insurance_monthly: f64,
    pub hoa_fee_monthly: f64,

    /// P&I plus every monthly add-on
    pub total_monthly_payment: f64,

    // Totals over the full term
    pub total_interest_paid: f64,
    pub total_payments: f64,
    pub annual_payment_amount: f64,

    pub loan_payoff_date: NaiveDate,

    // Values used after override resolution
    pub effective_rate_percent: f64,
    pub effective_term_years: u32,
    pub term_months: u32,
}

impl MortgageSummary {
    /// Payoff date as a month label ("Feb 2055")
    pub fn payoff_label(&self) -> String {
        calendar::month_label(self.loan_payoff_date)
    }
}

/// Compute the summary for a loan
///
/// Fails on invalid input or a zero-length term; nothing partial is returned.
pub fn compute_summary(input: &LoanInput) -> LoanResult<MortgageSummary> {
    let loan = input.resolve()?;
    let months_per_year = MONTHS_PER_YEAR as f64;

    let pmi_monthly = if loan.loan_amount > 0.0 {
        loan.loan_amount * (input.pmi_rate_percent / 100.0) / months_per_year
    } else {
        0.0
    };
    let property_tax_monthly = input.property_tax_annual / months_per_year;
    let home_insurance_monthly = input.home_insurance_annual / months_per_year;
    let hoa_fee_monthly = input.hoa_fee_monthly;

    let total_monthly_payment =
        loan.monthly_payment_pi + property_tax_monthly + pmi_monthly + home_insurance_monthly + hoa_fee_monthly;

    let term_months = loan.term_months as f64;

    Ok(MortgageSummary {
        loan_amount: loan.loan_amount,
        monthly_payment_pi: loan.monthly_payment_pi,
        property_tax_monthly,
        pmi_monthly,
        home_insurance_monthly,
        hoa_fee_monthly,
        total_monthly_payment,
        total_interest_paid: loan.monthly_payment_pi * term_months - loan.loan_amount,
        total_payments: total_monthly_payment * term_months,
        annual_payment_amount: total_monthly_payment * months_per_year,
        loan_payoff_date: calendar::add_years(loan.start_date, loan.effective_term_years),
        effective_rate_percent: loan.effective_rate_percent,
        effective_term_years: loan.effective_term_years,
        term_months: loan.term_months,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoanError;
    use approx::assert_relative_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dashboard_defaults() -> LoanInput {
        LoanInput::new(400_000.0, 80_000.0, 7.0, 30, ymd(2025, 1, 1)).with_costs(3_000.0, 1_500.0, 0.0)
    }

    #[test]
    fn test_dashboard_example() {
        let summary = compute_summary(&dashboard_defaults()).unwrap();

        assert_eq!(summary.loan_amount, 320_000.0);
        assert_relative_eq!(summary.monthly_payment_pi, 2128.97, epsilon = 0.01);
        assert_eq!(summary.property_tax_monthly, 250.0);
        assert_eq!(summary.home_insurance_monthly, 125.0);
        assert_eq!(summary.pmi_monthly, 0.0);
        assert_relative_eq!(summary.total_monthly_payment, summary.monthly_payment_pi + 375.0, epsilon = 1e-9);
        assert_relative_eq!(summary.total_monthly_payment, 2503.97, epsilon = 0.01);
        assert_relative_eq!(summary.annual_payment_amount, summary.total_monthly_payment * 12.0);
        assert_relative_eq!(summary.total_payments, summary.total_monthly_payment * 360.0);
        assert_relative_eq!(
            summary.total_interest_paid,
            summary.monthly_payment_pi * 360.0 - 320_000.0
        );
        assert_eq!(summary.loan_payoff_date, ymd(2055, 1, 1));
        assert_eq!(summary.payoff_label(), "Jan 2055");
    }

    #[test]
    fn test_pmi_and_hoa() {
        let input = dashboard_defaults().with_pmi(0.6).with_costs(3_000.0, 1_500.0, 120.0);
        let summary = compute_summary(&input).unwrap();

        assert_relative_eq!(summary.pmi_monthly, 160.0, epsilon = 1e-9);
        assert_eq!(summary.hoa_fee_monthly, 120.0);
        assert_relative_eq!(
            summary.total_monthly_payment,
            summary.monthly_payment_pi + 250.0 + 125.0 + 160.0 + 120.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_zero_rate_loan() {
        let input = LoanInput::new(120_000.0, 0.0, 0.0, 10, ymd(2025, 5, 1));
        let summary = compute_summary(&input).unwrap();

        assert_eq!(summary.monthly_payment_pi, 1_000.0);
        assert_eq!(summary.total_interest_paid, 0.0);
    }

    #[test]
    fn test_leap_day_payoff() {
        let input = LoanInput::new(200_000.0, 40_000.0, 6.0, 1, ymd(2024, 2, 29));
        let summary = compute_summary(&input).unwrap();
        assert_eq!(summary.loan_payoff_date, ymd(2025, 2, 28));
    }

    #[test]
    fn test_override_precedence() {
        let base = compute_summary(&dashboard_defaults()).unwrap();
        let zero_override = compute_summary(&dashboard_defaults().with_overrides(Some(0.0), Some(0))).unwrap();
        assert_eq!(base, zero_override);

        let lower = compute_summary(&dashboard_defaults().with_overrides(Some(5.0), None)).unwrap();
        assert_eq!(lower.effective_rate_percent, 5.0);
        assert!(lower.monthly_payment_pi < base.monthly_payment_pi);

        let shorter = compute_summary(&dashboard_defaults().with_overrides(None, Some(15))).unwrap();
        assert_eq!(shorter.term_months, 180);
        assert_eq!(shorter.loan_payoff_date, ymd(2040, 1, 1));
    }

    #[test]
    fn test_degenerate_loan_is_not_an_error() {
        let input = LoanInput::new(100_000.0, 100_000.0, 6.0, 30, ymd(2025, 1, 1)).with_pmi(1.0);
        let summary = compute_summary(&input).unwrap();
        assert_eq!(summary.loan_amount, 0.0);
        assert_eq!(summary.monthly_payment_pi, 0.0);
        assert_eq!(summary.pmi_monthly, 0.0);

        let negative = LoanInput::new(100_000.0, 120_000.0, 6.0, 30, ymd(2025, 1, 1)).with_pmi(1.0);
        let summary = compute_summary(&negative).unwrap();
        assert_eq!(summary.pmi_monthly, 0.0);
        assert!(summary.monthly_payment_pi < 0.0);
    }

    #[test]
    fn test_invalid_input_has_no_result() {
        let mut input = dashboard_defaults();
        input.down_payment = f64::NAN;
        assert!(matches!(
            compute_summary(&input),
            Err(LoanError::InvalidInput { field: "down_payment", .. })
        ));
    }

    #[test]
    fn test_idempotent() {
        let input = dashboard_defaults().with_pmi(0.4);
        let first = compute_summary(&input).unwrap();
        let second = compute_summary(&input).unwrap();
        assert_eq!(first.total_monthly_payment.to_bits(), second.total_monthly_payment.to_bits());
        assert_eq!(first.total_interest_paid.to_bits(), second.total_interest_paid.to_bits());
        assert_eq!(first, second);
    }
}
