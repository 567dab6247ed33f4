//! Loan input record and override resolution

use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::amortization::fixed_payment;
use crate::error::{LoanError, LoanResult};

/// Months in a year, used for rate and term conversion
pub const MONTHS_PER_YEAR: u32 = 12;

/// Longest accepted effective term in years
pub const MAX_TERM_YEARS: u32 = 100;

/// Inputs for a single mortgage calculation
///
/// Monetary fields are unitless; the caller owns currency and formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    /// Purchase price of the home
    pub home_value: f64,

    /// Cash paid up front; the remainder is financed
    pub down_payment: f64,

    /// Nominal annual rate in percent (7.0 = 7%)
    pub annual_interest_rate_percent: f64,

    /// Loan term in whole years
    pub loan_term_years: u32,

    /// First payment date
    pub start_date: NaiveDate,

    /// Annual property tax
    #[serde(default)]
    pub property_tax_annual: f64,

    /// Annual PMI rate in percent of the loan amount
    #[serde(default)]
    pub pmi_rate_percent: f64,

    /// Annual home insurance premium
    #[serde(default)]
    pub home_insurance_annual: f64,

    /// Monthly HOA fee
    #[serde(default)]
    pub hoa_fee_monthly: f64,

    /// Replaces the base rate when present and positive
    #[serde(default)]
    pub override_rate_percent: Option<f64>,

    /// Replaces the base term when present and positive
    #[serde(default)]
    pub override_term_years: Option<u32>,
}

/// Loan terms after overrides are applied, ready for amortization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedLoan {
    pub loan_amount: f64,
    pub effective_rate_percent: f64,
    pub effective_term_years: u32,
    pub term_months: u32,
    pub monthly_rate: f64,
    pub monthly_payment_pi: f64,
    pub start_date: NaiveDate,
}

impl LoanInput {
    /// Create an input with no add-on costs and no overrides
    pub fn new(
        home_value: f64,
        down_payment: f64,
        annual_interest_rate_percent: f64,
        loan_term_years: u32,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            home_value,
            down_payment,
            annual_interest_rate_percent,
            loan_term_years,
            start_date,
            property_tax_annual: 0.0,
            pmi_rate_percent: 0.0,
            home_insurance_annual: 0.0,
            hoa_fee_monthly: 0.0,
            override_rate_percent: None,
            override_term_years: None,
        }
    }

    /// Set annual property tax, annual insurance and monthly HOA fee
    pub fn with_costs(mut self, property_tax_annual: f64, home_insurance_annual: f64, hoa_fee_monthly: f64) -> Self {
        self.property_tax_annual = property_tax_annual;
        self.home_insurance_annual = home_insurance_annual;
        self.hoa_fee_monthly = hoa_fee_monthly;
        self
    }

    /// Set the annual PMI rate in percent
    pub fn with_pmi(mut self, pmi_rate_percent: f64) -> Self {
        self.pmi_rate_percent = pmi_rate_percent;
        self
    }

    /// Set rate and term overrides (zero or absent means "use the base value")
    pub fn with_overrides(mut self, rate_percent: Option<f64>, term_years: Option<u32>) -> Self {
        self.override_rate_percent = rate_percent;
        self.override_term_years = term_years;
        self
    }

    /// Financed amount; negative when the down payment exceeds the home value
    pub fn loan_amount(&self) -> f64 {
        self.home_value - self.down_payment
    }

    /// Rate actually used: the override when positive, else the base rate
    pub fn effective_rate_percent(&self) -> f64 {
        match self.override_rate_percent {
            Some(rate) if rate > 0.0 => rate,
            _ => self.annual_interest_rate_percent,
        }
    }

    /// Term actually used: the override when positive, else the base term
    pub fn effective_term_years(&self) -> u32 {
        match self.override_term_years {
            Some(years) if years > 0 => years,
            _ => self.loan_term_years,
        }
    }

    /// Check every numeric field before any computation
    pub fn validate(&self) -> LoanResult<()> {
        let non_negative = [
            ("home_value", self.home_value),
            ("down_payment", self.down_payment),
            ("annual_interest_rate_percent", self.annual_interest_rate_percent),
            ("property_tax_annual", self.property_tax_annual),
            ("pmi_rate_percent", self.pmi_rate_percent),
            ("home_insurance_annual", self.home_insurance_annual),
            ("hoa_fee_monthly", self.hoa_fee_monthly),
        ];

        for (field, value) in non_negative {
            if !value.is_finite() {
                return Err(LoanError::invalid(field, format!("{} is not a finite number", value)));
            }
            if value < 0.0 {
                return Err(LoanError::invalid(field, format!("{} must not be negative", value)));
            }
        }

        if let Some(rate) = self.override_rate_percent {
            if !rate.is_finite() {
                return Err(LoanError::invalid(
                    "override_rate_percent",
                    format!("{} is not a finite number", rate),
                ));
            }
        }

        let term_years = self.effective_term_years();
        if term_years > MAX_TERM_YEARS {
            let field = match self.override_term_years {
                Some(years) if years > 0 => "override_term_years",
                _ => "loan_term_years",
            };
            return Err(LoanError::invalid(
                field,
                format!("{} years exceeds the {} year maximum", term_years, MAX_TERM_YEARS),
            ));
        }

        Ok(())
    }

    /// Validate, apply overrides and derive the P&I payment
    pub fn resolve(&self) -> LoanResult<ResolvedLoan> {
        self.validate()?;

        let effective_rate_percent = self.effective_rate_percent();
        let effective_term_years = self.effective_term_years();
        let term_months = effective_term_years * MONTHS_PER_YEAR;
        if term_months == 0 {
            return Err(LoanError::InvalidTerm { months: term_months });
        }

        let loan_amount = self.loan_amount();
        if loan_amount <= 0.0 {
            warn!(
                "Degenerate loan: down payment {:.2} covers home value {:.2}",
                self.down_payment, self.home_value
            );
        }

        let monthly_rate = effective_rate_percent / 100.0 / MONTHS_PER_YEAR as f64;
        let monthly_payment_pi = fixed_payment(loan_amount, monthly_rate, term_months)?;

        debug!(
            "Resolved loan: amount={:.2} rate={}% term={}y payment={:.2}",
            loan_amount, effective_rate_percent, effective_term_years, monthly_payment_pi
        );

        Ok(ResolvedLoan {
            loan_amount,
            effective_rate_percent,
            effective_term_years,
            term_months,
            monthly_rate,
            monthly_payment_pi,
            start_date: self.start_date,
        })
    }
}
