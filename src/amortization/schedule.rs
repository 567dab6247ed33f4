//! Yearly and sampled monthly amortization schedules
//!
//! Both views drive the same `AmortizationState`. The yearly view always
//! covers the full term and pads with zero rows after payoff. The monthly view
//! keeps only the first and last year of payments and stops at payoff.

use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

use super::state::AmortizationState;
use crate::calendar;
use crate::error::LoanResult;
use crate::loan::{LoanInput, ResolvedLoan, MONTHS_PER_YEAR};

/// Months kept at each end of the monthly view
pub const SAMPLE_MONTHS: u32 = 12;

/// One year of the yearly schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyRow {
    /// Loan year (1-indexed)
    pub year: u32,
    /// Calendar year the loan year starts in
    pub calendar_year: i32,
    pub principal: f64,
    pub interest: f64,
    pub ending_balance: f64,
}

impl YearlyRow {
    fn paid_off(year: u32, calendar_year: i32) -> Self {
        Self {
            year,
            calendar_year,
            principal: 0.0,
            interest: 0.0,
            ending_balance: 0.0,
        }
    }
}

/// One payment of the monthly schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRow {
    /// Payment number (1-indexed)
    pub month: u32,
    pub date: NaiveDate,
    /// Month label ("Jan 2025")
    pub label: String,
    pub principal: f64,
    pub interest: f64,
    pub ending_balance: f64,
}

/// Month indices that produce rows in the monthly view
///
/// Covers months `1..=head_end` and `tail_start..=total_months`. The tail
/// never starts before the head ends, so overlapping windows collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleWindow {
    head_end: u32,
    tail_start: u32,
    total_months: u32,
}

impl SampleWindow {
    pub fn new(total_months: u32) -> Self {
        let head_end = total_months.min(SAMPLE_MONTHS);
        let tail_start = total_months
            .saturating_sub(SAMPLE_MONTHS - 1)
            .max(head_end + 1);
        Self {
            head_end,
            tail_start,
            total_months,
        }
    }

    pub fn contains(&self, month: u32) -> bool {
        (1..=self.head_end).contains(&month) || (self.tail_start..=self.total_months).contains(&month)
    }

    /// Number of months in the window
    pub fn len(&self) -> u32 {
        self.head_end + (self.total_months + 1).saturating_sub(self.tail_start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Principal and interest totals over a run of schedule rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleTotals {
    pub principal: f64,
    pub interest: f64,
}

impl ScheduleTotals {
    pub fn from_yearly(rows: &[YearlyRow]) -> Self {
        rows.iter().fold(Self::default(), |acc, r| Self {
            principal: acc.principal + r.principal,
            interest: acc.interest + r.interest,
        })
    }

    pub fn from_monthly(rows: &[MonthlyRow]) -> Self {
        rows.iter().fold(Self::default(), |acc, r| Self {
            principal: acc.principal + r.principal,
            interest: acc.interest + r.interest,
        })
    }
}

/// Schedule generator for one resolved loan
pub struct ScheduleGenerator {
    loan: ResolvedLoan,
}

impl ScheduleGenerator {
    /// Resolve the input; fails exactly when `compute_summary` would
    pub fn from_input(input: &LoanInput) -> LoanResult<Self> {
        Ok(Self {
            loan: input.resolve()?,
        })
    }

    pub fn loan(&self) -> &ResolvedLoan {
        &self.loan
    }

    /// Exactly `effective_term_years` rows, zero-padded after payoff
    pub fn yearly(&self) -> Vec<YearlyRow> {
        let term_years = self.loan.effective_term_years;
        let mut rows = Vec::with_capacity(term_years as usize);
        let mut state = AmortizationState::from_loan(&self.loan);

        for year in 1..=term_years {
            let calendar_year = calendar::year_label(self.loan.start_date, year - 1);

            if state.is_paid_off() {
                rows.push(YearlyRow::paid_off(year, calendar_year));
                continue;
            }

            let mut principal = 0.0;
            let mut interest = 0.0;
            for _ in 0..MONTHS_PER_YEAR {
                if state.is_paid_off() {
                    break;
                }
                let alloc = state.advance_month();
                principal += alloc.principal;
                interest += alloc.interest;
            }

            rows.push(YearlyRow {
                year,
                calendar_year,
                principal,
                interest,
                ending_balance: state.balance,
            });
        }

        rows
    }

    /// First and last year of payments, stopping at payoff
    pub fn monthly(&self) -> Vec<MonthlyRow> {
        let total_months = self.loan.term_months;
        let window = SampleWindow::new(total_months);
        let mut rows = Vec::with_capacity(window.len() as usize);
        let mut state = AmortizationState::from_loan(&self.loan);

        // The first month always runs, so a loan that starts paid off still
        // yields one zero row instead of an empty (failed) schedule.
        while state.month < total_months {
            let alloc = state.advance_month();
            if window.contains(state.month) {
                let date = calendar::add_months(self.loan.start_date, state.month - 1);
                rows.push(MonthlyRow {
                    month: state.month,
                    date,
                    label: calendar::month_label(date),
                    principal: alloc.principal,
                    interest: alloc.interest,
                    ending_balance: alloc.balance,
                });
            }
            if state.is_paid_off() {
                break;
            }
        }

        rows
    }
}

/// Yearly schedule for a loan; empty if the input does not resolve
pub fn generate_yearly_schedule(input: &LoanInput) -> Vec<YearlyRow> {
    match ScheduleGenerator::from_input(input) {
        Ok(generator) => generator.yearly(),
        Err(e) => {
            warn!("Yearly schedule not generated: {}", e);
            Vec::new()
        }
    }
}

/// Sampled monthly schedule for a loan; empty if the input does not resolve
pub fn generate_monthly_schedule(input: &LoanInput) -> Vec<MonthlyRow> {
    match ScheduleGenerator::from_input(input) {
        Ok(generator) => generator.monthly(),
        Err(e) => {
            warn!("Monthly schedule not generated: {}", e);
            Vec::new()
        }
    }
}
