//! Mortgage Engine - amortization math for fixed-rate mortgages
//!
//! This library provides:
//! - Level payment (P&I) and single-month balance updates
//! - Loan summaries with tax, PMI, insurance and HOA add-ons
//! - Yearly schedules and sampled (first/last year) monthly schedules
//! - Calendar helpers for payoff dates and schedule labels
//! - CSV loading of loan inputs and text/CSV reporting for the binaries

pub mod error;
pub mod calendar;
pub mod loan;
pub mod amortization;
pub mod markets;
pub mod report;

// Re-export commonly used types
pub use error::{LoanError, LoanResult};
pub use loan::{LoanInput, ResolvedLoan};
pub use amortization::{
    compute_summary, generate_yearly_schedule, generate_monthly_schedule,
    MortgageSummary, YearlyRow, MonthlyRow, ScheduleGenerator,
};
pub use markets::{Market, find_market};
