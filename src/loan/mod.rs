//! Loan inputs, override resolution and CSV loading

mod data;
pub mod loader;

pub use data::{LoanInput, ResolvedLoan, MAX_TERM_YEARS, MONTHS_PER_YEAR};
pub use loader::{load_loans, load_loans_from_reader};
