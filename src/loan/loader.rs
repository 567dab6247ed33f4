//! Load loan inputs from CSV for batch runs
//!
//! Expected header (overrides may be left empty):
//! `home_value,down_payment,annual_interest_rate_percent,loan_term_years,start_date,
//! property_tax_annual,pmi_rate_percent,home_insurance_annual,hoa_fee_monthly,
//! override_rate_percent,override_term_years`

use super::LoanInput;
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Default input file for batch runs
pub const DEFAULT_LOANS_PATH: &str = "loans.csv";

/// Load all loan inputs from a CSV file
pub fn load_loans<P: AsRef<Path>>(path: P) -> Result<Vec<LoanInput>, Box<dyn Error>> {
    let reader = Reader::from_path(path)?;
    collect_rows(reader)
}

/// Load loan inputs from any reader (e.g., string buffer, stdin)
pub fn load_loans_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<LoanInput>, Box<dyn Error>> {
    collect_rows(Reader::from_reader(reader))
}

fn collect_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<LoanInput>, Box<dyn Error>> {
    let mut loans = Vec::new();

    for (index, result) in reader.deserialize().enumerate() {
        let loan: LoanInput = result.map_err(|e| format!("row {}: {}", index + 1, e))?;
        loans.push(loan);
    }

    Ok(loans)
}
