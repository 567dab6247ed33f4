//! Text and CSV rendering for summaries and schedules

use std::io::Write;

use serde::Serialize;

use crate::amortization::{MonthlyRow, MortgageSummary, ScheduleTotals, YearlyRow};

/// Format an amount with thousands separators and two decimals ("1,234.50 USD")
pub fn format_amount(amount: f64, currency: &str) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{}{}.{} {}", sign, grouped, frac, currency)
}

/// Print the loan summary and monthly breakdown
pub fn print_summary(summary: &MortgageSummary, currency: &str) {
    println!("Loan Summary");
    println!("{}", "-".repeat(60));
    println!("  Loan Amount:            {:>24}", format_amount(summary.loan_amount, currency));
    println!("  Monthly Payment (P&I):  {:>24}", format_amount(summary.monthly_payment_pi, currency));
    println!("  Total Interest Paid:    {:>24}", format_amount(summary.total_interest_paid, currency));
    println!("  Loan Payoff Date:       {:>24}", summary.payoff_label());
    println!("  Total Payments:         {:>24}", format_amount(summary.total_payments, currency));
    println!("  Annual Payment:         {:>24}", format_amount(summary.annual_payment_amount, currency));
    println!(
        "  Rate / Term:            {:>24}",
        format!("{:.2}% / {} years", summary.effective_rate_percent, summary.effective_term_years)
    );
    println!();
    println!("Monthly Payment Breakdown");
    println!("{}", "-".repeat(60));
    println!("  Principal & Interest:   {:>24}", format_amount(summary.monthly_payment_pi, currency));
    println!("  Property Tax:           {:>24}", format_amount(summary.property_tax_monthly, currency));
    println!("  PMI:                    {:>24}", format_amount(summary.pmi_monthly, currency));
    println!("  Home Insurance:         {:>24}", format_amount(summary.home_insurance_monthly, currency));
    println!("  HOA Fee:                {:>24}", format_amount(summary.hoa_fee_monthly, currency));
    println!("  Total Monthly Payment:  {:>24}", format_amount(summary.total_monthly_payment, currency));
}

pub fn print_yearly(rows: &[YearlyRow], currency: &str) {
    println!("{:>4} {:>6} {:>22} {:>22} {:>24}", "Year", "Date", "Principal", "Interest", "Ending Balance");
    println!("{}", "-".repeat(82));
    for row in rows {
        println!(
            "{:>4} {:>6} {:>22} {:>22} {:>24}",
            row.year,
            row.calendar_year,
            format_amount(row.principal, currency),
            format_amount(row.interest, currency),
            format_amount(row.ending_balance, currency),
        );
    }
    println!("{}", "-".repeat(82));
    println!("{}", totals_line("Total", &ScheduleTotals::from_yearly(rows), currency, 11, 22));
}

pub fn print_monthly(rows: &[MonthlyRow], currency: &str) {
    println!("{:>5} {:>8} {:>20} {:>20} {:>24}", "Month", "Date", "Principal", "Interest", "Ending Balance");
    println!("{}", "-".repeat(81));
    let mut previous_month = 0;
    for row in rows {
        if previous_month != 0 && row.month != previous_month + 1 {
            println!("  ... ({} months not shown)", row.month - previous_month - 1);
        }
        println!(
            "{:>5} {:>8} {:>20} {:>20} {:>24}",
            row.month,
            row.label,
            format_amount(row.principal, currency),
            format_amount(row.interest, currency),
            format_amount(row.ending_balance, currency),
        );
        previous_month = row.month;
    }
    println!("{}", "-".repeat(81));
    println!("{}", totals_line("Shown", &ScheduleTotals::from_monthly(rows), currency, 14, 20));
}

/// Footer with principal and interest totals aligned under the table columns
pub fn totals_line(label: &str, totals: &ScheduleTotals, currency: &str, label_width: usize, amount_width: usize) -> String {
    format!(
        "{:>lw$} {:>aw$} {:>aw$}",
        label,
        format_amount(totals.principal, currency),
        format_amount(totals.interest, currency),
        lw = label_width,
        aw = amount_width,
    )
}

/// Write any serializable rows as CSV with a header line
pub fn write_csv<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate_monthly_schedule, generate_yearly_schedule, LoanInput};
    use chrono::NaiveDate;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0, "USD"), "0.00 USD");
        assert_eq!(format_amount(999.996, "EUR"), "1,000.00 EUR");
        assert_eq!(format_amount(320_000.0, "USD"), "320,000.00 USD");
        assert_eq!(format_amount(1_234_567.891, "MAD"), "1,234,567.89 MAD");
        assert_eq!(format_amount(-2_500.5, "GBP"), "-2,500.50 GBP");
        assert_eq!(format_amount(-0.001, "GBP"), "0.00 GBP");
    }

    #[test]
    fn test_monthly_totals_line() {
        let input = LoanInput::new(120_000.0, 0.0, 0.0, 1, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let rows = generate_monthly_schedule(&input);
        let line = totals_line("Shown", &ScheduleTotals::from_monthly(&rows), "USD", 14, 20);

        assert_eq!(line, format!("{:>14} {:>20} {:>20}", "Shown", "120,000.00 USD", "0.00 USD"));
    }

    #[test]
    fn test_yearly_csv_export() {
        let input = LoanInput::new(120_000.0, 0.0, 0.0, 2, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let rows = generate_yearly_schedule(&input);

        let mut buffer = Vec::new();
        write_csv(&mut buffer, &rows).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "year,calendar_year,principal,interest,ending_balance");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("1,2025,"));
        assert!(lines[2].starts_with("2,2026,"));
    }
}
