//! Closed-form payment and single-period balance update

use crate::error::{LoanError, LoanResult};

/// Split of one monthly payment between principal and interest
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodAllocation {
    pub principal: f64,
    pub interest: f64,
    /// Balance after the payment, never negative
    pub balance: f64,
}

/// Level monthly payment that amortizes `loan_amount` over `term_months`
///
/// A zero rate divides the loan evenly across the term.
pub fn fixed_payment(loan_amount: f64, monthly_rate: f64, term_months: u32) -> LoanResult<f64> {
    if term_months == 0 {
        return Err(LoanError::InvalidTerm { months: term_months });
    }

    let n = term_months as f64;
    if monthly_rate == 0.0 {
        return Ok(loan_amount / n);
    }

    let growth = (1.0 + monthly_rate).powf(n);
    Ok(loan_amount * (monthly_rate * growth) / (growth - 1.0))
}

/// Apply one month of interest and payment to a balance
///
/// If the payment overshoots the balance, the principal portion is reduced by
/// the overshoot and the balance is clamped to zero.
pub fn apply_period(balance: f64, monthly_rate: f64, payment: f64) -> PeriodAllocation {
    let interest = balance * monthly_rate;
    let mut principal = payment - interest;
    let mut new_balance = balance - principal;

    if new_balance < 0.0 {
        principal += new_balance;
        new_balance = 0.0;
    }

    PeriodAllocation {
        principal,
        interest,
        balance: new_balance,
    }
}
