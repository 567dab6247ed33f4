//! Running balance shared by the yearly and monthly schedule views

use super::math::{apply_period, PeriodAllocation};
use crate::loan::ResolvedLoan;

/// Amortization state at a point in the schedule
#[derive(Debug, Clone)]
pub struct AmortizationState {
    /// Months applied so far (the next payment is `month + 1`)
    pub month: u32,

    /// Outstanding balance after the last applied month
    pub balance: f64,

    monthly_rate: f64,
    payment: f64,
}

impl AmortizationState {
    /// Start from the full loan amount; a non-positive amount starts paid off
    pub fn from_loan(loan: &ResolvedLoan) -> Self {
        Self {
            month: 0,
            balance: loan.loan_amount.max(0.0),
            monthly_rate: loan.monthly_rate,
            payment: loan.monthly_payment_pi,
        }
    }

    /// Apply the next monthly payment; once paid off, months allocate nothing
    pub fn advance_month(&mut self) -> PeriodAllocation {
        let alloc = if self.is_paid_off() {
            PeriodAllocation {
                principal: 0.0,
                interest: 0.0,
                balance: 0.0,
            }
        } else {
            apply_period(self.balance, self.monthly_rate, self.payment)
        };
        self.month += 1;
        self.balance = alloc.balance;
        alloc
    }

    pub fn is_paid_off(&self) -> bool {
        self.balance <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LoanInput;
    use chrono::NaiveDate;

    fn resolved(home_value: f64, down_payment: f64) -> ResolvedLoan {
        LoanInput::new(home_value, down_payment, 6.0, 3, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
            .resolve()
            .unwrap()
    }

    #[test]
    fn test_negative_loan_never_reopens() {
        let mut state = AmortizationState::from_loan(&resolved(100_000.0, 150_000.0));
        assert!(state.is_paid_off());

        for _ in 0..36 {
            let alloc = state.advance_month();
            assert_eq!(alloc.principal, 0.0);
            assert_eq!(alloc.interest, 0.0);
            assert_eq!(alloc.balance, 0.0);
        }
        assert_eq!(state.month, 36);
        assert_eq!(state.balance, 0.0);
    }

    #[test]
    fn test_advance_month_tracks_balance() {
        let mut state = AmortizationState::from_loan(&resolved(200_000.0, 50_000.0));
        let alloc = state.advance_month();
        assert_eq!(state.month, 1);
        assert_eq!(state.balance, alloc.balance);
        assert!(alloc.balance < 150_000.0);
    }
}
