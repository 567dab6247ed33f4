//! Amortization engine: payment math, summary metrics and schedules

mod math;
mod state;
mod summary;
mod schedule;

pub use math::{fixed_payment, apply_period, PeriodAllocation};
pub use state::AmortizationState;
pub use summary::{compute_summary, MortgageSummary};
pub use schedule::{
    generate_yearly_schedule, generate_monthly_schedule, ScheduleGenerator, SampleWindow,
    ScheduleTotals, YearlyRow, MonthlyRow, SAMPLE_MONTHS,
};
