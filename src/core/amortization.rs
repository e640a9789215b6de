use super::types::{AmortizationResult, PaymentFrequency, PayoffStatus};

const CAP_YEARS: u32 = 30;

impl PaymentFrequency {
    pub fn periods_per_year(self) -> u32 {
        match self {
            PaymentFrequency::Monthly => 12,
            PaymentFrequency::BiWeekly => 26,
        }
    }

    /// 360 monthly or 780 bi-weekly periods.
    pub fn max_periods(self) -> u32 {
        self.periods_per_year() * CAP_YEARS
    }

    pub fn periodic_rate(self, annual_rate: f64) -> f64 {
        annual_rate / self.periods_per_year() as f64
    }

    /// Scale factor for converting a monthly amount into this frequency's per-period amount.
    pub fn share_of_monthly(self) -> f64 {
        match self {
            PaymentFrequency::Monthly => 1.0,
            PaymentFrequency::BiWeekly => 0.5,
        }
    }

    pub fn years_for(self, periods: u32) -> f64 {
        periods as f64 / self.periods_per_year() as f64
    }
}

/// Runs a level-payment loan forward one period at a time until the balance
/// reaches zero or `max_periods` is hit.
///
/// Interest accrues on the opening balance of each period; the remainder of
/// `periodic_payment` reduces principal. The final period's overpayment is
/// dropped by clamping the balance to zero. A loan still open at the cap is
/// reported as [`PayoffStatus::NotPaidOffWithinCap`] with its residual balance.
pub fn simulate_amortization(
    principal: f64,
    periodic_rate: f64,
    periodic_payment: f64,
    max_periods: u32,
) -> AmortizationResult {
    let mut balance = principal;
    let mut total_interest = 0.0;
    let mut periods = 0_u32;

    while balance > 0.0 && periods < max_periods {
        let interest = balance * periodic_rate;
        let principal_portion = periodic_payment - interest;
        total_interest += interest;
        balance -= principal_portion;
        periods += 1;

        if balance < 0.0 {
            balance = 0.0;
        }
    }

    let status = if balance > 0.0 {
        PayoffStatus::NotPaidOffWithinCap
    } else {
        PayoffStatus::PaidOff
    };

    AmortizationResult {
        periods,
        total_interest,
        ending_balance: balance.max(0.0),
        status,
    }
}

/// Convenience wrapper taking an annual rate and a frequency, capped at the
/// frequency's 30-year ceiling.
pub fn amortize_at_frequency(
    principal: f64,
    annual_rate: f64,
    periodic_payment: f64,
    frequency: PaymentFrequency,
) -> AmortizationResult {
    simulate_amortization(
        principal,
        frequency.periodic_rate(annual_rate),
        periodic_payment,
        frequency.max_periods(),
    )
}
