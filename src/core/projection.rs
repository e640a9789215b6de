use super::types::{FeeProjection, YearlyFeePoint};

/// Annual fee expressed as a fraction of the balance; zero when there is no positive balance.
pub fn fee_rate_of(balance: f64, annual_fee: f64) -> f64 {
    if balance > 0.0 {
        annual_fee / balance
    } else {
        0.0
    }
}

/// Projects an account whose fee is a fixed fraction of the running balance.
///
/// Each year the fee is taken from the opening balance, then the balance grows
/// and the fee is subtracted: `balance * (1 + growth) - fee`. The fee rate stays
/// constant, so the dollar fee follows the balance.
pub fn project_fees_over_time(
    starting_balance: f64,
    annual_fee_rate: f64,
    annual_growth_rate: f64,
    years: u32,
) -> FeeProjection {
    let mut balance = starting_balance;
    let mut total_fees_paid = 0.0;
    let mut yearly = Vec::with_capacity(years as usize);

    for year in 1..=years {
        let fee = balance * annual_fee_rate;
        total_fees_paid += fee;
        balance = balance * (1.0 + annual_growth_rate) - fee;
        yearly.push(YearlyFeePoint {
            year,
            fee_charged: fee,
            ending_balance: balance,
        });
    }

    FeeProjection {
        total_fees_paid,
        yearly,
    }
}

/// Adds `contribution` at the start of each month and compounds the month's return on top.
pub fn compound_monthly_contributions(
    starting_value: f64,
    contribution: f64,
    monthly_rate: f64,
    months: u32,
) -> f64 {
    (0..months).fold(starting_value, |value, _| {
        (value + contribution) * (1.0 + monthly_rate)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, proptest};

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn fee_rate_guards_empty_balance() {
        assert_eq!(fee_rate_of(0.0, 51.0), 0.0);
        assert_eq!(fee_rate_of(-10.0, 51.0), 0.0);
        assert_approx(fee_rate_of(15_000.0, 51.0), 0.0034);
    }

    #[test]
    fn oracle_zero_growth_trace_matches_hand_calculation() {
        let projection = project_fees_over_time(1_000.0, 0.10, 0.0, 3);
        assert_approx(projection.total_fees_paid, 271.0);
        let fees = projection
            .yearly
            .iter()
            .map(|p| p.fee_charged)
            .collect::<Vec<_>>();
        let balances = projection
            .yearly
            .iter()
            .map(|p| p.ending_balance)
            .collect::<Vec<_>>();
        for (actual, expected) in fees.iter().zip([100.0, 90.0, 81.0]) {
            assert_approx(*actual, expected);
        }
        for (actual, expected) in balances.iter().zip([900.0, 810.0, 729.0]) {
            assert_approx(*actual, expected);
        }
        assert_eq!(projection.yearly[2].year, 3);
    }

    #[test]
    fn fee_is_deducted_after_growth_is_applied_to_opening_balance() {
        // 1000 * 1.10 - 20 = 1080; fee-then-grow on the remainder would give 1078.
        let projection = project_fees_over_time(1_000.0, 0.02, 0.10, 1);
        assert_approx(projection.yearly[0].fee_charged, 20.0);
        assert_approx(projection.yearly[0].ending_balance, 1_080.0);
    }

    #[test]
    fn zero_years_yields_empty_trace() {
        let projection = project_fees_over_time(25_000.0, 0.0005, 0.09, 0);
        assert!(projection.yearly.is_empty());
        assert_eq!(projection.total_fees_paid, 0.0);
    }

    #[test]
    fn robo_default_balances_match_reference_totals() {
        let self_directed = project_fees_over_time(25_000.0, fee_rate_of(25_000.0, 12.5), 0.09, 10);
        let robo = project_fees_over_time(15_000.0, fee_rate_of(15_000.0, 51.0), 0.09, 10);
        assert!((self_directed.total_fees_paid - 189.459).abs() < 1e-2);
        assert!((robo.total_fees_paid - 762.378).abs() < 1e-2);
    }

    #[test]
    fn contributions_compound_as_annuity_due() {
        assert_approx(compound_monthly_contributions(0.0, 100.0, 0.0, 12), 1_200.0);
        assert_approx(compound_monthly_contributions(0.0, 100.0, 0.01, 1), 101.0);
        assert_approx(compound_monthly_contributions(0.0, 100.0, 0.01, 2), 203.01);
        assert_approx(compound_monthly_contributions(50.0, 0.0, 0.5, 0), 50.0);

        let rate: f64 = 0.09 / 12.0;
        let closed_form = 200.0 * ((1.0 + rate).powi(240) - 1.0) / rate * (1.0 + rate);
        let iterated = compound_monthly_contributions(0.0, 200.0, rate, 240);
        assert!((iterated - closed_form).abs() < 1e-4);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(48))]

        #[test]
        fn prop_zero_growth_fees_never_increase(
            balance in 1u32..5_000_000,
            fee_bp in 1u32..5_000,
            years in 2u32..40,
        ) {
            let projection =
                project_fees_over_time(balance as f64, fee_bp as f64 / 10_000.0, 0.0, years);
            for pair in projection.yearly.windows(2) {
                prop_assert!(pair[1].fee_charged <= pair[0].fee_charged);
            }
            let summed = projection.yearly.iter().map(|p| p.fee_charged).sum::<f64>();
            prop_assert!((summed - projection.total_fees_paid).abs() <= 1e-6 * balance as f64);
        }
    }
}
