use super::amortization::simulate_amortization;
use super::projection::compound_monthly_contributions;
use super::types::{
    InvestScenario, PaymentFrequency, PayoffScenario, PayoffVsInvestComparison,
    PayoffVsInvestInputs, Strategy,
};

/// Compares throwing the extra payment at the mortgage against investing it.
///
/// The payoff path amortizes with `monthly_payment + extra_payment` and, once
/// the loan is gone, invests that whole amount for the rest of the horizon.
/// The invest path keeps the base payment and invests `extra_payment` every
/// month of the horizon. `mortgage_interest_deduction` is
/// `(payoff interest - invest interest) * tax_bracket` and is added to the
/// invest side as-is.
pub fn compare_strategies(inputs: &PayoffVsInvestInputs) -> PayoffVsInvestComparison {
    let monthly = PaymentFrequency::Monthly;
    let monthly_rate = monthly.periodic_rate(inputs.mortgage_rate);
    let monthly_invest_rate = monthly.periodic_rate(inputs.investment_return);
    let horizon_months = inputs.years_to_compare * monthly.periods_per_year();

    let payoff = payoff_scenario(inputs, monthly_rate, monthly_invest_rate, horizon_months);
    let invest = invest_scenario(inputs, monthly_rate, monthly_invest_rate, horizon_months);

    let mortgage_interest_deduction =
        (payoff.interest_paid - invest.interest_paid) * inputs.tax_bracket;
    let net_difference = invest.net_worth - payoff.net_worth + mortgage_interest_deduction;
    let better_choice = if net_difference > 0.0 {
        Strategy::Invest
    } else {
        Strategy::Payoff
    };

    PayoffVsInvestComparison {
        payoff,
        invest,
        mortgage_interest_deduction,
        net_difference,
        difference_magnitude: net_difference.abs(),
        better_choice,
        guaranteed_return: inputs.mortgage_rate,
        expected_return: inputs.investment_return,
    }
}

fn payoff_scenario(
    inputs: &PayoffVsInvestInputs,
    monthly_rate: f64,
    monthly_invest_rate: f64,
    horizon_months: u32,
) -> PayoffScenario {
    let freed_cash_flow = inputs.monthly_payment + inputs.extra_payment;
    let loan = simulate_amortization(
        inputs.mortgage_balance,
        monthly_rate,
        freed_cash_flow,
        horizon_months,
    );

    let months_paid_off = loan.is_paid_off().then_some(loan.periods);
    let investment_value = match months_paid_off {
        Some(month) if month < horizon_months => compound_monthly_contributions(
            0.0,
            freed_cash_flow,
            monthly_invest_rate,
            horizon_months - month,
        ),
        _ => 0.0,
    };
    let months_reported = months_paid_off.unwrap_or(horizon_months);

    PayoffScenario {
        interest_paid: loan.total_interest,
        months_paid_off,
        months_reported,
        years_paid_off: PaymentFrequency::Monthly.years_for(months_reported),
        remaining_balance: loan.ending_balance,
        investment_value,
        net_worth: investment_value - loan.ending_balance,
    }
}

fn invest_scenario(
    inputs: &PayoffVsInvestInputs,
    monthly_rate: f64,
    monthly_invest_rate: f64,
    horizon_months: u32,
) -> InvestScenario {
    let loan = simulate_amortization(
        inputs.mortgage_balance,
        monthly_rate,
        inputs.monthly_payment,
        horizon_months,
    );
    let investment_value = compound_monthly_contributions(
        0.0,
        inputs.extra_payment,
        monthly_invest_rate,
        horizon_months,
    );

    InvestScenario {
        interest_paid: loan.total_interest,
        remaining_balance: loan.ending_balance,
        investment_value,
        net_worth: investment_value - loan.ending_balance,
    }
}
