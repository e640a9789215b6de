use super::projection::{fee_rate_of, project_fees_over_time};
use super::types::{AccountCost, AccountState, RoboAdvisorComparison, RoboAdvisorInputs};

pub fn compare_robo_advisor(inputs: &RoboAdvisorInputs) -> RoboAdvisorComparison {
    let assumptions = inputs.assumptions;
    let self_directed = account_cost(
        inputs.self_directed,
        assumptions.expected_growth,
        assumptions.years_to_project,
    );
    let robo_advisor = account_cost(
        inputs.robo_advisor,
        assumptions.expected_growth,
        assumptions.years_to_project,
    );

    let time_savings_value = assumptions.hourly_value * assumptions.hours_per_year;
    let tlh_value =
        assumptions.tlh_benefit * inputs.robo_advisor.balance * assumptions.tax_bracket;
    let total_benefits = time_savings_value + tlh_value;

    let annual_fee_difference = robo_advisor.annual_fee - self_directed.annual_fee;
    let net_value = total_benefits - annual_fee_difference;
    let fee_difference_over_time =
        robo_advisor.projection.total_fees_paid - self_directed.projection.total_fees_paid;

    RoboAdvisorComparison {
        self_directed,
        robo_advisor,
        time_savings_value,
        tlh_value,
        total_benefits,
        annual_fee_difference,
        net_value,
        is_worth_it: net_value > 0.0,
        fee_difference_over_time,
    }
}

fn account_cost(account: AccountState, growth: f64, years: u32) -> AccountCost {
    let fee_rate = fee_rate_of(account.balance, account.annual_fee);
    AccountCost {
        annual_fee: account.annual_fee,
        fee_rate,
        projection: project_fees_over_time(account.balance, fee_rate, growth, years),
    }
}
