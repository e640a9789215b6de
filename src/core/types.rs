use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentFrequency {
    Monthly,
    BiWeekly,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PayoffStatus {
    PaidOff,
    NotPaidOffWithinCap,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Payoff,
    Invest,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationResult {
    pub periods: u32,
    pub total_interest: f64,
    pub ending_balance: f64,
    pub status: PayoffStatus,
}

impl AmortizationResult {
    pub fn is_paid_off(&self) -> bool {
        self.status == PayoffStatus::PaidOff
    }
}

#[derive(Debug, Clone)]
pub struct MortgageInputs {
    pub principal: f64,
    pub annual_interest_rate: f64,
    /// Total base payment: principal, interest and escrow.
    pub monthly_payment: f64,
    pub escrow_amount: f64,
    pub extra_principal: f64,
    pub extra_escrow: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentBreakdown {
    pub principal: f64,
    pub interest: f64,
    pub escrow: f64,
    pub base_total: f64,
    pub with_extras: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Savings {
    pub interest_saved: f64,
    pub periods_shaved: i64,
    pub years_saved: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSummary {
    pub frequency: PaymentFrequency,
    pub periods: u32,
    pub years: f64,
    pub total_interest: f64,
    pub total_paid: f64,
    pub ending_balance: f64,
    pub status: PayoffStatus,
    pub extra_principal_total: f64,
    pub escrow_total: f64,
    pub extra_escrow_total: f64,
    pub savings: Option<Savings>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageScenarios {
    pub breakdown: PaymentBreakdown,
    pub base: ScenarioSummary,
    pub extra_principal: ScenarioSummary,
    pub both: ScenarioSummary,
    pub biweekly: ScenarioSummary,
    pub biweekly_with_extra: ScenarioSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyFeePoint {
    pub year: u32,
    pub fee_charged: f64,
    pub ending_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeProjection {
    pub total_fees_paid: f64,
    pub yearly: Vec<YearlyFeePoint>,
}

#[derive(Debug, Clone, Copy)]
pub struct AccountState {
    pub balance: f64,
    pub annual_fee: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct RoboAssumptions {
    pub hourly_value: f64,
    pub hours_per_year: f64,
    pub tax_bracket: f64,
    pub tlh_benefit: f64,
    pub expected_growth: f64,
    pub years_to_project: u32,
}

#[derive(Debug, Clone)]
pub struct RoboAdvisorInputs {
    pub self_directed: AccountState,
    pub robo_advisor: AccountState,
    pub assumptions: RoboAssumptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountCost {
    pub annual_fee: f64,
    pub fee_rate: f64,
    pub projection: FeeProjection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoboAdvisorComparison {
    pub self_directed: AccountCost,
    pub robo_advisor: AccountCost,
    pub time_savings_value: f64,
    pub tlh_value: f64,
    pub total_benefits: f64,
    pub annual_fee_difference: f64,
    pub net_value: f64,
    pub is_worth_it: bool,
    pub fee_difference_over_time: f64,
}

#[derive(Debug, Clone)]
pub struct PayoffVsInvestInputs {
    pub mortgage_balance: f64,
    pub mortgage_rate: f64,
    pub monthly_payment: f64,
    pub extra_payment: f64,
    pub investment_return: f64,
    pub tax_bracket: f64,
    pub years_to_compare: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffScenario {
    pub interest_paid: f64,
    pub months_paid_off: Option<u32>,
    pub months_reported: u32,
    pub years_paid_off: f64,
    pub remaining_balance: f64,
    pub investment_value: f64,
    pub net_worth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestScenario {
    pub interest_paid: f64,
    pub remaining_balance: f64,
    pub investment_value: f64,
    pub net_worth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffVsInvestComparison {
    pub payoff: PayoffScenario,
    pub invest: InvestScenario,
    pub mortgage_interest_deduction: f64,
    pub net_difference: f64,
    pub difference_magnitude: f64,
    pub better_choice: Strategy,
    pub guaranteed_return: f64,
    pub expected_return: f64,
}
