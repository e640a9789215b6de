mod amortization;
mod comparison;
mod mortgage;
mod projection;
mod robo;
mod types;

pub use amortization::{amortize_at_frequency, simulate_amortization};
pub use comparison::compare_strategies;
pub use mortgage::{build_scenarios, payment_breakdown};
pub use projection::{compound_monthly_contributions, fee_rate_of, project_fees_over_time};
pub use robo::compare_robo_advisor;
pub use types::{
    AccountCost, AccountState, AmortizationResult, FeeProjection, InvestScenario, MortgageInputs,
    MortgageScenarios, PaymentBreakdown, PaymentFrequency, PayoffScenario, PayoffStatus,
    PayoffVsInvestComparison, PayoffVsInvestInputs, RoboAdvisorComparison, RoboAdvisorInputs,
    RoboAssumptions, Savings, ScenarioSummary, Strategy, YearlyFeePoint,
};
