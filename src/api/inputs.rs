use clap::{Args, ValueEnum};
use serde::Deserialize;

use crate::core::{
    AccountState, AmortizationResult, MortgageInputs, PaymentFrequency, PayoffVsInvestInputs,
    RoboAdvisorInputs, RoboAssumptions, simulate_amortization,
};
use crate::error::InputError;

const MAX_YEARS: u32 = 100;
const MAX_PERIODS: u32 = MAX_YEARS * 26;

const DEFAULT_PRINCIPAL: f64 = 300_000.0;
const DEFAULT_INTEREST_RATE: f64 = 6.5;
const DEFAULT_MONTHLY_PAYMENT: f64 = 1_896.0;
const DEFAULT_ESCROW: f64 = 300.0;
const DEFAULT_EXTRA_PRINCIPAL: f64 = 100.0;
const DEFAULT_EXTRA_ESCROW: f64 = 50.0;

const DEFAULT_MORTGAGE_BALANCE: f64 = 280_000.0;
const DEFAULT_EXTRA_PAYMENT: f64 = 200.0;
const DEFAULT_INVESTMENT_RETURN: f64 = 9.0;
const DEFAULT_TAX_BRACKET: f64 = 24.0;
const DEFAULT_YEARS_TO_COMPARE: u32 = 20;

const DEFAULT_SELF_DIRECTED_BALANCE: f64 = 25_000.0;
const DEFAULT_SELF_DIRECTED_FEES: f64 = 12.5;
const DEFAULT_ROBO_BALANCE: f64 = 15_000.0;
const DEFAULT_ROBO_FEES: f64 = 51.0;
const DEFAULT_HOURLY_VALUE: f64 = 50.0;
const DEFAULT_HOURS_PER_YEAR: f64 = 4.0;
const DEFAULT_TLH_BENEFIT: f64 = 0.25;
const DEFAULT_EXPECTED_GROWTH: f64 = 9.0;
const DEFAULT_YEARS_TO_PROJECT: u32 = 10;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum CliFrequency {
    Monthly,
    BiWeekly,
}

impl From<CliFrequency> for PaymentFrequency {
    fn from(value: CliFrequency) -> Self {
        match value {
            CliFrequency::Monthly => PaymentFrequency::Monthly,
            CliFrequency::BiWeekly => PaymentFrequency::BiWeekly,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiFrequency {
    Monthly,
    #[serde(alias = "biweekly", alias = "biWeekly", alias = "bi_weekly")]
    BiWeekly,
}

impl From<ApiFrequency> for CliFrequency {
    fn from(value: ApiFrequency) -> Self {
        match value {
            ApiFrequency::Monthly => CliFrequency::Monthly,
            ApiFrequency::BiWeekly => CliFrequency::BiWeekly,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct AmortizationArgs {
    #[arg(long, default_value_t = DEFAULT_PRINCIPAL)]
    pub principal: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_INTEREST_RATE,
        help = "Annual interest rate in percent, e.g. 6.5"
    )]
    pub interest_rate: f64,
    #[arg(long, default_value_t = DEFAULT_MONTHLY_PAYMENT, help = "Payment per period")]
    pub payment: f64,
    #[arg(long, value_enum, default_value_t = CliFrequency::Monthly)]
    pub frequency: CliFrequency,
    #[arg(long, help = "Period cap; defaults to 30 years at the chosen frequency")]
    pub max_periods: Option<u32>,
}

#[derive(Args, Debug, Clone)]
pub struct MortgageArgs {
    #[arg(long, default_value_t = DEFAULT_PRINCIPAL, help = "Current principal balance")]
    pub principal: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_INTEREST_RATE,
        help = "Annual interest rate in percent"
    )]
    pub interest_rate: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_MONTHLY_PAYMENT,
        help = "Total base monthly payment (principal + interest + escrow)"
    )]
    pub monthly_payment: f64,
    #[arg(long, default_value_t = DEFAULT_ESCROW, help = "Monthly escrow for taxes and insurance")]
    pub escrow_amount: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_EXTRA_PRINCIPAL,
        help = "Additional monthly payment toward the loan balance"
    )]
    pub extra_principal: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_EXTRA_ESCROW,
        help = "Additional monthly escrow buffer; does not reduce the loan"
    )]
    pub extra_escrow: f64,
}

#[derive(Args, Debug, Clone)]
pub struct RoboArgs {
    #[arg(long, default_value_t = DEFAULT_SELF_DIRECTED_BALANCE)]
    pub self_directed_balance: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_SELF_DIRECTED_FEES,
        help = "Total annual fees on the self-directed account"
    )]
    pub self_directed_fees: f64,
    #[arg(long, default_value_t = DEFAULT_ROBO_BALANCE)]
    pub robo_balance: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_ROBO_FEES,
        help = "Total annual fees on the robo-advisor account"
    )]
    pub robo_fees: f64,
    #[arg(long, default_value_t = DEFAULT_HOURLY_VALUE, help = "Value of an hour of your time")]
    pub hourly_value: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_HOURS_PER_YEAR,
        help = "Hours per year saved by not managing the account yourself"
    )]
    pub hours_per_year: f64,
    #[arg(long, default_value_t = DEFAULT_TAX_BRACKET, help = "Marginal tax bracket in percent")]
    pub tax_bracket: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_TLH_BENEFIT,
        help = "Estimated tax-loss-harvesting benefit in percent of the robo balance"
    )]
    pub tlh_benefit: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_EXPECTED_GROWTH,
        help = "Expected annual growth in percent"
    )]
    pub expected_growth: f64,
    #[arg(long, default_value_t = DEFAULT_YEARS_TO_PROJECT)]
    pub years: u32,
}

#[derive(Args, Debug, Clone)]
pub struct PayoffArgs {
    #[arg(long, default_value_t = DEFAULT_MORTGAGE_BALANCE)]
    pub mortgage_balance: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_INTEREST_RATE,
        help = "Mortgage interest rate in percent"
    )]
    pub mortgage_rate: f64,
    #[arg(long, default_value_t = DEFAULT_MONTHLY_PAYMENT)]
    pub monthly_payment: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_EXTRA_PAYMENT,
        help = "Monthly amount to either pay extra or invest"
    )]
    pub extra_payment: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_INVESTMENT_RETURN,
        help = "Expected annual investment return in percent"
    )]
    pub investment_return: f64,
    #[arg(long, default_value_t = DEFAULT_TAX_BRACKET, help = "Marginal tax bracket in percent")]
    pub tax_bracket: f64,
    #[arg(long, default_value_t = DEFAULT_YEARS_TO_COMPARE)]
    pub years: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AmortizationPayload {
    principal: Option<f64>,
    interest_rate: Option<f64>,
    payment: Option<f64>,
    frequency: Option<ApiFrequency>,
    max_periods: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MortgagePayload {
    principal: Option<f64>,
    interest_rate: Option<f64>,
    monthly_payment: Option<f64>,
    escrow_amount: Option<f64>,
    extra_principal: Option<f64>,
    extra_escrow: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoboPayload {
    self_directed_balance: Option<f64>,
    #[serde(alias = "selfDirectedAnnualFees")]
    self_directed_fees: Option<f64>,
    robo_balance: Option<f64>,
    #[serde(alias = "roboAnnualFees")]
    robo_fees: Option<f64>,
    hourly_value: Option<f64>,
    hours_per_year: Option<f64>,
    tax_bracket: Option<f64>,
    #[serde(alias = "estimatedTLHBenefit", alias = "tlhBenefit")]
    estimated_tlh_benefit: Option<f64>,
    expected_growth: Option<f64>,
    years_to_project: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PayoffPayload {
    mortgage_balance: Option<f64>,
    mortgage_rate: Option<f64>,
    monthly_payment: Option<f64>,
    extra_payment: Option<f64>,
    investment_return: Option<f64>,
    tax_bracket: Option<f64>,
    years_to_compare: Option<u32>,
}

/// A fully resolved call into the amortization primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmortizationRequest {
    pub frequency: PaymentFrequency,
    pub principal: f64,
    pub periodic_rate: f64,
    pub periodic_payment: f64,
    pub max_periods: u32,
}

impl AmortizationRequest {
    pub fn simulate(&self) -> AmortizationResult {
        simulate_amortization(
            self.principal,
            self.periodic_rate,
            self.periodic_payment,
            self.max_periods,
        )
    }
}

fn finite(flag: &'static str, value: f64) -> Result<f64, InputError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::NonFinite { flag })
    }
}

fn percent(flag: &'static str, value: f64) -> Result<f64, InputError> {
    Ok(finite(flag, value)? / 100.0)
}

fn at_most(flag: &'static str, value: u32, max: u32) -> Result<u32, InputError> {
    if value <= max {
        Ok(value)
    } else {
        Err(InputError::AboveCeiling { flag, max })
    }
}

pub fn build_amortization_request(
    args: AmortizationArgs,
) -> Result<AmortizationRequest, InputError> {
    let frequency = PaymentFrequency::from(args.frequency);
    let max_periods = match args.max_periods {
        Some(cap) => at_most("--max-periods", cap, MAX_PERIODS)?,
        None => frequency.max_periods(),
    };

    Ok(AmortizationRequest {
        frequency,
        principal: finite("--principal", args.principal)?,
        periodic_rate: frequency.periodic_rate(percent("--interest-rate", args.interest_rate)?),
        periodic_payment: finite("--payment", args.payment)?,
        max_periods,
    })
}

pub fn build_mortgage_inputs(args: MortgageArgs) -> Result<MortgageInputs, InputError> {
    Ok(MortgageInputs {
        principal: finite("--principal", args.principal)?,
        annual_interest_rate: percent("--interest-rate", args.interest_rate)?,
        monthly_payment: finite("--monthly-payment", args.monthly_payment)?,
        escrow_amount: finite("--escrow-amount", args.escrow_amount)?,
        extra_principal: finite("--extra-principal", args.extra_principal)?,
        extra_escrow: finite("--extra-escrow", args.extra_escrow)?,
    })
}

pub fn build_robo_inputs(args: RoboArgs) -> Result<RoboAdvisorInputs, InputError> {
    Ok(RoboAdvisorInputs {
        self_directed: AccountState {
            balance: finite("--self-directed-balance", args.self_directed_balance)?,
            annual_fee: finite("--self-directed-fees", args.self_directed_fees)?,
        },
        robo_advisor: AccountState {
            balance: finite("--robo-balance", args.robo_balance)?,
            annual_fee: finite("--robo-fees", args.robo_fees)?,
        },
        assumptions: RoboAssumptions {
            hourly_value: finite("--hourly-value", args.hourly_value)?,
            hours_per_year: finite("--hours-per-year", args.hours_per_year)?,
            tax_bracket: percent("--tax-bracket", args.tax_bracket)?,
            tlh_benefit: percent("--tlh-benefit", args.tlh_benefit)?,
            expected_growth: percent("--expected-growth", args.expected_growth)?,
            years_to_project: at_most("--years", args.years, MAX_YEARS)?,
        },
    })
}

pub fn build_payoff_inputs(args: PayoffArgs) -> Result<PayoffVsInvestInputs, InputError> {
    Ok(PayoffVsInvestInputs {
        mortgage_balance: finite("--mortgage-balance", args.mortgage_balance)?,
        mortgage_rate: percent("--mortgage-rate", args.mortgage_rate)?,
        monthly_payment: finite("--monthly-payment", args.monthly_payment)?,
        extra_payment: finite("--extra-payment", args.extra_payment)?,
        investment_return: percent("--investment-return", args.investment_return)?,
        tax_bracket: percent("--tax-bracket", args.tax_bracket)?,
        years_to_compare: at_most("--years", args.years, MAX_YEARS)?,
    })
}

fn default_amortization_args() -> AmortizationArgs {
    AmortizationArgs {
        principal: DEFAULT_PRINCIPAL,
        interest_rate: DEFAULT_INTEREST_RATE,
        payment: DEFAULT_MONTHLY_PAYMENT,
        frequency: CliFrequency::Monthly,
        max_periods: None,
    }
}

fn default_mortgage_args() -> MortgageArgs {
    MortgageArgs {
        principal: DEFAULT_PRINCIPAL,
        interest_rate: DEFAULT_INTEREST_RATE,
        monthly_payment: DEFAULT_MONTHLY_PAYMENT,
        escrow_amount: DEFAULT_ESCROW,
        extra_principal: DEFAULT_EXTRA_PRINCIPAL,
        extra_escrow: DEFAULT_EXTRA_ESCROW,
    }
}

fn default_robo_args() -> RoboArgs {
    RoboArgs {
        self_directed_balance: DEFAULT_SELF_DIRECTED_BALANCE,
        self_directed_fees: DEFAULT_SELF_DIRECTED_FEES,
        robo_balance: DEFAULT_ROBO_BALANCE,
        robo_fees: DEFAULT_ROBO_FEES,
        hourly_value: DEFAULT_HOURLY_VALUE,
        hours_per_year: DEFAULT_HOURS_PER_YEAR,
        tax_bracket: DEFAULT_TAX_BRACKET,
        tlh_benefit: DEFAULT_TLH_BENEFIT,
        expected_growth: DEFAULT_EXPECTED_GROWTH,
        years: DEFAULT_YEARS_TO_PROJECT,
    }
}

fn default_payoff_args() -> PayoffArgs {
    PayoffArgs {
        mortgage_balance: DEFAULT_MORTGAGE_BALANCE,
        mortgage_rate: DEFAULT_INTEREST_RATE,
        monthly_payment: DEFAULT_MONTHLY_PAYMENT,
        extra_payment: DEFAULT_EXTRA_PAYMENT,
        investment_return: DEFAULT_INVESTMENT_RETURN,
        tax_bracket: DEFAULT_TAX_BRACKET,
        years: DEFAULT_YEARS_TO_COMPARE,
    }
}

pub fn amortization_request_from_payload(
    payload: AmortizationPayload,
) -> Result<AmortizationRequest, InputError> {
    let mut args = default_amortization_args();
    if let Some(v) = payload.principal {
        args.principal = v;
    }
    if let Some(v) = payload.interest_rate {
        args.interest_rate = v;
    }
    if let Some(v) = payload.payment {
        args.payment = v;
    }
    if let Some(v) = payload.frequency {
        args.frequency = v.into();
    }
    if let Some(v) = payload.max_periods {
        args.max_periods = Some(v);
    }
    build_amortization_request(args)
}

pub fn mortgage_inputs_from_payload(
    payload: MortgagePayload,
) -> Result<MortgageInputs, InputError> {
    let mut args = default_mortgage_args();
    if let Some(v) = payload.principal {
        args.principal = v;
    }
    if let Some(v) = payload.interest_rate {
        args.interest_rate = v;
    }
    if let Some(v) = payload.monthly_payment {
        args.monthly_payment = v;
    }
    if let Some(v) = payload.escrow_amount {
        args.escrow_amount = v;
    }
    if let Some(v) = payload.extra_principal {
        args.extra_principal = v;
    }
    if let Some(v) = payload.extra_escrow {
        args.extra_escrow = v;
    }
    build_mortgage_inputs(args)
}

pub fn robo_inputs_from_payload(payload: RoboPayload) -> Result<RoboAdvisorInputs, InputError> {
    let mut args = default_robo_args();
    if let Some(v) = payload.self_directed_balance {
        args.self_directed_balance = v;
    }
    if let Some(v) = payload.self_directed_fees {
        args.self_directed_fees = v;
    }
    if let Some(v) = payload.robo_balance {
        args.robo_balance = v;
    }
    if let Some(v) = payload.robo_fees {
        args.robo_fees = v;
    }
    if let Some(v) = payload.hourly_value {
        args.hourly_value = v;
    }
    if let Some(v) = payload.hours_per_year {
        args.hours_per_year = v;
    }
    if let Some(v) = payload.tax_bracket {
        args.tax_bracket = v;
    }
    if let Some(v) = payload.estimated_tlh_benefit {
        args.tlh_benefit = v;
    }
    if let Some(v) = payload.expected_growth {
        args.expected_growth = v;
    }
    if let Some(v) = payload.years_to_project {
        args.years = v;
    }
    build_robo_inputs(args)
}

pub fn payoff_inputs_from_payload(
    payload: PayoffPayload,
) -> Result<PayoffVsInvestInputs, InputError> {
    let mut args = default_payoff_args();
    if let Some(v) = payload.mortgage_balance {
        args.mortgage_balance = v;
    }
    if let Some(v) = payload.mortgage_rate {
        args.mortgage_rate = v;
    }
    if let Some(v) = payload.monthly_payment {
        args.monthly_payment = v;
    }
    if let Some(v) = payload.extra_payment {
        args.extra_payment = v;
    }
    if let Some(v) = payload.investment_return {
        args.investment_return = v;
    }
    if let Some(v) = payload.tax_bracket {
        args.tax_bracket = v;
    }
    if let Some(v) = payload.years_to_compare {
        args.years = v;
    }
    build_payoff_inputs(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn build_mortgage_inputs_converts_percent_rate() {
        let inputs = build_mortgage_inputs(default_mortgage_args()).expect("valid inputs");
        assert_approx(inputs.annual_interest_rate, 0.065);
        assert_approx(inputs.principal, 300_000.0);
        assert_approx(inputs.escrow_amount, 300.0);
    }

    #[test]
    fn build_mortgage_inputs_rejects_nan_and_names_the_flag() {
        let mut args = default_mortgage_args();
        args.extra_escrow = f64::NAN;
        let err = build_mortgage_inputs(args).expect_err("must reject NaN");
        assert!(err.to_string().contains("--extra-escrow"));
    }

    #[test]
    fn build_mortgage_inputs_accepts_negative_values() {
        let mut args = default_mortgage_args();
        args.principal = -1_000.0;
        args.extra_principal = -50.0;
        let inputs = build_mortgage_inputs(args).expect("negative numbers are not rejected");
        assert_approx(inputs.principal, -1_000.0);
    }

    #[test]
    fn build_payoff_inputs_rejects_horizon_above_ceiling() {
        let mut args = default_payoff_args();
        args.years = 101;
        let err = build_payoff_inputs(args).expect_err("must reject long horizon");
        assert!(err.to_string().contains("--years"));
    }

    #[test]
    fn build_amortization_request_defaults_cap_from_frequency() {
        let mut args = default_amortization_args();
        args.frequency = CliFrequency::BiWeekly;
        let request = build_amortization_request(args).expect("valid request");
        assert_eq!(request.max_periods, 780);
        assert_approx(request.periodic_rate, 0.065 / 26.0);
    }

    #[test]
    fn build_amortization_request_rejects_infinite_payment() {
        let mut args = default_amortization_args();
        args.payment = f64::INFINITY;
        let err = build_amortization_request(args).expect_err("must reject infinity");
        assert!(err.to_string().contains("--payment"));
    }

    #[test]
    fn amortization_payload_parses_frequency_aliases() {
        for key in ["bi-weekly", "biweekly", "biWeekly"] {
            let json = format!(r#"{{ "frequency": "{key}", "maxPeriods": 52 }}"#);
            let payload =
                serde_json::from_str::<AmortizationPayload>(&json).expect("json should parse");
            let request = amortization_request_from_payload(payload).expect("valid request");
            assert_eq!(request.frequency, PaymentFrequency::BiWeekly);
            assert_eq!(request.max_periods, 52);
        }
    }

    #[test]
    fn mortgage_payload_parses_web_keys_and_keeps_defaults() {
        let json = r#"{
          "principal": 250000,
          "interestRate": 5.25,
          "extraPrincipal": 250
        }"#;
        let payload = serde_json::from_str::<MortgagePayload>(json).expect("json should parse");
        let inputs = mortgage_inputs_from_payload(payload).expect("valid inputs");

        assert_approx(inputs.principal, 250_000.0);
        assert_approx(inputs.annual_interest_rate, 0.0525);
        assert_approx(inputs.extra_principal, 250.0);
        assert_approx(inputs.monthly_payment, 1_896.0);
        assert_approx(inputs.extra_escrow, 50.0);
    }

    #[test]
    fn robo_payload_accepts_original_tlh_key() {
        let json = r#"{
          "selfDirectedBalance": 40000,
          "roboAnnualFees": 100,
          "estimatedTLHBenefit": 0.5,
          "yearsToProject": 15
        }"#;
        let payload = serde_json::from_str::<RoboPayload>(json).expect("json should parse");
        let inputs = robo_inputs_from_payload(payload).expect("valid inputs");

        assert_approx(inputs.self_directed.balance, 40_000.0);
        assert_approx(inputs.robo_advisor.annual_fee, 100.0);
        assert_approx(inputs.assumptions.tlh_benefit, 0.005);
        assert_approx(inputs.assumptions.tax_bracket, 0.24);
        assert_eq!(inputs.assumptions.years_to_project, 15);
    }

    #[test]
    fn payoff_payload_parses_web_keys() {
        let json = r#"{
          "mortgageBalance": 200000,
          "mortgageRate": 4,
          "investmentReturn": 7.5,
          "taxBracket": 32,
          "yearsToCompare": 25
        }"#;
        let payload = serde_json::from_str::<PayoffPayload>(json).expect("json should parse");
        let inputs = payoff_inputs_from_payload(payload).expect("valid inputs");

        assert_approx(inputs.mortgage_balance, 200_000.0);
        assert_approx(inputs.mortgage_rate, 0.04);
        assert_approx(inputs.investment_return, 0.075);
        assert_approx(inputs.tax_bracket, 0.32);
        assert_approx(inputs.extra_payment, 200.0);
        assert_eq!(inputs.years_to_compare, 25);
    }
}
