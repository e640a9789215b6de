use super::amortization::amortize_at_frequency;
use super::types::{
    MortgageInputs, MortgageScenarios, PaymentBreakdown, PaymentFrequency, Savings,
    ScenarioSummary,
};

#[derive(Debug, Clone, Copy)]
struct ScenarioPlan {
    frequency: PaymentFrequency,
    extra_principal: f64,
    extra_escrow: f64,
}

pub fn payment_breakdown(inputs: &MortgageInputs) -> PaymentBreakdown {
    let interest =
        inputs.principal * PaymentFrequency::Monthly.periodic_rate(inputs.annual_interest_rate);
    PaymentBreakdown {
        principal: inputs.monthly_payment - inputs.escrow_amount - interest,
        interest,
        escrow: inputs.escrow_amount,
        base_total: inputs.monthly_payment,
        with_extras: inputs.monthly_payment + inputs.extra_principal + inputs.extra_escrow,
    }
}

pub fn build_scenarios(inputs: &MortgageInputs) -> MortgageScenarios {
    let base = run_scenario(
        inputs,
        ScenarioPlan {
            frequency: PaymentFrequency::Monthly,
            extra_principal: 0.0,
            extra_escrow: 0.0,
        },
    );
    let extra_principal = run_scenario(
        inputs,
        ScenarioPlan {
            frequency: PaymentFrequency::Monthly,
            extra_principal: inputs.extra_principal,
            extra_escrow: 0.0,
        },
    );
    let both = run_scenario(
        inputs,
        ScenarioPlan {
            frequency: PaymentFrequency::Monthly,
            extra_principal: inputs.extra_principal,
            extra_escrow: inputs.extra_escrow,
        },
    );
    let biweekly = run_scenario(
        inputs,
        ScenarioPlan {
            frequency: PaymentFrequency::BiWeekly,
            extra_principal: 0.0,
            extra_escrow: 0.0,
        },
    );
    let biweekly_with_extra = run_scenario(
        inputs,
        ScenarioPlan {
            frequency: PaymentFrequency::BiWeekly,
            extra_principal: inputs.extra_principal,
            extra_escrow: 0.0,
        },
    );

    MortgageScenarios {
        breakdown: payment_breakdown(inputs),
        extra_principal: with_savings(extra_principal, &base),
        both: with_savings(both, &base),
        biweekly: with_savings(biweekly, &base),
        biweekly_with_extra: with_savings(biweekly_with_extra, &base),
        base,
    }
}

fn run_scenario(inputs: &MortgageInputs, plan: ScenarioPlan) -> ScenarioSummary {
    let share = plan.frequency.share_of_monthly();
    let principal_and_interest = (inputs.monthly_payment - inputs.escrow_amount) * share;
    let extra_principal = plan.extra_principal * share;
    let escrow = inputs.escrow_amount * share;
    let extra_escrow = plan.extra_escrow * share;

    let result = amortize_at_frequency(
        inputs.principal,
        inputs.annual_interest_rate,
        principal_and_interest + extra_principal,
        plan.frequency,
    );

    // Side channels accrue over this scenario's own period count.
    let periods = result.periods as f64;
    let escrow_total = escrow * periods;
    let extra_escrow_total = extra_escrow * periods;
    let principal_repaid = inputs.principal - result.ending_balance;

    ScenarioSummary {
        frequency: plan.frequency,
        periods: result.periods,
        years: plan.frequency.years_for(result.periods),
        total_interest: result.total_interest,
        total_paid: principal_repaid + result.total_interest + escrow_total + extra_escrow_total,
        ending_balance: result.ending_balance,
        status: result.status,
        extra_principal_total: extra_principal * periods,
        escrow_total,
        extra_escrow_total,
        savings: None,
    }
}

fn with_savings(mut scenario: ScenarioSummary, baseline: &ScenarioSummary) -> ScenarioSummary {
    let baseline_periods = (baseline.years * scenario.frequency.periods_per_year() as f64).round();
    scenario.savings = Some(Savings {
        interest_saved: baseline.total_interest - scenario.total_interest,
        periods_shaved: baseline_periods as i64 - i64::from(scenario.periods),
        years_saved: baseline.years - scenario.years,
    });
    scenario
}
