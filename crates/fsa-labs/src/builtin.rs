//! Built-in computations for the academy's calculator labs.

use crate::calculation::{CalculationRegistry, InputValues, LabResult, Metric};
use crate::error::CalculationError;

impl CalculationRegistry {
    /// Registry preloaded with every built-in computation.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_fn("emergency-fund", emergency_fund);
        registry.register_fn("compound-growth", compound_growth);
        registry.register_fn("debt-payoff", debt_payoff);
        registry.register_fn("credit-utilization", credit_utilization);
        registry.register_fn("budget-503020", budget_503020);
        registry
    }
}

/// Target fund for `months` of `monthlyExpenses`, against `currentSavings`.
pub fn emergency_fund(inputs: &InputValues) -> Result<LabResult, CalculationError> {
    let expenses = inputs.non_negative("monthlyExpenses")?;
    let months = inputs.non_negative("months")?;
    let saved = inputs.optional_non_negative("currentSavings")?;

    let target = expenses * months;
    let gap = (target - saved).max(0.0);
    let covered = if expenses > 0.0 { saved / expenses } else { 0.0 };

    let mut gap_metric = Metric::new("Still to save", currency(gap));
    if gap > 0.0 {
        gap_metric = gap_metric.warning();
    }

    let message = if gap <= 0.0 {
        "Your emergency fund is fully funded.".to_string()
    } else {
        format!("You currently cover {covered:.1} months of expenses.")
    };

    Ok(LabResult::report(vec![
        Metric::new("Target fund", currency(target)),
        Metric::new("Current savings", currency(saved)),
        gap_metric,
    ])
    .with_message(message))
}

/// Monthly-compounded growth of `principal` plus `monthlyContribution` at
/// `annualRate` percent over `years`.
pub fn compound_growth(inputs: &InputValues) -> Result<LabResult, CalculationError> {
    let principal = inputs.non_negative("principal")?;
    let contribution = inputs.optional_non_negative("monthlyContribution")?;
    let rate = inputs.non_negative("annualRate")? / 100.0 / 12.0;
    let years = inputs.non_negative("years")?;

    let months = months_in(years);
    let mut balance = principal;
    for _ in 0..months {
        balance = balance.mul_add(1.0 + rate, contribution);
    }
    let contributed = contribution.mul_add(f64::from(months), principal);

    Ok(LabResult::report(vec![
        Metric::new("Final balance", currency(balance)),
        Metric::new("Total contributed", currency(contributed)),
        Metric::new("Growth from interest", currency(balance - contributed)),
    ]))
}

/// Months and interest to repay `balance` at `apr` percent with a fixed
/// `monthlyPayment`.
pub fn debt_payoff(inputs: &InputValues) -> Result<LabResult, CalculationError> {
    const MAX_MONTHS: u32 = 1200;

    let balance = inputs.non_negative("balance")?;
    let rate = inputs.non_negative("apr")? / 100.0 / 12.0;
    let payment = inputs.non_negative("monthlyPayment")?;

    if balance <= 0.0 {
        return Ok(LabResult::Text("No balance to pay off.".to_string()));
    }
    if payment <= balance * rate {
        return Ok(LabResult::report(vec![
            Metric::new("Months to payoff", "Never").danger(),
            Metric::new("Minimum to make progress", currency(balance * rate)),
        ])
        .with_message("Your payment does not cover the monthly interest."));
    }

    let mut remaining = balance;
    let mut interest = 0.0;
    let mut months = 0u32;
    while remaining > 0.005 && months < MAX_MONTHS {
        let charge = remaining * rate;
        interest += charge;
        remaining = (remaining + charge - payment).max(0.0);
        months += 1;
    }

    let mut interest_metric = Metric::new("Total interest", currency(interest));
    if interest > balance / 2.0 {
        interest_metric = interest_metric.warning();
    }

    Ok(LabResult::report(vec![
        Metric::new("Months to payoff", months.to_string()),
        interest_metric,
        Metric::new("Total paid", currency(balance + interest)),
    ]))
}

/// Utilization of `creditLimit` by `balance`, graded by the usual 10/30/50%
/// bands.
pub fn credit_utilization(inputs: &InputValues) -> Result<LabResult, CalculationError> {
    let balance = inputs.non_negative("balance")?;
    let limit = inputs.non_negative("creditLimit")?;
    if limit <= 0.0 {
        return Err(CalculationError::OutOfRange {
            id: "creditLimit".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    let ratio = balance / limit * 100.0;
    let mut metric = Metric::new("Utilization", format!("{ratio:.1}%"));
    let message = if ratio < 10.0 {
        "Excellent: under 10% is ideal for your score."
    } else if ratio < 30.0 {
        "Good: keep it under 30%."
    } else if ratio < 50.0 {
        metric = metric.warning();
        "Fair: paying this down will help your score."
    } else {
        metric = metric.danger();
        "High: utilization above 50% weighs on your score."
    };

    Ok(LabResult::report(vec![
        metric,
        Metric::new("Room to 30%", currency((limit * 0.3 - balance).max(0.0))),
    ])
    .with_message(message))
}

/// The 50/30/20 split of monthly `income`.
pub fn budget_503020(inputs: &InputValues) -> Result<LabResult, CalculationError> {
    let income = inputs.non_negative("income")?;
    Ok(LabResult::report(vec![
        Metric::new("Needs (50%)", currency(income * 0.5)),
        Metric::new("Wants (30%)", currency(income * 0.3)),
        Metric::new("Savings (20%)", currency(income * 0.2)),
    ]))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn months_in(years: f64) -> u32 {
    (years * 12.0).round().clamp(0.0, 1200.0) as u32
}

/// Whole-dollar amount with thousands separators, e.g. `$12,345`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn currency(amount: f64) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{}", rounded.abs() as i64);

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InputValue;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn inputs(pairs: &[(&str, f64)]) -> InputValues {
        pairs
            .iter()
            .map(|(id, value)| (*id, InputValue::Number(*value)))
            .collect()
    }

    fn metrics(result: &LabResult) -> Vec<(String, String)> {
        match result {
            LabResult::Report { metrics, .. } => metrics
                .iter()
                .map(|m| (m.label.clone(), m.value.clone()))
                .collect(),
            LabResult::Text(text) => panic!("expected report, got {text}"),
        }
    }

    #[rstest]
    #[case(0.0, "$0")]
    #[case(999.4, "$999")]
    #[case(1000.0, "$1,000")]
    #[case(1_234_567.0, "$1,234,567")]
    #[case(-2500.0, "-$2,500")]
    fn formats_currency(#[case] amount: f64, #[case] expected: &str) {
        assert_eq!(currency(amount), expected);
    }

    #[test]
    fn builtins_are_registered() {
        let registry = CalculationRegistry::with_builtins();
        assert_eq!(
            registry.names(),
            vec![
                "budget-503020",
                "compound-growth",
                "credit-utilization",
                "debt-payoff",
                "emergency-fund"
            ]
        );
    }

    #[test]
    fn emergency_fund_reports_gap() {
        let result = emergency_fund(&inputs(&[
            ("monthlyExpenses", 2000.0),
            ("months", 6.0),
            ("currentSavings", 3000.0),
        ]))
        .unwrap();
        assert_eq!(
            metrics(&result),
            vec![
                ("Target fund".into(), "$12,000".into()),
                ("Current savings".into(), "$3,000".into()),
                ("Still to save".into(), "$9,000".into()),
            ]
        );
    }

    #[test]
    fn budget_split() {
        let result = budget_503020(&inputs(&[("income", 4000.0)])).unwrap();
        assert_eq!(
            metrics(&result),
            vec![
                ("Needs (50%)".into(), "$2,000".into()),
                ("Wants (30%)".into(), "$1,200".into()),
                ("Savings (20%)".into(), "$800".into()),
            ]
        );
    }

    #[test]
    fn compound_growth_without_interest_is_contributions() {
        let result = compound_growth(&inputs(&[
            ("principal", 1000.0),
            ("monthlyContribution", 100.0),
            ("annualRate", 0.0),
            ("years", 1.0),
        ]))
        .unwrap();
        assert_eq!(metrics(&result)[0], ("Final balance".into(), "$2,200".into()));
        assert_eq!(metrics(&result)[2].1, "$0");
    }

    #[test]
    fn debt_payoff_flags_payment_below_interest() {
        let result = debt_payoff(&inputs(&[
            ("balance", 10_000.0),
            ("apr", 24.0),
            ("monthlyPayment", 100.0),
        ]))
        .unwrap();
        let LabResult::Report { metrics, .. } = result else {
            panic!("expected report");
        };
        assert_eq!(metrics[0].value, "Never");
        assert_eq!(metrics[0].kind.as_deref(), Some("danger"));
    }

    #[test]
    fn debt_payoff_without_interest() {
        let result = debt_payoff(&inputs(&[
            ("balance", 1200.0),
            ("apr", 0.0),
            ("monthlyPayment", 100.0),
        ]))
        .unwrap();
        assert_eq!(metrics(&result)[0].1, "12");
        assert_eq!(metrics(&result)[1].1, "$0");
    }

    #[rstest]
    #[case(500.0, None)]
    #[case(2000.0, None)]
    #[case(4000.0, Some("warning"))]
    #[case(8000.0, Some("danger"))]
    fn credit_utilization_bands(#[case] balance: f64, #[case] kind: Option<&str>) {
        let result = credit_utilization(&inputs(&[
            ("balance", balance),
            ("creditLimit", 10_000.0),
        ]))
        .unwrap();
        let LabResult::Report { metrics, .. } = result else {
            panic!("expected report");
        };
        assert_eq!(metrics[0].kind.as_deref(), kind);
    }

    #[test]
    fn zero_credit_limit_is_rejected() {
        assert!(matches!(
            credit_utilization(&inputs(&[("balance", 1.0), ("creditLimit", 0.0)])),
            Err(CalculationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn optional_inputs_default_to_zero_only_when_left_out() {
        let base = [("monthlyExpenses", 2000.0), ("months", 6.0)];
        let result = emergency_fund(&inputs(&base)).unwrap();
        assert_eq!(metrics(&result)[1], ("Current savings".into(), "$0".into()));

        let mut blank = inputs(&base);
        blank.insert("currentSavings", InputValue::Text("  ".into()));
        assert_eq!(emergency_fund(&blank), Ok(result));

        let mut negative = inputs(&base);
        negative.insert("currentSavings", InputValue::Number(-3000.0));
        assert!(matches!(
            emergency_fund(&negative),
            Err(CalculationError::OutOfRange { id, .. }) if id == "currentSavings"
        ));

        let mut garbled = inputs(&[("principal", 1000.0), ("annualRate", 5.0), ("years", 10.0)]);
        garbled.insert("monthlyContribution", InputValue::Text("abc".into()));
        assert!(matches!(
            compound_growth(&garbled),
            Err(CalculationError::NotNumeric { id, .. }) if id == "monthlyContribution"
        ));
    }

    #[test]
    fn missing_input_is_an_error() {
        assert_eq!(
            budget_503020(&InputValues::new()),
            Err(CalculationError::MissingInput("income".into()))
        );
    }
}
