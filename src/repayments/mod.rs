pub mod amortizing;
pub mod interest_only;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::CalculatorConfig;
use crate::decimal::Money;
use crate::errors::{CalculatorError, Result};
use crate::types::MortgageType;
use crate::validation::MortgageInput;

/// aggregate repayment figures for one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepaymentResult {
    pub mortgage_type: MortgageType,
    pub principal: Money,
    pub monthly_payment: Money,
    pub total_payment: Money,
    pub decimal_places: u32,
}

impl RepaymentResult {
    /// everything repaid above the principal
    pub fn total_interest(&self) -> Money {
        self.total_payment - self.principal
    }

    /// e.g. `£1169.18`
    pub fn monthly_display(&self) -> String {
        self.monthly_payment.to_currency(self.decimal_places)
    }

    /// e.g. `£350754.02`
    pub fn total_display(&self) -> String {
        self.total_payment.to_currency(self.decimal_places)
    }
}

/// turns validated input into repayment figures
#[derive(Debug, Clone, Default)]
pub struct RepaymentCalculator {
    config: CalculatorConfig,
}

impl RepaymentCalculator {
    pub fn new(config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// compute monthly and total repayment; the input is trusted as validated
    pub fn calculate(&self, input: &MortgageInput) -> Result<RepaymentResult> {
        let principal = input.amount().as_decimal();
        let payments = input.number_of_payments()?;
        let monthly_rate = input.annual_rate().monthly_rate().as_decimal();

        let (monthly, total) = match input.mortgage_type() {
            MortgageType::Repayment => {
                let monthly = amortizing::monthly_payment(
                    principal,
                    monthly_rate,
                    payments,
                    self.config.zero_rate_policy,
                )?;
                let total = monthly
                    .checked_mul(payments)
                    .ok_or_else(|| CalculatorError::CalculationError {
                        message: "total repayment is out of range".to_string(),
                    })?;
                (monthly, total)
            }
            MortgageType::InterestOnly => {
                let monthly = interest_only::monthly_payment(principal, monthly_rate)?;
                let total = interest_only::total_payment(principal, monthly, payments)?;
                (monthly, total)
            }
        };

        let dp = self.config.decimal_places;
        let strategy = self.config.rounding.strategy();
        let result = RepaymentResult {
            mortgage_type: input.mortgage_type(),
            principal: input.amount(),
            monthly_payment: Money::from_decimal(monthly.round_dp_with_strategy(dp, strategy)),
            total_payment: Money::from_decimal(total.round_dp_with_strategy(dp, strategy)),
            decimal_places: dp,
        };

        debug!(
            "{} over {} payments at {}: monthly {}, total {}",
            result.mortgage_type,
            payments.normalize(),
            input.annual_rate(),
            result.monthly_payment,
            result.total_payment
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RoundingMode, ZeroRatePolicy};
    use crate::form::MortgageForm;
    use rust_decimal_macros::dec;

    fn input(amount: &str, term: &str, rate: &str, kind: MortgageType) -> MortgageInput {
        MortgageInput::parse(&MortgageForm::new(amount, term, rate, kind)).unwrap()
    }

    #[test]
    fn test_repayment_mortgage() {
        let calculator = RepaymentCalculator::default();
        let result = calculator
            .calculate(&input("200000", "25", "5", MortgageType::Repayment))
            .unwrap();

        assert_eq!(result.monthly_payment.as_decimal(), dec!(1169.18));
        assert_eq!(result.total_payment.as_decimal(), dec!(350754.02));
        assert_eq!(result.monthly_display(), "£1169.18");
        assert_eq!(result.total_display(), "£350754.02");
        assert_eq!(result.total_interest().as_decimal(), dec!(150754.02));
    }

    #[test]
    fn test_interest_only_mortgage() {
        let calculator = RepaymentCalculator::default();
        let result = calculator
            .calculate(&input("200000", "25", "5", MortgageType::InterestOnly))
            .unwrap();

        assert_eq!(result.monthly_payment.as_decimal(), dec!(833.33));
        assert_eq!(result.total_payment.as_decimal(), dec!(450000));
        assert_eq!(result.total_display(), "£450000.00");
        assert_eq!(result.total_interest(), Money::from_major(250_000));
    }

    #[test]
    fn test_other_repayment_figures() {
        let calculator = RepaymentCalculator::default();

        let thirty_year = calculator
            .calculate(&input("100000", "30", "6", MortgageType::Repayment))
            .unwrap();
        assert_eq!(thirty_year.monthly_payment.as_decimal(), dec!(599.55));
        assert_eq!(thirty_year.total_payment.as_decimal(), dec!(215838.19));

        let fractional_rate = calculator
            .calculate(&input("150000", "15", "3.5", MortgageType::Repayment))
            .unwrap();
        assert_eq!(fractional_rate.monthly_payment.as_decimal(), dec!(1072.32));
        assert_eq!(fractional_rate.total_payment.as_decimal(), dec!(193018.29));
    }

    #[test]
    fn test_calculation_is_pure() {
        let calculator = RepaymentCalculator::default();
        for kind in [MortgageType::Repayment, MortgageType::InterestOnly] {
            let mortgage = input("275000", "22.5", "4.1", kind);
            let first = calculator.calculate(&mortgage).unwrap();
            let second = calculator.calculate(&mortgage).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_rounding_mode_applies_to_results() {
        // whole-pound rounding; 6% a year is 0.5% a month
        let mortgage = input("1000", "1", "6", MortgageType::InterestOnly);

        let away = RepaymentCalculator::new(CalculatorConfig {
            decimal_places: 0,
            rounding: RoundingMode::HalfAwayFromZero,
            zero_rate_policy: ZeroRatePolicy::Linear,
        })
        .unwrap();
        let even = RepaymentCalculator::new(CalculatorConfig {
            decimal_places: 0,
            rounding: RoundingMode::HalfEven,
            zero_rate_policy: ZeroRatePolicy::Linear,
        })
        .unwrap();

        // monthly interest is exactly 5.00; total is 1060
        assert_eq!(away.calculate(&mortgage).unwrap().monthly_payment.as_decimal(), dec!(5));
        assert_eq!(even.calculate(&mortgage).unwrap().total_payment.as_decimal(), dec!(1060));

        // 2.5 a month rounds apart under the two modes
        let half = input("500", "1", "6", MortgageType::InterestOnly);
        assert_eq!(away.calculate(&half).unwrap().monthly_payment.as_decimal(), dec!(3));
        assert_eq!(even.calculate(&half).unwrap().monthly_payment.as_decimal(), dec!(2));
    }

    #[test]
    fn test_huge_term_is_a_calculation_error() {
        let calculator = RepaymentCalculator::default();
        for kind in [MortgageType::Repayment, MortgageType::InterestOnly] {
            let result = calculator.calculate(&input("200000", "7e27", "5", kind));
            assert!(matches!(result, Err(CalculatorError::CalculationError { .. })));
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = CalculatorConfig {
            decimal_places: 10,
            ..CalculatorConfig::standard()
        };
        assert!(RepaymentCalculator::new(config).is_err());
    }
}
