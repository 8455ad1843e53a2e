use rust_decimal::Decimal;

use crate::errors::{CalculatorError, Result};

/// monthly interest on the full principal
pub fn monthly_payment(principal: Decimal, monthly_rate: Decimal) -> Result<Decimal> {
    principal
        .checked_mul(monthly_rate)
        .ok_or_else(|| CalculatorError::CalculationError {
            message: "interest payment is out of range".to_string(),
        })
}

/// interest paid every month plus the principal repaid at term end
pub fn total_payment(principal: Decimal, monthly_payment: Decimal, payments: Decimal) -> Result<Decimal> {
    monthly_payment
        .checked_mul(payments)
        .and_then(|interest| interest.checked_add(principal))
        .ok_or_else(|| CalculatorError::CalculationError {
            message: "total repayment is out of range".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_interest_only_figures() {
        let rate = dec!(5) / dec!(100) / dec!(12);
        let monthly = monthly_payment(dec!(200000), rate).unwrap();
        assert_eq!(monthly.round_dp(2), dec!(833.33));

        let total = total_payment(dec!(200000), monthly, dec!(300)).unwrap();
        assert_eq!(total.round_dp(2), dec!(450000.00));
    }
}
