use log::warn;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};

use crate::config::ZeroRatePolicy;
use crate::errors::{CalculatorError, Result};

/// level monthly payment that fully retires `principal` over `payments` periods.
///
/// EMI = P * r * (1 + r)^n / ((1 + r)^n - 1), evaluated as P * r / (1 - (1 + r)^-n)
/// so large growth factors do not overflow the numerator. when the monthly rate is
/// zero, or too small to move the growth factor off one, `policy` decides.
pub fn monthly_payment(
    principal: Decimal,
    monthly_rate: Decimal,
    payments: Decimal,
    policy: ZeroRatePolicy,
) -> Result<Decimal> {
    let growth = if monthly_rate.is_zero() {
        Decimal::ONE
    } else {
        compound_factor(Decimal::ONE + monthly_rate, payments)?
    };

    if growth == Decimal::ONE {
        return match policy {
            ZeroRatePolicy::Linear => principal
                .checked_div(payments)
                .ok_or_else(|| overflow("linear payment")),
            ZeroRatePolicy::Reject => Err(CalculatorError::ZeroRateRejected),
        };
    }

    let discount = Decimal::ONE
        .checked_div(growth)
        .ok_or_else(|| overflow("discount factor"))?;
    let annuity = monthly_rate
        .checked_div(Decimal::ONE - discount)
        .ok_or_else(|| overflow("annuity factor"))?;

    principal
        .checked_mul(annuity)
        .ok_or_else(|| overflow("monthly payment"))
}

/// (base)^periods; whole period counts are exact, fractional ones use a real exponent
pub fn compound_factor(base: Decimal, periods: Decimal) -> Result<Decimal> {
    let factor = if periods.fract().is_zero() {
        periods
            .to_u64()
            .and_then(|n| base.checked_powu(n))
    } else {
        base.checked_powd(periods)
    };

    factor.ok_or_else(|| overflow("compound factor"))
}

fn overflow(stage: &str) -> CalculatorError {
    warn!("repayment arithmetic overflowed computing {}", stage);
    CalculatorError::CalculationError {
        message: format!("{} is out of range", stage),
    }
}
