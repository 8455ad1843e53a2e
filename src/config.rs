use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalculatorError, Result};

/// largest number of fractional digits a result may be rounded to
pub const MAX_DECIMAL_PLACES: u32 = 8;

/// calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub decimal_places: u32,
    pub rounding: RoundingMode,
    pub zero_rate_policy: ZeroRatePolicy,
}

/// rounding applied to the final monthly and total figures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundingMode {
    /// 2.345 -> 2.35
    HalfAwayFromZero,
    /// banker's rounding, 2.345 -> 2.34
    HalfEven,
}

impl RoundingMode {
    pub fn strategy(&self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

/// what the repayment formula does when the monthly rate is zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZeroRatePolicy {
    /// spread the principal evenly over the payments
    Linear,
    /// fail with [`CalculatorError::ZeroRateRejected`]
    Reject,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl CalculatorConfig {
    /// two decimal places, half away from zero, linear fallback at zero rate
    pub fn standard() -> Self {
        Self {
            decimal_places: 2,
            rounding: RoundingMode::HalfAwayFromZero,
            zero_rate_policy: ZeroRatePolicy::Linear,
        }
    }

    /// same as standard but with banker's rounding
    pub fn bankers() -> Self {
        Self {
            rounding: RoundingMode::HalfEven,
            ..Self::standard()
        }
    }

    /// load and validate a configuration from json
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CalculatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(CalculatorError::InvalidConfiguration {
                message: format!(
                    "decimal_places must be at most {}, got {}",
                    MAX_DECIMAL_PLACES, self.decimal_places
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_defaults() {
        let config = CalculatorConfig::default();
        assert_eq!(config.decimal_places, 2);
        assert_eq!(config.rounding, RoundingMode::HalfAwayFromZero);
        assert_eq!(config.zero_rate_policy, ZeroRatePolicy::Linear);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bankers_preset() {
        let config = CalculatorConfig::bankers();
        assert_eq!(config.rounding.strategy(), RoundingStrategy::MidpointNearestEven);
        assert_eq!(config.decimal_places, 2);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "decimal_places": 4,
            "rounding": "HalfEven",
            "zero_rate_policy": "Reject"
        }"#;

        let config = CalculatorConfig::from_json(json).unwrap();
        assert_eq!(config.decimal_places, 4);
        assert_eq!(config.rounding, RoundingMode::HalfEven);
        assert_eq!(config.zero_rate_policy, ZeroRatePolicy::Reject);
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        let too_precise = r#"{"decimal_places": 12, "rounding": "HalfEven", "zero_rate_policy": "Linear"}"#;
        assert!(matches!(
            CalculatorConfig::from_json(too_precise),
            Err(CalculatorError::InvalidConfiguration { .. })
        ));

        let malformed = r#"{"decimal_places": "two"}"#;
        assert!(matches!(
            CalculatorConfig::from_json(malformed),
            Err(CalculatorError::Serialization(_))
        ));
    }
}
