//! Payment method choice.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    /// Card payment.
    #[default]
    Stripe,
    ApplePay,
    #[serde(rename = "paypal")]
    PayPal,
    Klarna,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Stripe,
        PaymentMethod::ApplePay,
        PaymentMethod::PayPal,
        PaymentMethod::Klarna,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Stripe => "stripe",
            PaymentMethod::ApplePay => "apple-pay",
            PaymentMethod::PayPal => "paypal",
            PaymentMethod::Klarna => "klarna",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Stripe => "Credit Card",
            PaymentMethod::ApplePay => "Apple Pay",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::Klarna => "Klarna",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == needle)
            .ok_or_else(|| CommerceError::unknown("payment method", s))
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_through_serde() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::ApplePay).unwrap(),
            "\"apple-pay\""
        );
        assert_eq!(
            serde_json::from_str::<PaymentMethod>("\"paypal\"").unwrap(),
            PaymentMethod::PayPal
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("Klarna".parse::<PaymentMethod>().unwrap(), PaymentMethod::Klarna);
        assert!("cash".parse::<PaymentMethod>().is_err());
        assert_eq!(PaymentMethod::default(), PaymentMethod::Stripe);
    }
}
