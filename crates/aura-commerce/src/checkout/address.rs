//! Address types.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Default country for deliveries.
pub const DEFAULT_COUNTRY: &str = "Deutschland";

/// A postal address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub first_name: String,
    pub last_name: String,
    /// Street and house number.
    pub street: String,
    pub city: String,
    pub postal_code: String,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}

impl Address {
    /// Create a new address in the default country.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            street: street.into(),
            city: city.into(),
            postal_code: postal_code.into(),
            country: default_country(),
            phone: None,
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Get full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Format as single line.
    pub fn one_line(&self) -> String {
        format!(
            "{}, {} {}, {}",
            self.street, self.postal_code, self.city, self.country
        )
    }

    /// Format as multi-line.
    pub fn multi_line(&self) -> String {
        let mut lines = vec![
            self.full_name(),
            self.street.clone(),
            format!("{} {}", self.postal_code, self.city),
            self.country.clone(),
        ];
        if let Some(ref phone) = self.phone {
            lines.push(phone.clone());
        }
        lines.join("\n")
    }

    /// First required field that is blank, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("street", &self.street),
            ("city", &self.city),
            ("postalCode", &self.postal_code),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }

    /// Check if address is complete.
    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }

    /// Fail with [`CommerceError::CheckoutIncomplete`] naming the first blank
    /// required field.
    pub fn validate(&self) -> Result<(), CommerceError> {
        match self.missing_field() {
            Some(field) => Err(CommerceError::CheckoutIncomplete(field.to_string())),
            None => Ok(()),
        }
    }
}
