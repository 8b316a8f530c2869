//! Fragrance classification: concentration category, product type, gender.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Concentration category of a fragrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductCategory {
    Parfum,
    EauDeParfum,
    EauDeToilette,
    Cologne,
    BodySpray,
    Oil,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 6] = [
        ProductCategory::Parfum,
        ProductCategory::EauDeParfum,
        ProductCategory::EauDeToilette,
        ProductCategory::Cologne,
        ProductCategory::BodySpray,
        ProductCategory::Oil,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Parfum => "parfum",
            ProductCategory::EauDeParfum => "eau-de-parfum",
            ProductCategory::EauDeToilette => "eau-de-toilette",
            ProductCategory::Cologne => "cologne",
            ProductCategory::BodySpray => "body-spray",
            ProductCategory::Oil => "oil",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductCategory::Parfum => "Parfum",
            ProductCategory::EauDeParfum => "Eau de Parfum",
            ProductCategory::EauDeToilette => "Eau de Toilette",
            ProductCategory::Cologne => "Cologne",
            ProductCategory::BodySpray => "Body Spray",
            ProductCategory::Oil => "Oil",
        }
    }
}

/// Whether the product is a decant or a full original bottle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductType {
    /// Small-volume repackaging from an original bottle.
    Decant,
    /// Sealed original bottle.
    Original,
}

impl ProductType {
    pub const ALL: [ProductType; 2] = [ProductType::Decant, ProductType::Original];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Decant => "decant",
            ProductType::Original => "original",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductType::Decant => "Decant",
            ProductType::Original => "Original",
        }
    }
}

/// Target gender of a fragrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductGender {
    Masculine,
    Feminine,
    Unisex,
}

impl ProductGender {
    pub const ALL: [ProductGender; 3] = [
        ProductGender::Masculine,
        ProductGender::Feminine,
        ProductGender::Unisex,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductGender::Masculine => "masculine",
            ProductGender::Feminine => "feminine",
            ProductGender::Unisex => "unisex",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductGender::Masculine => "Masculine",
            ProductGender::Feminine => "Feminine",
            ProductGender::Unisex => "Unisex",
        }
    }
}

/// Implements `FromStr` and `Display` over the `ALL` table and `as_str`.
macro_rules! code_enum {
    ($name:ident, $kind:literal) => {
        impl FromStr for $name {
            type Err = CommerceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim().to_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == needle)
                    .ok_or_else(|| CommerceError::unknown($kind, s))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

code_enum!(ProductCategory, "category");
code_enum!(ProductType, "product type");
code_enum!(ProductGender, "gender");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_codes_roundtrip_through_from_str() {
        for category in ProductCategory::ALL {
            assert_eq!(category.as_str().parse::<ProductCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_category_serde_is_kebab_case() {
        let json = serde_json::to_string(&ProductCategory::EauDeParfum).unwrap();
        assert_eq!(json, "\"eau-de-parfum\"");
        let parsed: ProductCategory = serde_json::from_str("\"body-spray\"").unwrap();
        assert_eq!(parsed, ProductCategory::BodySpray);
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("Decant".parse::<ProductType>().unwrap(), ProductType::Decant);
        assert_eq!(" UNISEX ".parse::<ProductGender>().unwrap(), ProductGender::Unisex);
    }

    #[test]
    fn test_unknown_code_is_error() {
        let err = "sample".parse::<ProductType>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown product type: sample");
    }
}
