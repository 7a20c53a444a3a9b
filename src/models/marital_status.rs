use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Marital situation of the tax household ("situation de famille").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaritalStatus {
    Single,
    Couple,
    Widowed,
}

impl MaritalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Couple => "couple",
            Self::Widowed => "widowed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "single" => Some(Self::Single),
            "couple" => Some(Self::Couple),
            "widowed" => Some(Self::Widowed),
            _ => None,
        }
    }

    /// Reference parts count used when capping the family-quotient advantage.
    ///
    /// The tax benefit of parts beyond this base is what the law limits
    /// ("plafonnement du quotient familial"). Note that this is not always
    /// the starting point of the parts calculation: a widowed filer with at
    /// least one dependent child starts from 2 parts, but the capping base
    /// stays at 1.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use impot_core::MaritalStatus;
    ///
    /// assert_eq!(MaritalStatus::Couple.base_parts(), dec!(2));
    /// assert_eq!(MaritalStatus::Single.base_parts(), dec!(1));
    /// assert_eq!(MaritalStatus::Widowed.base_parts(), dec!(1));
    /// ```
    pub fn base_parts(&self) -> Decimal {
        match self {
            Self::Couple => Decimal::TWO,
            Self::Single | Self::Widowed => Decimal::ONE,
        }
    }
}
