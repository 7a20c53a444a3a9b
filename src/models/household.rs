use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::MaritalStatus;

/// Declared amounts for one earner of the household.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarnerInputs {
    /// Gross annual salary.
    pub salary: Decimal,
    /// Itemized professional expenses ("frais réels"), claimed instead of
    /// the flat-rate allowance when larger.
    pub real_expenses: Decimal,
    /// Amount paid into a PER retirement plan during the year.
    pub per_contribution: Decimal,
    /// Legal deduction ceiling for that PER contribution.
    pub per_ceiling: Decimal,
}

/// Complete input snapshot for one simulation.
///
/// The engine treats the record as immutable; every calculation receives the
/// full snapshot and recomputes everything. Fields are not range-validated
/// here — rejecting malformed input is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdInputs {
    pub situation: MaritalStatus,
    /// Number of dependent children. Fractional values are tolerated and
    /// floored by the parts calculation.
    pub children: Decimal,
    pub earner1: EarnerInputs,
    pub earner2: EarnerInputs,
    /// Deductible charges subtracted from the combined net income.
    pub common_charges: Decimal,
    /// Tax reduction / credit applied after the bracket computation.
    pub reduction: Decimal,
}

impl HouseholdInputs {
    /// Returns a copy with earner-2 fields zeroed unless the household files
    /// as a couple.
    ///
    /// Single and widowed filers declare one income; whatever was supplied
    /// for the second earner is ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use impot_core::{EarnerInputs, HouseholdInputs, MaritalStatus};
    ///
    /// let inputs = HouseholdInputs {
    ///     situation: MaritalStatus::Single,
    ///     children: dec!(0),
    ///     earner1: EarnerInputs { salary: dec!(30000), ..Default::default() },
    ///     earner2: EarnerInputs { salary: dec!(45000), ..Default::default() },
    ///     common_charges: dec!(0),
    ///     reduction: dec!(0),
    /// };
    ///
    /// let normalized = inputs.normalized();
    ///
    /// assert_eq!(normalized.earner2, EarnerInputs::default());
    /// assert_eq!(normalized.earner1.salary, dec!(30000));
    /// ```
    pub fn normalized(&self) -> Self {
        let mut normalized = self.clone();
        if self.situation != MaritalStatus::Couple {
            normalized.earner2 = EarnerInputs::default();
        }
        normalized
    }
}
