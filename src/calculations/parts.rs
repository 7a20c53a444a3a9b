//! Family-quotient parts count ("nombre de parts").

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::MaritalStatus;

/// Computes the household's family-quotient parts.
///
/// Base parts: 2 for a couple, 2 for a widowed filer with at least one
/// dependent child, 1 otherwise. The first two children add half a part
/// each; every child beyond the second adds a full part. `children` is
/// floored to an integer first.
///
/// The result is always at least 1, so dividing by it is safe.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use impot_core::MaritalStatus;
/// use impot_core::calculations::household_parts;
///
/// assert_eq!(household_parts(MaritalStatus::Single, dec!(0)), dec!(1));
/// assert_eq!(household_parts(MaritalStatus::Couple, dec!(2)), dec!(3));
/// assert_eq!(household_parts(MaritalStatus::Couple, dec!(4)), dec!(5));
///
/// // A widowed filer keeps the couple's base only with a dependent child.
/// assert_eq!(household_parts(MaritalStatus::Widowed, dec!(0)), dec!(1));
/// assert_eq!(household_parts(MaritalStatus::Widowed, dec!(1)), dec!(2.5));
/// ```
pub fn household_parts(situation: MaritalStatus, children: Decimal) -> Decimal {
    let children = children.floor();

    let mut parts = match situation {
        MaritalStatus::Couple => Decimal::TWO,
        MaritalStatus::Widowed if children >= Decimal::ONE => Decimal::TWO,
        _ => Decimal::ONE,
    };

    if children >= Decimal::ONE {
        parts += dec!(0.5);
    }
    if children >= Decimal::TWO {
        parts += dec!(0.5);
    }
    if children >= dec!(3) {
        parts += children - Decimal::TWO;
    }

    parts
}
