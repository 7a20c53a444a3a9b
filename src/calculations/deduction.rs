//! Earner-level salary deduction.
//!
//! Each earner deducts the larger of the 10 % flat-rate allowance (capped)
//! or their itemized professional expenses ("frais réels").

use rust_decimal::Decimal;

use crate::Bareme;

/// Computes the deduction applied to one earner's gross salary.
///
/// Returns zero for a zero salary: with no income there is no earner-based
/// allowance, whatever expenses were claimed. Otherwise returns
/// `max(min(salary × rate, cap), real_expenses)`.
///
/// The published minimum allowance ([`Bareme::standard_deduction_min`]) is
/// deliberately not enforced here.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use impot_core::Bareme;
/// use impot_core::calculations::salary_deduction;
///
/// let bareme = Bareme::y2025();
///
/// // 10 % allowance beats the claimed expenses.
/// assert_eq!(salary_deduction(dec!(30000), dec!(0), &bareme), dec!(3000.00));
///
/// // Itemized expenses beat the allowance.
/// assert_eq!(salary_deduction(dec!(30000), dec!(4500), &bareme), dec!(4500));
///
/// // The allowance is capped at 14 426 €.
/// assert_eq!(salary_deduction(dec!(200000), dec!(0), &bareme), dec!(14426));
/// ```
pub fn salary_deduction(
    salary: Decimal,
    real_expenses: Decimal,
    bareme: &Bareme,
) -> Decimal {
    if salary == Decimal::ZERO {
        return Decimal::ZERO;
    }

    let standard_allowance = (salary * bareme.standard_deduction_rate)
        .min(bareme.standard_deduction_cap);
    standard_allowance.max(real_expenses)
}
