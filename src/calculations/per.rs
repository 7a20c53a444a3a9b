//! PER (plan d'épargne retraite) contribution advisor.
//!
//! Suggests the contribution that would absorb all income currently taxed at
//! the household's top marginal bracket: every euro paid into a PER reduces
//! the taxable base, so the gap between the quotient and the lower bracket's
//! limit — scaled back to household level — is the amount worth considering.
//!
//! Advisory only: the suggestion is not checked against the deduction
//! ceilings already applied to declared contributions.

use rust_decimal::Decimal;

use crate::models::{Bareme, PerOptimization};

use super::common::round_to_euro;

/// Builds the PER suggestion from the capped evaluation's marginal rate and
/// quotient.
///
/// A household inside the tax-free bracket gets zero amounts and a message
/// explaining that a contribution brings no immediate saving.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use impot_core::Bareme;
/// use impot_core::calculations::per_optimization;
///
/// let bareme = Bareme::y2025();
///
/// // Quotient 28 500 at 11 %: 17 003 € per part above the 0 % bracket.
/// let advice = per_optimization(dec!(0.11), dec!(28500), dec!(3), &bareme);
///
/// assert_eq!(advice.invest_amount, dec!(51009));
/// assert_eq!(advice.saving_amount, dec!(5611));
/// ```
pub fn per_optimization(
    marginal_rate: Decimal,
    quotient: Decimal,
    parts: Decimal,
    bareme: &Bareme,
) -> PerOptimization {
    let not_taxable = || PerOptimization {
        invest_amount: Decimal::ZERO,
        saving_amount: Decimal::ZERO,
        message: "Votre foyer n'est pas imposable : un versement PER n'apporterait pas \
                  d'économie d'impôt immédiate."
            .to_string(),
    };

    if marginal_rate <= Decimal::ZERO {
        return not_taxable();
    }
    let Some(index) = bareme
        .brackets
        .iter()
        .position(|b| b.rate == marginal_rate)
    else {
        return not_taxable();
    };

    let lower_limit = if index == 0 {
        Decimal::ZERO
    } else {
        bareme.brackets[index - 1].limit
    };

    let invest_amount = round_to_euro((quotient - lower_limit) * parts).max(Decimal::ZERO);
    let saving_amount = round_to_euro(invest_amount * marginal_rate);
    let percent = (marginal_rate * Decimal::ONE_HUNDRED).normalize();

    PerOptimization {
        invest_amount,
        saving_amount,
        message: format!(
            "Votre TMI est de {percent}%. Chaque euro versé sur un PER réduit votre base \
             imposable et vous rapporte {percent}% d'économie d'impôt."
        ),
    }
}
