//! Progressive bracket evaluation and family-quotient capping.
//!
//! The family-quotient mechanism ("quotient familial") taxes the household
//! as if its income were split into equal parts: net taxable income is
//! divided by the parts count, the per-part quotient is pushed through the
//! progressive schedule, and the per-part tax is multiplied back up.
//!
//! The tax advantage gained from parts beyond the household's base (2 for a
//! couple, 1 otherwise) is legally capped per extra half-part
//! ("plafonnement du quotient familial"): the household can never pay less
//! than the tax it would owe at its base parts minus the legal maximum
//! advantage.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Bareme, BracketContribution, MaritalStatus};

/// Errors that can occur when evaluating the progressive schedule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxScheduleError {
    /// The bareme carries no brackets.
    #[error("no tax brackets provided")]
    EmptyBareme,

    /// The parts count must be strictly positive to divide by it.
    #[error("parts count must be positive, got {0}")]
    InvalidParts(Decimal),
}

/// Result of one uncapped bracket walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketEvaluation {
    /// Household-level tax: per-part tax multiplied back by the parts count.
    pub tax: Decimal,
    /// Highest rate among brackets that received a positive slice; zero when
    /// the quotient stays inside the tax-free bracket.
    pub marginal_rate: Decimal,
    /// Per-part quotient that was walked through the schedule.
    pub quotient: Decimal,
    /// Per-part slices, one entry per bracket actually touched.
    pub contributions: Vec<BracketContribution>,
}

/// Result of a bracket walk with the family-quotient cap applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CappedEvaluation {
    /// Tax due after capping.
    pub tax: Decimal,
    /// Whether the cap raised the tax above the uncapped result.
    pub is_capped: bool,
    /// Advantage retained from the extra parts, clipped to `max_advantage`.
    /// Zero when the household has no parts beyond its base.
    pub advantage: Decimal,
    /// Legal maximum advantage for this household's extra half-parts.
    pub max_advantage: Decimal,
    /// Marginal rate of the full-parts evaluation.
    pub marginal_rate: Decimal,
    /// Per-part quotient of the full-parts evaluation.
    pub quotient: Decimal,
    /// Per-part slices of the full-parts evaluation.
    pub contributions: Vec<BracketContribution>,
}

/// Evaluator for one year's progressive schedule.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use impot_core::Bareme;
/// use impot_core::calculations::IncomeTaxSchedule;
///
/// let bareme = Bareme::y2025();
/// let schedule = IncomeTaxSchedule::new(&bareme);
///
/// // Single part: 11 497 € tax free, the rest at 11 %.
/// let eval = schedule.evaluate(dec!(27000), dec!(1)).unwrap();
///
/// assert_eq!(eval.tax, dec!(1705.33));
/// assert_eq!(eval.marginal_rate, dec!(0.11));
/// assert_eq!(eval.contributions.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct IncomeTaxSchedule<'a> {
    bareme: &'a Bareme,
}

impl<'a> IncomeTaxSchedule<'a> {
    pub fn new(bareme: &'a Bareme) -> Self {
        Self { bareme }
    }

    /// Walks the quotient through the schedule and scales the per-part tax
    /// back to household level.
    ///
    /// Only brackets receiving a strictly positive slice of the quotient are
    /// recorded; the walk stops as soon as the quotient is covered, so
    /// brackets above the marginal one are never inspected.
    ///
    /// # Errors
    ///
    /// Returns [`TaxScheduleError`] if the bareme has no brackets or `parts`
    /// is not strictly positive.
    pub fn evaluate(
        &self,
        net_taxable_income: Decimal,
        parts: Decimal,
    ) -> Result<BracketEvaluation, TaxScheduleError> {
        if self.bareme.brackets.is_empty() {
            return Err(TaxScheduleError::EmptyBareme);
        }
        if parts <= Decimal::ZERO {
            return Err(TaxScheduleError::InvalidParts(parts));
        }

        let quotient = net_taxable_income / parts;

        let mut per_part_tax = Decimal::ZERO;
        let mut marginal_rate = Decimal::ZERO;
        let mut contributions = Vec::new();
        let mut previous_limit = Decimal::ZERO;

        for bracket in &self.bareme.brackets {
            let slice = quotient.min(bracket.limit) - previous_limit;
            if slice > Decimal::ZERO {
                per_part_tax += slice * bracket.rate;
                contributions.push(BracketContribution {
                    label: bracket.label.clone(),
                    rate: bracket.rate,
                    amount: slice,
                    color: bracket.color.clone(),
                });
                if bracket.rate > Decimal::ZERO {
                    marginal_rate = bracket.rate;
                }
            }
            previous_limit = bracket.limit;
            if quotient <= bracket.limit {
                break;
            }
        }

        Ok(BracketEvaluation {
            tax: per_part_tax * parts,
            marginal_rate,
            quotient,
            contributions,
        })
    }

    /// Evaluates the schedule and applies the family-quotient cap.
    ///
    /// The household is first taxed at its full parts count. When extra
    /// parts exist (beyond [`MaritalStatus::base_parts`]), the tax is also
    /// computed at the base parts; the difference is the family-quotient
    /// advantage, limited to
    /// [`Bareme::family_quotient_cap_per_half_part`] per extra half-part.
    /// If the uncapped tax falls below `base_tax − max_advantage`, that
    /// floor becomes the tax due.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use impot_core::{Bareme, MaritalStatus};
    /// use impot_core::calculations::IncomeTaxSchedule;
    ///
    /// let bareme = Bareme::y2025();
    /// let schedule = IncomeTaxSchedule::new(&bareme);
    ///
    /// // Couple with 3 parts: 2 extra half-parts, max advantage 3 582 €.
    /// let capped = schedule
    ///     .evaluate_capped(dec!(85500), dec!(3), MaritalStatus::Couple)
    ///     .unwrap();
    ///
    /// assert!(capped.is_capped);
    /// assert_eq!(capped.tax, dec!(8398.96));
    /// assert_eq!(capped.max_advantage, dec!(3582));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`TaxScheduleError`] under the same conditions as
    /// [`evaluate`](Self::evaluate).
    pub fn evaluate_capped(
        &self,
        net_taxable_income: Decimal,
        parts: Decimal,
        situation: MaritalStatus,
    ) -> Result<CappedEvaluation, TaxScheduleError> {
        let real = self.evaluate(net_taxable_income, parts)?;

        let base_parts = situation.base_parts();
        if parts <= base_parts {
            return Ok(CappedEvaluation {
                tax: real.tax,
                is_capped: false,
                advantage: Decimal::ZERO,
                max_advantage: Decimal::ZERO,
                marginal_rate: real.marginal_rate,
                quotient: real.quotient,
                contributions: real.contributions,
            });
        }

        let base = self.evaluate(net_taxable_income, base_parts)?;
        let extra_half_parts = (parts - base_parts) * Decimal::TWO;
        let max_advantage = extra_half_parts * self.bareme.family_quotient_cap_per_half_part;
        let tax_floor = (base.tax - max_advantage).max(Decimal::ZERO);

        let is_capped = real.tax < tax_floor;
        let tax = if is_capped { tax_floor } else { real.tax };
        let advantage = (base.tax - real.tax).min(max_advantage);

        Ok(CappedEvaluation {
            tax,
            is_capped,
            advantage,
            max_advantage,
            marginal_rate: real.marginal_rate,
            quotient: real.quotient,
            contributions: real.contributions,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // evaluate tests
    // =========================================================================

    #[test]
    fn evaluate_zero_income_is_tax_free() {
        let bareme = Bareme::y2025();
        let schedule = IncomeTaxSchedule::new(&bareme);

        let eval = schedule.evaluate(dec!(0), dec!(1)).unwrap();

        assert_eq!(eval.tax, dec!(0));
        assert_eq!(eval.marginal_rate, dec!(0));
        assert_eq!(eval.contributions, vec![]);
    }

    #[test]
    fn evaluate_quotient_inside_first_bracket_pays_nothing() {
        let bareme = Bareme::y2025();
        let schedule = IncomeTaxSchedule::new(&bareme);

        let eval = schedule.evaluate(dec!(11000), dec!(1)).unwrap();

        assert_eq!(eval.tax, dec!(0));
        assert_eq!(eval.marginal_rate, dec!(0));
        // The tax-free slice is still reported for the breakdown chart.
        assert_eq!(eval.contributions.len(), 1);
        assert_eq!(eval.contributions[0].amount, dec!(11000));
    }

    #[test]
    fn evaluate_second_bracket_taxes_the_excess_at_11_percent() {
        let bareme = Bareme::y2025();
        let schedule = IncomeTaxSchedule::new(&bareme);

        let eval = schedule.evaluate(dec!(27000), dec!(1)).unwrap();

        // (27 000 − 11 497) × 0.11 = 1 705.33
        assert_eq!(eval.tax, dec!(1705.33));
        assert_eq!(eval.marginal_rate, dec!(0.11));
        assert_eq!(eval.quotient, dec!(27000));
        assert_eq!(eval.contributions.len(), 2);
        assert_eq!(eval.contributions[0].amount, dec!(11497));
        assert_eq!(eval.contributions[1].amount, dec!(15503));
    }

    #[test]
    fn evaluate_multiplies_per_part_tax_back_by_parts() {
        let bareme = Bareme::y2025();
        let schedule = IncomeTaxSchedule::new(&bareme);

        let eval = schedule.evaluate(dec!(85500), dec!(3)).unwrap();

        // Quotient 28 500; (28 500 − 11 497) × 0.11 × 3 = 5 610.99
        assert_eq!(eval.quotient, dec!(28500));
        assert_eq!(eval.tax, dec!(5610.99));
    }

    #[test]
    fn evaluate_reaches_top_bracket_for_very_high_income() {
        let bareme = Bareme::y2025();
        let schedule = IncomeTaxSchedule::new(&bareme);

        let eval = schedule.evaluate(dec!(150000), dec!(1)).unwrap();

        assert_eq!(eval.marginal_rate, dec!(0.41));
        assert_eq!(eval.contributions.len(), 4);
    }

    #[test]
    fn evaluate_breakdown_reconstructs_the_tax() {
        let bareme = Bareme::y2025();
        let schedule = IncomeTaxSchedule::new(&bareme);
        let parts = dec!(2.5);

        let eval = schedule.evaluate(dec!(123456), parts).unwrap();

        let reconstructed: Decimal = eval
            .contributions
            .iter()
            .map(|c| c.amount * c.rate)
            .sum::<Decimal>()
            * parts;
        assert_eq!(reconstructed, eval.tax);
    }

    #[test]
    fn evaluate_rejects_empty_bareme() {
        let mut bareme = Bareme::y2025();
        bareme.brackets.clear();
        let schedule = IncomeTaxSchedule::new(&bareme);

        let result = schedule.evaluate(dec!(27000), dec!(1));

        assert_eq!(result, Err(TaxScheduleError::EmptyBareme));
    }

    #[test]
    fn evaluate_rejects_non_positive_parts() {
        let bareme = Bareme::y2025();
        let schedule = IncomeTaxSchedule::new(&bareme);

        let result = schedule.evaluate(dec!(27000), dec!(0));

        assert_eq!(result, Err(TaxScheduleError::InvalidParts(dec!(0))));
    }

    // =========================================================================
    // evaluate_capped tests
    // =========================================================================

    #[test]
    fn capping_does_not_apply_at_base_parts() {
        let bareme = Bareme::y2025();
        let schedule = IncomeTaxSchedule::new(&bareme);

        let capped = schedule
            .evaluate_capped(dec!(27000), dec!(1), MaritalStatus::Single)
            .unwrap();

        assert!(!capped.is_capped);
        assert_eq!(capped.tax, dec!(1705.33));
        assert_eq!(capped.advantage, dec!(0));
        assert_eq!(capped.max_advantage, dec!(0));
    }

    #[test]
    fn capping_raises_tax_to_the_floor_when_advantage_exceeds_cap() {
        let bareme = Bareme::y2025();
        let schedule = IncomeTaxSchedule::new(&bareme);

        let capped = schedule
            .evaluate_capped(dec!(85500), dec!(3), MaritalStatus::Couple)
            .unwrap();

        // Uncapped: 5 610.99. Base (2 parts): 11 980.96.
        // Floor: 11 980.96 − 2 × 1 791 = 8 398.96.
        assert!(capped.is_capped);
        assert_eq!(capped.tax, dec!(8398.96));
        assert_eq!(capped.advantage, dec!(3582));
        assert_eq!(capped.max_advantage, dec!(3582));
        // Marginal rate and quotient still come from the full-parts walk.
        assert_eq!(capped.marginal_rate, dec!(0.11));
        assert_eq!(capped.quotient, dec!(28500));
    }

    #[test]
    fn capping_keeps_uncapped_tax_when_advantage_is_within_cap() {
        let bareme = Bareme::y2025();
        let schedule = IncomeTaxSchedule::new(&bareme);

        // Couple, one child, modest income: the half-part advantage stays
        // under 1 791 €.
        // 2.5 parts: quotient 12 000 → (12 000 − 11 497) × 0.11 × 2.5 = 138.325
        // 2 parts: quotient 15 000 → (15 000 − 11 497) × 0.11 × 2 = 770.66
        // Advantage 632.335 < 1 791, no capping.
        let capped = schedule
            .evaluate_capped(dec!(30000), dec!(2.5), MaritalStatus::Couple)
            .unwrap();

        assert!(!capped.is_capped);
        assert_eq!(capped.tax, dec!(138.325));
        assert_eq!(capped.advantage, dec!(632.335));
        assert_eq!(capped.max_advantage, dec!(1791));
    }

    #[test]
    fn capped_tax_never_falls_below_the_floor() {
        let bareme = Bareme::y2025();
        let schedule = IncomeTaxSchedule::new(&bareme);

        for rni in [dec!(20000), dec!(50000), dec!(85500), dec!(150000)] {
            let capped = schedule
                .evaluate_capped(rni, dec!(4), MaritalStatus::Couple)
                .unwrap();
            let base = schedule.evaluate(rni, dec!(2)).unwrap();
            let floor = (base.tax - dec!(4) * dec!(1791)).max(dec!(0));

            assert!(capped.tax >= floor);
            assert_eq!(capped.is_capped, {
                let real = schedule.evaluate(rni, dec!(4)).unwrap();
                real.tax < floor
            });
        }
    }

    #[test]
    fn widowed_with_children_is_capped_against_a_single_part_base() {
        let bareme = Bareme::y2025();
        let schedule = IncomeTaxSchedule::new(&bareme);

        // Widowed, one child: 2.5 parts against a base of 1, i.e. 3 extra
        // half-parts.
        let capped = schedule
            .evaluate_capped(dec!(60000), dec!(2.5), MaritalStatus::Widowed)
            .unwrap();

        assert_eq!(capped.max_advantage, dec!(3) * dec!(1791));
    }

    #[test]
    fn tax_floor_is_clamped_at_zero() {
        let bareme = Bareme::y2025();
        let schedule = IncomeTaxSchedule::new(&bareme);

        // Income low enough that even the base tax is below the maximum
        // advantage: the floor is zero and nothing is capped.
        let capped = schedule
            .evaluate_capped(dec!(26000), dec!(3), MaritalStatus::Couple)
            .unwrap();

        assert!(!capped.is_capped);
        assert_eq!(capped.tax, dec!(0));
    }
}
