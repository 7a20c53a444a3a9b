//! Household aggregation pipeline.
//!
//! Runs the full sequence from a declared input snapshot to the final tax
//! due:
//!
//! 1. Normalize inputs (zero earner 2 unless filing as a couple).
//! 2. Per-earner salary deduction; net salary = salary − deduction.
//! 3. Reference income (RFR) = sum of net salaries.
//! 4. Deductible PER = `min(contribution, ceiling)` per earner; the excess
//!    is flagged, not deducted.
//! 5. Net taxable income (RNI) = `max(0, RFR − PER − common charges)`.
//! 6. Family-quotient parts.
//! 7. Capped bracket evaluation.
//! 8. Final tax = `round(max(0, capped tax − reduction))`.
//! 9. Household withholding rate over combined gross salaries.
//! 10. Individualized per-earner rates for couples (BOFiP method: each
//!     spouse carries half the household's parts).
//!
//! Every run is a pure function of its inputs: no state is kept across
//! calls, identical snapshots produce identical results.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::models::{
    Bareme, EarnerInputs, FamilyQuotientCap, HouseholdInputs, MaritalStatus, PerWarning,
    SimulationResult, WithholdingRates,
};

use super::common::{round_half_up, round_to_euro};
use super::deduction::salary_deduction;
use super::parts::household_parts;
use super::per::per_optimization;
use super::schedule::{IncomeTaxSchedule, TaxScheduleError};

/// Simulation engine for one year's bareme.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use impot_core::{Bareme, EarnerInputs, HouseholdInputs, MaritalStatus, TaxSimulator};
///
/// let bareme = Bareme::y2025();
/// let simulator = TaxSimulator::new(&bareme);
///
/// let inputs = HouseholdInputs {
///     situation: MaritalStatus::Single,
///     children: dec!(0),
///     earner1: EarnerInputs { salary: dec!(30000), ..Default::default() },
///     earner2: EarnerInputs::default(),
///     common_charges: dec!(0),
///     reduction: dec!(0),
/// };
///
/// let result = simulator.run(&inputs).unwrap();
///
/// assert_eq!(result.net_taxable_income, dec!(27000.00));
/// assert_eq!(result.final_tax, dec!(1705));
/// assert_eq!(result.marginal_rate, dec!(0.11));
/// ```
#[derive(Debug, Clone)]
pub struct TaxSimulator<'a> {
    bareme: &'a Bareme,
}

impl<'a> TaxSimulator<'a> {
    pub fn new(bareme: &'a Bareme) -> Self {
        Self { bareme }
    }

    /// Runs the full pipeline on one input snapshot.
    ///
    /// Inputs are not range-validated; out-of-range values produce
    /// best-effort numbers. Only the net taxable income and the final tax
    /// are clamped at zero.
    ///
    /// # Errors
    ///
    /// Returns [`TaxScheduleError`] if the bareme carries no brackets. The
    /// parts count is ≥ 1 by construction, so the division guard never
    /// fires through this entry point.
    pub fn run(&self, inputs: &HouseholdInputs) -> Result<SimulationResult, TaxScheduleError> {
        let inputs = inputs.normalized();

        let net_salary1 = self.net_salary(&inputs.earner1);
        let net_salary2 = self.net_salary(&inputs.earner2);
        let reference_income = net_salary1 + net_salary2;

        let per_deducted1 = self.deductible_per(&inputs.earner1, 1);
        let per_deducted2 = self.deductible_per(&inputs.earner2, 2);
        let per_warning = PerWarning {
            earner1_capped: inputs.earner1.per_contribution > inputs.earner1.per_ceiling,
            earner2_capped: inputs.earner2.per_contribution > inputs.earner2.per_ceiling,
        };

        let net_taxable_income = (reference_income
            - per_deducted1
            - per_deducted2
            - inputs.common_charges)
            .max(Decimal::ZERO);

        let parts = household_parts(inputs.situation, inputs.children);

        let schedule = IncomeTaxSchedule::new(self.bareme);
        let capped = schedule.evaluate_capped(net_taxable_income, parts, inputs.situation)?;

        let final_tax = round_to_euro((capped.tax - inputs.reduction).max(Decimal::ZERO));

        let gross_salaries = inputs.earner1.salary + inputs.earner2.salary;
        let household_rate = if gross_salaries > Decimal::ZERO {
            round_half_up(final_tax / gross_salaries * Decimal::ONE_HUNDRED)
        } else {
            Decimal::ZERO
        };

        let (earner1_rate, earner2_rate) = if inputs.situation == MaritalStatus::Couple
            && gross_salaries > Decimal::ZERO
        {
            self.individual_rates(&inputs, net_salary2, per_deducted2, parts, final_tax)?
        } else {
            (household_rate, Decimal::ZERO)
        };

        let per_optimization =
            per_optimization(capped.marginal_rate, capped.quotient, parts, self.bareme);

        debug!(
            rfr = %reference_income,
            rni = %net_taxable_income,
            parts = %parts,
            final_tax = %final_tax,
            is_capped = capped.is_capped,
            "household simulation complete"
        );

        Ok(SimulationResult {
            reference_income,
            net_taxable_income,
            parts,
            quotient: capped.quotient,
            marginal_rate: capped.marginal_rate,
            tax_before_reduction: round_to_euro(capped.tax),
            final_tax,
            bracket_contributions: capped.contributions,
            family_quotient: FamilyQuotientCap {
                is_capped: capped.is_capped,
                advantage: capped.advantage,
                max_advantage: capped.max_advantage,
                cap_per_half_part: self.bareme.family_quotient_cap_per_half_part,
            },
            withholding: WithholdingRates {
                household_rate,
                earner1_rate,
                earner2_rate,
            },
            per_warning,
            per_optimization,
        })
    }

    /// Gross salary minus the earner's deduction. Not clamped: itemized
    /// expenses above the salary produce a negative contribution.
    fn net_salary(&self, earner: &EarnerInputs) -> Decimal {
        earner.salary - salary_deduction(earner.salary, earner.real_expenses, self.bareme)
    }

    /// Deductible part of the earner's PER contribution.
    fn deductible_per(&self, earner: &EarnerInputs, earner_index: u8) -> Decimal {
        if earner.per_contribution > earner.per_ceiling {
            warn!(
                earner = earner_index,
                contribution = %earner.per_contribution,
                ceiling = %earner.per_ceiling,
                "PER contribution exceeds its deduction ceiling; excess is not deductible"
            );
        }
        earner.per_contribution.min(earner.per_ceiling)
    }

    /// Individualized withholding rates for a couple.
    ///
    /// Earner 2 is re-evaluated alone, as a single filer carrying half the
    /// household's parts, on their own net taxable income (net salary minus
    /// their deductible PER). Earner 1 carries whatever household tax
    /// remains.
    fn individual_rates(
        &self,
        inputs: &HouseholdInputs,
        net_salary2: Decimal,
        per_deducted2: Decimal,
        parts: Decimal,
        final_tax: Decimal,
    ) -> Result<(Decimal, Decimal), TaxScheduleError> {
        let schedule = IncomeTaxSchedule::new(self.bareme);

        let own_taxable2 = (net_salary2 - per_deducted2).max(Decimal::ZERO);
        let capped2 = schedule.evaluate_capped(
            own_taxable2,
            parts / Decimal::TWO,
            MaritalStatus::Single,
        )?;
        let tax2 = capped2.tax;
        let tax1 = (final_tax - tax2).max(Decimal::ZERO);

        let rate_for = |tax: Decimal, salary: Decimal| {
            if salary > Decimal::ZERO {
                round_half_up(tax / salary * Decimal::ONE_HUNDRED)
            } else {
                Decimal::ZERO
            }
        };

        Ok((
            rate_for(tax1, inputs.earner1.salary),
            rate_for(tax2, inputs.earner2.salary),
        ))
    }
}
