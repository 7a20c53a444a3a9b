use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Portion of the per-part quotient taxed at one bracket's rate.
///
/// Produced fresh for every calculation and consumed by the breakdown chart
/// (stacked bar keyed by `color` and `label`). Only brackets with a strictly
/// positive taxable slice appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketContribution {
    pub label: String,
    pub rate: Decimal,
    /// Per-part amount taxed in this bracket.
    pub amount: Decimal,
    pub color: String,
}

/// Family-quotient capping detail ("plafonnement du quotient familial").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyQuotientCap {
    /// Whether the cap actually raised the tax due.
    pub is_capped: bool,
    /// Tax advantage retained from the extra parts, clipped to
    /// `max_advantage`. Zero when the household has no parts beyond its base.
    pub advantage: Decimal,
    /// Legal maximum advantage for this household's extra half-parts.
    pub max_advantage: Decimal,
    /// Legal ceiling per extra half-part, for display.
    pub cap_per_half_part: Decimal,
}

/// Estimated withholding-at-source rates ("prélèvement à la source"),
/// expressed in percent and rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithholdingRates {
    /// Household-level rate: final tax over combined gross salaries.
    pub household_rate: Decimal,
    /// Individualized rate for earner 1. Equals the household rate when the
    /// household is not a couple.
    pub earner1_rate: Decimal,
    /// Individualized rate for earner 2; zero when not a couple.
    pub earner2_rate: Decimal,
}

/// Flags raised when a PER contribution exceeds its deduction ceiling: the
/// excess is simply not deductible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerWarning {
    pub earner1_capped: bool,
    pub earner2_capped: bool,
}

/// Advisory PER contribution suggestion.
///
/// Estimates the contribution that would absorb all income currently taxed
/// at the household's top marginal bracket. Advisory only — it does not
/// re-check the deduction ceilings already applied to declared contributions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerOptimization {
    /// Suggested contribution, household level, whole euros.
    pub invest_amount: Decimal,
    /// Estimated tax saving, `round(invest_amount × marginal_rate)`.
    pub saving_amount: Decimal,
    pub message: String,
}

/// Full output of one simulation run. Recomputed from scratch on every call;
/// there are no partial-update semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Reference income ("revenu fiscal de référence", RFR): combined
    /// salaries net of earner deductions.
    pub reference_income: Decimal,
    /// Net taxable income ("revenu net imposable", RNI), never negative.
    pub net_taxable_income: Decimal,
    /// Family-quotient parts count.
    pub parts: Decimal,
    /// Per-part quotient ("quotient familial", QF): RNI divided by parts.
    pub quotient: Decimal,
    /// Marginal rate ("taux marginal d'imposition", TMI).
    pub marginal_rate: Decimal,
    /// Capped bracket tax before the reduction is applied, whole euros.
    pub tax_before_reduction: Decimal,
    /// Tax due after reduction, clamped at zero, whole euros.
    pub final_tax: Decimal,
    pub bracket_contributions: Vec<BracketContribution>,
    pub family_quotient: FamilyQuotientCap,
    pub withholding: WithholdingRates,
    pub per_warning: PerWarning,
    pub per_optimization: PerOptimization,
}
