use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::TaxBracket;

/// Parameter set for one tax year: bracket schedule plus the legal constants
/// consumed by the deduction, capping and withholding calculations.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use impot_core::Bareme;
///
/// let bareme = Bareme::y2025();
///
/// assert_eq!(bareme.year, 2025);
/// assert_eq!(bareme.brackets.len(), 5);
/// assert_eq!(bareme.standard_deduction_cap, dec!(14426));
/// assert_eq!(bareme.family_quotient_cap_per_half_part, dec!(1791));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bareme {
    pub year: i32,

    /// Progressive schedule, sorted by strictly increasing `limit`.
    pub brackets: Vec<TaxBracket>,

    /// Flat-rate salary allowance ("déduction forfaitaire de 10 %").
    pub standard_deduction_rate: Decimal,

    /// Upper cap on the flat-rate allowance, per earner.
    pub standard_deduction_cap: Decimal,

    /// Legal minimum of the flat-rate allowance.
    ///
    /// Published alongside the cap but not applied by
    /// [`salary_deduction`](crate::calculations::salary_deduction), which
    /// reproduces the declared-behavior of the simulator this engine models.
    pub standard_deduction_min: Decimal,

    /// Maximum tax advantage per extra half-part of quotient familial
    /// ("plafonnement du quotient familial").
    pub family_quotient_cap_per_half_part: Decimal,

    /// Decote parameters. The decote formula is not wired into the
    /// computation; the constants are carried so the schedule is complete.
    pub decote_threshold_single: Decimal,
    pub decote_threshold_couple: Decimal,
    pub decote_rate: Decimal,
}

impl Bareme {
    /// The 2025 schedule (2024 income).
    pub fn y2025() -> Self {
        Self {
            year: 2025,
            brackets: vec![
                TaxBracket {
                    limit: dec!(11497),
                    rate: dec!(0.00),
                    label: "0%".to_string(),
                    color: "#60a5fa".to_string(),
                },
                TaxBracket {
                    limit: dec!(29315),
                    rate: dec!(0.11),
                    label: "11%".to_string(),
                    color: "#34d399".to_string(),
                },
                TaxBracket {
                    limit: dec!(83823),
                    rate: dec!(0.30),
                    label: "30%".to_string(),
                    color: "#facc15".to_string(),
                },
                TaxBracket {
                    limit: dec!(180294),
                    rate: dec!(0.41),
                    label: "41%".to_string(),
                    color: "#f97316".to_string(),
                },
                TaxBracket {
                    limit: dec!(999999999),
                    rate: dec!(0.45),
                    label: "45%".to_string(),
                    color: "#dc2626".to_string(),
                },
            ],
            standard_deduction_rate: dec!(0.10),
            standard_deduction_cap: dec!(14426),
            standard_deduction_min: dec!(504),
            family_quotient_cap_per_half_part: dec!(1791),
            decote_threshold_single: dec!(889),
            decote_threshold_couple: dec!(1470),
            decote_rate: dec!(0.4525),
        }
    }
}
