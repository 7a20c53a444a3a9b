use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One slice of the progressive income tax schedule.
///
/// Brackets are expressed by their upper bound: a bracket taxes the portion
/// of the per-part quotient that falls above the previous bracket's `limit`
/// and at or below its own. Tables must be sorted by strictly increasing
/// `limit`, with the last entry effectively unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Upper bound of the bracket (per part of quotient familial).
    pub limit: Decimal,
    /// Marginal rate applied within the bracket.
    pub rate: Decimal,
    /// Display label, e.g. `"11%"`.
    pub label: String,
    /// Display color (hex), consumed by the breakdown chart.
    pub color: String,
}
