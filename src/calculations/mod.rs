//! Tax calculation modules.
//!
//! Each step of the household pipeline lives in its own module: earner
//! deductions, family-quotient parts, the progressive schedule with its
//! capping rule, the PER advisor, and the aggregation pipeline that ties
//! them together.

pub mod common;
pub mod deduction;
pub mod parts;
pub mod per;
pub mod schedule;
pub mod simulation;

pub use deduction::salary_deduction;
pub use parts::household_parts;
pub use per::per_optimization;
pub use schedule::{BracketEvaluation, CappedEvaluation, IncomeTaxSchedule, TaxScheduleError};
pub use simulation::TaxSimulator;
