//! Calculation engine for French personal income tax.
//!
//! Computes a household's income tax from declared salaries and deductions,
//! applying the 2025 progressive schedule, the family-quotient mechanism
//! with its legal capping rule, per-spouse withholding-rate allocation and a
//! PER retirement-savings optimization estimate.
//!
//! The engine is a pure function of its inputs: every call receives a
//! complete [`HouseholdInputs`] snapshot and returns a freshly computed
//! [`SimulationResult`]. There is no state across calls, no persistence and
//! no I/O; presentation (forms, charts, formatting) is the caller's concern.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use impot_core::{Bareme, EarnerInputs, HouseholdInputs, MaritalStatus, TaxSimulator};
//!
//! let bareme = Bareme::y2025();
//! let simulator = TaxSimulator::new(&bareme);
//!
//! let inputs = HouseholdInputs {
//!     situation: MaritalStatus::Couple,
//!     children: dec!(2),
//!     earner1: EarnerInputs { salary: dec!(55000), ..Default::default() },
//!     earner2: EarnerInputs { salary: dec!(45000), ..Default::default() },
//!     common_charges: dec!(0),
//!     reduction: dec!(0),
//! };
//!
//! let result = simulator.run(&inputs).unwrap();
//!
//! assert_eq!(result.parts, dec!(3));
//! assert!(result.final_tax > dec!(0));
//! ```

pub mod calculations;
pub mod models;

pub use calculations::{IncomeTaxSchedule, TaxScheduleError, TaxSimulator};
pub use models::*;
