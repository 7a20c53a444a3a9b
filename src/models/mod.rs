mod bareme;
mod household;
mod marital_status;
mod simulation_result;
mod tax_bracket;

pub use bareme::Bareme;
pub use household::{EarnerInputs, HouseholdInputs};
pub use marital_status::MaritalStatus;
pub use simulation_result::{
    BracketContribution, FamilyQuotientCap, PerOptimization, PerWarning, SimulationResult,
    WithholdingRates,
};
pub use tax_bracket::TaxBracket;
