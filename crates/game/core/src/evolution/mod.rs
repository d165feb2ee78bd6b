//! Evolution gating.
//!
//! Paths are evaluated on demand against a live weapon. Nothing here mutates a
//! weapon: committing an evolution is the caller's job (see the runtime driver).

mod evaluator;
mod path;

pub use evaluator::{
    RequirementCheck, RequirementReport, available_evolutions, is_satisfied, requirement_report,
};
pub use path::EvolutionPath;
