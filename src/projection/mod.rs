//! Salary trajectory projection

mod state;
mod engine;
mod records;

pub use state::ProjectionState;
pub use engine::SalaryProjector;
pub use records::{round_rupee, ProjectionSummary, SalaryProjection, SalaryRecord};
