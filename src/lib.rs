//! Pension Compare - Deterministic salary trajectory and retirement benefit engine
//!
//! This library provides:
//! - Year-by-year salary projection across Central Pay Commission revisions
//! - Fitment-factor revaluations with DA reset and regrowth
//! - NPS corpus accumulation under three return scenarios
//! - UPS defined-benefit pension, gratuity and family pension derivation
//! - Head-to-head NPS/UPS comparison with breakeven analysis

pub mod schedule;
pub mod params;
pub mod projection;
pub mod benefits;
pub mod compare;
pub mod scenario;

// Re-export commonly used types
pub use schedule::{PayCommission, PayCommissionSchedule};
pub use params::{BenefitInputs, FitmentFactor, ProjectionParameters, ValidationError};
pub use projection::{SalaryProjection, SalaryProjector, SalaryRecord};
pub use benefits::{BenefitError, NpsCalculator, NpsScenarios, UpsCalculator, UpsResult};
pub use compare::{ComparisonAnalyzer, ComparisonResult, Scheme};
pub use scenario::{ScenarioRunner, SimulationOutcome};
