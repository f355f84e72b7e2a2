//! Retirement benefit engines: NPS corpus accumulation and UPS
//! defined-benefit derivation over a salary projection

mod nps;
mod ups;

pub use nps::{
    NpsCalculator, NpsScenarioResult, NpsScenarios, AGGRESSIVE_ANNUITY_RATE,
    AGGRESSIVE_RETURN_RATE, CONSERVATIVE_ANNUITY_RATE, CONSERVATIVE_RETURN_RATE,
};
pub use ups::{UpsCalculator, UpsResult, MINIMUM_MONTHLY_PENSION, VESTING_SERVICE_YEARS};

use thiserror::Error;

/// Failures the benefit engines can report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BenefitError {
    /// UPS needs the retirement-year record; an empty projection has none
    #[error("salary projection contains no records")]
    EmptyProjection,
}
