//! Projection input parameters and range validation
//!
//! The projector and benefit calculators trust their inputs; all range checks
//! live here and are invoked by the calling layer (the CLI, a web form, ...)
//! before anything reaches the core. Invalid combinations are rejected up
//! front or produce a defined degenerate result, never a panic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schedule::PayCommissionSchedule;

/// Fitment factor assumed when the caller leaves one unspecified
pub const DEFAULT_FITMENT_FACTOR: f64 = 2.10;

/// Latest retirement year the calculator supports
pub const MAX_RETIREMENT_YEAR: i32 = 2070;

/// Whether a numeric input was supplied by the caller or filled in from a
/// built-in default. Surfaced so the presentation layer can tell the two
/// apart instead of a default silently standing in for user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueSource {
    Provided,
    Defaulted,
}

/// A fitment multiplier together with its provenance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitmentFactor {
    pub value: f64,
    pub source: ValueSource,
}

impl FitmentFactor {
    pub fn provided(value: f64) -> Self {
        Self { value, source: ValueSource::Provided }
    }

    pub fn defaulted() -> Self {
        Self { value: DEFAULT_FITMENT_FACTOR, source: ValueSource::Defaulted }
    }
}

/// Inputs for a single salary projection run
///
/// `base_year` is the simulation's "current year". It is passed in explicitly
/// rather than read from the clock so that identical parameters always yield
/// bit-identical output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionParameters {
    /// First simulated year
    pub base_year: i32,

    /// Monthly basic pay in the base year (rupees)
    pub start_basic_pay: f64,

    /// DA percentage in force in the base year
    pub start_da_percent: f64,

    /// Last simulated year (inclusive)
    pub retirement_year: i32,

    /// HRA as a percentage of basic pay, unaffected by transitions
    pub hra_percent: f64,

    /// Annual DA growth in percentage points
    pub annual_da_growth_percent: f64,

    /// Annual increment applied to basic pay, percent
    pub annual_increment_percent: f64,

    /// Fitment factors keyed by commission id, present only for revisions
    /// reachable on or before the retirement year
    pub fitment_factors: BTreeMap<u8, FitmentFactor>,
}

impl ProjectionParameters {
    /// Factor to apply when `commission` transitions, or `None` when the
    /// revision is not applicable for this retirement year or the caller
    /// supplied no factor for it.
    pub fn fitment_for(
        &self,
        schedule: &PayCommissionSchedule,
        commission: &crate::schedule::PayCommission,
    ) -> Option<f64> {
        if !schedule.is_applicable(commission, self.retirement_year) {
            return None;
        }
        self.fitment_factors.get(&commission.id).map(|f| f.value)
    }

    /// Enforce the documented input ranges. Called by the input boundary,
    /// never by the core computations.
    pub fn validate(&self, schedule: &PayCommissionSchedule) -> Result<(), ValidationError> {
        if !(self.start_basic_pay > 0.0) {
            return Err(ValidationError::BasicPay);
        }
        if !(0.0..=100.0).contains(&self.start_da_percent) {
            return Err(ValidationError::DaPercent);
        }
        if self.retirement_year < self.base_year || self.retirement_year > MAX_RETIREMENT_YEAR {
            return Err(ValidationError::RetirementYear {
                base_year: self.base_year,
            });
        }
        if !(0.0..=100.0).contains(&self.hra_percent) {
            return Err(ValidationError::HraPercent);
        }
        if !(0.0..=50.0).contains(&self.annual_da_growth_percent) {
            return Err(ValidationError::DaGrowth);
        }
        if !(0.0..=20.0).contains(&self.annual_increment_percent) {
            return Err(ValidationError::Increment);
        }
        for commission in schedule.reachable_revisions(self.retirement_year) {
            match self.fitment_factors.get(&commission.id) {
                None => {
                    return Err(ValidationError::MissingFitment { label: commission.label })
                }
                Some(f) if !(f.value > 0.0 && f.value <= 5.0) => {
                    return Err(ValidationError::FitmentRange { label: commission.label })
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

/// Inputs for the retirement benefit engine, on top of a salary projection
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BenefitInputs {
    /// NPS corpus already accumulated before the base year (rupees)
    pub existing_corpus: f64,

    /// Expected annual NPS return for the moderate scenario, percent
    pub expected_return_percent: f64,

    /// Annuity purchase rate for the moderate scenario, percent
    pub annuity_rate_percent: f64,

    /// Total years of qualifying service at retirement
    pub total_service_years: f64,
}

impl BenefitInputs {
    /// Range checks for the benefit-side inputs
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.existing_corpus < 0.0 {
            return Err(ValidationError::Corpus);
        }
        if !(5.0..=15.0).contains(&self.expected_return_percent) {
            return Err(ValidationError::ExpectedReturn);
        }
        if !(4.0..=8.0).contains(&self.annuity_rate_percent) {
            return Err(ValidationError::AnnuityRate);
        }
        if !(10.0..=50.0).contains(&self.total_service_years) {
            return Err(ValidationError::ServiceYears);
        }
        Ok(())
    }
}

/// Out-of-range input, reported field by field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("basic pay must be greater than 0")]
    BasicPay,

    #[error("DA percentage must be between 0 and 100")]
    DaPercent,

    #[error("retirement year must be between {base_year} and 2070")]
    RetirementYear { base_year: i32 },

    #[error("HRA percentage must be between 0 and 100")]
    HraPercent,

    #[error("annual DA growth must be between 0 and 50")]
    DaGrowth,

    #[error("annual increment must be between 0 and 20")]
    Increment,

    #[error("{label} fitment factor is required for this retirement year")]
    MissingFitment { label: &'static str },

    #[error("{label} fitment factor must be greater than 0 and at most 5")]
    FitmentRange { label: &'static str },

    #[error("existing corpus cannot be negative")]
    Corpus,

    #[error("expected return must be between 5% and 15%")]
    ExpectedReturn,

    #[error("annuity rate must be between 4% and 8%")]
    AnnuityRate,

    #[error("total service years must be between 10 and 50")]
    ServiceYears,
}
