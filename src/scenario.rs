//! Scenario runner: one call from parameters to the full outcome bundle
//!
//! Chains the salary projector, both benefit engines and the comparison
//! analyzer so callers get the complete result set from validated inputs in
//! a single invocation. Stateless and side-effect free; identical inputs
//! always yield identical outcomes.

use log::info;
use serde::{Deserialize, Serialize};

use crate::benefits::{BenefitError, NpsCalculator, NpsScenarios, UpsCalculator, UpsResult};
use crate::compare::{ComparisonAnalyzer, ComparisonResult};
use crate::params::{BenefitInputs, ProjectionParameters};
use crate::projection::{SalaryProjection, SalaryProjector};
use crate::schedule::PayCommissionSchedule;

/// Everything one simulation run produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub projection: SalaryProjection,
    pub nps: NpsScenarios,
    pub ups: UpsResult,
    pub comparison: ComparisonResult,
}

/// Runs the full projection + benefits + comparison pipeline
#[derive(Debug, Clone, Copy, Default)]
pub struct ScenarioRunner {
    schedule: PayCommissionSchedule,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self { schedule: PayCommissionSchedule::new() }
    }

    pub fn schedule(&self) -> &PayCommissionSchedule {
        &self.schedule
    }

    /// Run one complete simulation. Inputs are assumed to be validated by the
    /// calling layer; the only failure here is a projection with no records
    /// for the UPS final-pay lookup.
    pub fn run(
        &self,
        params: &ProjectionParameters,
        inputs: &BenefitInputs,
    ) -> Result<SimulationOutcome, BenefitError> {
        let projection = SalaryProjector::with_schedule(self.schedule).project(params);
        info!(
            "projected {} salary records over {}..={}",
            projection.records.len(),
            params.base_year,
            params.retirement_year
        );

        let nps = NpsCalculator::new(params.base_year).scenarios(
            inputs.existing_corpus,
            inputs.expected_return_percent,
            inputs.annuity_rate_percent,
            &projection.records,
        );
        let ups = UpsCalculator::new(params.base_year)
            .compute(inputs.total_service_years, &projection.records)?;
        let comparison = ComparisonAnalyzer::new().compare(&nps.moderate, &ups);

        Ok(SimulationOutcome { projection, nps, ups, comparison })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::FitmentFactor;
    use std::collections::BTreeMap;

    fn params() -> ProjectionParameters {
        let mut fitment_factors = BTreeMap::new();
        fitment_factors.insert(8, FitmentFactor::provided(2.10));
        ProjectionParameters {
            base_year: 2025,
            start_basic_pay: 56_100.0,
            start_da_percent: 42.0,
            retirement_year: 2030,
            hra_percent: 24.0,
            annual_da_growth_percent: 3.0,
            annual_increment_percent: 3.0,
            fitment_factors,
        }
    }

    fn inputs() -> BenefitInputs {
        BenefitInputs {
            existing_corpus: 500_000.0,
            expected_return_percent: 10.0,
            annuity_rate_percent: 6.0,
            total_service_years: 32.0,
        }
    }

    #[test]
    fn test_full_pipeline() {
        let outcome = ScenarioRunner::new().run(&params(), &inputs()).unwrap();

        // 6 plain years plus the 2026 transition
        assert_eq!(outcome.projection.records.len(), 7);
        assert_eq!(outcome.projection.summary().transitions, 1);

        // UPS derives from the retirement-year record
        let final_record = outcome.projection.final_record().unwrap();
        assert_eq!(outcome.ups.final_basic_pay, final_record.basic_pay);

        // Moderate scenario carries the caller's return assumption
        assert_eq!(outcome.nps.moderate.return_rate_percent, 10.0);
        assert!(outcome.nps.moderate.final_corpus > 500_000);

        // Corpus splits 60/40 up to rounding
        let corpus = outcome.nps.moderate.final_corpus;
        let split = outcome.nps.moderate.lump_sum + outcome.nps.moderate.annuity_amount;
        assert!((corpus - split).abs() <= 1);
    }

    #[test]
    fn test_run_is_deterministic() {
        let runner = ScenarioRunner::new();
        let a = runner.run(&params(), &inputs()).unwrap();
        let b = runner.run(&params(), &inputs()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_projection_surfaces_benefit_error() {
        let mut p = params();
        p.retirement_year = 2024; // before the base year: zero records
        let result = ScenarioRunner::new().run(&p, &inputs());
        assert_eq!(result.unwrap_err(), BenefitError::EmptyProjection);
    }

    #[test]
    fn test_outcome_serializes_to_json() {
        let outcome = ScenarioRunner::new().run(&params(), &inputs()).unwrap();
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"projection\""));
        assert!(json.contains("\"breakeven_years\""));
    }
}
