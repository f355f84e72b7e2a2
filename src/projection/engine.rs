//! Core salary projector: the year-by-year trajectory fold
//!
//! Walks every calendar year from the base year through the retirement year,
//! applying pay commission revaluations at their epochs, annual increments to
//! basic pay, and DA growth, emitting one record per year (two on transition
//! years).

use log::debug;

use crate::params::ProjectionParameters;
use crate::schedule::PayCommissionSchedule;
use super::records::SalaryProjection;
use super::state::ProjectionState;

/// Builds the year-indexed salary record sequence
#[derive(Debug, Clone, Copy, Default)]
pub struct SalaryProjector {
    schedule: PayCommissionSchedule,
}

impl SalaryProjector {
    pub fn new() -> Self {
        Self { schedule: PayCommissionSchedule::new() }
    }

    pub fn with_schedule(schedule: PayCommissionSchedule) -> Self {
        Self { schedule }
    }

    /// Run the projection for the given parameters.
    ///
    /// Covers every integer year in `base_year..=retirement_year` inclusive.
    /// A retirement year before the base year yields an empty sequence; the
    /// caller is expected to have rejected that combination already.
    pub fn project(&self, params: &ProjectionParameters) -> SalaryProjection {
        let mut records = Vec::new();
        let mut state =
            ProjectionState::from_params(params, self.schedule.active_commission(params.base_year));

        for year in params.base_year..=params.retirement_year {
            if let Some(commission) = self.schedule.transition_at(year) {
                if let Some(factor) = params.fitment_for(&self.schedule, &commission) {
                    debug!(
                        "{} transition in {}: basic {} x {}",
                        commission.label, year, state.basic_pay, factor
                    );
                    records.push(state.apply_transition(
                        commission,
                        factor,
                        year,
                        params.hra_percent,
                    ));
                }
            }

            records.push(state.year_record(year, params.hra_percent));

            if year < params.retirement_year {
                state.advance_year(year, params);
            }
        }

        SalaryProjection {
            base_year: params.base_year,
            retirement_year: params.retirement_year,
            records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::FitmentFactor;
    use approx::assert_relative_eq;
    use std::collections::BTreeMap;

    fn example_params() -> ProjectionParameters {
        // Worked example: two years to retirement, 8th CPC epoch lands on the
        // retirement year
        let mut fitment_factors = BTreeMap::new();
        fitment_factors.insert(8, FitmentFactor::provided(2.10));
        ProjectionParameters {
            base_year: 2024,
            start_basic_pay: 56_100.0,
            start_da_percent: 42.0,
            retirement_year: 2026,
            hra_percent: 24.0,
            annual_da_growth_percent: 3.0,
            annual_increment_percent: 3.0,
            fitment_factors,
        }
    }

    #[test]
    fn test_worked_example() {
        let projection = SalaryProjector::new().project(&example_params());

        // 3 plain years + 1 transition row
        assert_eq!(projection.records.len(), 4);

        let y0 = &projection.records[0];
        assert_eq!((y0.year, y0.basic_pay), (2024, 56_100));
        assert_relative_eq!(y0.da_percent, 42.0);

        let y1 = &projection.records[1];
        assert_eq!((y1.year, y1.basic_pay), (2025, 57_783));
        assert_relative_eq!(y1.da_percent, 45.0);

        let transition = &projection.records[2];
        assert!(transition.is_transition);
        assert_eq!(transition.year, 2026);
        assert_eq!(transition.basic_pay, 121_344);
        assert_eq!(transition.da_percent, 0.0);
        assert_eq!(transition.hra_amount, 29_123);
        assert_eq!(transition.gross_salary, 150_467);
        assert_eq!(transition.old_basic_pay, Some(57_783));

        // Plain retirement-year row follows the transition, same year
        let y2 = &projection.records[3];
        assert!(!y2.is_transition);
        assert_eq!(y2.year, 2026);
        assert_eq!(y2.basic_pay, 121_344);
        assert_eq!(y2.da_percent, 0.0);
        assert_eq!(y2.commission_id, 8);
    }

    #[test]
    fn test_determinism() {
        let params = example_params();
        let projector = SalaryProjector::new();
        assert_eq!(projector.project(&params), projector.project(&params));
    }

    #[test]
    fn test_basic_pay_monotonic() {
        let mut params = example_params();
        params.retirement_year = 2040;
        params.fitment_factors.insert(9, FitmentFactor::provided(1.8));

        let projection = SalaryProjector::new().project(&params);
        let mut prev = 0;
        for record in projection.records.iter().filter(|r| !r.is_transition) {
            assert!(record.basic_pay >= prev, "basic pay decreased in {}", record.year);
            prev = record.basic_pay;
        }
    }

    #[test]
    fn test_one_transition_per_applicable_revision() {
        let mut params = example_params();
        params.retirement_year = 2050;
        params.fitment_factors.insert(9, FitmentFactor::provided(2.0));
        params.fitment_factors.insert(10, FitmentFactor::provided(2.0));

        let projection = SalaryProjector::new().project(&params);
        for epoch in [2026, 2036, 2046] {
            let transitions: Vec<_> = projection
                .records
                .iter()
                .filter(|r| r.year == epoch && r.is_transition)
                .collect();
            assert_eq!(transitions.len(), 1, "expected one transition in {}", epoch);
            assert_eq!(transitions[0].da_percent, 0.0);
        }
    }

    #[test]
    fn test_missing_factor_skips_transition() {
        // No factor supplied for the 9th CPC: 2036 passes without a
        // revaluation even though the epoch falls inside the range
        let mut params = example_params();
        params.retirement_year = 2038;
        let projection = SalaryProjector::new().project(&params);

        assert!(projection.records.iter().any(|r| r.year == 2026 && r.is_transition));
        assert!(!projection.records.iter().any(|r| r.year == 2036 && r.is_transition));

        // Pay under the 8th CPC keeps compounding through 2036
        let y2036 = projection
            .records
            .iter()
            .find(|r| r.year == 2036 && !r.is_transition)
            .unwrap();
        assert_eq!(y2036.commission_id, 8);
    }

    #[test]
    fn test_da_resumes_growth_after_transition_year() {
        let mut params = example_params();
        params.retirement_year = 2028;

        let projection = SalaryProjector::new().project(&params);
        let da_by_year: Vec<(i32, f64)> = projection
            .records
            .iter()
            .filter(|r| !r.is_transition)
            .map(|r| (r.year, r.da_percent))
            .collect();

        // Reset to 0 in 2026, growing again from 2027
        assert_eq!(da_by_year, vec![
            (2024, 42.0),
            (2025, 45.0),
            (2026, 0.0),
            (2027, 3.0),
            (2028, 6.0),
        ]);
    }

    #[test]
    fn test_single_year_projection() {
        let mut params = example_params();
        params.retirement_year = 2024;
        params.fitment_factors.clear();

        let projection = SalaryProjector::new().project(&params);
        assert_eq!(projection.records.len(), 1);
        assert_eq!(projection.records[0].basic_pay, 56_100);
    }

    #[test]
    fn test_retirement_before_base_year_yields_empty_sequence() {
        let mut params = example_params();
        params.retirement_year = 2023;
        params.fitment_factors.clear();

        let projection = SalaryProjector::new().project(&params);
        assert!(projection.records.is_empty());
    }

    #[test]
    fn test_zero_rates_hold_salary_flat() {
        let mut params = example_params();
        params.retirement_year = 2025;
        params.annual_increment_percent = 0.0;
        params.annual_da_growth_percent = 0.0;
        params.fitment_factors.clear();

        let projection = SalaryProjector::new().project(&params);
        assert_eq!(projection.records[0].basic_pay, projection.records[1].basic_pay);
        assert_relative_eq!(projection.records[0].da_percent, projection.records[1].da_percent);
    }
}
