//! Projection state: the explicit accumulator for the year-by-year fold

use crate::params::ProjectionParameters;
use crate::schedule::PayCommission;
use super::records::{round_rupee, SalaryRecord};

/// Running pay state carried from one simulated year to the next
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Monthly basic pay, whole rupees
    pub basic_pay: i64,

    /// DA percentage currently in force
    pub da_percent: f64,

    /// Commission whose pay scale is in force
    pub active_commission: PayCommission,
}

impl ProjectionState {
    /// Initialize state at the base year
    pub fn from_params(params: &ProjectionParameters, initial_commission: PayCommission) -> Self {
        Self {
            basic_pay: round_rupee(params.start_basic_pay),
            da_percent: params.start_da_percent,
            active_commission: initial_commission,
        }
    }

    /// Apply a pay commission revaluation: multiply basic pay by the fitment
    /// factor, reset DA to zero, switch the active commission. Returns the
    /// transition record for the instant of revaluation.
    pub fn apply_transition(
        &mut self,
        commission: PayCommission,
        fitment_factor: f64,
        year: i32,
        hra_percent: f64,
    ) -> SalaryRecord {
        let old_basic_pay = self.basic_pay;
        self.basic_pay = round_rupee(self.basic_pay as f64 * fitment_factor);
        self.da_percent = 0.0;
        self.active_commission = commission;

        SalaryRecord {
            year,
            commission_id: commission.id,
            commission_label: format!("{} Transition", commission.label),
            basic_pay: self.basic_pay,
            da_percent: 0.0,
            da_amount: 0,
            hra_amount: round_rupee(self.basic_pay as f64 * hra_percent / 100.0),
            gross_salary: round_rupee(self.basic_pay as f64 * (1.0 + hra_percent / 100.0)),
            is_transition: true,
            fitment_factor: Some(fitment_factor),
            old_basic_pay: Some(old_basic_pay),
        }
    }

    /// The plain salary record for a year under the current state
    pub fn year_record(&self, year: i32, hra_percent: f64) -> SalaryRecord {
        let da_amount = round_rupee(self.basic_pay as f64 * self.da_percent / 100.0);
        let hra_amount = round_rupee(self.basic_pay as f64 * hra_percent / 100.0);

        SalaryRecord {
            year,
            commission_id: self.active_commission.id,
            commission_label: self.active_commission.label.to_string(),
            basic_pay: self.basic_pay,
            da_percent: self.da_percent,
            da_amount,
            hra_amount,
            gross_salary: self.basic_pay + da_amount + hra_amount,
            is_transition: false,
            fitment_factor: None,
            old_basic_pay: None,
        }
    }

    /// Advance from `year` into `year + 1`: compound the annual increment and
    /// grow DA. DA stays flat only when it sits at zero during the active
    /// commission's first in-force year (it was just reset); in every other
    /// year it grows by the annual step.
    pub fn advance_year(&mut self, year: i32, params: &ProjectionParameters) {
        self.basic_pay = round_rupee(
            self.basic_pay as f64 * (1.0 + params.annual_increment_percent / 100.0),
        );

        if self.da_percent > 0.0 || (year + 1) > self.active_commission.effective_year {
            self.da_percent += params.annual_da_growth_percent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::PayCommissionSchedule;
    use std::collections::BTreeMap;

    fn params() -> ProjectionParameters {
        ProjectionParameters {
            base_year: 2025,
            start_basic_pay: 56_100.0,
            start_da_percent: 42.0,
            retirement_year: 2030,
            hra_percent: 24.0,
            annual_da_growth_percent: 3.0,
            annual_increment_percent: 3.0,
            fitment_factors: BTreeMap::new(),
        }
    }

    #[test]
    fn test_transition_resets_da_and_scales_basic() {
        let schedule = PayCommissionSchedule::new();
        let mut state = ProjectionState::from_params(&params(), schedule.by_id(7).unwrap());
        state.basic_pay = 57_783;
        state.da_percent = 45.0;

        let record = state.apply_transition(schedule.by_id(8).unwrap(), 2.10, 2026, 24.0);

        assert_eq!(state.basic_pay, 121_344); // round(57783 * 2.10)
        assert_eq!(state.da_percent, 0.0);
        assert_eq!(state.active_commission.id, 8);

        assert!(record.is_transition);
        assert_eq!(record.old_basic_pay, Some(57_783));
        assert_eq!(record.fitment_factor, Some(2.10));
        assert_eq!(record.da_amount, 0);
        assert_eq!(record.hra_amount, 29_123);
        assert_eq!(record.gross_salary, 150_467);
        assert_eq!(record.commission_label, "8th CPC Transition");
    }

    #[test]
    fn test_year_record_sums_components() {
        let schedule = PayCommissionSchedule::new();
        let state = ProjectionState::from_params(&params(), schedule.by_id(7).unwrap());

        let record = state.year_record(2025, 24.0);
        assert_eq!(record.basic_pay, 56_100);
        assert_eq!(record.da_amount, 23_562); // 56100 * 0.42
        assert_eq!(record.hra_amount, 13_464); // 56100 * 0.24
        assert_eq!(record.gross_salary, 56_100 + 23_562 + 13_464);
        assert!(!record.is_transition);
    }

    #[test]
    fn test_advance_year_compounds_and_grows_da() {
        let schedule = PayCommissionSchedule::new();
        let p = params();
        let mut state = ProjectionState::from_params(&p, schedule.by_id(7).unwrap());

        state.advance_year(2025, &p);
        assert_eq!(state.basic_pay, 57_783); // round(56100 * 1.03)
        assert_eq!(state.da_percent, 45.0);
    }

    #[test]
    fn test_da_grows_from_zero_after_commission_first_year() {
        let schedule = PayCommissionSchedule::new();
        let p = params();
        let mut state = ProjectionState::from_params(&p, schedule.by_id(8).unwrap());
        state.da_percent = 0.0;

        // 2026 is the 8th CPC's first in-force year; the year after it counts
        // as "past the effective year" so DA resumes growing
        state.advance_year(2026, &p);
        assert_eq!(state.da_percent, 3.0);
    }
}
