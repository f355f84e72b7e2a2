//! Salary record output structures for projections

use serde::{Deserialize, Serialize};

/// Round a rupee amount to the nearest whole rupee, ties away from zero
pub fn round_rupee(amount: f64) -> i64 {
    amount.round() as i64
}

/// One row of the year-indexed salary sequence
///
/// A transition year produces two rows: the transition row (the instant of
/// revaluation, DA reset to 0) followed by the plain row for the same year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    pub year: i32,

    /// Commission in force when this row was emitted
    pub commission_id: u8,

    /// Display label, e.g. "8th CPC" or "8th CPC Transition"
    pub commission_label: String,

    /// Monthly basic pay, whole rupees
    pub basic_pay: i64,

    /// DA percentage in force
    pub da_percent: f64,

    pub da_amount: i64,
    pub hra_amount: i64,
    pub gross_salary: i64,

    pub is_transition: bool,

    /// Multiplier applied at the revaluation (transition rows only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitment_factor: Option<f64>,

    /// Basic pay immediately before the revaluation (transition rows only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_basic_pay: Option<i64>,
}

/// Complete salary projection: every year from the base year through the
/// retirement year, transitions interleaved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryProjection {
    pub base_year: i32,
    pub retirement_year: i32,
    pub records: Vec<SalaryRecord>,
}

impl SalaryProjection {
    /// The retirement-year row, when the projection is non-empty
    pub fn final_record(&self) -> Option<&SalaryRecord> {
        self.records.last()
    }

    /// Summary figures for the retirement year
    pub fn summary(&self) -> ProjectionSummary {
        let transitions = self.records.iter().filter(|r| r.is_transition).count() as u32;
        let final_basic_pay = self.final_record().map(|r| r.basic_pay).unwrap_or(0);
        let final_da_amount = self.final_record().map(|r| r.da_amount).unwrap_or(0);
        let final_gross_salary = self.final_record().map(|r| r.gross_salary).unwrap_or(0);

        ProjectionSummary {
            years: self.records.iter().filter(|r| !r.is_transition).count() as u32,
            transitions,
            final_basic_pay,
            final_da_amount,
            final_gross_salary,
        }
    }
}

/// Summary statistics for a salary projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub years: u32,
    pub transitions: u32,
    pub final_basic_pay: i64,
    pub final_da_amount: i64,
    pub final_gross_salary: i64,
}
