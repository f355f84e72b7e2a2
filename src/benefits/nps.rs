//! NPS (National Pension System) corpus accumulation
//!
//! Defined-contribution scheme: 10% employee + 14% employer of basic + DA,
//! compounded monthly over every covered salary year. At retirement 60% of
//! the corpus pays out as a lump sum and 40% purchases an annuity.

use serde::{Deserialize, Serialize};

use crate::projection::{round_rupee, SalaryRecord};

/// Employee contribution as a fraction of basic + DA
pub const EMPLOYEE_CONTRIBUTION_RATE: f64 = 0.10;

/// Central government employer contribution as a fraction of basic + DA
pub const EMPLOYER_CONTRIBUTION_RATE: f64 = 0.14;

/// Corpus share withdrawn as a lump sum at retirement
pub const LUMP_SUM_FRACTION: f64 = 0.60;

/// Conservative scenario rate pair: annual return / annuity rate, percent
pub const CONSERVATIVE_RETURN_RATE: f64 = 8.0;
pub const CONSERVATIVE_ANNUITY_RATE: f64 = 5.0;

/// Aggressive scenario rate pair: annual return / annuity rate, percent
pub const AGGRESSIVE_RETURN_RATE: f64 = 12.0;
pub const AGGRESSIVE_ANNUITY_RATE: f64 = 7.0;

/// Outcome of one NPS accumulation run, monetary fields in whole rupees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpsScenarioResult {
    /// Un-discounted cash the employee paid in
    pub total_invested_employee: i64,

    /// Un-discounted cash the employer paid in
    pub total_invested_employer: i64,

    pub total_invested: i64,

    /// Corpus at retirement after monthly compounding
    pub final_corpus: i64,

    /// 60% of the corpus
    pub lump_sum: i64,

    /// 40% of the corpus, used to purchase the annuity
    pub annuity_amount: i64,

    pub monthly_pension: i64,

    /// Annual return assumption this scenario used, percent
    pub return_rate_percent: f64,
}

/// The three standard scenarios computed over the same projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpsScenarios {
    /// Fixed 8% return, 5% annuity
    pub conservative: NpsScenarioResult,

    /// Caller-supplied return and annuity rates
    pub moderate: NpsScenarioResult,

    /// Fixed 12% return, 7% annuity
    pub aggressive: NpsScenarioResult,
}

/// Accumulates the NPS corpus over a salary record sequence
#[derive(Debug, Clone, Copy)]
pub struct NpsCalculator {
    base_year: i32,
}

impl NpsCalculator {
    pub fn new(base_year: i32) -> Self {
        Self { base_year }
    }

    /// Run a single accumulation.
    ///
    /// Covers every non-transition record from the base year on. The monthly
    /// contribution base is basic + DA (HRA never counts). Each covered year
    /// contributes 12 monthly steps where growth applies before the month's
    /// contribution is added. An empty or entirely pre-base-year sequence
    /// leaves the corpus at `existing_corpus`.
    pub fn accumulate(
        &self,
        existing_corpus: f64,
        annual_return_percent: f64,
        annuity_rate_percent: f64,
        records: &[SalaryRecord],
    ) -> NpsScenarioResult {
        let monthly_return = annual_return_percent / 12.0 / 100.0;

        let mut corpus = existing_corpus;
        let mut total_invested_employee = 0.0;
        let mut total_invested_employer = 0.0;

        for record in records {
            if record.is_transition || record.year < self.base_year {
                continue;
            }

            let base = (record.basic_pay + record.da_amount) as f64;
            let monthly_employee = base * EMPLOYEE_CONTRIBUTION_RATE;
            let monthly_employer = base * EMPLOYER_CONTRIBUTION_RATE;
            let monthly_total = monthly_employee + monthly_employer;

            total_invested_employee += monthly_employee * 12.0;
            total_invested_employer += monthly_employer * 12.0;

            for _month in 0..12 {
                corpus = corpus * (1.0 + monthly_return) + monthly_total;
            }
        }

        let lump_sum = corpus * LUMP_SUM_FRACTION;
        let annuity_amount = corpus * (1.0 - LUMP_SUM_FRACTION);
        let monthly_pension = annuity_amount * annuity_rate_percent / 100.0 / 12.0;

        NpsScenarioResult {
            total_invested_employee: round_rupee(total_invested_employee),
            total_invested_employer: round_rupee(total_invested_employer),
            total_invested: round_rupee(total_invested_employee + total_invested_employer),
            final_corpus: round_rupee(corpus),
            lump_sum: round_rupee(lump_sum),
            annuity_amount: round_rupee(annuity_amount),
            monthly_pension: round_rupee(monthly_pension),
            return_rate_percent: annual_return_percent,
        }
    }

    /// Conservative, moderate and aggressive runs over the same records and
    /// existing corpus. Only the moderate rate pair comes from the caller.
    pub fn scenarios(
        &self,
        existing_corpus: f64,
        expected_return_percent: f64,
        annuity_rate_percent: f64,
        records: &[SalaryRecord],
    ) -> NpsScenarios {
        NpsScenarios {
            conservative: self.accumulate(
                existing_corpus,
                CONSERVATIVE_RETURN_RATE,
                CONSERVATIVE_ANNUITY_RATE,
                records,
            ),
            moderate: self.accumulate(
                existing_corpus,
                expected_return_percent,
                annuity_rate_percent,
                records,
            ),
            aggressive: self.accumulate(
                existing_corpus,
                AGGRESSIVE_RETURN_RATE,
                AGGRESSIVE_ANNUITY_RATE,
                records,
            ),
        }
    }
}
