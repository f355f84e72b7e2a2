//! UPS (Unified Pension Scheme) defined-benefit derivation
//!
//! Formula-based pension, gratuity and family pension from final pay and
//! service length, plus the contribution totals accumulated over the career.

use serde::{Deserialize, Serialize};

use crate::projection::{round_rupee, SalaryRecord};
use super::BenefitError;

/// Minimum qualifying service for any pension
pub const VESTING_SERVICE_YEARS: f64 = 10.0;

/// Statutory monthly pension floor, rupees
pub const MINIMUM_MONTHLY_PENSION: f64 = 10_000.0;

/// Pension accrues as service/50 of final basic pay, capped at half pay
pub const PENSION_ACCRUAL_DENOMINATOR: f64 = 50.0;
pub const MAX_PENSION_FRACTION: f64 = 0.50;

/// Family pension as a fraction of the pension
pub const FAMILY_PENSION_FRACTION: f64 = 0.60;

/// Employee contribution as a fraction of basic + DA
pub const EMPLOYEE_CONTRIBUTION_RATE: f64 = 0.10;

/// Government contribution as a fraction of basic + DA
pub const GOVT_CONTRIBUTION_RATE: f64 = 0.185;

/// UPS outcome, monetary fields in whole rupees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpsResult {
    pub years_of_service: f64,

    /// Basic pay in the retirement year
    pub final_basic_pay: i64,

    /// DA amount in the retirement year
    pub final_da_amount: i64,

    /// Zero below the vesting threshold, otherwise floored at the statutory
    /// minimum
    pub monthly_pension: i64,

    /// Gratuity: 15 days' pay per year of service at a 26-working-day month
    pub lump_sum: i64,

    pub family_pension: i64,

    pub total_employee_contribution: i64,
    pub total_govt_contribution: i64,
    pub total_contribution: i64,
}

/// Derives the UPS benefit from a salary record sequence
#[derive(Debug, Clone, Copy)]
pub struct UpsCalculator {
    base_year: i32,
}

impl UpsCalculator {
    pub fn new(base_year: i32) -> Self {
        Self { base_year }
    }

    /// Compute the UPS outcome from the final (retirement-year) record.
    ///
    /// Fails with [`BenefitError::EmptyProjection`] rather than indexing into
    /// an empty sequence.
    pub fn compute(
        &self,
        total_service_years: f64,
        records: &[SalaryRecord],
    ) -> Result<UpsResult, BenefitError> {
        let final_record = records.last().ok_or(BenefitError::EmptyProjection)?;
        let final_basic_pay = final_record.basic_pay;
        let final_da_amount = final_record.da_amount;
        let final_basic_and_da = (final_basic_pay + final_da_amount) as f64;

        // Pro-rata accrual, capped at half of final basic pay; no pension at
        // all below the vesting threshold
        let monthly_pension = if total_service_years < VESTING_SERVICE_YEARS {
            0.0
        } else {
            let fraction =
                (total_service_years / PENSION_ACCRUAL_DENOMINATOR).min(MAX_PENSION_FRACTION);
            (final_basic_pay as f64 * fraction).max(MINIMUM_MONTHLY_PENSION)
        };

        let family_pension = monthly_pension * FAMILY_PENSION_FRACTION;

        // Gratuity is earned regardless of vesting
        let lump_sum = final_basic_and_da / 26.0 * 15.0 * total_service_years;

        let mut total_employee_contribution = 0.0;
        let mut total_govt_contribution = 0.0;
        for record in records {
            if record.is_transition || record.year < self.base_year {
                continue;
            }
            let base = (record.basic_pay + record.da_amount) as f64;
            total_employee_contribution += base * EMPLOYEE_CONTRIBUTION_RATE * 12.0;
            total_govt_contribution += base * GOVT_CONTRIBUTION_RATE * 12.0;
        }

        Ok(UpsResult {
            years_of_service: total_service_years,
            final_basic_pay,
            final_da_amount,
            monthly_pension: round_rupee(monthly_pension),
            lump_sum: round_rupee(lump_sum),
            family_pension: round_rupee(family_pension),
            total_employee_contribution: round_rupee(total_employee_contribution),
            total_govt_contribution: round_rupee(total_govt_contribution),
            total_contribution: round_rupee(total_employee_contribution + total_govt_contribution),
        })
    }
}
