//! NPS vs UPS comparison metrics
//!
//! Ranks the two schemes on monthly pension, lump sum and a fixed-horizon
//! lifetime value, and derives the breakeven point where the higher-pension
//! scheme catches up on the lump-sum gap.

use serde::{Deserialize, Serialize};

use crate::benefits::{NpsScenarioResult, UpsResult};

/// Post-retirement horizon used for lifetime value, years
pub const LIFETIME_HORIZON_YEARS: i64 = 20;

/// Which scheme wins a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scheme {
    Nps,
    Ups,
}

/// Head-to-head comparison of the moderate NPS scenario against UPS
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub pension_winner: Scheme,

    /// Winning monthly pension over the losing one; infinity when the loser
    /// is zero
    pub pension_ratio: f64,

    pub lump_sum_winner: Scheme,
    pub lump_sum_ratio: f64,

    /// Lump sum plus 20 years of monthly pension
    pub nps_lifetime_value: i64,
    pub ups_lifetime_value: i64,
    pub lifetime_winner: Scheme,
    pub lifetime_margin: i64,

    /// Years for the lower-lump-sum, higher-pension scheme to close the
    /// lump-sum gap; `None` when the pensions are equal
    pub breakeven_years: Option<f64>,
}

/// Derives ranking and breakeven metrics from the two benefit results
#[derive(Debug, Clone, Copy, Default)]
pub struct ComparisonAnalyzer;

impl ComparisonAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn compare(&self, nps: &NpsScenarioResult, ups: &UpsResult) -> ComparisonResult {
        let (pension_winner, pension_ratio) =
            rank(ups.monthly_pension, nps.monthly_pension, Scheme::Ups, Scheme::Nps);
        let (lump_sum_winner, lump_sum_ratio) =
            rank(nps.lump_sum, ups.lump_sum, Scheme::Nps, Scheme::Ups);

        let nps_lifetime_value = lifetime_value(nps.lump_sum, nps.monthly_pension);
        let ups_lifetime_value = lifetime_value(ups.lump_sum, ups.monthly_pension);
        let lifetime_winner = if ups_lifetime_value > nps_lifetime_value {
            Scheme::Ups
        } else {
            Scheme::Nps
        };

        let pension_diff = (ups.monthly_pension - nps.monthly_pension).abs();
        let lump_sum_diff = (nps.lump_sum - ups.lump_sum).abs();
        let breakeven_years = if pension_diff == 0 {
            None
        } else {
            Some(lump_sum_diff as f64 / (pension_diff as f64 * 12.0))
        };

        ComparisonResult {
            pension_winner,
            pension_ratio,
            lump_sum_winner,
            lump_sum_ratio,
            nps_lifetime_value,
            ups_lifetime_value,
            lifetime_winner,
            lifetime_margin: (nps_lifetime_value - ups_lifetime_value).abs(),
            breakeven_years,
        }
    }
}

/// Lump sum plus the pension stream over the fixed horizon
fn lifetime_value(lump_sum: i64, monthly_pension: i64) -> i64 {
    lump_sum + monthly_pension * 12 * LIFETIME_HORIZON_YEARS
}

/// Winner on a strictly-greater basis (ties go to `runner_up`), with the
/// winner-to-loser ratio. A zero loser maps to infinity, never NaN.
fn rank(challenger: i64, incumbent: i64, challenger_scheme: Scheme, runner_up: Scheme) -> (Scheme, f64) {
    let (winner, win_value, lose_value) = if challenger > incumbent {
        (challenger_scheme, challenger, incumbent)
    } else {
        (runner_up, incumbent, challenger)
    };
    let ratio = if lose_value == 0 {
        f64::INFINITY
    } else {
        win_value as f64 / lose_value as f64
    };
    (winner, ratio)
}
