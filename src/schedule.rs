//! Central Pay Commission schedule
//!
//! Fixed lookup table of the decade-spaced pay revision epochs. The 7th CPC
//! (2016) is the baseline everyone starts under; the 8th through 11th apply a
//! fitment factor to basic pay and reset DA when their effective year arrives.

use serde::Serialize;

/// A single pay commission epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PayCommission {
    /// Commission number (7..=11)
    pub id: u8,

    /// Calendar year the revised pay scale takes effect
    pub effective_year: i32,

    /// Display label, e.g. "8th CPC"
    pub label: &'static str,
}

/// Commission id of the baseline (currently in-force) pay scale
pub const BASELINE_COMMISSION_ID: u8 = 7;

/// The fixed commission set, ordered by effective year
pub const COMMISSIONS: [PayCommission; 5] = [
    PayCommission { id: 7, effective_year: 2016, label: "7th CPC" },
    PayCommission { id: 8, effective_year: 2026, label: "8th CPC" },
    PayCommission { id: 9, effective_year: 2036, label: "9th CPC" },
    PayCommission { id: 10, effective_year: 2046, label: "10th CPC" },
    PayCommission { id: 11, effective_year: 2056, label: "11th CPC" },
];

/// Pure lookup table over the fixed commission set
#[derive(Debug, Clone, Copy, Default)]
pub struct PayCommissionSchedule;

impl PayCommissionSchedule {
    pub fn new() -> Self {
        Self
    }

    /// Commission in force for a given year: the one with the largest
    /// `effective_year <= year`. Years before 2016 clamp to the 7th CPC.
    pub fn active_commission(&self, year: i32) -> PayCommission {
        COMMISSIONS
            .iter()
            .rev()
            .find(|c| c.effective_year <= year)
            .copied()
            .unwrap_or(COMMISSIONS[0])
    }

    /// The revision (id > 7) whose scale takes effect in exactly this year,
    /// if any. The baseline 7th CPC never produces a transition.
    pub fn transition_at(&self, year: i32) -> Option<PayCommission> {
        COMMISSIONS
            .iter()
            .find(|c| c.id > BASELINE_COMMISSION_ID && c.effective_year == year)
            .copied()
    }

    /// Look up a commission by id
    pub fn by_id(&self, id: u8) -> Option<PayCommission> {
        COMMISSIONS.iter().find(|c| c.id == id).copied()
    }

    /// Whether a fitment factor for `commission` can apply at all for someone
    /// retiring in `retirement_year`. A user who retires before a revision
    /// takes effect never sees its transition.
    pub fn is_applicable(&self, commission: &PayCommission, retirement_year: i32) -> bool {
        retirement_year >= commission.effective_year
    }

    /// Revisions (id > 7) reachable on or before the retirement year, in
    /// effective-year order. These are the commissions that require a fitment
    /// factor from the caller.
    pub fn reachable_revisions(&self, retirement_year: i32) -> Vec<PayCommission> {
        COMMISSIONS
            .iter()
            .filter(|c| c.id > BASELINE_COMMISSION_ID && c.effective_year <= retirement_year)
            .copied()
            .collect()
    }
}
