use std::fmt;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::constants::{PHASE_COUNT, PHASE_SPLIT_TOLERANCE};

/// One of the four fixed methodology stages, in delivery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Exploration,
    MonitoringSetup,
    RemediationPlanning,
    ImplementationTraining,
}

impl Phase {
    /// All phases in enumeration order.
    pub const ALL: [Phase; PHASE_COUNT] = [
        Phase::Exploration,
        Phase::MonitoringSetup,
        Phase::RemediationPlanning,
        Phase::ImplementationTraining,
    ];

    /// Zero-based ordinal.
    pub fn index(self) -> usize {
        match self {
            Phase::Exploration => 0,
            Phase::MonitoringSetup => 1,
            Phase::RemediationPlanning => 2,
            Phase::ImplementationTraining => 3,
        }
    }

    /// Human-readable title.
    pub fn title(self) -> &'static str {
        match self {
            Phase::Exploration => "Exploration",
            Phase::MonitoringSetup => "Monitoring Setup",
            Phase::RemediationPlanning => "Remediation Planning",
            Phase::ImplementationTraining => "Implementation & Training",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Exploration => "exploration",
            Phase::MonitoringSetup => "monitoring_setup",
            Phase::RemediationPlanning => "remediation_planning",
            Phase::ImplementationTraining => "implementation_training",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Per-phase percentages, one entry per [`Phase`] in enumeration order.
///
/// Constructed freely from documents; the catalog validates that entries are
/// non-negative and sum to 1.0, then stores the normalised form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhaseSplit([f64; PHASE_COUNT]);

impl PhaseSplit {
    pub fn new(weights: [f64; PHASE_COUNT]) -> Self {
        Self(weights)
    }

    /// An even 25% split.
    pub fn even() -> Self {
        Self([0.25; PHASE_COUNT])
    }

    pub fn weight(&self, phase: Phase) -> f64 {
        self.0[phase.index()]
    }

    pub fn weights(&self) -> [f64; PHASE_COUNT] {
        self.0
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Whether every entry is finite and non-negative and the sum is 1.0
    /// within [`PHASE_SPLIT_TOLERANCE`].
    pub fn is_valid(&self) -> bool {
        self.0.iter().all(|w| w.is_finite() && *w >= 0.0)
            && (self.sum() - 1.0).abs() <= PHASE_SPLIT_TOLERANCE
    }

    /// Rescale so the entries sum to exactly 1.0 (up to float rounding).
    pub fn normalized(&self) -> Self {
        let sum = self.sum();
        if sum <= 0.0 {
            return *self;
        }
        let mut out = self.0;
        for w in &mut out {
            *w /= sum;
        }
        Self(out)
    }

    /// Distribute `days` across the phases.
    ///
    /// The last phase receives the remainder so the allocation sums back to
    /// `days` without accumulating rounding error.
    pub fn allocate(&self, days: f64) -> PhaseAmounts {
        let mut out = [0.0; PHASE_COUNT];
        let mut allocated = 0.0;
        for i in 0..PHASE_COUNT - 1 {
            out[i] = days * self.0[i];
            allocated += out[i];
        }
        out[PHASE_COUNT - 1] = (days - allocated).max(0.0);
        PhaseAmounts(out)
    }
}

impl Default for PhaseSplit {
    fn default() -> Self {
        Self::even()
    }
}

/// Day (or cost) amounts per phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhaseAmounts([f64; PHASE_COUNT]);

impl PhaseAmounts {
    pub fn zero() -> Self {
        Self([0.0; PHASE_COUNT])
    }

    pub fn get(&self, phase: Phase) -> f64 {
        self.0[phase.index()]
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// `(phase, amount)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Phase, f64)> + '_ {
        Phase::ALL.iter().map(move |p| (*p, self.0[p.index()]))
    }

    pub fn scaled(&self, factor: f64) -> Self {
        let mut out = self.0;
        for v in &mut out {
            *v *= factor;
        }
        Self(out)
    }
}

impl Add for PhaseAmounts {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for PhaseAmounts {
    fn add_assign(&mut self, rhs: Self) {
        for i in 0..PHASE_COUNT {
            self.0[i] += rhs.0[i];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_sums_back_to_days() {
        let split = PhaseSplit::new([0.3, 0.2, 0.3, 0.2]);
        let amounts = split.allocate(17.3);
        assert!((amounts.total() - 17.3).abs() < 1e-12);
    }

    #[test]
    fn allocate_never_goes_negative_when_last_weight_is_zero() {
        let split = PhaseSplit::new([0.1, 0.7, 0.2, 0.0]);
        let amounts = split.allocate(0.3);
        assert!(amounts.get(Phase::ImplementationTraining) >= 0.0);
    }

    #[test]
    fn phases_are_ordered_by_index() {
        for (i, phase) in Phase::ALL.iter().enumerate() {
            assert_eq!(phase.index(), i);
        }
    }
}
