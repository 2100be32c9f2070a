//! Calendar projection of an estimate.

use serde::{Deserialize, Serialize};

use estimator_core::constants::WORKING_DAYS_PER_WEEK;
use estimator_core::EstimateResult;

use crate::rounding::round_to;

/// Duration in weeks, one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectTimeline {
    pub team_size: u32,
    /// One consultant working through the whole effort.
    pub sequential_weeks: f64,
    /// The effort shared evenly across the team. Equals `sequential_weeks`
    /// for a team of one.
    pub parallel_weeks: f64,
}

/// Project the estimate onto calendar weeks at five working days per week.
/// A `team_size` of zero is treated as one.
pub fn project_timeline(result: &EstimateResult, team_size: u32) -> ProjectTimeline {
    let team_size = team_size.max(1);
    let weeks = result.total_days / WORKING_DAYS_PER_WEEK;
    ProjectTimeline {
        team_size,
        sequential_weeks: round_to(weeks, 1),
        parallel_weeks: round_to(weeks / f64::from(team_size), 1),
    }
}
