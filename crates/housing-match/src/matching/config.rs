use serde::{Deserialize, Serialize};

/// Thresholds used by the scoring rule groups. The defaults are the fixed
/// heuristic weights the survey ships with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Monthly income is divided by this to get the rent budget ceiling.
    pub budget_divisor: f64,
    /// Multiplier above the ceiling still considered workable.
    pub budget_stretch: f64,
    /// Min rent at or below this earns the unhoused reachability bonus.
    pub unhoused_rent_ceiling: u32,
    /// Min rent at or below this earns the at-risk stabilization bonus.
    pub at_risk_rent_ceiling: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            budget_divisor: 3.0,
            budget_stretch: 1.2,
            unhoused_rent_ceiling: 1100,
            at_risk_rent_ceiling: 1300,
        }
    }
}
