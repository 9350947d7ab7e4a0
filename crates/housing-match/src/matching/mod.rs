//! Scoring engine and ranker. Six independent rule groups score one
//! (agency, answers) pair into a signed total plus ordered reason strings;
//! the ranker applies the engine across the catalog and keeps the top N.

mod config;
mod ranker;
mod rules;

#[cfg(test)]
mod tests;

pub use config::MatchConfig;
pub use ranker::{rank, MatchResult};

use crate::catalog::AgencyRecord;
use crate::survey::AnswerRecord;
use serde::{Deserialize, Serialize};

/// Stateless scorer applying the configured thresholds to one agency.
pub struct MatchEngine {
    config: MatchConfig,
}

impl MatchEngine {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(MatchConfig::default())
    }

    pub fn score(&self, agency: &AgencyRecord, answers: &AnswerRecord) -> AgencyScore {
        let components = rules::score_agency(agency, answers, &self.config);
        let total = components.iter().map(|component| component.score).sum();
        AgencyScore { total, components }
    }
}

/// Discrete contribution from one fired rule branch, keeping the score
/// breakdown auditable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchComponent {
    pub group: RuleGroup,
    pub score: i32,
    pub reason: String,
}

/// The six rule groups, in evaluation order. Groups whose precondition does
/// not hold contribute neither score nor component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleGroup {
    Affordability,
    BedroomFit,
    Pets,
    FamilyTag,
    Accessibility,
    Situation,
}

/// Composite score for one (agency, answers) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgencyScore {
    pub total: i32,
    pub components: Vec<MatchComponent>,
}

impl AgencyScore {
    /// Reason strings in rule-group order, ready for display.
    pub fn reasons(&self) -> Vec<String> {
        self.components
            .iter()
            .map(|component| component.reason.clone())
            .collect()
    }
}
