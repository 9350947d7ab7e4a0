use super::MatchEngine;
use crate::catalog::AgencyRecord;
use crate::survey::AnswerRecord;
use tracing::debug;

/// One ranked match: the signed score, the catalog record it applies to,
/// and the display-ready justification strings. Recomputed per run, never
/// persisted on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult<'a> {
    pub score: i32,
    pub agency: &'a AgencyRecord,
    pub reasons: Vec<String>,
}

/// Score every agency in the catalog and return the top `top_n` by score,
/// descending. The sort is stable, so tied agencies keep their catalog
/// order; negative scores are still eligible. Deterministic for identical
/// inputs.
pub fn rank<'a>(
    engine: &MatchEngine,
    agencies: &'a [AgencyRecord],
    answers: &AnswerRecord,
    top_n: usize,
) -> Vec<MatchResult<'a>> {
    let mut results: Vec<MatchResult<'a>> = agencies
        .iter()
        .map(|agency| {
            let scored = engine.score(agency, answers);
            debug!(
                agency = agency.organization(),
                score = scored.total,
                "scored agency"
            );
            MatchResult {
                score: scored.total,
                agency,
                reasons: scored.reasons(),
            }
        })
        .collect();

    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(top_n);
    results
}
