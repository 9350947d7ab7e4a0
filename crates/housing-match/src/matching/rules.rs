use super::config::MatchConfig;
use super::{MatchComponent, RuleGroup};
use crate::catalog::AgencyRecord;
use crate::survey::{AnswerRecord, HousingSituation};

/// Apply all six rule groups in fixed order, appending one component per
/// fired branch. Gated groups whose precondition is false are skipped
/// silently rather than recorded as zero.
pub(crate) fn score_agency(
    agency: &AgencyRecord,
    answers: &AnswerRecord,
    config: &MatchConfig,
) -> Vec<MatchComponent> {
    let mut components = Vec::new();

    affordability(agency, answers, config, &mut components);
    bedroom_fit(agency, answers, &mut components);
    pets(agency, answers, &mut components);
    family_tag(agency, answers, &mut components);
    accessibility(agency, answers, &mut components);
    situation_bonus(agency, answers, config, &mut components);

    components
}

fn push(components: &mut Vec<MatchComponent>, group: RuleGroup, score: i32, reason: &str) {
    components.push(MatchComponent {
        group,
        score,
        reason: reason.to_string(),
    });
}

/// Rule of thumb: about a third of monthly income goes to rent. Only
/// evaluated when the respondent reported any income at all.
fn affordability(
    agency: &AgencyRecord,
    answers: &AnswerRecord,
    config: &MatchConfig,
    components: &mut Vec<MatchComponent>,
) {
    if answers.total_income == 0 {
        return;
    }

    let budget_max = f64::from(answers.total_income) / config.budget_divisor;
    let min_rent = agency.min_rent();

    if min_rent <= budget_max {
        push(
            components,
            RuleGroup::Affordability,
            3,
            "rent range roughly fits your income",
        );
    } else if min_rent <= budget_max * config.budget_stretch {
        push(
            components,
            RuleGroup::Affordability,
            1,
            "rent is a bit high but possibly workable",
        );
    } else {
        push(
            components,
            RuleGroup::Affordability,
            -4,
            "rent may be too high for your income",
        );
    }
}

fn bedroom_fit(agency: &AgencyRecord, answers: &AnswerRecord, components: &mut Vec<MatchComponent>) {
    let (min_beds, max_beds) = agency.bedroom_range();
    let pref = i64::from(answers.bedroom_pref);

    if min_beds <= pref && pref <= max_beds {
        push(
            components,
            RuleGroup::BedroomFit,
            3,
            &format!("offers your preferred {} bedroom(s)", answers.bedroom_pref),
        );
    } else if pref == max_beds + 1 || pref == min_beds - 1 {
        // Adjacency on either side; for single-value ranges this checks
        // both neighbors of the one listed count.
        push(
            components,
            RuleGroup::BedroomFit,
            1,
            "bedroom count is close to what you want",
        );
    } else {
        push(
            components,
            RuleGroup::BedroomFit,
            -1,
            "bedroom count may not fit your preference",
        );
    }
}

/// The steep penalty reflects how often pet households get rejected.
fn pets(agency: &AgencyRecord, answers: &AnswerRecord, components: &mut Vec<MatchComponent>) {
    if answers.pets > 0 {
        if agency.is_pet_friendly() {
            push(components, RuleGroup::Pets, 2, "pet friendly");
        } else {
            push(components, RuleGroup::Pets, -6, "may not allow pets");
        }
    } else {
        push(
            components,
            RuleGroup::Pets,
            1,
            "no pets (usually easier approvals)",
        );
    }
}

/// Neutral when the tag is absent: no penalty branch, no reason.
fn family_tag(agency: &AgencyRecord, answers: &AnswerRecord, components: &mut Vec<MatchComponent>) {
    if answers.dependents > 0 && agency.has_tag("family-friendly") {
        push(
            components,
            RuleGroup::FamilyTag,
            2,
            "flagged as family-friendly",
        );
    }
}

fn accessibility(
    agency: &AgencyRecord,
    answers: &AnswerRecord,
    components: &mut Vec<MatchComponent>,
) {
    if !answers.needs_accessible {
        return;
    }

    if agency.has_tag("accessible") {
        push(
            components,
            RuleGroup::Accessibility,
            2,
            "may be more accessible-friendly",
        );
    } else {
        push(
            components,
            RuleGroup::Accessibility,
            -1,
            "accessibility features not clearly listed",
        );
    }
}

fn situation_bonus(
    agency: &AgencyRecord,
    answers: &AnswerRecord,
    config: &MatchConfig,
    components: &mut Vec<MatchComponent>,
) {
    match answers.situation_kind() {
        HousingSituation::CurrentlyUnhoused => {
            if agency.min_rent() <= f64::from(config.unhoused_rent_ceiling) {
                push(
                    components,
                    RuleGroup::Situation,
                    2,
                    "lower starting rent, possibly more reachable",
                );
            }
            if agency.has_tag("voucher-friendly") {
                push(
                    components,
                    RuleGroup::Situation,
                    3,
                    "tagged as voucher-friendly",
                );
            }
        }
        HousingSituation::AtRiskOfLosingHousing => {
            if agency.min_rent() <= f64::from(config.at_risk_rent_ceiling) {
                push(
                    components,
                    RuleGroup::Situation,
                    1,
                    "mid-range rent may help stabilize housing",
                );
            }
        }
        HousingSituation::StayingWithFriendsOrFamily => {}
    }
}
