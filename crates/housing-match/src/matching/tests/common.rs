use crate::catalog::{AgencyRecord, BedroomsField};
use crate::matching::MatchEngine;
use crate::survey::{AnswerRecord, SituationDetails, StayLength, TimeFrame};

pub(super) fn engine() -> MatchEngine {
    MatchEngine::with_defaults()
}

pub(super) fn agency(
    name: &str,
    min_rent: u32,
    bedrooms: &str,
    pet_friendly: &str,
    tags: &[&str],
) -> AgencyRecord {
    AgencyRecord {
        organization: Some(name.to_string()),
        phone: Some("555-0100".to_string()),
        address: Some("1 Main St".to_string()),
        min_rent: Some(f64::from(min_rent)),
        max_rent: Some(f64::from(min_rent + 400)),
        bedrooms: Some(BedroomsField::Text(bedrooms.to_string())),
        pet_friendly: Some(pet_friendly.to_string()),
        match_tags: tags.iter().map(|tag| tag.to_string()).collect(),
        notes: None,
    }
}

pub(super) fn bare_agency() -> AgencyRecord {
    AgencyRecord {
        organization: None,
        phone: None,
        address: None,
        min_rent: None,
        max_rent: None,
        bedrooms: None,
        pet_friendly: None,
        match_tags: Vec::new(),
        notes: None,
    }
}

pub(super) fn respondent() -> AnswerRecord {
    AnswerRecord {
        name: "Jordan Example".to_string(),
        email: "jordan@example.com".to_string(),
        prior_eviction: false,
        time_frame: TimeFrame::WithinMonth,
        needs_transit: false,
        criminal_record: false,
        dependents: 0,
        pets: 0,
        base_income: 1250,
        partner_income: 0,
        total_income: 1250,
        bedroom_pref: 1,
        bathroom_pref: 1,
        needs_accessible: false,
        needs_garage: false,
        situation: SituationDetails::StayingWithFamily {
            description: String::new(),
            stay_length: StayLength::TwoToFiveMonths,
            contributes: true,
            has_permanent_plan: false,
            on_lease: false,
        },
    }
}

pub(super) fn unhoused_respondent() -> AnswerRecord {
    use crate::survey::{SleepLocation, UnhousedDuration};

    AnswerRecord {
        situation: SituationDetails::Unhoused {
            description: String::new(),
            duration: UnhousedDuration::UnderAYear,
            slept_last_night: SleepLocation::Shelter,
            has_case_manager: true,
        },
        ..respondent()
    }
}

pub(super) fn at_risk_respondent() -> AnswerRecord {
    use crate::survey::{LeaseLength, StorageNeeds};

    AnswerRecord {
        situation: SituationDetails::AtRisk {
            description: String::new(),
            lease_in_name: true,
            eviction_notice: false,
            behind_on_bills: true,
            wants_to_stay: false,
            lease_length: LeaseLength::Either,
            storage: StorageNeeds::FewItems,
        },
        ..respondent()
    }
}
