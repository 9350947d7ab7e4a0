use super::domain::{AnswerRecord, SituationDetails, TimeFrame};

/// Raw 1-based menu selections plus free-text fields, as delivered by the
/// interview surface. The prompting layer guarantees every choice is a valid
/// index for its question, so the mappings below need no error path.
#[derive(Debug, Clone)]
pub struct SurveySelections {
    pub name: String,
    pub email: String,
    pub eviction_choice: usize,
    pub time_frame_choice: usize,
    pub transit_choice: usize,
    pub criminal_choice: usize,
    pub dependents_choice: usize,
    pub pets_choice: usize,
    pub income_choice: usize,
    pub combined_income_choice: usize,
    pub bedroom_choice: usize,
    pub bathroom_choice: usize,
    pub accessible_choice: usize,
    pub garage_choice: usize,
    pub situation: SituationDetails,
}

/// Approximate monthly income for the main income question.
/// 1 = 1,000-1,500 -> 1,250; 2 = 1,500-2,000 -> 1,750; 3 = over 2,000 -> 2,500.
pub fn income_from_choice(choice: usize) -> u32 {
    match choice {
        1 => 1250,
        2 => 1750,
        3 => 2500,
        _ => 0,
    }
}

/// Approximate monthly income for the combined income question. Choice 5
/// ("I do not combine income") bypasses the table entirely.
pub fn partner_income_from_choice(choice: usize) -> u32 {
    if choice == 5 {
        return 0;
    }
    match choice {
        1 => 750,
        2 => 1250,
        3 => 1750,
        4 => 2500,
        _ => 0,
    }
}

pub fn dependents_from_choice(choice: usize) -> u8 {
    match choice {
        1 => 0,
        2 => 1,
        3 => 2,
        _ => 3,
    }
}

pub fn pets_from_choice(choice: usize) -> u8 {
    match choice {
        1 => 0,
        2 => 1,
        _ => 2,
    }
}

/// Build the canonical answer record from raw selections. Incomes are
/// summed, the bedroom/bathroom options map directly to counts 1-4, and the
/// yes/no style questions derive their flag from the first option.
pub fn answers_from_selections(selections: SurveySelections) -> AnswerRecord {
    let SurveySelections {
        name,
        email,
        eviction_choice,
        time_frame_choice,
        transit_choice,
        criminal_choice,
        dependents_choice,
        pets_choice,
        income_choice,
        combined_income_choice,
        bedroom_choice,
        bathroom_choice,
        accessible_choice,
        garage_choice,
        situation,
    } = selections;

    let base_income = income_from_choice(income_choice);
    let partner_income = partner_income_from_choice(combined_income_choice);

    AnswerRecord {
        name,
        email,
        prior_eviction: eviction_choice == 1,
        time_frame: TimeFrame::from_choice(time_frame_choice),
        needs_transit: transit_choice == 1,
        criminal_record: criminal_choice == 1,
        dependents: dependents_from_choice(dependents_choice),
        pets: pets_from_choice(pets_choice),
        base_income,
        partner_income,
        total_income: base_income + partner_income,
        bedroom_pref: bedroom_choice as u32,
        bathroom_pref: bathroom_choice as u32,
        needs_accessible: accessible_choice == 1,
        needs_garage: garage_choice == 1,
        situation,
    }
}
