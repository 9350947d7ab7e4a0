//! Terminal interview surface. The prompter re-asks until it has a valid
//! 1-based selection, so downstream code only ever sees valid input.

use housing_match::survey::{
    answers_from_selections, AnswerRecord, HousingSituation, LeaseLength, SituationDetails,
    SleepLocation, StayLength, StorageNeeds, SurveySelections, UnhousedDuration,
};
use std::io::{self, BufRead, Write};

#[derive(Debug, thiserror::Error)]
pub(crate) enum InterviewError {
    /// The respondent ended input (EOF); treated as a clean cancellation.
    #[error("interview cancelled")]
    Cancelled,
    #[error("failed to read interview input: {0}")]
    Io(#[from] io::Error),
}

/// Seam between the interview flow and the terminal, so tests can drive the
/// full question sequence with scripted answers.
pub(crate) trait Prompter {
    /// Present a multiple-choice question and return a valid 1-based index.
    fn select(&mut self, question: &str, options: &[&str]) -> Result<usize, InterviewError>;
    /// Request one line of free text.
    fn text(&mut self, prompt: &str) -> Result<String, InterviewError>;
}

/// Stdin/stdout prompter used by the real survey run.
pub(crate) struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<io::StdinLock<'static>, io::Stdout> {
    pub(crate) fn stdio() -> Self {
        Self {
            input: io::stdin().lock(),
            output: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    fn read_line(&mut self) -> Result<String, InterviewError> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(InterviewError::Cancelled);
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn select(&mut self, question: &str, options: &[&str]) -> Result<usize, InterviewError> {
        writeln!(self.output, "\n{question}")?;
        for (index, option) in options.iter().enumerate() {
            writeln!(self.output, "{}. {option}", index + 1)?;
        }

        loop {
            write!(self.output, "Enter the number of your choice: ")?;
            self.output.flush()?;
            let line = self.read_line()?;
            if let Ok(choice) = line.parse::<usize>() {
                if (1..=options.len()).contains(&choice) {
                    return Ok(choice);
                }
            }
            writeln!(self.output, "Please enter a valid option number.")?;
        }
    }

    fn text(&mut self, prompt: &str) -> Result<String, InterviewError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }
}

/// Walk the full question sequence, branch into the situation-specific
/// section, and hand the raw selections to the normalizer.
pub(crate) fn run_interview(prompter: &mut dyn Prompter) -> Result<AnswerRecord, InterviewError> {
    let name = prompter.text("Your full name: ")?;
    let email = prompter.text("Your email: ")?;

    let eviction_choice = prompter.select(
        "Do you have a previous eviction on your record?",
        &["Yes", "No"],
    )?;

    let time_frame_choice = prompter.select(
        "How soon do you need housing?",
        &[
            "Within the week",
            "Within the month",
            "Within six months",
            "Within a year",
        ],
    )?;

    let transit_choice = prompter.select(
        "Do you need easy access to public transportation?",
        &[
            "Yes, I need close access to a bus or train",
            "I don't have to have it but it is helpful",
            "No, I have my own transportation",
        ],
    )?;

    let criminal_choice = prompter.select("Do you have a criminal record?", &["Yes", "No"])?;

    let dependents_choice = prompter.select(
        "Do you have dependents? If so, how many?",
        &["0", "1", "2", "3+"],
    )?;

    let pets_choice = prompter.select("Pet situation:", &["No pets", "1 pet", "2+ pets"])?;

    let income_choice = prompter.select(
        "Monthly income:",
        &[
            "In between 1,000-1,500",
            "In between 1,500-2,000",
            "Over 2,000",
        ],
    )?;

    let combined_income_choice = prompter.select(
        "If you combine income with someone who also works, what is their monthly income?",
        &[
            "Under 1,000",
            "1,000-1,500",
            "1,500-2,000",
            "Over 2,000",
            "I do not combine income",
        ],
    )?;

    let bedroom_choice = prompter.select("Bedroom amount preference:", &["1", "2", "3", "4"])?;
    let bathroom_choice = prompter.select("Bathroom preference:", &["1", "2", "3", "4"])?;

    let accessible_choice = prompter.select(
        "Do you need disability accessible housing?",
        &[
            "Yes, fully accessible (wheelchair, ramps, wide doors, valet trash)",
            "Not fully accessible (few stairs, grab railings, first floor)",
            "No, I do not",
        ],
    )?;

    let garage_choice = prompter.select("Do you need a garage?", &["Yes", "No"])?;

    let situation_choice = prompter.select(
        "Current housing situation:",
        &[
            "Currently unhoused",
            "At risk of losing housing",
            "Staying with friends or family",
        ],
    )?;

    let situation = match HousingSituation::from_choice(situation_choice) {
        HousingSituation::CurrentlyUnhoused => unhoused_section(prompter)?,
        HousingSituation::AtRiskOfLosingHousing => at_risk_section(prompter)?,
        HousingSituation::StayingWithFriendsOrFamily => staying_with_family_section(prompter)?,
    };

    Ok(answers_from_selections(SurveySelections {
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
    }))
}

fn unhoused_section(prompter: &mut dyn Prompter) -> Result<SituationDetails, InterviewError> {
    let description =
        prompter.text("\nIf you want, briefly describe your situation (optional): ")?;
    let duration_choice = prompter.select(
        "How long have you been without housing?",
        &["Under a year", "Over a year", "Over 5 years"],
    )?;
    let slept_choice = prompter.select(
        "Where did you sleep last night?",
        &["Shelter", "Outside", "Vehicle", "Motel"],
    )?;
    let case_manager_choice =
        prompter.select("Are you working with a case manager?", &["Yes", "No"])?;

    Ok(SituationDetails::Unhoused {
        description,
        duration: UnhousedDuration::from_choice(duration_choice),
        slept_last_night: SleepLocation::from_choice(slept_choice),
        has_case_manager: case_manager_choice == 1,
    })
}

fn at_risk_section(prompter: &mut dyn Prompter) -> Result<SituationDetails, InterviewError> {
    let description =
        prompter.text("\nIf you want, briefly describe your situation (optional): ")?;
    let lease_in_name_choice = prompter.select("Is the lease in your name?", &["Yes", "No"])?;
    let eviction_notice_choice =
        prompter.select("Have you received an eviction notice?", &["Yes", "No"])?;
    let behind_bills_choice =
        prompter.select("Are you behind on rent and/or utilities?", &["Yes", "No"])?;
    let want_stay_choice = prompter.select(
        "Do you want to stay at your place / make it work?",
        &["Yes", "No"],
    )?;
    let lease_length_choice = prompter.select(
        "How long of a lease are you looking for?",
        &["Over six months", "Over a year", "Either"],
    )?;
    let storage_choice = prompter.select(
        "Do you have anything in storage or need help moving your items?",
        &[
            "Yes, a lot of items",
            "Only a few items",
            "No, I don't have any items",
        ],
    )?;

    Ok(SituationDetails::AtRisk {
        description,
        lease_in_name: lease_in_name_choice == 1,
        eviction_notice: eviction_notice_choice == 1,
        behind_on_bills: behind_bills_choice == 1,
        wants_to_stay: want_stay_choice == 1,
        lease_length: LeaseLength::from_choice(lease_length_choice),
        storage: StorageNeeds::from_choice(storage_choice),
    })
}

fn staying_with_family_section(
    prompter: &mut dyn Prompter,
) -> Result<SituationDetails, InterviewError> {
    let description =
        prompter.text("\nIf you want, briefly describe your situation (optional): ")?;
    let stay_length_choice = prompter.select(
        "How long can you afford to stay there?",
        &["1-3 weeks", "2-5 months", "1 year or longer"],
    )?;
    let contribute_choice =
        prompter.select("Do you contribute to rent, food or utilities?", &["Yes", "No"])?;
    let perm_plan_choice =
        prompter.select("Do you have a plan for permanent housing?", &["Yes", "No"])?;
    let on_lease_choice = prompter.select("Are you on the lease?", &["Yes", "No"])?;

    Ok(SituationDetails::StayingWithFamily {
        description,
        stay_length: StayLength::from_choice(stay_length_choice),
        contributes: contribute_choice == 1,
        has_permanent_plan: perm_plan_choice == 1,
        on_lease: on_lease_choice == 1,
    })
}
