//! CSV export of a completed session: the respondent's answers plus the
//! ranked matches, written to one file named after the respondent.

use crate::matching::MatchResult;
use crate::survey::{AnswerRecord, SituationDetails};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to prepare export directory {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write results CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// File name like `Jordan_Example_jordan@example.com.csv`.
pub fn export_filename(name: &str, email: &str) -> String {
    let safe_name = name.trim().replace(char::is_whitespace, "_");
    format!("{safe_name}_{}.csv", email.trim())
}

/// Write the answer record and top matches to `dir`, returning the path of
/// the created file.
pub fn export_results(
    dir: &Path,
    answers: &AnswerRecord,
    matches: &[MatchResult<'_>],
) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(export_filename(&answers.name, &answers.email));
    // Sections have different widths (headers, key/value pairs, match
    // rows), so the writer must not enforce equal record lengths.
    let mut writer = csv::WriterBuilder::new().flexible(true).from_path(&path)?;

    writer.write_record(["User Information"])?;
    writer.write_record(["Name", &answers.name])?;
    writer.write_record(["Email", &answers.email])?;
    writer.write_record([
        "Generated",
        &Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    ])?;
    writer.write_record([""])?;

    writer.write_record(["Survey Answers"])?;
    for (key, value) in answer_rows(answers) {
        writer.write_record([key, value.as_str()])?;
    }
    writer.write_record([""])?;

    writer.write_record(["Top Housing Matches"])?;
    writer.write_record([
        "Rank",
        "Organization",
        "Score",
        "Phone",
        "Address",
        "Rent Range",
        "Bedrooms",
        "Pet Friendly",
        "Why it matched",
    ])?;

    for (index, result) in matches.iter().enumerate() {
        let agency = result.agency;
        writer.write_record([
            (index + 1).to_string().as_str(),
            agency.organization(),
            result.score.to_string().as_str(),
            agency.phone(),
            agency.address(),
            format!("{} - {}", agency.min_rent(), agency.max_rent()).as_str(),
            agency.bedrooms_label().as_str(),
            agency.pet_friendly_label(),
            result.reasons.join("; ").as_str(),
        ])?;
    }

    writer.flush().map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), matches = matches.len(), "results exported");
    Ok(path)
}

fn yes_no(flag: bool) -> String {
    if flag { "Yes" } else { "No" }.to_string()
}

fn answer_rows(answers: &AnswerRecord) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Previous eviction", yes_no(answers.prior_eviction)),
        ("Time frame", answers.time_frame.label().to_string()),
        ("Needs public transit", yes_no(answers.needs_transit)),
        ("Criminal record", yes_no(answers.criminal_record)),
        ("Dependents", answers.dependents.to_string()),
        ("Pets", answers.pets.to_string()),
        ("Base income", answers.base_income.to_string()),
        ("Partner income", answers.partner_income.to_string()),
        ("Total income", answers.total_income.to_string()),
        ("Bedroom preference", answers.bedroom_pref.to_string()),
        ("Bathroom preference", answers.bathroom_pref.to_string()),
        ("Needs accessible housing", yes_no(answers.needs_accessible)),
        ("Needs garage", yes_no(answers.needs_garage)),
        (
            "Current housing situation",
            answers.situation_kind().label().to_string(),
        ),
    ];

    match &answers.situation {
        SituationDetails::Unhoused {
            description,
            duration,
            slept_last_night,
            has_case_manager,
        } => {
            rows.push(("Situation description", description.clone()));
            rows.push(("Time without housing", duration.label().to_string()));
            rows.push(("Slept last night", slept_last_night.label().to_string()));
            rows.push(("Working with case manager", yes_no(*has_case_manager)));
        }
        SituationDetails::AtRisk {
            description,
            lease_in_name,
            eviction_notice,
            behind_on_bills,
            wants_to_stay,
            lease_length,
            storage,
        } => {
            rows.push(("Situation description", description.clone()));
            rows.push(("Lease in own name", yes_no(*lease_in_name)));
            rows.push(("Received eviction notice", yes_no(*eviction_notice)));
            rows.push(("Behind on rent/utilities", yes_no(*behind_on_bills)));
            rows.push(("Wants to stay", yes_no(*wants_to_stay)));
            rows.push(("Lease length wanted", lease_length.label().to_string()));
            rows.push(("Storage needs", storage.label().to_string()));
        }
        SituationDetails::StayingWithFamily {
            description,
            stay_length,
            contributes,
            has_permanent_plan,
            on_lease,
        } => {
            rows.push(("Situation description", description.clone()));
            rows.push(("Can stay for", stay_length.label().to_string()));
            rows.push(("Contributes to costs", yes_no(*contributes)));
            rows.push(("Has permanent housing plan", yes_no(*has_permanent_plan)));
            rows.push(("On the lease", yes_no(*on_lease)));
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AgencyRecord;

    #[test]
    fn writes_all_sections_despite_uneven_record_widths() {
        let answers = staying_answers();
        let agency = AgencyRecord {
            organization: Some("Open Door Housing".to_string()),
            phone: Some("555-0101".to_string()),
            address: Some("401 Oak Ave".to_string()),
            min_rent: Some(400.0),
            max_rent: Some(700.0),
            bedrooms: None,
            pet_friendly: Some("No".to_string()),
            match_tags: Vec::new(),
            notes: None,
        };
        let matches = vec![MatchResult {
            score: 7,
            agency: &agency,
            reasons: vec!["rent range roughly fits your income".to_string()],
        }];

        let dir = std::env::temp_dir().join(format!(
            "housing-match-export-{}-{}",
            std::process::id(),
            line!()
        ));
        let path = export_results(&dir, &answers, &matches).expect("export succeeds");
        let contents = std::fs::read_to_string(&path).expect("export file readable");

        // One-field section headers, two-field answers, nine-field matches.
        assert!(contents.contains("User Information"));
        assert!(contents.contains("Name,A B"));
        assert!(contents.contains("Top Housing Matches"));
        assert!(contents.contains("Open Door Housing"));

        std::fs::remove_dir_all(&dir).ok();
    }

    fn staying_answers() -> AnswerRecord {
        use crate::survey::{StayLength, TimeFrame};

        AnswerRecord {
            name: "A B".to_string(),
            email: "a@b.c".to_string(),
            prior_eviction: false,
            time_frame: TimeFrame::WithinWeek,
            needs_transit: true,
            criminal_record: false,
            dependents: 1,
            pets: 0,
            base_income: 1250,
            partner_income: 0,
            total_income: 1250,
            bedroom_pref: 2,
            bathroom_pref: 1,
            needs_accessible: false,
            needs_garage: false,
            situation: SituationDetails::StayingWithFamily {
                description: "short note".to_string(),
                stay_length: StayLength::OneToThreeWeeks,
                contributes: false,
                has_permanent_plan: true,
                on_lease: false,
            },
        }
    }

    #[test]
    fn filename_underscores_whitespace() {
        assert_eq!(
            export_filename("Michael Genitrini", "mg@example.com"),
            "Michael_Genitrini_mg@example.com.csv"
        );
    }

    #[test]
    fn answer_rows_include_situation_extension() {
        let rows = answer_rows(&staying_answers());
        assert!(rows
            .iter()
            .any(|(key, value)| *key == "Can stay for" && value == "1-3 weeks"));
        assert!(rows
            .iter()
            .any(|(key, value)| *key == "Current housing situation"
                && value == "Staying with friends or family"));
    }
}
