use crate::interview::{run_interview, InterviewError, TerminalPrompter};
use crate::render::render_matches;
use clap::{Args, Parser, Subcommand};
use housing_match::catalog::load_catalog;
use housing_match::config::AppConfig;
use housing_match::error::AppError;
use housing_match::export::export_results;
use housing_match::matching::{rank, MatchEngine};
use housing_match::survey::{
    answers_from_selections, SituationDetails, SleepLocation, SurveySelections, UnhousedDuration,
};
use housing_match::telemetry;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Housing Matching Survey",
    about = "Interview a respondent and rank the housing agencies most likely to fit",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the interactive survey, rank the catalog, and export the results
    /// (default command)
    Survey(SurveyArgs),
    /// Score a canned respondent against the catalog without prompting
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
struct SurveyArgs {
    /// Override the configured catalog path
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Override the configured number of matches to report
    #[arg(long)]
    top: Option<usize>,
    /// Override the configured export directory
    #[arg(long)]
    export_dir: Option<PathBuf>,
    /// Skip writing the results CSV
    #[arg(long)]
    skip_export: bool,
}

#[derive(Args, Debug, Default)]
struct DemoArgs {
    /// Override the configured catalog path
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Override the configured number of matches to report
    #[arg(long)]
    top: Option<usize>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "configuration loaded");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Survey(SurveyArgs::default()));

    match command {
        Command::Survey(args) => run_survey(args, config),
        Command::Demo(args) => run_demo(args, config),
    }
}

fn run_survey(args: SurveyArgs, config: AppConfig) -> Result<(), AppError> {
    let catalog_path = args.catalog.unwrap_or(config.catalog.path);
    let top_n = args.top.unwrap_or(config.matching.top_n);
    let export_dir = args.export_dir.unwrap_or(config.export.dir);

    let catalog = load_catalog(&catalog_path)?;

    println!("=== Housing Matching Survey ===");
    let mut prompter = TerminalPrompter::stdio();
    let answers = match run_interview(&mut prompter) {
        Ok(answers) => answers,
        Err(InterviewError::Cancelled) => {
            // No partial export on cancellation.
            println!("\nExiting.");
            return Ok(());
        }
        Err(InterviewError::Io(err)) => return Err(AppError::Io(err)),
    };

    info!(
        situation = answers.situation_kind().label(),
        total_income = answers.total_income,
        "interview complete"
    );

    let engine = MatchEngine::with_defaults();
    let matches = rank(&engine, &catalog, &answers, top_n);
    render_matches(&matches);

    if args.skip_export {
        return Ok(());
    }

    let path = export_results(&export_dir, &answers, &matches)?;
    println!("\nSaved results to CSV file: {}", path.display());
    println!("\n(Scoring is approximate. Rent ranges, tags, and weights can be tuned.)");

    Ok(())
}

fn run_demo(args: DemoArgs, config: AppConfig) -> Result<(), AppError> {
    let catalog_path = args.catalog.unwrap_or(config.catalog.path);
    let top_n = args.top.unwrap_or(config.matching.top_n);

    let catalog = load_catalog(&catalog_path)?;
    let answers = answers_from_selections(demo_selections());

    println!("Housing match demo (canned respondent, no prompts)");
    println!(
        "Respondent: {} | income {} | {} bedroom(s) | situation: {}",
        answers.name,
        answers.total_income,
        answers.bedroom_pref,
        answers.situation_kind().label()
    );

    let engine = MatchEngine::with_defaults();
    let matches = rank(&engine, &catalog, &answers, top_n);
    render_matches(&matches);

    println!("\nScore breakdown for the top match:");
    if let Some(top) = matches.first() {
        let outcome = engine.score(top.agency, &answers);
        for component in &outcome.components {
            println!(
                "  - {:?}: {} ({})",
                component.group, component.score, component.reason
            );
        }
    } else {
        println!("  (catalog was empty)");
    }

    Ok(())
}

fn demo_selections() -> SurveySelections {
    SurveySelections {
        name: "Demo Respondent".to_string(),
        email: "demo@example.com".to_string(),
        eviction_choice: 2,
        time_frame_choice: 1,
        transit_choice: 1,
        criminal_choice: 2,
        dependents_choice: 2,
        pets_choice: 2,
        income_choice: 1,
        combined_income_choice: 5,
        bedroom_choice: 2,
        bathroom_choice: 1,
        accessible_choice: 3,
        garage_choice: 2,
        situation: SituationDetails::Unhoused {
            description: "Staying at the downtown shelter".to_string(),
            duration: UnhousedDuration::UnderAYear,
            slept_last_night: SleepLocation::Shelter,
            has_case_manager: true,
        },
    }
}
