//! Respondent-facing survey model: the canonical answer record built once
//! per session and the normalizer that maps raw menu selections onto it.

pub mod domain;
pub mod normalizer;

pub use domain::{
    AnswerRecord, HousingSituation, LeaseLength, SituationDetails, SleepLocation, StayLength,
    StorageNeeds, TimeFrame, UnhousedDuration,
};
pub use normalizer::{answers_from_selections, SurveySelections};
