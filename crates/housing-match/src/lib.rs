//! Core library for the housing match survey: canonical answer records,
//! the agency catalog with its permissive field parsing, the weighted
//! scoring engine and ranker, and CSV export of a completed session.

pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod matching;
pub mod survey;
pub mod telemetry;
