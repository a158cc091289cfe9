//! # ECOG Core
//!
//! Score reference table and note formatter for the ECOG Performance Status recorder.
//!
//! This crate contains pure data operations only:
//! - The fixed six-entry reference table ([`reference`])
//! - The per-render [`Assessment`] input
//! - Summary and clinical note rendering ([`note`])
//!
//! **No presentation concerns**: HTML forms, HTTP servers and command-line parsing belong in
//! `api-rest`, `api-shared` or `ecog-cli`.

pub mod assessment;
pub mod constants;
pub mod error;
pub mod note;
pub mod reference;

pub use assessment::{parse_date, today, Assessment, PatientIdentifier};
pub use error::{EcogError, EcogResult};
pub use note::{format_clinical_note, format_summary, AssessmentReport, Summary, SummaryLine};
pub use reference::{definitions, get_description, EcogScore, ScoreDefinition, ECOG_DEFINITIONS};
