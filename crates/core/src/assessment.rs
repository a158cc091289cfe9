//! The assessment a clinician fills in on each render.
//!
//! An [`Assessment`] is never stored. Shells build one from the current form state, derive the
//! outputs they need and drop it.

use crate::constants::DATE_FORMAT;
use crate::error::{EcogError, EcogResult};
use crate::reference::EcogScore;
use chrono::NaiveDate;

/// Free-text patient name or identifier.
///
/// The text is kept exactly as entered. Only the empty string yields `None` from
/// [`PatientIdentifier::new`], so an empty field is absent rather than present-but-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientIdentifier(String);

impl PatientIdentifier {
    pub fn new(input: impl AsRef<str>) -> Option<Self> {
        let input = input.as_ref();
        if input.is_empty() {
            return None;
        }
        Some(Self(input.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PatientIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PatientIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One recorded ECOG assessment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub patient_identifier: Option<PatientIdentifier>,
    pub assessment_date: NaiveDate,
    pub selected_score: EcogScore,
}

impl Assessment {
    /// Creates an assessment dated today with no patient identifier.
    pub fn new(selected_score: EcogScore) -> Self {
        Self {
            patient_identifier: None,
            assessment_date: today(),
            selected_score,
        }
    }

    pub fn with_patient(mut self, patient: impl AsRef<str>) -> Self {
        self.patient_identifier = PatientIdentifier::new(patient);
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.assessment_date = date;
        self
    }

    /// Builds an assessment from raw shell input.
    ///
    /// Empty patient text means no identifier. A missing or blank date means today.
    ///
    /// # Errors
    ///
    /// - [`EcogError::OutOfRange`] if `score` is not on the scale.
    /// - [`EcogError::InvalidDate`] if `date` is not `YYYY-MM-DD`.
    pub fn from_input(patient: Option<&str>, date: Option<&str>, score: i64) -> EcogResult<Self> {
        let selected_score = EcogScore::new(score)?;
        let assessment_date = match date.map(str::trim).filter(|d| !d.is_empty()) {
            Some(text) => parse_date(text)?,
            None => today(),
        };

        Ok(Self {
            patient_identifier: patient.and_then(PatientIdentifier::new),
            assessment_date,
            selected_score,
        })
    }

    /// The assessment date as `YYYY-MM-DD`.
    pub fn formatted_date(&self) -> String {
        self.assessment_date.format(DATE_FORMAT).to_string()
    }
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`EcogError::InvalidDate`] if the text is not a valid calendar date in that format.
pub fn parse_date(text: &str) -> EcogResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| EcogError::InvalidDate(text.trim().to_owned()))
}

/// Today's date in the server's local time zone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
