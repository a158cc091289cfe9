//! JSON wire types for the ECOG API.
//!
//! These mirror the core domain types but use plain strings and integers so they can be
//! documented with OpenAPI and produced by any shell.

use ecog_core::{Assessment, AssessmentReport, EcogResult, ScoreDefinition};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

/// One reference table entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScoreDefinitionRes {
    pub score: u8,
    pub description: String,
    /// `"<score> – <description>"`, as shown in selection lists.
    pub label: String,
}

impl From<&ScoreDefinition> for ScoreDefinitionRes {
    fn from(definition: &ScoreDefinition) -> Self {
        Self {
            score: definition.score,
            description: definition.description.to_owned(),
            label: definition.label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListScoresRes {
    pub scores: Vec<ScoreDefinitionRes>,
}

/// Assessment input. Empty or missing `patient_identifier` means none; missing
/// `assessment_date` means today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AssessmentReq {
    #[serde(default)]
    pub patient_identifier: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub assessment_date: Option<String>,
    pub score: i64,
}

impl AssessmentReq {
    /// Validates the request into a core [`Assessment`].
    ///
    /// # Errors
    ///
    /// Propagates `OutOfRange` and `InvalidDate` from the core.
    pub fn to_assessment(&self) -> EcogResult<Assessment> {
        Assessment::from_input(
            self.patient_identifier.as_deref(),
            self.assessment_date.as_deref(),
            self.score,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AssessmentRes {
    pub score: u8,
    pub description: String,
    pub assessment_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_identifier: Option<String>,
    pub summary: String,
    pub summary_markdown: String,
    pub clinical_note: String,
}

impl AssessmentRes {
    pub fn from_assessment(assessment: &Assessment) -> Self {
        let report = AssessmentReport::from_assessment(assessment);
        Self {
            score: assessment.selected_score.value(),
            description: report.description.to_owned(),
            assessment_date: assessment.formatted_date(),
            patient_identifier: assessment
                .patient_identifier
                .as_ref()
                .map(|p| p.as_str().to_owned()),
            summary: report.summary.to_plain_text(),
            summary_markdown: report.summary.to_markdown(),
            clinical_note: report.clinical_note,
        }
    }
}
