//! Summary and clinical note rendering.
//!
//! Both renderings are pure functions of an [`Assessment`] and the static reference table.
//!
//! Summary (plain text):
//! ```text
//! Patient: <id>            (only when an identifier is present)
//! Date: <YYYY-MM-DD>
//! ECOG PS: <score>
//! Description: <text>
//! ```
//!
//! Clinical note:
//! ```text
//! Patient: <id>            (only when an identifier is present)
//! Date: <YYYY-MM-DD>       (only when an identifier is present)
//! ECOG Performance Status: <score> – <description>
//! ```

use crate::assessment::Assessment;
use crate::constants::{NOTE_PREFIX, SCORE_SEPARATOR};

/// A single labelled line of the summary block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub label: &'static str,
    pub value: String,
}

/// Ordered summary fields for one assessment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    lines: Vec<SummaryLine>,
}

impl Summary {
    pub fn from_assessment(assessment: &Assessment) -> Self {
        let mut lines = Vec::with_capacity(4);

        if let Some(patient) = &assessment.patient_identifier {
            lines.push(SummaryLine {
                label: "Patient",
                value: patient.as_str().to_owned(),
            });
        }
        lines.push(SummaryLine {
            label: "Date",
            value: assessment.formatted_date(),
        });
        lines.push(SummaryLine {
            label: "ECOG PS",
            value: assessment.selected_score.to_string(),
        });
        lines.push(SummaryLine {
            label: "Description",
            value: assessment.selected_score.description().to_owned(),
        });

        Self { lines }
    }

    pub fn lines(&self) -> &[SummaryLine] {
        &self.lines
    }

    /// One `Label: value` per line, no trailing newline.
    pub fn to_plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| format!("{}: {}", line.label, line.value))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `**Label:** value` paragraphs separated by blank lines.
    pub fn to_markdown(&self) -> String {
        self.lines
            .iter()
            .map(|line| format!("**{}:** {}", line.label, line.value))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Plain-text summary block for `assessment`.
pub fn format_summary(assessment: &Assessment) -> String {
    Summary::from_assessment(assessment).to_plain_text()
}

/// Copyable clinical note for `assessment`.
///
/// The date is only included alongside a patient identifier; an anonymous note is the single
/// `ECOG Performance Status: ...` line.
pub fn format_clinical_note(assessment: &Assessment) -> String {
    let score = assessment.selected_score;
    let base = format!(
        "{}{}{}{}",
        NOTE_PREFIX,
        score,
        SCORE_SEPARATOR,
        score.description()
    );

    match &assessment.patient_identifier {
        Some(patient) => {
            let mut note = String::new();
            note.push_str(&format!("Patient: {}\n", patient));
            note.push_str(&format!("Date: {}\n", assessment.formatted_date()));
            note.push_str(&base);
            note
        }
        None => base,
    }
}

/// Everything a presentation shell displays for one assessment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentReport {
    pub description: &'static str,
    pub summary: Summary,
    pub clinical_note: String,
}

impl AssessmentReport {
    pub fn from_assessment(assessment: &Assessment) -> Self {
        tracing::debug!(
            score = assessment.selected_score.value(),
            has_patient = assessment.patient_identifier.is_some(),
            "rendering ECOG assessment"
        );

        Self {
            description: assessment.selected_score.description(),
            summary: Summary::from_assessment(assessment),
            clinical_note: format_clinical_note(assessment),
        }
    }
}
