//! Constants used throughout the ECOG core crate.
//!
//! Display strings live here so the HTTP form, the CLI and the note formatter agree on them.

/// Lowest score on the ECOG Performance Status scale.
pub const MIN_SCORE: u8 = 0;

/// Highest score on the ECOG Performance Status scale.
pub const MAX_SCORE: u8 = 5;

/// `chrono` format string for assessment dates in summaries and notes.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Separator between a score and its description in notes and radio labels (en dash).
pub const SCORE_SEPARATOR: &str = " – ";

/// Page and metric title.
pub const TITLE: &str = "ECOG Performance Status";

/// Caption shown under the title.
pub const CAPTION: &str = "Eastern Cooperative Oncology Group (ECOG) Performance Status Scale";

/// Prompt shown above the list of score definitions.
pub const SELECTION_PROMPT: &str = "Choose the statement that best describes the patient:";

/// Disclaimer shown in the "About this tool" section.
pub const ABOUT_TEXT: &str = "This tool helps you record and document a patient's ECOG \
Performance Status. It does not provide medical advice or replace clinical judgment.";

/// Prefix of the base clinical note line.
pub const NOTE_PREFIX: &str = "ECOG Performance Status: ";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_text_disclaims_clinical_judgment() {
        assert!(ABOUT_TEXT.ends_with("replace clinical judgment."));
    }
}
