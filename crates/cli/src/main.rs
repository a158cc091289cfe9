use std::process::ExitCode;

use api_shared::AssessmentRes;
use clap::{Args, Parser, Subcommand};
use ecog_core::{
    definitions, format_clinical_note, get_description, Assessment, EcogResult, Summary,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ecog")]
#[command(about = "ECOG Performance Status recorder CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Assessment fields shared by the rendering commands
#[derive(Args, Debug, Clone, PartialEq, Eq)]
struct AssessmentArgs {
    /// ECOG score (0-5)
    #[arg(allow_negative_numbers = true)]
    score: i64,
    /// Patient name / ID (optional)
    #[arg(long)]
    patient: Option<String>,
    /// Assessment date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    date: Option<String>,
}

impl AssessmentArgs {
    fn to_assessment(&self) -> EcogResult<Assessment> {
        Assessment::from_input(self.patient.as_deref(), self.date.as_deref(), self.score)
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// List the ECOG reference table
    Scores,
    /// Print the definition for a score
    Describe {
        /// ECOG score (0-5)
        #[arg(allow_negative_numbers = true)]
        score: i64,
    },
    /// Print the copyable clinical note
    Note(AssessmentArgs),
    /// Print the summary block
    Summary {
        #[command(flatten)]
        assessment: AssessmentArgs,
        /// Render as markdown instead of plain text
        #[arg(long)]
        markdown: bool,
    },
    /// Print the full assessment as JSON
    Report(AssessmentArgs),
}

fn run(command: Commands) -> anyhow::Result<String> {
    match command {
        Commands::Scores => Ok(definitions()
            .iter()
            .map(|d| d.label())
            .collect::<Vec<_>>()
            .join("\n")),
        Commands::Describe { score } => Ok(get_description(score)?.to_owned()),
        Commands::Note(args) => Ok(format_clinical_note(&args.to_assessment()?)),
        Commands::Summary {
            assessment,
            markdown,
        } => {
            let summary = Summary::from_assessment(&assessment.to_assessment()?);
            Ok(if markdown {
                summary.to_markdown()
            } else {
                summary.to_plain_text()
            })
        }
        Commands::Report(args) => {
            let res = AssessmentRes::from_assessment(&args.to_assessment()?);
            Ok(serde_json::to_string_pretty(&res)?)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Use 'ecog --help' for commands");
        return ExitCode::SUCCESS;
    };

    match run(command) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecog_core::EcogError;

    fn parse(args: &[&str]) -> Commands {
        Cli::try_parse_from(args).unwrap().command.unwrap()
    }

    #[test]
    fn test_parse_note_with_options() {
        let command = parse(&["ecog", "note", "2", "--patient", "Jane Doe", "--date", "2024-01-15"]);
        assert_eq!(
            command,
            Commands::Note(AssessmentArgs {
                score: 2,
                patient: Some("Jane Doe".into()),
                date: Some("2024-01-15".into()),
            })
        );
    }

    #[test]
    fn test_run_note_matches_formatter() {
        let output = run(parse(&["ecog", "note", "0", "--date", "2024-01-15"])).unwrap();
        assert_eq!(
            output,
            "ECOG Performance Status: 0 – Fully active, able to carry on all pre-disease performance without restriction."
        );
    }

    #[test]
    fn test_run_describe_rejects_negative_score() {
        let err = run(parse(&["ecog", "describe", "-1"])).unwrap_err();
        assert_eq!(
            err.downcast_ref::<EcogError>(),
            Some(&EcogError::OutOfRange { score: -1 })
        );
    }

    #[test]
    fn test_run_scores_lists_six_labels() {
        let output = run(Commands::Scores).unwrap();
        assert_eq!(output.lines().count(), 6);
        assert!(output.ends_with("5 – Dead."));
    }

    #[test]
    fn test_run_summary_markdown() {
        let output = run(parse(&[
            "ecog", "summary", "5", "--date", "2024-01-15", "--markdown",
        ]))
        .unwrap();
        assert_eq!(
            output,
            "**Date:** 2024-01-15\n\n**ECOG PS:** 5\n\n**Description:** Dead."
        );
    }

    #[test]
    fn test_run_report_is_json() {
        let output = run(parse(&["ecog", "report", "3", "--patient", "MRN-7"])).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["score"], 3);
        assert_eq!(json["patient_identifier"], "MRN-7");
    }
}
