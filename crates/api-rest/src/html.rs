//! Server-rendered HTML for the assessment form.
//!
//! The page is rebuilt from the query string on every submission. Radio inputs carry the bare
//! integer score as their value; the `"<score> – <description>"` text is only a label.

use ecog_core::constants::{ABOUT_TEXT, CAPTION, SELECTION_PROMPT, TITLE};
use ecog_core::{definitions, Assessment, AssessmentReport};
use html_escape::{encode_double_quoted_attribute, encode_text};

const STYLE: &str = "body{font-family:sans-serif;max-width:46rem;margin:2rem auto;padding:0 1rem}\
.caption{color:#555}\
.fields{display:flex;gap:1rem}\
.fields label{flex:1;display:flex;flex-direction:column}\
.option{display:block;margin:.4rem 0}\
.metric{font-size:2.5rem;font-weight:bold}\
pre{background:#f4f4f4;padding:1rem;white-space:pre-wrap}\
.error{color:#a00}";

fn page(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
<title>{title}</title>\n<style>{style}</style>\n</head>\n<body>\n\
<h1>{title}</h1>\n<p class=\"caption\">{caption}</p>\n{body}</body>\n</html>\n",
        title = encode_text(TITLE),
        style = STYLE,
        caption = encode_text(CAPTION),
        body = body,
    )
}

/// Renders the full form for the current `assessment`, with its result, summary and note.
pub fn render_form_page(assessment: &Assessment) -> String {
    let report = AssessmentReport::from_assessment(assessment);
    let mut body = String::new();

    body.push_str(&format!(
        "<details>\n<summary>About this tool</summary>\n<p>{}</p>\n</details>\n",
        encode_text(ABOUT_TEXT)
    ));

    body.push_str("<form method=\"get\" action=\"/\">\n");
    body.push_str("<h2>Patient Information (optional)</h2>\n<div class=\"fields\">\n");
    body.push_str(&format!(
        "<label>Patient name / ID <input type=\"text\" name=\"patient_id\" value=\"{}\"></label>\n",
        assessment
            .patient_identifier
            .as_ref()
            .map(|p| encode_double_quoted_attribute(p.as_str()).into_owned())
            .unwrap_or_default()
    ));
    body.push_str(&format!(
        "<label>Assessment date <input type=\"date\" name=\"assessment_date\" value=\"{}\"></label>\n",
        assessment.formatted_date()
    ));
    body.push_str("</div>\n<hr>\n");

    body.push_str("<h2>Select ECOG Performance Status</h2>\n<fieldset>\n");
    body.push_str(&format!("<legend>{}</legend>\n", encode_text(SELECTION_PROMPT)));
    for definition in definitions() {
        let checked = if definition.score == assessment.selected_score.value() {
            " checked"
        } else {
            ""
        };
        body.push_str(&format!(
            "<label class=\"option\"><input type=\"radio\" name=\"score\" value=\"{}\"{} \
onchange=\"this.form.submit()\"> {}</label>\n",
            definition.score,
            checked,
            encode_text(&definition.label())
        ));
    }
    body.push_str("</fieldset>\n<button type=\"submit\">Update</button>\n</form>\n");

    body.push_str("<h3>Result</h3>\n");
    body.push_str(&format!(
        "<div>{}</div>\n<div class=\"metric\">{}</div>\n",
        encode_text(TITLE),
        assessment.selected_score
    ));
    body.push_str(&format!(
        "<p><strong>Definition:</strong> {}</p>\n",
        encode_text(report.description)
    ));

    body.push_str("<h3>Summary</h3>\n");
    for line in report.summary.lines() {
        body.push_str(&format!(
            "<p><strong>{}:</strong> {}</p>\n",
            encode_text(line.label),
            encode_text(&line.value)
        ));
    }

    body.push_str("<h3>Copy for Clinical Notes</h3>\n");
    body.push_str(&format!(
        "<pre id=\"clinical-note\">{}</pre>\n",
        encode_text(&report.clinical_note)
    ));

    page(&body)
}

/// Renders an error page with a link back to a fresh form.
pub fn render_error_page(message: &str) -> String {
    page(&format!(
        "<p class=\"error\">{}</p>\n<p><a href=\"/\">Start again</a></p>\n",
        encode_text(message)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecog_core::EcogScore;

    #[test]
    fn test_patient_value_attribute_escapes_quotes() {
        let assessment =
            Assessment::new(EcogScore::new(0).unwrap()).with_patient(r#"O"Brien & <Co>"#);
        let html = render_form_page(&assessment);
        assert!(html.contains(r#"name="patient_id" value="O&quot;Brien &amp; &lt;Co&gt;""#));
        assert!(html.contains("<p><strong>Patient:</strong> O\"Brien &amp; &lt;Co&gt;</p>"));
    }

    #[test]
    fn test_form_checks_selected_score_only() {
        let assessment = Assessment::new(EcogScore::new(3).unwrap());
        let html = render_form_page(&assessment);
        assert!(html.contains("value=\"3\" checked"));
        assert_eq!(html.matches(" checked").count(), 1);
        assert_eq!(html.matches("type=\"radio\"").count(), 6);
    }

    #[test]
    fn test_form_shows_note_and_escapes_patient() {
        let assessment = Assessment::new(EcogScore::new(5).unwrap())
            .with_patient("<script>")
            .with_date(chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        let html = render_form_page(&assessment);
        assert!(!html.contains("<script>"));
        assert!(html.contains(
            "<pre id=\"clinical-note\">Patient: &lt;script&gt;\nDate: 2024-01-15\nECOG Performance Status: 5 – Dead.</pre>"
        ));
    }
}
