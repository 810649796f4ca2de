//! Render one screening record into the report template.

use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;

use spectra_core::models::answer::Answer;
use spectra_core::models::record::ScreeningRecord;
use spectra_instruments::{questionnaire_for, Question, Questionnaire};

use crate::error::ReportError;
use crate::treatment::{MEDICAL_DISCLAIMER, TREATMENT_INFORMATION};

const REPORT_TEMPLATE: &str = include_str!("../templates/report.html");

#[derive(Debug, Serialize)]
struct QuestionRow {
    key: String,
    text: String,
    answer: &'static str,
    flagged: bool,
}

/// Everything the template needs, flattened from one record and its
/// population's questionnaire.
#[derive(Debug, Serialize)]
struct ReportView {
    title: String,
    screening_code: String,
    name: String,
    age: String,
    screening_type: String,
    date: String,
    positive: bool,
    headline: String,
    classification: Option<String>,
    screening_rows: Vec<QuestionRow>,
    classification_rows: Vec<QuestionRow>,
    treatment_information: &'static str,
    disclaimer: &'static str,
    generated_at: String,
}

impl ReportView {
    fn build(record: &ScreeningRecord, questionnaire: &dyn Questionnaire) -> Self {
        let positive = record.prediction.is_positive();
        let headline = if positive {
            questionnaire.positive_headline()
        } else {
            questionnaire.negative_headline()
        };

        let screening_rows = question_rows(
            questionnaire.screening_questions(),
            &record.responses.answers(),
        );
        let classification_rows = record
            .classification_responses
            .map(|responses| {
                question_rows(questionnaire.classification_questions(), &responses.answers())
            })
            .unwrap_or_default();

        Self {
            title: format!("{} Autism Screening Report", record.population.label()),
            screening_code: record.screening_code.clone(),
            name: record.name.clone(),
            age: record.age.to_string(),
            screening_type: format!("{} Assessment", record.population.label()),
            date: format_timestamp(record.created_at),
            positive,
            headline: headline.to_string(),
            classification: record.classification_result.map(|level| level.to_string()),
            screening_rows,
            classification_rows,
            treatment_information: TREATMENT_INFORMATION,
            disclaimer: MEDICAL_DISCLAIMER,
            generated_at: format_timestamp(jiff::Timestamp::now()),
        }
    }
}

fn question_rows(questions: &[Question], answers: &[Answer]) -> Vec<QuestionRow> {
    questions
        .iter()
        .zip(answers)
        .map(|(question, answer)| QuestionRow {
            key: question.key.clone(),
            text: question.text.clone(),
            answer: answer.label(),
            flagged: answer.is_yes(),
        })
        .collect()
}

fn format_timestamp(timestamp: jiff::Timestamp) -> String {
    timestamp.strftime("%B %d, %Y %H:%M UTC").to_string()
}

/// Render a self-contained HTML report for one reconciled record.
pub fn render_report(record: &ScreeningRecord) -> Result<String, ReportError> {
    let questionnaire = questionnaire_for(record.population);
    let view = ReportView::build(record, questionnaire.as_ref());

    let mut tera = Tera::default();
    tera.add_raw_template("report.html", REPORT_TEMPLATE)
        .map_err(|e| ReportError::TemplateParse(e.to_string()))?;

    let context = Context::from_value(serde_json::to_value(&view)?)
        .map_err(|e| ReportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render("report.html", &context)?;
    debug!(
        screening_code = %record.screening_code,
        bytes = rendered.len(),
        "report rendered"
    );
    Ok(rendered)
}
