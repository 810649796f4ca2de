use std::sync::LazyLock;

use spectra_core::models::population::Population;

use crate::questionnaires::question_list;
use crate::{Question, Questionnaire};

/// AQ-10: ten-item Autism Spectrum Quotient, adult self-report.
/// Binary items; the fallback heuristic screens positive at 6+ yes answers.
pub struct Aq10;

impl Questionnaire for Aq10 {
    fn id(&self) -> &str {
        "aq10"
    }

    fn name(&self) -> &str {
        "AQ-10"
    }

    fn population(&self) -> Population {
        Population::Adult
    }

    fn screening_questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            question_list(&[
                ("A1", "I often notice small sounds when others do not"),
                (
                    "A2",
                    "I usually concentrate more on the whole picture, rather than the small details",
                ),
                ("A3", "I find it easy to do more than one thing at once"),
                (
                    "A4",
                    "If there is an interruption, I can switch back to what I was doing very quickly",
                ),
                (
                    "A5",
                    "I find it easy to read between the lines when someone is talking to me",
                ),
                (
                    "A6",
                    "I know how to tell if someone listening to me is getting bored",
                ),
                (
                    "A7",
                    "When I am reading a story, I find it difficult to work out the characters' intentions",
                ),
                (
                    "A8",
                    "I like to collect information about categories of things",
                ),
                (
                    "A9",
                    "I find it easy to work out what someone is thinking or feeling just by looking at their face",
                ),
                ("A10", "I find it difficult to work out people's intentions"),
            ])
        });
        &QUESTIONS
    }

    fn classification_questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            question_list(&[
                (
                    "Q1",
                    "Does the person require support to live independently?",
                ),
                (
                    "Q2",
                    "Does the person have difficulty with social communication?",
                ),
                (
                    "Q3",
                    "Does the person show repetitive behaviors or restricted interests?",
                ),
                ("Q4", "Does the person have sensory sensitivities?"),
                ("Q5", "Does the person need help with daily activities?"),
            ])
        });
        &QUESTIONS
    }

    fn screening_threshold(&self) -> usize {
        6
    }

    fn trait_axes(&self) -> [&'static str; 5] {
        [
            "Social Communication",
            "Repetitive Behaviors",
            "Sensory Processing",
            "Attention",
            "Executive Function",
        ]
    }
}
