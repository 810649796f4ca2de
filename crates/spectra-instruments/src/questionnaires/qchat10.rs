use std::sync::LazyLock;

use spectra_core::models::population::Population;

use crate::questionnaires::question_list;
use crate::{Question, Questionnaire};

/// Q-CHAT-10: ten-item Quantitative Checklist for Autism in Toddlers,
/// caregiver-report. Screens more sensitively than the adult instrument:
/// the fallback heuristic is positive at 3+ yes answers.
pub struct QChat10;

impl Questionnaire for QChat10 {
    fn id(&self) -> &str {
        "qchat10"
    }

    fn name(&self) -> &str {
        "Q-CHAT-10"
    }

    fn population(&self) -> Population {
        Population::Toddler
    }

    fn screening_questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            question_list(&[
                (
                    "A1",
                    "Does your child look at you when you call his/her name?",
                ),
                (
                    "A2",
                    "How easy is it for you to get eye contact with your child?",
                ),
                (
                    "A3",
                    "Does your child point to indicate that s/he wants something?",
                ),
                ("A4", "Does your child point to share interest with you?"),
                (
                    "A5",
                    "Does your child pretend (e.g., care for dolls, talk on phone)?",
                ),
                ("A6", "Does your child follow where you're looking?"),
                (
                    "A7",
                    "If you or someone else in the family is visibly upset, does your child show signs of wanting to comfort them?",
                ),
                (
                    "A8",
                    "Would you describe your child's first words as normal?",
                ),
                (
                    "A9",
                    "Does your child use simple gestures (e.g., wave goodbye)?",
                ),
                (
                    "A10",
                    "Does your child stare at nothing with no apparent purpose?",
                ),
            ])
        });
        &QUESTIONS
    }

    fn classification_questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            question_list(&[
                (
                    "Q1",
                    "Does the child need extensive support with daily activities?",
                ),
                (
                    "Q2",
                    "Does the child have significant communication challenges?",
                ),
                (
                    "Q3",
                    "Does the child display intense repetitive behaviors?",
                ),
                ("Q4", "Does the child have extreme sensory reactions?"),
                ("Q5", "Does the child require constant supervision?"),
            ])
        });
        &QUESTIONS
    }

    fn screening_threshold(&self) -> usize {
        3
    }

    fn trait_axes(&self) -> [&'static str; 5] {
        [
            "Social Communication",
            "Repetitive Behaviors",
            "Sensory Processing",
            "Attention",
            "Developmental Milestones",
        ]
    }
}
