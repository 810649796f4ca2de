use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::answer::Answer;

/// A complete set of the ten screening answers, A1 through A10.
///
/// Fully populated by construction: the only fallible way in is
/// [`ScreeningResponses::from_map`], which rejects partial input.
/// Serializes to the wire map the inference service expects
/// (`{"A1": "yes", ...}`). Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningResponses {
    #[serde(rename = "A1")]
    pub a1: Answer,
    #[serde(rename = "A2")]
    pub a2: Answer,
    #[serde(rename = "A3")]
    pub a3: Answer,
    #[serde(rename = "A4")]
    pub a4: Answer,
    #[serde(rename = "A5")]
    pub a5: Answer,
    #[serde(rename = "A6")]
    pub a6: Answer,
    #[serde(rename = "A7")]
    pub a7: Answer,
    #[serde(rename = "A8")]
    pub a8: Answer,
    #[serde(rename = "A9")]
    pub a9: Answer,
    #[serde(rename = "A10")]
    pub a10: Answer,
}

impl ScreeningResponses {
    pub const KEYS: [&'static str; 10] = [
        "A1", "A2", "A3", "A4", "A5", "A6", "A7", "A8", "A9", "A10",
    ];

    /// Build from a draft answer map, rejecting partial input.
    /// Returns the missing question keys, in question order.
    pub fn from_map(answers: &BTreeMap<String, Answer>) -> Result<Self, Vec<&'static str>> {
        let missing: Vec<&'static str> = Self::KEYS
            .iter()
            .copied()
            .filter(|k| !answers.contains_key(*k))
            .collect();
        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(Self {
            a1: answers["A1"],
            a2: answers["A2"],
            a3: answers["A3"],
            a4: answers["A4"],
            a5: answers["A5"],
            a6: answers["A6"],
            a7: answers["A7"],
            a8: answers["A8"],
            a9: answers["A9"],
            a10: answers["A10"],
        })
    }

    /// Answers in question order, A1 first.
    pub fn answers(&self) -> [Answer; 10] {
        [
            self.a1, self.a2, self.a3, self.a4, self.a5, self.a6, self.a7, self.a8, self.a9,
            self.a10,
        ]
    }

    pub fn get(&self, key: &str) -> Option<Answer> {
        Self::KEYS
            .iter()
            .position(|k| *k == key)
            .map(|i| self.answers()[i])
    }

    pub fn yes_count(&self) -> usize {
        self.answers().iter().filter(|a| a.is_yes()).count()
    }
}

/// A complete set of the five classification answers, Q1 through Q5.
/// Same construction discipline as [`ScreeningResponses`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClassificationResponses {
    #[serde(rename = "Q1")]
    pub q1: Answer,
    #[serde(rename = "Q2")]
    pub q2: Answer,
    #[serde(rename = "Q3")]
    pub q3: Answer,
    #[serde(rename = "Q4")]
    pub q4: Answer,
    #[serde(rename = "Q5")]
    pub q5: Answer,
}

impl ClassificationResponses {
    pub const KEYS: [&'static str; 5] = ["Q1", "Q2", "Q3", "Q4", "Q5"];

    /// Build from a draft answer map, rejecting partial input.
    /// Returns the missing question keys, in question order.
    pub fn from_map(answers: &BTreeMap<String, Answer>) -> Result<Self, Vec<&'static str>> {
        let missing: Vec<&'static str> = Self::KEYS
            .iter()
            .copied()
            .filter(|k| !answers.contains_key(*k))
            .collect();
        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(Self {
            q1: answers["Q1"],
            q2: answers["Q2"],
            q3: answers["Q3"],
            q4: answers["Q4"],
            q5: answers["Q5"],
        })
    }

    /// Answers in question order, Q1 first.
    pub fn answers(&self) -> [Answer; 5] {
        [self.q1, self.q2, self.q3, self.q4, self.q5]
    }

    pub fn get(&self, key: &str) -> Option<Answer> {
        Self::KEYS
            .iter()
            .position(|k| *k == key)
            .map(|i| self.answers()[i])
    }

    pub fn yes_count(&self) -> usize {
        self.answers().iter().filter(|a| a.is_yes()).count()
    }
}
