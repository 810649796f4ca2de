use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The screened cohort. Determines the question set, the fallback
/// threshold, the age unit, and the remote prediction endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Population {
    Adult,
    Toddler,
}

impl Population {
    /// Lowercase wire form, also the `/predict/{population}` path segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Population::Adult => "adult",
            Population::Toddler => "toddler",
        }
    }

    /// Capitalized form for report headings.
    pub fn label(&self) -> &'static str {
        match self {
            Population::Adult => "Adult",
            Population::Toddler => "Toddler",
        }
    }
}

impl std::fmt::Display for Population {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subject age, in the unit the population's table records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SubjectAge {
    Years(u32),
    Months(u32),
}

impl SubjectAge {
    /// Wrap a raw age value in the unit the population uses.
    pub fn for_population(population: Population, value: u32) -> Self {
        match population {
            Population::Adult => SubjectAge::Years(value),
            Population::Toddler => SubjectAge::Months(value),
        }
    }
}

impl std::fmt::Display for SubjectAge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubjectAge::Years(n) => write!(f, "{n} years"),
            SubjectAge::Months(n) => write!(f, "{n} months"),
        }
    }
}
