use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// DSM-5-style support level. Persisted and displayed as the full label,
/// e.g. `"Level 2 (Requiring Substantial Support)"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SupportLevel {
    #[serde(rename = "Level 1 (Requiring Support)")]
    Level1,
    #[serde(rename = "Level 2 (Requiring Substantial Support)")]
    Level2,
    #[serde(rename = "Level 3 (Requiring Very Substantial Support)")]
    Level3,
}

impl SupportLevel {
    /// Tier boundaries over the five classification answers:
    /// 4–5 yes → Level 3, 2–3 → Level 2, 0–1 → Level 1.
    pub fn from_yes_count(count: usize) -> Self {
        if count >= 4 {
            SupportLevel::Level3
        } else if count >= 2 {
            SupportLevel::Level2
        } else {
            SupportLevel::Level1
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SupportLevel::Level1 => "Level 1 (Requiring Support)",
            SupportLevel::Level2 => "Level 2 (Requiring Substantial Support)",
            SupportLevel::Level3 => "Level 3 (Requiring Very Substantial Support)",
        }
    }
}

impl std::fmt::Display for SupportLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Five labeled trait axes backing the radar chart, values in 1..=5.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TraitProfile {
    pub labels: Vec<String>,
    pub values: Vec<u8>,
}

/// The outcome of the classification questionnaire: a support level plus
/// the trait profile used to render it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClassificationResult {
    pub level: SupportLevel,
    pub profile: TraitProfile,
}
