use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative compatibility rating for a hardware combination.
///
/// The variant order is the rating order: `Poor < Limited < Good <
/// Excellent`. Serialized as the capitalized variant names to match the
/// remote evaluator's JSON contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CompatibilityLevel {
    Poor,
    Limited,
    Good,
    Excellent,
}

impl CompatibilityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompatibilityLevel::Poor => "Poor",
            CompatibilityLevel::Limited => "Limited",
            CompatibilityLevel::Good => "Good",
            CompatibilityLevel::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for CompatibilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one compatibility check, produced by either evaluator.
///
/// The JSON form uses camelCase keys (`recommendedVersions`) so the local
/// and remote evaluators are interchangeable behind the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub compatibility: CompatibilityLevel,
    pub issues: Vec<String>,
    pub recommended_versions: Vec<String>,
    pub tips: Vec<String>,
    pub summary: String,
}
