use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One actionable recommendation recovered from the model's reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: String,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub expected_impact: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditRating {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Below Average")]
    BelowAverage,
    Poor,
}

impl fmt::Display for CreditRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CreditRating::Excellent => "Excellent",
            CreditRating::Good => "Good",
            CreditRating::Fair => "Fair",
            CreditRating::BelowAverage => "Below Average",
            CreditRating::Poor => "Poor",
        };
        f.write_str(label)
    }
}

/// Proxy credit-score figure (0-850) derived from the health and risk
/// scores, with its rating band and contributing factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creditworthiness {
    pub score: u32,
    pub rating: CreditRating,
    pub factors: Vec<String>,
}

/// The structured analysis recovered from one prompt/response cycle. A
/// fresh, replaceable snapshot owned by the caller; the engine never merges
/// or versions prior results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    pub creditworthiness: Creditworthiness,
}
