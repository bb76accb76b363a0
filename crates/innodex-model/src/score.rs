use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

/// Coarse maturity band derived from the overall average score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema, Display, AsRefStr, EnumString,
)]
pub enum MaturityLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// A single submitted response: the value given for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub question_id: i32,
    pub value: u32,
}

impl Response {
    #[must_use]
    pub fn new(question_id: i32, value: u32) -> Self {
        Self { question_id, value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryScore {
    /// Sum of all answer values in the category
    pub score: u64,
    /// Category average rounded to two decimals
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub total_score: u64,
    pub average_score: f64,
    pub category: MaturityLevel,
    pub category_scores: BTreeMap<String, CategoryScore>,
}
