use crate::score::MaturityLevel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryReport {
    pub name: String,
    pub score: u64,
    pub max_score: u64,
    pub average: f64,
    /// Share of the attainable points, 0 to 100
    pub percentage: f64,
}

/// Presentation view of an assessment as rendered by the results page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub assessment_id: Uuid,
    /// Overall result on a 0 to 10 scale
    #[schema(example = 9.0)]
    pub overall_score: f64,
    pub category: MaturityLevel,
    pub summary: String,
    pub category_scores: Vec<CategoryReport>,
    pub recommendations: Vec<String>,
}
